// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::Vec3;

/// A held movement key, expressed along the node's local axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Local-space unit step. Left is +X: the node's right axis points to
    /// screen left for a camera looking down +Z.
    pub fn unit(self) -> Vec3 {
        match self {
            Direction::Forward => Vec3::Z,
            Direction::Back => -Vec3::Z,
            Direction::Left => Vec3::X,
            Direction::Right => -Vec3::X,
            Direction::Up => Vec3::Y,
            Direction::Down => -Vec3::Y,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Set of movement directions currently held, sampled once per tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveIntents {
    held: [bool; 6],
}

impl MoveIntents {
    pub fn press(&mut self, direction: Direction) {
        self.held[direction.index()] = true;
    }

    pub fn release(&mut self, direction: Direction) {
        self.held[direction.index()] = false;
    }

    pub fn clear(&mut self) {
        self.held = [false; 6];
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held[direction.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.held.iter().any(|&h| h)
    }

    /// Velocity increment for one tick: every held direction contributes `speed`.
    pub fn scalar_delta(&self, speed: f32) -> Vec3 {
        Direction::ALL
            .iter()
            .filter(|d| self.is_held(**d))
            .map(|d| d.unit() * speed)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_delta() {
        let intents = MoveIntents::default();
        assert!(intents.is_empty());
        assert_eq!(intents.scalar_delta(1.0), Vec3::ZERO);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut intents = MoveIntents::default();
        intents.press(Direction::Forward);
        intents.press(Direction::Back);
        intents.press(Direction::Up);
        assert_eq!(intents.scalar_delta(2.0), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_release_and_clear() {
        let mut intents = MoveIntents::default();
        intents.press(Direction::Left);
        intents.press(Direction::Down);
        intents.release(Direction::Left);
        assert!(!intents.is_held(Direction::Left));
        assert_eq!(intents.scalar_delta(0.5), Vec3::new(0.0, -0.5, 0.0));
        intents.clear();
        assert!(intents.is_empty());
    }
}
