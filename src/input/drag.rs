// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

/// Velocity impulse produced by one cursor move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragImpulse {
    /// `x` feeds pitch, `y` feeds yaw.
    Rotate(Vec2),
    Translate(Vec3),
}

/// Turns cursor movement into velocity impulses while a button is held.
///
/// Left drag rotates, right drag pans. Holding Ctrl locks the horizontal
/// component, otherwise holding Shift locks the vertical one.
#[derive(Debug, Clone)]
pub struct DragTracker {
    divisor: f32,
    invert_x: bool,
    invert_y: bool,
    left: bool,
    right: bool,
    last: Option<Vec2>,
}

impl DragTracker {
    pub fn new(divisor: f32, invert_x: bool, invert_y: bool) -> Self {
        Self {
            divisor,
            invert_x,
            invert_y,
            left: false,
            right: false,
            last: None,
        }
    }

    pub fn button_down(&mut self, button: MouseButton, position: Vec2) {
        match button {
            MouseButton::Left => self.left = true,
            MouseButton::Right => self.right = true,
            MouseButton::Middle => {}
        }
        self.last = Some(position);
    }

    pub fn button_up(&mut self, button: MouseButton, position: Vec2) {
        match button {
            MouseButton::Left => self.left = false,
            MouseButton::Right => self.right = false,
            MouseButton::Middle => {}
        }
        self.last = Some(position);
    }

    pub fn is_dragging(&self) -> bool {
        self.left || self.right
    }

    /// Always records `position`; returns an impulse only while dragging.
    pub fn cursor_moved(&mut self, position: Vec2, modifiers: Modifiers) -> Option<DragImpulse> {
        let last = self.last.replace(position)?;
        if !self.is_dragging() {
            return None;
        }

        let mut delta = (last - position) / self.divisor;
        if self.invert_x {
            delta.x = -delta.x;
        }
        if self.invert_y {
            delta.y = -delta.y;
        }
        if modifiers.ctrl {
            delta.x = 0.0;
        } else if modifiers.shift {
            delta.y = 0.0;
        }

        if self.left {
            Some(DragImpulse::Rotate(Vec2::new(-delta.y, delta.x)))
        } else {
            Some(DragImpulse::Translate(Vec3::new(delta.x, -delta.y, 0.0)))
        }
    }

    /// Drop button state, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.left = false;
        self.right = false;
        self.last = None;
    }
}
