// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::constants::{
    CAMERA_BOOST_FACTOR, CAMERA_SPEED_STEP, DEFAULT_CAMERA_SPEED, MAX_CAMERA_SPEED,
    MIN_CAMERA_SPEED,
};

/// Per-tick key increment, bounded to `[MIN_CAMERA_SPEED, MAX_CAMERA_SPEED]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSpeed {
    default: f32,
    value: f32,
    boost: bool,
}

impl Default for CameraSpeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_SPEED)
    }
}

impl CameraSpeed {
    pub fn new(default: f32) -> Self {
        let default = default.clamp(MIN_CAMERA_SPEED, MAX_CAMERA_SPEED);
        Self {
            default,
            value: default,
            boost: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Speed actually fed to the motion state, including the boost.
    pub fn effective(&self) -> f32 {
        if self.boost {
            self.value * CAMERA_BOOST_FACTOR
        } else {
            self.value
        }
    }

    pub fn scale(&mut self, factor: f32) {
        self.value = (self.value * factor).clamp(MIN_CAMERA_SPEED, MAX_CAMERA_SPEED);
    }

    /// Wheel notch: slower when scrolling down, faster when scrolling up.
    pub fn wheel(&mut self, rotation: i32) {
        match rotation.signum() {
            -1 => self.scale(CAMERA_SPEED_STEP),
            1 => self.scale(1.0 / CAMERA_SPEED_STEP),
            _ => {}
        }
    }

    /// Returns true if the boost state changed.
    pub fn set_boost(&mut self, boost: bool) -> bool {
        let changed = self.boost != boost;
        self.boost = boost;
        changed
    }

    pub fn is_boosted(&self) -> bool {
        self.boost
    }

    /// Back to the configured default; the boost key state is kept.
    pub fn reset(&mut self) {
        self.value = self.default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_stays_in_range() {
        let mut speed = CameraSpeed::default();
        for _ in 0..200 {
            speed.wheel(-120);
        }
        assert_eq!(speed.value(), MIN_CAMERA_SPEED);
        for _ in 0..200 {
            speed.wheel(120);
        }
        assert_eq!(speed.value(), MAX_CAMERA_SPEED);
    }

    #[test]
    fn test_boost_multiplies() {
        let mut speed = CameraSpeed::new(0.5);
        assert!(speed.set_boost(true));
        assert!(!speed.set_boost(true));
        assert!(speed.is_boosted());
        assert_eq!(speed.effective(), 5.0);
        speed.set_boost(false);
        assert!(!speed.is_boosted());
        assert_eq!(speed.effective(), 0.5);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut speed = CameraSpeed::new(2.0);
        speed.wheel(-1);
        assert!(speed.value() < 2.0);
        speed.reset();
        assert_eq!(speed.value(), 2.0);
    }

    #[test]
    fn test_default_is_clamped() {
        assert_eq!(CameraSpeed::new(100.0).value(), MAX_CAMERA_SPEED);
        assert_eq!(CameraSpeed::new(0.0).value(), MIN_CAMERA_SPEED);
    }
}
