// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::constants::{
    MAX_ANGULAR_VELOCITY, MAX_SCALAR_VELOCITY, VELOCITY_DEAD_ZONE, VELOCITY_DECAY,
};

/// Inclusive bounds a velocity is clamped to after decaying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityRange {
    pub min: f32,
    pub max: f32,
}

impl VelocityRange {
    pub const ANGULAR: Self = Self::symmetric(MAX_ANGULAR_VELOCITY);
    pub const SCALAR: Self = Self::symmetric(MAX_SCALAR_VELOCITY);

    pub const fn symmetric(speed: f32) -> Self {
        Self {
            min: -speed,
            max: speed,
        }
    }

    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }
}

/// One tick of damping: divide by the decay factor, snap to zero inside the
/// dead zone, then clamp to `range`.
pub fn decay(v: f32, range: VelocityRange) -> f32 {
    let mut next = v / VELOCITY_DECAY;
    if next.abs() < VELOCITY_DEAD_ZONE {
        next = 0.0;
    }
    range.clamp(next)
}
