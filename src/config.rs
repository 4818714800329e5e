// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CAMERA_SPEED, DEFAULT_MOTION_TICK_MS, DEFAULT_MOUSE_DIVISOR, ENV_MOUSE_DIVISOR,
    ENV_TICK_MS, MAX_CAMERA_SPEED, MIN_CAMERA_SPEED,
};
use crate::error::ViewerError;
use crate::io::document::load_document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Period of the motion tick.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Cursor pixels per unit of drag velocity.
    #[serde(default = "default_mouse_divisor")]
    pub mouse_divisor: f32,

    #[serde(default = "default_camera_speed")]
    pub camera_speed: f32,

    #[serde(default)]
    pub invert_x: bool,

    #[serde(default)]
    pub invert_y: bool,
}

fn default_tick_ms() -> u64 {
    DEFAULT_MOTION_TICK_MS
}

fn default_mouse_divisor() -> f32 {
    DEFAULT_MOUSE_DIVISOR
}

fn default_camera_speed() -> f32 {
    DEFAULT_CAMERA_SPEED
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            mouse_divisor: default_mouse_divisor(),
            camera_speed: default_camera_speed(),
            invert_x: false,
            invert_y: false,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = load_document(path, "config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.tick_ms == 0 {
            return Err(ViewerError::InvalidConfig {
                field: "tick_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if !(self.mouse_divisor.is_finite() && self.mouse_divisor > 0.0) {
            return Err(ViewerError::InvalidConfig {
                field: "mouse_divisor",
                reason: format!("{} is not a positive number", self.mouse_divisor),
            });
        }
        if !(MIN_CAMERA_SPEED..=MAX_CAMERA_SPEED).contains(&self.camera_speed) {
            return Err(ViewerError::InvalidConfig {
                field: "camera_speed",
                reason: format!(
                    "{} is outside [{MIN_CAMERA_SPEED}, {MAX_CAMERA_SPEED}]",
                    self.camera_speed
                ),
            });
        }
        Ok(())
    }

    /// Apply `NODE_MOTION_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(tick_ms) = env_override::<u64>(ENV_TICK_MS, |v| *v > 0) {
            self.tick_ms = tick_ms;
        }
        if let Some(divisor) = env_override::<f32>(ENV_MOUSE_DIVISOR, |v| *v > 0.0 && v.is_finite())
        {
            self.mouse_divisor = divisor;
        }
        self
    }
}

fn env_override<T>(name: &str, valid: impl Fn(&T) -> bool) -> Option<T>
where
    T: FromStr + std::fmt::Display,
{
    let val = std::env::var(name).ok()?;
    match parse_override(&val, valid) {
        Some(parsed) => {
            log::info!("{name}={parsed}");
            Some(parsed)
        }
        None => {
            log::warn!("{name}={val:?} invalid, using default");
            None
        }
    }
}

fn parse_override<T: FromStr>(val: &str, valid: impl Fn(&T) -> bool) -> Option<T> {
    val.trim().parse::<T>().ok().filter(|v| valid(v))
}
