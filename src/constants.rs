// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

// Velocity damping
pub const VELOCITY_DECAY: f32 = 1.2;
pub const VELOCITY_DEAD_ZONE: f32 = 0.2;
pub const MAX_ANGULAR_VELOCITY: f32 = 5.0;
pub const MAX_SCALAR_VELOCITY: f32 = 20.0;

// Scripted turns (degrees)
pub const QUARTER_TURN: f32 = 90.0;

// Camera speed (units added to the scalar velocity per tick while a key is held)
pub const DEFAULT_CAMERA_SPEED: f32 = 1.0;
pub const MIN_CAMERA_SPEED: f32 = 0.05;
pub const MAX_CAMERA_SPEED: f32 = 10.0;
pub const CAMERA_SPEED_STEP: f32 = 0.9;
pub const CAMERA_BOOST_FACTOR: f32 = 10.0;

// Mouse drag: cursor delta (pixels) is divided by this before becoming a velocity
pub const DEFAULT_MOUSE_DIVISOR: f32 = 8.0;

// Tick scheduling
pub const DEFAULT_MOTION_TICK_MS: u64 = 30;

// Scene defaults
pub const DEFAULT_CAMERA_NODE: &str = "CameraNode";

// Environment overrides
pub const ENV_TICK_MS: &str = "NODE_MOTION_TICK_MS";
pub const ENV_MOUSE_DIVISOR: &str = "NODE_MOTION_MOUSE_DIVISOR";
