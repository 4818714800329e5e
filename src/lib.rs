// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Damped motion controller for camera and scene nodes, plus the headless
//! viewer shell that feeds it input and ticks it.

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod io;
pub mod motion;
pub mod platform;
pub mod scene;
pub mod viewer;

pub use error::ViewerError;
pub use motion::NodeState;
pub use scene::{Node, SceneNode};
