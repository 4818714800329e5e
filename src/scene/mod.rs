// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod loader;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;

pub use node::{Node, NodeTransform, SceneNode};
pub use scene::{NodeConfig, Scene, SceneConfig};
