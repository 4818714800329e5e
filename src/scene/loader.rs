// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::Result;

use super::scene::{Scene, SceneConfig};
use crate::io::document::load_document;

pub fn load_scene_config(path: &Path) -> Result<SceneConfig> {
    let config: SceneConfig = load_document(path, "scene")?;
    log::info!(
        "Read scene file {}: {} nodes",
        path.display(),
        config.nodes.len()
    );
    Ok(config)
}

pub fn build_scene(config: &SceneConfig) -> Result<Scene> {
    let scene = Scene::from_config(config)?;

    log::info!(
        "Loaded scene: {} nodes, camera {:?}, lights {:?}",
        scene.nodes().len(),
        scene.camera_node(),
        scene.lights_node()
    );

    Ok(scene)
}
