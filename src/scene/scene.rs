// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::node::{NodeTransform, SceneNode};
use crate::constants::DEFAULT_CAMERA_NODE;
use crate::error::ViewerError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "is_zero_vec3")]
    pub position: [f32; 3],

    /// `[pitch, yaw, roll]` in degrees.
    #[serde(default, skip_serializing_if = "is_zero_vec3")]
    pub rotation: [f32; 3],

    #[serde(default, skip_serializing_if = "is_false")]
    pub camera: bool,
}

fn is_zero_vec3(v: &[f32; 3]) -> bool {
    v[0] == 0.0 && v[1] == 0.0 && v[2] == 0.0
}

fn is_false(v: &bool) -> bool {
    !*v
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,

    /// Node moved by default. Falls back to the first node flagged `camera`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,

    /// Node selected while the lights key is held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lights: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    /// Camera nodes in declaration order.
    cameras: Vec<String>,
    camera: Option<String>,
    lights: Option<String>,
    config: SceneConfig,
}

impl Scene {
    /// A scene holding a single camera node at the origin.
    pub fn empty() -> Self {
        let config = SceneConfig {
            nodes: vec![NodeConfig {
                name: DEFAULT_CAMERA_NODE.to_string(),
                position: [0.0; 3],
                rotation: [0.0; 3],
                camera: true,
            }],
            camera: None,
            lights: None,
        };
        // A single uniquely named node always validates.
        Self::from_config(&config).unwrap_or_default()
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self, ViewerError> {
        let mut seen = HashSet::new();
        for node in &config.nodes {
            if !seen.insert(node.name.as_str()) {
                return Err(ViewerError::DuplicateNode(node.name.clone()));
            }
        }
        for name in config.camera.iter().chain(config.lights.iter()) {
            if !seen.contains(name.as_str()) {
                return Err(ViewerError::UnknownNode(name.clone()));
            }
        }

        let cameras: Vec<String> = config
            .nodes
            .iter()
            .filter(|n| n.camera || config.camera.as_deref() == Some(n.name.as_str()))
            .map(|n| n.name.clone())
            .collect();
        let camera = config.camera.clone().or_else(|| cameras.first().cloned());

        Ok(Self {
            nodes: config.nodes.iter().map(SceneNode::from_config).collect(),
            cameras,
            camera,
            lights: config.lights.clone(),
            config: config.clone(),
        })
    }

    /// The description this scene was built from, for reloading.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn cameras(&self) -> &[String] {
        &self.cameras
    }

    pub fn is_camera(&self, name: &str) -> bool {
        self.cameras.iter().any(|c| c == name)
    }

    /// Make the camera after the active one active, wrapping to the first.
    pub fn next_camera(&mut self) -> Option<&str> {
        let first = self.cameras.first()?;
        let next = self
            .camera
            .as_deref()
            .and_then(|active| self.cameras.iter().position(|c| c == active))
            .and_then(|i| self.cameras.get(i + 1))
            .unwrap_or(first);
        self.camera = Some(next.clone());
        self.camera.as_deref()
    }

    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn camera_node(&self) -> Option<&str> {
        self.camera.as_deref()
    }

    pub fn lights_node(&self) -> Option<&str> {
        self.lights.as_deref()
    }

    pub fn transforms(&self) -> Vec<NodeTransform> {
        self.nodes.iter().map(SceneNode::transform).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, camera: bool) -> NodeConfig {
        NodeConfig {
            name: name.into(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            camera,
        }
    }

    #[test]
    fn test_camera_falls_back_to_flagged_node() {
        let config = SceneConfig {
            nodes: vec![node("mesh", false), node("eye", true)],
            camera: None,
            lights: None,
        };
        let scene = Scene::from_config(&config).unwrap();
        assert_eq!(scene.camera_node(), Some("eye"));
        assert_eq!(scene.nodes().len(), 2);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = SceneConfig {
            nodes: vec![node("a", false), node("a", true)],
            ..Default::default()
        };
        assert_eq!(
            Scene::from_config(&config).unwrap_err(),
            ViewerError::DuplicateNode("a".into())
        );
    }

    #[test]
    fn test_unknown_lights_rejected() {
        let config = SceneConfig {
            nodes: vec![node("a", true)],
            camera: None,
            lights: Some("LightNode".into()),
        };
        assert_eq!(
            Scene::from_config(&config).unwrap_err(),
            ViewerError::UnknownNode("LightNode".into())
        );
    }

    #[test]
    fn test_next_camera_wraps() {
        let config = SceneConfig {
            nodes: vec![node("a", true), node("mesh", false), node("b", true), node("c", false)],
            camera: Some("c".into()),
            lights: None,
        };
        let mut scene = Scene::from_config(&config).unwrap();
        assert_eq!(scene.cameras(), ["a", "b", "c"]);
        assert_eq!(scene.camera_node(), Some("c"));
        assert_eq!(scene.next_camera(), Some("a"));
        assert_eq!(scene.next_camera(), Some("b"));
        assert_eq!(scene.next_camera(), Some("c"));
        assert!(!scene.is_camera("mesh"));
    }

    #[test]
    fn test_next_camera_without_cameras() {
        let mut scene = Scene::from_config(&SceneConfig {
            nodes: vec![node("mesh", false)],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(scene.next_camera(), None);
        assert_eq!(scene.camera_node(), None);
    }

    #[test]
    fn test_empty_scene_has_camera() {
        let scene = Scene::empty();
        assert_eq!(scene.camera_node(), Some(DEFAULT_CAMERA_NODE));
        assert!(scene.node(DEFAULT_CAMERA_NODE).is_some());
        assert!(scene.is_camera(DEFAULT_CAMERA_NODE));
        assert_eq!(scene.config().nodes.len(), 1);
    }
}
