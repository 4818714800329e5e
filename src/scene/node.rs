// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

use super::scene::NodeConfig;

/// A positioned, oriented object that a motion controller can move.
pub trait Node {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, orientation: Quat);

    /// Relative move.
    fn translate(&mut self, delta: Vec3) {
        let position = self.position();
        self.set_position(position + delta);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    pub orientation: Quat,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, position: Vec3, orientation: Quat) -> Self {
        Self {
            name: name.into(),
            position,
            orientation,
        }
    }

    pub fn from_config(config: &NodeConfig) -> Self {
        // rotation is [pitch, yaw, roll] in degrees, composed as roll * yaw * pitch
        let [pitch, yaw, roll] = config.rotation;
        let orientation = Quat::from_euler(
            EulerRot::ZYX,
            roll.to_radians(),
            yaw.to_radians(),
            pitch.to_radians(),
        );
        Self::new(&config.name, Vec3::from(config.position), orientation)
    }

    /// Local right / up / front axes expressed in world space.
    pub fn basis_vectors(&self) -> (Vec3, Vec3, Vec3) {
        let rot = self.orientation;
        (rot * Vec3::X, rot * Vec3::Y, rot * Vec3::Z)
    }

    pub fn transform(&self) -> NodeTransform {
        NodeTransform {
            name: self.name.clone(),
            position: self.position.into(),
            orientation: self.orientation.into(),
        }
    }
}

impl Node for SceneNode {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }
}

/// Serializable snapshot of a node, orientation as `[x, y, z, w]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeTransform {
    pub name: String,
    pub position: [f32; 3],
    pub orientation: [f32; 4],
}
