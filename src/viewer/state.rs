// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::config::ViewerConfig;
use crate::constants::QUARTER_TURN;
use crate::error::ViewerError;
use crate::input::drag::DragTracker;
use crate::input::intents::MoveIntents;
use crate::input::speed::CameraSpeed;
use crate::motion::NodeState;
use crate::platform::WindowCapabilities;
use crate::scene::{NodeTransform, Scene};

/// Everything the input handlers and the tick need: the scene, one motion
/// state per node touched so far, the current selection and the input state.
pub struct Viewer<W: WindowCapabilities> {
    pub config: ViewerConfig,
    pub window: W,
    pub intents: MoveIntents,
    pub drag: DragTracker,
    pub speed: CameraSpeed,
    scene: Option<Scene>,
    states: HashMap<String, NodeState>,
    current: Option<String>,
    tick_count: u64,
}

impl<W: WindowCapabilities> Viewer<W> {
    pub fn new(config: ViewerConfig, window: W) -> Self {
        let drag = DragTracker::new(config.mouse_divisor, config.invert_x, config.invert_y);
        let speed = CameraSpeed::new(config.camera_speed);
        Self {
            config,
            window,
            intents: MoveIntents::default(),
            drag,
            speed,
            scene: None,
            states: HashMap::new(),
            current: None,
            tick_count: 0,
        }
    }

    /// Replace the scene. Motion states of the previous scene are dropped and
    /// the camera node, if any, becomes current.
    pub fn load_scene(&mut self, scene: Scene) {
        self.unload_scene();
        let camera = scene.camera_node().map(str::to_string);
        self.scene = Some(scene);
        if let Some(camera) = camera {
            // The scene validated its camera name, so this cannot miss.
            if let Err(e) = self.select(&camera) {
                log::warn!("Camera node unavailable: {e}");
            }
        }
    }

    pub fn unload_scene(&mut self) {
        self.reset_input();
        self.states.clear();
        self.current = None;
        self.scene = None;
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn current_node(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_state(&self) -> Option<&NodeState> {
        self.current.as_ref().and_then(|name| self.states.get(name))
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Make `name` the node moved by input, creating its motion state on
    /// first use.
    pub fn select(&mut self, name: &str) -> Result<(), ViewerError> {
        let scene = self.scene.as_ref().ok_or(ViewerError::NoScene)?;
        let node = scene
            .node(name)
            .ok_or_else(|| ViewerError::UnknownNode(name.to_string()))?;

        if !self.states.contains_key(name) {
            let is_camera = scene.is_camera(name);
            self.states
                .insert(name.to_string(), NodeState::new(node, is_camera));
        }
        if self.current.as_deref() != Some(name) {
            log::info!("Selected node {name:?}");
        }
        self.current = Some(name.to_string());
        self.publish_speed();
        Ok(())
    }

    pub fn select_camera(&mut self) -> Result<(), ViewerError> {
        match self.scene.as_ref().and_then(|s| s.camera_node()) {
            Some(camera) => {
                let camera = camera.to_string();
                self.select(&camera)
            }
            None => Ok(()),
        }
    }

    pub fn select_lights(&mut self) -> Result<(), ViewerError> {
        match self.scene.as_ref().and_then(|s| s.lights_node()) {
            Some(lights) => {
                let lights = lights.to_string();
                self.select(&lights)
            }
            None => Ok(()),
        }
    }

    /// Move input to the scene's next camera, wrapping after the last one.
    pub fn next_camera(&mut self) -> Result<(), ViewerError> {
        let scene = self.scene.as_mut().ok_or(ViewerError::NoScene)?;
        match scene.next_camera() {
            Some(camera) => {
                let camera = camera.to_string();
                self.select(&camera)
            }
            None => Ok(()),
        }
    }

    /// Rebuild the scene from the description it was loaded from. Nodes go
    /// back to their configured transforms and motion states start over.
    pub fn reload_scene(&mut self) -> Result<(), ViewerError> {
        let scene = self.scene.as_ref().ok_or(ViewerError::NoScene)?;
        let reloaded = Scene::from_config(scene.config())?;
        let current = self.current.clone();
        log::info!("Reloading scene ({} nodes)", reloaded.nodes().len());
        self.load_scene(reloaded);
        if let Some(name) = current {
            self.select(&name)?;
        }
        Ok(())
    }

    /// Run one motion tick. Returns true if the current node moved.
    pub fn tick(&mut self) -> bool {
        self.tick_count += 1;
        let Some(name) = self.current.as_deref() else {
            return false;
        };
        let (Some(scene), Some(state)) = (self.scene.as_mut(), self.states.get_mut(name)) else {
            return false;
        };
        let Some(node) = scene.node_mut(name) else {
            return false;
        };

        let delta = self.intents.scalar_delta(self.speed.effective());
        if delta != Vec3::ZERO {
            state.add_scalar_velocity(delta);
        }

        let changed = state.update(node);
        if changed {
            log::debug!(
                "tick {}: {name} at {:.3?} velocity {:.3?}",
                self.tick_count,
                node.position,
                state.scalar_velocity()
            );
        }
        changed
    }

    pub fn add_angular_velocity(&mut self, delta: Vec2) {
        if let Some(state) = self.current_state_mut() {
            state.add_angular_velocity(delta);
        }
    }

    pub fn add_scalar_velocity(&mut self, delta: Vec3) {
        if let Some(state) = self.current_state_mut() {
            state.add_scalar_velocity(delta);
        }
    }

    /// Put the current node back to its original transform.
    pub fn reset_node(&mut self) {
        self.reset_input();
        let speed = self.speed.effective();
        let Some(name) = self.current.as_deref() else {
            return;
        };
        if let (Some(scene), Some(state)) = (self.scene.as_mut(), self.states.get_mut(name))
            && let Some(node) = scene.node_mut(name)
        {
            state.reset(node, speed);
            log::info!("Reset node {name:?}");
        }
    }

    pub fn turn_horizontally(&mut self) {
        self.reset_input();
        if let Some(state) = self.current_state_mut() {
            state.yaw(QUARTER_TURN);
        }
    }

    pub fn turn_vertically(&mut self) {
        self.reset_input();
        if let Some(state) = self.current_state_mut() {
            state.pitch(QUARTER_TURN);
        }
    }

    pub fn scale_speed(&mut self, wheel_rotation: i32) {
        self.speed.wheel(wheel_rotation);
        self.publish_speed();
    }

    pub fn set_boost(&mut self, boost: bool) {
        if self.speed.set_boost(boost) {
            self.publish_speed();
        }
    }

    /// Stop held keys, drop drag state and restore the default speed.
    pub fn reset_input(&mut self) {
        self.intents.clear();
        self.drag.clear();
        self.speed.reset();
        self.publish_speed();
    }

    pub fn current_transform(&self) -> Option<NodeTransform> {
        let name = self.current.as_deref()?;
        self.scene.as_ref()?.node(name).map(|n| n.transform())
    }

    pub fn transforms(&self) -> Vec<NodeTransform> {
        self.scene.as_ref().map(Scene::transforms).unwrap_or_default()
    }

    fn current_state_mut(&mut self) -> Option<&mut NodeState> {
        let name = self.current.as_deref()?;
        self.states.get_mut(name)
    }

    fn publish_speed(&mut self) {
        let speed = self.speed.effective();
        if let Some(state) = self.current_state_mut() {
            state.set_max_speed(speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::intents::Direction;
    use crate::platform::HeadlessWindow;
    use crate::scene::{NodeConfig, SceneConfig};

    fn node(name: &str, position: [f32; 3], camera: bool) -> NodeConfig {
        NodeConfig {
            name: name.into(),
            position,
            rotation: [0.0; 3],
            camera,
        }
    }

    fn viewer() -> Viewer<HeadlessWindow> {
        let scene = Scene::from_config(&SceneConfig {
            nodes: vec![
                node("CameraNode", [0.0; 3], true),
                node("LightNode", [0.0, 10.0, 0.0], false),
            ],
            camera: None,
            lights: Some("LightNode".into()),
        })
        .unwrap();
        let mut viewer = Viewer::new(ViewerConfig::default(), HeadlessWindow::default());
        viewer.load_scene(scene);
        viewer
    }

    fn position(viewer: &Viewer<HeadlessWindow>, name: &str) -> Vec3 {
        viewer.scene().unwrap().node(name).unwrap().position
    }

    #[test]
    fn test_camera_selected_on_load() {
        let viewer = viewer();
        assert_eq!(viewer.current_node(), Some("CameraNode"));
        assert!(viewer.current_state().unwrap().is_camera());
    }

    #[test]
    fn test_tick_without_scene_is_noop() {
        let mut viewer = Viewer::new(ViewerConfig::default(), HeadlessWindow::default());
        assert!(!viewer.tick());
        assert_eq!(viewer.select("x"), Err(ViewerError::NoScene));
    }

    #[test]
    fn test_held_key_adds_once_per_tick() {
        let mut viewer = viewer();
        viewer.intents.press(Direction::Left);

        assert!(viewer.tick());
        assert_eq!(position(&viewer, "CameraNode"), Vec3::new(1.0, 0.0, 0.0));
        // 1 / 1.2 left over plus a fresh unit
        assert!(viewer.tick());
        let x = position(&viewer, "CameraNode").x;
        assert!((x - (1.0 + 1.0 / 1.2 + 1.0)).abs() < 1e-5, "x = {x}");
    }

    #[test]
    fn test_release_lets_velocity_decay() {
        let mut viewer = viewer();
        viewer.intents.press(Direction::Forward);
        viewer.tick();
        viewer.intents.release(Direction::Forward);

        let mut moving_ticks = 0;
        while viewer.tick() {
            moving_ticks += 1;
            assert!(moving_ticks < 50);
        }
        assert!(moving_ticks > 0);
        assert!(viewer.current_state().unwrap().is_at_rest());
    }

    #[test]
    fn test_states_kept_per_node() {
        let mut viewer = viewer();
        viewer.add_scalar_velocity(Vec3::new(0.0, 0.0, 3.0));
        viewer.select_lights().unwrap();
        assert_eq!(viewer.current_node(), Some("LightNode"));
        assert!(viewer.current_state().unwrap().is_at_rest());

        viewer.select_camera().unwrap();
        assert!(viewer.tick());
        assert_eq!(position(&viewer, "CameraNode"), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(position(&viewer, "LightNode"), Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_unknown_node() {
        let mut viewer = viewer();
        assert_eq!(
            viewer.select("Nope"),
            Err(ViewerError::UnknownNode("Nope".into()))
        );
        assert_eq!(viewer.current_node(), Some("CameraNode"));
    }

    #[test]
    fn test_reset_node_restores_position_and_speed() {
        let mut viewer = viewer();
        viewer.scale_speed(1);
        viewer.add_scalar_velocity(Vec3::new(2.0, 0.0, 0.0));
        viewer.tick();
        viewer.reset_node();

        assert_eq!(position(&viewer, "CameraNode"), Vec3::ZERO);
        assert_eq!(viewer.speed.value(), ViewerConfig::default().camera_speed);
        assert_eq!(viewer.current_state().unwrap().max_speed(), viewer.speed.effective());
    }

    #[test]
    fn test_turn_horizontally() {
        let mut viewer = viewer();
        viewer.intents.press(Direction::Up);
        viewer.turn_horizontally();
        assert!(viewer.intents.is_empty());
        assert!(viewer.tick());
        assert_eq!(viewer.current_state().unwrap().angles().1, QUARTER_TURN);
    }

    #[test]
    fn test_next_camera_cycles_selection() {
        let scene = Scene::from_config(&SceneConfig {
            nodes: vec![
                node("Front", [0.0; 3], true),
                node("Top", [0.0, 20.0, 0.0], true),
                node("Mesh", [0.0; 3], false),
            ],
            ..Default::default()
        })
        .unwrap();
        let mut viewer = Viewer::new(ViewerConfig::default(), HeadlessWindow::default());
        viewer.load_scene(scene);
        assert_eq!(viewer.current_node(), Some("Front"));

        viewer.next_camera().unwrap();
        assert_eq!(viewer.current_node(), Some("Top"));
        assert!(viewer.current_state().unwrap().is_camera());
        viewer.next_camera().unwrap();
        assert_eq!(viewer.current_node(), Some("Front"));

        // Lights key release returns to the active camera, not the first one.
        viewer.next_camera().unwrap();
        viewer.select("Mesh").unwrap();
        viewer.select_camera().unwrap();
        assert_eq!(viewer.current_node(), Some("Top"));
    }

    #[test]
    fn test_reload_restores_configured_transforms() {
        let mut viewer = viewer();
        viewer.select_lights().unwrap();
        viewer.add_scalar_velocity(Vec3::new(4.0, 0.0, 0.0));
        viewer.intents.press(Direction::Up);
        viewer.tick();
        assert_ne!(position(&viewer, "LightNode"), Vec3::new(0.0, 10.0, 0.0));

        viewer.reload_scene().unwrap();
        assert_eq!(position(&viewer, "LightNode"), Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(viewer.current_node(), Some("LightNode"));
        assert!(viewer.current_state().unwrap().is_at_rest());
        assert!(viewer.intents.is_empty());
        assert!(!viewer.tick());
    }

    #[test]
    fn test_reload_without_scene() {
        let mut viewer = Viewer::new(ViewerConfig::default(), HeadlessWindow::default());
        assert_eq!(viewer.reload_scene(), Err(ViewerError::NoScene));
        assert_eq!(viewer.next_camera(), Err(ViewerError::NoScene));
    }

    #[test]
    fn test_boost_published_as_max_speed() {
        let mut viewer = viewer();
        viewer.set_boost(true);
        assert_eq!(viewer.current_state().unwrap().max_speed(), 10.0);
    }
}
