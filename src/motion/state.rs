// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::{EulerRot, Quat, Vec2, Vec3};

use super::velocity::{VelocityRange, decay};
use crate::scene::Node;

/// Damped motion of one scene node.
///
/// Input handlers feed velocity impulses through [`add_angular_velocity`] and
/// [`add_scalar_velocity`]; [`update`] runs once per tick, integrates them into
/// the node transform and decays them toward rest.
///
/// The state does not hold on to the node: it snapshots the node's transform
/// at construction and receives the node again on every `update` / `reset`.
///
/// [`add_angular_velocity`]: NodeState::add_angular_velocity
/// [`add_scalar_velocity`]: NodeState::add_scalar_velocity
/// [`update`]: NodeState::update
#[derive(Debug, Clone)]
pub struct NodeState {
    /// x feeds pitch, y feeds yaw (degrees per tick).
    angular_velocity: Vec2,
    /// Translation per tick along the node's local right / up / front axes.
    scalar_velocity: Vec3,
    pitch: f32, // degrees
    yaw: f32,   // degrees
    roll: f32,  // degrees
    /// One-shot pitch / yaw applied by the next update.
    pending_turn: Vec2,
    original_position: Vec3,
    original_orientation: Quat,
    speed_range: VelocityRange,
    is_camera: bool,
}

impl NodeState {
    pub fn new(node: &impl Node, is_camera: bool) -> Self {
        let orientation = node.orientation();
        // Start the accumulators where the node already points, so that
        // roll * yaw * pitch reproduces its orientation.
        let (roll, yaw, pitch) = orientation.to_euler(EulerRot::ZYX);
        Self {
            angular_velocity: Vec2::ZERO,
            scalar_velocity: Vec3::ZERO,
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
            pending_turn: Vec2::ZERO,
            original_position: node.position(),
            original_orientation: orientation,
            speed_range: VelocityRange::symmetric(0.0),
            is_camera,
        }
    }

    /// Accumulates without clamping; the next `update` clamps.
    pub fn add_angular_velocity(&mut self, delta: Vec2) {
        self.angular_velocity += delta;
    }

    /// Accumulates without clamping; the next `update` clamps.
    pub fn add_scalar_velocity(&mut self, delta: Vec3) {
        self.scalar_velocity += delta;
    }

    /// Queue a pitch of `degrees` for the next update.
    pub fn pitch(&mut self, degrees: f32) {
        self.pending_turn.x += degrees;
    }

    /// Queue a yaw of `degrees` for the next update.
    pub fn yaw(&mut self, degrees: f32) {
        self.pending_turn.y += degrees;
    }

    /// Integrate one tick. Returns true if the node was written.
    pub fn update(&mut self, node: &mut impl Node) -> bool {
        let old_pitch = self.pitch;
        let old_yaw = self.yaw;

        self.pitch += self.angular_velocity.x + self.pending_turn.x;
        self.yaw += self.angular_velocity.y + self.pending_turn.y;
        self.pending_turn = Vec2::ZERO;
        self.angular_velocity = Vec2::new(
            decay(self.angular_velocity.x, VelocityRange::ANGULAR),
            decay(self.angular_velocity.y, VelocityRange::ANGULAR),
        );

        // The translation uses this tick's velocity; the decayed value is for the next tick.
        let translation = self.scalar_velocity;
        self.scalar_velocity = Vec3::new(
            decay(self.scalar_velocity.x, VelocityRange::SCALAR),
            decay(self.scalar_velocity.y, VelocityRange::SCALAR),
            decay(self.scalar_velocity.z, VelocityRange::SCALAR),
        );

        let changed = self.pitch != old_pitch || self.yaw != old_yaw || translation != Vec3::ZERO;
        if changed {
            let current = node.orientation();
            let right = current * Vec3::X;
            let up = current * Vec3::Y;
            let front = current * Vec3::Z;
            node.translate(right * translation.x + up * translation.y + front * translation.z);
            node.set_orientation(self.orientation());
        }
        changed
    }

    /// Orientation built from the accumulated angles, `roll * yaw * pitch`.
    pub fn orientation(&self) -> Quat {
        let pitch = Quat::from_axis_angle(Vec3::X, self.pitch.to_radians());
        let yaw = Quat::from_axis_angle(Vec3::Y, self.yaw.to_radians());
        let roll = Quat::from_axis_angle(Vec3::Z, self.roll.to_radians());
        roll * (yaw * pitch)
    }

    /// Put the node back where it was when this state was created.
    ///
    /// Only the node transform is restored. Velocities and accumulated angles
    /// are kept, so motion still in flight resumes on the next update.
    pub fn reset(&mut self, node: &mut impl Node, speed: f32) {
        self.speed_range = VelocityRange::symmetric(speed);
        node.set_position(self.original_position);
        node.set_orientation(self.original_orientation);
    }

    pub fn set_max_speed(&mut self, speed: f32) {
        self.speed_range = VelocityRange::symmetric(speed);
    }

    pub fn max_speed(&self) -> f32 {
        self.speed_range.max
    }

    pub fn min_speed(&self) -> f32 {
        self.speed_range.min
    }

    pub fn angular_velocity(&self) -> Vec2 {
        self.angular_velocity
    }

    pub fn scalar_velocity(&self) -> Vec3 {
        self.scalar_velocity
    }

    /// `(pitch, yaw, roll)` in degrees.
    pub fn angles(&self) -> (f32, f32, f32) {
        (self.pitch, self.yaw, self.roll)
    }

    pub fn is_camera(&self) -> bool {
        self.is_camera
    }

    /// True once every velocity has settled and no turn is queued.
    pub fn is_at_rest(&self) -> bool {
        self.angular_velocity == Vec2::ZERO
            && self.scalar_velocity == Vec3::ZERO
            && self.pending_turn == Vec2::ZERO
    }
}
