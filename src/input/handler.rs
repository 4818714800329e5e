// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::Vec2;

use super::drag::DragImpulse;
use super::event::{InputEvent, Key};
use crate::error::ViewerError;
use crate::platform::{CursorShape, WindowCapabilities};
use crate::viewer::Viewer;

/// Returns true if the event was consumed.
pub fn handle_input_event<W: WindowCapabilities>(
    event: &InputEvent,
    viewer: &mut Viewer<W>,
) -> Result<bool, ViewerError> {
    match event {
        InputEvent::KeyDown { key } => {
            if let Some(direction) = key.direction() {
                viewer.intents.press(direction);
                return Ok(true);
            }
            match key {
                Key::E => viewer.set_boost(true),
                Key::L => viewer.select_lights()?,
                _ => return Ok(false),
            }
            Ok(true)
        }
        InputEvent::KeyUp { key } => {
            if let Some(direction) = key.direction() {
                viewer.intents.release(direction);
                return Ok(true);
            }
            match key {
                Key::E => viewer.set_boost(false),
                Key::R => viewer.reset_node(),
                Key::T => viewer.turn_horizontally(),
                Key::Y => viewer.turn_vertically(),
                Key::L => viewer.select_camera()?,
                Key::C => viewer.next_camera()?,
                Key::F5 => viewer.reload_scene()?,
                _ => return Ok(false),
            }
            Ok(true)
        }
        InputEvent::MouseDown { button, x, y } => {
            viewer.drag.button_down(*button, Vec2::new(*x, *y));
            if viewer.drag.is_dragging() {
                viewer.window.set_cursor_shape(CursorShape::Hand);
            }
            Ok(true)
        }
        InputEvent::MouseUp { button, x, y } => {
            viewer.drag.button_up(*button, Vec2::new(*x, *y));
            if !viewer.drag.is_dragging() {
                viewer.window.set_cursor_shape(CursorShape::Arrow);
            }
            Ok(true)
        }
        InputEvent::MouseMove { x, y, modifiers } => {
            match viewer.drag.cursor_moved(Vec2::new(*x, *y), *modifiers) {
                Some(DragImpulse::Rotate(delta)) => viewer.add_angular_velocity(delta),
                Some(DragImpulse::Translate(delta)) => viewer.add_scalar_velocity(delta),
                None => return Ok(false),
            }
            Ok(true)
        }
        InputEvent::Wheel { rotation } => {
            viewer.scale_speed(*rotation);
            Ok(true)
        }
        InputEvent::FocusLost => {
            viewer.intents.clear();
            viewer.drag.clear();
            viewer.window.set_cursor_shape(CursorShape::Arrow);
            Ok(true)
        }
        InputEvent::CopyTransform => {
            let Some(transform) = viewer.current_transform() else {
                return Ok(false);
            };
            match serde_json::to_string(&transform) {
                Ok(text) => {
                    viewer.window.set_clipboard_text(&text);
                    Ok(true)
                }
                Err(e) => {
                    log::warn!("Failed to serialize transform of {:?}: {e}", transform.name);
                    Ok(false)
                }
            }
        }
        InputEvent::Select { node } => {
            viewer.select(node)?;
            Ok(true)
        }
    }
}
