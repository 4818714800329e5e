// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::drag::{Modifiers, MouseButton};
use super::intents::Direction;

/// Keys the viewer reacts to. Letter keys follow an AZERTY layout
/// (Z/Q/S/D) next to the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Q,
    D,
    Z,
    S,
    /// Speed boost while held.
    E,
    /// Reset the current node.
    R,
    /// Quarter turn around the vertical axis.
    T,
    /// Quarter turn around the horizontal axis.
    Y,
    /// Lights node while held.
    L,
    /// Next camera.
    C,
    /// Reload the scene.
    F5,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Left | Key::Q => Some(Direction::Left),
            Key::Right | Key::D => Some(Direction::Right),
            Key::Up | Key::Z => Some(Direction::Forward),
            Key::Down | Key::S => Some(Direction::Back),
            Key::PageUp => Some(Direction::Up),
            Key::PageDown => Some(Direction::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
    MouseDown {
        button: MouseButton,
        x: f32,
        y: f32,
    },
    MouseUp {
        button: MouseButton,
        x: f32,
        y: f32,
    },
    MouseMove {
        x: f32,
        y: f32,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Wheel {
        rotation: i32,
    },
    FocusLost,
    /// Copy the current node's transform to the clipboard.
    CopyTransform,
    /// Select a node by name.
    Select {
        node: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::document::parse_document;

    #[test]
    fn test_arrow_and_letter_keys_agree() {
        assert_eq!(Key::Left.direction(), Key::Q.direction());
        assert_eq!(Key::Up.direction(), Some(Direction::Forward));
        assert_eq!(Key::PageDown.direction(), Some(Direction::Down));
        assert_eq!(Key::E.direction(), None);
    }

    #[test]
    fn test_events_parse_from_yaml() {
        let yaml = "
- type: key_down
  key: page_up
- type: mouse_move
  x: 4
  y: 2
  modifiers: { shift: true }
- type: focus_lost
";
        let events: Vec<InputEvent> = parse_document(yaml, false).unwrap();
        assert_eq!(events[0], InputEvent::KeyDown { key: Key::PageUp });
        assert_eq!(
            events[1],
            InputEvent::MouseMove {
                x: 4.0,
                y: 2.0,
                modifiers: Modifiers {
                    shift: true,
                    ..Default::default()
                },
            }
        );
        assert_eq!(events[2], InputEvent::FocusLost);
    }
}
