// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorShape {
    #[default]
    Arrow,
    Hand,
}

/// What the viewer needs from the windowing layer.
pub trait WindowCapabilities {
    fn clipboard_text(&self) -> Option<String>;
    fn set_clipboard_text(&mut self, text: &str);
    fn set_cursor_shape(&mut self, shape: CursorShape);
}

/// In-memory window used by the replay binary and tests.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    clipboard: Option<String>,
    cursor: CursorShape,
}

impl HeadlessWindow {
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }
}

impl WindowCapabilities for HeadlessWindow {
    fn clipboard_text(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) {
        if self.cursor != shape {
            log::debug!("cursor: {:?} -> {:?}", self.cursor, shape);
        }
        self.cursor = shape;
    }
}
