// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod drag;
pub mod event;
pub mod handler;
pub mod intents;
pub mod speed;

pub use event::{InputEvent, Key};
pub use handler::handle_input_event;
