// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod replay;
pub mod state;
pub mod ticker;

pub use state::Viewer;
