// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewerError {
    #[error("no scene is loaded")]
    NoScene,

    #[error("scene has no node named {0:?}")]
    UnknownNode(String),

    #[error("scene declares node {0:?} more than once")]
    DuplicateNode(String),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
