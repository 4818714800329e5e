// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read a YAML or JSON document, picking the parser from the file extension.
/// Anything that is not `.json` is parsed as YAML.
pub fn load_document<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {kind} file: {}", path.display()))?;
    parse_document(&contents, is_json(path))
        .with_context(|| format!("Failed to parse {kind} file: {}", path.display()))
}

pub fn parse_document<T: DeserializeOwned>(contents: &str, json: bool) -> Result<T> {
    if json {
        Ok(serde_json::from_str(contents)?)
    } else {
        Ok(serde_yml::from_str(contents)?)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
