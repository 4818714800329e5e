// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use node_motion::config::ViewerConfig;
use node_motion::platform::HeadlessWindow;
use node_motion::viewer::replay;

const USAGE: &str = "usage: node-motion <script.yaml|script.json> [--config <file>] [--realtime]";

fn main() -> Result<()> {
    env_logger::init();

    let mut script_path = None;
    let mut config_path = None;
    let mut realtime = false;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--realtime" => realtime = true,
            "--config" => {
                config_path = Some(PathBuf::from(args.next().context(USAGE)?));
            }
            _ if script_path.is_none() => script_path = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument: {arg}\n{USAGE}"),
        }
    }
    let Some(script_path) = script_path else {
        bail!(USAGE);
    };

    let mut script = replay::load_script(&script_path)?;
    if let Some(config_path) = config_path {
        script.config = ViewerConfig::load(&config_path)?;
    }
    script.config = script.config.with_env_overrides();

    let window = HeadlessWindow::default();
    let report = if realtime {
        replay::run_realtime(&script, window)?
    } else {
        replay::run(&script, window)?
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
