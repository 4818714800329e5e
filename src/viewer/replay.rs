// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::state::Viewer;
use super::ticker::FixedTicker;
use crate::config::ViewerConfig;
use crate::input::event::InputEvent;
use crate::input::handler::handle_input_event;
use crate::io::document::load_document;
use crate::platform::WindowCapabilities;
use crate::scene::loader::{build_scene, load_scene_config};
use crate::scene::{NodeTransform, SceneConfig};

/// A scene plus a sequence of input events stamped with the tick they
/// precede.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub config: ViewerConfig,

    #[serde(default)]
    pub scene: SceneConfig,

    /// External scene file, relative to the script. Replaces `scene`.
    #[serde(default)]
    pub scene_file: Option<PathBuf>,

    /// Node to move instead of the scene camera.
    #[serde(default)]
    pub select: Option<String>,

    pub ticks: u64,

    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimedEvent {
    /// Delivered right before this tick runs (0-based).
    pub tick: u64,
    pub event: InputEvent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub ticks: u64,
    pub changed_ticks: u64,
    pub current: Option<String>,
    pub nodes: Vec<NodeTransform>,
}

pub fn load_script(path: &Path) -> Result<ReplayScript> {
    let mut script: ReplayScript = load_document(path, "replay script")?;
    if let Some(scene_file) = &script.scene_file {
        let script_dir = path.parent().unwrap_or(Path::new("."));
        script.scene = load_scene_config(&script_dir.join(scene_file))?;
    }
    script
        .config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(script)
}

pub fn prepare<W: WindowCapabilities>(script: &ReplayScript, window: W) -> Result<Viewer<W>> {
    let mut viewer = Viewer::new(script.config.clone(), window);
    viewer.load_scene(build_scene(&script.scene)?);
    if let Some(name) = &script.select {
        viewer.select(name)?;
    }
    Ok(viewer)
}

/// Run the script as fast as possible.
pub fn run<W: WindowCapabilities>(script: &ReplayScript, window: W) -> Result<ReplayReport> {
    let mut viewer = prepare(script, window)?;
    let mut events = sorted_events(script);
    let mut changed_ticks = 0;

    for tick in 0..script.ticks {
        deliver(&mut viewer, &mut events, tick)?;
        if viewer.tick() {
            changed_ticks += 1;
        }
    }

    Ok(report(&viewer, script.ticks, changed_ticks))
}

/// Run the script paced by the configured tick period.
pub fn run_realtime<W: WindowCapabilities>(
    script: &ReplayScript,
    window: W,
) -> Result<ReplayReport> {
    let mut viewer = prepare(script, window)?;
    let mut events = sorted_events(script);
    let mut ticker = FixedTicker::new(viewer.config.tick_period(), Instant::now());
    let mut changed_ticks = 0;
    let mut tick = 0;

    log::info!(
        "Replaying {} ticks at {:?} per tick",
        script.ticks,
        ticker.period()
    );
    while tick < script.ticks {
        let now = Instant::now();
        for _ in 0..ticker.due(now) {
            if tick >= script.ticks {
                break;
            }
            deliver(&mut viewer, &mut events, tick)?;
            if viewer.tick() {
                changed_ticks += 1;
            }
            tick += 1;
        }
        thread::sleep(ticker.until_next(Instant::now()));
    }

    Ok(report(&viewer, script.ticks, changed_ticks))
}

fn sorted_events(script: &ReplayScript) -> Vec<TimedEvent> {
    let mut events = script.events.clone();
    // Stable, so same-tick events keep their script order. Reversed to pop from the back.
    events.sort_by_key(|e| e.tick);
    events.reverse();
    events
}

fn deliver<W: WindowCapabilities>(
    viewer: &mut Viewer<W>,
    events: &mut Vec<TimedEvent>,
    tick: u64,
) -> Result<()> {
    while events.last().is_some_and(|e| e.tick <= tick) {
        if let Some(timed) = events.pop() {
            handle_input_event(&timed.event, viewer)
                .with_context(|| format!("Event at tick {} failed", timed.tick))?;
        }
    }
    Ok(())
}

fn report<W: WindowCapabilities>(viewer: &Viewer<W>, ticks: u64, changed_ticks: u64) -> ReplayReport {
    ReplayReport {
        ticks,
        changed_ticks,
        current: viewer.current_node().map(str::to_string),
        nodes: viewer.transforms(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::document::parse_document;
    use crate::platform::HeadlessWindow;

    const SCRIPT: &str = "
scene:
  nodes:
    - name: Camera
      camera: true
    - name: Lamp
      position: [0, 5, 0]
  lights: Lamp
ticks: 40
events:
  - tick: 5
    event: { type: key_up, key: right }
  - tick: 0
    event: { type: key_down, key: right }
";

    #[test]
    fn test_right_key_moves_along_negative_x() {
        let script: ReplayScript = parse_document(SCRIPT, false).unwrap();
        let report = run(&script, HeadlessWindow::default()).unwrap();

        assert_eq!(report.ticks, 40);
        assert_eq!(report.current.as_deref(), Some("Camera"));
        let camera = &report.nodes[0];
        assert!(camera.position[0] < -5.0, "x = {}", camera.position[0]);
        assert_eq!(camera.position[1], 0.0);
        assert_eq!(camera.position[2], 0.0);
        // 5 held ticks plus the decay tail, then at rest.
        assert!(report.changed_ticks > 5 && report.changed_ticks < 40);
        assert_eq!(report.nodes[1].position, [0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_lights_selection_moves_lamp() {
        let mut script: ReplayScript = parse_document(SCRIPT, false).unwrap();
        script.select = Some("Lamp".into());
        let report = run(&script, HeadlessWindow::default()).unwrap();
        assert_eq!(report.current.as_deref(), Some("Lamp"));
        assert_eq!(report.nodes[0].position, [0.0, 0.0, 0.0]);
        assert!(report.nodes[1].position[0] < -5.0);
    }

    #[test]
    fn test_events_sorted_by_tick() {
        let script: ReplayScript = parse_document(SCRIPT, false).unwrap();
        let mut events = sorted_events(&script);
        assert_eq!(events.pop().map(|e| e.tick), Some(0));
        assert_eq!(events.pop().map(|e| e.tick), Some(5));
    }

    #[test]
    fn test_invalid_select_fails() {
        let mut script: ReplayScript = parse_document(SCRIPT, false).unwrap();
        script.select = Some("Ghost".into());
        assert!(prepare(&script, HeadlessWindow::default()).is_err());
    }
}
