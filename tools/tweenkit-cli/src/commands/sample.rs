//! Print every shape's state at a tick.

use std::path::PathBuf;

use super::load_scene;

pub fn run(path: PathBuf, tick: i64) -> anyhow::Result<()> {
    let mut scene = load_scene(&path)?;

    let snapshot = scene.timeline.entities_at(tick);
    tracing::debug!(tick, shapes = snapshot.len(), "Sampled scene");

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
