//! Print a text description of a scene.

use std::path::PathBuf;

use tweenkit_common::config::ExportDefaults;
use tweenkit_markup::text::describe;

use super::{load_scene, resolve_rate};

pub fn run(defaults: &ExportDefaults, path: PathBuf, rate: Option<u32>) -> anyhow::Result<()> {
    let scene = load_scene(&path)?;
    let rate = resolve_rate(rate, defaults)?;

    println!("{}", describe(&scene.timeline, &rate));
    Ok(())
}
