//! Validate a scene file.

use std::path::PathBuf;

use super::load_scene;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating scene at: {}", path.display());

    match load_scene(&path) {
        Ok(scene) => {
            println!("  Shapes: {}", scene.timeline.entity_count());
            println!("  Animations: {}", scene.timeline.animations().len());
            println!("  End time: tick {}", scene.timeline.end_time());
            println!("\nScene is valid.");
            Ok(())
        }
        Err(e) => {
            println!("\nValidation failed:");
            println!("  - {e}");
            Err(anyhow::anyhow!("Scene is invalid"))
        }
    }
}
