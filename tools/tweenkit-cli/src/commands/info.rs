//! Show scene statistics.

use std::path::PathBuf;

use tweenkit_scene_model::AttributeKind;

use super::load_scene;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let scene = load_scene(&path)?;
    let timeline = &scene.timeline;

    println!("Scene: {}", path.display());
    println!("  Version: {}", scene.document.version);
    println!("  Background: {}", scene.document.background_color());
    println!("  End time: tick {}", timeline.end_time());
    println!();

    println!("Shapes: {}", timeline.entity_count());
    for layer in timeline.layers() {
        let names: Vec<String> = timeline
            .original_entities()
            .into_iter()
            .filter(|e| e.layer() == layer)
            .map(|e| e.name().to_string())
            .collect();
        println!("  Layer {layer}: {}", names.join(", "));
    }
    println!();

    let count = |kind: AttributeKind| {
        timeline
            .animations()
            .iter()
            .filter(|a| a.kind() == kind)
            .count()
    };
    println!("Animations: {}", timeline.animations().len());
    println!("  Moves: {}", count(AttributeKind::Position));
    println!("  Color changes: {}", count(AttributeKind::Color));
    println!("  Scales: {}", count(AttributeKind::Dimensions));

    Ok(())
}
