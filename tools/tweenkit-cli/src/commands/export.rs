//! Export a scene as declarative SVG.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tweenkit_common::config::ExportDefaults;
use tweenkit_markup::svg::{export_svg, render_svg, SvgOptions};
use tweenkit_scene_model::Color;

use super::{load_scene, resolve_looping, resolve_rate};

pub fn run(
    defaults: &ExportDefaults,
    path: PathBuf,
    output: Option<PathBuf>,
    rate: Option<u32>,
    looping: bool,
    no_loop: bool,
    background: Option<String>,
    only: Vec<String>,
) -> anyhow::Result<()> {
    let scene = load_scene(&path)?;

    let background = match background {
        Some(raw) => parse_rgb(&raw)?,
        None => scene.document.background_color(),
    };

    let options = SvgOptions {
        rate: resolve_rate(rate, defaults)?,
        looping: resolve_looping(looping, no_loop, defaults),
        background,
        visible: (!only.is_empty()).then(|| only.into_iter().collect::<BTreeSet<_>>()),
    };

    match output {
        Some(output_path) => {
            println!("Exporting scene at: {}", path.display());
            println!("  Output: {}", output_path.display());
            println!("  Rate: {} ticks/s", options.rate.ticks_per_sec());
            println!("  Looping: {}", options.looping);

            export_svg(&scene.timeline, &options, &output_path)
                .map_err(|e| anyhow::anyhow!("Export failed: {e}"))?;
            println!("\nExport complete: {}", output_path.display());
        }
        None => {
            let svg = render_svg(&scene.timeline, &options)
                .map_err(|e| anyhow::anyhow!("Export failed: {e}"))?;
            println!("{svg}");
        }
    }

    Ok(())
}

/// Parse `r,g,b` with each component in `[0, 1]`.
fn parse_rgb(raw: &str) -> anyhow::Result<Color> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("Invalid background color {raw:?}: {e}"))?;

    match parts.as_slice() {
        &[r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(anyhow::anyhow!(
            "Invalid background color {raw:?}: expected r,g,b"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("0, 0.5,1").unwrap(), Color::new(0.0, 0.5, 1.0));
        assert!(parse_rgb("1,1").is_err());
        assert!(parse_rgb("red,0,0").is_err());
    }
}
