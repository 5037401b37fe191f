pub mod config;
pub mod describe;
pub mod export;
pub mod info;
pub mod sample;
pub mod validate;

use std::path::Path;

use tweenkit_common::clock::TickRate;
use tweenkit_common::config::ExportDefaults;
use tweenkit_common::error::{TweenError, TweenResult};
use tweenkit_scene_model::LoadedScene;

pub(crate) fn load_scene(path: &Path) -> TweenResult<LoadedScene> {
    if !path.exists() {
        return Err(TweenError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    LoadedScene::load(path).map_err(|e| TweenError::scene(e.to_string()))
}

/// Command-line rate if given, otherwise the configured default.
pub(crate) fn resolve_rate(cli: Option<u32>, defaults: &ExportDefaults) -> TweenResult<TickRate> {
    match cli {
        Some(rate) => TickRate::new(rate),
        None => defaults.tick_rate(),
    }
}

/// `--loop` / `--no-loop` if given, otherwise the configured default.
pub(crate) fn resolve_looping(looping: bool, no_loop: bool, defaults: &ExportDefaults) -> bool {
    match (looping, no_loop) {
        (true, _) => true,
        (_, true) => false,
        _ => defaults.looping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("fixtures")
            .join("scenes")
            .join(name)
    }

    #[test]
    fn test_missing_scene_is_file_not_found() {
        assert!(matches!(
            load_scene(Path::new("/definitely/not/here/scene.json")),
            Err(TweenError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_scene_is_scene_error() {
        match load_scene(&fixture_path("conflict.json")) {
            Err(TweenError::Scene { message }) => {
                assert!(message.contains("overlaps an existing one"))
            }
            other => panic!("expected scene error, got {other:?}"),
        }
        assert!(load_scene(&fixture_path("shapes.json")).is_ok());
    }

    #[test]
    fn test_rate_prefers_command_line() {
        let defaults = ExportDefaults {
            rate: 0,
            ..Default::default()
        };
        assert_eq!(resolve_rate(Some(24), &defaults).unwrap().ticks_per_sec(), 24);
        assert!(matches!(
            resolve_rate(None, &defaults),
            Err(TweenError::Config { .. })
        ));
        assert!(matches!(
            resolve_rate(Some(0), &ExportDefaults::default()),
            Err(TweenError::InvalidRate { rate: 0 })
        ));
    }

    #[test]
    fn test_no_loop_overrides_configured_looping() {
        let looping = ExportDefaults {
            looping: true,
            ..Default::default()
        };
        assert!(!resolve_looping(false, true, &looping));
        assert!(resolve_looping(false, false, &looping));
        assert!(resolve_looping(true, false, &ExportDefaults::default()));
        assert!(!resolve_looping(false, false, &ExportDefaults::default()));
    }
}
