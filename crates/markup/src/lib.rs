//! Tweenkit Markup
//!
//! Exporters that turn a [`Timeline`](tweenkit_scene_model::Timeline) into
//! text. Both read the timeline's origin snapshots and bound animations, so
//! the output does not depend on where the timeline is currently scrubbed.
//!
//! # Export Pipeline
//!
//! ```text
//! scene.json ──► SceneDocument ──► TimelineBuilder ──► Timeline
//!                                                         │
//!                                  ┌──────────────────────┤
//!                                  ▼                      ▼
//!                      render_svg (rate, loop,       describe (rate)
//!                      background, visible set)           │
//!                                  │                      ▼
//!                                  ▼                 plain-text listing
//!                           declarative SVG
//! ```

pub mod svg;
pub mod text;

pub use svg::*;
pub use text::*;
