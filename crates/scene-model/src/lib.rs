//! Tweenkit Scene Model
//!
//! Defines the core data contracts for keyframe scenes:
//! - **Geometry:** Shape-specific dimensions (rectangle, ellipse)
//! - **Entity:** A named, positioned, colored, layered shape with a lifetime window
//! - **Animation:** Tick-bounded move / recolor / scale transitions bound to one entity
//! - **Timeline:** Owns entities and animations, reconstructs scene state at any tick
//! - **Builder:** Fluent construction surface used by script front-ends
//! - **Scene:** JSON interchange document that drives the builder
//!
//! Time is measured in integer ticks. State at a tick is always computed from
//! the absolute tick value, never from deltas, so scrubbing in any order
//! yields the same scene.

pub mod animation;
pub mod builder;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod timeline;

pub use animation::*;
pub use builder::*;
pub use entity::*;
pub use error::*;
pub use geometry::*;
pub use scene::*;
pub use timeline::*;

/// Discrete unit of animation time.
pub type Tick = i64;
