//! Fluent construction surface for script front-ends.
//!
//! Each call validates and inserts immediately, so the first semantic error
//! is reported by the call that caused it:
//!
//! ```
//! use tweenkit_scene_model::TimelineBuilder;
//!
//! let mut builder = TimelineBuilder::new();
//! builder
//!     .add_rectangle("R", 200.0, 200.0, 50.0, 100.0, 1.0, 0.0, 0.0, 1, 100)?
//!     .add_move("R", 200.0, 200.0, 300.0, 300.0, 10, 50)?;
//! let timeline = builder.build();
//! assert_eq!(timeline.end_time(), 100);
//! # Ok::<(), tweenkit_scene_model::SceneError>(())
//! ```

use crate::animation::Animation;
use crate::entity::{Color, Entity, Position};
use crate::error::SceneResult;
use crate::geometry::Geometry;
use crate::timeline::Timeline;
use crate::Tick;

/// Builds a [`Timeline`] one shape or animation at a time.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    timeline: Timeline,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ellipse centered at `(cx, cy)` on layer 0.
    pub fn add_oval(
        &mut self,
        name: &str,
        cx: f64,
        cy: f64,
        x_radius: f64,
        y_radius: f64,
        r: f64,
        g: f64,
        b: f64,
        appear: Tick,
        disappear: Tick,
    ) -> SceneResult<&mut Self> {
        self.add_oval_on_layer(
            name, cx, cy, x_radius, y_radius, r, g, b, appear, disappear, 0,
        )
    }

    /// Add an ellipse centered at `(cx, cy)` on the given layer.
    pub fn add_oval_on_layer(
        &mut self,
        name: &str,
        cx: f64,
        cy: f64,
        x_radius: f64,
        y_radius: f64,
        r: f64,
        g: f64,
        b: f64,
        appear: Tick,
        disappear: Tick,
        layer: i32,
    ) -> SceneResult<&mut Self> {
        let geometry = Geometry::ellipse(x_radius, y_radius)?;
        self.add_shape(name, cx, cy, geometry, Color::new(r, g, b), appear, disappear, layer)
    }

    /// Add a rectangle anchored at `(lx, ly)` on layer 0.
    pub fn add_rectangle(
        &mut self,
        name: &str,
        lx: f64,
        ly: f64,
        width: f64,
        height: f64,
        r: f64,
        g: f64,
        b: f64,
        appear: Tick,
        disappear: Tick,
    ) -> SceneResult<&mut Self> {
        self.add_rectangle_on_layer(name, lx, ly, width, height, r, g, b, appear, disappear, 0)
    }

    /// Add a rectangle anchored at `(lx, ly)` on the given layer.
    pub fn add_rectangle_on_layer(
        &mut self,
        name: &str,
        lx: f64,
        ly: f64,
        width: f64,
        height: f64,
        r: f64,
        g: f64,
        b: f64,
        appear: Tick,
        disappear: Tick,
        layer: i32,
    ) -> SceneResult<&mut Self> {
        let geometry = Geometry::rectangle(width, height)?;
        self.add_shape(name, lx, ly, geometry, Color::new(r, g, b), appear, disappear, layer)
    }

    fn add_shape(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        geometry: Geometry,
        color: Color,
        appear: Tick,
        disappear: Tick,
        layer: i32,
    ) -> SceneResult<&mut Self> {
        let entity = Entity::new(name, color, Position::new(x, y), geometry, appear, disappear)?
            .with_layer(layer);
        self.timeline.add_entity(entity)?;
        Ok(self)
    }

    pub fn add_move(
        &mut self,
        name: &str,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
        start: Tick,
        end: Tick,
    ) -> SceneResult<&mut Self> {
        let animation = Animation::movement(
            start,
            end,
            Some(Position::new(from_x, from_y)),
            Position::new(to_x, to_y),
        )?;
        self.add_animation(name, animation)
    }

    pub fn add_color_change(
        &mut self,
        name: &str,
        old_r: f64,
        old_g: f64,
        old_b: f64,
        new_r: f64,
        new_g: f64,
        new_b: f64,
        start: Tick,
        end: Tick,
    ) -> SceneResult<&mut Self> {
        let animation = Animation::recolor(
            start,
            end,
            Some(Color::new(old_r, old_g, old_b)),
            Color::new(new_r, new_g, new_b),
        )?;
        self.add_animation(name, animation)
    }

    pub fn add_scale_to_change(
        &mut self,
        name: &str,
        from_dim1: f64,
        from_dim2: f64,
        to_dim1: f64,
        to_dim2: f64,
        start: Tick,
        end: Tick,
    ) -> SceneResult<&mut Self> {
        let animation = Animation::scale(
            start,
            end,
            Some(vec![from_dim1, from_dim2]),
            vec![to_dim1, to_dim2],
        )?;
        self.add_animation(name, animation)
    }

    /// Insert a pre-built animation, e.g. one whose start value is captured
    /// at binding.
    pub fn add_animation(&mut self, name: &str, animation: Animation) -> SceneResult<&mut Self> {
        self.timeline.add_animation(name, animation)?;
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> Timeline {
        self.timeline
    }
}
