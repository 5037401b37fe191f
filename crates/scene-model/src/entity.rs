//! Entities: the named shapes that make up a scene.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::geometry::Geometry;
use crate::Tick;

/// Tolerance used when comparing positions across ticks.
pub const POSITION_TOLERANCE: f64 = 0.01;

/// An immutable `(x, y)` position.
///
/// Equality is approximate: two positions are equal when both axes differ
/// by less than [`POSITION_TOLERANCE`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < POSITION_TOLERANCE
            && (self.y - other.y).abs() < POSITION_TOLERANCE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// RGB color with each channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color, clamping each channel to `[0.0, 1.0]`.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    pub fn components(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled to `0..=255`, truncated.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.components().map(|c| (c * 255.0) as u8)
    }

    /// Markup color literal, e.g. `rgb(255,0,0)`.
    pub fn to_markup(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({r},{g},{b})")
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

fn clamp_channel(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

/// A named, positioned, colored, layered shape with a visible lifetime.
///
/// Name, lifetime and layer are fixed at construction. Color, position and
/// geometry dimensions are mutated by animations through the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    name: String,
    color: Color,
    position: Position,
    geometry: Geometry,
    appear_tick: Tick,
    disappear_tick: Tick,
    layer: i32,
}

impl Entity {
    /// Create an entity on layer 0.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        position: Position,
        geometry: Geometry,
        appear_tick: Tick,
        disappear_tick: Tick,
    ) -> SceneResult<Self> {
        if appear_tick < 0 || disappear_tick < 0 || disappear_tick < appear_tick {
            return Err(SceneError::InvalidLifetime {
                appear: appear_tick,
                disappear: disappear_tick,
            });
        }
        geometry.validate()?;
        Ok(Self {
            name: name.into(),
            color,
            position,
            geometry,
            appear_tick,
            disappear_tick,
            layer: 0,
        })
    }

    /// Place the entity on a paint layer. Higher layers paint above lower ones.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn dimensions(&self) -> Vec<f64> {
        self.geometry.dimensions()
    }

    pub fn appear_tick(&self) -> Tick {
        self.appear_tick
    }

    pub fn disappear_tick(&self) -> Tick {
        self.disappear_tick
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Whether the entity is on screen at `tick` (`appear <= tick < disappear`).
    pub fn is_visible_at(&self, tick: Tick) -> bool {
        tick >= self.appear_tick && tick < self.disappear_tick
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    pub fn recolor(&mut self, color: Color) {
        self.color = color;
    }

    /// Replace every geometry dimension at once.
    pub fn rescale(&mut self, dims: &[f64]) -> SceneResult<()> {
        self.geometry.rescale(dims)
    }

    /// Take on `other`'s position, color and geometry.
    ///
    /// Name, lifetime and layer are left untouched.
    pub fn teleport_to(&mut self, other: &Entity) {
        self.position = other.position;
        self.color = other.color;
        self.geometry.clone_from(&other.geometry);
    }
}

/// Order entities by appearance tick, breaking ties by name.
pub fn by_appearance(a: &Entity, b: &Entity) -> Ordering {
    a.appear_tick
        .cmp(&b.appear_tick)
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str, appear: Tick, disappear: Tick) -> Entity {
        Entity::new(
            name,
            Color::new(1.0, 0.0, 0.0),
            Position::new(0.0, 0.0),
            Geometry::rectangle(10.0, 10.0).unwrap(),
            appear,
            disappear,
        )
        .unwrap()
    }

    #[test]
    fn test_position_equality_uses_tolerance() {
        assert_eq!(Position::new(1.0, 2.0), Position::new(1.005, 1.995));
        assert_ne!(Position::new(1.0, 2.0), Position::new(1.02, 2.0));
    }

    #[test]
    fn test_color_clamps_and_renders() {
        let color = Color::new(1.5, -0.2, 0.5);
        assert_eq!(color.components(), [1.0, 0.0, 0.5]);
        assert_eq!(color.to_markup(), "rgb(255,0,127)");
    }

    #[test]
    fn test_invalid_lifetime_rejected() {
        let rect = Geometry::rectangle(1.0, 1.0).unwrap();
        let origin = Position::new(0.0, 0.0);
        for (appear, disappear) in [(-1, 5), (0, -1), (10, 5)] {
            let result = Entity::new("R", Color::BLACK, origin, rect.clone(), appear, disappear);
            assert!(
                matches!(result, Err(SceneError::InvalidLifetime { .. })),
                "({appear}, {disappear}) should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let bad = Geometry::Rectangle {
            width: 0.0,
            height: 1.0,
        };
        let result = Entity::new("R", Color::BLACK, Position::new(0.0, 0.0), bad, 0, 1);
        assert!(matches!(result, Err(SceneError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = square("R", 0, 10);
        let mut copy = original.clone();
        copy.move_to(Position::new(5.0, 5.0));
        copy.rescale(&[1.0, 2.0]).unwrap();
        copy.recolor(Color::WHITE);
        assert_eq!(original.position(), Position::new(0.0, 0.0));
        assert_eq!(original.dimensions(), vec![10.0, 10.0]);
        assert_eq!(original.color(), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_teleport_keeps_identity() {
        let mut moving = square("R", 0, 10).with_layer(2);
        let mut target = square("Other", 3, 7);
        target.move_to(Position::new(9.0, 9.0));
        target.recolor(Color::WHITE);
        target.rescale(&[3.0, 4.0]).unwrap();

        moving.teleport_to(&target);
        assert_eq!(moving.name(), "R");
        assert_eq!(moving.appear_tick(), 0);
        assert_eq!(moving.disappear_tick(), 10);
        assert_eq!(moving.layer(), 2);
        assert_eq!(moving.position(), Position::new(9.0, 9.0));
        assert_eq!(moving.color(), Color::WHITE);
        assert_eq!(moving.dimensions(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_by_appearance_breaks_ties_by_name() {
        let mut shapes = vec![square("b", 5, 9), square("a", 5, 9), square("c", 1, 9)];
        shapes.sort_by(by_appearance);
        let names: Vec<_> = shapes.iter().map(Entity::name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_visibility_window() {
        let shape = square("R", 5, 50);
        assert!(!shape.is_visible_at(4));
        assert!(shape.is_visible_at(5));
        assert!(shape.is_visible_at(49));
        assert!(!shape.is_visible_at(50));
    }
}
