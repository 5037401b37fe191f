//! JSON scene documents.
//!
//! A scene document declares shapes and motions in plain data. It is turned
//! into a [`Timeline`] through [`TimelineBuilder`], so every semantic check
//! the builder performs applies to documents too.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::builder::TimelineBuilder;
use crate::entity::{Color, Position};
use crate::error::{SceneError, SceneResult};
use crate::timeline::Timeline;
use crate::Tick;

/// Top-level scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Schema version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Background color, RGB in `[0.0, 1.0]`.
    #[serde(default = "default_background")]
    pub background: [f64; 3],

    /// Shapes, in insertion order.
    #[serde(default)]
    pub shapes: Vec<ShapeDecl>,

    /// Motions, in insertion order. Each must name a shape declared above.
    #[serde(default)]
    pub motions: Vec<MotionDecl>,
}

/// A shape declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDecl {
    pub name: String,

    /// Anchor: lower-left corner for rectangles, center for ellipses.
    pub x: f64,
    pub y: f64,

    #[serde(flatten)]
    pub geometry: GeometryDecl,

    pub color: [f64; 3],

    pub appear: Tick,
    pub disappear: Tick,

    #[serde(default)]
    pub layer: i32,
}

/// Kind-specific dimensions of a declared shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryDecl {
    Rectangle { width: f64, height: f64 },
    Ellipse { x_radius: f64, y_radius: f64 },
}

/// A motion declaration. `from` may be omitted to start from whatever state
/// the shape is in when the motion is inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionDecl {
    Move {
        target: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<[f64; 2]>,
        to: [f64; 2],
        start: Tick,
        end: Tick,
    },
    Recolor {
        target: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<[f64; 3]>,
        to: [f64; 3],
        start: Tick,
        end: Tick,
    },
    Scale {
        target: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Vec<f64>>,
        to: Vec<f64>,
        start: Tick,
        end: Tick,
    },
}

impl MotionDecl {
    pub fn target(&self) -> &str {
        match self {
            MotionDecl::Move { target, .. }
            | MotionDecl::Recolor { target, .. }
            | MotionDecl::Scale { target, .. } => target,
        }
    }

    fn to_animation(&self) -> SceneResult<Animation> {
        match self {
            MotionDecl::Move {
                from,
                to,
                start,
                end,
                ..
            } => Animation::movement(
                *start,
                *end,
                from.map(|[x, y]| Position::new(x, y)),
                Position::new(to[0], to[1]),
            ),
            MotionDecl::Recolor {
                from,
                to,
                start,
                end,
                ..
            } => Animation::recolor(*start, *end, from.map(Color::from), Color::from(*to)),
            MotionDecl::Scale {
                from,
                to,
                start,
                end,
                ..
            } => Animation::scale(*start, *end, from.clone(), to.clone()),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_background() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

impl SceneDocument {
    /// Parse a scene document from JSON.
    pub fn parse(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn background_color(&self) -> Color {
        Color::from(self.background)
    }

    /// Build the timeline this document describes.
    pub fn to_timeline(&self) -> SceneResult<Timeline> {
        let mut builder = TimelineBuilder::new();

        for shape in &self.shapes {
            let [r, g, b] = shape.color;
            match shape.geometry {
                GeometryDecl::Rectangle { width, height } => builder.add_rectangle_on_layer(
                    &shape.name,
                    shape.x,
                    shape.y,
                    width,
                    height,
                    r,
                    g,
                    b,
                    shape.appear,
                    shape.disappear,
                    shape.layer,
                )?,
                GeometryDecl::Ellipse { x_radius, y_radius } => builder.add_oval_on_layer(
                    &shape.name,
                    shape.x,
                    shape.y,
                    x_radius,
                    y_radius,
                    r,
                    g,
                    b,
                    shape.appear,
                    shape.disappear,
                    shape.layer,
                )?,
            };
        }

        for motion in &self.motions {
            builder.add_animation(motion.target(), motion.to_animation()?)?;
        }

        Ok(builder.build())
    }
}

/// A scene document loaded from disk together with its built timeline.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    /// Where the document was read from.
    pub path: PathBuf,

    /// The parsed document.
    pub document: SceneDocument,

    /// The timeline built from the document.
    pub timeline: Timeline,
}

impl LoadedScene {
    /// Read, parse and build a scene file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|e| SceneError::Io {
            path: path.clone(),
            source: e,
        })?;
        let document = SceneDocument::parse(&json)?;
        let timeline = document.to_timeline()?;
        tracing::debug!(
            path = %path.display(),
            shapes = document.shapes.len(),
            motions = document.motions.len(),
            "Loaded scene"
        );
        Ok(Self {
            path,
            document,
            timeline,
        })
    }
}
