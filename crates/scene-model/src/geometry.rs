//! Shape geometry: the kind-specific dimensions of an entity.
//!
//! Geometry is a closed set of variants. Each variant has a fixed arity
//! and a fixed set of markup attribute names, so nothing outside this
//! module needs to branch on the variant beyond asking for [`GeometryKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Shape discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Rectangle,
    Ellipse,
}

impl GeometryKind {
    /// Number of dimension components.
    pub fn arity(self) -> usize {
        match self {
            GeometryKind::Rectangle | GeometryKind::Ellipse => 2,
        }
    }

    /// Markup element tag.
    pub fn tag(self) -> &'static str {
        match self {
            GeometryKind::Rectangle => "rect",
            GeometryKind::Ellipse => "ellipse",
        }
    }

    /// Markup attribute names for the position axes.
    pub fn position_attributes(self) -> [&'static str; 2] {
        match self {
            GeometryKind::Rectangle => ["x", "y"],
            GeometryKind::Ellipse => ["cx", "cy"],
        }
    }

    /// Markup attribute names for each dimension, in dimension order.
    pub fn dimension_attributes(self) -> &'static [&'static str] {
        match self {
            GeometryKind::Rectangle => &["width", "height"],
            GeometryKind::Ellipse => &["rx", "ry"],
        }
    }

    /// Human-readable dimension labels, in dimension order.
    pub fn dimension_labels(self) -> &'static [&'static str] {
        match self {
            GeometryKind::Rectangle => &["Width", "Height"],
            GeometryKind::Ellipse => &["X radius", "Y radius"],
        }
    }

    /// What the position of this kind of shape refers to.
    pub fn anchor_label(self) -> &'static str {
        match self {
            GeometryKind::Rectangle => "Lower-left corner",
            GeometryKind::Ellipse => "Center",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Rectangle => f.write_str("rectangle"),
            GeometryKind::Ellipse => f.write_str("oval"),
        }
    }
}

/// Kind-specific shape dimensions. All dimensions are strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Rectangle { width: f64, height: f64 },
    Ellipse { x_radius: f64, y_radius: f64 },
}

impl Geometry {
    /// Create a rectangle geometry.
    pub fn rectangle(width: f64, height: f64) -> SceneResult<Self> {
        let geometry = Geometry::Rectangle { width, height };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Create an ellipse geometry.
    pub fn ellipse(x_radius: f64, y_radius: f64) -> SceneResult<Self> {
        let geometry = Geometry::Ellipse { x_radius, y_radius };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Rectangle { .. } => GeometryKind::Rectangle,
            Geometry::Ellipse { .. } => GeometryKind::Ellipse,
        }
    }

    /// Dimensions in kind order (`[width, height]` or `[x_radius, y_radius]`).
    pub fn dimensions(&self) -> Vec<f64> {
        match *self {
            Geometry::Rectangle { width, height } => vec![width, height],
            Geometry::Ellipse { x_radius, y_radius } => vec![x_radius, y_radius],
        }
    }

    /// Replace every dimension at once.
    ///
    /// Fails without modifying `self` if `dims` has the wrong arity or any
    /// value is not strictly positive.
    pub fn rescale(&mut self, dims: &[f64]) -> SceneResult<()> {
        check_dimensions(self.kind(), dims)?;
        match self {
            Geometry::Rectangle { width, height } => {
                *width = dims[0];
                *height = dims[1];
            }
            Geometry::Ellipse { x_radius, y_radius } => {
                *x_radius = dims[0];
                *y_radius = dims[1];
            }
        }
        Ok(())
    }

    /// Check the invariants of an already-constructed geometry.
    pub fn validate(&self) -> SceneResult<()> {
        check_dimensions(self.kind(), &self.dimensions())
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.kind().dimension_labels();
        for (i, (label, value)) in labels.iter().zip(self.dimensions()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

/// Validate a dimension vector against a geometry kind.
pub fn check_dimensions(kind: GeometryKind, dims: &[f64]) -> SceneResult<()> {
    if dims.len() != kind.arity() {
        return Err(SceneError::invalid_geometry(format!(
            "{kind} takes {} dimensions, got {}",
            kind.arity(),
            dims.len()
        )));
    }
    // Negated comparison so NaN is rejected too.
    if let Some(bad) = dims.iter().find(|d| !(**d > 0.0)) {
        return Err(SceneError::invalid_geometry(format!(
            "{kind} dimensions must be positive, got {bad}"
        )));
    }
    Ok(())
}
