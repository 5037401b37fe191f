//! Tick-bounded attribute transitions.
//!
//! An [`Animation`] moves, recolors or rescales exactly one entity between
//! `start_tick` and `end_tick`. It starts out unbound; the timeline binds it
//! to its target on insertion, at which point any missing start value is read
//! from the entity's current state and frozen.
//!
//! Values are always computed from the absolute tick:
//!
//! ```text
//! f = (min(tick, end) - start) / (end - start)     (only when tick > start)
//! value = from + f * (to - from)                    (per scalar component)
//! ```
//!
//! so applying the same tick twice, or applying ticks out of order, always
//! leaves the entity in the same state.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Color, Entity, Position};
use crate::error::{SceneError, SceneResult};
use crate::geometry::{check_dimensions, GeometryKind};
use crate::Tick;

/// The attribute category an animation mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Position,
    Color,
    Dimensions,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Position => f.write_str("position"),
            AttributeKind::Color => f.write_str("color"),
            AttributeKind::Dimensions => f.write_str("dimensions"),
        }
    }
}

/// Start and end values of an animation.
///
/// `from` is `None` until binding when the caller did not supply it.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Move {
        from: Option<Position>,
        to: Position,
    },
    Recolor {
        from: Option<Color>,
        to: Color,
    },
    Scale {
        from: Option<Vec<f64>>,
        to: Vec<f64>,
    },
}

impl Transition {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Transition::Move { .. } => AttributeKind::Position,
            Transition::Recolor { .. } => AttributeKind::Color,
            Transition::Scale { .. } => AttributeKind::Dimensions,
        }
    }
}

/// Binding state. An animation is bound at most once and never unbound.
#[derive(Debug, Clone, PartialEq)]
enum Binding {
    Unbound,
    Bound {
        target: String,
        geometry: GeometryKind,
    },
}

/// One markup-ready attribute component of an animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeComponent {
    pub name: &'static str,
    pub from: String,
    pub to: String,
}

/// A move, recolor or scale applied to one entity over `[start_tick, end_tick]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    start_tick: Tick,
    end_tick: Tick,
    transition: Transition,
    binding: Binding,
}

impl Animation {
    /// Move from `from` (or the entity's position at binding) to `to`.
    pub fn movement(
        start_tick: Tick,
        end_tick: Tick,
        from: Option<Position>,
        to: Position,
    ) -> SceneResult<Self> {
        Self::new(start_tick, end_tick, Transition::Move { from, to })
    }

    /// Recolor from `from` (or the entity's color at binding) to `to`.
    pub fn recolor(
        start_tick: Tick,
        end_tick: Tick,
        from: Option<Color>,
        to: Color,
    ) -> SceneResult<Self> {
        Self::new(start_tick, end_tick, Transition::Recolor { from, to })
    }

    /// Rescale from `from` (or the entity's dimensions at binding) to `to`.
    ///
    /// Values must be positive here; arity is checked against the target's
    /// geometry when the animation is bound.
    pub fn scale(
        start_tick: Tick,
        end_tick: Tick,
        from: Option<Vec<f64>>,
        to: Vec<f64>,
    ) -> SceneResult<Self> {
        for dims in from.iter().chain(std::iter::once(&to)) {
            if let Some(bad) = dims.iter().find(|d| !(**d > 0.0)) {
                return Err(SceneError::invalid_geometry(format!(
                    "scale dimensions must be positive, got {bad}"
                )));
            }
        }
        Self::new(start_tick, end_tick, Transition::Scale { from, to })
    }

    fn new(start_tick: Tick, end_tick: Tick, transition: Transition) -> SceneResult<Self> {
        if start_tick < 0 || start_tick >= end_tick {
            return Err(SceneError::InvalidInterval {
                start: start_tick,
                end: end_tick,
            });
        }
        Ok(Self {
            start_tick,
            end_tick,
            transition,
            binding: Binding::Unbound,
        })
    }

    pub fn start_tick(&self) -> Tick {
        self.start_tick
    }

    pub fn end_tick(&self) -> Tick {
        self.end_tick
    }

    pub fn kind(&self) -> AttributeKind {
        self.transition.kind()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Name of the bound entity, if bound.
    pub fn target(&self) -> Option<&str> {
        match &self.binding {
            Binding::Bound { target, .. } => Some(target),
            Binding::Unbound => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, Binding::Bound { .. })
    }

    /// Attach this animation to `entity`.
    ///
    /// Missing start values are captured from the entity's current state.
    /// Scale animations are checked against the entity's geometry arity.
    /// On failure the animation is left unbound and unchanged.
    pub fn bind(&mut self, entity: &Entity) -> SceneResult<()> {
        if let Binding::Bound { target, .. } = &self.binding {
            return Err(SceneError::AlreadyBound {
                target: target.clone(),
            });
        }

        let geometry = entity.geometry().kind();
        match &mut self.transition {
            Transition::Move { from, .. } => {
                from.get_or_insert(entity.position());
            }
            Transition::Recolor { from, .. } => {
                from.get_or_insert(entity.color());
            }
            Transition::Scale { from, to } => {
                check_dimensions(geometry, to)?;
                if let Some(dims) = from.as_deref() {
                    check_dimensions(geometry, dims)?;
                }
                if from.is_none() {
                    *from = Some(entity.dimensions());
                }
            }
        }

        self.binding = Binding::Bound {
            target: entity.name().to_string(),
            geometry,
        };
        Ok(())
    }

    /// Interpolation fraction at `tick`, or `None` before the animation begins.
    pub fn progress_at(&self, tick: Tick) -> Option<f64> {
        if tick <= self.start_tick {
            return None;
        }
        let t = tick.min(self.end_tick);
        let f = (t - self.start_tick) as f64 / (self.end_tick - self.start_tick) as f64;
        Some(f.clamp(0.0, 1.0))
    }

    /// Write the interpolated value at `tick` into `entity`.
    ///
    /// Does nothing while `tick <= start_tick`; holds the end value after
    /// `end_tick`.
    pub fn apply_absolute(&self, tick: Tick, entity: &mut Entity) -> SceneResult<()> {
        self.check_target(entity)?;
        let Some(f) = self.progress_at(tick) else {
            return Ok(());
        };
        self.write(f, entity)
    }

    /// Jump straight to the end value, ignoring time.
    pub fn apply_final(&self, entity: &mut Entity) -> SceneResult<()> {
        self.check_target(entity)?;
        self.write(1.0, entity)
    }

    fn write(&self, f: f64, entity: &mut Entity) -> SceneResult<()> {
        match &self.transition {
            Transition::Move { from: Some(from), to } => {
                entity.move_to(Position::new(lerp(from.x, to.x, f), lerp(from.y, to.y, f)));
                Ok(())
            }
            Transition::Recolor { from: Some(from), to } => {
                entity.recolor(Color::new(
                    lerp(from.r, to.r, f),
                    lerp(from.g, to.g, f),
                    lerp(from.b, to.b, f),
                ));
                Ok(())
            }
            Transition::Scale { from: Some(from), to } => {
                let dims: Vec<f64> = from
                    .iter()
                    .zip(to)
                    .map(|(a, b)| lerp(*a, *b, f))
                    .collect();
                entity.rescale(&dims)
            }
            _ => Err(SceneError::NotBound),
        }
    }

    fn check_target(&self, entity: &Entity) -> SceneResult<()> {
        match &self.binding {
            Binding::Unbound => Err(SceneError::NotBound),
            Binding::Bound { target, .. } if target != entity.name() => {
                Err(SceneError::UnknownTarget {
                    name: entity.name().to_string(),
                })
            }
            Binding::Bound { .. } => Ok(()),
        }
    }

    /// Whether both intervals `[start, end)` intersect.
    pub fn overlaps(&self, other: &Animation) -> bool {
        self.start_tick < other.end_tick && other.start_tick < self.end_tick
    }

    /// True if any animation in `others` mutates the same attribute kind of
    /// the same entity over an overlapping interval.
    pub fn conflicts_with<'a>(&self, others: impl IntoIterator<Item = &'a Animation>) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        others.into_iter().any(|other| {
            other.target() == Some(target) && other.kind() == self.kind() && self.overlaps(other)
        })
    }

    /// Markup attribute name per component. Empty until bound.
    pub fn attribute_names(&self) -> Vec<&'static str> {
        let Binding::Bound { geometry, .. } = &self.binding else {
            return Vec::new();
        };
        match self.kind() {
            AttributeKind::Position => geometry.position_attributes().to_vec(),
            AttributeKind::Color => vec!["fill"],
            AttributeKind::Dimensions => geometry.dimension_attributes().to_vec(),
        }
    }

    /// Markup start value per component. Empty until bound.
    pub fn from_values(&self) -> Vec<String> {
        match &self.transition {
            Transition::Move { from: Some(p), .. } => vec![fmt_number(p.x), fmt_number(p.y)],
            Transition::Recolor { from: Some(c), .. } => vec![c.to_markup()],
            Transition::Scale { from: Some(d), .. } => d.iter().copied().map(fmt_number).collect(),
            _ => Vec::new(),
        }
    }

    /// Markup end value per component.
    pub fn to_values(&self) -> Vec<String> {
        match &self.transition {
            Transition::Move { to, .. } => vec![fmt_number(to.x), fmt_number(to.y)],
            Transition::Recolor { to, .. } => vec![to.to_markup()],
            Transition::Scale { to, .. } => to.iter().copied().map(fmt_number).collect(),
        }
    }

    /// Number of markup components. Zero until bound.
    pub fn attribute_count(&self) -> usize {
        self.attribute_names().len()
    }

    /// Zipped name/from/to triples, in component order.
    pub fn components(&self) -> Vec<AttributeComponent> {
        self.attribute_names()
            .into_iter()
            .zip(self.from_values())
            .zip(self.to_values())
            .map(|((name, from), to)| AttributeComponent { name, from, to })
            .collect()
    }

    /// Human-readable description of the change, e.g. `moves from (0,0) to (5,5)`.
    pub fn describe_change(&self) -> String {
        match &self.transition {
            Transition::Move { from, to } => match from {
                Some(from) => format!("moves from {from} to {to}"),
                None => format!("moves to {to}"),
            },
            Transition::Recolor { from, to } => match from {
                Some(from) => format!("changes color from {from} to {to}"),
                None => format!("changes color to {to}"),
            },
            Transition::Scale { from, to } => {
                let labels: &[&str] = match &self.binding {
                    Binding::Bound { geometry, .. } => geometry.dimension_labels(),
                    Binding::Unbound => &[],
                };
                match from {
                    Some(from) => format!(
                        "scales from {} to {}",
                        describe_dimensions(labels, from),
                        describe_dimensions(labels, to)
                    ),
                    None => format!("scales to {}", describe_dimensions(labels, to)),
                }
            }
        }
    }
}

/// Order animations by start tick, then end tick.
pub fn by_start(a: &Animation, b: &Animation) -> Ordering {
    a.start_tick
        .cmp(&b.start_tick)
        .then_with(|| a.end_tick.cmp(&b.end_tick))
}

fn lerp(from: f64, to: f64, f: f64) -> f64 {
    from + f * (to - from)
}

/// Shortest round-trip decimal form of a number (`10`, `2.5`).
pub fn fmt_number(value: f64) -> String {
    format!("{value}")
}

fn describe_dimensions(labels: &[&str], dims: &[f64]) -> String {
    dims.iter()
        .enumerate()
        .map(|(i, d)| match labels.get(i) {
            Some(label) => format!("{label}: {d}"),
            None => d.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
