//! The timeline: owner of every entity and animation in a scene.
//!
//! The timeline keeps a frozen origin snapshot of each entity taken at
//! insertion. [`Timeline::skip_to`] restores those snapshots and then replays
//! every animation at the absolute tick, in start order, so the current state
//! depends only on the last tick requested and never on scrub history.
//!
//! All snapshot queries hand out clones. Callers can mutate what they get
//! back without touching the timeline.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::animation::{by_start, Animation};
use crate::entity::Entity;
use crate::error::{SceneError, SceneResult};
use crate::Tick;

/// Scene state at one tick, in insertion order.
pub type Snapshot = Vec<Entity>;

/// Scene state at one tick, split into ascending layer buckets.
pub type LayeredSnapshot = Vec<Vec<Entity>>;

/// Entities and animations of a scene, with tick-addressable state.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    /// Live entities, in insertion order.
    entities: Vec<Entity>,

    /// Origin snapshots, parallel to `entities`.
    origins: Vec<Entity>,

    /// Entity name to index in `entities`.
    index: HashMap<String, usize>,

    /// Layer to entity indices, in insertion order.
    layers: BTreeMap<i32, Vec<usize>>,

    /// Bound animations, in insertion order.
    animations: Vec<Animation>,

    /// Indices into `animations`, sorted by start tick. Stable for ties.
    schedule: Vec<usize>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and capture its origin snapshot.
    pub fn add_entity(&mut self, entity: Entity) -> SceneResult<()> {
        if self.index.contains_key(entity.name()) {
            return Err(SceneError::DuplicateName {
                name: entity.name().to_string(),
            });
        }

        let idx = self.entities.len();
        tracing::debug!(
            entity = entity.name(),
            kind = %entity.geometry().kind(),
            layer = entity.layer(),
            "Adding entity"
        );

        self.index.insert(entity.name().to_string(), idx);
        self.layers.entry(entity.layer()).or_default().push(idx);
        self.origins.push(entity.clone());
        self.entities.push(entity);
        Ok(())
    }

    /// Bind `animation` to the entity named `target` and store it.
    ///
    /// Nothing is stored if the target is unknown, binding fails, or the
    /// animation overlaps an existing one of the same kind on the same entity.
    pub fn add_animation(&mut self, target: &str, mut animation: Animation) -> SceneResult<()> {
        let idx = *self
            .index
            .get(target)
            .ok_or_else(|| SceneError::UnknownTarget {
                name: target.to_string(),
            })?;

        animation.bind(&self.entities[idx])?;

        if animation.conflicts_with(&self.animations) {
            return Err(SceneError::ConflictingAnimation {
                target: target.to_string(),
                kind: animation.kind(),
                start: animation.start_tick(),
                end: animation.end_tick(),
            });
        }

        tracing::debug!(
            entity = target,
            kind = %animation.kind(),
            start = animation.start_tick(),
            end = animation.end_tick(),
            "Adding animation"
        );
        let slot = self
            .schedule
            .partition_point(|&i| by_start(&self.animations[i], &animation) != Ordering::Greater);
        self.schedule.insert(slot, self.animations.len());
        self.animations.push(animation);
        Ok(())
    }

    /// Set the scene to its state at the absolute `tick`.
    ///
    /// Entities are restored to their origin snapshots, then every animation
    /// is applied in start order so that, per attribute, the most recently
    /// started animation wins.
    pub fn skip_to(&mut self, tick: Tick) {
        self.rewind();
        for &i in &self.schedule {
            let animation = &self.animations[i];
            let Some(idx) = animation.target().and_then(|name| self.index.get(name)) else {
                continue;
            };
            if let Err(e) = animation.apply_absolute(tick, &mut self.entities[*idx]) {
                tracing::warn!(tick, "Failed to apply animation: {}", e);
            }
        }
    }

    /// Restore every entity to its origin snapshot.
    pub fn rewind(&mut self) {
        for (entity, origin) in self.entities.iter_mut().zip(&self.origins) {
            entity.teleport_to(origin);
        }
    }

    /// Last tick at which anything happens, or 0 for an empty timeline.
    pub fn end_time(&self) -> Tick {
        let last_disappear = self.entities.iter().map(Entity::disappear_tick);
        let last_animation = self.animations.iter().map(Animation::end_tick);
        last_disappear.chain(last_animation).max().unwrap_or(0).max(0)
    }

    /// Scene state at `tick`.
    ///
    /// This commits `tick` as the timeline's current state; rewind afterwards
    /// if that matters.
    pub fn entities_at(&mut self, tick: Tick) -> Snapshot {
        self.skip_to(tick);
        self.entities()
    }

    /// Scene state at every tick from 0 through [`end_time`](Self::end_time),
    /// indexed by tick. Leaves the timeline rewound.
    pub fn entities_at_all_ticks(&mut self) -> Vec<Snapshot> {
        self.rewind();
        let snapshots = (0..=self.end_time())
            .map(|tick| self.entities_at(tick))
            .collect();
        self.rewind();
        snapshots
    }

    /// Like [`entities_at_all_ticks`](Self::entities_at_all_ticks), with each
    /// tick split into one bucket per distinct layer, ascending.
    pub fn layered_entities_at_all_ticks(&mut self) -> Vec<LayeredSnapshot> {
        self.rewind();
        let mut ticks = Vec::new();
        for tick in 0..=self.end_time() {
            self.skip_to(tick);
            ticks.push(self.layered_entities());
        }
        self.rewind();
        ticks
    }

    /// Current state split into ascending layer buckets.
    pub fn layered_entities(&self) -> LayeredSnapshot {
        self.layers
            .values()
            .map(|indices| indices.iter().map(|&i| self.entities[i].clone()).collect())
            .collect()
    }

    /// Origin snapshots ordered by layer, then insertion order.
    pub fn original_entities(&self) -> Snapshot {
        self.layers
            .values()
            .flatten()
            .map(|&i| self.origins[i].clone())
            .collect()
    }

    /// Current state of every entity, in insertion order.
    pub fn entities(&self) -> Snapshot {
        self.entities.clone()
    }

    /// Current state of one entity.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&i| &self.entities[i])
    }

    /// Origin snapshot of one entity.
    pub fn original_entity(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&i| &self.origins[i])
    }

    /// All animations, in insertion order.
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Animations bound to the entity named `name`, in insertion order.
    pub fn animations_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Animation> {
        self.animations
            .iter()
            .filter(move |a| a.target() == Some(name))
    }

    /// Distinct layers in use, ascending.
    pub fn layers(&self) -> Vec<i32> {
        self.layers.keys().copied().collect()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Color, Position};
    use crate::geometry::Geometry;

    fn rect(name: &str, appear: Tick, disappear: Tick, layer: i32) -> Entity {
        Entity::new(
            name,
            Color::new(1.0, 0.0, 0.0),
            Position::new(0.0, 0.0),
            Geometry::rectangle(10.0, 20.0).unwrap(),
            appear,
            disappear,
        )
        .unwrap()
        .with_layer(layer)
    }

    fn move_to(start: Tick, end: Tick, x: f64, y: f64) -> Animation {
        Animation::movement(start, end, None, Position::new(x, y)).unwrap()
    }

    fn single_move_timeline() -> Timeline {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("R", 0, 20, 0)).unwrap();
        timeline
            .add_animation(
                "R",
                Animation::movement(
                    0,
                    10,
                    Some(Position::new(0.0, 0.0)),
                    Position::new(10.0, 10.0),
                )
                .unwrap(),
            )
            .unwrap();
        timeline
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("R", 0, 10, 0)).unwrap();
        let err = timeline.add_entity(rect("R", 5, 10, 1)).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateName { ref name } if name == "R"));
        assert_eq!(timeline.entity_count(), 1);
        assert_eq!(timeline.layers(), vec![0]);
    }

    #[test]
    fn test_unknown_target_rejected() {
        let mut timeline = Timeline::new();
        let err = timeline
            .add_animation("ghost", move_to(0, 10, 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, SceneError::UnknownTarget { .. }));
    }

    #[test]
    fn test_move_interpolates_per_tick() {
        let mut timeline = single_move_timeline();

        for t in 1..=10 {
            timeline.skip_to(t);
            let pos = timeline.entity("R").unwrap().position();
            assert_eq!(pos, Position::new(t as f64, t as f64), "tick {t}");
        }

        timeline.skip_to(0);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(0.0, 0.0)
        );

        timeline.skip_to(17);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(10.0, 10.0)
        );
    }

    #[test]
    fn test_same_kind_overlap_conflicts() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("R", 0, 20, 0)).unwrap();
        timeline
            .add_animation("R", move_to(0, 10, 5.0, 5.0))
            .unwrap();

        let err = timeline
            .add_animation("R", move_to(5, 15, 9.0, 9.0))
            .unwrap_err();
        assert!(matches!(err, SceneError::ConflictingAnimation { .. }));
        assert_eq!(timeline.animations().len(), 1);

        timeline
            .add_animation(
                "R",
                Animation::recolor(5, 15, None, Color::new(0.0, 1.0, 0.0)).unwrap(),
            )
            .unwrap();
        assert_eq!(timeline.animations().len(), 2);
    }

    #[test]
    fn test_back_to_back_moves_allowed() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("R", 0, 40, 0)).unwrap();
        timeline
            .add_animation("R", move_to(0, 10, 10.0, 0.0))
            .unwrap();
        timeline
            .add_animation("R", move_to(10, 20, 10.0, 10.0))
            .unwrap();
        assert_eq!(timeline.animations_for("R").count(), 2);
    }

    #[test]
    fn test_bind_uses_state_at_insertion() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("R", 0, 40, 0)).unwrap();
        timeline
            .add_animation("R", move_to(0, 10, 10.0, 0.0))
            .unwrap();
        timeline.skip_to(10);
        timeline
            .add_animation("R", move_to(10, 20, 10.0, 10.0))
            .unwrap();

        timeline.rewind();
        timeline.skip_to(15);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(10.0, 5.0)
        );
    }

    #[test]
    fn test_rewind_restores_origin() {
        let mut timeline = single_move_timeline();
        timeline
            .add_animation(
                "R",
                Animation::scale(2, 8, None, vec![1.0, 2.0]).unwrap(),
            )
            .unwrap();
        timeline
            .add_animation(
                "R",
                Animation::recolor(0, 5, None, Color::new(0.0, 0.0, 1.0)).unwrap(),
            )
            .unwrap();

        for t in [3, 19, 7, 0, 12] {
            timeline.skip_to(t);
        }
        timeline.rewind();

        let origin = timeline.original_entity("R").unwrap().clone();
        assert_eq!(timeline.entity("R").unwrap(), &origin);
    }

    #[test]
    fn test_skip_is_order_independent() {
        let mut timeline = single_move_timeline();
        timeline.skip_to(4);
        let once = timeline.entities();

        timeline.skip_to(9);
        timeline.skip_to(4);
        assert_eq!(timeline.entities(), once);
    }

    #[test]
    fn test_scrub_back_before_start_restores_origin() {
        let mut timeline = single_move_timeline();
        timeline.skip_to(8);
        timeline.skip_to(0);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_later_started_animation_wins_regardless_of_insertion() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("R", 0, 40, 0)).unwrap();
        timeline
            .add_animation(
                "R",
                Animation::movement(
                    20,
                    30,
                    Some(Position::new(10.0, 10.0)),
                    Position::new(20.0, 20.0),
                )
                .unwrap(),
            )
            .unwrap();
        timeline
            .add_animation(
                "R",
                Animation::movement(
                    0,
                    10,
                    Some(Position::new(0.0, 0.0)),
                    Position::new(10.0, 10.0),
                )
                .unwrap(),
            )
            .unwrap();

        timeline.skip_to(25);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(15.0, 15.0)
        );
        timeline.skip_to(15);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(10.0, 10.0)
        );
    }

    #[test]
    fn test_end_time() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.end_time(), 0);

        timeline.add_entity(rect("R", 0, 20, 0)).unwrap();
        timeline
            .add_animation("R", move_to(0, 15, 1.0, 1.0))
            .unwrap();
        assert_eq!(timeline.end_time(), 20);

        let mut later = Timeline::new();
        later.add_entity(rect("R", 0, 20, 0)).unwrap();
        later.add_animation("R", move_to(0, 25, 1.0, 1.0)).unwrap();
        assert_eq!(later.end_time(), 25);
    }

    #[test]
    fn test_snapshots_are_deep_copies() {
        let mut timeline = single_move_timeline();
        let mut snapshot = timeline.entities_at(5);
        snapshot[0].move_to(Position::new(100.0, 100.0));
        snapshot[0].rescale(&[1.0, 1.0]).unwrap();

        let live = timeline.entity("R").unwrap();
        assert_eq!(live.position(), Position::new(5.0, 5.0));
        assert_eq!(live.dimensions(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_all_ticks_indexed_by_tick_and_rewound() {
        let mut timeline = single_move_timeline();
        timeline.skip_to(7);

        let ticks = timeline.entities_at_all_ticks();
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks[3][0].position(), Position::new(3.0, 3.0));
        assert_eq!(ticks[20][0].position(), Position::new(10.0, 10.0));
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_layered_buckets_ascending() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("top", 0, 5, 1)).unwrap();
        timeline.add_entity(rect("bottom-a", 0, 5, 0)).unwrap();
        timeline.add_entity(rect("back", 0, 5, -3)).unwrap();
        timeline.add_entity(rect("bottom-b", 0, 5, 0)).unwrap();

        let ticks = timeline.layered_entities_at_all_ticks();
        assert_eq!(ticks.len(), 6);
        for buckets in &ticks {
            let names: Vec<Vec<&str>> = buckets
                .iter()
                .map(|bucket| bucket.iter().map(Entity::name).collect())
                .collect();
            assert_eq!(
                names,
                vec![vec!["back"], vec!["bottom-a", "bottom-b"], vec!["top"]]
            );
        }
    }

    #[test]
    fn test_original_entities_ordered_by_layer() {
        let mut timeline = Timeline::new();
        timeline.add_entity(rect("a", 0, 5, 2)).unwrap();
        timeline.add_entity(rect("b", 0, 5, 0)).unwrap();
        timeline.add_entity(rect("c", 0, 5, 2)).unwrap();
        timeline
            .add_animation("a", move_to(0, 5, 50.0, 50.0))
            .unwrap();
        timeline.skip_to(5);

        let originals = timeline.original_entities();
        let names: Vec<_> = originals.iter().map(Entity::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(originals[1].position(), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut timeline = single_move_timeline();
        let copy = timeline.clone();
        timeline.skip_to(10);
        assert_eq!(
            copy.entity("R").unwrap().position(),
            Position::new(0.0, 0.0)
        );
    }
}
