use proptest::prelude::*;

use tweenkit_scene_model::{Animation, Color, Position, Tick, Timeline, TimelineBuilder};

fn busy_timeline() -> Timeline {
    let mut builder = TimelineBuilder::new();
    builder
        .add_rectangle("R", 0.0, 0.0, 50.0, 100.0, 1.0, 0.0, 0.0, 0, 60)
        .unwrap()
        .add_oval_on_layer("C", 500.0, 100.0, 60.0, 30.0, 0.0, 0.0, 1.0, 5, 80, 2)
        .unwrap()
        .add_move("R", 0.0, 0.0, 10.0, 10.0, 0, 10)
        .unwrap()
        .add_move("R", 10.0, 10.0, 40.0, -20.0, 20, 45)
        .unwrap()
        .add_scale_to_change("R", 50.0, 100.0, 5.0, 300.0, 5, 30)
        .unwrap()
        .add_color_change("C", 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 10, 70)
        .unwrap()
        .add_animation(
            "C",
            Animation::movement(30, 75, None, Position::new(0.0, 0.0)).unwrap(),
        )
        .unwrap();
    builder.build()
}

proptest! {
    #[test]
    fn scrub_history_does_not_matter(history in prop::collection::vec(-5i64..100, 0..12), target in -5i64..100) {
        let mut fresh = busy_timeline();
        fresh.skip_to(target);

        let mut scrubbed = busy_timeline();
        for tick in history {
            scrubbed.skip_to(tick);
        }
        scrubbed.skip_to(target);

        prop_assert_eq!(fresh.entities(), scrubbed.entities());
    }

    #[test]
    fn repeated_skip_is_idempotent(t1 in 0i64..100, t2 in 0i64..100) {
        let mut timeline = busy_timeline();
        timeline.skip_to(t1);
        let once = timeline.entities();

        timeline.skip_to(t2);
        timeline.skip_to(t1);
        prop_assert_eq!(once, timeline.entities());
    }

    #[test]
    fn rewind_restores_origin(history in prop::collection::vec(-5i64..100, 1..12)) {
        let mut timeline = busy_timeline();
        let before = timeline.entities();
        for tick in history {
            timeline.skip_to(tick);
        }
        timeline.rewind();
        prop_assert_eq!(before, timeline.entities());
    }

    #[test]
    fn move_tracks_tick_inside_interval(t in 1i64..=10) {
        let mut timeline = busy_timeline();
        timeline.skip_to(t);
        let pos = timeline.entity("R").unwrap().position();
        prop_assert_eq!(pos, Position::new(t as f64, t as f64));
    }
}

#[test]
fn move_holds_end_value_between_motions() {
    let mut timeline = busy_timeline();
    for tick in 10..=20 {
        timeline.skip_to(tick);
        assert_eq!(
            timeline.entity("R").unwrap().position(),
            Position::new(10.0, 10.0),
            "tick {tick}"
        );
    }
}

#[test]
fn colors_stay_in_unit_range_at_every_tick() {
    let mut timeline = busy_timeline();
    let end: Tick = timeline.end_time();
    for snapshot in timeline.entities_at_all_ticks() {
        for entity in snapshot {
            let Color { r, g, b } = entity.color();
            for c in [r, g, b] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }
    assert_eq!(end, 80);
}
