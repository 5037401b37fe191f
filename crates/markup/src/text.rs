//! Plain-text description of a timeline.

use tweenkit_common::clock::TickRate;
use tweenkit_scene_model::{by_appearance, by_start, fmt_number, Animation, Entity, Timeline};

/// Describe every shape (by appearance) and then every animation (by start).
///
/// ```text
/// Shapes:
/// Name: R
/// Type: rectangle
/// Lower-left corner: (200,200), Width: 50, Height: 100, Color: (1,0,0)
/// Appears at t=1s
/// Disappears at t=100s
///
/// Shape R moves from (200,200) to (300,300) from t=10s to t=50s
/// ```
pub fn describe(timeline: &Timeline, rate: &TickRate) -> String {
    let mut shapes = timeline.original_entities();
    shapes.sort_by(by_appearance);

    let mut out = String::from("Shapes:");
    for entity in &shapes {
        out.push('\n');
        out.push_str(&describe_entity(entity, rate));
        out.push('\n');
    }

    // stable sort keeps insertion order for identical intervals
    let mut animations: Vec<&Animation> = timeline.animations().iter().collect();
    animations.sort_by(|a, b| by_start(a, b));

    let lines: Vec<String> = animations
        .into_iter()
        .map(|animation| describe_animation(animation, rate))
        .collect();
    out.push('\n');
    out.push_str(&lines.join("\n"));
    out
}

/// Multi-line description of one shape's original state and lifetime.
pub fn describe_entity(entity: &Entity, rate: &TickRate) -> String {
    let kind = entity.geometry().kind();
    format!(
        "Name: {}\nType: {}\n{}: {}, {}, Color: {}\nAppears at t={}\nDisappears at t={}",
        entity.name(),
        kind,
        kind.anchor_label(),
        entity.position(),
        entity.geometry(),
        entity.color(),
        seconds(entity.appear_tick(), rate),
        seconds(entity.disappear_tick(), rate),
    )
}

/// One-line description of an animation and its interval.
pub fn describe_animation(animation: &Animation, rate: &TickRate) -> String {
    format!(
        "Shape {} {} from t={} to t={}",
        animation.target().unwrap_or("?"),
        animation.describe_change(),
        seconds(animation.start_tick(), rate),
        seconds(animation.end_tick(), rate),
    )
}

fn seconds(tick: i64, rate: &TickRate) -> String {
    format!("{}s", fmt_number(rate.tick_to_secs(tick)))
}
