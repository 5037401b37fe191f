//! Declarative SVG export.
//!
//! Every entity becomes one shape element that starts hidden, a pair of
//! visibility toggles for its lifetime, and one `<animate>` per component of
//! each animation bound to it. Times are `tick / rate * 1000` milliseconds.
//!
//! With looping enabled a zero-area driver element named `base` repeats every
//! `end_time / rate * 1000` ms. All begin offsets become relative to
//! `base.begin`, and each shape gets reset elements that fire on `base.end`
//! so the next cycle starts from the original values.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use tweenkit_common::clock::TickRate;
use tweenkit_common::error::{TweenError, TweenResult};
use tweenkit_scene_model::{fmt_number, Animation, Color, Entity, Tick, Timeline};

/// Side length of the square canvas, in user units.
pub const CANVAS_SIZE: u32 = 10_000;

/// Id of the loop driver element.
const DRIVER_ID: &str = "base";

/// Duration of the end-of-cycle reset animations.
const RESET_DURATION_MS: u32 = 100;

/// Options for [`render_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Tick-to-time conversion.
    pub rate: TickRate,

    /// Repeat the animation forever.
    pub looping: bool,

    /// Fill of the canvas-sized background rectangle.
    pub background: Color,

    /// Only export these entities. `None` exports everything.
    pub visible: Option<BTreeSet<String>>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            rate: TickRate::ONE,
            looping: false,
            background: Color::WHITE,
            visible: None,
        }
    }
}

impl SvgOptions {
    fn shows(&self, entity: &Entity) -> bool {
        self.visible
            .as_ref()
            .map_or(true, |names| names.contains(entity.name()))
    }

    fn begin(&self, tick: Tick) -> String {
        let ms = fmt_number(self.rate.tick_to_ms(tick));
        if self.looping {
            format!("{DRIVER_ID}.begin+{ms}ms")
        } else {
            format!("{ms}ms")
        }
    }

    fn duration(&self, start: Tick, end: Tick) -> String {
        format!("{}ms", fmt_number(self.rate.tick_to_ms(end - start)))
    }
}

/// Render the timeline as an SVG document.
pub fn render_svg(timeline: &Timeline, options: &SvgOptions) -> TweenResult<String> {
    let mut out = String::new();
    write_document(&mut out, timeline, options)
        .map_err(|e| TweenError::markup(format!("Failed to format SVG: {e}")))?;
    Ok(out)
}

/// Render the timeline and write it to `path`.
pub fn export_svg(
    timeline: &Timeline,
    options: &SvgOptions,
    path: impl AsRef<Path>,
) -> TweenResult<()> {
    let path = path.as_ref();
    let svg = render_svg(timeline, options)?;
    std::fs::write(path, &svg)?;
    tracing::info!(
        path = %path.display(),
        bytes = svg.len(),
        looping = options.looping,
        "SVG exported"
    );
    Ok(())
}

fn write_document(
    out: &mut String,
    timeline: &Timeline,
    options: &SvgOptions,
) -> std::fmt::Result {
    writeln!(
        out,
        "<svg width=\"{CANVAS_SIZE}\" height=\"{CANVAS_SIZE}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">"
    )?;

    if options.looping {
        let cycle = fmt_number(options.rate.tick_to_ms(timeline.end_time()));
        writeln!(out, "<rect>")?;
        writeln!(
            out,
            "<animate id=\"{DRIVER_ID}\" begin=\"0;{DRIVER_ID}.end\" dur=\"{cycle}ms\" attributeName=\"visibility\" from=\"hide\""
        )?;
        writeln!(out, " to=\"hide\"/>")?;
        writeln!(out, "</rect>")?;
    }

    writeln!(
        out,
        "<rect id=\"BG\" x=\"0\" y=\"0\" width=\"{CANVAS_SIZE}\" height=\"{CANVAS_SIZE}\" fill=\"{}\" visibility=\"visible\">",
        options.background.to_markup()
    )?;
    writeln!(out, " </rect>")?;

    let mut written = 0usize;
    for entity in timeline.original_entities() {
        if !options.shows(&entity) {
            continue;
        }
        write_entity(out, &entity, timeline.animations_for(entity.name()), options)?;
        written += 1;
    }

    if let Some(names) = &options.visible {
        for name in names {
            if timeline.entity(name).is_none() {
                tracing::warn!(entity = %name, "Visible subset names an unknown entity");
            }
        }
    }

    tracing::debug!(
        entities = written,
        end_time = timeline.end_time(),
        "Rendered SVG"
    );

    write!(out, "</svg>")
}

fn write_entity<'a>(
    out: &mut String,
    entity: &Entity,
    animations: impl Iterator<Item = &'a Animation>,
    options: &SvgOptions,
) -> std::fmt::Result {
    let kind = entity.geometry().kind();
    let position = entity.position();
    let [x_attr, y_attr] = kind.position_attributes();

    write!(
        out,
        "<{} id=\"{}\" {x_attr}=\"{}\" {y_attr}=\"{}\" ",
        kind.tag(),
        escape_attribute(entity.name()),
        fmt_number(position.x),
        fmt_number(position.y)
    )?;
    for (attr, value) in kind.dimension_attributes().iter().zip(entity.dimensions()) {
        write!(out, "{attr}=\"{}\" ", fmt_number(value))?;
    }
    writeln!(
        out,
        "fill=\"{}\" visibility=\"hidden\">",
        entity.color().to_markup()
    )?;

    for (to, tick) in [
        ("visible", entity.appear_tick()),
        ("hidden", entity.disappear_tick()),
    ] {
        writeln!(
            out,
            "<animate attributeType=\"xml\" attributeName=\"visibility\" to=\"{to}\" begin=\"{}\" fill=\"freeze\" />",
            options.begin(tick)
        )?;
    }

    for animation in animations {
        let begin = options.begin(animation.start_tick());
        let dur = options.duration(animation.start_tick(), animation.end_tick());
        for component in animation.components() {
            writeln!(
                out,
                "<animate attributeType=\"xml\" begin=\"{begin}\" dur=\"{dur}\" attributeName=\"{}\" from=\"{}\" to=\"{}\" fill=\"freeze\" />",
                component.name, component.from, component.to
            )?;
        }
    }

    if options.looping {
        write_resets(out, entity)?;
    }

    writeln!(out, "</{}>", kind.tag())
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Snap every mutable attribute back to its original value at the end of a
/// loop cycle.
fn write_resets(out: &mut String, entity: &Entity) -> std::fmt::Result {
    let kind = entity.geometry().kind();
    let position = entity.position();

    let dimensions = kind
        .dimension_attributes()
        .iter()
        .copied()
        .zip(entity.dimensions().into_iter().map(fmt_number));
    let positions = kind
        .position_attributes()
        .into_iter()
        .zip([fmt_number(position.x), fmt_number(position.y)]);
    let fill = std::iter::once(("fill", entity.color().to_markup()));

    for (attr, value) in dimensions.chain(positions).chain(fill) {
        writeln!(
            out,
            "<animate attributeType=\"xml\" begin=\"{DRIVER_ID}.end\" dur=\"{RESET_DURATION_MS}ms\" attributeName=\"{attr}\" to=\"{value}\" fill=\"freeze\" />"
        )?;
    }
    Ok(())
}
