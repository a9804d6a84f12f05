#![forbid(unsafe_code)]

//! The render pipeline.
//!
//! ```text
//! text ─▶ split ─▶ letter-space ─▶ wrap ─▶ align ─▶ line height ─▶ color
//! ```
//!
//! Splitting, spacing and wrapping produce the *content rows*. Each content
//! row is then painted, wrapped in the background, and padded; padding stays
//! outside the escape codes so stripping them gives back the aligned text.
//! Filler rows for line height are inserted between content rows and are
//! always empty.

use std::iter;

use marquee_core::{
    Unbounded, Viewport, ViewportSource, debug, debug_span, effective_width, trace,
};
use marquee_style::ansi::strip_ansi;
use marquee_style::{
    Candy, ColorSpec, ColorStrategy, Gradient, GradientMode, Plain, Solid, paint_background,
};
use marquee_text::{display_width, letter_space, split_logical_lines, wrap_hard};

use crate::align::{left_padding, pad_into};
use crate::config::{GradientSpec, RenderConfig};

/// The rendered display lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOutput {
    /// Display lines in order, filler rows included.
    pub output: Vec<String>,
    /// Number of content rows (wrapped chunks); filler rows are not counted.
    pub lines: usize,
    /// Number of `|`-delimited input segments.
    pub logical_lines: usize,
}

impl RenderOutput {
    /// All display lines joined with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.output.join("\n")
    }

    /// Display lines with every escape sequence removed.
    #[must_use]
    pub fn plain(&self) -> Vec<String> {
        self.output
            .iter()
            .map(|line| strip_ansi(line).into_owned())
            .collect()
    }
}

/// Render `text` for `viewport` (or unbounded width when `None`).
///
/// The wrap width is the smaller of the viewport width and
/// `config.max_length`. Alignment pads against the viewport width, falling
/// back to `max_length` when there is no viewport.
#[must_use]
pub fn render(text: &str, config: &RenderConfig, viewport: Option<Viewport>) -> RenderOutput {
    let wrap_width = effective_width(viewport, config.max_length);
    let align_width = viewport
        .and_then(|v| v.layout_width())
        .or(config.max_length.map(|n| n.get()));

    let span = debug_span!(
        "marquee.render",
        text_len = text.len(),
        align = %config.align,
        env = %config.env,
        wrap_width = ?wrap_width,
        align_width = ?align_width
    );
    let _guard = span.enter();

    let logical = split_logical_lines(text);
    trace!(logical_lines = logical.len(), "split input");

    let mut rows: Vec<String> = Vec::with_capacity(logical.len());
    for line in &logical {
        let spaced = letter_space(line, config.letter_spacing);
        rows.extend(wrap_hard(&spaced, wrap_width).into_iter().map(str::to_owned));
    }
    trace!(rows = rows.len(), letter_spacing = config.letter_spacing, "wrapped rows");

    let strategy = strategy_for(config, &rows);
    trace!(strategy = ?strategy, background = ?config.background, "selected color strategy");

    let filler = config.line_height;
    let display_lines = rows
        .len()
        .saturating_sub(1)
        .checked_mul(filler)
        .and_then(|blank| blank.checked_add(rows.len()));
    let mut output = Vec::with_capacity(display_lines.unwrap_or(rows.len()));
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            output.extend(iter::repeat_n(String::new(), filler));
        }
        output.push(finish_row(config, strategy.as_ref(), index, row, align_width));
    }

    debug!(
        lines = rows.len(),
        display_lines = output.len(),
        "render complete"
    );

    RenderOutput {
        lines: rows.len(),
        logical_lines: logical.len(),
        output,
    }
}

/// Paint one content row, add the background, then pad.
fn finish_row(
    config: &RenderConfig,
    strategy: &dyn ColorStrategy,
    index: usize,
    row: &str,
    align_width: Option<usize>,
) -> String {
    let padding = left_padding(config.align, config.env, display_width(row), align_width);
    let painted = strategy.colorize(index, row);
    let painted = match config.background {
        Some(background) => {
            let mut out = String::with_capacity(painted.len() + 40);
            paint_background(background, &painted, &mut out);
            out
        }
        None => painted,
    };
    if padding == 0 {
        return painted;
    }
    let mut out = String::new();
    pad_into(&mut out, padding, &painted);
    out
}

/// Pick the foreground strategy: a gradient wins, otherwise the first color.
fn strategy_for(config: &RenderConfig, rows: &[String]) -> Box<dyn ColorStrategy> {
    if let Some(spec) = &config.gradient {
        return Box::new(gradient_for(spec, rows));
    }
    match config.colors.first() {
        None | Some(ColorSpec::System) => Box::new(Plain),
        Some(ColorSpec::Candy) => Box::new(Candy::default()),
        Some(spec @ (ColorSpec::Named(_) | ColorSpec::Hex(_))) => match spec.rgb() {
            Some(rgb) => Box::new(Solid::new(rgb)),
            None => Box::new(Plain),
        },
    }
}

fn gradient_for(spec: &GradientSpec, rows: &[String]) -> Gradient {
    let mode = if spec.transition {
        GradientMode::Transition
    } else {
        GradientMode::Hue
    };
    let gradient = Gradient::new(spec.stops().to_vec(), mode);
    if spec.independent {
        return gradient;
    }
    let widest = rows.iter().map(|row| display_width(row)).max().unwrap_or(0);
    gradient.with_span(widest)
}

/// Renders against whatever viewport its source reports.
///
/// ```
/// use marquee_core::Viewport;
/// use marquee_render::{RenderConfig, Renderer};
///
/// let renderer = Renderer::new(Viewport::new(4, 1));
/// let out = renderer.render("abcdef", &RenderConfig::default());
/// assert_eq!(out.output, vec!["abcd", "ef"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer<S = Unbounded> {
    source: S,
}

impl<S: ViewportSource> Renderer<S> {
    /// Bind a viewport source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The bound viewport source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Render `text`, querying the source for the current viewport.
    #[must_use]
    pub fn render(&self, text: &str, config: &RenderConfig) -> RenderOutput {
        render(text, config, self.source.viewport())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::Align;
    use marquee_style::NamedColor;
    use proptest::prelude::*;

    fn text_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[a-z |]{0,60}").expect("valid regex")
    }

    fn align_strategy() -> impl Strategy<Value = Align> {
        prop_oneof![Just(Align::Left), Just(Align::Center), Just(Align::Right)]
    }

    proptest! {
        #[test]
        fn rows_fit_the_viewport(text in text_strategy(), w in 1usize..30, spacing in 0usize..4) {
            let config = RenderConfig::new().letter_spacing(spacing);
            let out = render(&text, &config, Some(Viewport::new(w, 10)));
            for row in &out.output {
                prop_assert!(display_width(row) <= w, "row {:?} wider than {}", row, w);
            }
        }

        #[test]
        fn logical_lines_match_segments(text in text_strategy()) {
            let out = render(&text, &RenderConfig::default(), None);
            prop_assert_eq!(out.logical_lines, text.split('|').count());
            prop_assert_eq!(out.lines, out.logical_lines);
        }

        #[test]
        fn output_length_accounts_for_filler(text in text_strategy(), w in 1usize..20, h in 0usize..4) {
            let config = RenderConfig::new().line_height(h);
            let out = render(&text, &config, Some(Viewport::new(w, 10)));
            prop_assert!(out.lines >= 1);
            prop_assert_eq!(out.output.len(), out.lines + (out.lines - 1) * h);
        }

        #[test]
        fn chunks_reassemble_each_segment(text in text_strategy(), w in 1usize..20) {
            let out = render(&text, &RenderConfig::default(), Some(Viewport::new(w, 10)));
            prop_assert_eq!(out.output.concat(), text.replace('|', ""));
        }

        #[test]
        fn stripping_color_gives_uncolored_render(
            text in text_strategy(),
            w in 1usize..30,
            align in align_strategy(),
            candy in any::<bool>(),
        ) {
            let color = if candy { ColorSpec::Candy } else { ColorSpec::Named(NamedColor::Green) };
            let base = RenderConfig::new().align(align);
            let plain = render(&text, &base, Some(Viewport::new(w, 10)));
            let colored = render(&text, &base.clone().color(color), Some(Viewport::new(w, 10)));
            prop_assert_eq!(colored.plain(), plain.output);
            prop_assert_eq!(colored.lines, plain.lines);
        }

        #[test]
        fn browser_output_has_no_leading_padding(text in "[a-z]{1,20}", w in 1usize..40) {
            let config = RenderConfig::new().align(Align::Right).env(crate::config::RenderEnv::Browser);
            let out = render(&text, &config, Some(Viewport::new(w, 10)));
            for row in &out.output {
                prop_assert!(!row.starts_with(' '));
            }
        }
    }
}
