//! Multi-stop foreground gradients.
//!
//! Stops are spaced evenly across the painted width. Each visible grapheme
//! samples the gradient at the column it starts in.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ansi;
use crate::color::Rgb;
use crate::strategy::ColorStrategy;

/// How colors are blended between two neighbouring stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMode {
    /// Walk the hue wheel (shortest direction) while blending saturation and
    /// value. Gives saturated, rainbow-like transitions.
    #[default]
    Hue,
    /// Straight linear blend of the RGB channels.
    Transition,
}

/// A foreground gradient across a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Rgb>,
    mode: GradientMode,
    span: Option<usize>,
}

impl Gradient {
    /// Gradient through `stops` in order. An empty gradient paints nothing;
    /// a single stop behaves like a solid color.
    #[must_use]
    pub fn new(stops: Vec<Rgb>, mode: GradientMode) -> Self {
        Self {
            stops,
            mode,
            span: None,
        }
    }

    /// Stretch the gradient over `span` columns for every row instead of
    /// over each row's own width. Rows then share colors column by column.
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = Some(span);
        self
    }

    /// The color stops.
    #[must_use]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Sample at `t` in `0.0..=1.0` (clamped).
    #[must_use]
    pub fn sample(&self, t: f64) -> Option<Rgb> {
        match self.stops.as_slice() {
            [] => None,
            [only] => Some(*only),
            stops => {
                let last = stops.len() - 1;
                let scaled = t.clamp(0.0, 1.0) * last as f64;
                let index = (scaled.floor() as usize).min(last - 1);
                let local = scaled - index as f64;
                let (from, to) = (stops[index], stops[index + 1]);
                Some(match self.mode {
                    GradientMode::Transition => from.lerp(to, local),
                    GradientMode::Hue => hue_blend(from, to, local),
                })
            }
        }
    }
}

fn hue_blend(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let (mut h1, s1, v1) = from.to_hsv();
    let (mut h2, s2, v2) = to.to_hsv();
    // Grays carry no hue; borrow the other end's so the blend does not
    // sweep through red.
    if s1 == 0.0 {
        h1 = h2;
    }
    if s2 == 0.0 {
        h2 = h1;
    }
    let mut delta = h2 - h1;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    Rgb::from_hsv(h1 + delta * t, s1 + (s2 - s1) * t, v1 + (v2 - v1) * t)
}

impl ColorStrategy for Gradient {
    fn paint(&self, _row: usize, line: &str, out: &mut String) {
        let span = self.span.unwrap_or_else(|| line.width());
        let denominator = span.saturating_sub(1).max(1) as f64;
        let mut column = 0usize;
        for grapheme in line.graphemes(true) {
            let width = grapheme.width();
            let visible = !grapheme.chars().all(char::is_whitespace);
            match self.sample(column as f64 / denominator) {
                Some(color) if visible => {
                    // fmt::Write for String never fails.
                    let _ = ansi::fg_wrapped(out, color, grapheme);
                }
                _ => out.push_str(grapheme),
            }
            column += width;
        }
    }
}
