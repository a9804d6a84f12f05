//! Color strategies.
//!
//! A [`ColorStrategy`] paints one content row at a time. The renderer picks
//! a strategy once from the configuration and hands it every row, so the
//! wrap/align pipeline never branches on color kind.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::ansi;
use crate::color::{NamedColor, Rgb};

/// Paints display rows with ANSI color.
///
/// Implementations must only add escape sequences: stripping them from the
/// painted row has to give back `line` unchanged.
pub trait ColorStrategy: fmt::Debug + Send + Sync {
    /// Append the painted form of `line` to `out`. `row` is the zero-based
    /// index of the content row within the render.
    fn paint(&self, row: usize, line: &str, out: &mut String);

    /// Paint `line` into a fresh string.
    fn colorize(&self, row: usize, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + 16);
        self.paint(row, line, &mut out);
        out
    }
}

/// No color at all (the `system` color, or no colors configured).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plain;

impl ColorStrategy for Plain {
    fn paint(&self, _row: usize, line: &str, out: &mut String) {
        out.push_str(line);
    }
}

/// One foreground color around the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solid {
    color: Rgb,
}

impl Solid {
    /// Paint every row in `color`.
    #[must_use]
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// The foreground in use.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl ColorStrategy for Solid {
    fn paint(&self, _row: usize, line: &str, out: &mut String) {
        if line.is_empty() {
            return;
        }
        // fmt::Write for String never fails.
        let _ = ansi::fg_wrapped(out, self.color, line);
    }
}

/// Colors `candy` cycles through.
pub const CANDY_PALETTE: [NamedColor; 11] = [
    NamedColor::Red,
    NamedColor::Green,
    NamedColor::Yellow,
    NamedColor::Magenta,
    NamedColor::Cyan,
    NamedColor::RedBright,
    NamedColor::GreenBright,
    NamedColor::YellowBright,
    NamedColor::BlueBright,
    NamedColor::MagentaBright,
    NamedColor::CyanBright,
];

/// Stride between consecutive characters. Coprime with the palette length,
/// so every color is visited before any repeats.
const CANDY_STEP: usize = 7;

/// Offset applied per row so stacked rows do not share a column pattern.
const CANDY_ROW_SHIFT: usize = 3;

/// Every visible grapheme gets its own color from [`CANDY_PALETTE`].
///
/// The sequence is a fixed function of `(seed, row, position)`, so a
/// render is reproducible. Whitespace is copied through unpainted and does
/// not advance the position, so a row of only spaces comes back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Candy {
    seed: usize,
}

impl Candy {
    /// Candy coloring starting at palette offset `seed`.
    #[must_use]
    pub const fn new(seed: usize) -> Self {
        Self { seed }
    }

    /// Color used for the `index`-th painted grapheme of `row`.
    #[must_use]
    pub fn color_at(&self, row: usize, index: usize) -> Rgb {
        let slot = self
            .seed
            .wrapping_add(row.wrapping_mul(CANDY_ROW_SHIFT))
            .wrapping_add(index.wrapping_mul(CANDY_STEP));
        CANDY_PALETTE[slot % CANDY_PALETTE.len()].rgb()
    }
}

impl ColorStrategy for Candy {
    fn paint(&self, row: usize, line: &str, out: &mut String) {
        let mut painted = 0;
        for grapheme in line.graphemes(true) {
            if grapheme.chars().all(char::is_whitespace) {
                out.push_str(grapheme);
                continue;
            }
            let _ = ansi::fg_wrapped(out, self.color_at(row, painted), grapheme);
            painted += 1;
        }
    }
}

/// Wrap an already painted row in a background color.
pub fn paint_background(background: Rgb, painted: &str, out: &mut String) {
    if painted.is_empty() {
        return;
    }
    let _ = ansi::sgr_bg_rgb(out, background);
    out.push_str(painted);
    let _ = ansi::sgr_bg_default(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip_ansi;

    #[test]
    fn plain_is_identity() {
        assert_eq!(Plain.colorize(0, "test"), "test");
        assert_eq!(Plain.colorize(3, ""), "");
    }

    #[test]
    fn solid_red_matches_reference_bytes() {
        let red = Solid::new(NamedColor::Red.rgb());
        assert_eq!(red.colorize(0, "test"), "\x1b[38;2;255;0;0mtest\x1b[39m");
    }

    #[test]
    fn solid_leaves_empty_rows_alone() {
        let red = Solid::new(NamedColor::Red.rgb());
        assert_eq!(red.colorize(0, ""), "");
    }

    #[test]
    fn candy_round_trips_and_grows() {
        let candy = Candy::default();
        let painted = candy.colorize(0, "test");
        assert_eq!(strip_ansi(&painted), "test");
        assert!(painted.len() > "test".len());
    }

    #[test]
    fn candy_paints_each_visible_grapheme() {
        let painted = Candy::default().colorize(0, "a b");
        assert_eq!(painted.matches("\x1b[38;2;").count(), 2);
        assert_eq!(painted.matches("\x1b[39m").count(), 2);
        assert!(painted.contains("\x1b[39m \x1b[38;2;"));
    }

    #[test]
    fn candy_leaves_whitespace_rows_alone() {
        let candy = Candy::new(4);
        assert_eq!(candy.colorize(0, "   "), "   ");
        assert_eq!(candy.colorize(3, " \t "), " \t ");
    }

    #[test]
    fn candy_adjacent_characters_differ() {
        let candy = Candy::new(5);
        for index in 0..20 {
            assert_ne!(candy.color_at(2, index), candy.color_at(2, index + 1));
        }
    }

    #[test]
    fn candy_visits_whole_palette() {
        let candy = Candy::default();
        let mut seen: Vec<Rgb> = (0..CANDY_PALETTE.len())
            .map(|i| candy.color_at(0, i))
            .collect();
        seen.sort_by_key(|c| (c.r, c.g, c.b));
        seen.dedup();
        assert_eq!(seen.len(), CANDY_PALETTE.len());
    }

    #[test]
    fn candy_is_deterministic() {
        let a = Candy::new(1).colorize(4, "hello");
        let b = Candy::new(1).colorize(4, "hello");
        assert_eq!(a, b);
    }

    #[test]
    fn candy_keeps_grapheme_clusters_whole() {
        let text = "e\u{0301}👨‍👩‍👧";
        let painted = Candy::default().colorize(0, text);
        assert_eq!(strip_ansi(&painted), text);
        assert_eq!(painted.matches("\x1b[39m").count(), 2);
    }

    #[test]
    fn background_wraps_painted_row() {
        let mut out = String::new();
        paint_background(Rgb::new(0, 0, 255), "\x1b[38;2;255;0;0mx\x1b[39m", &mut out);
        assert_eq!(out, "\x1b[48;2;0;0;255m\x1b[38;2;255;0;0mx\x1b[39m\x1b[49m");
    }

    #[test]
    fn background_skips_empty_rows() {
        let mut out = String::new();
        paint_background(Rgb::new(0, 0, 255), "", &mut out);
        assert!(out.is_empty());
    }
}
