#![forbid(unsafe_code)]

//! Horizontal alignment by left padding.

use crate::config::{Align, RenderEnv};

/// Number of spaces to put in front of a line `line_width` cells wide.
///
/// `available` is the alignment width; `None` means there is nothing to
/// align against. Lines at or over the available width get no padding, and
/// `RenderEnv::Browser` never pads.
#[inline]
#[must_use]
pub fn left_padding(
    align: Align,
    env: RenderEnv,
    line_width: usize,
    available: Option<usize>,
) -> usize {
    let Some(available) = available else {
        return 0;
    };
    if env == RenderEnv::Browser {
        return 0;
    }
    let free = available.saturating_sub(line_width);
    match align {
        Align::Left => 0,
        Align::Center => free / 2,
        Align::Right => free,
    }
}

/// Push `padding` spaces followed by `painted`.
pub fn pad_into(out: &mut String, padding: usize, painted: &str) {
    out.reserve(padding + painted.len());
    out.extend(std::iter::repeat_n(' ', padding));
    out.push_str(painted);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_never_pads() {
        assert_eq!(left_padding(Align::Left, RenderEnv::Terminal, 4, Some(80)), 0);
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(left_padding(Align::Center, RenderEnv::Terminal, 6, Some(10)), 2);
        assert_eq!(left_padding(Align::Center, RenderEnv::Terminal, 6, Some(11)), 2);
        assert_eq!(left_padding(Align::Center, RenderEnv::Terminal, 6, Some(12)), 3);
    }

    #[test]
    fn right_fills_the_gap() {
        assert_eq!(left_padding(Align::Right, RenderEnv::Terminal, 5, Some(10)), 5);
    }

    #[test]
    fn overlong_lines_get_nothing() {
        assert_eq!(left_padding(Align::Right, RenderEnv::Terminal, 12, Some(10)), 0);
        assert_eq!(left_padding(Align::Center, RenderEnv::Terminal, 10, Some(10)), 0);
    }

    #[test]
    fn browser_and_unbounded_skip_padding() {
        assert_eq!(left_padding(Align::Right, RenderEnv::Browser, 5, Some(10)), 0);
        assert_eq!(left_padding(Align::Center, RenderEnv::Terminal, 5, None), 0);
    }

    #[test]
    fn pad_into_prefixes_spaces() {
        let mut out = String::new();
        pad_into(&mut out, 3, "ab");
        assert_eq!(out, "   ab");
    }
}
