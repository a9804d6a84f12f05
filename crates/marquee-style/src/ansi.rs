#![forbid(unsafe_code)]

//! ANSI SGR generation and stripping.
//!
//! Writers target [`std::fmt::Write`] because painted rows are built as
//! `String`s. Only truecolor foreground/background and their resets are
//! emitted; the stripper removes anything that starts with `ESC`.
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `ESC [ 38 ; 2 ; r ; g ; b m` | truecolor foreground |
//! | `ESC [ 48 ; 2 ; r ; g ; b m` | truecolor background |
//! | `ESC [ 39 m` | default foreground |
//! | `ESC [ 49 m` | default background |

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::color::Rgb;

const ESC: u8 = 0x1b;

/// Default foreground: `CSI 39 m`
pub const SGR_FG_DEFAULT: &str = "\x1b[39m";

/// Default background: `CSI 49 m`
pub const SGR_BG_DEFAULT: &str = "\x1b[49m";

/// Write SGR sequence for true color foreground: `CSI 38;2;r;g;b m`
pub fn sgr_fg_rgb<W: Write + ?Sized>(w: &mut W, color: Rgb) -> fmt::Result {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Write SGR sequence for true color background: `CSI 48;2;r;g;b m`
pub fn sgr_bg_rgb<W: Write + ?Sized>(w: &mut W, color: Rgb) -> fmt::Result {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Write SGR default foreground: `CSI 39 m`
pub fn sgr_fg_default<W: Write + ?Sized>(w: &mut W) -> fmt::Result {
    w.write_str(SGR_FG_DEFAULT)
}

/// Write SGR default background: `CSI 49 m`
pub fn sgr_bg_default<W: Write + ?Sized>(w: &mut W) -> fmt::Result {
    w.write_str(SGR_BG_DEFAULT)
}

/// Write `text` in the given foreground, restoring the default afterwards.
pub fn fg_wrapped<W: Write + ?Sized>(w: &mut W, color: Rgb, text: &str) -> fmt::Result {
    sgr_fg_rgb(w, color)?;
    w.write_str(text)?;
    sgr_fg_default(w)
}

/// Remove every escape sequence from `s`.
///
/// Handles CSI (`ESC [` … final byte), string-terminated sequences
/// (OSC/DCS/PM/APC, ended by BEL or `ESC \`) and two-byte escapes.
/// Returns `Cow::Borrowed` when there is nothing to strip.
#[must_use]
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let Some(first) = bytes.iter().position(|&b| b == ESC) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..first]);
    let mut i = first;
    while i < bytes.len() {
        if bytes[i] == ESC {
            i = escape_end(bytes, i);
            continue;
        }
        // ESC is ASCII, so slicing at ESC positions stays on char boundaries.
        let start = i;
        while i < bytes.len() && bytes[i] != ESC {
            i += 1;
        }
        out.push_str(&s[start..i]);
    }
    Cow::Owned(out)
}

/// Byte index just past the escape sequence starting at `esc`.
fn escape_end(bytes: &[u8], esc: usize) -> usize {
    let kind = esc + 1;
    match bytes.get(kind) {
        None => bytes.len(),
        Some(b'[') => csi_end(bytes, kind + 1),
        Some(b']' | b'P' | b'^' | b'_') => string_end(bytes, kind + 1),
        Some(b) if b.is_ascii() => kind + 1,
        // Not a valid escape; drop the lone ESC and keep the character.
        Some(_) => kind,
    }
}

fn csi_end(bytes: &[u8], from: usize) -> usize {
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match b {
            0x40..=0x7e => return from + offset + 1,
            0x20..=0x3f => {}
            // Malformed: stop before the offending byte.
            _ => return from + offset,
        }
    }
    bytes.len()
}

fn string_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut String) -> fmt::Result) -> String {
        let mut out = String::new();
        f(&mut out).unwrap();
        out
    }

    // --- SGR writers ---

    #[test]
    fn fg_rgb_sequence() {
        let out = render(|w| sgr_fg_rgb(w, Rgb::new(255, 0, 0)));
        assert_eq!(out, "\x1b[38;2;255;0;0m");
    }

    #[test]
    fn bg_rgb_sequence() {
        let out = render(|w| sgr_bg_rgb(w, Rgb::new(1, 22, 133)));
        assert_eq!(out, "\x1b[48;2;1;22;133m");
    }

    #[test]
    fn default_sequences() {
        assert_eq!(render(|w| sgr_fg_default(w)), "\x1b[39m");
        assert_eq!(render(|w| sgr_bg_default(w)), "\x1b[49m");
    }

    #[test]
    fn fg_wrapped_brackets_text() {
        let out = render(|w| fg_wrapped(w, Rgb::new(255, 0, 0), "test"));
        assert_eq!(out, "\x1b[38;2;255;0;0mtest\x1b[39m");
    }

    // --- strip_ansi ---

    #[test]
    fn strip_plain_borrows() {
        assert!(matches!(strip_ansi("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn strip_truecolor() {
        assert_eq!(strip_ansi("\x1b[38;2;255;0;0mtest\x1b[39m"), "test");
    }

    #[test]
    fn strip_keeps_prefix_and_suffix() {
        assert_eq!(strip_ansi("a\x1b[1mb\x1b[0mc"), "abc");
    }

    #[test]
    fn strip_osc_bel_and_st() {
        assert_eq!(strip_ansi("\x1b]8;;https://x\x07link\x1b]8;;\x07"), "link");
        assert_eq!(strip_ansi("\x1b]0;title\x1b\\text"), "text");
    }

    #[test]
    fn strip_two_byte_escape() {
        assert_eq!(strip_ansi("\x1b7saved\x1b8"), "saved");
    }

    #[test]
    fn strip_unterminated() {
        assert_eq!(strip_ansi("text\x1b"), "text");
        assert_eq!(strip_ansi("\x1b[38;2;1"), "");
        assert_eq!(strip_ansi("\x1b]8;;url"), "");
    }

    #[test]
    fn strip_malformed_csi_keeps_following_text() {
        assert_eq!(strip_ansi("\x1b[3\u{e9}t\u{e9}"), "\u{e9}t\u{e9}");
    }

    #[test]
    fn strip_lone_esc_before_multibyte() {
        assert_eq!(strip_ansi("a\x1b\u{e9}b"), "a\u{e9}b");
    }

    #[test]
    fn strip_wide_text() {
        assert_eq!(strip_ansi("\x1b[38;2;0;0;0m你好\x1b[39m"), "你好");
    }
}
