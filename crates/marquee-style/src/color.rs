//! Color values, the fixed named palette, and color-name parsing.

use std::fmt;
use std::str::FromStr;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand. The leading `#` is required.
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
                Some(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => None,
        }
    }

    /// Linear interpolation in RGB space. `t` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Convert to HSV: hue in degrees `0.0..360.0`, saturation and value in
    /// `0.0..=1.0`.
    #[must_use]
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        (hue, saturation, max)
    }

    /// Convert from HSV (hue in degrees, wrapped into `0.0..360.0`).
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }
}

/// The fixed console palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl NamedColor {
    /// Every palette entry, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Gray,
        Self::RedBright,
        Self::GreenBright,
        Self::YellowBright,
        Self::BlueBright,
        Self::MagentaBright,
        Self::CyanBright,
        Self::WhiteBright,
    ];

    /// Canonical camelCase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
            Self::RedBright => "redBright",
            Self::GreenBright => "greenBright",
            Self::YellowBright => "yellowBright",
            Self::BlueBright => "blueBright",
            Self::MagentaBright => "magentaBright",
            Self::CyanBright => "cyanBright",
            Self::WhiteBright => "whiteBright",
        }
    }

    /// Truecolor value emitted for this entry.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0, 0, 0),
            Self::Red => Rgb::new(255, 0, 0),
            Self::Green => Rgb::new(0, 255, 0),
            Self::Yellow => Rgb::new(255, 255, 0),
            Self::Blue => Rgb::new(0, 0, 255),
            Self::Magenta => Rgb::new(255, 0, 255),
            Self::Cyan => Rgb::new(0, 255, 255),
            Self::White => Rgb::new(229, 229, 229),
            Self::Gray => Rgb::new(128, 128, 128),
            Self::RedBright => Rgb::new(255, 85, 85),
            Self::GreenBright => Rgb::new(85, 255, 85),
            Self::YellowBright => Rgb::new(255, 255, 85),
            Self::BlueBright => Rgb::new(85, 85, 255),
            Self::MagentaBright => Rgb::new(255, 85, 255),
            Self::CyanBright => Rgb::new(85, 255, 255),
            Self::WhiteBright => Rgb::new(255, 255, 255),
        }
    }

    /// Look up a palette entry. Case, `-` and `_` are ignored, so
    /// `redBright`, `red-bright` and `RED_BRIGHT` are the same color.
    /// `grey` is accepted for `gray`.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let key = normalize(name);
        if key == "grey" {
            return Some(Self::Gray);
        }
        Self::ALL
            .into_iter()
            .find(|color| normalize(color.name()) == key)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A color as the user names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// The terminal's own foreground; paints nothing.
    System,
    /// Per-character cycling through [`crate::CANDY_PALETTE`].
    Candy,
    /// A palette entry.
    Named(NamedColor),
    /// An explicit `#rrggbb` value.
    Hex(Rgb),
}

impl ColorSpec {
    /// The single RGB value this spec stands for, if it has one.
    #[must_use]
    pub const fn rgb(self) -> Option<Rgb> {
        match self {
            Self::Named(color) => Some(color.rgb()),
            Self::Hex(rgb) => Some(rgb),
            Self::System | Self::Candy => None,
        }
    }
}

impl FromStr for ColorSpec {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Rgb::from_hex(trimmed)
                .map(Self::Hex)
                .ok_or_else(|| ParseColorError(s.to_string()));
        }
        match normalize(trimmed).as_str() {
            "system" => Ok(Self::System),
            "candy" => Ok(Self::Candy),
            _ => NamedColor::lookup(trimmed)
                .map(Self::Named)
                .ok_or_else(|| ParseColorError(s.to_string())),
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Candy => f.write_str("candy"),
            Self::Named(color) => write!(f, "{color}"),
            Self::Hex(rgb) => write!(f, "#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
        }
    }
}

/// A color name that is neither a palette entry, a keyword, nor valid hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}
