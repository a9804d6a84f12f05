#![forbid(unsafe_code)]

//! Render configuration.
//!
//! [`RenderConfig`] is the typed, already validated form the renderer
//! consumes; every value it can hold renders without error. [`RawOptions`]
//! is the loose form that comes from JSON files, environment variables and
//! command lines. `RenderConfig::try_from(raw)` is the one place where
//! user input is checked.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use marquee_style::{ColorSpec, Rgb};
use serde::Deserialize;

use crate::error::ConfigError;

/// Horizontal alignment of each display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// No padding.
    #[default]
    Left,
    /// Pad on the left by half the free space, rounded down.
    Center,
    /// Pad on the left by all of the free space.
    Right,
}

impl Align {
    /// Name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for Align {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ConfigError::UnknownAlign(s.to_owned())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the output is going to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderEnv {
    /// A terminal; alignment padding applies.
    #[default]
    Terminal,
    /// A browser, which lays text out itself; no alignment padding.
    Browser,
}

impl RenderEnv {
    /// Name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "node",
            Self::Browser => "browser",
        }
    }
}

impl FromStr for RenderEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "node" | "terminal" | "console" => Ok(Self::Terminal),
            "browser" => Ok(Self::Browser),
            _ => Err(ConfigError::UnknownEnv(s.to_owned())),
        }
    }
}

impl fmt::Display for RenderEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A foreground gradient over two or more concrete colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSpec {
    stops: Vec<Rgb>,
    /// Blend RGB channels linearly instead of walking the hue wheel.
    pub transition: bool,
    /// Stretch the gradient over each line on its own instead of over the
    /// widest line.
    pub independent: bool,
}

impl GradientSpec {
    /// Gradient through `stops`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::GradientTooShort`] with fewer than two stops, and
    /// [`ConfigError::GradientStop`] when a stop is `candy` or `system`.
    pub fn new(stops: &[ColorSpec]) -> Result<Self, ConfigError> {
        if stops.len() < 2 {
            return Err(ConfigError::GradientTooShort(stops.len()));
        }
        let stops = stops
            .iter()
            .map(|spec| {
                spec.rgb()
                    .ok_or_else(|| ConfigError::GradientStop(spec.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            stops,
            transition: false,
            independent: false,
        })
    }

    /// Gradient through already resolved colors.
    ///
    /// # Errors
    ///
    /// [`ConfigError::GradientTooShort`] with fewer than two stops.
    pub fn from_rgb(stops: Vec<Rgb>) -> Result<Self, ConfigError> {
        if stops.len() < 2 {
            return Err(ConfigError::GradientTooShort(stops.len()));
        }
        Ok(Self {
            stops,
            transition: false,
            independent: false,
        })
    }

    /// Use linear RGB blending.
    #[must_use]
    pub fn transition(mut self, transition: bool) -> Self {
        self.transition = transition;
        self
    }

    /// Spread the gradient over each line separately.
    #[must_use]
    pub fn independent(mut self, independent: bool) -> Self {
        self.independent = independent;
        self
    }

    /// The color stops, at least two.
    #[must_use]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }
}

/// Validated render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// Horizontal alignment.
    pub align: Align,
    /// Foreground colors. Only the first one paints; empty means uncolored.
    pub colors: Vec<ColorSpec>,
    /// Spaces inserted between adjacent graphemes.
    pub letter_spacing: usize,
    /// Blank rows inserted between consecutive content rows.
    pub line_height: usize,
    /// Hard cap on the wrap width.
    pub max_length: Option<NonZeroUsize>,
    /// Output environment.
    pub env: RenderEnv,
    /// Solid background behind every content row.
    pub background: Option<Rgb>,
    /// Gradient foreground; replaces `colors` when set.
    pub gradient: Option<GradientSpec>,
}

impl RenderConfig {
    /// Default configuration: left aligned, uncolored, no spacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: impl IntoIterator<Item = ColorSpec>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Single foreground color.
    #[must_use]
    pub fn color(self, color: ColorSpec) -> Self {
        self.colors([color])
    }

    #[must_use]
    pub fn letter_spacing(mut self, spacing: usize) -> Self {
        self.letter_spacing = spacing;
        self
    }

    #[must_use]
    pub fn line_height(mut self, height: usize) -> Self {
        self.line_height = height;
        self
    }

    /// Cap the wrap width. Zero removes the cap.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = NonZeroUsize::new(max_length);
        self
    }

    #[must_use]
    pub fn env(mut self, env: RenderEnv) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub fn background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Drop every color setting, leaving layout untouched.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.colors.clear();
        self.background = None;
        self.gradient = None;
        self
    }

    /// Whether rendering emits any escape codes at all.
    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.background.is_some()
            || self.gradient.is_some()
            || self.colors.first().is_some_and(|c| *c != ColorSpec::System)
    }
}

/// Loosely typed options, as read from JSON, environment or flags.
///
/// Every field is optional; absent fields take the [`RenderConfig`]
/// default. Counts are signed so a negative value can be reported instead
/// of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RawOptions {
    pub align: Option<String>,
    pub colors: Option<Vec<String>>,
    pub background: Option<String>,
    pub gradient: Option<Vec<String>>,
    pub transition_gradient: Option<bool>,
    pub independent_gradient: Option<bool>,
    pub letter_spacing: Option<i64>,
    pub line_height: Option<i64>,
    pub max_length: Option<i64>,
    pub env: Option<String>,
}

impl RawOptions {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            align: overrides.align.or(self.align),
            colors: overrides.colors.or(self.colors),
            background: overrides.background.or(self.background),
            gradient: overrides.gradient.or(self.gradient),
            transition_gradient: overrides.transition_gradient.or(self.transition_gradient),
            independent_gradient: overrides.independent_gradient.or(self.independent_gradient),
            letter_spacing: overrides.letter_spacing.or(self.letter_spacing),
            line_height: overrides.line_height.or(self.line_height),
            max_length: overrides.max_length.or(self.max_length),
            env: overrides.env.or(self.env),
        }
    }
}

/// Upper bound accepted for `letterSpacing` and `lineHeight` in
/// [`RawOptions`]. Both multiply the size of the output.
pub const MAX_SPACING: usize = 1000;

fn non_negative(field: &'static str, value: Option<i64>) -> Result<usize, ConfigError> {
    match value {
        None => Ok(0),
        Some(v) if v < 0 => Err(ConfigError::Negative { field, value: v }),
        Some(v) => usize::try_from(v).map_err(|_| ConfigError::TooLarge {
            field,
            value: v,
            max: usize::MAX,
        }),
    }
}

fn bounded(field: &'static str, value: Option<i64>, max: usize) -> Result<usize, ConfigError> {
    let n = non_negative(field, value)?;
    if n > max {
        return Err(ConfigError::TooLarge {
            field,
            value: value.unwrap_or_default(),
            max,
        });
    }
    Ok(n)
}

fn parse_colors(names: &[String]) -> Result<Vec<ColorSpec>, ConfigError> {
    names
        .iter()
        .map(|name| name.parse::<ColorSpec>().map_err(ConfigError::from))
        .collect()
}

impl TryFrom<RawOptions> for RenderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        let align = raw
            .align
            .as_deref()
            .map(str::parse::<Align>)
            .transpose()?
            .unwrap_or_default();
        let env = raw
            .env
            .as_deref()
            .map(str::parse::<RenderEnv>)
            .transpose()?
            .unwrap_or_default();
        let colors = parse_colors(raw.colors.as_deref().unwrap_or_default())?;

        let background = match raw.background.as_deref() {
            None => None,
            Some(name) => match name.parse::<ColorSpec>()? {
                ColorSpec::Candy => return Err(ConfigError::CandyBackground),
                spec => spec.rgb(),
            },
        };

        let gradient = match raw.gradient.as_deref() {
            None | Some([]) => None,
            Some(names) => Some(
                GradientSpec::new(&parse_colors(names)?)?
                    .transition(raw.transition_gradient.unwrap_or(false))
                    .independent(raw.independent_gradient.unwrap_or(false)),
            ),
        };

        Ok(Self {
            align,
            colors,
            letter_spacing: bounded("letterSpacing", raw.letter_spacing, MAX_SPACING)?,
            line_height: bounded("lineHeight", raw.line_height, MAX_SPACING)?,
            max_length: NonZeroUsize::new(non_negative("maxLength", raw.max_length)?),
            env,
            background,
            gradient,
        })
    }
}
