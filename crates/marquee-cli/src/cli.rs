#![forbid(unsafe_code)]

//! Command-line argument parsing for the marquee binary.
//!
//! Parses args by hand to keep the binary lean. Options are layered, later
//! layers winning: a `--config` JSON file, then `MARQUEE_*` environment
//! variables, then command-line flags.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use marquee::{ConfigError, RawOptions, RenderConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
marquee: wrap, align, space and color console text

USAGE:
    marquee [OPTIONS] TEXT

    Use | in TEXT to break lines.

OPTIONS:
    -a, --align=ALIGN             left (default), center or right
    -c, --colors=C1,C2            Foreground color; only the first one paints
    -b, --background=COLOR        Background color
    -g, --gradient=C1,C2[,...]    Gradient foreground, two or more colors
    -t, --transition-gradient     Blend gradient colors in RGB instead of hue
    -i, --independent-gradient    Spread the gradient over each line separately
    -l, --letter-spacing=N        Spaces between characters, 0 to 1000 (default: 0)
    -z, --line-height=N           Blank lines between lines, 0 to 1000 (default: 0)
    -m, --max-length=N            Maximum line width, 0 for none (default: 0)
    -e, --env=ENV                 node (default) or browser
    -w, --width=N                 Use N columns instead of the terminal width
        --config=FILE             Read options from a JSON file
        --no-color                Disable all colors
    -h, --help                    Show this help message
    -V, -v, --version             Show version

COLORS:
    system, candy, black, red, green, yellow, blue, magenta, cyan, white,
    gray, redBright, greenBright, yellowBright, blueBright, magentaBright,
    cyanBright, whiteBright, or a hex value such as #ff8800

ENVIRONMENT VARIABLES:
    MARQUEE_ALIGN                 Override --align
    MARQUEE_COLORS                Override --colors
    MARQUEE_BACKGROUND            Override --background
    MARQUEE_GRADIENT              Override --gradient
    MARQUEE_TRANSITION_GRADIENT   Override --transition-gradient (true|false)
    MARQUEE_INDEPENDENT_GRADIENT  Override --independent-gradient (true|false)
    MARQUEE_LETTER_SPACING        Override --letter-spacing
    MARQUEE_LINE_HEIGHT           Override --line-height
    MARQUEE_MAX_LENGTH            Override --max-length
    MARQUEE_ENV                   Override --env
    MARQUEE_WIDTH                 Override --width
    MARQUEE_CONFIG                Override --config
    MARQUEE_LOG                   Log filter when built with tracing (e.g. debug)
    NO_COLOR                      Disable all colors when set";

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render text with the parsed options.
    Render(Opts),
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Text to render; positional arguments joined with a space.
    pub text: String,
    /// Options from the environment and flags, flags winning.
    pub raw: RawOptions,
    /// JSON file holding base options.
    pub config_file: Option<PathBuf>,
    /// Fixed viewport width instead of the terminal's.
    pub width: Option<usize>,
    /// Drop all coloring.
    pub no_color: bool,
}

/// Argument or option-file problems.
#[derive(Debug)]
pub enum CliError {
    /// A flag nobody knows.
    UnknownArgument(String),
    /// A flag that needs a value got none.
    MissingValue(&'static str),
    /// A value that does not parse for its flag.
    InvalidValue {
        /// Flag or variable name.
        name: String,
        /// The rejected value.
        value: String,
    },
    /// No text to render.
    MissingText,
    /// The `--config` file could not be read or parsed.
    ConfigFile {
        /// File path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
    /// The merged options did not validate.
    Config(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { name, value } => write!(f, "invalid {name} value: {value}"),
            Self::MissingText => f.write_str("no text given"),
            Self::ConfigFile { path, reason } => {
                write!(f, "cannot load {}: {reason}", path.display())
            }
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Flags that take a value, with their short forms.
const VALUE_FLAGS: &[(&str, Option<&str>)] = &[
    ("--align", Some("-a")),
    ("--colors", Some("-c")),
    ("--background", Some("-b")),
    ("--gradient", Some("-g")),
    ("--letter-spacing", Some("-l")),
    ("--line-height", Some("-z")),
    ("--max-length", Some("-m")),
    ("--env", Some("-e")),
    ("--width", Some("-w")),
    ("--config", None),
];

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_int(name: &str, value: &str) -> Result<i64, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_width(name: &str, value: &str) -> Result<usize, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(CliError::InvalidValue {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Apply one valued option, named by its long flag.
fn apply_value(opts: &mut Opts, flag: &str, name: &str, value: &str) -> Result<(), CliError> {
    match flag {
        "--align" => opts.raw.align = Some(value.to_owned()),
        "--colors" => opts.raw.colors = Some(split_list(value)),
        "--background" => opts.raw.background = Some(value.to_owned()),
        "--gradient" => opts.raw.gradient = Some(split_list(value)),
        "--letter-spacing" => opts.raw.letter_spacing = Some(parse_int(name, value)?),
        "--line-height" => opts.raw.line_height = Some(parse_int(name, value)?),
        "--max-length" => opts.raw.max_length = Some(parse_int(name, value)?),
        "--env" => opts.raw.env = Some(value.to_owned()),
        "--width" => opts.width = Some(parse_width(name, value)?),
        "--config" => opts.config_file = Some(PathBuf::from(value)),
        _ => return Err(CliError::UnknownArgument(name.to_owned())),
    }
    Ok(())
}

/// Environment variable for each valued flag.
const ENV_VARS: &[(&str, &str)] = &[
    ("MARQUEE_ALIGN", "--align"),
    ("MARQUEE_COLORS", "--colors"),
    ("MARQUEE_BACKGROUND", "--background"),
    ("MARQUEE_GRADIENT", "--gradient"),
    ("MARQUEE_LETTER_SPACING", "--letter-spacing"),
    ("MARQUEE_LINE_HEIGHT", "--line-height"),
    ("MARQUEE_MAX_LENGTH", "--max-length"),
    ("MARQUEE_ENV", "--env"),
    ("MARQUEE_WIDTH", "--width"),
    ("MARQUEE_CONFIG", "--config"),
];

fn apply_env<F>(opts: &mut Opts, lookup: &F) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, flag) in ENV_VARS {
        if let Some(value) = lookup(var) {
            apply_value(opts, flag, var, &value)?;
        }
    }
    if let Some(value) = lookup("MARQUEE_TRANSITION_GRADIENT") {
        opts.raw.transition_gradient =
            Some(parse_bool("MARQUEE_TRANSITION_GRADIENT", &value)?);
    }
    if let Some(value) = lookup("MARQUEE_INDEPENDENT_GRADIENT") {
        opts.raw.independent_gradient =
            Some(parse_bool("MARQUEE_INDEPENDENT_GRADIENT", &value)?);
    }
    // Set but empty NO_COLOR does not count.
    opts.no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
    Ok(())
}

fn long_flag_for(arg: &str) -> Option<&'static str> {
    VALUE_FLAGS
        .iter()
        .find(|(long, short)| *long == arg || short.is_some_and(|s| s == arg))
        .map(|(long, _)| *long)
}

/// Parse `args` (without the program name), reading the environment through
/// `lookup`.
///
/// # Errors
///
/// Unknown flags, missing or malformed values, and missing text.
pub fn parse_from<I, F>(args: I, lookup: F) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();
    apply_env(&mut opts, &lookup)?;

    let mut words = Vec::new();
    let mut args = args.into_iter();
    let mut only_text = false;
    while let Some(arg) = args.next() {
        if only_text || !arg.starts_with('-') || arg == "-" {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "--" => only_text = true,
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" | "-v" => return Ok(Command::Version),
            "--transition-gradient" | "-t" => opts.raw.transition_gradient = Some(true),
            "--independent-gradient" | "-i" => opts.raw.independent_gradient = Some(true),
            "--no-color" => opts.no_color = true,
            other => {
                if let Some((name, value)) = other.split_once('=')
                    && let Some(flag) = long_flag_for(name)
                {
                    apply_value(&mut opts, flag, name, value)?;
                } else if let Some(flag) = long_flag_for(other) {
                    let value = args.next().ok_or(CliError::MissingValue(flag))?;
                    apply_value(&mut opts, flag, other, &value)?;
                } else if other.len() > 1 && other[1..].parse::<f64>().is_ok() {
                    // Negative numbers read as text, e.g. `marquee -5`.
                    words.push(arg);
                } else {
                    return Err(CliError::UnknownArgument(other.to_owned()));
                }
            }
        }
    }

    if words.is_empty() {
        return Err(CliError::MissingText);
    }
    opts.text = words.join(" ");
    Ok(Command::Render(opts))
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Prints help or version and exits when asked to; exits with status 1
    /// on bad arguments.
    pub fn parse() -> Self {
        match parse_from(env::args().skip(1), |name| env::var(name).ok()) {
            Ok(Command::Render(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("marquee {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Load the option file (if any), layer the parsed options over it and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// [`CliError::ConfigFile`] when the file is unreadable or not valid
    /// JSON, [`CliError::Config`] when the merged options do not validate.
    pub fn resolve(&self) -> Result<RenderConfig, CliError> {
        let base = match &self.config_file {
            Some(path) => load_options(path)?,
            None => RawOptions::default(),
        };
        let config = RenderConfig::try_from(base.merge(self.raw.clone()))?;
        Ok(if self.no_color {
            config.without_color()
        } else {
            config
        })
    }
}

fn load_options(path: &Path) -> Result<RawOptions, CliError> {
    let text = fs::read_to_string(path).map_err(|err| CliError::ConfigFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|err| CliError::ConfigFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee::{Align, ColorSpec, NamedColor, RenderEnv};
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn render_opts(list: &[&str]) -> Opts {
        match parse_from(args(list), no_env).unwrap() {
            Command::Render(opts) => opts,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn positional_words_join() {
        let opts = render_opts(&["hello", "world"]);
        assert_eq!(opts.text, "hello world");
        assert_eq!(opts.raw, RawOptions::default());
    }

    #[test]
    fn long_flags_with_equals() {
        let opts = render_opts(&[
            "--align=center",
            "--colors=red,blue",
            "--letter-spacing=2",
            "--line-height=1",
            "--max-length=20",
            "--env=browser",
            "--width=40",
            "x",
        ]);
        assert_eq!(opts.raw.align.as_deref(), Some("center"));
        assert_eq!(
            opts.raw.colors,
            Some(vec!["red".to_string(), "blue".to_string()])
        );
        assert_eq!(opts.raw.letter_spacing, Some(2));
        assert_eq!(opts.raw.line_height, Some(1));
        assert_eq!(opts.raw.max_length, Some(20));
        assert_eq!(opts.raw.env.as_deref(), Some("browser"));
        assert_eq!(opts.width, Some(40));
    }

    #[test]
    fn short_flags_take_next_argument() {
        let opts = render_opts(&["-a", "right", "-c", "candy", "-g", "red,blue", "-t", "-i", "x"]);
        assert_eq!(opts.raw.align.as_deref(), Some("right"));
        assert_eq!(opts.raw.colors, Some(vec!["candy".to_string()]));
        assert_eq!(
            opts.raw.gradient,
            Some(vec!["red".to_string(), "blue".to_string()])
        );
        assert_eq!(opts.raw.transition_gradient, Some(true));
        assert_eq!(opts.raw.independent_gradient, Some(true));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_from(args(&["--help"]), no_env).unwrap(), Command::Help);
        assert_eq!(parse_from(args(&["x", "-V"]), no_env).unwrap(), Command::Version);
        assert_eq!(parse_from(args(&["-v"]), no_env).unwrap(), Command::Version);
        assert!(HELP_TEXT.contains("-V, -v, --version"));
    }

    #[test]
    fn missing_text_is_an_error() {
        assert!(matches!(
            parse_from(args(&["--align=left"]), no_env),
            Err(CliError::MissingText)
        ));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(matches!(
            parse_from(args(&["x", "--align"]), no_env),
            Err(CliError::MissingValue("--align"))
        ));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse_from(args(&["--font=block", "x"]), no_env).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --font=block");
    }

    #[test]
    fn bad_number_is_an_error() {
        let err = parse_from(args(&["--line-height=tall", "x"]), no_env).unwrap_err();
        assert_eq!(err.to_string(), "invalid --line-height value: tall");
    }

    #[test]
    fn double_dash_ends_flags() {
        let opts = render_opts(&["--", "--align=center"]);
        assert_eq!(opts.text, "--align=center");
        assert_eq!(opts.raw.align, None);
    }

    #[test]
    fn negative_number_text() {
        assert_eq!(render_opts(&["-5"]).text, "-5");
    }

    #[test]
    fn env_applies_before_flags() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("MARQUEE_ALIGN", "right"),
            ("MARQUEE_LINE_HEIGHT", "3"),
            ("MARQUEE_TRANSITION_GRADIENT", "yes"),
        ]);
        let lookup = |name: &str| env.get(name).map(|v| (*v).to_string());
        let Command::Render(opts) = parse_from(args(&["--align=left", "x"]), lookup).unwrap()
        else {
            panic!("expected render");
        };
        assert_eq!(opts.raw.align.as_deref(), Some("left"));
        assert_eq!(opts.raw.line_height, Some(3));
        assert_eq!(opts.raw.transition_gradient, Some(true));
    }

    #[test]
    fn bad_env_value_names_the_variable() {
        let lookup = |name: &str| (name == "MARQUEE_WIDTH").then(|| "wide".to_string());
        let err = parse_from(args(&["x"]), lookup).unwrap_err();
        assert_eq!(err.to_string(), "invalid MARQUEE_WIDTH value: wide");
    }

    #[test]
    fn no_color_env_drops_colors() {
        let lookup = |name: &str| (name == "NO_COLOR").then(|| "1".to_string());
        let Command::Render(opts) = parse_from(args(&["-c", "red", "x"]), lookup).unwrap() else {
            panic!("expected render");
        };
        assert!(opts.no_color);
        let config = opts.resolve().unwrap();
        assert!(!config.is_colored());
    }

    #[test]
    fn empty_no_color_is_ignored() {
        let lookup = |name: &str| (name == "NO_COLOR").then(String::new);
        let Command::Render(opts) = parse_from(args(&["x"]), lookup).unwrap() else {
            panic!("expected render");
        };
        assert!(!opts.no_color);
    }

    #[test]
    fn resolve_validates() {
        let opts = render_opts(&["--align=middle", "x"]);
        assert!(matches!(
            opts.resolve(),
            Err(CliError::Config(ConfigError::UnknownAlign(_)))
        ));

        let opts = render_opts(&["--letter-spacing=-1", "x"]);
        assert!(matches!(
            opts.resolve(),
            Err(CliError::Config(ConfigError::Negative { .. }))
        ));
    }

    #[test]
    fn resolve_builds_config() {
        let config = render_opts(&["-a", "center", "-c", "red", "-e", "browser", "x"])
            .resolve()
            .unwrap();
        assert_eq!(config.align, Align::Center);
        assert_eq!(config.env, RenderEnv::Browser);
        assert_eq!(config.colors, vec![ColorSpec::Named(NamedColor::Red)]);
    }

    #[test]
    fn config_file_is_the_base_layer() {
        let dir = env::temp_dir().join(format!("marquee-cli-test-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("options.json");
        fs::write(&path, r#"{"align": "right", "lineHeight": 2}"#).unwrap();

        let config_arg = format!("--config={}", path.display());
        let config = render_opts(&[config_arg.as_str(), "--line-height=1", "x"])
            .resolve()
            .unwrap();
        assert_eq!(config.align, Align::Right);
        assert_eq!(config.line_height, 1);

        fs::write(&path, "{not json").unwrap();
        let err = render_opts(&[config_arg.as_str(), "x"]).resolve().unwrap_err();
        assert!(matches!(err, CliError::ConfigFile { .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn help_text_lists_every_env_var() {
        for (var, _) in ENV_VARS {
            assert!(HELP_TEXT.contains(var), "{var} missing from help");
        }
        assert!(HELP_TEXT.contains("NO_COLOR"));
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
