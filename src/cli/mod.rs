//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::conversion::{ConversionConfig, DEFAULT_DELIMITER};
use crate::error::{ConversionError, ConversionResult};
use crate::parser::TextSource;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csvconv")]
#[command(about = "Convert tabular data between delimited text and JSON records")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input file path, or inline input text when --literal is set
    #[arg()]
    pub input: Option<String>,

    /// Treat the positional input as literal text instead of a path
    #[arg(long)]
    pub literal: bool,

    /// Read input from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target representation
    #[arg(long, value_enum)]
    pub to: Target,

    /// Field delimiter: a single character, or 'tab' (default: ';')
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Compact JSON output instead of pretty-printed
    #[arg(long)]
    pub plain: bool,

    /// Print conversion statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Conversion direction selected on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Delimited text output (expects JSON input)
    Csv,
    /// JSON output (expects delimited input)
    Json,
}

/// CLI configuration combining parsed arguments and conversion settings
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;
        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Resolve the input source from the arguments
    pub fn source(&self) -> ConversionResult<TextSource> {
        if self.args.stdin {
            return Ok(TextSource::Stdin);
        }
        match &self.args.input {
            Some(input) if self.args.literal => Ok(TextSource::Literal(input.clone())),
            Some(input) => Ok(TextSource::File(PathBuf::from(input))),
            None => Err(ConversionError::configuration(
                "no input given; pass a file path or --stdin",
            )),
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let delimiter = parse_delimiter(args.delimiter.as_deref())?;
        let config = ConversionConfig::default()
            .with_delimiter(delimiter)
            .with_pretty(!args.plain);
        config
            .validate()
            .map_err(|e| ConversionError::configuration(e))?;
        Ok(config)
    }
}

/// Parse the --delimiter argument into a single character
fn parse_delimiter(arg: Option<&str>) -> ConversionResult<char> {
    match arg {
        None => Ok(DEFAULT_DELIMITER),
        Some("tab") | Some("\\t") => Ok('\t'),
        Some(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(ConversionError::configuration(format!(
                    "delimiter must be a single character, got '{s}'"
                ))),
            }
        }
    }
}

/// CLI output helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {message}");
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {message}");
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    if matches!(error, ConversionError::JsonParse { .. }) {
        eprintln!("\nTip: the JSON input must be an array of flat records");
    } else if matches!(error, ConversionError::UnsupportedDocument { .. }) {
        eprintln!("\nTip: nested or array-valued fields have no tabular form");
    }

    eprintln!("\nTry 'csvconv --help' for usage information.");
}
