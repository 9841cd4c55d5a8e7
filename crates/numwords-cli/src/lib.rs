// numwords-cli: shared utilities for CLI tools.
//
// Every tool accepts `--locale`, `--config` and `--verbose`. Settings are
// resolved in this order: built-in defaults, the TOML config file
// (`--config PATH` or `$NUMWORDS_CONFIG`), then command line flags.
//
// Config file format:
//
//   locale = "ru"
//
//   [alpha2digit]
//   relaxed = true
//   ordinal_threshold = 0

use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use numwords_engine::ScanOptions;
use numwords_lang::NumeralHandle;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "NUMWORDS_CONFIG";

/// Locale used when neither the config file nor `--locale` names one.
pub const DEFAULT_LOCALE: &str = "ru";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Contents of the TOML config file. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub locale: String,
    pub alpha2digit: ScanOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            alpha2digit: ScanOptions::default(),
        }
    }
}

impl Config {
    /// Load the config file at `path`, or at `$NUMWORDS_CONFIG` when `path`
    /// is `None`. Without either, the defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        tracing::debug!(path = %path.display(), locale = config.locale.as_str(), "config loaded");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Create a handle for the configured locale and options.
    pub fn handle(&self) -> Result<NumeralHandle> {
        NumeralHandle::with_options(&self.locale, self.alpha2digit.clone())
            .with_context(|| format!("cannot use locale {:?}", self.locale))
    }
}

// ---------------------------------------------------------------------------
// Arguments shared by every tool
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale tag (ru, en, ru-RU, ...); overrides the config file
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Path to a TOML config file [default: $NUMWORDS_CONFIG]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Install logging, load the config file and apply `--locale`.
    pub fn init(&self) -> Result<Config> {
        init_logging(self.verbose);
        let mut config = Config::load(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
    }
}

/// Flags overriding the `[alpha2digit]` table.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Let a tens word after a lone digit absorb the following unit
    #[arg(long)]
    pub relaxed: bool,

    /// Turn relaxed mode off even when the config file enables it
    #[arg(long, conflicts_with = "relaxed")]
    pub strict: bool,

    /// Ordinals at or below this value stay as words
    #[arg(long, value_name = "N")]
    pub ordinal_threshold: Option<u64>,

    /// Leave plus/minus words as they are
    #[arg(long)]
    pub no_signs: bool,

    /// Do not group long digit runs like phone numbers
    #[arg(long)]
    pub no_phone_grouping: bool,
}

impl ScanArgs {
    pub fn apply(&self, options: &mut ScanOptions) {
        if self.relaxed {
            options.relaxed = true;
        }
        if self.strict {
            options.relaxed = false;
        }
        if let Some(threshold) = self.ordinal_threshold {
            options.ordinal_threshold = threshold;
        }
        if self.no_signs {
            options.signed = false;
        }
        if self.no_phone_grouping {
            options.group_phone_numbers = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Logging and input
// ---------------------------------------------------------------------------

/// Log to stderr: `info` by default, `debug` when verbose. `RUST_LOG`
/// takes precedence over both.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Input lines: the positional arguments joined as one line, or every line
/// of stdin when there are none.
pub fn input_lines(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(vec![args.join(" ")]);
    }
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read stdin")
}

/// The whole input: positional arguments joined, or all of stdin.
pub fn input_text(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}
