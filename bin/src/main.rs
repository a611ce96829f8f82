//! ewmom CLI binary.
//!
//! Provides a command-line interface for the EWMA crossover momentum signal.

mod cmd;
mod data;
mod logging;
mod signals;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ewmom_signals::momentum::EwmaCrossoverConfig;
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "ewmom")]
#[command(about = "EWMA crossover momentum signal", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available signals
    Signals {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute the signal at the last observation
    Score {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show every intermediate series, one row per observation
    Series {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Where observations come from.
#[derive(Debug, Args)]
pub(crate) struct InputArgs {
    /// Observations, oldest first (comma separated)
    #[arg(value_delimiter = ',', allow_negative_numbers = true)]
    pub(crate) values: Vec<f64>,

    /// JSON file holding an array of observations (read from stdin when
    /// neither values nor a file are given)
    #[arg(short, long, conflicts_with = "values")]
    pub(crate) input: Option<PathBuf>,

    /// Signal name or alias
    #[arg(short, long, default_value = "ewma_crossover_momentum")]
    pub(crate) signal: String,
}

/// Signal parameters. Flags override values loaded from `--config`.
#[derive(Debug, Args)]
pub(crate) struct ParamArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Span of the first EWMA leg
    #[arg(long)]
    pub(crate) fast: Option<usize>,

    /// Span of the second EWMA leg
    #[arg(long)]
    pub(crate) slow: Option<usize>,

    /// Span of the EWM volatility
    #[arg(long)]
    pub(crate) vol_look_back: Option<usize>,

    /// Valid observations required before values are defined
    #[arg(long)]
    pub(crate) min_periods: Option<usize>,

    /// Use finite-sample adjusted weights (`--adjust=false` turns it off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub(crate) adjust: Option<bool>,

    /// Skip missing observations when decaying weights (`--ignore-na=false` turns it off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub(crate) ignore_na: Option<bool>,
}

impl ParamArgs {
    /// Resolve the configuration: file (or defaults), then flag overrides.
    pub(crate) fn to_config(&self) -> Result<EwmaCrossoverConfig> {
        let mut config = match &self.config {
            Some(path) => EwmaCrossoverConfig::from_path(path)?,
            None => EwmaCrossoverConfig::default(),
        };

        if let Some(fast) = self.fast {
            config.fast = fast;
        }
        if let Some(slow) = self.slow {
            config.slow = slow;
        }
        if let Some(vol_look_back) = self.vol_look_back {
            config.vol_look_back = vol_look_back;
        }
        if let Some(min_periods) = self.min_periods {
            config.min_periods = min_periods;
        }
        if let Some(adjust) = self.adjust {
            config.adjust = adjust;
        }
        if let Some(ignore_na) = self.ignore_na {
            config.ignore_na = ignore_na;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signals { verbose } => {
            cmd::signals::list_signals(verbose);
        }
        Commands::Score {
            input,
            params,
            format,
        } => {
            cmd::score::show_score(&input, &params, format)?;
        }
        Commands::Series {
            input,
            params,
            format,
        } => {
            cmd::series::show_series(&input, &params, format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_values() {
        let cli = Cli::try_parse_from(["ewmom", "score", "1,2,-3.5", "--fast", "12"]).unwrap();
        let Commands::Score { input, params, format } = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(input.values, vec![1.0, 2.0, -3.5]);
        assert_eq!(input.signal, "ewma_crossover_momentum");
        assert_eq!(params.fast, Some(12));
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_values_conflict_with_input_file() {
        let result = Cli::try_parse_from(["ewmom", "series", "1,2", "--input", "prices.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "ewmom",
            "series",
            "--slow",
            "3",
            "--adjust",
            "--format",
            "json",
        ])
        .unwrap();
        let Commands::Series { params, format, .. } = cli.command else {
            panic!("expected series command");
        };

        let config = params.to_config().unwrap();
        assert_eq!(config.slow, 3);
        assert_eq!(config.fast, 10);
        assert!(config.adjust);
        assert!(!config.ignore_na);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_flags_switch_off_config_file() {
        let dir = std::env::temp_dir().join(format!("ewmom-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("adjusted.json");
        std::fs::write(&path, r#"{"adjust": true, "ignore_na": true, "fast": 20}"#).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "ewmom",
            "score",
            "1,2",
            "--config",
            path_arg.as_str(),
            "--adjust=false",
        ])
        .unwrap();
        let Commands::Score { params, .. } = cli.command else {
            panic!("expected score command");
        };
        let config = params.to_config().unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(!config.adjust);
        assert!(config.ignore_na);
        assert_eq!(config.fast, 20);
    }

    #[test]
    fn test_zero_span_rejected() {
        let cli = Cli::try_parse_from(["ewmom", "score", "1,2", "--min-periods", "0"]).unwrap();
        let Commands::Score { params, .. } = cli.command else {
            panic!("expected score command");
        };
        assert!(params.to_config().is_err());
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["ewmom", "signals", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }
}
