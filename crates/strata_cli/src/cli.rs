use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Trace refracted rays through horizontal velocity layers")]
pub struct Args {
    /// Survey description (JSON). Uses the built-in seven-layer survey when omitted
    #[arg(short, long)]
    pub survey: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,

    /// Output PNG path (overrides the survey's plot output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image width in pixels (overrides the survey)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the survey)
    #[arg(long)]
    pub height: Option<u32>,

    /// Skip writing the plot
    #[arg(long)]
    pub no_plot: bool,

    /// Trace rays one after another instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,

    /// Print the whole batch as one coordinate list and one angle list
    #[arg(long)]
    pub flat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["strata"]).unwrap();
        assert!(args.survey.is_none());
        assert!(args.output.is_none());
        assert!(!args.no_plot && !args.sequential && !args.flat);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "strata",
            "--survey",
            "two_layers.json",
            "-o",
            "out.png",
            "--width",
            "320",
            "--debug-level",
            "trace",
            "--flat",
        ])
        .unwrap();
        assert_eq!(args.survey, Some(PathBuf::from("two_layers.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, None);
        assert!(args.flat);
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(Args::try_parse_from(["strata", "--debug-level", "loud"]).is_err());
    }
}
