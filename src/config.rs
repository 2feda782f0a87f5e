//! Runtime configuration from flags and environment variables
//!
//! Every setting can be given on the command line or through its
//! environment variable; flags win over the environment.

use clap::builder::{BoolishValueParser, FalseyValueParser};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default tracing filter when `FLEXROW_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "flexrow",
    about = "Slot-based row composition for terminal UIs",
    version,
    after_help = "Examples:\n  gallery\n  gallery --log-dir /tmp/flexrow --log flexrow=debug\n  NO_COLOR=1 FLEXROW_MOUSE=off gallery\n"
)]
pub struct Config {
    /// Directory for log files; logging is off when unset
    #[arg(long, env = "FLEXROW_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Tracing filter directive
    #[arg(long = "log", env = "FLEXROW_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Suppress colors (attributes such as bold are always emitted)
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Capture mouse events
    #[arg(
        long,
        env = "FLEXROW_MOUSE",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub mouse: bool,
}

impl Config {
    /// Whether colors should be emitted
    pub fn colors(&self) -> bool {
        !self.no_color
    }

    /// Configured log directory, ignoring an empty value
    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.log_dir
            .as_ref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            no_color: false,
            mouse: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = ["FLEXROW_LOG_DIR", "FLEXROW_LOG", "NO_COLOR", "FLEXROW_MOUSE"];

    fn parse_clean(args: &[&str]) -> Config {
        temp_env::with_vars_unset(VARS, || Config::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(parse_clean(&["gallery"]), Config::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = temp_env::with_vars(
            [
                ("FLEXROW_LOG_DIR", Some("/tmp/flexrow")),
                ("FLEXROW_LOG", Some("flexrow=debug")),
                ("NO_COLOR", Some("1")),
                ("FLEXROW_MOUSE", Some("off")),
            ],
            || Config::try_parse_from(["gallery"]).unwrap(),
        );

        assert_eq!(config.log_dir(), Some(&PathBuf::from("/tmp/flexrow")));
        assert_eq!(config.log_filter, "flexrow=debug");
        assert!(!config.colors());
        assert!(!config.mouse);
    }

    #[test]
    fn test_mouse_accepts_boolish_values() {
        for (value, expected) in [("0", false), ("no", false), ("1", true), ("on", true)] {
            let config = temp_env::with_vars([("FLEXROW_MOUSE", Some(value))], || {
                Config::try_parse_from(["gallery"]).unwrap()
            });
            assert_eq!(config.mouse, expected, "FLEXROW_MOUSE={value}");
        }
    }

    #[test]
    fn test_unparseable_mouse_value_is_rejected() {
        let result = temp_env::with_vars([("FLEXROW_MOUSE", Some("sometimes"))], || {
            Config::try_parse_from(["gallery"])
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_environment() {
        let config = temp_env::with_vars(
            [("FLEXROW_LOG", Some("warn")), ("FLEXROW_MOUSE", Some("1"))],
            || Config::try_parse_from(["gallery", "--log", "trace", "--mouse", "false"]).unwrap(),
        );
        assert_eq!(config.log_filter, "trace");
        assert!(!config.mouse);
    }

    #[test]
    fn test_no_color_flag() {
        let config = parse_clean(&["gallery", "--no-color"]);
        assert!(!config.colors());
    }

    #[test]
    fn test_empty_log_dir_disables_logging() {
        let config = Config {
            log_dir: Some(PathBuf::new()),
            ..Config::default()
        };
        assert_eq!(config.log_dir(), None);
    }
}
