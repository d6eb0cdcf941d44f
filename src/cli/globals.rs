use crate::api::AppConfig;
use crate::cli::commands::{ARG_API_URL, ARG_OUTPUT, ARG_TIMEOUT, ARG_TOKEN_FILE, ARG_YES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: AppConfig,
    pub output: OutputFormat,
    pub assume_yes: bool,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            output: OutputFormat::Text,
            assume_yes: false,
        }
    }

    /// Reads the global flags shared by every subcommand.
    #[must_use]
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        let config = AppConfig::new(
            matches.get_one::<String>(ARG_API_URL).map(String::as_str),
            matches.get_one::<String>(ARG_TOKEN_FILE).map(String::as_str),
            matches.get_one::<u64>(ARG_TIMEOUT).copied(),
        );
        let output = match matches.get_one::<String>(ARG_OUTPUT).map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            config,
            output,
            assume_yes: matches.get_flag(ARG_YES),
        }
    }
}
