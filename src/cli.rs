//! Command-line interface parsing for the Stoic Wisdom terminal browser
//!
//! Handles the --page flag for opening directly on a content page, the
//! --api-url override for the backend base URL, and --check for probing
//! backend health without starting the TUI.

use clap::Parser;
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

/// Environment variable consulted for the backend base URL
pub const API_URL_ENV: &str = "STOICWISE_API_URL";

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified page name is not recognized
    #[error("Invalid page: '{0}'. Valid pages: home, philosophers, quotes, themes, timeline, incidents, surprise")]
    InvalidPage(String),
}

/// Pages the browser can open on directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPage {
    Home,
    Philosophers,
    Quotes,
    Themes,
    Timeline,
    Incidents,
    Surprise,
}

impl StartPage {
    /// Parses a page name as given on the command line
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "home" | "quote" => Some(StartPage::Home),
            "philosophers" | "philosopher" => Some(StartPage::Philosophers),
            "quotes" => Some(StartPage::Quotes),
            "themes" | "theme" => Some(StartPage::Themes),
            "timeline" => Some(StartPage::Timeline),
            "incidents" | "incident" => Some(StartPage::Incidents),
            "surprise" => Some(StartPage::Surprise),
            _ => None,
        }
    }
}

/// Stoicwise - browse Stoic philosophy from the terminal
#[derive(Parser, Debug)]
#[command(name = "stoicwise")]
#[command(about = "Browse Stoic quotes, philosophers, themes, incidents, and history")]
#[command(version)]
pub struct Cli {
    /// Open directly on a page
    ///
    /// Valid pages: home, philosophers, quotes, themes, timeline,
    /// incidents, surprise
    #[arg(long, value_name = "PAGE")]
    pub page: Option<String>,

    /// Backend API base URL (overrides the STOICWISE_API_URL variable)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Probe the backend /health and /ready endpoints and exit
    #[arg(long)]
    pub check: bool,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Page to open on, when given
    pub start_page: Option<StartPage>,
    /// Resolved backend base URL
    pub api_url: String,
    /// Whether to run the health probe instead of the TUI
    pub check: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            start_page: None,
            api_url: DEFAULT_BASE_URL.to_string(),
            check: false,
        }
    }
}

/// Parses a page string argument into a StartPage.
pub fn parse_page_arg(s: &str) -> Result<StartPage, CliError> {
    StartPage::from_str(s).ok_or_else(|| CliError::InvalidPage(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// The base URL is taken from --api-url, then the STOICWISE_API_URL
    /// environment variable, then the localhost default.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let start_page = match &cli.page {
            None => None,
            Some(page_str) => Some(parse_page_arg(page_str)?),
        };

        let api_url = cli
            .api_url
            .clone()
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(StartupConfig {
            start_page,
            api_url,
            check: cli.check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_arg_all_pages() {
        assert_eq!(parse_page_arg("home").unwrap(), StartPage::Home);
        assert_eq!(
            parse_page_arg("philosophers").unwrap(),
            StartPage::Philosophers
        );
        assert_eq!(parse_page_arg("quotes").unwrap(), StartPage::Quotes);
        assert_eq!(parse_page_arg("themes").unwrap(), StartPage::Themes);
        assert_eq!(parse_page_arg("timeline").unwrap(), StartPage::Timeline);
        assert_eq!(parse_page_arg("incidents").unwrap(), StartPage::Incidents);
        assert_eq!(parse_page_arg("surprise").unwrap(), StartPage::Surprise);
    }

    #[test]
    fn test_parse_page_arg_is_case_insensitive() {
        assert_eq!(parse_page_arg("Quotes").unwrap(), StartPage::Quotes);
        assert_eq!(parse_page_arg("TIMELINE").unwrap(), StartPage::Timeline);
    }

    #[test]
    fn test_parse_page_arg_singular_aliases() {
        assert_eq!(parse_page_arg("philosopher").unwrap(), StartPage::Philosophers);
        assert_eq!(parse_page_arg("incident").unwrap(), StartPage::Incidents);
        assert_eq!(parse_page_arg("theme").unwrap(), StartPage::Themes);
    }

    #[test]
    fn test_parse_page_arg_invalid() {
        let result = parse_page_arg("settings");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid page"));
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["stoicwise"]);
        assert!(cli.page.is_none());
        assert!(cli.api_url.is_none());
        assert!(!cli.check);
    }

    #[test]
    fn test_cli_parse_page_flag() {
        let cli = Cli::parse_from(["stoicwise", "--page", "quotes"]);
        assert_eq!(cli.page.as_deref(), Some("quotes"));
    }

    #[test]
    fn test_cli_parse_check_flag() {
        let cli = Cli::parse_from(["stoicwise", "--check"]);
        assert!(cli.check);
    }

    #[test]
    fn test_startup_config_default_url() {
        let cli = Cli::parse_from(["stoicwise"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.start_page.is_none());
        // Default unless the environment overrides it
        if std::env::var(API_URL_ENV).is_err() {
            assert_eq!(config.api_url, DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn test_startup_config_api_url_flag_wins() {
        let cli = Cli::parse_from(["stoicwise", "--api-url", "http://10.0.0.5:8080"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:8080");
    }

    #[test]
    fn test_startup_config_from_cli_with_page() {
        let cli = Cli::parse_from(["stoicwise", "--page", "surprise"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.start_page, Some(StartPage::Surprise));
    }

    #[test]
    fn test_startup_config_from_cli_invalid_page() {
        let cli = Cli::parse_from(["stoicwise", "--page", "settings"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
