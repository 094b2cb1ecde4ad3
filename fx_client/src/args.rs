//! Command-line arguments for the FX client.
//!
//! This module defines the CLI interface using `clap`. The API base URL can also be
//! supplied through the `FX_API_URL` environment variable; it is read once at start.
use std::time::Duration;

use clap::Parser;
use fx_common::{FxError, Result};

use crate::shell::Page;

/// Base URL used when neither `--api-url` nor `FX_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the rates API.
    #[clap(long, env = "FX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Page shown on start.
    #[clap(long, value_enum, default_value_t = Page::Home)]
    pub page: Page,

    /// Seconds between two refreshes of the quotes page.
    #[clap(long, default_value_t = 60)]
    pub refresh_secs: u64,

    /// HTTP request timeout in seconds.
    #[clap(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Render the start page once its data has loaded, then exit.
    #[clap(long)]
    pub once: bool,

    /// Print plain text without terminal colours.
    #[clap(long)]
    pub no_color: bool,
}

/// Validated runtime settings derived from [`Args`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub refresh: Duration,
    pub timeout: Duration,
}

impl Args {
    /// Validate the raw arguments.
    pub fn settings(&self) -> Result<Settings> {
        let api_url = normalize_url(&self.api_url)?;
        if self.refresh_secs == 0 {
            return Err(FxError::Config("--refresh-secs must be positive".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(FxError::Config("--timeout-secs must be positive".to_string()));
        }
        Ok(Settings {
            api_url,
            refresh: Duration::from_secs(self.refresh_secs),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

/// Trim whitespace, quotes and trailing slashes so endpoints can be appended directly.
fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    let url = no_quotes.trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(FxError::Config(format!(
            "API URL must start with http:// or https://, got '{}'",
            raw
        )));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["fx_client"]);
        assert_eq!(args.page, Page::Home);
        assert!(!args.once);
        let settings = args.settings().unwrap();
        assert_eq!(settings.refresh, Duration::from_secs(60));
        assert!(settings.api_url.starts_with("http"));
    }

    #[test]
    fn explicit_values() {
        let args = Args::parse_from([
            "fx_client",
            "--api-url",
            "https://rates.example.com/",
            "--page",
            "slippage",
            "--refresh-secs",
            "5",
            "--once",
        ]);
        assert_eq!(args.page, Page::Slippage);
        let settings = args.settings().unwrap();
        assert_eq!(settings.api_url, "https://rates.example.com");
        assert_eq!(settings.refresh, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_values() {
        let args = Args::parse_from(["fx_client", "--api-url", "localhost:3000"]);
        assert!(matches!(args.settings(), Err(FxError::Config(_))));

        let args = Args::parse_from(["fx_client", "--refresh-secs", "0"]);
        assert!(matches!(args.settings(), Err(FxError::Config(_))));
    }

    #[test]
    fn quoted_url_is_unwrapped() {
        assert_eq!(
            normalize_url(" \"http://localhost:3000//\" ").unwrap(),
            "http://localhost:3000"
        );
    }
}
