//! Command line / environment configuration and logging setup.

use crate::error::{Result, ServerError};
use clap::{Parser, ValueEnum};
use close_mcp_tools::{CloseClient, DEFAULT_BASE_URL};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer as _};

pub const MISSING_API_KEY: &str = "CLOSE_API_KEY environment variable is required";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "close-mcp-server",
    version,
    about = "Close CRM tools for MCP clients, served over stdio"
)]
pub struct Cli {
    /// Close API key (sent as HTTP Basic username)
    #[arg(long, env = "CLOSE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Close REST API base URL
    #[arg(long, env = "CLOSE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (0 disables)
    #[arg(long, env = "CLOSE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, env = "CLOSE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "CLOSE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Validated runtime settings.
#[derive(Clone)]
pub struct Settings {
    api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Cli {
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when no usable API key was supplied.
    pub fn into_settings(self) -> Result<Settings> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ServerError::Config(MISSING_API_KEY.to_string()))?;

        Ok(Settings {
            api_key,
            base_url: self.base_url,
            timeout: self
                .timeout_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs),
            log_level: self.log_level,
            log_format: self.log_format,
        })
    }
}

impl Settings {
    /// # Errors
    ///
    /// Returns an error if the base URL is not a usable `http(s)` URL.
    pub fn client(&self) -> Result<CloseClient> {
        Ok(CloseClient::new(
            self.api_key.clone(),
            self.base_url.clone(),
            self.timeout,
        )?)
    }
}

/// Install the global subscriber. Output goes to stderr; stdout carries the MCP transport.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already installed.
pub fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| ServerError::Config(format!("invalid log level '{level}': {e}")))?,
    };

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ServerError::Startup(format!("logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::{Cli, LogFormat, MISSING_API_KEY};
    use clap::Parser as _;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["close-mcp-server"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("parse")
    }

    #[test]
    fn defaults_point_at_the_production_api() {
        let settings = parse(&["--api-key", "api_1"])
            .into_settings()
            .expect("settings");
        assert_eq!(settings.base_url, "https://api.close.com/api/v1");
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn zero_timeout_disables_it() {
        let settings = parse(&["--api-key", "k", "--timeout-secs", "0"])
            .into_settings()
            .expect("settings");
        assert_eq!(settings.timeout, None);

        let settings = parse(&["--api-key", "k", "--timeout-secs", "30"])
            .into_settings()
            .expect("settings");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn blank_api_key_is_rejected_with_the_startup_message() {
        let err = parse(&["--api-key", "   "])
            .into_settings()
            .expect_err("blank");
        assert_eq!(err.to_string(), MISSING_API_KEY);
    }

    #[test]
    fn log_format_accepts_json() {
        let cli = parse(&["--api-key", "k", "--log-format", "json"]);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["close-mcp-server", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn debug_output_hides_the_api_key() {
        let settings = parse(&["--api-key", "api_secret"])
            .into_settings()
            .expect("settings");
        assert!(!format!("{settings:?}").contains("api_secret"));
        assert!(settings.client().is_ok());
    }
}
