use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use dlany_engine::DEFAULT_ANALYTICS_HOST;
use dlany_logging::LogDestination;
use log::LevelFilter;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[clap(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    /// Local runs: analytics capture is switched off.
    Development,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[clap(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[clap(name = "dlany", about = "Universal Media Downloader", version)]
pub struct AppConfig {
    /// Base url of the processing backend. Processing is simulated when unset
    #[clap(long, env = "DLANY_API_URL")]
    pub api_url: Option<String>,

    /// Project key for analytics capture
    #[clap(long, env = "DLANY_POSTHOG_KEY", hide_env_values = true)]
    pub posthog_key: Option<String>,

    /// Analytics host
    #[clap(long, env = "DLANY_POSTHOG_HOST", default_value = DEFAULT_ANALYTICS_HOST)]
    pub posthog_host: String,

    #[clap(long = "env", env = "DLANY_ENV", value_enum, default_value = "production")]
    pub environment: Environment,

    /// Delay of the simulated processing call, in milliseconds
    #[clap(long, env = "DLANY_SIMULATED_DELAY_MS", default_value_t = 2500)]
    pub simulated_delay_ms: u64,

    /// How long the success banner stays before the form resets, in milliseconds
    #[clap(long, env = "DLANY_RESET_DELAY_MS", default_value_t = 4000)]
    pub reset_delay_ms: u64,

    #[clap(long, value_enum, default_value = "file")]
    pub log: LogTarget,

    #[clap(long, default_value = "./dlany.log")]
    pub log_file: PathBuf,

    #[clap(long, env = "DLANY_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse().map_err(|_| format!("unknown log level '{raw}'"))
}

impl AppConfig {
    /// Backend url, treating an empty value as unset.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn analytics_enabled(&self) -> bool {
        self.environment != Environment::Development
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 7] = [
        "DLANY_API_URL",
        "DLANY_POSTHOG_KEY",
        "DLANY_POSTHOG_HOST",
        "DLANY_ENV",
        "DLANY_SIMULATED_DELAY_MS",
        "DLANY_RESET_DELAY_MS",
        "DLANY_LOG_LEVEL",
    ];

    // Flags only: values from the caller's environment must not leak in.
    fn parse_args(args: &[&str]) -> Result<AppConfig, clap::Error> {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        AppConfig::try_parse_from(args)
    }

    #[test]
    fn defaults_use_simulated_backend_and_production() {
        let config = parse_args(&["dlany"]).expect("defaults parse");
        assert_eq!(config.api_url(), None);
        assert_eq!(config.posthog_host, DEFAULT_ANALYTICS_HOST);
        assert!(config.analytics_enabled());
        assert_eq!(config.simulated_delay(), Duration::from_millis(2500));
        assert_eq!(config.reset_delay(), Duration::from_millis(4000));
        assert_eq!(config.log, LogTarget::File);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn development_disables_analytics() {
        let config = parse_args(&["dlany", "--env", "development", "--api-url", ""])
            .expect("flags parse");
        assert!(!config.analytics_enabled());
        assert_eq!(config.api_url(), None);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(parse_args(&["dlany", "--log-level", "loud"]).is_err());
    }
}
