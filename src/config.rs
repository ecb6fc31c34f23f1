//! Runtime configuration from the environment (and an optional `.env` file).

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "NETIFY_LOG_CONFIG";
pub const ENV_OUTPUT: &str = "NETIFY_OUTPUT";
pub const ENV_SUBNET_LIMIT: &str = "NETIFY_SUBNET_LIMIT";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_SUBNET_LIMIT: usize = 1024;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{other}', expected one of {}",
                OutputFormat::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log4rs yaml file.
    pub log_config: String,
    pub output: OutputFormat,
    /// Max subnets listed per plan.
    pub subnet_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::default(),
            subnet_limit: DEFAULT_SUBNET_LIMIT,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup, unset variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output
                .parse()
                .map_err(|e| format!("{ENV_OUTPUT}: {e}"))?;
        }
        if let Some(limit) = lookup(ENV_SUBNET_LIMIT) {
            config.subnet_limit =
                parse_limit(&limit).map_err(|e| format!("{ENV_SUBNET_LIMIT}: {e}"))?;
        }
        Ok(config)
    }
}

/// Parse a positive subnet listing limit.
pub fn parse_limit(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("invalid subnet limit '{s}', expected a positive number")),
        Ok(n) => Ok(n),
    }
}

/// Start log4rs from `config.log_config`, or log warnings to stderr if the file is missing.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        log::debug!("logging configured from {}", config.log_config);
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    log::debug!("{} not found, logging warnings to stderr", config.log_config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.subnet_limit, 1024);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_LOG_CONFIG, "/etc/netify/log4rs.yml"),
            (ENV_OUTPUT, "JSON"),
            (ENV_SUBNET_LIMIT, "16"),
        ]))
        .unwrap();
        assert_eq!(config.log_config, "/etc/netify/log4rs.yml");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.subnet_limit, 16);
    }

    #[test]
    fn test_config_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[(ENV_OUTPUT, "xml")])).unwrap_err();
        assert!(err.to_string().starts_with("NETIFY_OUTPUT"));
        assert!(Config::from_lookup(lookup_from(&[(ENV_SUBNET_LIMIT, "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(ENV_SUBNET_LIMIT, "-3")])).is_err());
    }

    #[test]
    fn test_output_format_round_trip() {
        for name in OutputFormat::NAMES {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.to_string(), name);
        }
    }
}
