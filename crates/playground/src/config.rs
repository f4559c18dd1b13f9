//! Playground configuration from `PLAYGROUND_*` environment variables.
//!
//! Every value has a default; a variable that is set but malformed is a
//! [`ConfigError::Parse`]. [`from_lookup`] takes the variable source as a
//! closure so tests never touch the process environment.

use tokenize::GrowthMode;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Prefix shared by all variables.
pub const ENV_PREFIX: &str = "PLAYGROUND_";

const ENV_MODE: &str = "MODE";
const ENV_PRETTY: &str = "PRETTY";
const ENV_LOG: &str = "LOG";
const ENV_SEED: &str = "SEED";

const DEFAULT_LOG: &str = "warn";

/// Runtime settings for a playground session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// whether encoding grows the vocabulary
    pub mode: GrowthMode,
    /// render index arrays indented (two spaces) instead of on one line
    pub pretty: bool,
    /// default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// text whose tokens are added to the vocabulary at startup
    pub seed_text: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GrowthMode::Grow,
            pretty: true,
            log_filter: DEFAULT_LOG.to_string(),
            seed_text: None,
        }
    }
}

impl Config {
    /// Checks that the values are usable together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation("log filter must not be empty".to_string()));
        }
        if let Err(e) = EnvFilter::try_new(&self.log_filter) {
            return Err(ConfigError::Validation(format!(
                "invalid log filter {:?}: {e}",
                self.log_filter
            )));
        }
        Ok(())
    }
}

/// Full variable name for a suffix, e.g. `MODE` → `PLAYGROUND_MODE`.
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Builds and validates a [`Config`] from the process environment.
pub fn from_env() -> Result<Config, ConfigError> {
    from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
}

/// Builds and validates a [`Config`] reading variables through `lookup`.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default = Config::default();

    let mode = match lookup(&env_key(ENV_MODE)) {
        Some(raw) => parse_mode(&env_key(ENV_MODE), raw)?,
        None => default.mode,
    };
    let pretty = match lookup(&env_key(ENV_PRETTY)) {
        Some(raw) => parse_bool(&env_key(ENV_PRETTY), raw)?,
        None => default.pretty,
    };
    let log_filter = lookup(&env_key(ENV_LOG)).unwrap_or(default.log_filter);
    let seed_text = lookup(&env_key(ENV_SEED)).filter(|s| !s.trim().is_empty());

    let cfg = Config {
        mode,
        pretty,
        log_filter,
        seed_text,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn parse_mode(key: &str, raw: String) -> Result<GrowthMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "grow" => Ok(GrowthMode::Grow),
        "frozen" | "freeze" => Ok(GrowthMode::Frozen),
        _ => Err(ConfigError::Parse {
            key: key.to_string(),
            value: raw,
            reason: "expected `grow` or `frozen`".to_string(),
        }),
    }
}

fn parse_bool(key: &str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse {
            key: key.to_string(),
            value: raw,
            reason: "expected a boolean".to_string(),
        }),
    }
}
