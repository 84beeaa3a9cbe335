//! Configuration loading from the process environment.

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Variables always included in the startup diagnostics dump.
const DIAGNOSTIC_VARS: &[&str] = &["PORT", "HOST", "APP_ENV", "NODE_ENV"];

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] envy::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the environment.
///
/// A `.env` file in the working directory is applied first when present;
/// variables already set in the environment win.
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    from_vars(std::env::vars())
}

/// Build a configuration from an explicit set of variables.
///
/// Empty values count as unset, so `PORT=` falls back to the default port.
/// `NODE_ENV` is honoured when `APP_ENV` is absent.
pub fn from_vars<I>(vars: I) -> Result<ServerConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();

    if !vars.iter().any(|(key, _)| key == "APP_ENV") {
        if let Some((_, value)) = vars.iter().find(|(key, _)| key == "NODE_ENV") {
            let value = value.clone();
            vars.push(("APP_ENV".to_string(), value));
        }
    }

    let config: ServerConfig = envy::from_iter(vars)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Collect the variables worth logging at startup: anything matching one of
/// `prefixes` plus the core server variables. Sorted by name.
pub fn deployment_vars<I>(vars: I, prefixes: &[String]) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut selected: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(key, _)| {
            DIAGNOSTIC_VARS.contains(&key.as_str())
                || prefixes
                    .iter()
                    .any(|prefix| !prefix.is_empty() && key.starts_with(prefix.as_str()))
        })
        .collect();
    selected.sort();
    selected
}
