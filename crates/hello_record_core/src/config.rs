use thiserror::Error;

pub const REGION_ENV: &str = "AWS_REGION";
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
}

/// Settings resolved from the process environment before each write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub region: String,
    pub table_name: String,
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count
    /// as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            region: required(&lookup, REGION_ENV)?,
            table_name: required(&lookup, TABLE_NAME_ENV)?,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
