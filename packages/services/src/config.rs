use std::fmt;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub host: String,
    pub port: u16,
    /// Replaces the per-portal simulated delays when set.
    pub submit_delay: Option<Duration>,
    pub log_format: LogFormat,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            submit_delay: None,
            log_format: LogFormat::default(),
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing or empty keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = PortalConfig::default();

        let host = get("HOST").unwrap_or(defaults.host);
        let port = match get("PORT") {
            Some(value) => parse("PORT", value)?,
            None => defaults.port,
        };
        let submit_delay = match get("PORTAL_SUBMIT_DELAY_MS") {
            Some(value) => Some(Duration::from_millis(parse(
                "PORTAL_SUBMIT_DELAY_MS",
                value,
            )?)),
            None => None,
        };
        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") | Some("text") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(PortalConfig {
            host,
            port,
            submit_delay,
            log_format,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
