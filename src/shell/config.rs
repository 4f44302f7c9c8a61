//! Service configuration, read from `ACTIVITIES_*` environment variables.

use std::env;
use std::path::PathBuf;

use crate::modules::activities::core::decision::CapacityPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// Reject signups once an activity has no spots left
    pub enforce_capacity: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("./static"),
            enforce_capacity: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Missing or unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("ACTIVITIES_HOST").unwrap_or(defaults.host),
            port: lookup("ACTIVITIES_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("ACTIVITIES_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            enforce_capacity: lookup("ACTIVITIES_ENFORCE_CAPACITY")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.enforce_capacity),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::from(self.enforce_capacity)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
