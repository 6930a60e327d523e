use chrono_tz::Tz;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::schedule::DEFAULT_SCHEDULE_FILE;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "helper";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// `KEY=VALUE` pairs read from the file named by `CONFIG_FILE`.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        match env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config file {}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    // Config file first, then the process environment.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).or_else(|| env::var(key).ok())
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub schedule_file: PathBuf,
    pub model: String,
    pub ollama_url: String,
    pub timeout: Duration,
    pub timezone: Tz,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schedule_file: PathBuf::from(DEFAULT_SCHEDULE_FILE),
            model: DEFAULT_MODEL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            timezone: Tz::UTC,
        }
    }
}

impl Settings {
    pub fn resolve(config: &AppConfig) -> Self {
        Self::resolve_with(|key| config.lookup(key))
    }

    pub fn resolve_with<F>(get_prop: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let timeout = match get_prop("OLLAMA_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("Invalid OLLAMA_TIMEOUT_SECS '{}', using {}s", raw, DEFAULT_TIMEOUT_SECS);
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let timezone = match get_prop("SCHEDULE_TIMEZONE") {
            Some(name) => name.trim().parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown SCHEDULE_TIMEZONE '{}', using UTC", name);
                defaults.timezone
            }),
            None => defaults.timezone,
        };

        Self {
            schedule_file: get_prop("SCHEDULE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.schedule_file),
            model: get_prop("OLLAMA_MODEL").unwrap_or(defaults.model),
            ollama_url: get_prop("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            timeout,
            timezone,
        }
    }
}
