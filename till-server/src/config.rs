//! Server configuration

use chrono_tz::Tz;

use crate::business_day::{DEFAULT_CUTOFF_HOUR, DEFAULT_OPEN_HOUR, RolloverRule};
use crate::error::BoxError;

/// Which rollover rule assigns orders to business dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessDayPolicy {
    /// Local hours before the cutoff belong to the previous day
    Cutoff,
    /// Local hours between the cutoff and opening belong to the previous day
    Window,
}

impl std::str::FromStr for BusinessDayPolicy {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cutoff" => Ok(Self::Cutoff),
            "window" => Ok(Self::Window),
            other => Err(format!(
                "BUSINESS_DAY_POLICY must be 'cutoff' or 'window', got '{other}'"
            )
            .into()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// IANA zone every business date is computed in
    pub timezone: Tz,
    pub business_day_policy: BusinessDayPolicy,
    pub cutoff_hour: u32,
    /// Opening hour, used by the window policy only
    pub open_hour: u32,
    pub db_max_connections: u32,
    /// Default tracing level when RUST_LOG is unset
    pub log_level: String,
    pub log_json: bool,
    /// Also write daily-rolling log files here
    pub log_dir: Option<String>,
    /// Allowed CORS origin, `*` for any
    pub cors_allow_origin: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timezone = match var("BUSINESS_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| format!("BUSINESS_TIMEZONE is not an IANA zone: {name}"))?,
            None => chrono_tz::Asia::Karachi,
        };

        let config = Self {
            database_url: var("DATABASE_URL").ok_or("DATABASE_URL must be set")?,
            http_port: parse_or("HTTP_PORT", var("HTTP_PORT"), 3000)?,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            timezone,
            business_day_policy: match var("BUSINESS_DAY_POLICY") {
                Some(p) => p.parse()?,
                None => BusinessDayPolicy::Cutoff,
            },
            cutoff_hour: parse_or(
                "BUSINESS_DAY_CUTOFF_HOUR",
                var("BUSINESS_DAY_CUTOFF_HOUR"),
                DEFAULT_CUTOFF_HOUR,
            )?,
            open_hour: parse_or(
                "BUSINESS_DAY_OPEN_HOUR",
                var("BUSINESS_DAY_OPEN_HOUR"),
                DEFAULT_OPEN_HOUR,
            )?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 5)?,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_or("LOG_JSON", var("LOG_JSON"), false)?,
            log_dir: var("LOG_DIR"),
            cors_allow_origin: var("CORS_ALLOW_ORIGIN").unwrap_or_else(|| "*".into()),
        };

        config.rollover_rule().validate()?;
        Ok(config)
    }

    /// The rollover rule selected by the policy.
    pub fn rollover_rule(&self) -> RolloverRule {
        match self.business_day_policy {
            BusinessDayPolicy::Cutoff => RolloverRule::Cutoff {
                hour: self.cutoff_hour,
            },
            BusinessDayPolicy::Window => RolloverRule::TradingWindow {
                open_hour: self.open_hour,
                cutoff_hour: self.cutoff_hour,
            },
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, BoxError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{name} has an invalid value: {raw}").into()),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/till")]).unwrap();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.timezone, chrono_tz::Asia::Karachi);
        assert_eq!(config.business_day_policy, BusinessDayPolicy::Cutoff);
        assert_eq!(config.rollover_rule(), RolloverRule::Cutoff { hour: 2 });
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
        assert_eq!(config.cors_allow_origin, "*");
    }

    #[test]
    fn database_url_is_required() {
        assert!(load(&[]).is_err());
        assert!(load(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn window_policy() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/till"),
            ("BUSINESS_DAY_POLICY", "Window"),
            ("BUSINESS_DAY_OPEN_HOUR", "15"),
            ("BUSINESS_TIMEZONE", "Asia/Dubai"),
        ])
        .unwrap();
        assert_eq!(
            config.rollover_rule(),
            RolloverRule::TradingWindow {
                open_hour: 15,
                cutoff_hour: 2
            }
        );
        assert_eq!(config.timezone, chrono_tz::Asia::Dubai);
    }

    #[test]
    fn invalid_values_fail_startup() {
        let base = ("DATABASE_URL", "postgres://localhost/till");
        assert!(load(&[base, ("BUSINESS_TIMEZONE", "Mars/Olympus")]).is_err());
        assert!(load(&[base, ("BUSINESS_DAY_POLICY", "both")]).is_err());
        assert!(load(&[base, ("BUSINESS_DAY_CUTOFF_HOUR", "24")]).is_err());
        assert!(load(&[base, ("BUSINESS_DAY_CUTOFF_HOUR", "two")]).is_err());
        assert!(load(&[base, ("HTTP_PORT", "70000")]).is_err());
        assert!(load(&[base, ("LOG_JSON", "maybe")]).is_err());
    }
}
