//! Business day resolution
//!
//! A restaurant trading past midnight keeps booking sales against the day the
//! shift started. [`BusinessDateResolver`] maps an instant to that logical
//! trading day using a fixed IANA timezone and a single [`RolloverRule`].
//!
//! Every write path that buckets a sale goes through the one resolver held in
//! the application state, so the rule is applied uniformly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;

/// Default rollover hour: local times before 02:00 belong to the previous day.
pub const DEFAULT_CUTOFF_HOUR: u32 = 2;

/// Default opening hour of the trading window.
pub const DEFAULT_OPEN_HOUR: u32 = 14;

/// Naive timestamp layouts accepted in addition to RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// How a local wall-clock time is assigned to a business date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverRule {
    /// Hours before `hour` belong to the previous calendar date.
    Cutoff { hour: u32 },
    /// Hours in `[cutoff_hour, open_hour)` belong to the previous calendar
    /// date; every other hour belongs to the local calendar date.
    TradingWindow { open_hour: u32, cutoff_hour: u32 },
}

impl Default for RolloverRule {
    fn default() -> Self {
        RolloverRule::Cutoff {
            hour: DEFAULT_CUTOFF_HOUR,
        }
    }
}

impl RolloverRule {
    /// Check the hours are valid clock hours and the window is not inverted.
    pub fn validate(&self) -> Result<(), CoreError> {
        match *self {
            RolloverRule::Cutoff { hour } => check_hour("cutoff hour", hour),
            RolloverRule::TradingWindow {
                open_hour,
                cutoff_hour,
            } => {
                check_hour("cutoff hour", cutoff_hour)?;
                check_hour("open hour", open_hour)?;
                if open_hour < cutoff_hour {
                    return Err(CoreError::InvalidConfig(format!(
                        "open hour {open_hour} precedes cutoff hour {cutoff_hour}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Business date for a local wall-clock time.
    pub fn business_date(&self, local: NaiveDateTime) -> NaiveDate {
        let hour = local.hour();
        let date = local.date();
        let previous_day = match *self {
            RolloverRule::Cutoff { hour: cutoff } => hour < cutoff,
            RolloverRule::TradingWindow {
                open_hour,
                cutoff_hour,
            } => (cutoff_hour..open_hour).contains(&hour),
        };
        if previous_day {
            date.pred_opt().unwrap_or(date)
        } else {
            date
        }
    }
}

fn check_hour(name: &str, hour: u32) -> Result<(), CoreError> {
    if hour > 23 {
        return Err(CoreError::InvalidConfig(format!(
            "{name} must be between 0 and 23, got {hour}"
        )));
    }
    Ok(())
}

/// Maps instants to business dates in a fixed timezone.
#[derive(Debug, Clone)]
pub struct BusinessDateResolver {
    tz: Tz,
    rule: RolloverRule,
}

impl BusinessDateResolver {
    pub fn new(tz: Tz, rule: RolloverRule) -> Result<Self, CoreError> {
        rule.validate()?;
        Ok(Self { tz, rule })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn rule(&self) -> RolloverRule {
        self.rule
    }

    /// Resolve an optional ISO-8601 timestamp; `None` means now.
    pub fn resolve(&self, timestamp: Option<&str>) -> Result<NaiveDate, CoreError> {
        match timestamp {
            Some(raw) => Ok(self.resolve_at(parse_timestamp(raw, self.tz)?)),
            None => Ok(self.today()),
        }
    }

    /// Business date for a UTC instant.
    pub fn resolve_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        let local = instant.with_timezone(&self.tz).naive_local();
        self.rule.business_date(local)
    }

    /// The current business date.
    pub fn today(&self) -> NaiveDate {
        self.resolve_at(Utc::now())
    }
}

/// `resolve(timestamp, timezone, rule) -> "YYYY-MM-DD"`
pub fn resolve(timestamp: Option<&str>, tz: Tz, rule: RolloverRule) -> Result<String, CoreError> {
    let resolver = BusinessDateResolver::new(tz, rule)?;
    Ok(resolver.resolve(timestamp)?.format("%Y-%m-%d").to_string())
}

/// Parse an ISO-8601 timestamp.
///
/// Offsets are honoured; naive timestamps are wall-clock time in `tz`. A
/// wall-clock time inside a DST gap falls back to UTC.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Result<DateTime<Utc>, CoreError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(CoreError::InvalidTimestamp("timestamp is empty".into()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            let instant = tz
                .from_local_datetime(&naive)
                .latest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| naive.and_utc());
            return Ok(instant);
        }
    }

    Err(CoreError::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Karachi;

    fn policy_a() -> BusinessDateResolver {
        BusinessDateResolver::new(Karachi, RolloverRule::Cutoff { hour: 2 }).unwrap()
    }

    fn policy_b() -> BusinessDateResolver {
        BusinessDateResolver::new(
            Karachi,
            RolloverRule::TradingWindow {
                open_hour: 14,
                cutoff_hour: 2,
            },
        )
        .unwrap()
    }

    fn local(date: &str, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn cutoff_rolls_back_before_two() {
        let rule = RolloverRule::Cutoff { hour: 2 };
        assert_eq!(rule.business_date(local("2025-01-02", 0, 0, 0)), day("2025-01-01"));
        assert_eq!(rule.business_date(local("2025-01-02", 1, 59, 59)), day("2025-01-01"));
        assert_eq!(rule.business_date(local("2025-01-02", 2, 0, 0)), day("2025-01-02"));
        assert_eq!(rule.business_date(local("2025-01-02", 23, 59, 59)), day("2025-01-02"));
    }

    #[test]
    fn every_hour_under_cutoff() {
        let rule = RolloverRule::Cutoff { hour: 2 };
        for hour in 0..24 {
            let expected = if hour < 2 { "2025-03-14" } else { "2025-03-15" };
            assert_eq!(
                rule.business_date(local("2025-03-15", hour, 30, 0)),
                day(expected),
                "hour {hour}"
            );
        }
    }

    #[test]
    fn every_hour_under_trading_window() {
        let rule = RolloverRule::TradingWindow {
            open_hour: 14,
            cutoff_hour: 2,
        };
        for hour in 0..24 {
            let expected = if (2..14).contains(&hour) {
                "2025-03-14"
            } else {
                "2025-03-15"
            };
            assert_eq!(
                rule.business_date(local("2025-03-15", hour, 30, 0)),
                day(expected),
                "hour {hour}"
            );
        }
        assert_eq!(rule.business_date(local("2025-03-15", 13, 59, 59)), day("2025-03-14"));
        assert_eq!(rule.business_date(local("2025-03-15", 1, 59, 59)), day("2025-03-15"));
    }

    #[test]
    fn policies_disagree_at_ten() {
        let a = policy_a().resolve(Some("2025-06-10T10:00:00")).unwrap();
        let b = policy_b().resolve(Some("2025-06-10T10:00:00")).unwrap();
        assert_eq!(a, day("2025-06-10"));
        assert_eq!(b, day("2025-06-09"));
    }

    #[test]
    fn offset_timestamps_convert_to_business_zone() {
        // 20:30 UTC is 01:30 next day in Karachi (UTC+5).
        let date = policy_a().resolve(Some("2025-01-01T20:30:00Z")).unwrap();
        assert_eq!(date, day("2025-01-01"));

        // 21:00 UTC is 02:00 in Karachi.
        let date = policy_a().resolve(Some("2025-01-01T21:00:00Z")).unwrap();
        assert_eq!(date, day("2025-01-02"));

        let date = policy_a().resolve(Some("2025-01-02T03:00:00+05:00")).unwrap();
        assert_eq!(date, day("2025-01-02"));
    }

    #[test]
    fn naive_timestamps_are_local() {
        let resolver = policy_a();
        assert_eq!(resolver.resolve(Some("2025-01-02T01:00")).unwrap(), day("2025-01-01"));
        assert_eq!(
            resolver.resolve(Some("2025-01-02 02:15:00")).unwrap(),
            day("2025-01-02")
        );
        assert_eq!(
            resolver.resolve(Some("2025-01-02T01:59:59.999")).unwrap(),
            day("2025-01-01")
        );
    }

    #[test]
    fn year_boundary_rolls_back() {
        let date = policy_a().resolve(Some("2025-01-01T00:30:00")).unwrap();
        assert_eq!(date, day("2024-12-31"));
    }

    #[test]
    fn unparsable_timestamp_is_rejected() {
        for bad in ["", "   ", "yesterday", "2025-13-01T10:00:00", "2025-01-01"] {
            let err = policy_a().resolve(Some(bad)).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidTimestamp(_)),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn resolve_without_timestamp_uses_now() {
        let resolver = policy_a();
        let expected = resolver.resolve_at(Utc::now());
        let got = resolver.resolve(None).unwrap();
        // Tolerate a rollover between the two reads.
        assert!(got == expected || got == expected.succ_opt().unwrap());
    }

    #[test]
    fn free_function_formats_date() {
        let s = resolve(
            Some("2025-07-04T01:00:00"),
            Karachi,
            RolloverRule::default(),
        )
        .unwrap();
        assert_eq!(s, "2025-07-03");
    }

    #[test]
    fn invalid_rules_are_rejected() {
        assert!(BusinessDateResolver::new(Karachi, RolloverRule::Cutoff { hour: 24 }).is_err());
        let inverted = RolloverRule::TradingWindow {
            open_hour: 1,
            cutoff_hour: 2,
        };
        assert!(matches!(
            inverted.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}
