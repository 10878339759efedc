use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::{debug, warn};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::TimestampError;

/// The zone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Offset used when the configured zone is not in the zone database (UTC+1, no daylight saving)
pub const FALLBACK_OFFSET_SECONDS: i32 = 3600;

const ICS_UTC_PARSING_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const LOCAL_DATE_FORMAT: &str = "%d-%m-%Y";
const LOCAL_TIME_FORMAT: &str = "%H:%M";

fn utc_timestamp_regex() -> &'static Regex {
    static UTC_TIMESTAMP: OnceLock<Regex> = OnceLock::new();
    // `\d` would also accept non-ASCII digits
    UTC_TIMESTAMP
        .get_or_init(|| Regex::new(r"^[0-9]{8}T[0-9]{6}Z$").expect("timestamp pattern is valid"))
}

/// The civil time zone in which local dates and times are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetZone {
    /// A zone from the tz database, daylight saving included
    Named(Tz),
    /// A fixed offset, used as an approximation when the named zone is unavailable
    Fixed(FixedOffset),
}

impl TargetZone {
    /// Look up a zone by its IANA name, falling back to a fixed UTC+1 offset
    ///
    /// The fallback ignores daylight saving, so summer times will be one hour early.
    pub fn resolve(name: &str) -> TargetZone {
        match name.parse::<Tz>() {
            Ok(tz) => {
                debug!("using time zone {}", tz.name());
                TargetZone::Named(tz)
            }
            Err(e) => {
                warn!(
                    "time zone {:?} is not available ({}), falling back to a fixed UTC+1 offset",
                    name,
                    e
                );
                TargetZone::fallback()
            }
        }
    }

    pub fn fallback() -> TargetZone {
        TargetZone::Fixed(
            FixedOffset::east_opt(FALLBACK_OFFSET_SECONDS).expect("UTC+1 is a valid offset"),
        )
    }

    /// Wall clock date and time of `instant` in this zone
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            TargetZone::Named(tz) => instant.with_timezone(tz).naive_local(),
            TargetZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TargetZone::Fixed(_))
    }
}

impl Default for TargetZone {
    fn default() -> Self {
        TargetZone::resolve(DEFAULT_TIMEZONE)
    }
}

impl fmt::Display for TargetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetZone::Named(tz) => write!(f, "{}", tz.name()),
            TargetZone::Fixed(offset) => write!(f, "UTC{}", offset),
        }
    }
}

/// Parse an ICS UTC timestamp such as `20240115T090000Z`
///
/// Anything that is not exactly 8 digits, `T`, 6 digits and `Z`, or that does not name a real
/// instant (month 13, February 30th...), is a [`TimestampError::Format`].
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    if !utc_timestamp_regex().is_match(value) {
        return Err(TimestampError::Format(value.to_owned()));
    }

    NaiveDateTime::parse_from_str(value, ICS_UTC_PARSING_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| TimestampError::Format(value.to_owned()))
}

/// An instant together with its wall clock representation in a [`TargetZone`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedTimestamp {
    instant: DateTime<Utc>,
    local: NaiveDateTime,
}

impl NormalizedTimestamp {
    pub fn parse(value: &str, zone: &TargetZone) -> Result<NormalizedTimestamp, TimestampError> {
        let instant = parse_utc(value)?;
        Ok(NormalizedTimestamp {
            instant,
            local: zone.local(instant),
        })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn local_date(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn local_time(&self) -> NaiveTime {
        self.local.time()
    }

    /// Local date as `DD-MM-YYYY`
    pub fn date_string(&self) -> String {
        self.local.format(LOCAL_DATE_FORMAT).to_string()
    }

    /// Local time of day as `HH:MM`
    pub fn time_string(&self) -> String {
        self.local.format(LOCAL_TIME_FORMAT).to_string()
    }

    /// Time elapsed until `end`, `None` if `end` comes first
    pub fn duration_until(&self, end: &NormalizedTimestamp) -> Option<Duration> {
        let duration = end.instant - self.instant;
        (duration >= Duration::zero()).then_some(duration)
    }
}

/// Format a duration as `HH:MM`, counting whole minutes
///
/// Hours are not wrapped at 24, so a 30 hour event is `30:00`. Negative durations give `None`.
pub fn format_duration(duration: Duration) -> Option<String> {
    let minutes = duration.num_minutes();
    if minutes < 0 {
        return None;
    }
    Some(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}
