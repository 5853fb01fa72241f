//! Build timestamp exposed to templates as `now`

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde_json::{json, Value};

/// Environment variable used by reproducible-build toolchains to pin timestamps
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Instant a build started, captured once and reused for every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTimestamp(DateTime<Utc>);

impl BuildTimestamp {
    /// Wrap an existing instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Timestamp from seconds since the Unix epoch
    pub fn from_unix(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Honour `SOURCE_DATE_EPOCH` when set to a valid integer, else use the clock
    pub fn from_env() -> Self {
        Self::from_epoch_var(std::env::var(SOURCE_DATE_EPOCH).ok().as_deref())
    }

    /// Same as [`from_env`](Self::from_env) with the variable value passed in
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_banner::timestamp::BuildTimestamp;
    ///
    /// let ts = BuildTimestamp::from_epoch_var(Some("1704067200"));
    /// assert_eq!(ts.year(), 2024);
    /// ```
    pub fn from_epoch_var(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => match raw.parse::<i64>().ok().and_then(Self::from_unix) {
                Some(ts) => ts,
                None => {
                    log::warn!("ignoring invalid {}={:?}", SOURCE_DATE_EPOCH, raw);
                    Self(Utc::now())
                }
            },
            None => Self(Utc::now()),
        }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Template value: `{ year, date, iso }`
    pub fn to_value(&self) -> Value {
        json!({
            "year": self.year(),
            "date": self.0.format("%Y-%m-%d").to_string(),
            "iso": self.0.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}
