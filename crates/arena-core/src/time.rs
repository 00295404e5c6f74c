//! Epoch timestamps as delivered by the upstream API.
//!
//! Upstream records mix second and millisecond resolution in the same
//! field. Values above `MILLIS_THRESHOLD` are taken as milliseconds.

use crate::error::{CoreError, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw values above this are milliseconds, below are seconds.
pub const MILLIS_THRESHOLD: f64 = 1e12;

/// Epoch timestamp in seconds or milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochTime(pub f64);

impl EpochTime {
    #[inline]
    pub fn new(raw: f64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(&self) -> f64 {
        self.0
    }

    /// Only positive values are set; zero and NaN are upstream falsy
    /// values, negatives are pre-epoch garbage.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.0 > 0.0
    }

    /// Timestamp in milliseconds.
    pub fn as_millis(&self) -> i64 {
        if self.0 > MILLIS_THRESHOLD {
            self.0 as i64
        } else {
            (self.0 * 1000.0) as i64
        }
    }

    /// Convert to a UTC datetime.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        if !self.0.is_finite() {
            return Err(CoreError::InvalidTimestamp(self.0.to_string()));
        }
        Utc.timestamp_millis_opt(self.as_millis())
            .single()
            .ok_or_else(|| CoreError::InvalidTimestamp(self.0.to_string()))
    }
}

impl fmt::Display for EpochTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
