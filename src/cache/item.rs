//! Cache Item Module
//!
//! Defines the value container stored by pools, with expiration metadata.

use chrono::{DateTime, Duration, Utc};

// == Expiration ==
/// Absolute point in time after which an item stops being a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// Unix timestamp in seconds
    Timestamp(i64),
    /// Calendar instant
    At(DateTime<Utc>),
}

impl Expiration {
    /// Returns true while the expiration lies strictly in the future.
    pub fn is_pending(&self) -> bool {
        match self {
            Expiration::Timestamp(ts) => *ts > current_timestamp(),
            Expiration::At(instant) => *instant > Utc::now(),
        }
    }
}

// == Time To Live ==
/// Relative lifetime, resolved against the current time when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToLive {
    /// Whole seconds from now; negative values are already expired
    Seconds(i64),
    /// Signed interval from now
    Interval(Duration),
}

impl From<Duration> for TimeToLive {
    fn from(interval: Duration) -> Self {
        TimeToLive::Interval(interval)
    }
}

// == Cache Item ==
/// A keyed value with optional expiration.
///
/// `get` hands back the raw stored value whatever the hit state; callers
/// decide hit or miss through `is_hit`.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheItem<V> {
    key: String,
    value: Option<V>,
    expiration: Option<Expiration>,
}

impl<V> CacheItem<V> {
    // == Constructors ==
    /// Creates an empty item: no value, never expires.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            expiration: None,
        }
    }

    /// Creates an item holding `value` that never expires.
    pub fn with_value(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            expiration: None,
        }
    }

    /// Builder-style expiration setter.
    pub fn with_expiration(mut self, expiration: Option<Expiration>) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored value, expired or not.
    pub fn get(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }

    pub fn expiration(&self) -> Option<Expiration> {
        self.expiration
    }

    // == Is Hit ==
    /// Checks whether the item holds a value that has not expired.
    ///
    /// Boundary condition: an expiration equal to the current time is a miss.
    /// This keeps an item from being served at the exact instant it expires.
    ///
    /// # Returns
    /// - `false` if no value is stored
    /// - `true` if a value is stored and no expiration is set
    /// - `true` if the expiration lies strictly after the current time
    /// - `false` otherwise
    pub fn is_hit(&self) -> bool {
        if self.value.is_none() {
            return false;
        }

        match &self.expiration {
            Some(expiration) => expiration.is_pending(),
            None => true,
        }
    }

    /// Replaces the stored value, leaving the expiration untouched.
    pub fn set(&mut self, value: V) -> &mut Self {
        self.value = Some(value);
        self
    }

    /// Sets an absolute expiration, or clears it with `None`.
    pub fn expires_at(&mut self, instant: Option<DateTime<Utc>>) -> &mut Self {
        self.expiration = instant.map(Expiration::At);
        self
    }

    // == Expires After ==
    /// Sets the expiration relative to now, or clears it with `None`.
    ///
    /// Lifetimes reaching past the representable range saturate, so a huge
    /// TTL never expires and a hugely negative one is already expired.
    ///
    /// # Arguments
    /// * `ttl` - `Seconds` stores a Unix timestamp, `Interval` stores an
    ///   instant; `None` removes the expiration
    ///
    /// # Returns
    /// The item itself, for chaining.
    pub fn expires_after(&mut self, ttl: Option<TimeToLive>) -> &mut Self {
        self.expiration = ttl.map(|ttl| match ttl {
            TimeToLive::Seconds(secs) => {
                Expiration::Timestamp(current_timestamp().saturating_add(secs))
            }
            TimeToLive::Interval(interval) => Expiration::At(instant_after(interval)),
        });
        self
    }
}

// == Utility Functions ==
/// Returns `now + interval`, clamped to the representable instant range.
pub fn instant_after(interval: Duration) -> DateTime<Utc> {
    Utc::now()
        .checked_add_signed(interval)
        .unwrap_or(if interval < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}
