//! Controller configuration.
//!
//! Two fixed profiles: the production profile used on the installed unit,
//! and a debug profile with a short tick interval for bench testing. Values
//! are set at startup and never change for the lifetime of the process.

use std::time::Duration;

use crate::error::{Error, Result};

/// Relay closes at or below this temperature (≈70 °F).
pub const PRODUCTION_LOW_C: f32 = 21.1;
/// Relay opens at or above this temperature (≈74 °F).
pub const PRODUCTION_HIGH_C: f32 = 23.3;

/// Hysteresis band for the relay.
///
/// `low_c == high_c` collapses the band to a single-point switch; valid but
/// chatter-prone. `low_c > high_c` is rejected by [`ControllerConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Close (energize) at or below this temperature (°C).
    pub low_c: f32,
    /// Open (de-energize) at or above this temperature (°C).
    pub high_c: f32,
}

/// Core controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub thresholds: Thresholds,
    /// Sleep between control ticks.
    pub tick_interval: Duration,
    /// Routine readings are journaled once per this many ticks.
    pub routine_log_period: u32,
}

impl ControllerConfig {
    /// Profile for the installed unit: 10 s ticks, one routine line a minute.
    pub fn production() -> Self {
        Self {
            thresholds: Thresholds {
                low_c: PRODUCTION_LOW_C,
                high_c: PRODUCTION_HIGH_C,
            },
            tick_interval: Duration::from_secs(10),
            routine_log_period: 6,
        }
    }

    /// Bench profile: same thresholds, 1 s ticks for a denser journal.
    pub fn debug() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            ..Self::production()
        }
    }

    /// Reject configurations the control loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        let t = self.thresholds;
        if !t.low_c.is_finite() || !t.high_c.is_finite() {
            return Err(Error::Config("thresholds must be finite"));
        }
        if t.low_c > t.high_c {
            return Err(Error::Config("low threshold must not exceed high"));
        }
        if self.routine_log_period == 0 {
            return Err(Error::Config("routine log period must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::production()
    }
}
