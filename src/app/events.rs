//! Journal events emitted by the controller.
//!
//! The controller pushes these through the [`EventSink`](super::ports::EventSink)
//! port; the file adapter turns each into one timestamped, level-tagged line.
//! Message wording and rate class live here with the domain — the sink only
//! decides where the line goes.

use std::fmt;

use chrono::{DateTime, Local};

use crate::config::Thresholds;
use crate::control::hysteresis::{RelayAction, RelayState};
use crate::error::ActuatorError;
use crate::units::celsius_to_fahrenheit;

use super::ports::Reading;

/// Level tag written at the start of every journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Start,
    Log,
    Relay,
    Error,
    Stop,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::Log => write!(f, "LOG"),
            Self::Relay => write!(f, "RELAY"),
            Self::Error => write!(f, "ERROR"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

/// Structured events the controller journals.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    /// The controller came up with these thresholds active.
    Started { thresholds: Thresholds },

    /// Periodic temperature/humidity reading (rate-limited).
    Reading(Reading),

    /// The relay was commanded to a new state.
    RelayChanged {
        from: RelayState,
        to: RelayState,
        reading: Reading,
    },

    /// A relay command failed; the true output state is unknown until the
    /// next tick reads it back.
    RelayFault {
        action: RelayAction,
        cause: ActuatorError,
    },

    /// Termination signal observed; relay driven open, controller exiting.
    Stopped,
}

impl ControlEvent {
    /// Journal level tag for this event.
    pub fn level(&self) -> LogLevel {
        match self {
            Self::Started { .. } => LogLevel::Start,
            Self::Reading(_) => LogLevel::Log,
            Self::RelayChanged { .. } => LogLevel::Relay,
            Self::RelayFault { .. } => LogLevel::Error,
            Self::Stopped => LogLevel::Stop,
        }
    }

    /// Routine events are gated by the tick counter; everything else is
    /// written immediately, exactly once.
    pub fn is_routine(&self) -> bool {
        matches!(self, Self::Reading(_))
    }

    /// Capture time for the journal line, where the event carries one.
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        match self {
            Self::Reading(r) | Self::RelayChanged { reading: r, .. } => Some(r.taken_at),
            _ => None,
        }
    }

    /// Human-readable journal message.
    pub fn message(&self) -> String {
        match self {
            Self::Started { thresholds: t } => format!(
                "thresholds active: close at or below {}\u{b0}C ({}\u{b0}F), \
                 open at or above {}\u{b0}C ({}\u{b0}F)",
                t.low_c,
                celsius_to_fahrenheit(t.low_c),
                t.high_c,
                celsius_to_fahrenheit(t.high_c),
            ),
            Self::Reading(r) => format!(
                "temperature: {}\u{b0}C ({}\u{b0}F), humidity: {}%RH",
                r.temperature_c,
                celsius_to_fahrenheit(r.temperature_c),
                r.humidity_rh,
            ),
            Self::RelayChanged { from, to, reading } => {
                let verb = match to {
                    RelayState::Closed => "closing",
                    RelayState::Open => "opening",
                };
                format!(
                    "temperature is currently {}\u{b0}C ({}\u{b0}F) and relay circuit \
                     is currently {from}; {verb} relay",
                    reading.temperature_c,
                    celsius_to_fahrenheit(reading.temperature_c),
                )
            }
            Self::RelayFault { action, cause } => format!(
                "relay {action} command failed: {cause}; relay state unknown until next read"
            ),
            Self::Stopped => "termination signal received; relay opened, controller exiting"
                .to_string(),
        }
    }
}
