//! Port traits — the boundary between the control loop and the outside world.
//!
//! ```text
//!   SensorSource ──▶ ┌──────────────┐
//!                    │  Controller   │ ──▶ EventSink
//!   RelayPort    ◀── └──────────────┘
//! ```
//!
//! Driven adapters (the SHT31 sensor, the relay GPIO, the journal file)
//! implement these traits. The [`Controller`](super::service::Controller)
//! consumes them via generics, so the control loop never touches hardware
//! directly and tests run against in-memory fakes.

use chrono::{DateTime, Local};

use crate::control::hysteresis::RelayState;
use crate::error::{ActuatorError, JournalError, SensorError};
use crate::units::{DISPLAY_SIG_FIGS, round_sig_figs};

use super::events::ControlEvent;

// ───────────────────────────────────────────────────────────────
// Sensor reading
// ───────────────────────────────────────────────────────────────

/// One temperature/humidity sample, immutable once captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Temperature in °C, held at display precision.
    pub temperature_c: f32,
    /// Relative humidity in %RH, held at display precision.
    pub humidity_rh: f32,
    /// Capture time, used to stamp journal lines.
    pub taken_at: DateTime<Local>,
}

impl Reading {
    /// Capture a reading, rounding both values to 3 significant figures so
    /// raw sensor precision never reaches the decision logic or the journal.
    pub fn new(temperature_c: f32, humidity_rh: f32, taken_at: DateTime<Local>) -> Self {
        Self {
            temperature_c: round_sig_figs(temperature_c, DISPLAY_SIG_FIGS),
            humidity_rh: round_sig_figs(humidity_rh, DISPLAY_SIG_FIGS),
            taken_at,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the controller calls this once per tick.
///
/// Failures are treated as transient — the tick is abandoned and the next
/// one retries, with no backoff.
pub trait SensorSource {
    fn read(&mut self) -> Result<Reading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the controller reads the current output to debounce and
/// writes commands to change it.
pub trait RelayPort {
    /// Current output state, as driven by the GPIO line.
    ///
    /// After a failed [`set_state`](Self::set_state) this read is the
    /// authoritative view of where the relay actually is.
    fn state(&self) -> RelayState;

    /// Drive the relay to `state`.
    fn set_state(&mut self, state: RelayState) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → durable journal)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`ControlEvent`]s through this port.
///
/// A sink failure is surfaced to the caller — losing the audit trail
/// matters — but the control loop never stops over it.
pub trait EventSink {
    fn emit(&mut self, event: &ControlEvent) -> Result<(), JournalError>;
}
