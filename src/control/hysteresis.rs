//! Hysteresis relay decision.
//!
//! Classic bang-bang control: close the relay at or below the low threshold,
//! open it at or above the high threshold, and inside the band leave it
//! alone so the relay never chatters around a single setpoint. Commands are
//! only produced when they would change the relay's state, so the caller
//! never issues a redundant write.

use std::fmt;

use crate::config::Thresholds;

/// Observed state of the solid-state relay output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    /// De-energized — the fail-safe state.
    Open,
    /// Energized.
    Closed,
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A state change the controller wants applied to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayAction {
    Close,
    Open,
}

impl RelayAction {
    /// The relay state this action drives toward.
    pub fn target(self) -> RelayState {
        match self {
            Self::Close => RelayState::Closed,
            Self::Open => RelayState::Open,
        }
    }
}

impl fmt::Display for RelayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Close => write!(f, "close"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// Decide what, if anything, to do with the relay this tick.
///
/// Boundary values transition (`<=` / `>=`). A collapsed band
/// (`low_c == high_c`) degenerates to a single-point switch. A NaN
/// temperature fails every comparison and produces no action.
pub fn decide(
    thresholds: Thresholds,
    temperature_c: f32,
    current: RelayState,
) -> Option<RelayAction> {
    if temperature_c <= thresholds.low_c && current == RelayState::Open {
        Some(RelayAction::Close)
    } else if temperature_c >= thresholds.high_c && current == RelayState::Closed {
        Some(RelayAction::Open)
    } else {
        None
    }
}
