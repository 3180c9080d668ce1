//! Solid-state relay adapter (Auber SRDA25-LD class SSR).
//!
//! The SSR input is driven through a 2N3904 NPN transistor from a BCM GPIO
//! line: pin high closes the relay circuit, pin low opens it. The pin is
//! claimed driven-low, so the relay always comes up de-energized.
//!
//! ```text
//!   SSR input 3 (DC+) ── 200Ω ── Pi 3V3
//!   SSR input 4 (DC−) ── 2N3904 emitter
//!   2N3904 base ── 200Ω ── Pi BCM pin
//!   2N3904 collector ── GND
//! ```

use rppal::gpio::{Gpio, OutputPin};

use crate::app::ports::RelayPort;
use crate::control::hysteresis::RelayState;
use crate::error::ActuatorError;

/// Relay drive over one GPIO line.
///
/// Dropping the adapter resets the line to its pre-claim state, which
/// leaves the transistor undriven and the relay open.
pub struct SsrRelay {
    pin: OutputPin,
}

impl SsrRelay {
    /// Claim `bcm_pin` as a low (relay open) output.
    pub fn new(gpio: &Gpio, bcm_pin: u8) -> Result<Self, rppal::gpio::Error> {
        let pin = gpio.get(bcm_pin)?.into_output_low();
        Ok(Self { pin })
    }

    /// Maintenance exit: drive the relay open, leave the line latched low
    /// after the process ends, and release it.
    pub fn latch_open(mut self) {
        self.pin.set_reset_on_drop(false);
        self.pin.set_low();
    }
}

impl RelayPort for SsrRelay {
    fn state(&self) -> RelayState {
        if self.pin.is_set_high() {
            RelayState::Closed
        } else {
            RelayState::Open
        }
    }

    fn set_state(&mut self, state: RelayState) -> Result<(), ActuatorError> {
        match state {
            RelayState::Closed => self.pin.set_high(),
            RelayState::Open => self.pin.set_low(),
        }
        Ok(())
    }
}
