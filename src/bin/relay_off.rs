//! Maintenance helper: force the relay open and release the GPIO line.
//!
//! Unconditional — runs regardless of whether the thermostat daemon is or
//! was running. Used when servicing the attached HVAC circuit.

use anyhow::{Context, Result};
use log::info;
use rppal::gpio::Gpio;

use relaystat::adapters::relay::SsrRelay;
use relaystat::pins;

fn main() -> Result<()> {
    env_logger::init();

    let gpio = Gpio::new().context("claiming GPIO controller")?;
    let relay = SsrRelay::new(&gpio, pins::RELAY_BCM_PIN)
        .with_context(|| format!("claiming relay pin GPIO{}", pins::RELAY_BCM_PIN))?;
    relay.latch_open();

    info!("relay forced open (GPIO{} low), line released", pins::RELAY_BCM_PIN);
    Ok(())
}
