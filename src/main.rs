//! Relaystat — single-zone HVAC relay thermostat for Raspberry Pi.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  Sht31d          SsrRelay          FileJournal           │
//! │  (SensorSource)  (RelayPort)       (EventSink)           │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ─────────────        │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │         Controller (pure logic)                │      │
//! │  │  hysteresis · debounce · rate-limited journal  │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  ShutdownFlag (SIGINT/SIGTERM, checked between ticks)    │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

use anyhow::{Context, Result};
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};
use log::info;
use rppal::gpio::Gpio;

use relaystat::adapters::journal::FileJournal;
use relaystat::adapters::relay::SsrRelay;
use relaystat::adapters::sht31d::Sht31d;
use relaystat::app::service::Controller;
use relaystat::config::ControllerConfig;
use relaystat::pins;
use relaystat::shutdown::{self, ShutdownFlag};

/// Journal file, resolved against the working directory of the service.
const JOURNAL_PATH: &str = "relaystat.log";

#[derive(Parser)]
#[command(name = "relaystat", version, about = "Single-zone HVAC relay thermostat")]
struct Cli {
    /// Use the bench profile (1 s ticks) instead of the production profile.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    info!("relaystat v{} starting", env!("CARGO_PKG_VERSION"));

    let config = if cli.debug {
        info!("debug profile selected");
        ControllerConfig::debug()
    } else {
        ControllerConfig::production()
    };
    config.validate()?;

    // ── Wire the adapters ─────────────────────────────────────
    let i2c = I2cdev::new(pins::I2C_BUS)
        .with_context(|| format!("opening I2C bus {}", pins::I2C_BUS))?;
    let mut sensor = Sht31d::new(i2c, Delay);

    let gpio = Gpio::new().context("claiming GPIO controller")?;
    let mut relay = SsrRelay::new(&gpio, pins::RELAY_BCM_PIN)
        .with_context(|| format!("claiming relay pin GPIO{}", pins::RELAY_BCM_PIN))?;

    let mut journal =
        FileJournal::open(JOURNAL_PATH).with_context(|| format!("opening {JOURNAL_PATH}"))?;

    let flag = ShutdownFlag::new();
    shutdown::register_signals(&flag).context("installing signal handlers")?;

    // ── Run until signalled ───────────────────────────────────
    let mut controller = Controller::new(config);
    controller.run(&mut sensor, &mut relay, &mut journal, &flag);

    // Adapters drop here: the relay line resets undriven (relay open).
    info!("clean shutdown");
    Ok(())
}
