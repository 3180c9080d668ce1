//! SHT31-D temperature/humidity sensor adapter.
//!
//! A Ximimark SHT31-D board on the primary I2C bus (VIN→3V3, GND→GND,
//! SCL→SCL, SDA→SDA), read in single-shot mode through the `sht31` driver.
//! Generic over the `embedded-hal` I2C and delay traits; on the Pi these
//! are `linux_embedded_hal::{I2cdev, Delay}`.

use chrono::Local;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use sht31::prelude::*;
use sht31::SHTError;

use crate::app::ports::{Reading, SensorSource};
use crate::error::SensorError;

/// [`SensorSource`] backed by an SHT31-D.
pub struct Sht31d<I2C, D: DelayNs> {
    dev: SHT31<SimpleSingleShot<D>, I2C>,
}

impl<I2C, D> Sht31d<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        let dev = SHT31::new(i2c, delay)
            .with_accuracy(Accuracy::High)
            .with_unit(TemperatureUnit::Celsius);
        Self { dev }
    }
}

impl<I2C, D> SensorSource for Sht31d<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    // Fully qualified: the sht31 prelude globs in its own `Result` alias.
    fn read(&mut self) -> core::result::Result<Reading, SensorError> {
        let raw = self.dev.read().map_err(|e| match e {
            SHTError::ReadingTimeoutError => SensorError::Timeout,
            _ => SensorError::Bus,
        })?;
        // The driver validates checksums; finiteness is on us.
        if !raw.temperature.is_finite() || !raw.humidity.is_finite() {
            return Err(SensorError::OutOfRange);
        }
        Ok(Reading::new(raw.temperature, raw.humidity, Local::now()))
    }
}
