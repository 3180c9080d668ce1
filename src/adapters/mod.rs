//! Adapters — concrete implementations of the port traits.
//!
//! The journal adapter is plain `std::fs` and always available; the sensor
//! and relay adapters touch Raspberry Pi peripherals and are gated behind
//! the `hardware` cargo feature so the library and its tests build anywhere.

pub mod journal;

#[cfg(feature = "hardware")]
pub mod relay;

#[cfg(feature = "hardware")]
pub mod sht31d;
