//! The controller — hysteresis loop, debounced actuation, rate-limited journal.
//!
//! One instance owns the tick counter and drives the whole lifecycle:
//!
//! ```text
//!   start ──▶ [ tick · sleep · check flag ]* ──▶ shutdown
//! ```
//!
//! Ports are injected per call, so the loop runs identically against the
//! real SHT31/GPIO adapters and against in-memory fakes in tests.

use std::thread;

use log::{debug, error, info, warn};

use crate::config::ControllerConfig;
use crate::control::hysteresis::{self, RelayState};
use crate::shutdown::ShutdownFlag;

use super::events::ControlEvent;
use super::ports::{EventSink, RelayPort, SensorSource};

/// Single-zone thermostat controller.
pub struct Controller {
    config: ControllerConfig,
    /// Cycles 0..routine_log_period; routine readings journal at 0.
    tick_count: u32,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Journal the START line with the active threshold pair.
    pub fn start(&mut self, journal: &mut impl EventSink) {
        let thresholds = self.config.thresholds;
        self.emit(journal, &ControlEvent::Started { thresholds });
        info!(
            "controller started (close at or below {} degC, open at or above {} degC)",
            thresholds.low_c, thresholds.high_c
        );
    }

    /// Run the control loop until `shutdown` is observed, then exit
    /// fail-safe. The flag is checked before every tick; an in-flight read
    /// or actuation is never preempted.
    pub fn run(
        &mut self,
        sensor: &mut impl SensorSource,
        relay: &mut impl RelayPort,
        journal: &mut impl EventSink,
        shutdown: &ShutdownFlag,
    ) {
        self.start(journal);
        while !shutdown.is_requested() {
            self.tick(sensor, relay, journal);
            thread::sleep(self.config.tick_interval);
        }
        self.shutdown(relay, journal);
    }

    /// Exit action: drive the relay open unconditionally (even if it already
    /// is) and journal exactly one STOP line.
    pub fn shutdown(&mut self, relay: &mut impl RelayPort, journal: &mut impl EventSink) {
        if let Err(e) = relay.set_state(RelayState::Open) {
            // Nothing left to do but report it; the drive pin drops with us.
            error!("fail-safe relay open failed on shutdown: {e}");
        }
        self.emit(journal, &ControlEvent::Stopped);
        info!("controller stopped, relay left open");
    }

    // ── Per-tick protocol ─────────────────────────────────────

    /// Run one control cycle: read → decide → actuate → journal.
    pub fn tick(
        &mut self,
        sensor: &mut impl SensorSource,
        relay: &mut impl RelayPort,
        journal: &mut impl EventSink,
    ) {
        // 1. Sample. A failed read abandons the tick entirely: no journal
        //    line, no actuation, no counter advance. The sensor is assumed
        //    transient-flaky and a missed sample is immaterial at this duty
        //    cycle.
        let reading = match sensor.read() {
            Ok(r) => r,
            Err(e) => {
                debug!("sensor read failed ({e}); tick abandoned");
                return;
            }
        };

        // 2./3. Decide against the observed output and actuate at most once.
        let current = relay.state();
        if let Some(action) = hysteresis::decide(self.config.thresholds, reading.temperature_c, current)
        {
            let target = action.target();
            match relay.set_state(target) {
                Ok(()) => {
                    self.emit(
                        journal,
                        &ControlEvent::RelayChanged {
                            from: current,
                            to: target,
                            reading,
                        },
                    );
                    info!("relay {current} -> {target} at {} degC", reading.temperature_c);
                }
                Err(cause) => {
                    // Output state is now unknown; next tick's state() read
                    // is authoritative.
                    self.emit(journal, &ControlEvent::RelayFault { action, cause });
                    warn!("relay {action} command failed: {cause}");
                }
            }
        }

        // 4. Routine reading, once per log period.
        if self.tick_count == 0 {
            self.emit(journal, &ControlEvent::Reading(reading));
        }

        // 5. Advance and wrap the counter.
        self.tick_count = (self.tick_count + 1) % self.config.routine_log_period.max(1);
    }

    /// Completed ticks within the current routine log window.
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Append to the journal, surfacing failures without stopping control.
    fn emit(&self, journal: &mut impl EventSink, event: &ControlEvent) {
        if let Err(e) = journal.emit(event) {
            error!("journal append failed ({e}); continuing without audit line");
        }
    }
}
