//! Integration tests for the controller → relay → journal pipeline.
//!
//! Exercise the full per-tick protocol and the shutdown path against the
//! mock adapters, including the failure modes: flaky sensor, failed relay
//! write, unavailable journal.

use std::time::Duration;

use crate::mock_hw::{MockRelay, ScriptedSensor, VecJournal};

use relaystat::app::events::LogLevel;
use relaystat::app::service::Controller;
use relaystat::config::ControllerConfig;
use relaystat::control::hysteresis::RelayState;
use relaystat::error::SensorError;
use relaystat::shutdown::ShutdownFlag;

/// Production thresholds, but no sleeping between ticks.
fn test_config() -> ControllerConfig {
    ControllerConfig {
        tick_interval: Duration::ZERO,
        ..ControllerConfig::production()
    }
}

fn make_controller() -> (Controller, MockRelay, VecJournal) {
    (
        Controller::new(test_config()),
        MockRelay::new(RelayState::Open),
        VecJournal::new(),
    )
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_journals_thresholds_in_both_units() {
    let (mut controller, _, mut journal) = make_controller();

    controller.start(&mut journal);

    assert_eq!(journal.entries.len(), 1);
    let (level, msg) = &journal.entries[0];
    assert_eq!(*level, LogLevel::Start);
    assert!(msg.contains("21.1\u{b0}C (70\u{b0}F)"), "{msg}");
    assert!(msg.contains("23.3\u{b0}C (73.9\u{b0}F)"), "{msg}");
}

// ── Routine logging cadence ───────────────────────────────────

#[test]
fn routine_reading_logged_on_every_sixth_tick() {
    let (mut controller, mut relay, mut journal) = make_controller();
    let mut sensor = ScriptedSensor::steady(22.0, 40.0);

    for tick in 0..20 {
        let before = journal.count(LogLevel::Log);
        controller.tick(&mut sensor, &mut relay, &mut journal);
        let logged = journal.count(LogLevel::Log) > before;
        assert_eq!(logged, tick % 6 == 0, "unexpected cadence at tick {tick}");
    }

    assert_eq!(journal.count(LogLevel::Log), 4); // ticks 0, 6, 12, 18
    assert_eq!(journal.count(LogLevel::Relay), 0);
    assert!(relay.commands.is_empty(), "in-band ticks must not actuate");
}

// ── Hysteresis actuation ──────────────────────────────────────

#[test]
fn cold_tick_closes_open_relay_exactly_once() {
    let (mut controller, mut relay, mut journal) = make_controller();
    let mut sensor = ScriptedSensor::steady(20.0, 40.0);

    for _ in 0..5 {
        controller.tick(&mut sensor, &mut relay, &mut journal);
    }

    // First tick closes; the rest are debounced against the new state.
    assert_eq!(relay.commands, vec![RelayState::Closed]);
    assert_eq!(journal.count(LogLevel::Relay), 1);
    let (_, msg) = journal
        .entries
        .iter()
        .find(|(l, _)| *l == LogLevel::Relay)
        .unwrap();
    assert!(
        msg.contains("relay circuit is currently open; closing relay"),
        "{msg}"
    );
}

#[test]
fn hot_tick_opens_closed_relay() {
    let (mut controller, _, mut journal) = make_controller();
    let mut relay = MockRelay::new(RelayState::Closed);
    let mut sensor = ScriptedSensor::steady(24.0, 40.0);

    controller.tick(&mut sensor, &mut relay, &mut journal);

    assert_eq!(relay.commands, vec![RelayState::Open]);
    let (_, msg) = journal
        .entries
        .iter()
        .find(|(l, _)| *l == LogLevel::Relay)
        .unwrap();
    assert!(
        msg.contains("relay circuit is currently closed; opening relay"),
        "{msg}"
    );
}

#[test]
fn band_interior_holds_either_state() {
    for initial in [RelayState::Open, RelayState::Closed] {
        let (mut controller, _, mut journal) = make_controller();
        let mut relay = MockRelay::new(initial);
        let mut sensor = ScriptedSensor::steady(22.0, 40.0);

        for _ in 0..10 {
            controller.tick(&mut sensor, &mut relay, &mut journal);
        }

        assert!(relay.commands.is_empty(), "band must hold {initial:?}");
        assert_eq!(relay.state, initial);
    }
}

// ── Failure modes ─────────────────────────────────────────────

#[test]
fn sensor_failure_abandons_tick_without_logging() {
    let (mut controller, mut relay, mut journal) = make_controller();
    let mut sensor = ScriptedSensor::new(vec![
        Ok((22.0, 40.0)),
        Err(SensorError::Bus),
        Ok((22.0, 40.0)),
    ]);

    controller.tick(&mut sensor, &mut relay, &mut journal);
    let after_first = journal.entries.len();

    controller.tick(&mut sensor, &mut relay, &mut journal);
    assert_eq!(journal.entries.len(), after_first, "failed tick must not log");
    assert!(relay.commands.is_empty());

    // The loop reaches the next tick and keeps going.
    controller.tick(&mut sensor, &mut relay, &mut journal);
    assert_eq!(sensor.reads, 3);
}

#[test]
fn failed_tick_does_not_advance_the_log_window() {
    let (mut controller, mut relay, mut journal) = make_controller();
    // Tick 0 logs, then a failure, then five good in-band ticks: the sixth
    // *completed* tick is the next routine line.
    let mut script = vec![Ok((22.0, 40.0)), Err(SensorError::Timeout)];
    script.extend(std::iter::repeat_n(Ok((22.0, 40.0)), 6));
    let mut sensor = ScriptedSensor::new(script);

    for _ in 0..8 {
        controller.tick(&mut sensor, &mut relay, &mut journal);
    }

    assert_eq!(journal.count(LogLevel::Log), 2);
}

#[test]
fn relay_write_failure_journals_error_and_recovers() {
    let (mut controller, mut relay, mut journal) = make_controller();
    relay.fail_next = true;
    let mut sensor = ScriptedSensor::steady(20.0, 40.0);

    controller.tick(&mut sensor, &mut relay, &mut journal);

    assert_eq!(journal.count(LogLevel::Error), 1);
    let (_, msg) = journal
        .entries
        .iter()
        .find(|(l, _)| *l == LogLevel::Error)
        .unwrap();
    assert!(msg.contains("relay close command failed"), "{msg}");
    assert_eq!(relay.state, RelayState::Open, "failed write leaves state");
    assert!(relay.commands.is_empty());

    // Next tick re-reads the authoritative state and retries the close.
    controller.tick(&mut sensor, &mut relay, &mut journal);
    assert_eq!(relay.commands, vec![RelayState::Closed]);
    assert_eq!(journal.count(LogLevel::Relay), 1);
}

#[test]
fn journal_failure_never_stops_control() {
    let (mut controller, mut relay, mut journal) = make_controller();
    journal.fail = true;
    let mut sensor = ScriptedSensor::steady(20.0, 40.0);

    controller.tick(&mut sensor, &mut relay, &mut journal);

    assert_eq!(relay.commands, vec![RelayState::Closed]);
    assert!(journal.entries.is_empty());
}

// ── Shutdown ──────────────────────────────────────────────────

#[test]
fn shutdown_opens_closed_relay_and_journals_stop() {
    let (mut controller, _, mut journal) = make_controller();
    let mut relay = MockRelay::new(RelayState::Closed);

    controller.shutdown(&mut relay, &mut journal);

    assert_eq!(relay.commands, vec![RelayState::Open]);
    assert_eq!(journal.count(LogLevel::Stop), 1);
}

#[test]
fn shutdown_commands_open_even_when_already_open() {
    let (mut controller, mut relay, mut journal) = make_controller();

    controller.shutdown(&mut relay, &mut journal);

    assert_eq!(relay.commands, vec![RelayState::Open]);
    assert_eq!(journal.count(LogLevel::Stop), 1);
}

#[test]
fn run_exits_after_signal_with_exactly_one_stop() {
    let mut controller = Controller::new(test_config());
    let mut relay = MockRelay::new(RelayState::Open);
    let mut journal = VecJournal::new();
    let flag = ShutdownFlag::new();
    let mut sensor = ScriptedSensor::steady(22.0, 40.0).with_shutdown_after(3, flag.clone());

    controller.run(&mut sensor, &mut relay, &mut journal, &flag);

    assert_eq!(sensor.reads, 3, "no further ticks after the signal");
    assert_eq!(journal.count(LogLevel::Start), 1);
    assert_eq!(journal.count(LogLevel::Stop), 1);
    assert_eq!(relay.commands.last(), Some(&RelayState::Open));
}

#[test]
fn presignalled_run_executes_no_ticks() {
    let mut controller = Controller::new(test_config());
    let mut relay = MockRelay::new(RelayState::Open);
    let mut journal = VecJournal::new();
    let flag = ShutdownFlag::new();
    flag.request();
    let mut sensor = ScriptedSensor::steady(22.0, 40.0);

    controller.run(&mut sensor, &mut relay, &mut journal, &flag);

    assert_eq!(sensor.reads, 0);
    assert_eq!(relay.commands, vec![RelayState::Open]);
    assert_eq!(journal.count(LogLevel::Start), 1);
    assert_eq!(journal.count(LogLevel::Stop), 1);
    assert_eq!(journal.entries.len(), 2);
}
