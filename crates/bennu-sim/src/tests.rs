//! Tests for the mission controller, clock, explosion sequence and engine.

use std::time::Duration;

use bennu_core::commands::MissionCommand;
use bennu_core::constants::*;
use bennu_core::enums::*;
use bennu_core::error::CommandRejected;
use bennu_core::events::MissionEvent;
use bennu_core::locations::LocationProfile;
use bennu_core::state::MissionSnapshot;
use bennu_core::types::{MissionConfig, MissionTiming, TimeSpeed};

use crate::controller::MissionController;
use crate::engine::{EngineConfig, MissionEngine};
use crate::mission::MissionState;
use crate::trajectory;

const EPS: f64 = 1e-9;
const SECOND: Duration = Duration::from_secs(1);
const FRAME: Duration = Duration::from_millis(50);

fn armed_controller(location: LocationId) -> MissionController {
    let mut controller = MissionController::new(MissionConfig::default());
    controller
        .select_location(LocationProfile::builtin(location))
        .unwrap();
    controller
}

fn launched_engine(config: MissionConfig, force: f64, speed: u32) -> MissionEngine {
    let mut engine = MissionEngine::new(EngineConfig {
        mission: config,
        ..Default::default()
    });
    engine
        .apply_command(MissionCommand::SelectLocation {
            location: LocationId::Land,
        })
        .unwrap();
    engine
        .apply_command(MissionCommand::SetDeflectionForce { force })
        .unwrap();
    engine.apply_command(MissionCommand::Launch).unwrap();
    engine
        .apply_command(MissionCommand::SetTimeSpeed { multiplier: speed })
        .unwrap();
    engine
}

/// Ticks the engine at a fixed frame until resolved. Returns every snapshot.
fn run_until_resolved(engine: &mut MissionEngine, frame: Duration) -> Vec<MissionSnapshot> {
    let mut snapshots = Vec::new();
    for _ in 0..100_000 {
        let snap = engine.tick(frame);
        let resolved = snap.resolved;
        snapshots.push(snap);
        if resolved {
            return snapshots;
        }
    }
    panic!("mission did not resolve");
}

/// Steps exactly from firing to firing. Returns (expiry time, resolution time).
fn step_until_resolved(engine: &mut MissionEngine) -> (Duration, Duration, Vec<MissionEvent>) {
    let mut expired_at = None;
    let mut events = Vec::new();
    while let Some(due) = engine.next_due() {
        let snap = engine.tick(due);
        if snap.outcome.is_some() && expired_at.is_none() {
            expired_at = Some(engine.elapsed());
        }
        events.extend(snap.events);
    }
    assert!(engine.controller().state().resolved());
    (expired_at.unwrap(), engine.elapsed(), events)
}

fn explosion_frames(events: &[MissionEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            MissionEvent::ExplosionFrame { frame } => Some(*frame),
            _ => None,
        })
        .collect()
}

// ---- Trajectory boundary ----

#[test]
fn test_success_unreachable_with_stock_constants() {
    let config = MissionConfig::default();
    let max = trajectory::miss_distance(&config, FORCE_MAX, config.total_years);
    assert!((max - 1076.8).abs() < EPS);
    assert!(
        max < config.safe_distance_km,
        "strongest deflection over the full countdown must fall short of the safe distance"
    );

    let mut force = FORCE_MIN;
    while force <= FORCE_MAX + EPS {
        let predicted = trajectory::predicted_miss(&config, force);
        assert_eq!(
            crate::outcome::resolve(&config, predicted),
            MissionOutcome::Failure
        );
        force += 0.1;
    }
}

// ---- Pre-launch ----

#[test]
fn test_initial_snapshot() {
    let controller = MissionController::new(MissionConfig::default());
    let snap = controller.snapshot();
    assert_eq!(snap.phase, MissionPhase::Selecting);
    assert!(snap.location.is_none());
    assert_eq!(snap.deflection_force, FORCE_DEFAULT);
    assert_eq!(snap.applied_force, 0.0);
    assert_eq!(snap.time_remaining_years, TOTAL_YEARS);
    assert_eq!(snap.time_speed, TimeSpeed::X1);
    assert_eq!(snap.current_miss_km, INITIAL_MISS_KM);
    assert_eq!(snap.current_band, OutcomeBand::Dangerous);
    assert!((snap.predicted_miss_km - 288.4).abs() < EPS);
    assert_eq!(snap.predicted_band, OutcomeBand::Marginal);
    assert_eq!(snap.explosion_frame, 0);
    assert!(!snap.launched && !snap.running && !snap.resolved);
}

#[test]
fn test_predicted_miss_follows_force_before_launch() {
    let mut controller = armed_controller(LocationId::Ocean);
    controller.set_deflection_force(0.1).unwrap();
    let snap = controller.snapshot();
    assert!((snap.predicted_miss_km - (-468.464)).abs() < EPS);
    assert_eq!(snap.predicted_band, OutcomeBand::Dangerous);
    assert_eq!(snap.current_miss_km, INITIAL_MISS_KM);
}

#[test]
fn test_force_requires_location() {
    let mut controller = MissionController::new(MissionConfig::default());
    assert_eq!(
        controller.set_deflection_force(3.0),
        Err(CommandRejected::NoLocation)
    );
    assert_eq!(controller.launch(), Err(CommandRejected::NoLocation));
    assert_eq!(controller.phase(), MissionPhase::Selecting);
}

#[test]
fn test_force_out_of_range_rejected() {
    let mut controller = armed_controller(LocationId::Land);
    for bad in [0.05, 5.1, -1.0, f64::NAN] {
        assert!(matches!(
            controller.set_deflection_force(bad),
            Err(CommandRejected::ForceOutOfRange { .. })
        ));
    }
    assert_eq!(controller.state().deflection_force(), FORCE_DEFAULT);

    controller.set_deflection_force(FORCE_MIN).unwrap();
    controller.set_deflection_force(FORCE_MAX).unwrap();
    assert_eq!(controller.state().deflection_force(), FORCE_MAX);
}

#[test]
fn test_reselecting_location_starts_fresh_mission() {
    let mut controller = armed_controller(LocationId::Land);
    controller.set_deflection_force(4.0).unwrap();
    controller
        .select_location(LocationProfile::builtin(LocationId::Ocean))
        .unwrap();
    assert_eq!(controller.state().deflection_force(), FORCE_DEFAULT);
    assert_eq!(
        controller.state().location().map(|l| l.id),
        Some(LocationId::Ocean)
    );
    assert_eq!(controller.phase(), MissionPhase::Armed);
}

#[test]
fn test_clock_does_not_tick_before_launch() {
    let mut controller = armed_controller(LocationId::Land);
    controller.advance(SECOND * 60);
    assert_eq!(controller.state().time_remaining_years(), TOTAL_YEARS);
    assert_eq!(controller.next_due(), None);
}

#[test]
fn test_speed_and_pause_rejected_before_launch() {
    let mut controller = armed_controller(LocationId::Land);
    assert_eq!(
        controller.set_time_speed(5),
        Err(CommandRejected::NotLaunched)
    );
    assert_eq!(controller.toggle_pause(), Err(CommandRejected::NotLaunched));
    assert_eq!(controller.state().time_speed(), TimeSpeed::X1);
}

// ---- Launch ----

#[test]
fn test_launch_starts_clock() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();
    let snap = controller.snapshot();
    assert_eq!(snap.phase, MissionPhase::Running);
    assert!(snap.launched && snap.running);
    assert_eq!(snap.applied_force, FORCE_DEFAULT);
    assert_eq!(controller.next_due(), Some(CLOCK_TICK_PERIOD));
}

#[test]
fn test_launch_is_idempotent() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();
    controller.advance(SECOND * 3);
    let before = controller.state().clone();

    assert_eq!(controller.launch(), Err(CommandRejected::AlreadyLaunched));
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_launch_rejected_without_countdown() {
    let config = MissionConfig {
        total_years: 0.0,
        ..Default::default()
    };
    let mut controller = MissionController::new(config);
    controller
        .select_location(LocationProfile::builtin(LocationId::Land))
        .unwrap();

    assert_eq!(controller.launch(), Err(CommandRejected::NoTimeRemaining));
    assert_eq!(controller.phase(), MissionPhase::Armed);
    assert_eq!(controller.next_due(), None);
    let snap = controller.snapshot();
    assert!(!snap.launched && !snap.running);
}

#[test]
fn test_force_locked_after_launch() {
    let mut controller = armed_controller(LocationId::Ocean);
    controller.set_deflection_force(1.5).unwrap();
    controller.launch().unwrap();

    assert_eq!(
        controller.set_deflection_force(4.0),
        Err(CommandRejected::AlreadyLaunched)
    );
    assert_eq!(controller.state().deflection_force(), 1.5);

    let snap = controller.take_snapshot();
    assert!(snap.events.contains(&MissionEvent::CommandRejected {
        reason: CommandRejected::AlreadyLaunched
    }));
}

#[test]
fn test_location_locked_after_launch() {
    let mut controller = armed_controller(LocationId::Ocean);
    controller.launch().unwrap();
    assert_eq!(
        controller.select_location(LocationProfile::builtin(LocationId::Land)),
        Err(CommandRejected::AlreadyLaunched)
    );
    assert_eq!(
        controller.state().location().map(|l| l.id),
        Some(LocationId::Ocean)
    );
}

// ---- Clock ----

#[test]
fn test_clock_tick_is_one_second_of_real_time() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();

    controller.advance(Duration::from_millis(999));
    assert_eq!(controller.state().time_remaining_years(), TOTAL_YEARS);
    controller.advance(Duration::from_millis(1));
    assert!((controller.state().time_remaining_years() - 9.9).abs() < EPS);
}

#[test]
fn test_speed_change_applies_on_next_tick() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();
    controller.advance(SECOND);
    assert!((controller.state().time_remaining_years() - 9.9).abs() < EPS);

    controller.advance(Duration::from_millis(400));
    controller.set_time_speed(10).unwrap();
    assert!(
        (controller.state().time_remaining_years() - 9.9).abs() < EPS,
        "speed change must not apply a decrement by itself"
    );
    assert_eq!(controller.next_due(), Some(Duration::from_millis(600)));

    controller.advance(Duration::from_millis(600));
    assert!((controller.state().time_remaining_years() - 8.9).abs() < EPS);
}

#[test]
fn test_unsupported_speed_rejected() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();
    for bad in [0, 3, 4, 100] {
        assert_eq!(
            controller.set_time_speed(bad),
            Err(CommandRejected::UnsupportedSpeed { multiplier: bad })
        );
    }
    assert_eq!(controller.state().time_speed(), TimeSpeed::X1);
    controller.set_time_speed(2).unwrap();
    assert_eq!(controller.state().time_speed(), TimeSpeed::X2);
}

#[test]
fn test_pause_resume_loses_no_time() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();

    controller.advance(Duration::from_millis(2500));
    let at_pause = controller.state().time_remaining_years();
    assert!((at_pause - 9.8).abs() < EPS);

    controller.toggle_pause().unwrap();
    let snap = controller.snapshot();
    assert_eq!(snap.phase, MissionPhase::Paused);
    assert!(snap.launched && !snap.running);
    assert_eq!(controller.next_due(), None);

    controller.advance(SECOND * 30);
    assert_eq!(controller.state().time_remaining_years(), at_pause);

    controller.toggle_pause().unwrap();
    assert_eq!(controller.state().time_remaining_years(), at_pause);
    assert_eq!(
        controller.next_due(),
        Some(Duration::from_millis(500)),
        "the half period elapsed before pausing must carry over"
    );

    controller.advance(Duration::from_millis(500));
    assert!((controller.state().time_remaining_years() - 9.7).abs() < EPS);
    controller.advance(SECOND);
    assert!((controller.state().time_remaining_years() - 9.6).abs() < EPS);
}

#[test]
fn test_speed_change_while_paused() {
    let mut controller = armed_controller(LocationId::Land);
    controller.launch().unwrap();
    controller.toggle_pause().unwrap();
    controller.set_time_speed(5).unwrap();
    controller.toggle_pause().unwrap();
    controller.advance(SECOND);
    assert!((controller.state().time_remaining_years() - 9.5).abs() < EPS);
}

#[test]
fn test_time_remaining_monotonic_and_non_negative() {
    let mut engine = launched_engine(MissionConfig::default(), 2.5, 1);
    let speeds = [1u32, 10, 2, 5, 10];
    let mut last = TOTAL_YEARS;
    for i in 0..400 {
        if i % 7 == 0 {
            let _ = engine.apply_command(MissionCommand::SetTimeSpeed {
                multiplier: speeds[(i / 7) % speeds.len()],
            });
        }
        let snap = engine.tick(Duration::from_millis(370));
        assert!(snap.time_remaining_years >= 0.0);
        assert!(snap.time_remaining_years <= last);
        assert!(!snap.running || snap.time_remaining_years > 0.0);
        last = snap.time_remaining_years;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn test_full_countdown_at_each_speed() {
    for (multiplier, seconds) in [(1u32, 100u64), (2, 50), (5, 20), (10, 10)] {
        let mut engine = launched_engine(MissionConfig::default(), 2.5, multiplier);
        let (expired_at, _, _) = step_until_resolved(&mut engine);
        assert_eq!(
            expired_at,
            SECOND * seconds as u32,
            "countdown at {multiplier}x should take {seconds}s"
        );
    }
}

// ---- Expiry and explosion ----

#[test]
fn test_minimum_force_mission_fails_after_explosion() {
    let mut engine = launched_engine(MissionConfig::default(), 0.1, 10);
    let snapshots = run_until_resolved(&mut engine, FRAME);

    let expiry_index = snapshots
        .iter()
        .position(|s| s.outcome.is_some())
        .unwrap();
    let expiry = &snapshots[expiry_index];
    assert_eq!(expiry.time_remaining_years, 0.0);
    assert!((expiry.current_miss_km - (-468.464)).abs() < 1e-6);
    assert_eq!(expiry.current_band, OutcomeBand::Dangerous);
    assert_eq!(expiry.outcome, Some(MissionOutcome::Failure));
    assert_eq!(expiry.phase, MissionPhase::Exploding);
    assert_eq!(expiry.explosion_frame, 1);
    assert!(!expiry.running);
    assert!(!expiry.resolved);

    // Nothing explodes before expiry.
    for snap in &snapshots[..expiry_index] {
        assert_eq!(snap.explosion_frame, 0);
        assert!(snap.outcome.is_none());
    }

    // Frames only grow, and resolution waits for the terminal frame.
    let mut last_frame = 0;
    for snap in &snapshots[expiry_index..] {
        assert!(snap.explosion_frame >= last_frame);
        last_frame = snap.explosion_frame;
        if !snap.resolved {
            assert_eq!(snap.phase, MissionPhase::Exploding);
        }
    }

    let last = snapshots.last().unwrap();
    assert_eq!(last.phase, MissionPhase::ResolvedFailure);
    assert_eq!(last.explosion_frame, EXPLOSION_FRAMES);

    let events: Vec<MissionEvent> = snapshots.iter().flat_map(|s| s.events.clone()).collect();
    assert_eq!(
        explosion_frames(&events),
        (1..=EXPLOSION_FRAMES).collect::<Vec<_>>()
    );
    assert_eq!(
        events.last(),
        Some(&MissionEvent::Resolved {
            outcome: MissionOutcome::Failure
        })
    );

    // 29 frame periods, a hold at frame 30, then the settle delay, at 50ms
    // per engine tick.
    assert_eq!(snapshots.len() - 1 - expiry_index, (30 * 50 + 500) / 50);
    assert!(!engine.controller().state().has_armed_timers());
}

#[test]
fn test_explosion_pacing_independent_of_speed() {
    let mut durations = Vec::new();
    for multiplier in SPEED_MULTIPLIERS {
        let mut engine = launched_engine(MissionConfig::default(), 0.1, multiplier);
        let (expired_at, resolved_at, events) = step_until_resolved(&mut engine);
        assert_eq!(explosion_frames(&events).len() as u32, EXPLOSION_FRAMES);
        durations.push(resolved_at - expired_at);
    }
    let expected = EXPLOSION_FRAME_PERIOD * EXPLOSION_FRAMES + EXPLOSION_SETTLE_DELAY;
    assert_eq!(expected, Duration::from_millis(2000));
    assert!(durations.iter().all(|d| *d == expected), "{durations:?}");
}

#[test]
fn test_large_time_step_still_one_event_per_period() {
    let mut engine = launched_engine(MissionConfig::default(), 0.1, 10);
    // One giant step covers the whole countdown and the explosion.
    let snap = engine.tick(SECOND * 60);
    assert!(snap.resolved);
    let ticks = snap
        .events
        .iter()
        .filter(|e| matches!(e, MissionEvent::ClockTick { .. }))
        .count();
    assert_eq!(ticks, 10);
    assert_eq!(
        explosion_frames(&snap.events),
        (1..=EXPLOSION_FRAMES).collect::<Vec<_>>()
    );
}

#[test]
fn test_success_branch_skips_explosion() {
    let config = MissionConfig {
        conversion_constant: 100.0,
        ..Default::default()
    };
    let mut engine = launched_engine(config, FORCE_MAX, 10);
    let (expired_at, resolved_at, events) = step_until_resolved(&mut engine);

    assert!(explosion_frames(&events).is_empty());
    assert_eq!(resolved_at - expired_at, SUCCESS_SETTLE_DELAY);

    let snap = engine.take_snapshot();
    assert_eq!(snap.phase, MissionPhase::ResolvedSuccess);
    assert_eq!(snap.explosion_frame, 0);
    assert_eq!(snap.current_band, OutcomeBand::Safe);
    assert!((snap.current_miss_km - 4500.0).abs() < EPS);

    let report = engine.controller().report().unwrap();
    assert_eq!(report.outcome, MissionOutcome::Success);
    assert_eq!(report.population_protected, WORLD_POPULATION);
}

#[test]
fn test_settling_phase_between_expiry_and_success() {
    let config = MissionConfig {
        conversion_constant: 100.0,
        ..Default::default()
    };
    let mut engine = launched_engine(config, FORCE_MAX, 10);
    let snap = engine.tick(SECOND * 10);
    assert_eq!(snap.phase, MissionPhase::Settling);
    assert_eq!(snap.outcome, Some(MissionOutcome::Success));
    assert!(!snap.resolved);

    let snap = engine.tick(Duration::from_millis(999));
    assert!(!snap.resolved);
    let snap = engine.tick(Duration::from_millis(1));
    assert!(snap.resolved);
}

#[test]
fn test_controls_rejected_after_expiry() {
    let mut engine = launched_engine(MissionConfig::default(), 0.1, 10);
    engine.tick(SECOND * 10);
    assert_eq!(engine.phase(), MissionPhase::Exploding);

    assert_eq!(
        engine.apply_command(MissionCommand::TogglePause),
        Err(CommandRejected::MissionConcluded)
    );
    assert_eq!(
        engine.apply_command(MissionCommand::SetTimeSpeed { multiplier: 1 }),
        Err(CommandRejected::MissionConcluded)
    );
    assert_eq!(engine.controller().state().time_speed(), TimeSpeed::X10);
    assert_eq!(engine.phase(), MissionPhase::Exploding);
}

#[test]
fn test_report_after_failure() {
    let mut engine = launched_engine(MissionConfig::default(), 0.1, 10);
    assert!(engine.controller().report().is_none());
    run_until_resolved(&mut engine, FRAME);

    let report = engine.controller().report().unwrap();
    assert_eq!(report.location_name, "Central USA");
    assert_eq!(report.outcome, MissionOutcome::Failure);
    assert_eq!(report.final_band, OutcomeBand::Dangerous);
    assert!((report.warning_time_used_years - TOTAL_YEARS).abs() < EPS);
    assert_eq!(report.population_protected, 0);
}

// ---- Reset ----

#[test]
fn test_reset_returns_to_initial_state_from_any_phase() {
    let initial = MissionState::new(&MissionConfig::default(), &MissionTiming::default());

    let mut setups: Vec<Box<dyn Fn(&mut MissionEngine)>> = vec![
        Box::new(|_| {}),
        Box::new(|e| {
            let _ = e.apply_command(MissionCommand::SelectLocation {
                location: LocationId::Ocean,
            });
        }),
        Box::new(|e| {
            e.tick(Duration::from_millis(4300));
        }),
        Box::new(|e| {
            let _ = e.apply_command(MissionCommand::TogglePause);
        }),
        Box::new(|e| {
            e.tick(SECOND * 10 + FRAME * 5);
        }),
        Box::new(|e| {
            e.tick(SECOND * 60);
        }),
    ];

    for (i, setup) in setups.drain(..).enumerate() {
        let mut engine = launched_engine(MissionConfig::default(), 0.1, 10);
        setup(&mut engine);
        let epoch = engine.controller().epoch();

        engine.apply_command(MissionCommand::Reset).unwrap();
        assert_eq!(engine.controller().state(), &initial, "setup {i}");
        assert!(!engine.controller().state().has_armed_timers());
        assert_eq!(engine.controller().epoch(), epoch + 1);

        engine.apply_command(MissionCommand::Reset).unwrap();
        assert_eq!(engine.controller().state(), &initial, "second reset, setup {i}");
    }
}

#[test]
fn test_reset_during_explosion_cancels_sequence() {
    let mut engine = launched_engine(MissionConfig::default(), 0.1, 10);
    let snap = engine.tick(SECOND * 10 + FRAME * 10);
    assert_eq!(snap.phase, MissionPhase::Exploding);
    assert_eq!(snap.explosion_frame, 11);

    engine.queue_command(MissionCommand::Reset);
    let snap = engine.tick(SECOND * 120);
    assert_eq!(snap.phase, MissionPhase::Selecting);
    assert_eq!(snap.explosion_frame, 0);
    assert_eq!(snap.time_remaining_years, TOTAL_YEARS);
    assert!(!snap.resolved);
    assert_eq!(snap.epoch, 1);
    assert_eq!(snap.events, vec![MissionEvent::Reset { epoch: 1 }]);
    assert_eq!(engine.next_due(), None);
}

#[test]
fn test_old_mission_timers_never_touch_new_mission() {
    let mut engine = launched_engine(MissionConfig::default(), 0.1, 1);
    engine.tick(Duration::from_millis(2700));

    engine.queue_commands([
        MissionCommand::Reset,
        MissionCommand::SelectLocation {
            location: LocationId::Ocean,
        },
        MissionCommand::Launch,
    ]);
    let snap = engine.tick(Duration::ZERO);
    assert_eq!(snap.phase, MissionPhase::Running);
    assert_eq!(snap.time_remaining_years, TOTAL_YEARS);
    assert_eq!(
        engine.next_due(),
        Some(CLOCK_TICK_PERIOD),
        "the new clock must start a full period, not inherit the old partial one"
    );
}

// ---- Engine ----

#[test]
fn test_queued_commands_apply_at_tick_boundary() {
    let mut engine = MissionEngine::new(EngineConfig::default());
    engine.queue_commands([
        MissionCommand::SelectLocation {
            location: LocationId::Land,
        },
        MissionCommand::SetDeflectionForce { force: 3.0 },
        MissionCommand::Launch,
    ]);
    assert_eq!(engine.phase(), MissionPhase::Selecting);

    let snap = engine.tick(SECOND);
    assert_eq!(snap.phase, MissionPhase::Running);
    assert_eq!(snap.deflection_force, 3.0);
    assert!((snap.time_remaining_years - 9.9).abs() < EPS);
    assert!(matches!(
        snap.events.as_slice(),
        [
            MissionEvent::LocationSelected {
                location: LocationId::Land
            },
            MissionEvent::Launched { .. },
            MissionEvent::ClockTick { .. },
        ]
    ));
}

#[test]
fn test_events_drain_between_snapshots() {
    let mut engine = launched_engine(MissionConfig::default(), 2.5, 1);
    let first = engine.tick(Duration::ZERO);
    assert!(!first.events.is_empty());
    let second = engine.tick(Duration::ZERO);
    assert!(second.events.is_empty());
}

#[test]
fn test_determinism_same_inputs() {
    let mut engine_a = launched_engine(MissionConfig::default(), 1.7, 2);
    let mut engine_b = launched_engine(MissionConfig::default(), 1.7, 2);

    for i in 0..800 {
        if i == 40 {
            engine_a.queue_command(MissionCommand::TogglePause);
            engine_b.queue_command(MissionCommand::TogglePause);
        }
        if i == 90 {
            engine_a.queue_command(MissionCommand::TogglePause);
            engine_b.queue_command(MissionCommand::TogglePause);
        }
        let json_a = serde_json::to_string(&engine_a.tick(Duration::from_millis(130))).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(Duration::from_millis(130))).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at tick {i}");
    }
}

#[test]
fn test_progress_tracks_elapsed_fraction() {
    let mut engine = launched_engine(MissionConfig::default(), 2.5, 5);
    let snap = engine.tick(SECOND * 4);
    assert!((snap.elapsed_years - 2.0).abs() < EPS);
    assert!((snap.progress - 0.2).abs() < EPS);
}

#[test]
fn test_accelerated_timing_keeps_simulated_quantities() {
    let mut engine = MissionEngine::new(EngineConfig {
        mission: MissionConfig::default(),
        timing: MissionTiming::accelerated(100),
    });
    engine.queue_commands([
        MissionCommand::SelectLocation {
            location: LocationId::Ocean,
        },
        MissionCommand::Launch,
    ]);
    let snap = engine.tick(Duration::from_millis(10));
    assert!((snap.time_remaining_years - 9.9).abs() < EPS);
}
