// Host-side tests for the press-and-hold phase cycle.

use kinetic_core::{AnimState, Gesture, LegCycle, RigConfig, Transition};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// Phase change per second over one millisecond.
fn phase_rate(c: &mut LegCycle) -> f32 {
    let before = c.phase();
    c.tick(ms(1));
    (c.phase() - before) / 0.001
}

#[test]
fn full_cycle_returns_to_idle_at_zero() {
    let mut c = LegCycle::new();
    assert_eq!(
        c.press_start(),
        Some(Transition {
            from: AnimState::Idle,
            to: AnimState::Loading
        })
    );
    c.tick(ms(500));
    assert!(c.phase() > 0.5);

    assert_eq!(
        c.press_end(),
        Some(Transition {
            from: AnimState::Loading,
            to: AnimState::Explosive
        })
    );
    assert!(c.has_pending_timer());

    let fired = c.tick(ms(300));
    assert_eq!(
        fired.as_slice(),
        &[Transition {
            from: AnimState::Explosive,
            to: AnimState::Recovery
        }]
    );
    assert!(!c.has_pending_timer());

    let done = c.tick(ms(400));
    assert_eq!(
        done.as_slice(),
        &[Transition {
            from: AnimState::Recovery,
            to: AnimState::Idle
        }]
    );
    assert_eq!(c.state(), AnimState::Idle);
    assert_eq!(c.phase(), 0.0);
    assert!(!c.is_animating());
}

#[test]
fn cycle_closes_with_small_frame_steps() {
    let mut c = LegCycle::new();
    c.handle(Gesture::PressStart);
    for _ in 0..30 {
        c.tick(ms(16));
    }
    c.handle(Gesture::PressEnd);
    let mut seen = Vec::new();
    for _ in 0..60 {
        seen.extend(c.tick(ms(16)));
    }
    assert_eq!(
        seen.iter().map(|t| t.to).collect::<Vec<_>>(),
        vec![AnimState::Recovery, AnimState::Idle]
    );
    assert_eq!(c.state(), AnimState::Idle);
    assert_eq!(c.phase(), 0.0);
}

#[test]
fn release_keeps_the_phase_moving() {
    let mut c = LegCycle::new();
    c.press_start();
    c.tick(ms(100));
    let before = phase_rate(&mut c);
    assert!(before > 1.0, "loading rate {before}");
    c.press_end();
    let after = phase_rate(&mut c);
    assert!(
        (after - before).abs() < before * 0.25,
        "rate jumped from {before} to {after}"
    );
}

#[test]
fn re_press_during_recovery_carries_its_motion() {
    let mut c = LegCycle::new();
    c.press_start();
    c.press_end();
    c.tick(ms(300));
    c.tick(ms(50));
    assert_eq!(c.state(), AnimState::Recovery);
    let before = phase_rate(&mut c);
    assert!(before > 0.0);
    c.press_start();
    // the loading spring turns the phase around instead of starting from rest
    let after = phase_rate(&mut c);
    assert!(after > 0.0, "rate {after}");
}

#[test]
fn re_press_while_loading_is_rejected() {
    let mut c = LegCycle::new();
    c.press_start();
    c.tick(ms(100));
    let phase = c.phase();
    assert_eq!(c.press_start(), None);
    assert_eq!(c.state(), AnimState::Loading);
    assert_eq!(c.phase(), phase);
}

#[test]
fn press_start_while_explosive_is_ignored() {
    let mut c = LegCycle::new();
    c.press_start();
    c.press_end();
    assert_eq!(c.press_start(), None);
    assert_eq!(c.state(), AnimState::Explosive);
}

#[test]
fn instant_release_still_runs_the_full_pulse() {
    let mut c = LegCycle::new();
    c.press_start();
    c.press_end();
    assert_eq!(c.state(), AnimState::Explosive);
    assert!(c.tick(ms(299)).is_empty());
    assert_eq!(c.state(), AnimState::Explosive);
    assert!(c.phase() > 1.0);
    let t = c.tick(ms(1));
    assert_eq!(t.len(), 1);
    assert_eq!(c.state(), AnimState::Recovery);
}

#[test]
fn long_tick_carries_leftover_time_into_recovery() {
    let mut c = LegCycle::new();
    c.press_start();
    c.press_end();
    let t = c.tick(ms(700));
    assert_eq!(
        t.iter().map(|t| t.to).collect::<Vec<_>>(),
        vec![AnimState::Recovery, AnimState::Idle]
    );
    assert_eq!(c.phase(), 0.0);
}

#[test]
fn press_during_recovery_restarts_loading() {
    let mut c = LegCycle::new();
    c.press_start();
    c.press_end();
    c.tick(ms(300));
    c.tick(ms(100));
    assert_eq!(c.state(), AnimState::Recovery);
    let from = c.phase();
    assert!(from > 2.0 && from < 3.0);
    assert_eq!(
        c.press_start().map(|t| t.to),
        Some(AnimState::Loading)
    );
    // loading spring pulls the phase back towards 1
    c.tick(ms(150));
    assert!(c.phase() < from);
}

#[test]
fn teardown_cancels_pending_hold_timer() {
    let mut c = LegCycle::new();
    c.press_start();
    c.press_end();
    c.tick(ms(100));
    let phase = c.phase();
    c.teardown();
    assert!(c.is_torn_down());
    assert!(!c.has_pending_timer());
    assert!(!c.is_animating());

    assert!(c.tick(ms(1_000)).is_empty());
    assert_eq!(c.state(), AnimState::Explosive);
    assert_eq!(c.phase(), phase);
    assert_eq!(c.press_start(), None);
    assert_eq!(c.press_end(), None);
}

#[test]
fn frame_reflects_machine_state() {
    let mut c = LegCycle::new();
    c.press_start();
    let cfg = RigConfig::default();
    let f = c.frame(&cfg);
    assert_eq!(f.state, AnimState::Loading);
    assert_eq!(f.hud.banner.title, "ECCENTRIC");
    assert_eq!(f.phase, c.phase());
}
