// Host-side tests for the two-bone leg solver.

use glam::Vec2;
use kinetic_core::{solve_knee, Bend, BoneLengths};
use proptest::prelude::*;

#[test]
fn unreachable_target_clamps_onto_the_line() {
    let bones = BoneLengths::default();
    let knee = solve_knee(
        Vec2::new(0.0, 0.0),
        Vec2::new(500.0, 0.0),
        Bend::Negative,
        bones,
    );
    // 115 / 225 of the way to the ankle
    assert!((knee.x - 255.555_56).abs() < 1e-2, "knee.x = {}", knee.x);
    assert!(knee.y.abs() < 1e-6);
}

#[test]
fn coincident_hip_and_ankle_stay_finite() {
    let p = Vec2::new(42.0, -7.0);
    let knee = solve_knee(p, p, Bend::Negative, BoneLengths::default());
    assert!(knee.x.is_finite() && knee.y.is_finite());
    assert_eq!(knee, p);
}

#[test]
fn exact_full_extension_uses_the_straight_branch() {
    let bones = BoneLengths::default();
    let hip = Vec2::new(0.0, 0.0);
    let ankle = Vec2::new(0.0, bones.reach());
    let knee = solve_knee(hip, ankle, Bend::Negative, bones);
    assert!(knee.x.abs() < 1e-6);
    assert!((knee.y - bones.thigh).abs() < 1e-3);
}

#[test]
fn ankle_inside_inner_radius_keeps_knee_on_thigh_circle() {
    let bones = BoneLengths::default();
    let hip = Vec2::new(0.0, 0.0);
    for d in [0.001f32, 0.5, 1.0, 4.0, 4.99] {
        let knee = solve_knee(hip, Vec2::new(d, 0.0), Bend::Negative, bones);
        assert!(
            (knee.distance(hip) - bones.thigh).abs() < 1e-3,
            "d = {d}: knee = {knee:?}"
        );
        assert!(knee.y.abs() < 1e-3);
    }
}

#[test]
fn folded_leg_keeps_bone_lengths() {
    // Hip close to the ankle: deep squat
    let bones = BoneLengths::default();
    let hip = Vec2::new(70.0, 190.0);
    let ankle = Vec2::new(80.0, 315.0);
    let knee = solve_knee(hip, ankle, Bend::Negative, bones);
    assert!((knee.distance(hip) - bones.thigh).abs() < 1e-3);
    assert!((knee.distance(ankle) - bones.calf).abs() < 1e-3);
    // knee folds forward (towards the toe)
    assert!(knee.x > hip.x.max(ankle.x));
}

proptest! {
    #[test]
    fn reachable_targets_satisfy_both_lengths(
        hx in -300.0f32..300.0,
        hy in -300.0f32..300.0,
        angle in 0.0f32..std::f32::consts::TAU,
        // between |thigh - calf| and full reach minus the extension epsilon
        dist in 6.0f32..224.5,
        positive in any::<bool>(),
    ) {
        let bones = BoneLengths::default();
        let hip = Vec2::new(hx, hy);
        let ankle = hip + Vec2::new(angle.cos(), angle.sin()) * dist;
        let bend = if positive { Bend::Positive } else { Bend::Negative };
        let knee = solve_knee(hip, ankle, bend, bones);
        prop_assert!((knee.distance(hip) - bones.thigh).abs() < 1e-3);
        prop_assert!((knee.distance(ankle) - bones.calf).abs() < 1e-3);
    }

    #[test]
    fn never_returns_nan(
        hx in -1.0e4f32..1.0e4,
        hy in -1.0e4f32..1.0e4,
        ax in -1.0e4f32..1.0e4,
        ay in -1.0e4f32..1.0e4,
    ) {
        let knee = solve_knee(
            Vec2::new(hx, hy),
            Vec2::new(ax, ay),
            Bend::Negative,
            BoneLengths::default(),
        );
        prop_assert!(knee.x.is_finite() && knee.y.is_finite());
    }

    #[test]
    fn knee_never_leaves_the_thigh_circle(
        angle in 0.0f32..std::f32::consts::TAU,
        dist in 1.0e-4f32..5.0,
    ) {
        let bones = BoneLengths::default();
        let hip = Vec2::new(150.0, 80.0);
        let ankle = hip + Vec2::new(angle.cos(), angle.sin()) * dist;
        let knee = solve_knee(hip, ankle, Bend::Negative, bones);
        prop_assert!(knee.distance(hip) <= bones.thigh + 1e-3);
    }
}
