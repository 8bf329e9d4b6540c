//! Time-stepped animations for the phase scalar.
//!
//! A spring chases its target with mass/stiffness/damping dynamics and settles
//! when close and slow enough. A tween moves over a fixed duration along an
//! easing curve.

use crate::constants::{SPRING_MASS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_SUBSTEP};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: SPRING_MASS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    params: SpringParams,
    target: f32,
    velocity: f32,
    settled: bool,
}

impl Spring {
    /// Start chasing `target` with the phase already moving at `velocity`
    /// (units per second).
    pub fn new(params: SpringParams, target: f32, velocity: f32) -> Self {
        Self {
            params,
            target,
            velocity,
            settled: false,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance `value` by `dt` using fixed semi-implicit Euler sub-steps.
    pub fn step(&mut self, value: &mut f32, dt: Duration) {
        if self.settled {
            *value = self.target;
            return;
        }
        let mut remaining = dt;
        while !remaining.is_zero() {
            let h = remaining.min(SPRING_SUBSTEP);
            remaining -= h;
            let h = h.as_secs_f32();
            let SpringParams {
                stiffness,
                damping,
                mass,
            } = self.params;
            let accel = (-stiffness * (*value - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            *value += self.velocity * h;

            if (*value - self.target).abs() < SPRING_REST_DELTA
                && self.velocity.abs() < SPRING_REST_SPEED
            {
                *value = self.target;
                self.velocity = 0.0;
                self.settled = true;
                return;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Circular ease-out: fast start, soft landing.
    CircOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::CircOut => {
                let u = t - 1.0;
                (1.0 - u * u).max(0.0).sqrt()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    target: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    velocity: f32,
}

impl Tween {
    pub fn new(from: f32, target: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            target,
            duration,
            elapsed: Duration::ZERO,
            easing,
            velocity: 0.0,
        }
    }

    /// Rate of change over the last step; zero once finished.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`; lands exactly on the target once the duration has
    /// elapsed.
    pub fn step(&mut self, value: &mut f32, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.is_finished() {
            *value = self.target;
            self.velocity = 0.0;
            return;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let next = self.from + (self.target - self.from) * self.easing.apply(t);
        if !dt.is_zero() {
            self.velocity = (next - *value) / dt.as_secs_f32();
        }
        *value = next;
    }
}

/// The single animation currently driving the phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseAnimation {
    Spring(Spring),
    Tween(Tween),
}

impl PhaseAnimation {
    pub fn step(&mut self, value: &mut f32, dt: Duration) {
        match self {
            PhaseAnimation::Spring(s) => s.step(value, dt),
            PhaseAnimation::Tween(t) => t.step(value, dt),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            PhaseAnimation::Spring(s) => s.is_settled(),
            PhaseAnimation::Tween(t) => t.is_finished(),
        }
    }

    /// Current phase velocity, handed to the next animation so the motion
    /// does not restart from rest.
    pub fn velocity(&self) -> f32 {
        match self {
            PhaseAnimation::Spring(s) => s.velocity(),
            PhaseAnimation::Tween(t) => t.velocity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_settles_on_target() {
        let mut s = Spring::new(SpringParams::new(120.0, 18.0), 1.0, 0.0);
        let mut v = 0.0;
        s.step(&mut v, Duration::from_secs(5));
        assert!(s.is_settled());
        assert_eq!(v, 1.0);
    }

    #[test]
    fn spring_moves_toward_target() {
        let mut s = Spring::new(SpringParams::new(300.0, 20.0), 2.0, 0.0);
        let mut v = 1.0;
        s.step(&mut v, Duration::from_millis(16));
        assert!(v > 1.0 && v < 2.0);
        assert!(!s.is_settled());
    }

    #[test]
    fn spring_keeps_initial_velocity() {
        let params = SpringParams::new(300.0, 20.0);
        let mut from_rest = Spring::new(params, 2.0, 0.0);
        let mut moving = Spring::new(params, 2.0, 5.0);
        let (mut a, mut b) = (1.0, 1.0);
        from_rest.step(&mut a, Duration::from_millis(2));
        moving.step(&mut b, Duration::from_millis(2));
        assert!(b - 1.0 > 0.009);
        assert!(b > a);
    }

    #[test]
    fn tween_reports_step_velocity() {
        let mut t = Tween::new(2.0, 3.0, Duration::from_millis(400), Easing::CircOut);
        let mut v = 2.0;
        t.step(&mut v, Duration::from_millis(100));
        assert!((t.velocity() - (v - 2.0) / 0.1).abs() < 1e-3);
        t.step(&mut v, Duration::from_millis(400));
        assert_eq!(t.velocity(), 0.0);
    }

    #[test]
    fn circ_out_endpoints() {
        assert_eq!(Easing::CircOut.apply(0.0), 0.0);
        assert_eq!(Easing::CircOut.apply(1.0), 1.0);
        assert!(Easing::CircOut.apply(0.5) > 0.5);
    }

    #[test]
    fn tween_lands_exactly() {
        let mut t = Tween::new(2.0, 3.0, Duration::from_millis(400), Easing::CircOut);
        let mut v = 2.0;
        t.step(&mut v, Duration::from_millis(200));
        assert!(v > 2.5 && v < 3.0);
        t.step(&mut v, Duration::from_millis(250));
        assert!(t.is_finished());
        assert_eq!(v, 3.0);
    }
}
