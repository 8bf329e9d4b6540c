//! The press-and-hold cycle: Idle → Loading → Explosive → Recovery → Idle.
//!
//! The machine owns the only mutable animation state (the phase scalar and
//! the discrete state) plus two cancelable tasks: the active phase animation
//! and the one-shot explosive hold timer. Time only moves through `tick`.

use crate::anim::{Easing, PhaseAnimation, Spring, SpringParams, Tween};
use crate::constants::*;
use crate::rig::{compute_frame, RigConfig, RigFrame};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimState {
    #[default]
    Idle = 0,
    Loading = 1,
    Explosive = 2,
    Recovery = 3,
}

/// Pointer input reduced to what the rig cares about. Pointer-leave while
/// pressed is reported as `PressEnd`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    PressStart,
    PressEnd,
}

impl Gesture {
    /// Map a DOM pointer event type. Leaving or losing the pointer mid-press
    /// releases the load.
    pub fn from_pointer_event(event_type: &str) -> Option<Self> {
        match event_type {
            "pointerdown" => Some(Gesture::PressStart),
            "pointerup" | "pointerleave" | "pointercancel" => Some(Gesture::PressEnd),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: AnimState,
    pub to: AnimState,
}

pub type Transitions = SmallVec<[Transition; 2]>;

pub const LOADING_SPRING: SpringParams = SpringParams::new(LOADING_STIFFNESS, LOADING_DAMPING);
pub const EXPLOSIVE_SPRING: SpringParams =
    SpringParams::new(EXPLOSIVE_STIFFNESS, EXPLOSIVE_DAMPING);

#[derive(Clone, Debug, Default)]
pub struct LegCycle {
    state: AnimState,
    phase: f32,
    animation: Option<PhaseAnimation>,
    hold_timer: Option<Duration>,
    torn_down: bool,
}

impl LegCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// True while a phase animation is still moving.
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| !a.is_done())
    }

    pub fn has_pending_timer(&self) -> bool {
        self.hold_timer.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn handle(&mut self, gesture: Gesture) -> Option<Transition> {
        match gesture {
            Gesture::PressStart => self.press_start(),
            Gesture::PressEnd => self.press_end(),
        }
    }

    /// Begin loading. Ignored unless idle or recovering.
    pub fn press_start(&mut self) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        match self.state {
            AnimState::Idle | AnimState::Recovery => Some(self.enter(AnimState::Loading)),
            AnimState::Loading | AnimState::Explosive => None,
        }
    }

    /// Release the load. Ignored unless loading.
    pub fn press_end(&mut self) -> Option<Transition> {
        if self.torn_down || self.state != AnimState::Loading {
            return None;
        }
        Some(self.enter(AnimState::Explosive))
    }

    /// Advance the active animation and the hold timer by `dt`.
    ///
    /// When the hold timer expires part-way through `dt`, the rest of the
    /// interval drives the recovery tween.
    pub fn tick(&mut self, dt: Duration) -> Transitions {
        let mut transitions = Transitions::new();
        if self.torn_down {
            return transitions;
        }
        let mut remaining = dt;
        loop {
            let step = match self.hold_timer {
                Some(left) => remaining.min(left),
                None => remaining,
            };
            if let Some(anim) = self.animation.as_mut() {
                anim.step(&mut self.phase, step);
            }
            remaining -= step;

            if let Some(left) = self.hold_timer.as_mut() {
                *left -= step;
                if left.is_zero() {
                    self.hold_timer = None;
                    transitions.push(self.enter(AnimState::Recovery));
                }
            }

            if self.state == AnimState::Recovery && self.animation.is_some_and(|a| a.is_done()) {
                transitions.push(self.enter(AnimState::Idle));
            }

            if remaining.is_zero() {
                break;
            }
        }
        transitions
    }

    /// Cancel the animation and the hold timer. After this no gesture or
    /// tick changes the machine.
    pub fn teardown(&mut self) {
        if self.hold_timer.take().is_some() {
            log::info!("[cycle] teardown cancelled pending explosive hold");
        }
        self.animation = None;
        self.torn_down = true;
    }

    /// Frame for the current phase and state.
    pub fn frame(&self, config: &RigConfig) -> RigFrame {
        compute_frame(config, self.phase, self.state)
    }

    fn enter(&mut self, to: AnimState) -> Transition {
        let from = self.state;
        let velocity = self.animation.map_or(0.0, |a| a.velocity());
        self.state = to;
        match to {
            AnimState::Idle => {
                self.phase = PHASE_IDLE;
                self.animation = None;
                self.hold_timer = None;
            }
            AnimState::Loading => {
                self.hold_timer = None;
                self.animation = Some(PhaseAnimation::Spring(Spring::new(
                    LOADING_SPRING,
                    PHASE_LOADED,
                    velocity,
                )));
            }
            AnimState::Explosive => {
                self.animation = Some(PhaseAnimation::Spring(Spring::new(
                    EXPLOSIVE_SPRING,
                    PHASE_FIRED,
                    velocity,
                )));
                // Unconditional: the pulse is held even if the spring has
                // not visually settled.
                self.hold_timer = Some(EXPLOSIVE_HOLD);
            }
            AnimState::Recovery => {
                self.hold_timer = None;
                self.animation = Some(PhaseAnimation::Tween(Tween::new(
                    self.phase,
                    PHASE_RECOVERED,
                    RECOVERY_DURATION,
                    Easing::CircOut,
                )));
            }
        }
        log::debug!(
            "[cycle] {:?} -> {:?} at phase {:.3}",
            from,
            to,
            self.phase
        );
        Transition { from, to }
    }
}
