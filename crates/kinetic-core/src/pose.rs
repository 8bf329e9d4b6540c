//! Keyframe poses and the phase → joint interpolator.

use crate::constants::{PHASE_FIRED, PHASE_IDLE, PHASE_LOADED, PHASE_RECOVERED};
use crate::interp::piecewise;
use glam::Vec2;

/// Joints driven directly by keyframes. The knee is never keyed; it always
/// comes out of the IK solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joint {
    Hip,
    Ankle,
    Toe,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Hip, Joint::Ankle, Joint::Toe];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub hip: Vec2,
    pub ankle: Vec2,
    pub toe: Vec2,
}

impl Pose {
    pub const fn new(hip: [f32; 2], ankle: [f32; 2], toe: [f32; 2]) -> Self {
        Self {
            hip: Vec2::new(hip[0], hip[1]),
            ankle: Vec2::new(ankle[0], ankle[1]),
            toe: Vec2::new(toe[0], toe[1]),
        }
    }

    #[inline]
    pub fn joint(&self, joint: Joint) -> Vec2 {
        match joint {
            Joint::Hip => self.hip,
            Joint::Ankle => self.ankle,
            Joint::Toe => self.toe,
        }
    }
}

pub const IDLE_POSE: Pose = Pose::new([110.0, 70.0], [115.0, 270.0], [160.0, 320.0]);
pub const LOADING_POSE: Pose = Pose::new([70.0, 190.0], [80.0, 315.0], [160.0, 320.0]);
pub const EXPLOSIVE_POSE: Pose = Pose::new([180.0, 30.0], [160.0, 250.0], [160.0, 320.0]);
pub const RECOVERY_POSE: Pose = Pose::new([110.0, 70.0], [115.0, 270.0], [160.0, 320.0]);

pub const KEYFRAME_PHASES: [f32; 4] = [PHASE_IDLE, PHASE_LOADED, PHASE_FIRED, PHASE_RECOVERED];
pub const KEYFRAME_POSES: [Pose; 4] = [IDLE_POSE, LOADING_POSE, EXPLOSIVE_POSE, RECOVERY_POSE];

/// Position of `joint` at `phase`, blended linearly between the keyframes on
/// either side and clamped to the first/last pose outside [0, 3].
pub fn joint_at(phase: f32, joint: Joint) -> Vec2 {
    let keys = KEYFRAME_POSES.map(|p| p.joint(joint));
    piecewise(&KEYFRAME_PHASES, &keys, phase)
}

/// All keyed joints at `phase`.
pub fn pose_at(phase: f32) -> Pose {
    Pose {
        hip: joint_at(phase, Joint::Hip),
        ankle: joint_at(phase, Joint::Ankle),
        toe: joint_at(phase, Joint::Toe),
    }
}
