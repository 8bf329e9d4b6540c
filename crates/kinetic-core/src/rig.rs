//! Per-tick frame pipeline: phase → pose → IK → geometry + HUD.

use crate::constants::{IK_EXTENSION_EPSILON, KNEE_BEND};
use crate::cycle::AnimState;
use crate::error::{KineticError, Result};
use crate::geometry::{leg_geometry, Joints, LegGeometry};
use crate::hud::{hud_frame, HudFrame};
use crate::ik::{solve_knee_with_epsilon, Bend, BoneLengths};
use crate::pose::pose_at;

/// Runtime rig settings. `Default` is the shipped leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigConfig {
    pub bones: BoneLengths,
    pub bend: Bend,
    pub ik_epsilon: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            bones: BoneLengths::default(),
            bend: Bend::from_sign(KNEE_BEND).unwrap_or_default(),
            ik_epsilon: IK_EXTENSION_EPSILON,
        }
    }
}

impl RigConfig {
    pub fn with_bones(thigh: f32, calf: f32) -> Result<Self> {
        let cfg = Self {
            bones: BoneLengths { thigh, calf },
            ..Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("thigh", self.bones.thigh), ("calf", self.bones.calf)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(KineticError::InvalidBoneLength { name, value });
            }
        }
        if !self.ik_epsilon.is_finite() || self.ik_epsilon < 0.0 {
            return Err(KineticError::InvalidEpsilon(self.ik_epsilon));
        }
        Ok(())
    }
}

/// Everything drawn for one phase value.
#[derive(Clone, Debug, PartialEq)]
pub struct RigFrame {
    pub phase: f32,
    pub state: AnimState,
    pub joints: Joints,
    pub geometry: LegGeometry,
    pub hud: HudFrame,
}

/// Solve the joints for `phase`. The knee is recomputed every time.
pub fn solve_joints(config: &RigConfig, phase: f32) -> Joints {
    let pose = pose_at(phase);
    let knee = solve_knee_with_epsilon(
        pose.hip,
        pose.ankle,
        config.bend,
        config.bones,
        config.ik_epsilon,
    );
    Joints {
        hip: pose.hip,
        knee,
        ankle: pose.ankle,
        toe: pose.toe,
    }
}

pub fn compute_frame(config: &RigConfig, phase: f32, state: AnimState) -> RigFrame {
    let joints = solve_joints(config, phase);
    RigFrame {
        phase,
        state,
        geometry: leg_geometry(&joints, phase),
        hud: hud_frame(state, phase, &joints),
        joints,
    }
}
