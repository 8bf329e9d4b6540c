//! Platform-free core of Kinetic Lab: the two-bone leg rig, its
//! press-and-hold phase cycle and the per-frame projection into geometry and
//! HUD values. The web frontend only wires input and draws what comes out of
//! [`compute_frame`].

pub mod anim;
pub mod catalog;
pub mod color;
pub mod constants;
pub mod cycle;
pub mod error;
pub mod geometry;
pub mod hud;
pub mod ik;
pub mod interp;
pub mod pose;
pub mod rig;

pub use constants::*;
pub use cycle::{AnimState, Gesture, LegCycle, Transition};
pub use error::{KineticError, Result};
pub use geometry::{Joints, LegGeometry, Path, PathCmd};
pub use hud::{HudFrame, PhaseLabel};
pub use ik::{solve_knee, Bend, BoneLengths};
pub use pose::{joint_at, pose_at, Joint, Pose};
pub use rig::{compute_frame, RigConfig, RigFrame};
