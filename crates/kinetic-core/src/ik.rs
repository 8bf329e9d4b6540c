//! Two-bone analytic IK for the leg chain.
//!
//! The knee is the intersection of two circles: one around the hip with the
//! thigh length as radius, one around the ankle with the calf length. The
//! bend direction picks which of the two intersections is used.

use crate::constants::{CALF_LEN, IK_EXTENSION_EPSILON, IK_MIN_DISTANCE, THIGH_LEN};
use crate::error::KineticError;
use glam::Vec2;

/// Fixed bone lengths of the chain (hip→knee, knee→ankle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoneLengths {
    pub thigh: f32,
    pub calf: f32,
}

impl BoneLengths {
    #[inline]
    pub fn reach(&self) -> f32 {
        self.thigh + self.calf
    }

    /// Fraction of the hip→ankle line where the knee sits when the leg is
    /// fully extended.
    #[inline]
    pub fn extension_ratio(&self) -> f32 {
        self.thigh / self.reach()
    }
}

impl Default for BoneLengths {
    fn default() -> Self {
        Self {
            thigh: THIGH_LEN,
            calf: CALF_LEN,
        }
    }
}

/// Which side of the hip→ankle line the knee folds towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Bend {
    Positive,
    /// The leg rig always uses this one.
    #[default]
    Negative,
}

impl Bend {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Bend::Positive => 1.0,
            Bend::Negative => -1.0,
        }
    }

    pub fn from_sign(sign: f32) -> Option<Self> {
        if sign == 1.0 {
            Some(Bend::Positive)
        } else if sign == -1.0 {
            Some(Bend::Negative)
        } else {
            None
        }
    }
}

impl TryFrom<f32> for Bend {
    type Error = KineticError;

    fn try_from(sign: f32) -> Result<Self, Self::Error> {
        Bend::from_sign(sign).ok_or(KineticError::InvalidBend(sign))
    }
}

/// Solve for the knee given hip and ankle.
///
/// Unreachable targets (and coincident hip/ankle) fall back to a knee on the
/// straight hip→ankle line at `thigh / (thigh + calf)`. A target inside the
/// inner radius `|thigh - calf|` puts the knee a thigh length from the hip,
/// on the line. The result is always finite for finite input.
pub fn solve_knee(hip: Vec2, ankle: Vec2, bend: Bend, bones: BoneLengths) -> Vec2 {
    solve_knee_with_epsilon(hip, ankle, bend, bones, IK_EXTENSION_EPSILON)
}

pub fn solve_knee_with_epsilon(
    hip: Vec2,
    ankle: Vec2,
    bend: Bend,
    bones: BoneLengths,
    epsilon: f32,
) -> Vec2 {
    let delta = ankle - hip;
    let dist_sq = delta.length_squared();
    let dist = dist_sq.sqrt();

    if dist >= bones.reach() - epsilon || dist < IK_MIN_DISTANCE {
        return hip + delta * bones.extension_ratio();
    }

    let thigh_sq = bones.thigh * bones.thigh;
    // Closer than |thigh - calf| the circles do not meet; keep the knee on
    // the thigh's circle instead of sliding off along the line.
    let a = ((thigh_sq - bones.calf * bones.calf + dist_sq) / (2.0 * dist))
        .clamp(-bones.thigh, bones.thigh);
    let h = (thigh_sq - a * a).max(0.0).sqrt();

    let foot = hip + delta * (a / dist);
    let perp = Vec2::new(delta.y, -delta.x) / dist;
    foot + perp * (h * -bend.sign())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knee_keeps_both_bone_lengths() {
        let bones = BoneLengths::default();
        let hip = Vec2::new(110.0, 70.0);
        let ankle = Vec2::new(115.0, 270.0);
        let knee = solve_knee(hip, ankle, Bend::Negative, bones);
        assert!((knee.distance(hip) - bones.thigh).abs() < 1e-3);
        assert!((knee.distance(ankle) - bones.calf).abs() < 1e-3);
    }

    #[test]
    fn bends_pick_opposite_sides() {
        let bones = BoneLengths::default();
        let hip = Vec2::new(0.0, 0.0);
        let ankle = Vec2::new(0.0, 200.0);
        let neg = solve_knee(hip, ankle, Bend::Negative, bones);
        let pos = solve_knee(hip, ankle, Bend::Positive, bones);
        assert!((neg.x + pos.x).abs() < 1e-3);
        assert!((neg.y - pos.y).abs() < 1e-3);
        assert!(neg.x.abs() > 1.0);
    }

    #[test]
    fn bend_from_sign() {
        assert_eq!(Bend::from_sign(-1.0), Some(Bend::Negative));
        assert_eq!(Bend::from_sign(1.0), Some(Bend::Positive));
        assert_eq!(Bend::from_sign(0.5), None);
        assert_eq!(Bend::try_from(0.0), Err(KineticError::InvalidBend(0.0)));
    }
}
