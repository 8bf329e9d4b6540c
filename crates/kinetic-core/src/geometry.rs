//! Visual paths derived from the solved joints and the phase.
//!
//! Everything here is a pure function of its inputs; nothing is cached.

use crate::color::{
    Rgba, MUSCLE_FILL_REST, MUSCLE_FILL_STRAIN, MUSCLE_GRAY, NEON, STRAIN_RED, TENDON_GRAY,
};
use crate::constants::*;
use crate::interp::piecewise;
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt::Write;

/// One drawing command in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// A path short enough to live inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub cmds: SmallVec<[PathCmd; 4]>,
}

impl Path {
    pub fn move_to(mut self, p: Vec2) -> Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Vec2, to: Vec2) -> Self {
        self.cmds.push(PathCmd::QuadTo { ctrl, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// SVG `d` attribute for this path.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.cmds {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match cmd {
                PathCmd::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathCmd::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathCmd::QuadTo { ctrl, to } => {
                    write!(d, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCmd::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Hip, knee (solved), ankle and toe for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joints {
    pub hip: Vec2,
    pub knee: Vec2,
    pub ankle: Vec2,
    pub toe: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegGeometry {
    pub bone: Path,
    pub calf: Path,
    pub tendon: Path,
    pub muscle_fill: Rgba,
    pub muscle_stroke: Stroke,
    pub tendon_stroke: Stroke,
}

const STOPS: [f32; 4] = [PHASE_IDLE, PHASE_LOADED, PHASE_FIRED, PHASE_RECOVERED];

/// Calf belly bulge: thins under load, thickens back on release.
pub fn calf_bulge(phase: f32) -> f32 {
    let span = CALF_BULGE_REST - CALF_BULGE_LOADED;
    if phase <= PHASE_LOADED {
        CALF_BULGE_REST - phase * span
    } else if phase <= PHASE_FIRED {
        CALF_BULGE_LOADED + (phase - PHASE_LOADED) * span
    } else {
        CALF_BULGE_REST
    }
}

/// Tendon curvature: stretches under load, relaxes on release.
pub fn tendon_offset(phase: f32) -> f32 {
    let span = TENDON_OFFSET_LOADED - TENDON_OFFSET_REST;
    if phase <= PHASE_LOADED {
        TENDON_OFFSET_REST + phase * span
    } else if phase <= PHASE_FIRED {
        TENDON_OFFSET_LOADED - (phase - PHASE_LOADED) * span
    } else {
        TENDON_OFFSET_REST
    }
}

/// Point where the calf belly hands over to the achilles tendon.
#[inline]
pub fn muscle_junction(knee: Vec2, ankle: Vec2) -> Vec2 {
    knee + (ankle - knee) * MUSCLE_JUNCTION_RATIO
}

pub fn bone_path(j: &Joints) -> Path {
    Path::default()
        .move_to(j.hip)
        .line_to(j.knee)
        .line_to(j.ankle)
        .line_to(j.toe)
}

pub fn calf_path(knee: Vec2, ankle: Vec2, phase: f32) -> Path {
    let junction = muscle_junction(knee, ankle);
    let mid = (knee + junction) / 2.0;
    let ctrl = Vec2::new(mid.x - calf_bulge(phase), mid.y);
    Path::default()
        .move_to(knee)
        .quad_to(ctrl, junction)
        .line_to(junction)
        .close()
}

pub fn tendon_path(knee: Vec2, ankle: Vec2, phase: f32) -> Path {
    let junction = muscle_junction(knee, ankle);
    let mid = (junction + ankle) / 2.0;
    let ctrl = Vec2::new(mid.x - tendon_offset(phase), mid.y);
    Path::default().move_to(junction).quad_to(ctrl, ankle)
}

pub fn muscle_fill(phase: f32) -> Rgba {
    piecewise(
        &STOPS,
        &[MUSCLE_FILL_REST, MUSCLE_FILL_STRAIN, MUSCLE_FILL_REST, MUSCLE_FILL_REST],
        phase,
    )
}

pub fn muscle_stroke(phase: f32) -> Rgba {
    piecewise(
        &STOPS,
        &[MUSCLE_GRAY, STRAIN_RED, MUSCLE_GRAY, MUSCLE_GRAY],
        phase,
    )
}

pub fn tendon_color(phase: f32) -> Rgba {
    piecewise(&STOPS, &[TENDON_GRAY, STRAIN_RED, NEON, TENDON_GRAY], phase)
}

pub fn tendon_width(phase: f32) -> f32 {
    piecewise(&STOPS, &[4.0, 7.0, 4.0, 4.0], phase)
}

pub fn leg_geometry(joints: &Joints, phase: f32) -> LegGeometry {
    LegGeometry {
        bone: bone_path(joints),
        calf: calf_path(joints.knee, joints.ankle, phase),
        tendon: tendon_path(joints.knee, joints.ankle, phase),
        muscle_fill: muscle_fill(phase),
        muscle_stroke: Stroke {
            color: muscle_stroke(phase),
            width: MUSCLE_STROKE_WIDTH,
        },
        tendon_stroke: Stroke {
            color: tendon_color(phase),
            width: tendon_width(phase),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_output_matches_path_syntax() {
        let p = Path::default()
            .move_to(Vec2::new(1.0, 2.0))
            .quad_to(Vec2::new(3.0, 4.0), Vec2::new(5.0, 6.0))
            .line_to(Vec2::new(5.0, 6.0))
            .close();
        assert_eq!(p.to_svg(), "M 1 2 Q 3 4 5 6 L 5 6 Z");
    }

    #[test]
    fn junction_sits_at_ratio() {
        let j = muscle_junction(Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0));
        assert!((j.y - 55.0).abs() < 1e-4);
    }
}
