//! Phase monitor: state banner, progress bar, phase readouts and the leader
//! lines that tie labels to the live joints.

use crate::color::{Rgba, BOX_STROKE_REST, NEON, STRAIN_RED, TENDON_GRAY};
use crate::constants::*;
use crate::cycle::AnimState;
use crate::geometry::Joints;
use crate::interp::piecewise;
use glam::Vec2;

/// Colour family of the state banner. The frontend maps these to classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Strain,
    Accent,
    Calm,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Neutral => "tone-neutral",
            Tone::Strain => "tone-strain",
            Tone::Accent => "tone-accent",
            Tone::Calm => "tone-calm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateBanner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tone: Tone,
}

pub fn state_banner(state: AnimState) -> StateBanner {
    let (text, tone) = match state {
        AnimState::Idle => ("ISOMETRIC // 静止", Tone::Neutral),
        AnimState::Loading => ("ECCENTRIC // 离心蓄力", Tone::Strain),
        AnimState::Explosive => ("CONCENTRIC // 向心爆发", Tone::Accent),
        AnimState::Recovery => ("RECOVERY // 复位", Tone::Calm),
    };
    let (title, subtitle) = text.split_once(" // ").unwrap_or((text, ""));
    StateBanner {
        title,
        subtitle,
        tone,
    }
}

/// Fill of the tension bar in percent: fills while loading, holds while
/// firing, drains during recovery.
pub fn progress_percent(phase: f32) -> f32 {
    let w = if phase <= PHASE_LOADED {
        phase * PROGRESS_MAX
    } else if phase <= PHASE_FIRED {
        PROGRESS_MAX
    } else {
        PROGRESS_MAX - (phase - PHASE_FIRED) * PROGRESS_MAX
    };
    if w.is_nan() {
        return 0.0;
    }
    w.clamp(0.0, PROGRESS_MAX)
}

/// Discrete reading of the phase. Sampled from the phase rather than the
/// state, so it can lag or lead the banner near a breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseLabel {
    Idle,
    MaxLoad,
    Firing,
    Recovery,
    Reset,
}

impl PhaseLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseLabel::Idle => "IDLE",
            PhaseLabel::MaxLoad => "MAX LOAD",
            PhaseLabel::Firing => "FIRING",
            PhaseLabel::Recovery => "RECOVERY",
            PhaseLabel::Reset => "RESET",
        }
    }
}

pub fn phase_label(phase: f32) -> PhaseLabel {
    if phase < 0.9 {
        PhaseLabel::Idle
    } else if phase < 1.1 {
        PhaseLabel::MaxLoad
    } else if phase < 2.5 {
        PhaseLabel::Firing
    } else if phase < PHASE_RECOVERED {
        PhaseLabel::Recovery
    } else {
        PhaseLabel::Reset
    }
}

/// Numeric tension readout, e.g. `"42%"`.
pub fn tension_text(phase: f32) -> String {
    let pct = if phase <= PHASE_LOADED {
        (phase * 100.0).round()
    } else if phase <= PHASE_FIRED {
        100.0
    } else {
        ((PHASE_RECOVERED - phase) * 100.0).round().max(0.0)
    };
    format!("{}%", pct.max(0.0) as i32)
}

pub fn button_caption(state: AnimState) -> &'static str {
    match state {
        AnimState::Loading => "蓄力中...",
        _ => "长按测试",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

/// A label box with a dashed leader line back to a live anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Callout {
    pub label: &'static str,
    pub anchor: Vec2,
    pub target: Vec2,
    pub align: Align,
    pub box_x: f32,
    pub text_x: f32,
    pub color: Rgba,
    pub box_stroke: Rgba,
    /// Joint callouts draw a node at the anchor; muscle callouts do not.
    pub node: bool,
}

struct LabelSlot {
    label: &'static str,
    target: [f32; 2],
    align: Align,
}

const HIP: LabelSlot = LabelSlot {
    label: "髋部 HIP",
    target: [260.0, 60.0],
    align: Align::Start,
};
const KNEE: LabelSlot = LabelSlot {
    label: "膝盖 KNEE",
    target: [260.0, 160.0],
    align: Align::Start,
};
const ANKLE: LabelSlot = LabelSlot {
    label: "踝关节 ANKLE",
    target: [30.0, 280.0],
    align: Align::End,
};
const TOE: LabelSlot = LabelSlot {
    label: "脚趾 TOE",
    target: [220.0, 360.0],
    align: Align::Start,
};
const CALF: LabelSlot = LabelSlot {
    label: "腓肠肌 CALF",
    target: [30.0, 120.0],
    align: Align::End,
};
const ACHILLES: LabelSlot = LabelSlot {
    label: "跟腱 ACHILLES",
    target: [30.0, 200.0],
    align: Align::End,
};

const CALLOUT_STOPS: [f32; 3] = [PHASE_IDLE, PHASE_LOADED, PHASE_FIRED];

fn callout(slot: &LabelSlot, anchor: Vec2, phase: f32, highlight: bool, node: bool) -> Callout {
    let target = Vec2::new(slot.target[0], slot.target[1]);
    let rest = if highlight { TENDON_GRAY } else { NEON };
    let (box_x, text_x) = match slot.align {
        Align::Start => (target.x, target.x + LABEL_TEXT_INSET),
        Align::End => (target.x - LABEL_BOX_WIDTH, target.x - LABEL_TEXT_INSET),
    };
    Callout {
        label: slot.label,
        anchor,
        target,
        align: slot.align,
        box_x,
        text_x,
        color: piecewise(&CALLOUT_STOPS, &[rest, STRAIN_RED, NEON], phase),
        box_stroke: piecewise(
            &CALLOUT_STOPS,
            &[BOX_STROKE_REST, STRAIN_RED, BOX_STROKE_REST],
            phase,
        ),
        node,
    }
}

#[inline]
fn along(from: Vec2, to: Vec2, ratio: f32) -> Vec2 {
    from + (to - from) * ratio
}

/// Joint and muscle callouts for one frame, in draw order.
pub fn callouts(j: &Joints, phase: f32) -> [Callout; 6] {
    [
        callout(&HIP, j.hip, phase, false, true),
        callout(&KNEE, j.knee, phase, false, true),
        callout(&ANKLE, j.ankle, phase, false, true),
        callout(&TOE, j.toe, phase, false, true),
        callout(&CALF, along(j.knee, j.ankle, CALF_ANCHOR_RATIO), phase, false, false),
        callout(
            &ACHILLES,
            along(j.knee, j.ankle, ACHILLES_ANCHOR_RATIO),
            phase,
            true,
            false,
        ),
    ]
}

/// Everything the phase monitor shows for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HudFrame {
    pub banner: StateBanner,
    pub progress: f32,
    pub phase_label: PhaseLabel,
    pub tension: String,
    pub button: &'static str,
    pub callouts: [Callout; 6],
}

pub fn hud_frame(state: AnimState, phase: f32, joints: &Joints) -> HudFrame {
    HudFrame {
        banner: state_banner(state),
        progress: progress_percent(phase),
        phase_label: phase_label(phase),
        tension: tension_text(phase),
        button: button_caption(state),
        callouts: callouts(joints, phase),
    }
}
