use crate::interp::Lerp;
use std::fmt;

/// RGBA colour with 0..255 colour channels and a 0..1 alpha, blended per
/// channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
            a,
        }
    }

    /// CSS `rgba(...)` string usable as a canvas fill/stroke style.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Lerp for Rgba {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: Lerp::lerp(self.r, other.r, t),
            g: Lerp::lerp(self.g, other.g, t),
            b: Lerp::lerp(self.b, other.b, t),
            a: Lerp::lerp(self.a, other.a, t),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }
}

// Palette
pub const NEON: Rgba = Rgba::rgb(0xcc, 0xff, 0x00);
pub const STRAIN_RED: Rgba = Rgba::rgb(0xff, 0x4d, 0x4d);
pub const MUSCLE_GRAY: Rgba = Rgba::rgb(0x88, 0x88, 0x88);
pub const TENDON_GRAY: Rgba = Rgba::rgb(0xaa, 0xaa, 0xaa);
pub const MUSCLE_FILL_REST: Rgba = Rgba::rgba(204, 255, 0, 0.2);
pub const MUSCLE_FILL_STRAIN: Rgba = Rgba::rgba(255, 77, 77, 0.4);
pub const BONE_WHITE: Rgba = Rgba::rgba(255, 255, 255, 0.3);
pub const BOX_STROKE_REST: Rgba = Rgba::rgba(255, 255, 255, 0.1);
pub const BOX_FILL: Rgba = Rgba::rgba(0, 0, 0, 0.9);
pub const FLOOR_GRAY: Rgba = Rgba::rgb(0x33, 0x33, 0x33);
pub const NODE_FILL: Rgba = Rgba::rgb(0, 0, 0);
