//! Piecewise-linear interpolation over sorted breakpoints.
//!
//! One helper drives the keyframe poses, the palette and the stroke widths:
//! callers pair an ascending list of phase stops with one value per stop.

use glam::Vec2;

/// Values that can be linearly blended.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Sample `values` at `x` given ascending `stops`.
///
/// Outside the stop range the nearest endpoint is returned; there is no
/// extrapolation. Exactly on a stop the stop's own value comes back
/// unchanged. `stops` and `values` must be the same non-zero length.
pub fn piecewise<T: Lerp>(stops: &[f32], values: &[T], x: f32) -> T {
    debug_assert_eq!(stops.len(), values.len());
    debug_assert!(!stops.is_empty());
    let last = stops.len() - 1;
    if x.is_nan() || x <= stops[0] {
        return values[0];
    }
    if x >= stops[last] {
        return values[last];
    }
    for i in 0..last {
        let (a, b) = (stops[i], stops[i + 1]);
        if x == a {
            return values[i];
        }
        if x < b {
            let span = b - a;
            let t = if span > 0.0 { (x - a) / span } else { 0.0 };
            return values[i].lerp(values[i + 1], t);
        }
    }
    values[last]
}
