//! Color comparison helpers.

use palette::Srgb;

/// Compares two colors component-wise within a tolerance.
///
/// Returns true iff the absolute difference of every component is at most
/// `epsilon`. This is a coarse equality for detecting that an interpolation
/// has reached its target despite accumulated floating-point drift, not a
/// geometric distance.
#[inline]
pub fn approx_eq(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    libm::fabsf(a.red - b.red) <= epsilon
        && libm::fabsf(a.green - b.green) <= epsilon
        && libm::fabsf(a.blue - b.blue) <= epsilon
}
