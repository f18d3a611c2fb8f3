//! The fixed color cycle and position tracking within it.

use crate::code::ColorCode;

/// The built-in cycle traversed by the sequencer.
///
/// 24 color codes: the six fully saturated anchors (red, yellow, green,
/// cyan, blue, magenta) with three waypoints between each adjacent pair.
/// The order is circular; the leg from the last entry leads back to the
/// first, so the animation repeats forever. The array is plain const data
/// and never changes at runtime.
pub const RAINBOW_CYCLE: [ColorCode; 24] = [
    ColorCode::RED,
    ColorCode::SMOOTHER_1,
    ColorCode::TRANSITION_1,
    ColorCode::SMOOTHER_2,
    ColorCode::YELLOW,
    ColorCode::SMOOTHER_3,
    ColorCode::TRANSITION_2,
    ColorCode::SMOOTHER_4,
    ColorCode::GREEN,
    ColorCode::SMOOTHER_5,
    ColorCode::TRANSITION_3,
    ColorCode::SMOOTHER_6,
    ColorCode::CYAN,
    ColorCode::SMOOTHER_7,
    ColorCode::TRANSITION_4,
    ColorCode::SMOOTHER_8,
    ColorCode::BLUE,
    ColorCode::SMOOTHER_9,
    ColorCode::TRANSITION_5,
    ColorCode::SMOOTHER_10,
    ColorCode::MAGENTA,
    ColorCode::SMOOTHER_11,
    ColorCode::TRANSITION_6,
    ColorCode::SMOOTHER_12,
];

/// A position within the color cycle: the leg currently being traversed.
///
/// `to` is always the entry directly after `from`, modulo the cycle length.
/// Both indices stay strictly below [`RAINBOW_CYCLE`]'s length; on the
/// final leg `to` has already wrapped to 0 while `from` still points at the
/// last entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CyclePosition {
    /// Index of the leg's origin color.
    pub from: usize,
    /// Index of the leg's target color.
    pub to: usize,
}

impl CyclePosition {
    /// The first leg of the cycle.
    pub(crate) const START: Self = Self { from: 0, to: 1 };

    /// Moves to the next leg.
    ///
    /// Increments both indices, then wraps each one to 0 independently once
    /// it reaches `len`, keeping both inside `[0, len)`.
    pub(crate) fn advance(&mut self, len: usize) {
        self.from += 1;
        self.to += 1;
        if self.from >= len {
            self.from = 0;
        }
        if self.to >= len {
            self.to = 0;
        }
    }
}
