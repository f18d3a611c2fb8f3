//! Rainbow color-cycling state machine.
//!
//! Provides [`ColorSequencer`] which walks the built-in color cycle one
//! externally clocked step at a time, exposing the in-between color after
//! every tick.

use crate::colors::approx_eq;
use crate::sequence::{CyclePosition, RAINBOW_CYCLE};
use crate::{ARRIVAL_EPSILON, STEP_FRACTION};
use palette::Srgb;

/// Cycles smoothly through the built-in rainbow color sequence.
///
/// The sequencer holds a live RGB color and a position in [`RAINBOW_CYCLE`].
/// Each call to [`step`](Self::step) nudges the color toward the current
/// target entry by a fixed fraction of the leg's channel delta; once the
/// color lands close enough to the target, the sequencer moves on to the
/// next leg. The caller owns the clock: drive `step` from a timer interrupt
/// or a frame loop at whatever rate suits the hardware, and the animation
/// speed follows.
#[derive(Debug, Clone)]
pub struct ColorSequencer {
    position: CyclePosition,
    rgb: Srgb,
}

impl ColorSequencer {
    /// Creates a new sequencer at the start of the cycle.
    ///
    /// The live color starts on the first cycle entry and the first step
    /// begins moving it toward the second.
    pub fn new() -> Self {
        let position = CyclePosition::START;

        Self {
            position,
            rgb: RAINBOW_CYCLE[position.from].to_srgb(),
        }
    }

    /// Advances the animation by one step.
    ///
    /// Adds [`STEP_FRACTION`](crate::STEP_FRACTION) of the current leg's
    /// channel delta to the live color, so a leg takes 16 steps from origin
    /// to target. When every channel is within
    /// [`ARRIVAL_EPSILON`](crate::ARRIVAL_EPSILON) of the target, the
    /// position advances and the next step starts moving toward the entry
    /// after that. Past the last entry the cycle wraps back to the first,
    /// so stepping never runs out of colors.
    pub fn step(&mut self) {
        let origin = RAINBOW_CYCLE[self.position.from].to_srgb();
        let target = RAINBOW_CYCLE[self.position.to].to_srgb();

        self.rgb.red += (target.red - origin.red) * STEP_FRACTION;
        self.rgb.green += (target.green - origin.green) * STEP_FRACTION;
        self.rgb.blue += (target.blue - origin.blue) * STEP_FRACTION;

        if approx_eq(self.rgb, target, ARRIVAL_EPSILON) {
            self.position.advance(RAINBOW_CYCLE.len());
        }
    }

    /// Returns the current color.
    ///
    /// Components are in the range 0.0-1.0, ready for conversion to PWM
    /// duty cycles or whatever format the LED hardware expects.
    pub fn color(&self) -> Srgb {
        self.rgb
    }

    /// Red component of the current color, in the range 0.0-1.0.
    pub fn red(&self) -> f32 {
        self.rgb.red
    }

    /// Green component of the current color, in the range 0.0-1.0.
    pub fn green(&self) -> f32 {
        self.rgb.green
    }

    /// Blue component of the current color, in the range 0.0-1.0.
    pub fn blue(&self) -> f32 {
        self.rgb.blue
    }

    /// Returns the current position within the color cycle.
    pub fn position(&self) -> CyclePosition {
        self.position
    }
}

impl Default for ColorSequencer {
    fn default() -> Self {
        Self::new()
    }
}
