//! Shared test infrastructure for color-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_sequencer::{ColorSequencer, Srgb};

// ============================================================================
// Color Comparison
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

// ============================================================================
// Step Drivers
// ============================================================================

/// Advance the sequencer by a fixed number of steps
pub fn step_n(sequencer: &mut ColorSequencer, n: usize) {
    for _ in 0..n {
        sequencer.step();
    }
}

/// Step until the position changes, returning the number of steps taken
///
/// Panics if the current leg has not completed after 1000 steps.
pub fn steps_to_next_leg(sequencer: &mut ColorSequencer) -> usize {
    let start = sequencer.position();
    for steps in 1..=1000 {
        sequencer.step();
        if sequencer.position() != start {
            return steps;
        }
    }
    panic!("position did not advance after 1000 steps");
}
