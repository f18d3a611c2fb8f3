#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorSequencer`**: Walks the rainbow cycle one externally clocked step at a time
//! - **`ColorCode`**: A 24-bit `0xRRGGBB` color with the named cycle constants
//! - **`RAINBOW_CYCLE`**: The fixed sequence of 24 color codes the sequencer traverses
//! - **`CyclePosition`**: The leg of the cycle currently being interpolated
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all color operations and
//! interpolation. Convert the channel values to your device's native format
//! (e.g., 8-bit integers, PWM duty cycles) when driving hardware.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod code;
pub mod colors;
pub mod sequence;
pub mod sequencer;

pub use code::ColorCode;
pub use colors::approx_eq;
pub use sequence::{CyclePosition, RAINBOW_CYCLE};
pub use sequencer::ColorSequencer;

/// Fraction of a leg's channel delta applied per step.
///
/// Every step moves each channel by this fraction of the distance between
/// the leg's origin and target, so a full leg completes in 16 steps.
pub const STEP_FRACTION: f32 = 1.0 / 16.0;

/// Per-channel tolerance for deciding that a leg's target has been reached.
///
/// Smaller than one step of either channel increment (the smallest is
/// 0.0125) and far larger than the floating-point drift a leg accumulates,
/// so every leg completes in exactly 16 steps.
pub const ARRIVAL_EPSILON: f32 = 0.01;
