//! Integration tests for the rainbow cycle data

mod common;
use common::*;

use std::collections::HashSet;

use color_sequencer::{ColorCode, RAINBOW_CYCLE, Srgb};

#[test]
fn cycle_entries_are_all_distinct() {
    let unique: HashSet<u32> = RAINBOW_CYCLE.iter().map(|&code| u32::from(code)).collect();
    assert_eq!(unique.len(), RAINBOW_CYCLE.len());
}

#[test]
fn every_entry_is_fully_saturated() {
    // Each cycle color keeps one channel at full scale and one at zero, so
    // the animation never dims or washes out mid-leg.
    for (idx, entry) in RAINBOW_CYCLE.iter().enumerate() {
        let channels = [entry.red(), entry.green(), entry.blue()];
        assert!(channels.contains(&0xFF), "entry {} has no full channel", idx);
        assert!(channels.contains(&0x00), "entry {} has no zero channel", idx);
    }
}

#[test]
fn anchor_entries_decode_to_the_primary_colors() {
    assert!(colors_equal(RAINBOW_CYCLE[0].to_srgb(), Srgb::new(1.0, 0.0, 0.0)));
    assert!(colors_equal(RAINBOW_CYCLE[4].to_srgb(), Srgb::new(1.0, 1.0, 0.0)));
    assert!(colors_equal(RAINBOW_CYCLE[8].to_srgb(), Srgb::new(0.0, 1.0, 0.0)));
    assert!(colors_equal(RAINBOW_CYCLE[12].to_srgb(), Srgb::new(0.0, 1.0, 1.0)));
    assert!(colors_equal(RAINBOW_CYCLE[16].to_srgb(), Srgb::new(0.0, 0.0, 1.0)));
    assert!(colors_equal(RAINBOW_CYCLE[20].to_srgb(), Srgb::new(1.0, 0.0, 1.0)));
}

#[test]
fn waypoints_fill_the_gaps_between_anchors() {
    let anchors = [
        ColorCode::RED,
        ColorCode::YELLOW,
        ColorCode::GREEN,
        ColorCode::CYAN,
        ColorCode::BLUE,
        ColorCode::MAGENTA,
    ];

    for (idx, entry) in RAINBOW_CYCLE.iter().enumerate() {
        if idx % 4 == 0 {
            assert_eq!(*entry, anchors[idx / 4]);
        } else {
            assert!(!anchors.contains(entry), "entry {} is a misplaced anchor", idx);
        }
    }
}
