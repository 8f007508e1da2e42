//! Gesture classification for single-pointer interactions
//!
//! A gesture is decided once, when the pointer is lifted, from two samples:
//! where/when the interaction started and where/when it ended.
//!
//! Supports:
//! - Tap (small movement, short press)
//! - Horizontal swipes (left, right)
//! - Vertical swipes (up, down), only when enabled in the config

use smithay::utils::{Logical, Point};

/// Recognized gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    /// Nothing matched (too short, wrong axis, or vertical swipes disabled)
    None,
}

/// Position and timestamp captured at the start or end of an interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point<f64, Logical>,
    pub time_msec: u64,
}

impl PointerSample {
    pub fn new(position: Point<f64, Logical>, time_msec: u64) -> Self {
        Self { position, time_msec }
    }
}

/// Configuration for gesture recognition
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Minimum horizontal travel for a left/right swipe (inclusive)
    pub min_swipe_distance: f64,

    /// Minimum vertical travel for an up/down swipe (inclusive)
    pub min_up_swipe_distance: f64,

    /// A tap must move strictly less than this many pixels
    pub max_tap_movement: f64,

    /// A tap must be released strictly before this many ms
    pub max_tap_duration_ms: u64,

    /// Vertical swipes are reported only when this is set
    pub enable_up_swipe: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 100.0,
            min_up_swipe_distance: 40.0,
            max_tap_movement: 10.0,
            max_tap_duration_ms: 300,
            enable_up_swipe: false,
        }
    }
}

/// Classify a completed interaction.
///
/// Tap is checked first and wins over any swipe. Otherwise the dominant axis
/// decides; a tie (`|dx| == |dy|`) goes to the vertical branch.
pub fn classify(start: &PointerSample, end: &PointerSample, config: &GestureConfig) -> Gesture {
    let dx = end.position.x - start.position.x;
    let dy = end.position.y - start.position.y;
    let duration = end.time_msec.saturating_sub(start.time_msec);
    let distance = (dx * dx + dy * dy).sqrt();

    if distance < config.max_tap_movement && duration < config.max_tap_duration_ms {
        return Gesture::Tap;
    }

    let abs_x = dx.abs();
    let abs_y = dy.abs();

    if abs_x > abs_y {
        if abs_x < config.min_swipe_distance {
            return Gesture::None;
        }
        if dx > 0.0 {
            Gesture::SwipeRight
        } else {
            Gesture::SwipeLeft
        }
    } else {
        if !config.enable_up_swipe || abs_y < config.min_up_swipe_distance {
            return Gesture::None;
        }
        if dy < 0.0 {
            Gesture::SwipeUp
        } else if dy > 0.0 {
            Gesture::SwipeDown
        } else {
            Gesture::None
        }
    }
}
