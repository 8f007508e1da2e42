//! Input handling - touch, mouse, gestures
//!
//! This module provides:
//! - Gesture classification (tap, left/right/up/down swipes)
//! - Touch and mouse adapters feeding the same classifier
//! - Gesture dispatch to a `GestureHandler`

mod gestures;
mod handler;
mod mouse;
mod touch;

pub use gestures::*;
pub use handler::*;
pub use mouse::MouseTracker;
pub use touch::TouchTracker;
