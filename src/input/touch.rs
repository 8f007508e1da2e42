//! Touch adapter: turns a touch-down/touch-up pair into a gesture
//!
//! Only the first finger is followed. Touch-up events carry no position, so
//! the last position reported by motion events is used as the end sample.

use smithay::utils::{Logical, Point};

use super::gestures::{classify, Gesture, GestureConfig, PointerSample};

#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    slot: i32,
    start: PointerSample,
    current_pos: Point<f64, Logical>,
}

#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Option<ActiveTouch>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Start a new interaction. Any touch-down restarts tracking; if another
    /// finger goes down while the first is held, the first finger keeps being
    /// followed but its start sample is reset to where it is now.
    pub fn touch_down(&mut self, slot: i32, pos: Point<f64, Logical>, time_msec: u64) {
        if let Some(active) = self.active.as_mut().filter(|a| a.slot != slot) {
            active.start = PointerSample::new(active.current_pos, time_msec);
            return;
        }
        self.active = Some(ActiveTouch {
            slot,
            start: PointerSample::new(pos, time_msec),
            current_pos: pos,
        });
    }

    pub fn touch_motion(&mut self, slot: i32, pos: Point<f64, Logical>) {
        if let Some(active) = self.active.as_mut().filter(|a| a.slot == slot) {
            active.current_pos = pos;
        }
    }

    /// Finish the interaction for `slot`; `None` if that slot was not tracked.
    pub fn touch_up(&mut self, slot: i32, time_msec: u64, config: &GestureConfig) -> Option<Gesture> {
        let active = self.active.filter(|a| a.slot == slot)?;
        self.active = None;

        let end = PointerSample::new(active.current_pos, time_msec);
        Some(classify(&active.start, &end, config))
    }

    pub fn touch_cancel(&mut self) {
        self.active = None;
    }
}
