//! Gesture ownership and dispatch
//!
//! `GestureArea` owns the gesture config and both input adapters. Backends
//! hand it raw smithay input events; finished interactions are classified and
//! routed to a `GestureHandler`.

use smithay::backend::input::{
    AbsolutePositionEvent, Event, InputBackend, InputEvent, PointerButtonEvent,
    PointerMotionAbsoluteEvent, TouchDownEvent, TouchEvent, TouchMotionEvent, TouchUpEvent,
};
use smithay::utils::{Logical, Size};
use tracing::{debug, trace, Span};

use super::gestures::{Gesture, GestureConfig};
use super::mouse::MouseTracker;
use super::touch::TouchTracker;

/// Receiver for classified gestures. Every method defaults to doing nothing,
/// so implementors only override the gestures they care about.
pub trait GestureHandler {
    fn on_tap(&mut self) {}
    fn on_swipe_left(&mut self) {}
    fn on_swipe_right(&mut self) {}
    fn on_swipe_up(&mut self) {}
    fn on_swipe_down(&mut self) {}
}

pub struct GestureArea {
    config: GestureConfig,
    touch: TouchTracker,
    mouse: MouseTracker,
    /// Logging context for everything this area reports
    span: Span,
}

impl GestureArea {
    pub fn new(config: GestureConfig, span: Span) -> Self {
        debug!(parent: &span, ?config, "Gesture area created");
        Self {
            config,
            touch: TouchTracker::new(),
            mouse: MouseTracker::new(),
            span,
        }
    }

    /// Feed one input event. Returns the gesture if this event completed an
    /// interaction (touch up or left-button release).
    pub fn process_input_event<B: InputBackend>(
        &mut self,
        event: InputEvent<B>,
        output_size: Size<i32, Logical>,
    ) -> Option<Gesture> {
        let span = self.span.clone();
        let _guard = span.enter();

        match event {
            InputEvent::TouchDown { event, .. } => self.touch_down::<B, _>(&event, output_size),
            InputEvent::TouchMotion { event, .. } => self.touch_motion::<B, _>(&event, output_size),
            InputEvent::TouchUp { event, .. } => self.touch_up::<B, _>(&event),
            InputEvent::TouchCancel { .. } => {
                trace!("Touch cancelled");
                self.touch.touch_cancel();
                None
            }
            InputEvent::PointerMotionAbsolute { event, .. } => {
                self.pointer_motion::<B, _>(&event, output_size)
            }
            InputEvent::PointerButton { event, .. } => self.pointer_button::<B, _>(&event),
            _ => None,
        }
    }

    fn touch_down<B: InputBackend, E: TouchDownEvent<B>>(
        &mut self,
        event: &E,
        output_size: Size<i32, Logical>,
    ) -> Option<Gesture> {
        let slot: i32 = event.slot().into();
        let pos = event.position_transformed(output_size);
        if self.touch.is_tracking() {
            trace!(slot, "Touch down while another touch is tracked");
        } else {
            trace!(slot, x = pos.x, y = pos.y, "Touch down");
        }
        self.touch.touch_down(slot, pos, u64::from(event.time_msec()));
        None
    }

    fn touch_motion<B: InputBackend, E: TouchMotionEvent<B>>(
        &mut self,
        event: &E,
        output_size: Size<i32, Logical>,
    ) -> Option<Gesture> {
        let slot: i32 = event.slot().into();
        self.touch.touch_motion(slot, event.position_transformed(output_size));
        None
    }

    fn touch_up<B: InputBackend, E: TouchUpEvent<B>>(&mut self, event: &E) -> Option<Gesture> {
        let slot: i32 = event.slot().into();
        let gesture = self.touch.touch_up(slot, u64::from(event.time_msec()), &self.config);
        if let Some(gesture) = gesture {
            debug!(slot, ?gesture, "Touch gesture");
        }
        gesture
    }

    fn pointer_motion<B: InputBackend, E: PointerMotionAbsoluteEvent<B>>(
        &mut self,
        event: &E,
        output_size: Size<i32, Logical>,
    ) -> Option<Gesture> {
        self.mouse.motion(event.position_transformed(output_size));
        None
    }

    fn pointer_button<B: InputBackend, E: PointerButtonEvent<B>>(&mut self, event: &E) -> Option<Gesture> {
        let gesture = self.mouse.button(
            event.button(),
            event.state(),
            u64::from(event.time_msec()),
            &self.config,
        );
        if let Some(gesture) = gesture {
            debug!(pos = ?self.mouse.position(), ?gesture, "Mouse gesture");
        }
        gesture
    }

    /// Invoke the handler method matching `gesture`, exactly once.
    pub fn dispatch<H: GestureHandler + ?Sized>(&self, gesture: Gesture, handler: &mut H) {
        let _guard = self.span.enter();

        match gesture {
            Gesture::Tap => handler.on_tap(),
            Gesture::SwipeLeft => handler.on_swipe_left(),
            Gesture::SwipeRight => handler.on_swipe_right(),
            Gesture::SwipeUp => handler.on_swipe_up(),
            Gesture::SwipeDown => handler.on_swipe_down(),
            Gesture::None => {
                trace!("No gesture matched");
                return;
            }
        }
        debug!(?gesture, "Gesture dispatched");
    }

    /// `process_input_event` followed by `dispatch`
    pub fn handle_input_event<B: InputBackend, H: GestureHandler + ?Sized>(
        &mut self,
        event: InputEvent<B>,
        output_size: Size<i32, Logical>,
        handler: &mut H,
    ) -> Option<Gesture> {
        let gesture = self.process_input_event(event, output_size)?;
        self.dispatch(gesture, handler);
        Some(gesture)
    }
}
