//! Mouse adapter: a left-button press/release pair is treated like a touch

use smithay::backend::input::{ButtonState, MouseButton};
use smithay::utils::{Logical, Point};

use super::gestures::{classify, Gesture, GestureConfig, PointerSample};

#[derive(Debug, Default)]
pub struct MouseTracker {
    /// Unknown until the first motion event
    pos: Option<Point<f64, Logical>>,
    /// Set on left-button press, taken on release
    pressed: Option<PointerSample>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<Point<f64, Logical>> {
        self.pos
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn motion(&mut self, pos: Point<f64, Logical>) {
        self.pos = Some(pos);
    }

    /// Feed a button event. Returns a gesture on left-button release.
    pub fn button(
        &mut self,
        button: Option<MouseButton>,
        state: ButtonState,
        time_msec: u64,
        config: &GestureConfig,
    ) -> Option<Gesture> {
        if button != Some(MouseButton::Left) {
            return None;
        }

        match state {
            ButtonState::Pressed => {
                // A press before any motion has no known position
                self.pressed = self.pos.map(|pos| PointerSample::new(pos, time_msec));
                None
            }
            ButtonState::Released => {
                // Release without a press (e.g. the press happened outside the window)
                let start = self.pressed.take()?;
                let end = PointerSample::new(self.pos?, time_msec);
                Some(classify(&start, &end, config))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::touch::TouchTracker;

    fn drag(mouse: &mut MouseTracker, from: (f64, f64), to: (f64, f64), ms: u64, config: &GestureConfig) -> Option<Gesture> {
        mouse.motion(Point::from(from));
        mouse.button(Some(MouseButton::Left), ButtonState::Pressed, 0, config);
        mouse.motion(Point::from(to));
        mouse.button(Some(MouseButton::Left), ButtonState::Released, ms, config)
    }

    #[test]
    fn test_mouse_drag_left() {
        let config = GestureConfig::default();
        let mut mouse = MouseTracker::new();
        assert_eq!(drag(&mut mouse, (400.0, 200.0), (250.0, 210.0), 200, &config), Some(Gesture::SwipeLeft));
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn test_spurious_release_ignored() {
        let config = GestureConfig::default();
        let mut mouse = MouseTracker::new();
        mouse.motion(Point::from((10.0, 10.0)));
        let g = mouse.button(Some(MouseButton::Left), ButtonState::Released, 50, &config);
        assert_eq!(g, None);
    }

    #[test]
    fn test_release_consumes_press() {
        let config = GestureConfig::default();
        let mut mouse = MouseTracker::new();
        assert_eq!(drag(&mut mouse, (10.0, 10.0), (12.0, 10.0), 80, &config), Some(Gesture::Tap));
        let again = mouse.button(Some(MouseButton::Left), ButtonState::Released, 90, &config);
        assert_eq!(again, None);
    }

    #[test]
    fn test_press_before_motion_ignored() {
        let config = GestureConfig::default();
        let mut mouse = MouseTracker::new();
        mouse.button(Some(MouseButton::Left), ButtonState::Pressed, 0, &config);
        assert!(!mouse.is_pressed());
        mouse.motion(Point::from((400.0, 300.0)));
        let g = mouse.button(Some(MouseButton::Left), ButtonState::Released, 80, &config);
        assert_eq!(g, None);
    }

    #[test]
    fn test_other_buttons_ignored() {
        let config = GestureConfig::default();
        let mut mouse = MouseTracker::new();
        mouse.button(Some(MouseButton::Right), ButtonState::Pressed, 0, &config);
        mouse.motion(Point::from((300.0, 0.0)));
        assert_eq!(mouse.button(Some(MouseButton::Right), ButtonState::Released, 100, &config), None);
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn test_mouse_and_touch_agree() {
        let config = GestureConfig {
            enable_up_swipe: true,
            ..GestureConfig::default()
        };
        let cases = [
            ((100.0, 100.0), (250.0, 100.0), 150),
            ((100.0, 100.0), (103.0, 98.0), 120),
            ((100.0, 100.0), (100.0, 50.0), 200),
            ((100.0, 100.0), (100.0, 130.0), 200),
            ((0.0, 0.0), (99.0, 0.0), 400),
            ((0.0, 0.0), (80.0, 80.0), 400),
            ((50.0, 50.0), (51.0, 50.0), 900),
        ];

        for (from, to, ms) in cases {
            let mut mouse = MouseTracker::new();
            let by_mouse = drag(&mut mouse, from, to, ms, &config);

            let mut touch = TouchTracker::new();
            touch.touch_down(0, Point::from(from), 0);
            touch.touch_motion(0, Point::from(to));
            let by_touch = touch.touch_up(0, ms, &config);

            assert!(by_mouse.is_some());
            assert_eq!(by_mouse, by_touch, "{from:?} -> {to:?} in {ms}ms");
        }
    }
}
