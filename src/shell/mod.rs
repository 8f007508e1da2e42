//! Lesson shell - menu, flash cards and settings
//!
//! The shell is the consumer of classified gestures:
//! - Menu: swipe left/right picks a lesson, tap opens it
//! - Lesson: swipe right/left is next/previous card, tap speaks the card,
//!   swipe up opens settings, swipe down returns to the menu
//! - Settings: swipe left/right changes speech rate, swipe up toggles the
//!   English accent (US/GB), tap or swipe down closes

pub mod lesson;

use tracing::{debug, info};

use crate::input::GestureHandler;
use lesson::Lesson;

pub const MIN_SPEECH_RATE: f32 = 0.5;
pub const MAX_SPEECH_RATE: f32 = 2.0;
const SPEECH_RATE_STEP: f32 = 0.1;
const DEFAULT_SPEECH_RATE: f32 = 0.9;

/// English voice used when speaking cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Us,
    Gb,
}

impl Accent {
    pub fn toggled(self) -> Self {
        match self {
            Accent::Us => Accent::Gb,
            Accent::Gb => Accent::Us,
        }
    }

    /// BCP 47 tag for the speech engine
    pub fn language_tag(self) -> &'static str {
        match self {
            Accent::Us => "en-US",
            Accent::Gb => "en-GB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView {
    Menu,
    Lesson,
    Settings,
}

/// Side effects requested by the shell, drained by the backend
#[derive(Debug, Clone, PartialEq)]
pub enum LessonAction {
    /// Speak a card aloud at the given rate and accent
    Speak { text: String, rate: f32, accent: Accent },
    /// A different card is now showing
    ShowCard { lesson: usize, index: usize },
    SelectLesson(usize),
    OpenSettings,
    CloseSettings,
    SpeechRateChanged(f32),
    AccentChanged(Accent),
    ReturnToMenu,
}

pub struct LessonShell {
    pub view: ShellView,
    lessons: Vec<Lesson>,
    selected: usize,
    speech_rate: f32,
    accent: Accent,
    pending: Vec<LessonAction>,
}

impl LessonShell {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        info!("Shell loaded {} lessons", lessons.len());
        Self {
            view: ShellView::Menu,
            lessons,
            selected: 0,
            speech_rate: DEFAULT_SPEECH_RATE,
            accent: Accent::default(),
            pending: Vec::new(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.lessons.get(self.selected)
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn speech_rate(&self) -> f32 {
        self.speech_rate
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Take all actions produced since the last call
    pub fn take_actions(&mut self) -> Vec<LessonAction> {
        std::mem::take(&mut self.pending)
    }

    pub fn set_view(&mut self, view: ShellView) {
        if self.view != view {
            debug!("Shell view: {:?} -> {:?}", self.view, view);
            self.view = view;
        }
    }

    /// Background colour for the current view
    pub fn background_color(&self) -> [f32; 4] {
        match self.view {
            ShellView::Menu => [0.99, 0.93, 0.75, 1.0],     // Warm yellow
            ShellView::Lesson => [0.85, 0.94, 0.99, 1.0],   // Sky blue
            ShellView::Settings => [0.92, 0.90, 0.97, 1.0], // Lavender
        }
    }

    fn select_lesson(&mut self, index: usize) {
        if index < self.lessons.len() && index != self.selected {
            self.selected = index;
            info!("Selected lesson {}: {}", index, self.lessons[index].title);
            self.pending.push(LessonAction::SelectLesson(index));
        }
    }

    fn show_current_card(&mut self) {
        if let Some(lesson) = self.lessons.get(self.selected) {
            self.pending.push(LessonAction::ShowCard {
                lesson: self.selected,
                index: lesson.position(),
            });
        }
    }

    fn change_speech_rate(&mut self, delta: f32) {
        // Round to one decimal so repeated steps don't drift
        let rate = ((self.speech_rate + delta) * 10.0).round() / 10.0;
        let rate = rate.clamp(MIN_SPEECH_RATE, MAX_SPEECH_RATE);
        if rate != self.speech_rate {
            self.speech_rate = rate;
            info!("Speech rate set to {:.1}", rate);
            self.pending.push(LessonAction::SpeechRateChanged(rate));
        }
    }
}

impl GestureHandler for LessonShell {
    fn on_tap(&mut self) {
        match self.view {
            ShellView::Menu => {
                if self.lesson().is_some() {
                    self.set_view(ShellView::Lesson);
                    self.show_current_card();
                }
            }
            ShellView::Lesson => {
                if let Some(card) = self.lesson().and_then(|l| l.current()) {
                    let text = card.spoken_text().to_string();
                    self.pending.push(LessonAction::Speak {
                        text,
                        rate: self.speech_rate,
                        accent: self.accent,
                    });
                }
            }
            ShellView::Settings => {
                self.set_view(ShellView::Lesson);
                self.pending.push(LessonAction::CloseSettings);
            }
        }
    }

    fn on_swipe_left(&mut self) {
        match self.view {
            ShellView::Menu => self.select_lesson(self.selected.saturating_sub(1)),
            ShellView::Lesson => {
                let moved = self.lessons.get_mut(self.selected).is_some_and(Lesson::retreat);
                if moved {
                    self.show_current_card();
                }
            }
            ShellView::Settings => self.change_speech_rate(-SPEECH_RATE_STEP),
        }
    }

    fn on_swipe_right(&mut self) {
        match self.view {
            ShellView::Menu => self.select_lesson(self.selected + 1),
            ShellView::Lesson => {
                let moved = self.lessons.get_mut(self.selected).is_some_and(Lesson::advance);
                if moved {
                    self.show_current_card();
                }
            }
            ShellView::Settings => self.change_speech_rate(SPEECH_RATE_STEP),
        }
    }

    fn on_swipe_up(&mut self) {
        match self.view {
            ShellView::Menu => {}
            ShellView::Lesson => {
                self.set_view(ShellView::Settings);
                self.pending.push(LessonAction::OpenSettings);
            }
            ShellView::Settings => {
                self.accent = self.accent.toggled();
                info!("English accent set to {}", self.accent.language_tag());
                self.pending.push(LessonAction::AccentChanged(self.accent));
            }
        }
    }

    fn on_swipe_down(&mut self) {
        match self.view {
            ShellView::Menu => {}
            ShellView::Lesson => {
                self.set_view(ShellView::Menu);
                self.pending.push(LessonAction::ReturnToMenu);
            }
            ShellView::Settings => {
                self.set_view(ShellView::Lesson);
                self.pending.push(LessonAction::CloseSettings);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Gesture, GestureArea, GestureConfig};
    use super::lesson::{builtin_lessons, Card};
    use tracing::Span;

    fn shell() -> LessonShell {
        LessonShell::new(vec![
            Lesson::new("one", vec![Card::new("a", "A", None), Card::new("b", "B", None)]),
            Lesson::new("two", vec![Card::new("c", "C", None)]),
        ])
    }

    #[test]
    fn test_tap_opens_lesson_and_speaks() {
        let mut shell = shell();
        shell.on_tap();
        assert_eq!(shell.view, ShellView::Lesson);
        assert_eq!(shell.take_actions(), vec![LessonAction::ShowCard { lesson: 0, index: 0 }]);

        shell.on_tap();
        assert_eq!(
            shell.take_actions(),
            vec![LessonAction::Speak {
                text: "a".to_string(),
                rate: DEFAULT_SPEECH_RATE,
                accent: Accent::Us,
            }]
        );
    }

    #[test]
    fn test_card_navigation_clamps() {
        let mut shell = shell();
        shell.on_tap();
        shell.take_actions();

        shell.on_swipe_left();
        assert!(shell.take_actions().is_empty());

        shell.on_swipe_right();
        assert_eq!(shell.take_actions(), vec![LessonAction::ShowCard { lesson: 0, index: 1 }]);

        shell.on_swipe_right();
        assert!(shell.take_actions().is_empty());

        shell.on_swipe_left();
        assert_eq!(shell.take_actions(), vec![LessonAction::ShowCard { lesson: 0, index: 0 }]);
    }

    #[test]
    fn test_menu_selects_lessons() {
        let mut shell = shell();
        shell.on_swipe_right();
        assert_eq!(shell.selected(), 1);
        shell.on_swipe_right();
        assert_eq!(shell.selected(), 1);
        shell.on_swipe_left();
        shell.on_swipe_left();
        assert_eq!(shell.selected(), 0);
        assert_eq!(
            shell.take_actions(),
            vec![LessonAction::SelectLesson(1), LessonAction::SelectLesson(0)]
        );
    }

    #[test]
    fn test_lesson_keeps_position_after_menu() {
        let mut shell = shell();
        shell.on_tap();
        shell.on_swipe_right();
        shell.on_swipe_down();
        assert_eq!(shell.view, ShellView::Menu);
        shell.take_actions();

        shell.on_tap();
        assert_eq!(shell.take_actions(), vec![LessonAction::ShowCard { lesson: 0, index: 1 }]);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut shell = shell();
        shell.on_tap();
        shell.on_swipe_up();
        assert_eq!(shell.view, ShellView::Settings);

        shell.on_swipe_right();
        assert!((shell.speech_rate() - 1.0).abs() < 1e-6);

        shell.on_swipe_down();
        assert_eq!(shell.view, ShellView::Lesson);

        let actions = shell.take_actions();
        assert!(actions.contains(&LessonAction::OpenSettings));
        assert!(actions.contains(&LessonAction::CloseSettings));
    }

    #[test]
    fn test_speech_rate_bounds() {
        let mut shell = shell();
        shell.set_view(ShellView::Settings);
        for _ in 0..30 {
            shell.on_swipe_right();
        }
        assert!((shell.speech_rate() - MAX_SPEECH_RATE).abs() < 1e-6);
        for _ in 0..30 {
            shell.on_swipe_left();
        }
        assert!((shell.speech_rate() - MIN_SPEECH_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_settings_swipe_up_toggles_accent() {
        let mut shell = shell();
        shell.on_tap();
        shell.on_swipe_up();
        shell.take_actions();

        shell.on_swipe_up();
        assert_eq!(shell.view, ShellView::Settings);
        assert_eq!(shell.accent(), Accent::Gb);
        assert_eq!(shell.take_actions(), vec![LessonAction::AccentChanged(Accent::Gb)]);

        shell.on_tap();
        shell.take_actions();
        shell.on_tap();
        assert_eq!(
            shell.take_actions(),
            vec![LessonAction::Speak {
                text: "a".to_string(),
                rate: DEFAULT_SPEECH_RATE,
                accent: Accent::Gb,
            }]
        );

        shell.on_swipe_up();
        shell.on_swipe_up();
        assert_eq!(shell.accent(), Accent::Us);
        assert_eq!(Accent::Us.language_tag(), "en-US");
    }

    #[test]
    fn test_swipe_up_ignored_outside_lesson() {
        let mut shell = shell();
        shell.on_swipe_up();
        assert_eq!(shell.view, ShellView::Menu);
        assert!(shell.take_actions().is_empty());
    }

    #[test]
    fn test_dispatch_through_gesture_area() {
        let area = GestureArea::new(GestureConfig::default(), Span::none());
        let mut shell = LessonShell::new(builtin_lessons());

        area.dispatch(Gesture::Tap, &mut shell);
        area.dispatch(Gesture::SwipeRight, &mut shell);
        area.dispatch(Gesture::None, &mut shell);
        area.dispatch(Gesture::Tap, &mut shell);

        let actions = shell.take_actions();
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[2],
            LessonAction::Speak {
                text: "cat".to_string(),
                rate: DEFAULT_SPEECH_RATE,
                accent: Accent::Us,
            }
        );
    }
}
