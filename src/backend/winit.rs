//! Winit backend: runs TinyLingo in a window on X11 or Wayland
//!
//! Mouse clicks and touchscreen input both drive the same gesture area, so
//! the app can be tried on a desktop and used on a touch laptop/tablet.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, info_span, warn};

use smithay::{
    backend::{
        renderer::{
            damage::OutputDamageTracker,
            element::{
                solid::{SolidColorBuffer, SolidColorRenderElement},
                Kind,
            },
            gles::GlesRenderer,
        },
        winit::{self, WinitEvent, WinitGraphicsBackend},
        SwapBuffersError,
    },
    reexports::winit::platform::pump_events::PumpStatus,
    utils::{Logical, Physical, Point, Size, Transform},
};

use crate::{
    config::Config,
    input::GestureArea,
    shell::{LessonAction, LessonShell, ShellView},
};

/// Card tint per lesson, cycled
const LESSON_COLORS: [[f32; 4]; 4] = [
    [0.98, 0.55, 0.45, 1.0], // Coral
    [0.45, 0.78, 0.52, 1.0], // Leaf green
    [0.40, 0.62, 0.95, 1.0], // Blue
    [0.96, 0.76, 0.30, 1.0], // Sunflower
];

const CARD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const SETTINGS_PANEL_COLOR: [f32; 4] = [0.78, 0.74, 0.92, 1.0];
const BAR_COLOR: [f32; 4] = [0.30, 0.30, 0.45, 1.0];
const BAR_HEIGHT: i32 = 24;

/// Solid-colour pieces of the current screen
struct Scene {
    card: SolidColorBuffer,
    bar: SolidColorBuffer,
}

impl Scene {
    fn new() -> Self {
        Self {
            card: SolidColorBuffer::new((1, 1), CARD_COLOR),
            bar: SolidColorBuffer::new((1, 1), BAR_COLOR),
        }
    }

    /// Lay out the card and bar for `shell` and build render elements
    fn elements(&mut self, shell: &LessonShell, size: Size<i32, Physical>) -> Vec<SolidColorRenderElement> {
        let (w, h) = (size.w, size.h);
        let card_size = Size::<i32, Logical>::from(((w * 4 / 5).max(1), (h / 2).max(1)));
        let card_loc = Point::<i32, Physical>::from(((w - card_size.w) / 2, (h - card_size.h) / 3));

        let (card_color, fraction) = match shell.view {
            ShellView::Menu => {
                let color = LESSON_COLORS[shell.selected() % LESSON_COLORS.len()];
                let fraction = (shell.selected() + 1) as f64 / shell.lesson_count().max(1) as f64;
                (color, fraction)
            }
            ShellView::Lesson => (CARD_COLOR, shell.lesson().map_or(0.0, |l| l.progress())),
            ShellView::Settings => (
                SETTINGS_PANEL_COLOR,
                f64::from(shell.speech_rate()) / f64::from(crate::shell::MAX_SPEECH_RATE),
            ),
        };

        let bar_width = ((w as f64 * fraction).round() as i32).max(1);
        self.card.update(card_size, card_color);
        self.bar.update((bar_width, BAR_HEIGHT), BAR_COLOR);

        vec![
            SolidColorRenderElement::from_buffer(&self.bar, (0, h - BAR_HEIGHT), 1.0, 1.0, Kind::Unspecified),
            SolidColorRenderElement::from_buffer(&self.card, card_loc, 1.0, 1.0, Kind::Unspecified),
        ]
    }
}

pub fn run(config: Config, width: i32, height: i32) -> Result<()> {
    info!("Winit backend: window size {}x{}", width, height);

    let (mut backend, mut winit_evt) = winit::init_from_attributes::<GlesRenderer>(
        smithay::reexports::winit::window::WindowAttributes::default()
            .with_title("TinyLingo")
            .with_inner_size(smithay::reexports::winit::dpi::LogicalSize::new(
                width as f64,
                height as f64,
            ))
            .with_resizable(false),
    )
    .map_err(|e| anyhow::anyhow!("Failed to init winit: {:?}", e))?;

    let screen_size: Size<i32, Logical> = Size::from((width, height));
    let mut area = GestureArea::new(config.gestures.clone(), info_span!("gestures"));
    let mut shell = LessonShell::new(config.into_lessons());

    let mut damage_tracker = OutputDamageTracker::new(backend.window_size(), 1.0, Transform::Flipped180);
    let mut scene = Scene::new();
    let mut running = true;

    info!("Entering event loop");
    info!("Click or touch and drag to swipe between cards.");

    while running {
        let status = winit_evt.dispatch_new_events(|event| match event {
            WinitEvent::Resized { size, .. } => {
                debug!("Window resized: {:?}", size);
                damage_tracker = OutputDamageTracker::new(size, 1.0, Transform::Flipped180);
            }
            WinitEvent::Input(input_event) => {
                area.handle_input_event(input_event, screen_size, &mut shell);
                for action in shell.take_actions() {
                    report_action(&shell, &action);
                }
            }
            WinitEvent::CloseRequested => {
                info!("Close requested, exiting...");
                running = false;
            }
            WinitEvent::Focus(focused) => {
                debug!("Focus changed: {}", focused);
            }
            _ => {}
        });

        if let PumpStatus::Exit(_) = status {
            info!("Winit exit requested");
            break;
        }

        render_frame(&shell, &mut backend, &mut damage_tracker, &mut scene);
        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}

/// Log what the shell asked for. Speech is reported here rather than synthesized.
fn report_action(shell: &LessonShell, action: &LessonAction) {
    match action {
        LessonAction::Speak { text, rate, accent } => {
            info!(rate, lang = accent.language_tag(), "Speak: {}", text)
        }
        LessonAction::ShowCard { lesson, index } => {
            if let Some(card) = shell.lesson().and_then(|l| l.cards.get(*index)) {
                info!(
                    lesson,
                    index,
                    "Card: {} / {} {}",
                    card.word,
                    card.translation,
                    card.pinyin.as_deref().unwrap_or("")
                );
            }
        }
        LessonAction::SelectLesson(index) => {
            if let Some(lesson) = shell.lesson() {
                info!(index, "Lesson: {}", lesson.title);
            }
        }
        other => debug!("Shell action: {:?}", other),
    }
}

fn render_frame(
    shell: &LessonShell,
    backend: &mut WinitGraphicsBackend<GlesRenderer>,
    damage_tracker: &mut OutputDamageTracker,
    scene: &mut Scene,
) {
    let age = backend.buffer_age().unwrap_or(0);
    let elements = scene.elements(shell, backend.window_size());
    let bg_color = shell.background_color();

    let render_result = backend.bind().and_then(|(renderer, mut fb)| {
        damage_tracker
            .render_output(renderer, &mut fb, age, &elements, bg_color)
            .map_err(|e| {
                SwapBuffersError::ContextLost(Box::new(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("{:?}", e),
                )))
            })
    });

    match render_result {
        Ok(render_output_result) => {
            if let Some(damage) = render_output_result.damage {
                if let Err(e) = backend.submit(Some(damage)) {
                    warn!("Failed to submit: {:?}", e);
                }
            }
        }
        Err(err) => {
            warn!("Render error: {:?}", err);
            let _ = backend.submit(None);
        }
    }
}
