//! Desktop preview for the LED curtain
//!
//! Runs the frame clock against the window's repaint loop and draws the
//! published grid as a curtain of vertical strips. All changes go through the
//! intent channel, the same way a hardware control surface would send them.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use led_curtain_composer::config::{MAX_HEIGHT_M, MAX_STRIP_COUNT, MIN_HEIGHT_M};
use led_curtain_composer::{
    ConfigChange, FrameClock, GridSink, Instant, IntensityGrid, IntentChannel, IntentSender,
    PRESET_COLORS, PROFILE_A, PROFILE_B, PatternGroup, PatternId, Profile, Rgb, TickToken,
    color_or_default, shade,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Largest LED count of the built-in profiles
const MAX_LEDS: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 8.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Gap between strips
const STRIP_GAP: f32 = 14.0;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 16;

/// Static intent channel for communication between UI and clock
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

type PreviewClock =
    FrameClock<'static, CurtainView, SmallRng, MAX_STRIP_COUNT, MAX_LEDS, INTENT_CHANNEL_SIZE>;

/// Last published frame
#[derive(Default)]
struct CurtainView {
    grid: IntensityGrid<MAX_STRIP_COUNT, MAX_LEDS>,
    color: Rgb,
}

impl GridSink<MAX_STRIP_COUNT, MAX_LEDS> for CurtainView {
    fn publish(&mut self, grid: &IntensityGrid<MAX_STRIP_COUNT, MAX_LEDS>, color: Rgb) {
        self.grid.clone_from(grid);
        self.color = color;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 820.0])
            .with_title("LED Curtain Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "led-curtain-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new(PROFILE_A)))),
    )
}

struct PreviewApp {
    clock: PreviewClock,
    token: Option<TickToken>,
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,
    /// Wall-clock reference for the clock's millisecond timeline
    started: StdInstant,
    next_deadline: Instant,

    // UI state (tracked to detect changes and send intents)
    profile_b: bool,
    pattern: Option<PatternId>,
    strip_count: usize,
    speed: f32,
    color_input: String,
    message: String,
    height_m: f32,
}

impl PreviewApp {
    fn new(profile: Profile) -> Self {
        let started = StdInstant::now();
        let clock = PreviewClock::new(
            CurtainView::default(),
            INTENTS_CHANNEL.receiver(),
            profile,
            SmallRng::from_entropy(),
        );
        let config = clock.configuration().clone();

        Self {
            clock,
            token: None,
            intent_sender: INTENTS_CHANNEL.sender(),
            started,
            next_deadline: Instant::from_millis(0),
            profile_b: profile == PROFILE_B,
            pattern: config.pattern,
            strip_count: config.strip_count,
            speed: config.speed,
            color_input: hex(config.color),
            message: config.message.as_str().into(),
            height_m: config.height_m,
        }
    }

    fn now(&self) -> Instant {
        #[allow(clippy::cast_possible_truncation)]
        let elapsed = self.started.elapsed().as_millis() as u64;
        Instant::from_millis(elapsed)
    }

    fn send(&self, change: ConfigChange) {
        let _ = self.intent_sender.configure(change);
    }

    /// Run the clock up to the current wall-clock time
    fn advance(&mut self) {
        let now = self.now();
        let token = match self.token {
            Some(token) => token,
            None => match self.clock.poll(now) {
                Some(token) => {
                    self.next_deadline = now;
                    token
                }
                None => return,
            },
        };

        if now < self.next_deadline {
            self.token = Some(token);
            return;
        }
        match self.clock.tick(token, now) {
            Some(result) => {
                self.token = Some(result.next);
                self.next_deadline = result.next_deadline;
            }
            None => self.token = None,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.clock.is_running() {
                "⏸ Pause"
            } else {
                "▶ Play"
            };
            if ui.button(label).clicked() {
                let _ = self.intent_sender.toggle();
            }
            ui.label(format!("Frame: {:.2}", self.clock.frame_counter()));

            ui.add_space(16.0);
            ui.label("Profile:");
            let old_profile_b = self.profile_b;
            ui.selectable_value(&mut self.profile_b, false, "40 LEDs");
            ui.selectable_value(&mut self.profile_b, true, "60 LEDs");
            if self.profile_b != old_profile_b {
                let profile = if self.profile_b { PROFILE_B } else { PROFILE_A };
                *self = Self::new(profile);
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            let mut selected = self.pattern;
            egui::ComboBox::from_id_salt("pattern_selector")
                .selected_text(self.pattern.map_or("none", PatternId::as_str))
                .show_ui(ui, |ui| {
                    for group in PatternGroup::ALL {
                        ui.label(group.as_str());
                        for id in PatternId::ALL.into_iter().filter(|id| id.group() == group) {
                            ui.selectable_value(&mut selected, Some(id), id.as_str());
                        }
                        ui.separator();
                    }
                    ui.selectable_value(&mut selected, None, "none");
                });
            if selected != self.pattern {
                self.pattern = selected;
                self.send(ConfigChange::default().with_pattern(selected));
            }

            if self.pattern == Some(PatternId::Text) {
                ui.add_space(8.0);
                ui.label("Message:");
                if ui.text_edit_singleline(&mut self.message).changed() {
                    self.send(ConfigChange::default().with_message(&self.message));
                }
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Strips:");
            let old_strip_count = self.strip_count;
            ui.add(egui::Slider::new(&mut self.strip_count, 1..=MAX_STRIP_COUNT));
            if self.strip_count != old_strip_count {
                self.send(ConfigChange::default().with_strip_count(self.strip_count));
            }

            ui.add_space(8.0);
            ui.label("Speed:");
            let old_speed = self.speed;
            let max_speed = self.clock.profile().max_speed;
            ui.add(egui::Slider::new(&mut self.speed, 0.0..=max_speed));
            #[allow(clippy::float_cmp)]
            if self.speed != old_speed {
                self.send(ConfigChange::default().with_speed(self.speed));
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Color:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.color_input).desired_width(72.0),
            );
            if response.lost_focus() {
                self.send(ConfigChange::default().with_color(color_or_default(&self.color_input)));
            }
            for preset in PRESET_COLORS {
                let value = preset.value;
                let swatch = egui::Color32::from_rgb(value.r, value.g, value.b);
                if ui
                    .add(egui::Button::new("").fill(swatch).min_size(egui::vec2(18.0, 18.0)))
                    .on_hover_text(preset.name)
                    .clicked()
                {
                    self.color_input = hex(preset.value);
                    self.send(ConfigChange::default().with_color(preset.value));
                }
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Height:");
            let old_height = self.height_m;
            ui.add(
                egui::Slider::new(&mut self.height_m, MIN_HEIGHT_M..=MAX_HEIGHT_M)
                    .step_by(1.0)
                    .suffix(" m"),
            );
            #[allow(clippy::float_cmp)]
            if self.height_m != old_height {
                self.send(ConfigChange::default().with_height(self.height_m));
            }

            ui.add_space(16.0);
            let config = self.clock.configuration();
            ui.label(format!(
                "{} LEDs/strip, {} LEDs total, {} m, {} LEDs/m",
                config.led_count,
                config.total_led_count(),
                config.height_m,
                config.leds_per_meter()
            ));
        });
    }

    fn curtain(&self, ui: &mut egui::Ui) {
        let view = self.clock.sink();
        let shape = view.grid.shape();
        let led_pitch = LED_SIZE + LED_GAP;
        let strip_pitch = LED_SIZE + STRIP_GAP;

        #[allow(clippy::cast_precision_loss)]
        let size = egui::vec2(
            shape.strips as f32 * strip_pitch,
            shape.leds as f32 * led_pitch,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);

        #[allow(clippy::cast_precision_loss)]
        for (strip, leds) in view.grid.strips().enumerate() {
            let x = origin.x + strip as f32 * strip_pitch;
            for (led, intensity) in leds.iter().enumerate() {
                let y = origin.y + led as f32 * led_pitch;
                let pixel = shade(view.color, *intensity);
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
            }
        }
    }
}

fn hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);
            ui.add_space(16.0);
            egui::ScrollArea::both().show(ui, |ui| self.curtain(ui));
        });
    }
}
