use crate::config::Config;
use crate::driver::{AnimationDriver, DriverState, TokioScheduler};
use crate::params::{RenderParameters, DOTS_PER_FRAME_STEP};
use crate::renderer::{FrameStats, ParticleRenderer};
use crate::surface::{PixelCanvas, Surface};
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use std::sync::Arc;

/// Slider steps, degrees.
pub const HUE_STEP_FINE: f64 = 1.0;
pub const HUE_STEP_COARSE: f64 = 15.0;
/// Shortcut-key hue step.
pub const HUE_STEP_SHORTCUT: f64 = 5.0;

/// How long flash messages stay up, in UI ticks.
const FLASH_TICKS: u64 = 45;

/// Top-level application state.
pub struct App {
    pub config: Config,
    pub params: Arc<RenderParameters>,
    pub canvas: PixelCanvas,
    renderer: ParticleRenderer<StdRng>,
    driver: AnimationDriver<TokioScheduler>,
    pub focus: FocusItem,
    pub mouse: MouseReadout,
    pub show_help: bool,
    pub should_quit: bool,
    /// UI tick counter (not the frame counter).
    pub tick: u64,
    pub frames_rendered: u64,
    pub last_frame: FrameStats,
    /// Brief status message shown in the status line, auto-clears.
    pub flash_message: Option<String>,
    pub flash_until: u64,
    /// Terminal area from the last draw, used to map mouse cells to the canvas.
    pub viewport: Rect,
}

impl App {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            params: Arc::new(RenderParameters::new(config.hue_shift, config.dots_per_frame)),
            canvas: PixelCanvas::new(config.width, config.height),
            renderer: ParticleRenderer::new(rng),
            driver: AnimationDriver::new(TokioScheduler, config.tick()),
            focus: FocusItem::Start,
            mouse: MouseReadout::Outside,
            show_help: false,
            should_quit: false,
            tick: 0,
            frames_rendered: 0,
            last_frame: FrameStats::default(),
            flash_message: None,
            flash_until: 0,
            viewport: Rect::default(),
            config,
        }
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn on_start_requested(&mut self) {
        if self.driver.is_running() {
            return;
        }
        self.driver.start();
        self.flash("Animation started");
    }

    pub fn on_stop_requested(&mut self) {
        if !self.driver.is_running() {
            return;
        }
        self.driver.stop();
        self.flash("Animation stopped");
    }

    pub fn on_clear_requested(&mut self) {
        self.canvas.clear_all();
        log::info!("canvas cleared");
        self.flash("Cleared");
    }

    /// Stops the animation and marks the loop for exit.
    pub fn on_exit_requested(&mut self) {
        log::info!("exit requested after {} frames", self.frames_rendered);
        self.teardown();
        self.should_quit = true;
    }

    /// Release point for the frame scheduler. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.driver.stop();
    }

    /// Run one render step per due tick. Returns how many frames ran.
    pub fn poll_frames(&mut self) -> usize {
        let renderer = &mut self.renderer;
        let canvas = &mut self.canvas;
        let params = &self.params;
        let last = &mut self.last_frame;
        let ran = self.driver.poll(|_frame| {
            *last = renderer.render_frame(&mut *canvas, params);
        });
        self.frames_rendered += ran as u64;
        ran
    }

    /// Draw a single frame right now, bypassing the driver.
    #[cfg(test)]
    pub fn step_once(&mut self) {
        self.last_frame = self.renderer.render_frame(&mut self.canvas, &self.params);
        self.frames_rendered += 1;
    }

    pub fn activate(&mut self, item: FocusItem) {
        match item {
            FocusItem::Exit => self.on_exit_requested(),
            FocusItem::Start => self.on_start_requested(),
            FocusItem::Stop => self.on_stop_requested(),
            FocusItem::Clear => self.on_clear_requested(),
            FocusItem::HueShift | FocusItem::DotsPerFrame => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Nudge the focused slider or spinner by `direction` (+1 / -1) steps.
    /// Returns false when the focused item is a button.
    pub fn nudge_focused(&mut self, direction: i8, coarse: bool) -> bool {
        match self.focus {
            FocusItem::HueShift => {
                let step = if coarse { HUE_STEP_COARSE } else { HUE_STEP_FINE };
                self.params.adjust_hue_shift(step * direction as f64);
                true
            }
            FocusItem::DotsPerFrame => {
                self.params
                    .adjust_dots_per_frame(DOTS_PER_FRAME_STEP * direction as i64);
                true
            }
            _ => false,
        }
    }

    pub fn set_mouse(&mut self, readout: MouseReadout) {
        self.mouse = readout;
    }

    pub fn flash(&mut self, msg: &str) {
        self.flash_message = Some(msg.to_string());
        self.flash_until = self.tick + FLASH_TICKS;
    }

    pub fn active_flash(&self) -> Option<&str> {
        self.flash_message
            .as_deref()
            .filter(|_| self.tick < self.flash_until)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}
