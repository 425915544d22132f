//! Live render parameters shared between the input handler and the renderer.
//!
//! Each value is an independent atomic scalar. Writers and readers never lock;
//! the renderer snapshots once per frame.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

pub const HUE_SHIFT_MIN: f64 = 0.0;
pub const HUE_SHIFT_MAX: f64 = 360.0;
pub const DOTS_PER_FRAME_MIN: u32 = 1;
pub const DOTS_PER_FRAME_MAX: u32 = 1000;
pub const DOTS_PER_FRAME_DEFAULT: u32 = 100;
/// Spinner step, in dots.
pub const DOTS_PER_FRAME_STEP: i64 = 10;

#[derive(Debug)]
pub struct RenderParameters {
    /// `f64` bits.
    hue_shift: AtomicU64,
    dots_per_frame: AtomicU32,
}

/// Values read once at the start of a render step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    pub hue_shift: f64,
    pub dots_per_frame: u32,
}

impl RenderParameters {
    pub fn new(hue_shift: f64, dots_per_frame: u32) -> Self {
        Self {
            hue_shift: AtomicU64::new(clamp_hue_shift(hue_shift).to_bits()),
            dots_per_frame: AtomicU32::new(clamp_dots(dots_per_frame)),
        }
    }

    pub fn hue_shift(&self) -> f64 {
        // Re-sanitised on read; a torn or odd write never reaches the renderer.
        clamp_hue_shift(f64::from_bits(self.hue_shift.load(Ordering::Relaxed)))
    }

    pub fn dots_per_frame(&self) -> u32 {
        clamp_dots(self.dots_per_frame.load(Ordering::Relaxed))
    }

    pub fn set_hue_shift(&self, degrees: f64) {
        self.hue_shift
            .store(clamp_hue_shift(degrees).to_bits(), Ordering::Relaxed);
    }

    pub fn set_dots_per_frame(&self, dots: u32) {
        self.dots_per_frame.store(clamp_dots(dots), Ordering::Relaxed);
    }

    /// Slider nudge. Saturates at the ends of the range.
    pub fn adjust_hue_shift(&self, delta: f64) {
        self.set_hue_shift(self.hue_shift() + delta);
    }

    /// Spinner nudge. Saturates at the ends of the range.
    pub fn adjust_dots_per_frame(&self, delta: i64) {
        let next = (self.dots_per_frame() as i64 + delta)
            .clamp(DOTS_PER_FRAME_MIN as i64, DOTS_PER_FRAME_MAX as i64);
        self.set_dots_per_frame(next as u32);
    }

    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            hue_shift: self.hue_shift(),
            dots_per_frame: self.dots_per_frame(),
        }
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::new(HUE_SHIFT_MIN, DOTS_PER_FRAME_DEFAULT)
    }
}

pub fn clamp_hue_shift(degrees: f64) -> f64 {
    if degrees.is_finite() {
        degrees.clamp(HUE_SHIFT_MIN, HUE_SHIFT_MAX)
    } else {
        HUE_SHIFT_MIN
    }
}

pub fn clamp_dots(dots: u32) -> u32 {
    dots.clamp(DOTS_PER_FRAME_MIN, DOTS_PER_FRAME_MAX)
}
