use crate::color::{self, Rgb};
use crate::params::RenderParameters;
use crate::surface::Surface;
use rand::Rng;

/// Dot diameter in surface units.
pub const DOT_SIZE: f64 = 4.0;

/// Linear map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Hue for a dot at `x` on a surface `width` wide, shifted and wrapped.
pub fn dot_hue(x: f64, width: f64, hue_shift: f64) -> f64 {
    let base = map_range(x, 0.0, width, 0.0, 360.0);
    color::wrap_hue(base + hue_shift)
}

/// Fully saturated, full brightness color for a dot at `x`.
pub fn dot_color(x: f64, width: f64, hue_shift: f64) -> Rgb {
    color::hsb(dot_hue(x, width, hue_shift), 1.0, 1.0)
}

/// What one render step did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub dots: u32,
}

/// Paints a batch of independent random dots per frame.
///
/// Holds nothing between frames except the random source.
pub struct ParticleRenderer<R: Rng> {
    rng: R,
}

impl<R: Rng> ParticleRenderer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// One frame. Parameters are read once on entry; a concurrent change only
    /// shows up on the next frame.
    pub fn render_frame(
        &mut self,
        surface: &mut impl Surface,
        params: &RenderParameters,
    ) -> FrameStats {
        let snapshot = params.snapshot();
        let width = surface.width();
        let height = surface.height();
        if !(width > 0.0 && height > 0.0) {
            return FrameStats { dots: 0 };
        }

        for _ in 0..snapshot.dots_per_frame {
            let x = self.rng.gen_range(0.0..width);
            let y = self.rng.gen_range(0.0..height);
            let color = dot_color(x, width, snapshot.hue_shift);
            surface.fill_dot(x, y, DOT_SIZE, DOT_SIZE, color);
        }

        log::trace!(
            "frame: {} dots, hue shift {:.1}",
            snapshot.dots_per_frame,
            snapshot.hue_shift
        );
        FrameStats {
            dots: snapshot.dots_per_frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::tests::RecordingSurface;
    use crate::surface::{PixelCanvas, BACKGROUND};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    #[test]
    fn map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 900.0, 0.0, 360.0), 0.0);
        assert_eq!(map_range(450.0, 0.0, 900.0, 0.0, 360.0), 180.0);
        assert_eq!(map_range(900.0, 0.0, 900.0, 0.0, 360.0), 360.0);
        assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    }

    #[test]
    fn map_range_is_monotone_and_approaches_360() {
        let width = 900.0;
        let mut prev = map_range(0.0, 0.0, width, 0.0, 360.0);
        let mut x = 0.25;
        while x < width {
            let h = map_range(x, 0.0, width, 0.0, 360.0);
            assert!(h >= prev, "not monotone at {x}");
            assert!(h < 360.0);
            prev = h;
            x += 0.25;
        }
        let near_edge = map_range(width - 1e-9, 0.0, width, 0.0, 360.0);
        assert!(360.0 - near_edge < 1e-6);
    }

    #[test]
    fn hue_at_origin_with_and_without_shift() {
        assert_eq!(dot_hue(0.0, 900.0, 0.0), 0.0);
        assert_eq!(dot_hue(0.0, 900.0, 180.0), 180.0);
        assert_eq!(dot_hue(450.0, 900.0, 0.0), 180.0);
    }

    #[test]
    fn shifted_hue_wraps() {
        // 300 + 120 wraps to 60, not clamped to 360
        let h = dot_hue(750.0, 900.0, 120.0);
        assert!((h - 60.0).abs() < 1e-9);
        assert_eq!(dot_hue(0.0, 900.0, 360.0), 0.0);
    }

    #[test]
    fn zero_random_source_puts_dots_at_origin() {
        let params = RenderParameters::new(0.0, 10);
        let mut surface = RecordingSurface::new(900.0, 600.0);
        let mut renderer = ParticleRenderer::new(StepRng::new(0, 0));

        renderer.render_frame(&mut surface, &params);
        assert_eq!(surface.fills.len(), 10);
        for &(x, y, w, h, color) in &surface.fills {
            assert_eq!((x, y, w, h), (0.0, 0.0, DOT_SIZE, DOT_SIZE));
            assert_eq!(color, color::hsb(0.0, 1.0, 1.0));
        }

        params.set_hue_shift(180.0);
        surface.fills.clear();
        renderer.render_frame(&mut surface, &params);
        for &(_, _, _, _, color) in &surface.fills {
            assert_eq!(color, color::hsb(180.0, 1.0, 1.0));
        }
    }

    #[test]
    fn dots_stay_on_the_surface_and_match_their_hue() {
        let params = RenderParameters::new(42.0, 500);
        let mut surface = RecordingSurface::new(900.0, 600.0);
        let mut renderer = ParticleRenderer::new(StdRng::seed_from_u64(7));

        let stats = renderer.render_frame(&mut surface, &params);
        assert_eq!(stats.dots, 500);
        assert_eq!(surface.fills.len(), 500);
        for &(x, y, _, _, color) in &surface.fills {
            assert!((0.0..900.0).contains(&x));
            assert!((0.0..600.0).contains(&y));
            assert_eq!(color, dot_color(x, 900.0, 42.0));
        }
    }

    #[test]
    fn thousand_dots_is_thousand_fills_for_any_size() {
        let params = RenderParameters::new(0.0, 1000);
        for (w, h) in [(900.0, 600.0), (1.0, 1.0), (37.0, 4000.0)] {
            let mut surface = RecordingSurface::new(w, h);
            let mut renderer = ParticleRenderer::new(StdRng::seed_from_u64(1));
            renderer.render_frame(&mut surface, &params);
            assert_eq!(surface.fills.len(), 1000);
        }
    }

    #[test]
    fn same_seed_same_frame() {
        let params = RenderParameters::new(10.0, 50);
        let mut a = RecordingSurface::new(900.0, 600.0);
        let mut b = RecordingSurface::new(900.0, 600.0);
        ParticleRenderer::new(StdRng::seed_from_u64(99)).render_frame(&mut a, &params);
        ParticleRenderer::new(StdRng::seed_from_u64(99)).render_frame(&mut b, &params);
        assert_eq!(a.fills, b.fills);
    }

    #[test]
    fn parameters_are_read_once_per_frame() {
        let params = RenderParameters::new(0.0, 20);
        let mut surface = RecordingSurface::new(900.0, 600.0);
        let mut renderer = ParticleRenderer::new(StdRng::seed_from_u64(3));

        renderer.render_frame(&mut surface, &params);
        params.set_dots_per_frame(5);
        assert_eq!(surface.fills.len(), 20);
        renderer.render_frame(&mut surface, &params);
        assert_eq!(surface.fills.len(), 25);
    }

    /// Changes the live dot count on its first fill, i.e. mid-frame.
    struct MidFrameWriter {
        inner: RecordingSurface,
        params: Arc<RenderParameters>,
        dots_after_first_fill: u32,
    }

    impl Surface for MidFrameWriter {
        fn width(&self) -> f64 {
            self.inner.width()
        }

        fn height(&self) -> f64 {
            self.inner.height()
        }

        fn fill_dot(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
            if self.inner.fills.is_empty() {
                self.params.set_dots_per_frame(self.dots_after_first_fill);
            }
            self.inner.fill_dot(x, y, w, h, color);
        }

        fn clear_all(&mut self) {
            self.inner.clear_all();
        }
    }

    #[test]
    fn mid_frame_change_waits_for_the_next_frame() {
        let params = Arc::new(RenderParameters::new(0.0, 20));
        let mut surface = MidFrameWriter {
            inner: RecordingSurface::new(900.0, 600.0),
            params: Arc::clone(&params),
            dots_after_first_fill: 5,
        };
        let mut renderer = ParticleRenderer::new(StdRng::seed_from_u64(4));

        let stats = renderer.render_frame(&mut surface, &params);
        assert_eq!(params.dots_per_frame(), 5);
        assert_eq!(stats.dots, 20);
        assert_eq!(surface.inner.fills.len(), 20);

        surface.inner.fills.clear();
        surface.dots_after_first_fill = 300;
        let stats = renderer.render_frame(&mut surface, &params);
        assert_eq!(stats.dots, 5);
        assert_eq!(surface.inner.fills.len(), 5);
    }

    #[test]
    fn frame_paints_pixels() {
        let params = RenderParameters::new(0.0, 200);
        let mut canvas = PixelCanvas::new(120, 80);
        let mut renderer = ParticleRenderer::new(StdRng::seed_from_u64(11));
        renderer.render_frame(&mut canvas, &params);
        assert!(canvas.pixels().iter().any(|&c| c != BACKGROUND));
    }
}
