use crate::color::Rgb;

/// Light pink, the canvas background.
pub const BACKGROUND: Rgb = Rgb::new(255, 182, 193);

/// Largest canvas side, in pixels.
pub const MAX_SIDE: usize = 8192;

/// A fixed-size 2D drawing target.
///
/// The renderer only ever writes through this trait; it never resizes or reads
/// back. Both operations are infallible.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Fill an oval inscribed in the box whose top-left corner is `(x, y)`,
    /// i.e. spanning `[x, x + w) × [y, y + h)`.
    fn fill_dot(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);

    /// Erase the whole `[0, width) × [0, height)` area back to the background.
    fn clear_all(&mut self);
}

/// Row-major RGB pixel buffer, one pixel per logical unit.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    background: Rgb,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, BACKGROUND)
    }

    /// Sides are clamped to `1..=MAX_SIDE`.
    pub fn with_background(width: usize, height: usize, background: Rgb) -> Self {
        let width = width.clamp(1, MAX_SIDE);
        let height = height.clamp(1, MAX_SIDE);
        let len = width.checked_mul(height).unwrap_or(MAX_SIDE * MAX_SIDE);
        Self {
            width,
            height,
            background,
            pixels: vec![background; len],
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// First non-background pixel inside `[x0, x1) × [y0, y1)`, scanning row by
    /// row. Used to downsample the canvas for display.
    pub fn first_ink(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Option<Rgb> {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let row = &self.pixels[y * self.width..(y + 1) * self.width];
            if let Some(c) = row[x0.min(x1)..x1].iter().find(|&&c| c != self.background) {
                return Some(*c);
            }
        }
        None
    }

    /// Pixel column/row span `[start, end)` covered by `[pos, pos + len)`,
    /// clipped to `0..limit`.
    fn span(pos: f64, len: f64, limit: usize) -> (usize, usize) {
        let start = pos.floor().max(0.0) as usize;
        let end = (pos + len).ceil().max(0.0) as usize;
        (start.min(limit), end.min(limit))
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn fill_dot(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let rx = w / 2.0;
        let ry = h / 2.0;
        let cx = x + rx;
        let cy = y + ry;
        let (x0, x1) = Self::span(x, w, self.width);
        let (y0, y1) = Self::span(y, h, self.height);

        // A pixel is inked when its center falls inside the ellipse.
        for py in y0..y1 {
            let dy = (py as f64 + 0.5 - cy) / ry;
            for px in x0..x1 {
                let dx = (px as f64 + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.pixels[py * self.width + px] = color;
                }
            }
        }
    }

    fn clear_all(&mut self) {
        self.pixels.fill(self.background);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every draw call instead of rasterising.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub fills: Vec<(f64, f64, f64, f64, Rgb)>,
        pub clears: usize,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ..Default::default()
            }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn fill_dot(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
            self.fills.push((x, y, w, h, color));
        }

        fn clear_all(&mut self) {
            self.clears += 1;
        }
    }

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn inked(canvas: &PixelCanvas) -> Vec<(usize, usize)> {
        let (w, h) = canvas.size();
        let mut out = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if canvas.pixel(x, y) != Some(canvas.background()) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn new_canvas_is_background() {
        let canvas = PixelCanvas::new(8, 5);
        assert!(canvas.pixels().iter().all(|&c| c == BACKGROUND));
        assert_eq!(canvas.pixels().len(), 40);
    }

    #[test]
    fn dot_is_anchored_at_top_left() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.fill_dot(10.0, 4.0, 4.0, 4.0, RED);

        let pixels = inked(&canvas);
        assert!(!pixels.is_empty());
        for (x, y) in &pixels {
            assert!((10..14).contains(x), "x {x} outside bounding box");
            assert!((4..8).contains(y), "y {y} outside bounding box");
        }
        // Oval, not a square: the corners stay clear.
        assert_eq!(canvas.pixel(10, 4), Some(BACKGROUND));
        assert_eq!(canvas.pixel(13, 7), Some(BACKGROUND));
        assert_eq!(canvas.pixel(11, 5), Some(RED));
        assert_eq!(canvas.pixel(12, 6), Some(RED));
    }

    #[test]
    fn dot_at_far_edge_is_clipped() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_dot(8.5, 8.5, 4.0, 4.0, RED);
        for (x, y) in inked(&canvas) {
            assert!(x >= 8 && y >= 8);
        }
    }

    #[test]
    fn dot_outside_is_ignored() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_dot(50.0, 50.0, 4.0, 4.0, RED);
        canvas.fill_dot(-20.0, -20.0, 4.0, 4.0, RED);
        assert!(inked(&canvas).is_empty());
    }

    #[test]
    fn clear_all_restores_background_everywhere() {
        let mut canvas = PixelCanvas::new(30, 20);
        for i in 0..10 {
            canvas.fill_dot(i as f64 * 3.0, i as f64 * 2.0, 4.0, 4.0, RED);
        }
        assert!(!inked(&canvas).is_empty());

        canvas.clear_all();
        assert!(canvas.pixels().iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn first_ink_finds_painted_pixel() {
        let mut canvas = PixelCanvas::new(16, 16);
        assert_eq!(canvas.first_ink(0, 0, 16, 16), None);
        canvas.fill_dot(8.0, 8.0, 4.0, 4.0, RED);
        assert_eq!(canvas.first_ink(0, 0, 8, 8), None);
        assert_eq!(canvas.first_ink(8, 8, 16, 16), Some(RED));
        assert_eq!(canvas.first_ink(8, 8, 100, 100), Some(RED));
    }

    #[test]
    fn zero_size_is_bumped_to_one_pixel() {
        let canvas = PixelCanvas::new(0, 0);
        assert_eq!(canvas.size(), (1, 1));
    }

    #[test]
    fn huge_size_is_capped() {
        let mut canvas = PixelCanvas::new(usize::MAX, 3);
        assert_eq!(canvas.size(), (MAX_SIDE, 3));
        assert_eq!(canvas.pixels().len(), MAX_SIDE * 3);
        canvas.fill_dot(MAX_SIDE as f64 - 2.0, 0.0, 4.0, 4.0, RED);
        assert_eq!(canvas.pixel(MAX_SIDE - 1, 1), Some(RED));
    }
}
