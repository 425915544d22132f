use super::theme;
use crate::app::App;
use crate::color::Rgb;
use crate::surface::PixelCanvas;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};
use ratatui::Frame;

/// Upper half block: fg paints the top sample, bg the bottom one.
const HALF_BLOCK: &str = "▀";

pub fn draw_canvas(f: &mut Frame, area: Rect, app: &App) {
    let (w, h) = app.canvas.size();
    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            format!(" CANVAS {}×{} ", w, h),
            theme::panel_title_style(),
        )]))
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));

    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(CanvasWidget { canvas: &app.canvas }, inner);
}

/// Presents a `PixelCanvas` scaled to fit the widget area, two vertical samples
/// per terminal cell.
pub struct CanvasWidget<'a> {
    pub canvas: &'a PixelCanvas,
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (cw, ch) = self.canvas.size();
        let cols = area.width as usize;
        let rows = area.height as usize * 2;

        for col in 0..cols {
            let (x0, x1) = sample_span(col, cols, cw);
            for row in 0..area.height as usize {
                let top = self.sample(x0, x1, row * 2, rows, ch);
                let bottom = self.sample(x0, x1, row * 2 + 1, rows, ch);

                let cell = &mut buf[(area.x + col as u16, area.y + row as u16)];
                cell.set_symbol(HALF_BLOCK);
                cell.set_style(Style::default().fg(top.into()).bg(bottom.into()));
            }
        }
    }
}

impl CanvasWidget<'_> {
    fn sample(&self, x0: usize, x1: usize, sub_row: usize, rows: usize, ch: usize) -> Rgb {
        let (y0, y1) = sample_span(sub_row, rows, ch);
        self.canvas
            .first_ink(x0, y0, x1, y1)
            .unwrap_or_else(|| self.canvas.background())
    }
}

/// Pixel range `[start, end)` covered by sample `index` of `count` across
/// `pixels`. Never empty.
fn sample_span(index: usize, count: usize, pixels: usize) -> (usize, usize) {
    let start = index * pixels / count;
    let end = ((index + 1) * pixels / count).max(start + 1);
    (start.min(pixels.saturating_sub(1)), end.min(pixels))
}

/// Surface coordinates under terminal cell `(col, row)`, or `None` when the
/// cell is outside `inner`.
pub fn cell_to_surface(
    inner: Rect,
    col: u16,
    row: u16,
    (width, height): (usize, usize),
) -> Option<(f64, f64)> {
    if inner.width == 0
        || inner.height == 0
        || col < inner.x
        || row < inner.y
        || col >= inner.x + inner.width
        || row >= inner.y + inner.height
    {
        return None;
    }
    let x = (col - inner.x) as f64 + 0.5;
    let y = (row - inner.y) as f64 + 0.5;
    Some((
        x * width as f64 / inner.width as f64,
        y * height as f64 / inner.height as f64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::surface::{Surface, BACKGROUND};
    use ratatui::style::Color;

    fn render(canvas: &PixelCanvas, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        CanvasWidget { canvas }.render(area, &mut buf);
        buf
    }

    #[test]
    fn blank_canvas_is_all_background() {
        let canvas = PixelCanvas::new(90, 60);
        let area = Rect::new(0, 0, 30, 10);
        let buf = render(&canvas, area);
        let bg: Color = BACKGROUND.into();
        for y in 0..10 {
            for x in 0..30 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.symbol(), HALF_BLOCK);
                assert_eq!(cell.fg, bg);
                assert_eq!(cell.bg, bg);
            }
        }
    }

    #[test]
    fn dot_shows_up_in_the_matching_cell() {
        let mut canvas = PixelCanvas::new(90, 60);
        let blue = Rgb::new(0, 0, 255);
        canvas.fill_dot(0.0, 0.0, 4.0, 4.0, blue);

        // 30 columns → 3 px per column; 10 rows → 20 samples → 3 px per sample
        let buf = render(&canvas, Rect::new(0, 0, 30, 10));
        let cell = &buf[(0, 0)];
        assert_eq!(cell.fg, Color::Rgb(0, 0, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
        assert_eq!(buf[(29, 9)].fg, BACKGROUND.into());
    }

    #[test]
    fn widget_respects_area_offset() {
        let canvas = PixelCanvas::new(10, 10);
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 6));
        CanvasWidget { canvas: &canvas }.render(Rect::new(2, 1, 4, 2), &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(6, 1)].symbol(), " ");
    }

    #[test]
    fn canvas_smaller_than_area_still_samples() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.fill_dot(0.0, 0.0, 4.0, 4.0, Rgb::new(1, 2, 3));
        let buf = render(&canvas, Rect::new(0, 0, 8, 8));
        assert_eq!(buf[(7, 7)].bg, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn spans_cover_every_pixel_once() {
        let mut covered = vec![0; 900];
        for i in 0..37 {
            let (s, e) = sample_span(i, 37, 900);
            for c in &mut covered[s..e] {
                *c += 1;
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn cell_mapping() {
        let inner = Rect::new(1, 4, 90, 30);
        assert_eq!(cell_to_surface(inner, 0, 4, (900, 600)), None);
        assert_eq!(cell_to_surface(inner, 91, 4, (900, 600)), None);
        assert_eq!(cell_to_surface(inner, 1, 34, (900, 600)), None);

        let (x, y) = cell_to_surface(inner, 1, 4, (900, 600)).unwrap();
        assert_eq!((x, y), (5.0, 10.0));
        let (x, y) = cell_to_surface(inner, 90, 33, (900, 600)).unwrap();
        assert_eq!((x, y), (895.0, 590.0));
    }
}
