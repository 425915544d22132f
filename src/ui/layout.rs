use super::{canvas, status, toolbar};
use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Screen regions. Shared by drawing and mouse hit-testing so both agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub toolbar: Rect,
    pub toolbar_inner: Rect,
    pub canvas: Rect,
    pub canvas_inner: Rect,
    pub status: Rect,
}

pub fn areas(viewport: Rect) -> Areas {
    // Vertical: toolbar | canvas | status
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // toolbar
            Constraint::Min(3),    // canvas
            Constraint::Length(1), // status
        ])
        .split(viewport);

    let bordered = Block::default().borders(Borders::ALL);
    Areas {
        toolbar: vert[0],
        toolbar_inner: bordered.inner(vert[0]),
        canvas: vert[1],
        canvas_inner: bordered.inner(vert[1]),
        status: vert[2],
    }
}

/// Toolbar on top, canvas in the middle, status line at the bottom.
pub fn draw_layout(f: &mut Frame, area: Rect, app: &App) {
    let areas = areas(area);
    toolbar::draw_toolbar(f, areas.toolbar, app);
    canvas::draw_canvas(f, areas.canvas, app);
    status::draw_status(f, areas.status, app);
}
