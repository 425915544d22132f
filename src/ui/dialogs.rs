use super::theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const HELP_KEYS: &[(&str, &str)] = &[
    ("s / Start", "Start the animation"),
    ("p / Stop", "Pause the animation"),
    ("c / Clear", "Erase the canvas"),
    ("q / Esc / Exit", "Quit"),
    ("[  ]", "Hue shift -/+ 5°"),
    ("-  +", "Dots per frame -/+ 10"),
    ("Tab / Shift+Tab", "Move focus"),
    ("←→ ↑↓", "Adjust focused control (Shift: coarse)"),
    ("Enter / Space", "Press focused button"),
    ("Mouse", "Click buttons, wheel adjusts"),
];

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

/// Key reference overlay; any key closes it.
pub fn draw_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, HELP_KEYS.len() as u16 + 4, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            " Help ",
            theme::panel_title_style(),
        )]))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true))
        .style(Style::default().bg(theme::SURFACE));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines = vec![Line::from("")];
    for (key, what) in HELP_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", key), theme::key_hint_style()),
            Span::styled(*what, Style::default().fg(theme::TEXT)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        theme::footer_style(),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
