use super::theme;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let state = app.driver_state();
    let mut spans = vec![
        Span::styled(format!(" {} ", app.mouse), theme::footer_style()),
        Span::styled("│ ", theme::footer_style()),
        Span::styled(format!("{} ", state), theme::driver_style(state)),
        Span::styled(
            format!(
                "│ frames {} │ dots/frame {} ",
                app.frames_rendered, app.last_frame.dots
            ),
            theme::footer_style(),
        ),
    ];

    // Flash message if active, otherwise key hints
    if let Some(msg) = app.active_flash() {
        spans.push(Span::styled(
            format!(" {} ", msg),
            Style::default()
                .fg(theme::SUCCESS)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.extend([
            Span::styled(" [Tab]", theme::key_hint_style()),
            Span::styled(" Focus  ", theme::footer_style()),
            Span::styled("[←→]", theme::key_hint_style()),
            Span::styled(" Adjust  ", theme::footer_style()),
            Span::styled("[?]", theme::key_hint_style()),
            Span::styled(" Help", theme::footer_style()),
        ]);
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
