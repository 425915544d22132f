use super::theme;
use crate::app::App;
use crate::params::{HUE_SHIFT_MAX, HUE_SHIFT_MIN};
use crate::types::FocusItem;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const SLIDER_WIDTH: usize = 18;

/// One run of toolbar text, optionally tied to the control it belongs to.
struct Segment {
    item: Option<FocusItem>,
    text: String,
    style: Style,
}

impl Segment {
    fn control(item: FocusItem, text: String, style: Style) -> Self {
        Self {
            item: Some(item),
            text,
            style,
        }
    }

    fn gap(text: &str) -> Self {
        Self {
            item: None,
            text: text.to_string(),
            style: Style::default(),
        }
    }
}

fn slider_bar(value: f64) -> String {
    let frac = (value - HUE_SHIFT_MIN) / (HUE_SHIFT_MAX - HUE_SHIFT_MIN);
    let knob = ((frac * (SLIDER_WIDTH - 1) as f64).round() as usize).min(SLIDER_WIDTH - 1);
    (0..SLIDER_WIDTH)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

fn segments(app: &App) -> Vec<Segment> {
    let mut out = vec![Segment::gap(" ")];

    for item in FocusItem::ORDER.iter().copied().filter(|i| i.is_button()) {
        let focused = app.focus == item;
        let text = if focused {
            format!(" > {} ({}) ", item.label(), item.shortcut())
        } else {
            format!("  {} ({})  ", item.label(), item.shortcut())
        };
        out.push(Segment::control(item, text, theme::button_style(focused)));
        out.push(Segment::gap(" "));
    }

    let hue_focused = app.focus == FocusItem::HueShift;
    let hue = app.params.hue_shift();
    out.push(Segment::gap(" "));
    out.push(Segment::control(
        FocusItem::HueShift,
        format!(
            "{} {} {:>5.1}°",
            FocusItem::HueShift.label(),
            slider_bar(hue),
            hue
        ),
        theme::label_style(hue_focused),
    ));

    let dots_focused = app.focus == FocusItem::DotsPerFrame;
    out.push(Segment::gap("   "));
    out.push(Segment::control(
        FocusItem::DotsPerFrame,
        format!(
            "{} ◀ {:>4} ▶",
            FocusItem::DotsPerFrame.label(),
            app.params.dots_per_frame()
        ),
        theme::label_style(dots_focused),
    ));

    out
}

pub fn draw_toolbar(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Line::from(vec![Span::styled(
            " HUE DOTS ",
            theme::panel_title_style(),
        )]))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true))
        .style(Style::default().bg(theme::SURFACE));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let spans: Vec<Span> = segments(app)
        .into_iter()
        .map(|s| Span::styled(s.text, s.style))
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Which control, if any, sits under the terminal cell `(col, row)`.
pub fn hit_test(app: &App, inner: Rect, col: u16, row: u16) -> Option<FocusItem> {
    if row != inner.y || col < inner.x || col >= inner.x + inner.width {
        return None;
    }
    let target = (col - inner.x) as usize;
    let mut start = 0;
    for segment in segments(app) {
        let end = start + segment.text.width();
        if (start..end).contains(&target) {
            return segment.item;
        }
        start = end;
    }
    None
}
