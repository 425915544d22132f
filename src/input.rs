use crate::app::{App, HUE_STEP_SHORTCUT};
use crate::params::DOTS_PER_FRAME_STEP;
use crate::types::*;
use crate::ui::{canvas, layout, toolbar};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.on_exit_requested(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('s') => app.on_start_requested(),
        KeyCode::Char('p') => app.on_stop_requested(),
        KeyCode::Char('c') => app.on_clear_requested(),
        KeyCode::Char('[') => app.params.adjust_hue_shift(-HUE_STEP_SHORTCUT),
        KeyCode::Char(']') => app.params.adjust_hue_shift(HUE_STEP_SHORTCUT),
        KeyCode::Char('-') => app.params.adjust_dots_per_frame(-DOTS_PER_FRAME_STEP),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.params.adjust_dots_per_frame(DOTS_PER_FRAME_STEP)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.focus.is_button() {
                app.activate(app.focus);
            }
        }
        // Arrows adjust the focused control, otherwise walk the toolbar.
        KeyCode::Right => {
            if !app.nudge_focused(1, coarse) {
                app.focus_next();
            }
        }
        KeyCode::Left => {
            if !app.nudge_focused(-1, coarse) {
                app.focus_prev();
            }
        }
        KeyCode::Up => {
            app.nudge_focused(1, coarse);
        }
        KeyCode::Down => {
            app.nudge_focused(-1, coarse);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    let areas = layout::areas(app.viewport);
    let on_canvas = canvas::cell_to_surface(
        areas.canvas_inner,
        event.column,
        event.row,
        app.canvas.size(),
    );

    match event.kind {
        MouseEventKind::Moved => {
            app.set_mouse(match on_canvas {
                Some((x, y)) => MouseReadout::Moved { x, y },
                None => MouseReadout::Outside,
            });
        }
        MouseEventKind::Drag(_) => {
            app.set_mouse(match on_canvas {
                Some((x, y)) => MouseReadout::Dragged { x, y },
                None => MouseReadout::Outside,
            });
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(item) = toolbar::hit_test(app, areas.toolbar_inner, event.column, event.row)
            {
                app.focus = item;
                if item.is_button() {
                    app.activate(item);
                }
            }
        }
        MouseEventKind::ScrollUp => {
            app.nudge_focused(1, false);
        }
        MouseEventKind::ScrollDown => {
            app.nudge_focused(-1, false);
        }
        _ => {}
    }
}
