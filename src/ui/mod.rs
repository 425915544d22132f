pub mod canvas;
pub mod dialogs;
pub mod layout;
pub mod status;
pub mod theme;
pub mod toolbar;

use crate::app::App;
use ratatui::Frame;

/// Master render function: toolbar, canvas and status, then the help overlay.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    layout::draw_layout(f, area, app);

    if app.show_help {
        dialogs::draw_help(f, area);
    }
}
