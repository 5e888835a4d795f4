mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::{Frame, Rect};
use ratatui::widgets::Paragraph;

/// Smallest area the compass layout stays readable in.
const MIN_AREA: (u16, u16) = (60, 22);

pub fn draw(f: &mut Frame, app: &AppState) {
    let area: Rect = f.area();
    if area.width < MIN_AREA.0 || area.height < MIN_AREA.1 {
        let msg = format!("Terminal too small: need {}x{}", MIN_AREA.0, MIN_AREA.1);
        f.render_widget(Paragraph::new(msg), area);
        return;
    }
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }
}
