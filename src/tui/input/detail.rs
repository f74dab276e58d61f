use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, View};

pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.view = View::List;
            app.detail_scroll = 0;
        }
        // The toggle control under the description
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_detail_spoiler();
            app.detail_scroll = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.detail_scroll = 0,
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}
