use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // List movement
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.visible.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.visible.len().saturating_sub(1),

        // Open detail
        KeyCode::Enter => {
            if let Some(idx) = app.selected_task() {
                app.view = View::Detail(idx);
                app.detail_scroll = 0;
            }
        }

        // Filter buttons
        KeyCode::Char('a') => app.press_active_only(),
        KeyCode::Char('d') => app.press_done_only(),
        KeyCode::Char('b') => app.press_all_tasks(),
        KeyCode::Char('m') => app.press_my_tasks(),
        KeyCode::Char('o') => app.press_sort_order(),

        // Filter-bar focus
        KeyCode::Tab => app.focus_next_control(),
        KeyCode::Char(' ') => app.press_focused_control(),

        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.search_input = app.filters.search.clone().unwrap_or_default();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, Task, TaskList};
    use crate::model::Config;
    use crate::query::QueryParams;
    use crate::tui::input::handle_key;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(n: usize) -> App {
        let tasks = (0..n)
            .map(|i| Task {
                header: format!("задача {i}"),
                text: String::new(),
                priority: Priority::Medium,
                is_done: false,
                completion_time: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i as i64),
                create_time: None,
                engineers: Vec::new(),
                tags: Vec::new(),
            })
            .collect();
        App::new(TaskList { tasks }, Config::default(), QueryParams::new())
    }

    #[test]
    fn j_and_k_move_cursor_within_bounds() {
        let mut app = app_with(2);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn enter_opens_detail_for_selected_task() {
        let mut app = app_with(3);
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Enter));
        // Default sort is newest due date first, so row 1 is task index 1
        assert_eq!(app.view, View::Detail(app.visible[1]));
    }

    #[test]
    fn enter_on_empty_list_is_a_noop() {
        let mut app = app_with(0);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.view, View::List);
    }

    #[test]
    fn slash_enters_search_with_previous_pattern() {
        let mut app = app_with(1);
        app.query.set(crate::query::SEARCH, "линк");
        app.apply_filters();
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        assert_eq!(app.search_input, "линк");
    }

    #[test]
    fn tab_cycles_focus_and_space_presses() {
        let mut app = app_with(2);
        let controls = crate::tui::tooltip::CONTROLS.len();
        for _ in 0..controls {
            handle_key(&mut app, key(KeyCode::Tab));
        }
        assert_eq!(app.focused_control, 0);
        // First control is the active-only button
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.query.get(crate::query::SHOW_DONE_TASK), Some("false"));
    }

    #[test]
    fn help_overlay_swallows_keys_until_dismissed() {
        let mut app = app_with(2);
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
