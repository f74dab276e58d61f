use std::path::Path;

use pretty_assertions::assert_eq;

use taskview::io::task_io::load_tasks;
use taskview::model::Config;
use taskview::query::QueryParams;
use taskview::spoiler::{LABEL_COLLAPSE, LABEL_EXPAND};
use taskview::tui::app::{App, View};

/// Helper: load the shared fixture task list
fn fixture_app(query: &str) -> App {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tasks.json");
    let tasks = load_tasks(&path).unwrap_or_else(|e| panic!("could not load fixture: {e}"));
    App::new(tasks, Config::default(), QueryParams::parse(query))
}

#[test]
fn fresh_view_shows_only_active_tasks_newest_first() {
    let app = fixture_app("");
    assert_eq!(app.tasks.len(), 3);
    // Task 1 is done and hidden until show_done_task=true; due dates 09.03, 05.03
    assert_eq!(app.visible, vec![2, 0]);
    assert_eq!(app.done_count, 1);
    assert_eq!(app.not_done_count, 2);
}

#[test]
fn done_tasks_appear_only_with_an_explicit_param() {
    let app = fixture_app("show_done_task=true");
    assert_eq!(app.visible, vec![2, 0, 1]);
}

#[test]
fn only_the_long_description_folds() {
    let app = fixture_app("");
    assert!(app.spoilers[0].is_collapsible());
    assert!(!app.spoilers[1].is_collapsible());
    assert!(!app.spoilers[2].is_collapsible());

    // Initial rendering: first 500 chars + "..."
    let full = app.tasks.tasks[0].text.clone();
    let expected: String = full.chars().take(500).collect::<String>() + "...";
    assert_eq!(app.spoilers[0].display_text(), expected);
    assert_eq!(app.spoilers[0].toggle_label(), LABEL_EXPAND);
}

#[test]
fn fold_toggle_round_trip_through_the_app() {
    let mut app = fixture_app("");
    app.view = View::Detail(0);

    app.toggle_detail_spoiler();
    assert_eq!(app.spoilers[0].display_text(), app.tasks.tasks[0].text);
    assert_eq!(app.spoilers[0].toggle_label(), LABEL_COLLAPSE);

    app.toggle_detail_spoiler();
    let expected: String =
        app.tasks.tasks[0].text.chars().take(500).collect::<String>() + "...";
    assert_eq!(app.spoilers[0].display_text(), expected);
}

#[test]
fn filter_buttons_rewrite_the_query_and_the_list() {
    let mut app = fixture_app("");

    app.press_done_only();
    assert_eq!(app.visible, vec![1]);
    assert_eq!(
        app.query.to_query_string(),
        "show_done_task=true&show_active_task=false"
    );

    app.press_active_only();
    assert_eq!(app.visible, vec![2, 0]);

    app.press_all_tasks();
    assert_eq!(app.visible, vec![2, 0, 1]);
}

#[test]
fn filter_round_trip_returns_to_the_initial_view() {
    let mut app = fixture_app("");
    let initial = app.visible.clone();
    app.press_done_only();
    app.press_active_only();
    assert_eq!(app.visible, initial);
}

#[test]
fn startup_filter_string_behaves_like_a_shared_url() {
    let app = fixture_app("show_my_tasks_only=true&sort_order=asc");
    // No viewer configured: my-tasks yields nothing
    assert!(app.visible.is_empty());

    let mut app = fixture_app("show_my_tasks_only=true&show_done_task=true&sort_order=asc");
    app.config.viewer.engineer = Some("Петров".to_string());
    app.apply_filters();
    // Петров's tasks, oldest due date first
    assert_eq!(app.visible, vec![1, 2]);
}

#[test]
fn search_narrows_across_header_and_body() {
    let mut app = fixture_app("search=прошивк");
    assert_eq!(app.visible, vec![2]);

    // Body text matches too
    app.query.set(taskview::query::SEARCH, "бэкап");
    app.apply_filters();
    assert_eq!(app.visible, vec![2]);

    app.query.set(taskview::query::SEARCH, "ГРОЗ");
    app.apply_filters();
    // case-insensitive, body of task 0 mentions "после грозы"
    assert_eq!(app.visible, vec![0]);
}
