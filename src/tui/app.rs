use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::io::config_io::read_config;
use crate::io::task_io::load_tasks;
use crate::model::{Config, FilterState, SortOrder, TaskList};
use crate::query::{self, QueryParams, SEARCH, SHOW_ACTIVE_TASK, SHOW_DONE_TASK, SHOW_MY_TASKS_ONLY, SORT_ORDER};
use crate::spoiler::Spoiler;

use super::input;
use super::render;
use super::theme::Theme;
use super::tooltip::{CONTROLS, ControlId, TooltipRegistry};

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The filtered task list
    List,
    /// Detail for one task (index into the full task list)
    Detail(usize),
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub config: Config,
    pub theme: Theme,
    /// The filter bar's backing parameters (what the URL held originally)
    pub query: QueryParams,
    /// Parsed view of `query`, refreshed by `apply_filters`
    pub filters: FilterState,
    /// Indices into `tasks.tasks` passing the filters, in display order
    pub visible: Vec<usize>,
    pub done_count: usize,
    pub not_done_count: usize,
    /// Fold state per task, parallel to `tasks.tasks`. Built once here;
    /// collapsibility is never re-evaluated.
    pub spoilers: Vec<Spoiler>,
    pub tooltips: TooltipRegistry,
    /// Focused filter-bar control (index into CONTROLS)
    pub focused_control: usize,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into `visible`
    pub cursor: usize,
    /// First visible row of the list view
    pub scroll_offset: usize,
    /// Scroll offset of the detail view
    pub detail_scroll: usize,
    pub show_help: bool,
    /// Search mode: current query being typed
    pub search_input: String,
}

impl App {
    pub fn new(tasks: TaskList, config: Config, initial_query: QueryParams) -> Self {
        let theme = Theme::from_config(&config.ui);
        let spoilers = tasks
            .tasks
            .iter()
            .map(|t| Spoiler::new(t.text.clone()))
            .collect();
        let tooltips = TooltipRegistry::init(CONTROLS);

        let mut app = App {
            tasks,
            config,
            theme,
            query: initial_query,
            filters: FilterState::default(),
            visible: Vec::new(),
            done_count: 0,
            not_done_count: 0,
            spoilers,
            tooltips,
            focused_control: 0,
            view: View::List,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            detail_scroll: 0,
            show_help: false,
            search_input: String::new(),
        };
        app.apply_filters();
        app
    }

    /// The viewer's engineer name, for the my-tasks restriction
    pub fn viewer(&self) -> Option<&str> {
        self.config.viewer.engineer.as_deref()
    }

    /// Re-derive filter state from the query parameters and rebuild the
    /// visible list — the equivalent of reloading the page with a new URL.
    pub fn apply_filters(&mut self) {
        self.filters = FilterState::from_query(&self.query);
        self.visible = self.filters.apply(&self.tasks, self.viewer());
        let (done, not_done) = self.filters.count_by_done(&self.tasks, self.viewer());
        self.done_count = done;
        self.not_done_count = not_done;
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    /// "Активные" button: always show active, hide done
    pub fn press_active_only(&mut self) {
        query::toggle_filter(
            &mut self.query,
            SHOW_ACTIVE_TASK,
            self.filters.show_active_task,
            None,
        );
        self.apply_filters();
    }

    /// "Завершенные" button: always show done, hide active
    pub fn press_done_only(&mut self) {
        query::toggle_filter(
            &mut self.query,
            SHOW_DONE_TASK,
            self.filters.show_done_task,
            None,
        );
        self.apply_filters();
    }

    /// Middle button: bring both groups back if either is hidden
    pub fn press_all_tasks(&mut self) {
        query::toggle_filter(
            &mut self.query,
            "show_all_tasks",
            self.filters.show_active_task,
            Some((SHOW_DONE_TASK, self.filters.show_done_task)),
        );
        self.apply_filters();
    }

    /// "Мои" switch: flip the my-tasks restriction
    pub fn press_my_tasks(&mut self) {
        let flipped = !self.filters.show_my_tasks_only;
        self.query
            .set(SHOW_MY_TASKS_ONLY, if flipped { "true" } else { "false" });
        self.apply_filters();
    }

    /// "Срок" switch: flip the due-date sort order
    pub fn press_sort_order(&mut self) {
        let next = match self.filters.sort_order {
            SortOrder::Desc => "asc",
            SortOrder::Asc => "desc",
        };
        self.query.set(SORT_ORDER, next);
        self.apply_filters();
    }

    /// Press whichever control currently has focus
    pub fn press_focused_control(&mut self) {
        match CONTROLS[self.focused_control].id {
            ControlId::ActiveOnly => self.press_active_only(),
            ControlId::AllTasks => self.press_all_tasks(),
            ControlId::DoneOnly => self.press_done_only(),
            ControlId::MyTasks => self.press_my_tasks(),
            ControlId::SortOrder => self.press_sort_order(),
            ControlId::Search => self.mode = Mode::Search,
        }
    }

    pub fn focus_next_control(&mut self) {
        self.focused_control = (self.focused_control + 1) % CONTROLS.len();
    }

    /// Commit the typed search pattern into the query parameters
    pub fn commit_search(&mut self) {
        if self.search_input.is_empty() {
            self.query.remove(SEARCH);
        } else {
            let pattern = self.search_input.clone();
            self.query.set(SEARCH, pattern);
        }
        self.mode = Mode::Navigate;
        self.apply_filters();
    }

    /// Search regex for match highlighting in the list view
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            _ => self.filters.search.as_deref()?,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// The task index under the cursor, if any
    pub fn selected_task(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    /// Toggle the fold of the task shown in the detail view. No-op when the
    /// description never folds (the control isn't rendered either).
    pub fn toggle_detail_spoiler(&mut self) {
        if let View::Detail(idx) = self.view {
            if let Some(spoiler) = self.spoilers.get_mut(idx) {
                spoiler.toggle();
            }
        }
    }
}

/// Load everything and run the TUI
pub fn run(tasks_path: &Path, initial_query: QueryParams, assignee: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = load_tasks(tasks_path)?;
    let mut config = read_config(tasks_path)?;
    if assignee.is_some() {
        // --assignee wins over the config file
        config.viewer.engineer = assignee;
    }

    let mut app = App::new(tasks, config, initial_query);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
