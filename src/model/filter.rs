//! Filter state and the visible-list pipeline.
//!
//! `FilterState` is the parsed view of the query parameters; `apply` turns
//! the full task list into the indices that are currently visible. Every
//! filter mutation re-runs `apply` — the equivalent of reloading the page
//! with a new query string.

use regex::Regex;

use crate::model::task::TaskList;
use crate::query::{
    QueryParams, SEARCH, SHOW_ACTIVE_TASK, SHOW_DONE_TASK, SHOW_MY_TASKS_ONLY, SORT_ORDER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Parsed filter parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub show_my_tasks_only: bool,
    pub sort_order: SortOrder,
    pub show_active_task: bool,
    pub show_done_task: bool,
    pub search: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            show_my_tasks_only: false,
            sort_order: SortOrder::Desc,
            show_active_task: true,
            show_done_task: false,
            search: None,
        }
    }
}

impl FilterState {
    /// Read the filter parameters out of a query set. Absent parameters take
    /// the defaults: only active tasks shown, newest due date first.
    pub fn from_query(params: &QueryParams) -> Self {
        FilterState {
            show_my_tasks_only: params.is_true(SHOW_MY_TASKS_ONLY),
            sort_order: match params.get(SORT_ORDER) {
                Some("asc") => SortOrder::Asc,
                _ => SortOrder::Desc,
            },
            // An absent parameter forces active on and done off; a present
            // one counts only when it says "true"
            show_active_task: params.get(SHOW_ACTIVE_TASK).map_or(true, |v| v == "true"),
            show_done_task: params.get(SHOW_DONE_TASK).map_or(false, |v| v == "true"),
            search: params
                .get(SEARCH)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }

    /// Case-insensitive search regex, escaping the pattern if it fails to
    /// compile as-is.
    fn search_re(&self) -> Option<Regex> {
        let pattern = self.search.as_deref()?;
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Indices into `list.tasks` that pass the filters, sorted by due date.
    ///
    /// `me` is the viewer's engineer name for the my-tasks restriction; a
    /// viewer with no name sees nothing while that restriction is on.
    pub fn apply(&self, list: &TaskList, me: Option<&str>) -> Vec<usize> {
        let re = self.search_re();
        let mut visible: Vec<usize> = list
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                if t.is_done && !self.show_done_task {
                    return false;
                }
                if !t.is_done && !self.show_active_task {
                    return false;
                }
                if self.show_my_tasks_only {
                    match me {
                        Some(name) => {
                            if !t.assigned_to(name) {
                                return false;
                            }
                        }
                        None => return false,
                    }
                }
                if let Some(re) = &re {
                    if !re.is_match(&t.header) && !re.is_match(&t.text) {
                        return false;
                    }
                }
                true
            })
            .map(|(i, _)| i)
            .collect();

        visible.sort_by(|&a, &b| {
            let (ta, tb) = (&list.tasks[a], &list.tasks[b]);
            match self.sort_order {
                SortOrder::Asc => ta.completion_time.cmp(&tb.completion_time),
                SortOrder::Desc => tb.completion_time.cmp(&ta.completion_time),
            }
        });
        visible
    }

    /// Done / not-done counts over the tasks passing the non-group filters
    /// (my-tasks and search), for the filter-bar counters.
    pub fn count_by_done(&self, list: &TaskList, me: Option<&str>) -> (usize, usize) {
        let mut all = self.clone();
        all.show_active_task = true;
        all.show_done_task = true;
        let visible = all.apply(list, me);
        let done = visible
            .iter()
            .filter(|&&i| list.tasks[i].is_done)
            .count();
        (done, visible.len() - done)
    }
}
