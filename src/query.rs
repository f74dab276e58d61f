//! Filter query parameters.
//!
//! The filter bar's state is an ordered set of `name=value` parameters,
//! serialized in query-string form. Toggling a filter rewrites the
//! parameters; the app then rebuilds the visible task list from them.

use indexmap::IndexMap;

/// Parameter names the filter buttons write.
pub const SHOW_ACTIVE_TASK: &str = "show_active_task";
pub const SHOW_DONE_TASK: &str = "show_done_task";
pub const SHOW_MY_TASKS_ONLY: &str = "show_my_tasks_only";
pub const SORT_ORDER: &str = "sort_order";
pub const SEARCH: &str = "search";

/// Ordered `name=value` parameter set. Insertion order is preserved so a
/// serialized string is stable across toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: IndexMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        QueryParams::default()
    }

    /// Parse a query string (`a=1&b=two`, leading `?` allowed). Pairs
    /// without `=` are kept with an empty value; empty segments are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = IndexMap::new();
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (name, value) = match pair.split_once('=') {
                Some((n, v)) => (n, v),
                None => (pair, ""),
            };
            let name = urlencoding::decode(name)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| name.to_string());
            let value = urlencoding::decode(value)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| value.to_string());
            params.insert(name, value);
        }
        QueryParams { params }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.params.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// `true` iff the parameter is present with the literal value `"true"`.
    pub fn is_true(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.params.shift_remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serialize as `name=value&...` with percent-encoding, in insertion
    /// order. No leading `?`.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(n, v)| format!("{}={}", urlencoding::encode(n), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Rewrite the done/active parameters for one filter-button press.
///
/// The active button always shows active tasks and hides done ones; the done
/// button does the opposite. The middle ("all") button passes the other
/// group's name and value: if either group is currently hidden, both are
/// turned back on.
pub fn toggle_filter(
    params: &mut QueryParams,
    filter_name: &str,
    current_value: bool,
    second_filter: Option<(&str, bool)>,
) {
    if filter_name == SHOW_ACTIVE_TASK {
        params.set(SHOW_ACTIVE_TASK, "true");
        params.set(SHOW_DONE_TASK, "false");
    }

    if filter_name == SHOW_DONE_TASK {
        params.set(SHOW_DONE_TASK, "true");
        params.set(SHOW_ACTIVE_TASK, "false");
    }

    if let Some((_, second_value)) = second_filter {
        if !current_value || !second_value {
            params.set(SHOW_ACTIVE_TASK, "true");
            params.set(SHOW_DONE_TASK, "true");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_serialize_round_trip() {
        let q = QueryParams::parse("show_active_task=true&sort_order=desc");
        assert_eq!(q.get(SHOW_ACTIVE_TASK), Some("true"));
        assert_eq!(q.get(SORT_ORDER), Some("desc"));
        assert_eq!(q.to_query_string(), "show_active_task=true&sort_order=desc");
    }

    #[test]
    fn parse_tolerates_leading_question_mark_and_blanks() {
        let q = QueryParams::parse("?a=1&&b");
        assert_eq!(q.get("a"), Some("1"));
        assert_eq!(q.get("b"), Some(""));
    }

    #[test]
    fn percent_encoding_round_trips() {
        let mut q = QueryParams::new();
        q.set(SEARCH, "сеть и связь");
        let s = q.to_query_string();
        assert!(!s.contains(' '));
        let back = QueryParams::parse(&s);
        assert_eq!(back.get(SEARCH), Some("сеть и связь"));
    }

    #[test]
    fn set_preserves_insertion_order() {
        let mut q = QueryParams::new();
        q.set("b", "2");
        q.set("a", "1");
        q.set("b", "3"); // overwrite keeps original position
        assert_eq!(q.to_query_string(), "b=3&a=1");
    }

    #[test]
    fn active_button_shows_active_hides_done() {
        let mut q = QueryParams::new();
        toggle_filter(&mut q, SHOW_ACTIVE_TASK, true, None);
        assert_eq!(q.get(SHOW_ACTIVE_TASK), Some("true"));
        assert_eq!(q.get(SHOW_DONE_TASK), Some("false"));
    }

    #[test]
    fn done_button_shows_done_hides_active() {
        let mut q = QueryParams::new();
        toggle_filter(&mut q, SHOW_DONE_TASK, false, None);
        assert_eq!(q.get(SHOW_DONE_TASK), Some("true"));
        assert_eq!(q.get(SHOW_ACTIVE_TASK), Some("false"));
    }

    #[test]
    fn all_button_restores_both_when_one_hidden() {
        let mut q = QueryParams::parse("show_active_task=true&show_done_task=false");
        toggle_filter(&mut q, "show_all_tasks", true, Some((SHOW_DONE_TASK, false)));
        assert_eq!(q.get(SHOW_ACTIVE_TASK), Some("true"));
        assert_eq!(q.get(SHOW_DONE_TASK), Some("true"));
    }

    #[test]
    fn all_button_noop_when_both_shown() {
        let mut q = QueryParams::new();
        toggle_filter(&mut q, "show_all_tasks", true, Some((SHOW_DONE_TASK, true)));
        assert_eq!(q.get(SHOW_ACTIVE_TASK), None);
        assert_eq!(q.get(SHOW_DONE_TASK), None);
    }

    #[test]
    fn is_true_requires_literal_true() {
        let q = QueryParams::parse("show_my_tasks_only=True&sort_order=asc");
        assert!(!q.is_true(SHOW_MY_TASKS_ONLY));
        assert!(!q.is_true(SORT_ORDER));
        assert!(QueryParams::parse("show_my_tasks_only=true").is_true(SHOW_MY_TASKS_ONLY));
    }
}
