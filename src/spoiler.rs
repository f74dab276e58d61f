//! Fold state for long task descriptions.
//!
//! A description longer than [`FOLD_LIMIT`] effective characters gets a
//! precomputed truncated rendering and a toggle control; shorter text is
//! always shown in full and the control stays hidden. The decision is made
//! once, at construction.

/// Character budget before a description folds.
pub const FOLD_LIMIT: usize = 500;

/// Toggle label while collapsed (more text available).
pub const LABEL_EXPAND: &str = "Показать больше";
/// Toggle label while expanded.
pub const LABEL_COLLAPSE: &str = "Скрыть";

/// Current display mode of a spoiler block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Collapsed,
    Expanded,
}

/// Per-description fold state. Holds both renderings so toggling never
/// recomputes anything.
#[derive(Debug, Clone)]
pub struct Spoiler {
    full: String,
    truncated: Option<String>,
    mode: DisplayMode,
}

/// Effective length of `text`: `char` count with `\n` weighted as 2, to
/// approximate the rendered cost of a line break.
pub fn effective_len(text: &str) -> usize {
    text.chars().map(|c| if c == '\n' { 2 } else { 1 }).sum()
}

/// First `limit` chars plus `"..."`. Slices on `char` boundaries.
fn truncate_chars(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}

impl Spoiler {
    /// Build the fold state for a description. Collapsibility is decided
    /// here and never re-evaluated.
    pub fn new(text: impl Into<String>) -> Self {
        let full = text.into();
        let truncated = if effective_len(&full) > FOLD_LIMIT {
            Some(truncate_chars(&full, FOLD_LIMIT))
        } else {
            None
        };
        Spoiler {
            full,
            truncated,
            mode: DisplayMode::Collapsed,
        }
    }

    /// Whether the toggle control is shown at all.
    pub fn is_collapsible(&self) -> bool {
        self.truncated.is_some()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The text currently on screen: truncated rendering while collapsed
    /// (when one exists), full text otherwise.
    pub fn display_text(&self) -> &str {
        match (&self.truncated, self.mode) {
            (Some(t), DisplayMode::Collapsed) => t,
            _ => &self.full,
        }
    }

    /// Label for the toggle control in the current mode.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            DisplayMode::Collapsed => LABEL_EXPAND,
            DisplayMode::Expanded => LABEL_COLLAPSE,
        }
    }

    /// Flip collapsed ⇄ expanded. No-op for text that never folds.
    pub fn toggle(&mut self) {
        if !self.is_collapsible() {
            return;
        }
        self.mode = match self.mode {
            DisplayMode::Collapsed => DisplayMode::Expanded,
            DisplayMode::Expanded => DisplayMode::Collapsed,
        };
    }
}
