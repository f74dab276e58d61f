use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from taskview.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Who is looking at the list (used by the my-tasks filter)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Engineer name matched against task assignments
    #[serde(default)]
    pub engineer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides by theme key, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Show key hints in the status row when no tooltip is active
    #[serde(default)]
    pub show_key_hints: bool,
}
