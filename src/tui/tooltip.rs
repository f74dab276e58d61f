//! Filter-bar controls and their tooltips.
//!
//! Controls are static markup; the ones carrying a hint get tooltip behavior
//! attached in a single pass at startup. Controls without a hint are skipped
//! silently and never looked at again.

use indexmap::IndexMap;

/// Identity of a filter-bar control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    ActiveOnly,
    AllTasks,
    DoneOnly,
    MyTasks,
    SortOrder,
    Search,
}

/// A clickable control in the filter bar
#[derive(Debug, Clone, Copy)]
pub struct Control {
    pub id: ControlId,
    pub label: &'static str,
    /// Tooltip text; `None` means no tooltip behavior is attached
    pub hint: Option<&'static str>,
}

/// The filter bar, in display order
pub const CONTROLS: &[Control] = &[
    Control {
        id: ControlId::ActiveOnly,
        label: "Активные",
        hint: Some("Показать только активные задачи"),
    },
    Control {
        id: ControlId::AllTasks,
        label: "Все",
        hint: Some("Показать активные и завершенные задачи"),
    },
    Control {
        id: ControlId::DoneOnly,
        label: "Завершенные",
        hint: Some("Показать только завершенные задачи"),
    },
    Control {
        id: ControlId::MyTasks,
        label: "Мои",
        hint: Some("Показывать только назначенные мне задачи"),
    },
    Control {
        id: ControlId::SortOrder,
        label: "Срок",
        hint: Some("Порядок сортировки по сроку выполнения"),
    },
    // The search box explains itself in the status row
    Control {
        id: ControlId::Search,
        label: "Поиск",
        hint: None,
    },
];

/// Tooltips collected from the controls at startup
#[derive(Debug, Clone)]
pub struct TooltipRegistry {
    tips: IndexMap<ControlId, &'static str>,
}

impl TooltipRegistry {
    /// One pass over the controls, attaching tooltip behavior where a hint
    /// is present.
    pub fn init(controls: &[Control]) -> Self {
        let tips = controls
            .iter()
            .filter_map(|c| c.hint.map(|h| (c.id, h)))
            .collect();
        TooltipRegistry { tips }
    }

    pub fn get(&self, id: ControlId) -> Option<&'static str> {
        self.tips.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Tooltips in the order their controls were declared
    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &'static str)> + '_ {
        self.tips.iter().map(|(id, hint)| (*id, *hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_collects_only_controls_with_hints() {
        let registry = TooltipRegistry::init(CONTROLS);
        let with_hints = CONTROLS.iter().filter(|c| c.hint.is_some()).count();
        assert_eq!(registry.len(), with_hints);
        assert!(registry.get(ControlId::ActiveOnly).is_some());
        assert_eq!(registry.get(ControlId::Search), None);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let registry = TooltipRegistry::init(CONTROLS);
        let expected: Vec<ControlId> = CONTROLS
            .iter()
            .filter(|c| c.hint.is_some())
            .map(|c| c.id)
            .collect();
        let got: Vec<ControlId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn empty_control_set_is_a_noop() {
        let registry = TooltipRegistry::init(&[]);
        assert!(registry.is_empty());
    }
}
