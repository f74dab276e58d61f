use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::SortOrder;
use crate::tui::app::App;
use crate::tui::tooltip::{CONTROLS, ControlId};

/// Whether a control is currently "on" for highlighting purposes
fn control_is_on(app: &App, id: ControlId) -> bool {
    match id {
        ControlId::ActiveOnly => app.filters.show_active_task && !app.filters.show_done_task,
        ControlId::DoneOnly => app.filters.show_done_task && !app.filters.show_active_task,
        ControlId::AllTasks => app.filters.show_active_task && app.filters.show_done_task,
        ControlId::MyTasks => app.filters.show_my_tasks_only,
        ControlId::SortOrder => app.filters.sort_order == SortOrder::Asc,
        ControlId::Search => app.filters.search.is_some(),
    }
}

/// Render the filter bar: one row of buttons plus a separator row with the
/// done / not-done counters.
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let theme = &app.theme;

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, control) in CONTROLS.iter().enumerate() {
        let on = control_is_on(app, control.id);
        let focused = i == app.focused_control;

        let mut style = Style::default().bg(bg).fg(if on {
            theme.highlight
        } else {
            theme.text
        });
        if focused {
            style = style
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD);
        }

        let label = match control.id {
            // The sort button shows its direction
            ControlId::SortOrder => {
                if app.filters.sort_order == SortOrder::Asc {
                    "Срок ↑"
                } else {
                    "Срок ↓"
                }
            }
            _ => control.label,
        };
        spans.push(Span::styled(format!("[{label}]"), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    if area.height == 0 {
        return;
    }
    let buttons = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(
        buttons,
        Rect {
            height: 1,
            ..area
        },
    );

    if area.height < 2 {
        return;
    }
    let counters = format!(
        " выполнено: {}  в работе: {}",
        app.done_count, app.not_done_count
    );
    let counter_line = Line::from(vec![
        Span::styled(counters, Style::default().fg(theme.dim).bg(bg)),
    ]);
    frame.render_widget(
        Paragraph::new(counter_line).style(Style::default().bg(bg)),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}
