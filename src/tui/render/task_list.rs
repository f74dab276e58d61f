use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Render the filtered task list
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible.is_empty() {
        let empty = Paragraph::new(" Нет задач по текущему фильтру")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let search_re = app.active_search_re();
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (row, &task_idx) in app
        .visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let task = &app.tasks.tasks[task_idx];
        let selected = row == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let state_mark = if task.is_done { "[x]" } else { "[ ]" };
        let state_color = if task.is_done {
            app.theme.green
        } else {
            app.theme.text
        };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            format!(" {} ", task.priority.marker()),
            Style::default()
                .fg(app.theme.priority_color(task.priority))
                .bg(row_bg),
        ));
        spans.push(Span::styled(
            format!("{state_mark} "),
            Style::default().fg(state_color).bg(row_bg),
        ));

        let date = task.completion_time.format("%d.%m").to_string();
        spans.push(Span::styled(
            format!("{date} "),
            Style::default().fg(app.theme.cyan).bg(row_bg),
        ));

        let header_style = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);
        push_highlighted_spans(
            &mut spans,
            &task.header,
            header_style,
            match_style,
            search_re.as_ref(),
        );

        // One-line body preview in the space that remains
        let used: usize = spans
            .iter()
            .map(|s| unicode::display_width(&s.content))
            .sum();
        if width > used + 4 && !task.text.is_empty() {
            let preview =
                unicode::truncate_to_width(&unicode::one_line(&task.text), width - used - 4);
            spans.push(Span::styled(
                format!("  {preview}"),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }

        let mut line = Line::from(spans);
        if selected {
            line = line.style(Style::default().bg(row_bg).add_modifier(Modifier::BOLD));
        }
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
