use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::App;

/// Render the detail view for one task: header, metadata, the (possibly
/// folded) description, and the toggle control when the description folds.
pub fn render_detail_view(frame: &mut Frame, app: &App, task_idx: usize, area: Rect) {
    let bg = app.theme.background;

    let task = match app.tasks.get(task_idx) {
        Some(t) => t,
        None => return,
    };
    let spoiler = &app.spoilers[task_idx];

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", task.header),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    let mut meta = format!(
        " срок: {}",
        task.completion_time.format("%d.%m.%Y %H:%M")
    );
    if !task.engineers.is_empty() {
        meta.push_str(&format!("  исполнители: {}", task.engineers.join(", ")));
    }
    if !task.tags.is_empty() {
        meta.push_str(&format!("  #{}", task.tags.join(" #")));
    }
    lines.push(Line::from(Span::styled(
        meta,
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    let body_style = Style::default().fg(app.theme.text).bg(bg);
    for text_line in spoiler.display_text().lines() {
        lines.push(Line::from(Span::styled(
            format!(" {text_line}"),
            body_style,
        )));
    }

    // Toggle control: only rendered when the description actually folds
    if spoiler.is_collapsible() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" [{}]", spoiler.toggle_label()),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
