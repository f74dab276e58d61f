use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};
use crate::tui::tooltip::CONTROLS;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            pad_with_hint(&mut spans, "Enter искать  Esc отмена", width, app);
            Line::from(spans)
        }
        Mode::Navigate => {
            // Tooltip of the focused control, when it has one
            let tooltip = CONTROLS
                .get(app.focused_control)
                .and_then(|c| app.tooltips.get(c.id));
            match tooltip {
                Some(tip) => {
                    let mut spans = vec![Span::styled(
                        format!(" {tip}"),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )];
                    let hint = match app.view {
                        View::List => "Tab фокус  Space нажать  ? помощь",
                        View::Detail(_) => "Enter свернуть/развернуть  Esc назад",
                    };
                    pad_with_hint(&mut spans, hint, width, app);
                    Line::from(spans)
                }
                None if app.config.ui.show_key_hints => {
                    let mut spans = Vec::new();
                    let hint = "j/k перемещение  Enter открыть  / поиск  q выход";
                    pad_with_hint(&mut spans, hint, width, app);
                    Line::from(spans)
                }
                None => Line::from(Span::styled(
                    " ".repeat(width),
                    Style::default().bg(bg),
                )),
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align a dim key hint after the given spans, padding with spaces.
fn pad_with_hint(spans: &mut Vec<Span<'_>>, hint: &str, width: usize, app: &App) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
