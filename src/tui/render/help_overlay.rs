use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::tooltip::CONTROLS;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Клавиши", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Список", header_style)));
    add_binding(&mut lines, " ↑↓/jk", "перемещение по списку", key_style, desc_style);
    add_binding(&mut lines, " g/G", "в начало / в конец", key_style, desc_style);
    add_binding(&mut lines, " Enter", "открыть задачу", key_style, desc_style);
    add_binding(&mut lines, " /", "поиск", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Фильтры", header_style)));
    add_binding(&mut lines, " a", "только активные", key_style, desc_style);
    add_binding(&mut lines, " d", "только завершенные", key_style, desc_style);
    add_binding(&mut lines, " b", "обе группы", key_style, desc_style);
    add_binding(&mut lines, " m", "только мои", key_style, desc_style);
    add_binding(&mut lines, " o", "порядок сортировки", key_style, desc_style);
    add_binding(&mut lines, " Tab/Space", "фокус и нажатие кнопок", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Кнопки", header_style)));
    for (id, hint) in app.tooltips.iter() {
        let label = CONTROLS
            .iter()
            .find(|c| c.id == id)
            .map_or("", |c| c.label);
        add_binding(&mut lines, &format!(" {label}"), hint, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Задача", header_style)));
    add_binding(&mut lines, " Enter", "свернуть / развернуть текст", key_style, desc_style);
    add_binding(&mut lines, " Esc", "назад к списку", key_style, desc_style);
    lines.push(Line::from(""));
    add_binding(&mut lines, " q", "выход", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(lines: &mut Vec<Line>, key: &str, desc: &str, key_style: Style, desc_style: Style) {
    let padded = format!("{key:<12}");
    lines.push(Line::from(vec![
        Span::styled(padded, key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// A centered rect taking the given percentages of the area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
