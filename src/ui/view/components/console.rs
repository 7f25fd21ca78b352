use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::console::LineKind;

pub(crate) fn render_console(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Console - Ctrl+Up/Down scroll, Ctrl+L clear")
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    let h = inner.height as usize;
    let total = app.console.lines.len();
    let max_scroll = total.saturating_sub(h);
    let scroll = app.console.scroll.min(max_scroll);
    let start = total.saturating_sub(h + scroll);
    let end = total.saturating_sub(scroll);
    let lines: Vec<Line> = app.console.lines[start..end]
        .iter()
        .map(|l| {
            let text = l.text.as_str();
            match l.kind {
                LineKind::Info => Line::from(text),
                LineKind::Warning => Line::styled(text, Style::default().fg(Color::Yellow)),
                LineKind::Error => Line::styled(text, Style::default().fg(Color::Red)),
            }
        })
        .collect();
    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
