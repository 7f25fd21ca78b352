use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;

const PROMPT: &str = "> ";

pub(crate) fn render_prompt(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Instruction")
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Yellow)),
        Span::raw(app.input.as_str()),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);

    let x = inner.x + (PROMPT.len() + app.cursor) as u16;
    f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
}
