use ratatui::Frame;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use mipsim::session::dump::instruction_lines;

use super::App;

pub(super) fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_type(BorderType::Rounded)
        .title("Last instruction");

    let lines: Vec<Line> = match app.session.last_instruction() {
        Some(inst) => {
            let mut lines = vec![Line::styled(
                inst.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            // fields two per line to fit the panel
            let fields = instruction_lines(inst);
            lines.extend(fields.chunks(2).map(|pair| Line::from(pair.join("   "))));
            lines
        }
        None => vec![Line::styled(
            "nothing executed yet",
            Style::default().fg(Color::DarkGray),
        )],
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}
