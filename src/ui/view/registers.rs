use ratatui::Frame;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

use super::App;
use super::formatting::{format_pc, format_word};

const HALF: usize = 16;

pub(super) fn render_registers(f: &mut Frame, area: Rect, app: &App) {
    let block = register_block(app);
    let rows = (0..HALF).map(|i| register_row(i, app));
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Length(4),
            Constraint::Length(12),
        ],
    )
    .block(block);
    f.render_widget(table, area);
}

fn register_block(app: &App) -> Block<'static> {
    let pc = app.session.state().pc();
    let style = if pc != app.session.prev_pc() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_type(BorderType::Rounded)
        .title(Line::from(vec![
            Span::raw("Registers  PC "),
            Span::styled(format_pc(pc, app.fmt_mode), style),
        ]))
}

fn register_row(row: usize, app: &App) -> Row<'static> {
    let mut cells = Vec::with_capacity(4);
    for index in [row, row + HALF] {
        let (label, value, style) = register_entry(index, app);
        cells.push(Cell::from(label).style(style));
        cells.push(Cell::from(value).style(style));
    }
    Row::new(cells)
}

fn register_entry(index: usize, app: &App) -> (String, String, Style) {
    let value = app.session.state().registers()[index];
    let changed = value != app.session.prev_registers()[index];
    let style = if changed {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    (format!("${index}"), format_word(value, app.fmt_mode), style)
}
