use ratatui::{
    Frame,
    prelude::*,
    widgets::Paragraph,
};

pub(super) use super::app::{App, FormatMode};

mod components;
mod details;
mod formatting;
mod memory;
mod registers;

use components::{console::render_console, prompt::render_prompt};
use details::render_details;
use memory::render_memory;
use registers::render_registers;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(18),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(size);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(40)])
        .split(chunks[0]);
    render_registers(f, top[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(top[1]);
    render_details(f, right[0], app);
    render_memory(f, right[1], app);

    render_console(f, chunks[1], app);
    render_prompt(f, chunks[2], app);

    let fmt = match app.fmt_mode {
        FormatMode::Dec => "DEC",
        FormatMode::Hex => "HEX",
    };
    let status = format!(
        "Enter=run  Up/Down=history  PgUp/PgDn=memory  F2=format ({fmt})  Esc=quit  |  help, regs, mem <a> <b>, set $r <v>, reset"
    );
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
