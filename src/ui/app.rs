use super::{console::Console, input::handle_key, report::outcome_lines, view::ui};
use crossterm::event::{self, Event, KeyEventKind};
use mipsim::mips::arch::MEMORY_WORDS;
use mipsim::session::{Outcome, Session};
use ratatui::DefaultTerminal;
use std::{io, time::Duration};

#[derive(PartialEq, Eq, Copy, Clone)]
pub(super) enum FormatMode {
    Dec,
    Hex,
}

pub struct App {
    pub(super) session: Session,
    pub(super) console: Console,

    // Prompt line
    pub(super) input: String,
    pub(super) cursor: usize, // in chars
    pub(super) history: Vec<String>,
    pub(super) history_pos: Option<usize>,

    // Memory window: first word shown
    pub(super) mem_view_addr: usize,
    pub(super) fmt_mode: FormatMode,

    pub(super) should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let mut console = Console::default();
        console.push_line("MIPS simulator - type 'help' for the instruction list, 'sair' to quit");
        Self {
            session: Session::new(),
            console,
            input: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_pos: None,
            mem_view_addr: 0,
            fmt_mode: FormatMode::Dec,
            should_quit: false,
        }
    }

    pub(super) fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.history_pos = None;
        if !line.trim().is_empty() && self.history.last() != Some(&line) {
            self.history.push(line.clone());
        }

        self.console.push_line(format!("> {line}"));
        let outcome = self.session.submit(&line);
        self.console.extend(outcome_lines(&self.session, &outcome, false));
        match outcome {
            Outcome::Quit => self.should_quit = true,
            Outcome::Memory { start, .. } => self.mem_view_addr = start - start % 4,
            Outcome::Reset => self.mem_view_addr = 0,
            _ => {}
        }
    }

    pub(super) fn scroll_memory(&mut self, rows: isize) {
        let last_row = MEMORY_WORDS - 4;
        let addr = self.mem_view_addr as isize + rows * 4;
        self.mem_view_addr = addr.clamp(0, last_row as isize) as usize;
    }

    pub(super) fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            Some(p) => p.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.history_pos = Some(pos);
        self.set_input(self.history[pos].clone());
    }

    pub(super) fn history_next(&mut self) {
        match self.history_pos {
            Some(p) if p + 1 < self.history.len() => {
                self.history_pos = Some(p + 1);
                self.set_input(self.history[p + 1].clone());
            }
            Some(_) => {
                self.history_pos = None;
                self.set_input(String::new());
            }
            None => {}
        }
    }

    fn set_input(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.input = text;
    }
}

pub fn run(terminal: &mut DefaultTerminal, mut app: App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, &app))?;
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(&mut app, key);
        }
    }
    Ok(())
}
