use ratatui::Frame;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem};

use super::App;
use super::formatting::format_word;

const WORDS_PER_ROW: usize = 4;

pub(super) fn render_memory(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_type(BorderType::Rounded)
        .title("Memory (words) - PgUp/PgDn scroll");
    let inner = block.inner(area);
    let items = memory_items(inner, app);

    f.render_widget(block, area);
    f.render_widget(List::new(items), inner);
}

fn memory_items(inner: Rect, app: &App) -> Vec<ListItem<'static>> {
    let words = app.session.state().memory_words();
    let rows = inner.height as usize;

    (0..rows)
        .map(|r| app.mem_view_addr + r * WORDS_PER_ROW)
        .take_while(|&addr| addr < words.len())
        .map(|addr| {
            let spans: Vec<Span<'static>> = (addr..(addr + WORDS_PER_ROW).min(words.len()))
                .flat_map(|a| {
                    [
                        Span::styled(format!("[{a:4}] "), Style::default().fg(Color::DarkGray)),
                        Span::raw(format!("{:<12}", format_word(words[a], app.fmt_mode))),
                    ]
                })
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect()
}
