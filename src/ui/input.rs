use crate::ui::app::{App, FormatMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('l') if ctrl => app.console.clear(),
        KeyCode::Up if ctrl => app.console.scroll_up(1),
        KeyCode::Down if ctrl => app.console.scroll_down(1),
        KeyCode::Up => app.history_prev(),
        KeyCode::Down => app.history_next(),
        KeyCode::PageUp => app.scroll_memory(-4),
        KeyCode::PageDown => app.scroll_memory(4),
        KeyCode::F(2) => {
            app.fmt_mode = match app.fmt_mode {
                FormatMode::Dec => FormatMode::Hex,
                FormatMode::Hex => FormatMode::Dec,
            }
        }
        KeyCode::Enter => app.submit_input(),
        KeyCode::Left => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Right => app.cursor = (app.cursor + 1).min(app.input.chars().count()),
        KeyCode::Home => app.cursor = 0,
        KeyCode::End => app.cursor = app.input.chars().count(),
        KeyCode::Backspace => {
            if app.cursor > 0 {
                app.cursor -= 1;
                remove_char(&mut app.input, app.cursor);
            }
        }
        KeyCode::Delete => remove_char(&mut app.input, app.cursor),
        KeyCode::Char(c) if !ctrl => {
            let at = byte_offset(&app.input, app.cursor);
            app.input.insert(at, c);
            app.cursor += 1;
        }
        _ => {}
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}

fn remove_char(s: &mut String, at: usize) {
    let i = byte_offset(s, at);
    if i < s.len() {
        s.remove(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        s.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    #[test]
    fn typing_and_editing_the_prompt() {
        let mut app = App::new();
        type_str(&mut app, "ad $1");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Right);
        type_str(&mut app, "d");
        assert_eq!(app.input, "add $1");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "add $");
    }

    #[test]
    fn enter_submits_and_escape_quits() {
        let mut app = App::new();
        type_str(&mut app, "j 3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state().pc(), 12);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn f2_toggles_number_format() {
        let mut app = App::new();
        press(&mut app, KeyCode::F(2));
        assert!(app.fmt_mode == FormatMode::Hex);
    }
}
