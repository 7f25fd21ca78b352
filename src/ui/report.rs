use mipsim::session::{Outcome, Session, dump, help::HELP};

use super::console::ConsoleLine;

/// Console text for one outcome. `verbose` adds the instruction breakdown and a
/// register dump after each executed line, which the TUI shows in panels instead.
pub fn outcome_lines(session: &Session, outcome: &Outcome, verbose: bool) -> Vec<ConsoleLine> {
    let state = session.state();
    let mut out = Vec::new();
    match outcome {
        Outcome::Executed { instruction, warning } => {
            if let Some(w) = warning {
                out.push(ConsoleLine::warning(w.to_string()));
            }
            out.push(ConsoleLine::info(format!("{instruction}  -> pc {}", state.pc())));
            if verbose {
                out.extend(dump::instruction_lines(instruction).into_iter().map(ConsoleLine::info));
                out.extend(dump::register_lines(state).into_iter().map(ConsoleLine::info));
            }
        }
        Outcome::Help => out.extend(HELP.iter().copied().map(ConsoleLine::info)),
        Outcome::Registers => {
            out.extend(dump::register_lines(state).into_iter().map(ConsoleLine::info))
        }
        Outcome::Memory { start, end } => {
            out.push(ConsoleLine::info(format!("Memory [{start}-{end}]:")));
            out.extend(dump::memory_lines(state, *start, *end).into_iter().map(ConsoleLine::info));
        }
        Outcome::RegisterSet { index, value } => {
            out.push(ConsoleLine::info(format!("${index} = {value}")))
        }
        Outcome::Reset => out.push(ConsoleLine::info("Machine reset")),
        Outcome::Quit | Outcome::Nothing => {}
        Outcome::Rejected(e) => out.push(ConsoleLine::error(e.to_string())),
    }
    out
}
