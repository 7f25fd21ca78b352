//! Line-oriented front ends: the prompt loop and the script runner.

use std::io::{self, BufRead, Write};

use mipsim::session::{Outcome, Session, dump};

use super::console::LineKind;
use super::report::outcome_lines;

const BANNER: &[&str] = &[
    "MIPS simulator",
    "Type 'help' for the instruction list",
    "mem <start> <end> - show memory contents",
    "Type 'sair' to quit",
    "",
];
const PROMPT: &str = "Enter MIPS instruction: ";

/// Reads lines until EOF or a quit command, reporting after each one.
pub fn run_repl<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{line}")?;
    }
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !report(session, &line, out, true)? {
            break;
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Runs every line of a script, echoing it, then prints the final registers.
/// Text after `#` or `;` is a comment.
pub fn run_script<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> io::Result<()> {
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.split([';', '#']).next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        writeln!(out, "{:>4}> {line}", n + 1)?;
        if !report(session, line, out, false)? {
            break;
        }
    }
    for line in dump::register_lines(session.state()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Returns `false` once the session asked to quit.
fn report<W: Write>(session: &mut Session, line: &str, out: &mut W, verbose: bool) -> io::Result<bool> {
    let outcome = session.submit(line);
    for l in outcome_lines(session, &outcome, verbose) {
        match l.kind {
            LineKind::Info => writeln!(out, "{}", l.text)?,
            LineKind::Warning => writeln!(out, "warning: {}", l.text)?,
            LineKind::Error => writeln!(out, "error: {}", l.text)?,
        }
    }
    Ok(outcome != Outcome::Quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn script(src: &str) -> (Session, String) {
        let mut session = Session::new();
        let mut out = Vec::new();
        run_script(&mut session, Cursor::new(src), &mut out).expect("script");
        (session, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn script_runs_until_the_end() {
        let (session, out) = script(
            "# store then load\nset $1 99\nsw $1,4($0)\nlw $2,4($0)   ; reload\n\njal 10\n",
        );
        assert_eq!(session.state().try_register(2), Ok(99));
        assert_eq!(session.state().try_register(31), Ok(12));
        assert_eq!(session.state().pc(), 40);
        assert!(out.contains("   3> sw $1,4($0)"));
        assert!(out.trim_end().ends_with("PC: 40"));
    }

    #[test]
    fn script_reports_errors_and_continues() {
        let (session, out) = script("addx $1,$2,$3\nset $2 2147483647\naddi $1,$2,1\naddi $3,$0,5\n");
        assert!(out.contains("error: Parameter error"));
        assert!(out.contains("warning: Overflow: addi"));
        assert!(!out.contains("error: Overflow"));
        assert_eq!(session.state().try_register(3), Ok(5));
    }

    #[test]
    fn script_stops_at_quit() {
        let (session, _) = script("addi $1,$0,1\nsair\naddi $1,$0,2\n");
        assert_eq!(session.state().try_register(1), Ok(1));
    }

    #[test]
    fn repl_prints_details_after_each_instruction() {
        let mut session = Session::new();
        let mut out = Vec::new();
        run_repl(&mut session, Cursor::new("addi $1,$0,4\nmem 0 3\nquit\nj 5\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("I-type"));
        assert!(out.contains("word: 0x20010004"));
        assert!(out.contains("Memory [0-3]:"));
        assert_eq!(session.state().pc(), 4);
    }
}
