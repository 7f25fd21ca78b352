use std::path::PathBuf;

use clap::Parser;

/// Interactive simulator for a small MIPS subset.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Read instructions line by line from stdin instead of opening the TUI.
    #[clap(long)]
    pub plain: bool,

    /// Run every line of FILE, then print the registers.
    #[clap(short, long, value_name = "FILE", conflicts_with = "plain")]
    pub script: Option<PathBuf>,

    /// Append log records to FILE. The TUI only logs when this is given.
    #[clap(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn uses_terminal_ui(&self) -> bool {
        !self.plain && self.script.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_tui() {
        let args = Args::parse_from(["mipsim"]);
        assert!(args.uses_terminal_ui());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn script_and_plain_are_exclusive() {
        assert!(Args::try_parse_from(["mipsim", "--plain", "--script", "a.s"]).is_err());
        let args = Args::parse_from(["mipsim", "-s", "a.s", "--log-file", "run.log"]);
        assert!(!args.uses_terminal_ui());
        assert_eq!(args.script, Some(PathBuf::from("a.s")));
    }
}
