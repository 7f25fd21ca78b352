mod cli;
mod logger;
mod ui;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use mipsim::session::Session;

use cli::Args;
use logger::setup_logger;
use ui::App;

fn main() -> io::Result<()> {
    let args = Args::parse();
    setup_logger(args.log_file.as_deref(), args.uses_terminal_ui())?;

    if let Some(path) = &args.script {
        tracing::info!(script = %path.display(), "running script");
        let reader = BufReader::new(File::open(path)?);
        return ui::plain::run_script(&mut Session::new(), reader, &mut io::stdout().lock());
    }
    if args.plain {
        return ui::plain::run_repl(&mut Session::new(), io::stdin().lock(), &mut io::stdout().lock());
    }

    let mut terminal = ratatui::init();
    let result = ui::run(&mut terminal, App::new());
    ratatui::restore();
    result
}
