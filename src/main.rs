use calcpro::application::session::CalculatorSession;
use calcpro::infrastructure::console::ConsolePresenter;
use calcpro::interfaces::repl::command::Command;
use calcpro::interfaces::repl::reader::CommandReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command script to run; reads stdin when omitted
    script: Option<PathBuf>,

    /// Suppress the interactive banner
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let presenter = Box::new(ConsolePresenter::new(io::stdout()));
    let mut session = CalculatorSession::new(presenter);

    match cli.script {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            run(&mut session, CommandReader::new(BufReader::new(file)));
        }
        None => {
            if !cli.quiet {
                eprintln!(
                    "calcpro: enter digits, + - * /, = to evaluate, clear, \
                     cycle/plan/method/pay to upgrade, quit to exit"
                );
            }
            run(&mut session, CommandReader::new(io::stdin().lock()));
        }
    }
    Ok(())
}

fn run<R: BufRead>(session: &mut CalculatorSession, reader: CommandReader<R>) {
    for command in reader.commands() {
        match command {
            Ok(Command::Quit) => break,
            Ok(command) => command.apply(session),
            Err(e) => eprintln!("Error reading command: {e}"),
        }
    }
}
