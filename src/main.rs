use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use clap::Parser as ClapParser;
use donkey::{
    display_error,
    parser::parser::parse,
    repl::{self, Config, Mode, PROMPT},
};
use tracing::{info, Level};

#[derive(ClapParser, Debug)]
#[command(version, about = "Tokenizer and Pratt parser for the donkey language")]
struct Args {
    /// What the REPL echoes for each line
    #[arg(long, value_enum, default_value_t = Mode::Tokens)]
    mode: Mode,

    /// REPL prompt
    #[arg(long, default_value = PROMPT)]
    prompt: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Parse this file once instead of starting the REPL
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match args.file {
        Some(path) => parse_file(path),
        None => {
            let config = Config {
                mode: args.mode,
                prompt: args.prompt,
            };
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::start(&config, stdin.lock(), &mut stdout).context("REPL I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_file(path: PathBuf) -> anyhow::Result<ExitCode> {
    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let start = Instant::now();
    let (program, errors) = parse(&source);
    info!(elapsed = ?start.elapsed(), statements = program.len(), "parsed file");

    let mut stdout = io::stdout().lock();

    if errors.is_empty() {
        writeln!(stdout, "{}", program)?;
        return Ok(ExitCode::SUCCESS);
    }

    let file_name = path.to_string_lossy();
    for error in &errors {
        write!(stdout, "{}", display_error(error, &source, Some(&*file_name)))?;
    }

    Ok(ExitCode::FAILURE)
}
