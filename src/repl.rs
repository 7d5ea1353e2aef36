//! Interactive shell.
//!
//! Reads one line at a time and echoes either the tokens of the line or the
//! parsed program. Every line gets a fresh lexer and parser.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use tracing::{debug, info};

use crate::{display_error, lexer::lexer::Lexer, parser::parser::parse};

pub const PROMPT: &str = ">> ";
pub const EXIT_COMMAND: &str = "exit();";
pub const WELCOME: &str = "Welcome to the donkey REPL!
Type an expression or statement and press enter.
Use the command `exit();` or CTRL-D to exit the REPL.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Print every token of the line
    #[default]
    Tokens,
    /// Parse the line and print the program or its diagnostics
    Ast,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            prompt: String::from(PROMPT),
        }
    }
}

/// Runs the shell until `reader` is exhausted or the exit command is read.
pub fn start<R: BufRead, W: Write>(config: &Config, reader: R, writer: &mut W) -> io::Result<()> {
    info!(mode = ?config.mode, "starting repl");

    write!(writer, "{}", WELCOME)?;
    write!(writer, "{}", config.prompt)?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        if line.trim_end() == EXIT_COMMAND {
            debug!("exit command received");
            break;
        }

        eval_line(config.mode, &line, writer)?;

        write!(writer, "{}", config.prompt)?;
        writer.flush()?;
    }

    Ok(())
}

/// Handles a single line of input.
pub fn eval_line<W: Write>(mode: Mode, line: &str, writer: &mut W) -> io::Result<()> {
    match mode {
        Mode::Tokens => {
            for token in Lexer::new(line) {
                writeln!(writer, "{}", token)?;
            }
        }
        Mode::Ast => {
            let (program, errors) = parse(line);
            if errors.is_empty() {
                writeln!(writer, "{}", program)?;
            } else {
                for error in &errors {
                    write!(writer, "{}", display_error(error, line, None))?;
                }
            }
        }
    }

    Ok(())
}
