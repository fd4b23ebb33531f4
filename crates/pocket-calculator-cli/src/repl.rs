//! Line-oriented interactive loop
//!
//! Each input line is a key sequence. After every line the visible display
//! is printed. `quit`, `exit` or end of input ends the loop.

use std::io::BufRead;

use pocket_calculator::prelude::{CalculatorDriver, InputError};

use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::session::Session;

/// Outcome of one input line
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The loop should end
    Quit,
    /// Blank line, nothing pressed
    Empty,
    /// Keys were pressed
    Pressed,
    /// The line held an unknown key; nothing was pressed
    Rejected(InputError),
}

/// Feeds one line to the session
pub fn process_line(session: &mut Session, line: &str) -> CliResult<LineOutcome> {
    let line = line.trim();
    match line {
        "quit" | "exit" => return Ok(LineOutcome::Quit),
        "" => return Ok(LineOutcome::Empty),
        _ => {}
    }
    match session.feed(line) {
        Ok(()) => Ok(LineOutcome::Pressed),
        Err(CliError::Input(err)) => Ok(LineOutcome::Rejected(err)),
        Err(err) => Err(err),
    }
}

/// Runs the loop until `quit` or end of input
pub fn run<R: BufRead>(
    session: &mut Session,
    input: R,
    reporter: &Reporter,
    interactive: bool,
) -> CliResult<()> {
    if interactive {
        reporter.prompt()?;
    }
    for line in input.lines() {
        match process_line(session, &line?)? {
            LineOutcome::Quit => break,
            LineOutcome::Empty => {}
            LineOutcome::Pressed => {
                reporter.display(session.visible_display(), session.is_error())?;
            }
            LineOutcome::Rejected(err) => reporter.warning(&err.to_string()),
        }
        if interactive {
            reporter.prompt()?;
        }
    }
    Ok(())
}
