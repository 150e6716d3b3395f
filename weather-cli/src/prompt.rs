use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use inquire::{InquireError, Text};

/// Ask for one line of input. `Ok(None)` when the user backs out or input has ended.
///
/// Interactive terminals get an `inquire` prompt; piped or redirected stdin is read
/// as plain lines.
pub fn ask(message: &str) -> anyhow::Result<Option<String>> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        print!("{message} ");
        io::stdout().flush()?;
        return read_answer(&mut stdin.lock()).context("Failed to read input");
    }

    match Text::new(message).prompt() {
        Ok(answer) => Ok(Some(answer)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to read input"),
    }
}

/// Next line from `reader` without its terminator; `None` at end of input.
pub fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}
