use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{InquireError, Text};

/// Line-oriented user input.
///
/// `Ok(None)` means the user backed out (Esc, Ctrl-C, end of input).
pub trait Prompt {
    fn ask(&mut self, message: &str) -> anyhow::Result<Option<String>>;
}

/// Terminal prompt backed by `inquire`. When stdin is not a terminal (piped or
/// redirected input) it falls back to reading plain lines.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn ask(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            print!("{message} ");
            io::stdout().flush()?;
            return LinePrompt::new(stdin.lock()).ask(message);
        }

        match Text::new(message).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// One answer per input line, without the line terminator. End of input is `None`.
#[derive(Debug)]
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, _message: &str) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;

    use super::Prompt;

    /// Replays canned answers and records every question asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self { answers: answers.into_iter().map(Into::into).collect(), asked: Vec::new() }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, message: &str) -> anyhow::Result<Option<String>> {
            self.asked.push(message.to_string());
            Ok(self.answers.pop_front())
        }
    }
}
