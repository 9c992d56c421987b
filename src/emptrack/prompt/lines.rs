use super::{Choice, Prompter, Validator};
use crate::error::{Result, TrackerError};
use std::io::{BufRead, Stdout, StdinLock, Write};

const INVALID_CHOICE_MESSAGE: &str = "Please choose one of the listed options.";

/// Line-oriented prompter: one answer per line.
///
/// Selections accept either the 1-based option number or the option label
/// (case-insensitive). Reaching end of input fails with
/// [`TrackerError::InputClosed`].
pub struct LinePrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_line(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "? {} ", message)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn reject(&mut self, reason: &str) -> Result<()> {
        writeln!(self.writer, ">> {}", reason)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, message: &str) -> Result<String> {
        self.ask_line(message)
    }

    fn input_validated(&mut self, message: &str, validator: Validator) -> Result<String> {
        loop {
            let answer = self.ask_line(message)?;
            match validator(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => self.reject(&reason)?,
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<i64> {
        writeln!(self.writer, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, choice.label)?;
        }

        loop {
            write!(self.writer, "  Answer: ")?;
            self.writer.flush()?;
            let line = self.read_line()?;
            let answer = line.trim();

            if let Ok(n) = answer.parse::<usize>() {
                if (1..=choices.len()).contains(&n) {
                    return Ok(choices[n - 1].value);
                }
            }
            if let Some(choice) = choices
                .iter()
                .find(|c| c.label.trim().eq_ignore_ascii_case(answer))
            {
                return Ok(choice.value);
            }
            self.reject(INVALID_CHOICE_MESSAGE)?;
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl LinePrompter<std::io::Cursor<Vec<u8>>, Vec<u8>> {
    /// A prompter fed from canned answers, one per line, capturing everything it
    /// writes.
    pub fn scripted(answers: &[&str]) -> Self {
        let mut input = answers.join("\n");
        input.push('\n');
        Self::new(std::io::Cursor::new(input.into_bytes()), Vec::new())
    }

    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}
