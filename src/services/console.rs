use crate::errors::AppResult;
use std::io::{BufRead, Write};

/// Operator-facing input and output. Generic so sessions can be driven from
/// in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt`, then reads one line.
    ///
    /// # Returns
    /// * `AppResult<Option<String>>` - The answer without its line ending,
    ///   lower-cased,
    ///   or `None` once the input stream is exhausted.
    pub fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_lowercase()))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_lowercases_answer_and_echoes_prompt() {
        let mut console = Console::new("YeS\r\n no \n".as_bytes(), Vec::new());

        assert_eq!(console.ask("go? ").unwrap().as_deref(), Some("yes"));
        assert_eq!(console.ask("again? ").unwrap().as_deref(), Some(" no "));
        assert_eq!(console.ask("more? ").unwrap(), None);

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "go? again? more? ");
    }
}
