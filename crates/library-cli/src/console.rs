//! Line-oriented prompt I/O shared by the login session and the menus.

use std::io::{self, BufRead, Write};

use crate::renderer::TerminalRenderer;

/// Reads trimmed answers from `input` and writes prompts to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one answer.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn render(&mut self, renderer: &TerminalRenderer, markdown: &str) -> io::Result<()> {
        renderer.render_to(&mut self.output, markdown)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
