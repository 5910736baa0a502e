use super::UserView;
use std::io::{self, BufRead, Stdout, Write};

/// Line-oriented console view over any reader and writer.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<io::StdinLock<'static>, Stdout> {
    /// View over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the view, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> UserView for ConsoleView<R, W> {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD instead of ending the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
