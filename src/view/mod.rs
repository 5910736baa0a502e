//! Operator-facing input and output.

mod console;

pub use console::ConsoleView;

use std::io;

/// Display capability used by the session loop.
pub trait UserView {
    /// Show one message to the operator.
    fn show_message(&mut self, message: &str) -> io::Result<()>;

    /// Show `prompt` and read one line. `Ok(None)` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}
