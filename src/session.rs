//! The read-eval loop tying the router to a view.

use crate::commands::{CommandRouter, Reply};
use crate::view::UserView;
use std::io;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run commands from `view` until `exit`/`close` or end of input.
pub fn run_session<V: UserView>(router: &mut CommandRouter, view: &mut V) -> io::Result<()> {
    view.show_message(WELCOME)?;

    while let Some(line) = view.prompt(PROMPT)? {
        match router.handle_line(&line) {
            None => continue,
            Some(Reply::Continue(message)) => view.show_message(&message)?,
            Some(Reply::Exit(message)) => {
                view.show_message(&message)?;
                return Ok(());
            }
        }
    }

    tracing::info!("End of input, leaving session");
    Ok(())
}
