//! Command router: parses a line and dispatches it to a handler.

use super::command::Command;
use super::handlers::{self, HELP_TEXT};
use super::parser::parse_input;
use crate::error::CommandResult;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// What the session loop should do with a routed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the message and read the next line
    Continue(String),

    /// Show the message and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(message) | Reply::Exit(message) => message,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Owns the address book for one session and routes commands against it.
///
/// After every successful mutating command the whole book is handed to the
/// injected [`BookRepository`].
pub struct CommandRouter {
    book: AddressBook,
    repository: Arc<dyn BookRepository>,
    autosave: bool,
    today: fn() -> NaiveDate,
}

impl CommandRouter {
    /// Create a router over `book`, persisting through `repository`.
    pub fn new(book: AddressBook, repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book,
            repository,
            autosave: true,
            today: local_today,
        }
    }

    /// Enable or disable snapshots after mutating commands.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Replace the source of "today" used by `birthdays`.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Route one line of input.
    ///
    /// Returns `None` for a blank line, which must be skipped silently.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let parsed = parse_input(line)?;
        let reply = match Command::from_name(&parsed.command) {
            Some(command) => self.dispatch(command, &parsed.args),
            None => {
                tracing::debug!(command = %parsed.command, "Unknown command");
                Reply::Continue("Invalid command.".to_string())
            }
        };
        Some(reply)
    }

    /// Run `command` and turn its outcome into a reply.
    pub fn dispatch(&mut self, command: Command, args: &[String]) -> Reply {
        tracing::debug!(%command, args = args.len(), "Dispatching command");

        match self.execute(command, args) {
            Ok(reply) => {
                if command.is_mutating() {
                    self.snapshot();
                }
                reply
            }
            Err(e) => {
                tracing::debug!(%command, error = %e, "Command failed");
                Reply::Continue(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[String]) -> CommandResult<Reply> {
        let book = &mut self.book;
        let message = match command {
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => handlers::add_contact(args, book)?,
            Command::Change => handlers::change_contact(args, book)?,
            Command::Phone => handlers::show_phone(args, book)?,
            Command::All => handlers::show_all(book),
            Command::AddBirthday => handlers::add_birthday(args, book)?,
            Command::ShowBirthday => handlers::show_birthday(args, book)?,
            Command::Birthdays => handlers::birthdays(book, (self.today)()),
            Command::Delete => handlers::delete_contact(args, book)?,
            Command::Help => HELP_TEXT.to_string(),
        };
        Ok(Reply::Continue(message))
    }

    fn snapshot(&self) {
        if !self.autosave {
            return;
        }
        if let Err(e) = self.repository.save(&self.book) {
            tracing::error!("Failed to save address book: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageResult;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        saves: Mutex<Vec<AddressBook>>,
    }

    impl BookRepository for RecordingRepository {
        fn save(&self, book: &AddressBook) -> StorageResult<()> {
            self.saves.lock().unwrap().push(book.clone());
            Ok(())
        }

        fn try_load(&self) -> StorageResult<Option<AddressBook>> {
            Ok(None)
        }
    }

    fn router() -> (CommandRouter, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::default());
        let router = CommandRouter::new(AddressBook::new(), repo.clone())
            .with_clock(|| NaiveDate::from_ymd_opt(2030, 6, 10).unwrap());
        (router, repo)
    }

    fn say(router: &mut CommandRouter, line: &str) -> String {
        router.handle_line(line).unwrap().message().to_string()
    }

    #[test]
    fn test_blank_line_is_not_dispatched() {
        let (mut router, repo) = router();
        assert_eq!(router.handle_line("   "), None);
        assert!(repo.saves.lock().unwrap().is_empty());
    }

    #[test]
    fn test_exit_and_close() {
        let (mut router, _) = router();
        assert_eq!(
            router.handle_line("exit"),
            Some(Reply::Exit("Good bye!".to_string()))
        );
        assert_eq!(
            router.handle_line("CLOSE"),
            Some(Reply::Exit("Good bye!".to_string()))
        );
    }

    #[test]
    fn test_dispatch_exit_does_not_snapshot() {
        let (mut router, repo) = router();
        assert_eq!(
            router.dispatch(Command::Exit, &[]),
            Reply::Exit("Good bye!".to_string())
        );
        assert!(repo.saves.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_command() {
        let (mut router, _) = router();
        assert_eq!(say(&mut router, "fly away"), "Invalid command.");
    }

    #[test]
    fn test_snapshot_only_after_successful_mutation() {
        let (mut router, repo) = router();
        say(&mut router, "add John 123");
        say(&mut router, "phone John");
        say(&mut router, "all");
        assert!(repo.saves.lock().unwrap().is_empty());

        say(&mut router, "add John 1234567890");
        let saves = repo.saves.lock().unwrap();
        assert_eq!(saves.len(), 1);
        assert!(saves[0].find("John").is_some());
    }

    #[test]
    fn test_autosave_disabled() {
        let (router, repo) = router();
        let mut router = router.with_autosave(false);
        say(&mut router, "add John 1234567890");
        assert!(repo.saves.lock().unwrap().is_empty());
        assert_eq!(router.book().len(), 1);
    }

    #[test]
    fn test_birthdays_uses_injected_clock() {
        let (mut router, _) = router();
        say(&mut router, "add John 1234567890");
        say(&mut router, "add_birthday John 15.06.1990");
        assert_eq!(
            say(&mut router, "birthdays"),
            "Upcoming birthdays:\nJohn: 15.06.2030"
        );
    }
}
