//! The closed set of commands the router understands.

use std::fmt;

/// A command recognized by [`CommandRouter`](super::CommandRouter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
}

impl Command {
    /// Look up a command by its (already lowercased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add_birthday" | "add-birthday" => Self::AddBirthday,
            "show_birthday" | "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete,
            "help" => Self::Help,
            "exit" | "close" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Canonical name used in help output and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add_birthday",
            Self::ShowBirthday => "show_birthday",
            Self::Birthdays => "birthdays",
            Self::Delete => "delete",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Whether a successful run changes the book and must be persisted.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::AddBirthday | Self::Delete
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
