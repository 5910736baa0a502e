//! Command layer.
//!
//! Turns lines of operator input into operations on the address book:
//! `parser` tokenizes, `command` names the closed set of commands,
//! `handlers` implement them and `router` ties the pieces together.

pub mod command;
pub mod handlers;
pub mod parser;
pub mod router;

pub use command::Command;
pub use parser::{parse_input, ParsedInput};
pub use router::{CommandRouter, Reply};
