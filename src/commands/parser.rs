//! Tokenizer for command lines.

/// A command line split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Command word, lowercased
    pub command: String,

    /// Remaining whitespace-separated tokens, case preserved
    pub args: Vec<String>,
}

/// Split `line` on whitespace into a lowercased command and its arguments.
///
/// Returns `None` for an empty or whitespace-only line, which callers skip
/// without dispatching. There is no quoting: a token never contains spaces.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}
