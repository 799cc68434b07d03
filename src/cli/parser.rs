//! Input line parsing
//!
//! Input is case-insensitive: the whole line is lowercased before it is split
//! on whitespace, so names are stored in lowercase too.

/// A command word and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line into command and arguments; `None` for a blank line
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let lowered = line.to_lowercase();
    let mut words = lowered.split_whitespace().map(str::to_string);
    let command = words.next()?;
    Some(ParsedInput {
        command,
        args: words.collect(),
    })
}
