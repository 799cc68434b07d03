//! Interactive command layer
//!
//! This module turns lines typed at the prompt into operations on the
//! address book: parsing, the fixed command table, the handlers and the
//! session loop that ties them to a view.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod session;

pub use commands::{find_command, help_text, CommandKind, CommandSpec, COMMANDS};
pub use handlers::{error_message, execute, CommandContext, Outcome};
pub use parser::{parse_input, ParsedInput};
pub use session::Session;
