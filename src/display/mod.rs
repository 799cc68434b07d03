//! Display formatting and terminal interaction
//!
//! Provides formatting for contacts and birthday reminders, and the view
//! abstraction the interactive session writes to.

pub mod contact;
pub mod view;

pub use contact::{format_contact_list, format_upcoming_birthdays};
pub use view::{ConsoleView, View};

#[cfg(test)]
pub(crate) use view::ScriptedView;
