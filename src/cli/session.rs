//! Interactive session loop
//!
//! Reads one line at a time from a [`View`], runs it against the address
//! book, and shows the result. The book is saved when the user exits or the
//! input ends.

use tracing::{debug, info};

use crate::config::Settings;
use crate::display::View;
use crate::error::AddressBookResult;
use crate::models::{AddressBook, Record};
use crate::storage::Storage;

use super::commands::help_text;
use super::handlers::{execute, CommandContext, Outcome, INVALID_COMMAND};
use super::parser::parse_input;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GOODBYE: &str = "Good bye!";

/// One run of the interactive assistant
pub struct Session<'a, V: View> {
    book: AddressBook,
    view: V,
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a, V: View> Session<'a, V> {
    pub fn new(book: AddressBook, view: V, storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            book,
            view,
            storage,
            settings,
        }
    }

    /// Run until `exit`/`close` or end of input, then save the book
    ///
    /// The book is saved even when the view fails part way through; the
    /// view error is returned after the save.
    pub fn run(&mut self) -> AddressBookResult<()> {
        info!(contacts = self.book.len(), "session started");
        let interaction = self.interact();

        self.storage.save_book(&self.book)?;
        interaction?;

        self.view.show_message(GOODBYE)?;
        info!("session finished");
        Ok(())
    }

    fn interact(&mut self) -> AddressBookResult<()> {
        self.view.show_message(WELCOME)?;
        self.view.show_commands(&help_text())?;

        while let Some(line) = self.view.read_line(&self.settings.prompt)? {
            let Some(input) = parse_input(&line) else {
                self.view.show_message(INVALID_COMMAND)?;
                continue;
            };
            debug!(command = %input.command, args = input.args.len(), "dispatching");

            let ctx = CommandContext::current(self.settings);
            match execute(&mut self.book, &input, &ctx) {
                Outcome::Reply(message) => self.view.show_message(&message)?,
                Outcome::ShowContacts => {
                    let contacts: Vec<&Record> = self.book.records().collect();
                    self.view.show_contacts(&contacts)?;
                }
                Outcome::ShowHelp => self.view.show_commands(&help_text())?,
                Outcome::Exit => break,
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_view(self) -> V {
        self.view
    }
}
