//! Output and input surface of the interactive session
//!
//! The session talks to the user only through [`View`]. [`ConsoleView`]
//! drives a terminal (or any reader/writer pair). Tests use `ScriptedView`,
//! which replays canned input and records everything shown.

#[cfg(test)]
use std::collections::VecDeque;
use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::models::Record;

use super::contact::format_contact_list;

/// What the session needs from its user interface
pub trait View {
    /// Show a single (possibly multi-line) message
    fn show_message(&mut self, message: &str) -> io::Result<()>;

    /// Show a list of contacts, or a notice when there are none
    fn show_contacts(&mut self, contacts: &[&Record]) -> io::Result<()>;

    /// Show the command help
    fn show_commands(&mut self, commands: &str) -> io::Result<()>;

    /// Prompt and read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line-oriented terminal view
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<io::StdinLock<'static>, Stdout> {
    /// A view over the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn show_contacts(&mut self, contacts: &[&Record]) -> io::Result<()> {
        writeln!(self.output, "{}", format_contact_list(contacts))
    }

    fn show_commands(&mut self, commands: &str) -> io::Result<()> {
        writeln!(self.output, "{}", commands)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// A view that replays canned input and records all output
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedView {
    input: VecDeque<String>,
    /// Everything shown, one entry per call
    pub shown: Vec<String>,
}

#[cfg(test)]
impl ScriptedView {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }
}

#[cfg(test)]
impl View for ScriptedView {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.shown.push(message.to_string());
        Ok(())
    }

    fn show_contacts(&mut self, contacts: &[&Record]) -> io::Result<()> {
        self.shown.push(format_contact_list(contacts));
        Ok(())
    }

    fn show_commands(&mut self, commands: &str) -> io::Result<()> {
        self.shown.push(commands.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_reads_lines_and_writes_prompt() {
        let mut view = ConsoleView::new(Cursor::new("hello\r\nall\n"), Vec::new());

        assert_eq!(view.read_line("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(view.read_line("> ").unwrap().as_deref(), Some("all"));
        assert_eq!(view.read_line("> ").unwrap(), None);

        let output = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(output, "> > > ");
    }

    #[test]
    fn test_console_replaces_invalid_utf8() {
        let mut view = ConsoleView::new(Cursor::new(&b"phone \xff\xfe\nexit\n"[..]), Vec::new());

        assert_eq!(
            view.read_line("").unwrap().as_deref(),
            Some("phone \u{fffd}\u{fffd}")
        );
        assert_eq!(view.read_line("").unwrap().as_deref(), Some("exit"));
        assert_eq!(view.read_line("").unwrap(), None);
    }

    #[test]
    fn test_console_show_contacts() {
        let mut view = ConsoleView::new(Cursor::new(""), Vec::new());
        view.show_contacts(&[]).unwrap();
        view.show_message("Good bye!").unwrap();

        let output = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(output, "No contacts found.\nGood bye!\n");
    }

    #[test]
    fn test_scripted_view() {
        let mut view = ScriptedView::new(["hello"]);
        assert_eq!(view.read_line("").unwrap().as_deref(), Some("hello"));
        assert_eq!(view.read_line("").unwrap(), None);

        view.show_message("How can I help you?").unwrap();
        assert_eq!(view.shown, vec!["How can I help you?"]);
    }
}
