//! Command definitions for the interactive session
//!
//! Defines the fixed vocabulary of commands the session understands. The
//! help text is generated from this table.

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command name (what user types)
    pub name: &'static str,
    /// Argument placeholders shown in the help
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// What the command does
    pub kind: CommandKind,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Hello,
    Help,
    Exit,
}

/// All available commands
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "[name] [phone]",
        description: "add a new contact or another phone to an existing one",
        kind: CommandKind::Add,
    },
    CommandSpec {
        name: "change",
        usage: "[name] [old phone] [new phone]",
        description: "change a contact's phone number",
        kind: CommandKind::Change,
    },
    CommandSpec {
        name: "phone",
        usage: "[name]",
        description: "show a contact",
        kind: CommandKind::Phone,
    },
    CommandSpec {
        name: "all",
        usage: "",
        description: "show all contacts",
        kind: CommandKind::All,
    },
    CommandSpec {
        name: "add-birthday",
        usage: "[name] [DD.MM.YYYY]",
        description: "add a birthday to a contact",
        kind: CommandKind::AddBirthday,
    },
    CommandSpec {
        name: "show-birthday",
        usage: "[name]",
        description: "show the birthday of a contact",
        kind: CommandKind::ShowBirthday,
    },
    CommandSpec {
        name: "birthdays",
        usage: "",
        description: "show birthdays in the coming week",
        kind: CommandKind::Birthdays,
    },
    CommandSpec {
        name: "hello",
        usage: "",
        description: "say hello",
        kind: CommandKind::Hello,
    },
    CommandSpec {
        name: "help",
        usage: "",
        description: "show this list",
        kind: CommandKind::Help,
    },
    CommandSpec {
        name: "exit",
        usage: "",
        description: "save and exit the application",
        kind: CommandKind::Exit,
    },
    CommandSpec {
        name: "close",
        usage: "",
        description: "same as exit",
        kind: CommandKind::Exit,
    },
];

/// Look up a command by exact name
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Numbered command list shown at startup and by `help`
pub fn help_text() -> String {
    COMMANDS
        .iter()
        .enumerate()
        .map(|(i, cmd)| {
            let signature = if cmd.usage.is_empty() {
                cmd.name.to_string()
            } else {
                format!("{} {}", cmd.name, cmd.usage)
            };
            format!("{}) {} - {}", i + 1, signature, cmd.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        assert_eq!(find_command("add").unwrap().kind, CommandKind::Add);
        assert_eq!(find_command("close").unwrap().kind, CommandKind::Exit);
        assert_eq!(
            find_command("add-birthday").unwrap().kind,
            CommandKind::AddBirthday
        );
        assert!(find_command("ADD").is_none());
        assert!(find_command("delete").is_none());
    }

    #[test]
    fn test_command_names_unique() {
        for (i, cmd) in COMMANDS.iter().enumerate() {
            assert!(
                COMMANDS[i + 1..].iter().all(|other| other.name != cmd.name),
                "duplicate command {}",
                cmd.name
            );
        }
    }

    #[test]
    fn test_help_text_lists_every_command() {
        let help = help_text();
        assert!(help.starts_with("1) add [name] [phone] - "));
        assert!(help.contains("birthdays - show birthdays in the coming week"));
        assert_eq!(help.lines().count(), COMMANDS.len());
    }
}
