//! Special commands parser for the interactive session
//!
//! Special commands let the user drive the dashboard without leaving the
//! prompt: complete, edit and reflect on items, finish a mission, switch
//! views and exit. Anything that is not a command is a prompt for the
//! guidance service.
//!
//! Commands are prefixed with `/` and are case-insensitive. Item numbers are
//! 1-based as displayed; the parsed command carries zero-based indices.

use crate::directory::DirectoryTab;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Prefill the input with one of the example prompts (zero-based)
    Example(usize),

    /// Flip completion of an action point
    ToggleDone(usize),

    /// Open the edit form for an action point
    Edit(usize),

    /// Ask the service to regenerate an action point
    Reprompt(usize),

    /// Reflect on a consideration
    ///
    /// With inline text the reflection is saved directly; without it the
    /// reflection form opens.
    Reflect { index: usize, text: Option<String> },

    /// Finish the current mission
    Finish,

    /// Go back to the chat view
    Back,

    /// Re-render the current view
    Show,

    /// Open the mission analysis
    Analysis,

    /// Open the company directory
    Directory,

    /// Switch directory tab
    Tab(DirectoryTab),

    /// Display current view and progress
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be sent to the guidance service as a prompt.
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns `UnknownCommand` for unrecognized `/` commands,
/// `MissingArgument` when a required item number or name is absent and
/// `UnsupportedArgument` when an argument does not parse.
///
/// # Examples
///
/// ```
/// use interactif::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/done 2").unwrap(), SpecialCommand::ToggleDone(1));
/// assert_eq!(parse_special_command("/finish").unwrap(), SpecialCommand::Finish);
/// assert_eq!(parse_special_command("plan my week").unwrap(), SpecialCommand::None);
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), rest.trim()),
        None => (lower.clone(), ""),
    };

    match command.as_str() {
        "/example" => Ok(SpecialCommand::Example(parse_index(
            "/example",
            "/example <number>",
            rest,
        )?)),
        "/done" | "/toggle" => Ok(SpecialCommand::ToggleDone(parse_index(
            "/done",
            "/done <action number>",
            rest,
        )?)),
        "/edit" => Ok(SpecialCommand::Edit(parse_index(
            "/edit",
            "/edit <action number>",
            rest,
        )?)),
        "/reprompt" => Ok(SpecialCommand::Reprompt(parse_index(
            "/reprompt",
            "/reprompt <action number>",
            rest,
        )?)),
        "/reflect" => {
            let (number, text) = match rest.split_once(char::is_whitespace) {
                Some((number, text)) => (number, Some(text.trim().to_string())),
                None => (rest, None),
            };
            let index = parse_index("/reflect", "/reflect <consideration number> [text]", number)?;
            Ok(SpecialCommand::Reflect {
                index,
                text: text.filter(|t| !t.is_empty()),
            })
        }
        "/tab" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/tab".to_string(),
                    usage: "/tab <employees|protocols|projects|resources>".to_string(),
                });
            }
            DirectoryTab::parse_str(rest)
                .map(SpecialCommand::Tab)
                .map_err(|_| CommandError::UnsupportedArgument {
                    command: "/tab".to_string(),
                    arg: rest.to_string(),
                })
        }

        _ if !rest.is_empty() => {
            if is_known_command(&command) {
                Err(CommandError::UnsupportedArgument {
                    command: command.clone(),
                    arg: rest.to_string(),
                })
            } else {
                Err(CommandError::UnknownCommand(command.clone()))
            }
        }

        "/finish" | "/complete" => Ok(SpecialCommand::Finish),
        "/back" => Ok(SpecialCommand::Back),
        "/show" => Ok(SpecialCommand::Show),
        "/analysis" => Ok(SpecialCommand::Analysis),
        "/directory" => Ok(SpecialCommand::Directory),
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),

        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn is_known_command(command: &str) -> bool {
    matches!(
        command,
        "/finish"
            | "/complete"
            | "/back"
            | "/show"
            | "/analysis"
            | "/directory"
            | "/status"
            | "/help"
            | "/?"
            | "/exit"
            | "/quit"
            | "exit"
            | "quit"
    )
}

/// Parse a 1-based item number into a zero-based index
fn parse_index(command: &str, usage: &str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command: command.to_string(),
            usage: usage.to_string(),
        });
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::UnsupportedArgument {
            command: command.to_string(),
            arg: arg.to_string(),
        }),
    }
}

/// Display help text for special commands
pub fn print_help() {
    println!(
        r#"
Commands
========

CHAT:
  <text>              - Ask for guidance on your situation
  /example <n>        - Use example prompt n
  /analysis           - Review your completed missions
  /directory          - Open the company directory

DASHBOARD:
  /done <n>           - Mark action n complete (or incomplete again)
  /edit <n>           - Edit action n
  /reprompt <n>       - Ask the assistant to rework action n
  /reflect <n> [text] - Reflect on consideration n
  /finish             - Finish the mission and see your analysis
  /show               - Show the dashboard again

DIRECTORY:
  /tab <name>         - employees, protocols, projects or resources

EVERYWHERE:
  /back               - Back to chat
  /status             - Show where you are and your progress
  /help               - Show this help
  exit, quit          - Leave
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(
            parse_special_command("How should I handle a conflict?").unwrap(),
            SpecialCommand::None
        );
        assert_eq!(parse_special_command("exiting soon").unwrap(), SpecialCommand::None);
    }

    #[test]
    fn test_index_commands_are_one_based() {
        assert_eq!(parse_special_command("/done 1").unwrap(), SpecialCommand::ToggleDone(0));
        assert_eq!(parse_special_command("/TOGGLE 3").unwrap(), SpecialCommand::ToggleDone(2));
        assert_eq!(parse_special_command("/edit 2").unwrap(), SpecialCommand::Edit(1));
        assert_eq!(parse_special_command("/reprompt 4").unwrap(), SpecialCommand::Reprompt(3));
        assert_eq!(parse_special_command("/example 2").unwrap(), SpecialCommand::Example(1));
    }

    #[test]
    fn test_index_errors() {
        assert!(matches!(
            parse_special_command("/done"),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_special_command("/done 0"),
            Err(CommandError::UnsupportedArgument { .. })
        ));
        assert!(matches!(
            parse_special_command("/edit two"),
            Err(CommandError::UnsupportedArgument { .. })
        ));
    }

    #[test]
    fn test_reflect_keeps_text_case() {
        assert_eq!(
            parse_special_command("/reflect 2 Talk to HR First").unwrap(),
            SpecialCommand::Reflect {
                index: 1,
                text: Some("Talk to HR First".to_string())
            }
        );
        assert_eq!(
            parse_special_command("/reflect 1").unwrap(),
            SpecialCommand::Reflect {
                index: 0,
                text: None
            }
        );
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_special_command("/finish").unwrap(), SpecialCommand::Finish);
        assert_eq!(parse_special_command("/Back").unwrap(), SpecialCommand::Back);
        assert_eq!(parse_special_command("/analysis").unwrap(), SpecialCommand::Analysis);
        assert_eq!(parse_special_command("/directory").unwrap(), SpecialCommand::Directory);
        assert_eq!(parse_special_command(" /show ").unwrap(), SpecialCommand::Show);
        assert_eq!(parse_special_command("quit").unwrap(), SpecialCommand::Exit);
        assert_eq!(parse_special_command("/exit").unwrap(), SpecialCommand::Exit);
    }

    #[test]
    fn test_tab_command() {
        assert_eq!(
            parse_special_command("/tab Projects").unwrap(),
            SpecialCommand::Tab(DirectoryTab::Projects)
        );
        assert!(matches!(
            parse_special_command("/tab"),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_special_command("/tab payroll"),
            Err(CommandError::UnsupportedArgument { .. })
        ));
    }

    #[test]
    fn test_unknown_and_extra_arguments() {
        assert_eq!(
            parse_special_command("/foo bar"),
            Err(CommandError::UnknownCommand("/foo".to_string()))
        );
        assert_eq!(
            parse_special_command("/foo"),
            Err(CommandError::UnknownCommand("/foo".to_string()))
        );
        assert!(matches!(
            parse_special_command("/finish now"),
            Err(CommandError::UnsupportedArgument { .. })
        ));
    }
}
