/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four top-level command modules:

- `chat`      - Interactive guidance session over every view
- `ask`       - One-shot structured request
- `assistant` - Free-form chat with the assistant
- `directory` - Print the company directory

The interactive loop maps each input line to a [`Step`] through
[`dispatch`], which only touches application state; the loop performs the
terminal I/O the step asks for.
*/

use crate::app::App;
use crate::board::RepromptOutcome;
use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
use crate::config::Config;
use crate::directory::DirectoryTab;
use crate::error::{InteractifError, Result};
use crate::guidance::{ActionPoint, Priority};
use crate::render::{
    render_analysis, render_chat_home, render_dashboard, render_directory, render_sessions,
    render_transcript_message, EXAMPLE_PROMPTS,
};
use crate::service::{create_service, GuidanceService};
use crate::view::View;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

// Special commands parser for the interactive session
pub mod special_commands;

/// What the interactive loop should do after a command was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the current view
    Render,
    /// Print a short notice and keep the view
    Notice(String),
    /// Send the line to the guidance service
    Submit,
    /// Prefill the next input line
    Prefill(String),
    /// Open the edit form for the action at this index
    EditForm(usize),
    /// Open the reflection form for the consideration at this index
    ReflectForm(usize),
    Help,
    Status,
    Exit,
}

/// Apply a parsed command to the application state
///
/// # Errors
///
/// Returns the state error (`NoActiveSession`, `IndexOutOfRange`,
/// `InvalidTransition`) when the command does not apply; state is unchanged
/// in that case
pub fn dispatch(app: &mut App, tab: &mut DirectoryTab, command: SpecialCommand) -> Result<Step> {
    match command {
        SpecialCommand::Exit => Ok(Step::Exit),
        SpecialCommand::Help => Ok(Step::Help),
        SpecialCommand::ShowStatus => Ok(Step::Status),
        SpecialCommand::Show => Ok(Step::Render),
        SpecialCommand::None => {
            if app.view() == View::Chat {
                Ok(Step::Submit)
            } else {
                Ok(Step::Notice(
                    "Type /back to return to chat before asking something new".to_string(),
                ))
            }
        }
        SpecialCommand::Example(index) => {
            if app.view() != View::Chat {
                return Ok(Step::Notice(
                    "Examples are available from the chat view".to_string(),
                ));
            }
            EXAMPLE_PROMPTS
                .get(index)
                .map(|example| Step::Prefill(example.to_string()))
                .ok_or_else(|| {
                    InteractifError::IndexOutOfRange {
                        index,
                        len: EXAMPLE_PROMPTS.len(),
                    }
                    .into()
                })
        }
        SpecialCommand::ToggleDone(index) => {
            let completed = app.dashboard_mut()?.actions.toggle_complete(index)?;
            tracing::debug!("Action {} completed: {}", index, completed);
            Ok(Step::Render)
        }
        SpecialCommand::Edit(index) => {
            let actions = &app.dashboard_mut()?.actions;
            if actions.get(index).is_none() {
                return Err(InteractifError::IndexOutOfRange {
                    index,
                    len: actions.len(),
                }
                .into());
            }
            Ok(Step::EditForm(index))
        }
        SpecialCommand::Reprompt(index) => match app.dashboard_mut()?.actions.reprompt(index)? {
            RepromptOutcome::Unavailable => Ok(Step::Notice(format!(
                "Regenerating a single action is not available yet. Use /edit {} to change it.",
                index + 1
            ))),
        },
        SpecialCommand::Reflect { index, text } => {
            let considerations = &mut app.dashboard_mut()?.considerations;
            match text {
                Some(text) => {
                    considerations.reflect(index, text)?;
                    Ok(Step::Render)
                }
                None if considerations.get(index).is_some() => Ok(Step::ReflectForm(index)),
                None => Err(InteractifError::IndexOutOfRange {
                    index,
                    len: considerations.len(),
                }
                .into()),
            }
        }
        SpecialCommand::Finish => {
            let mission = app.finish_mission()?;
            tracing::info!(
                "Mission finished: {} ({}% complete)",
                mission.name,
                mission.completion_percent()
            );
            Ok(Step::Render)
        }
        SpecialCommand::Back => {
            app.back()?;
            *tab = DirectoryTab::default();
            Ok(Step::Render)
        }
        SpecialCommand::Analysis => {
            app.navigate(View::Analysis)?;
            Ok(Step::Render)
        }
        SpecialCommand::Directory => {
            app.navigate(View::Directory)?;
            Ok(Step::Render)
        }
        SpecialCommand::Tab(new_tab) => {
            if app.view() != View::Directory {
                return Ok(Step::Notice(
                    "Open the directory first with /directory".to_string(),
                ));
            }
            *tab = new_tab;
            Ok(Step::Render)
        }
    }
}

/// Render whatever the current view shows
pub fn render_view(app: &App, tab: DirectoryTab, max_prompt_chars: usize) -> String {
    match app.view() {
        View::Chat => render_chat_home(app.missions().len(), max_prompt_chars),
        View::Dashboard => app.dashboard().map(render_dashboard).unwrap_or_default(),
        View::Analysis => render_analysis(app.missions()),
        View::Directory => render_directory(tab),
    }
}

/// Build the action saved by the edit form; blank optional fields become `None`
pub fn edited_action(task: String, priority: Priority, due_date: &str, context: &str) -> ActionPoint {
    ActionPoint {
        task,
        priority,
        due_date: non_blank(due_date),
        context: non_blank(context),
    }
}

/// Check the task entered in the edit form
pub fn validate_task(raw: &str) -> std::result::Result<String, String> {
    non_blank(raw).ok_or_else(|| "Task cannot be empty".to_string())
}

/// Check the priority entered in the edit form
pub fn validate_priority(raw: &str) -> std::result::Result<Priority, String> {
    Priority::parse_str(raw)
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn print_error(e: &dyn std::fmt::Display) {
    eprintln!("{}\n", format!("Error: {}", e).red());
}

/// Read one form field; `None` when the user cancels with Ctrl-C or Ctrl-D
fn read_field(rl: &mut DefaultEditor, label: &str, initial: &str) -> Result<Option<String>> {
    match rl.readline_with_initial(&format!("  {}: ", label), (initial, "")) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// Interactive guidance session
pub mod chat {
    //! Interactive guidance session.
    //!
    //! Builds the guidance service and an [`App`], then runs a readline loop
    //! that either submits the line as a prompt or applies a special command.

    use super::*;

    /// Start the interactive session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `prompt` - Optional prompt submitted before the first read
    ///
    /// # Examples
    ///
    /// ```
    /// use interactif::commands::chat;
    /// use interactif::config::Config;
    ///
    /// // In application code:
    /// // chat::run_chat(Config::default(), None).await?;
    /// ```
    pub async fn run_chat(config: Config, prompt: Option<String>) -> Result<()> {
        tracing::info!("Starting interactive guidance session");

        let service = create_service(&config.service)?;
        let max_prompt_chars = config.chat.max_prompt_chars;
        let mut app = App::new(config.chat);
        let mut tab = DirectoryTab::default();
        let mut prefill: Option<String> = None;

        let mut rl = DefaultEditor::new()?;

        print_welcome_banner();
        println!("{}", render_view(&app, tab, max_prompt_chars));

        if let Some(text) = prompt {
            submit(&mut app, service.as_ref(), &text).await;
        }

        loop {
            let prompt = app.view().format_colored_prompt();
            let read = match prefill.take() {
                Some(initial) => rl.readline_with_initial(&prompt, (initial.as_str(), "")),
                None => rl.readline(&prompt),
            };

            match read {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(trimmed)?;

                    let command = match parse_special_command(trimmed) {
                        Ok(command) => command,
                        Err(e) => {
                            print_error(&e);
                            continue;
                        }
                    };

                    let step = match dispatch(&mut app, &mut tab, command) {
                        Ok(step) => step,
                        Err(e) => {
                            print_error(&e);
                            continue;
                        }
                    };

                    match step {
                        Step::Exit => break,
                        Step::Help => print_help(),
                        Step::Status => print_status_display(&app),
                        Step::Render => println!("\n{}", render_view(&app, tab, max_prompt_chars)),
                        Step::Notice(text) => println!("{}\n", text.yellow()),
                        Step::Prefill(text) => prefill = Some(text),
                        Step::Submit => submit(&mut app, service.as_ref(), trimmed).await,
                        Step::EditForm(index) => {
                            if let Err(e) = edit_action(&mut app, &mut rl, index) {
                                print_error(&e);
                            }
                            println!("\n{}", render_view(&app, tab, max_prompt_chars));
                        }
                        Step::ReflectForm(index) => {
                            if let Err(e) = reflect_on(&mut app, &mut rl, index) {
                                print_error(&e);
                            }
                            println!("\n{}", render_view(&app, tab, max_prompt_chars));
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn submit(app: &mut App, service: &dyn GuidanceService, input: &str) {
        if let Err(e) = app.validate_prompt(input) {
            print_error(&e);
            return;
        }

        println!("{}", "Thinking...".dimmed());
        match app.submit_prompt(service, input).await {
            Ok(dashboard) => println!("\n{}", render_dashboard(dashboard)),
            Err(e) => print_error(&e),
        }
    }

    fn edit_action(app: &mut App, rl: &mut DefaultEditor, index: usize) -> Result<()> {
        let current = app
            .dashboard_mut()?
            .actions
            .get(index)
            .cloned()
            .ok_or(InteractifError::NoActiveSession)?;

        println!("{}", "Edit action (Ctrl-C to cancel)".bold());

        let task = loop {
            let Some(task) = read_field(rl, "Task", &current.task)? else {
                return Ok(());
            };
            match validate_task(&task) {
                Ok(task) => break task,
                Err(e) => println!("{}", e.red()),
            }
        };

        let priority = loop {
            let Some(raw) = read_field(rl, "Priority (high/medium/low)", current.priority.as_str())?
            else {
                return Ok(());
            };
            match validate_priority(&raw) {
                Ok(priority) => break priority,
                Err(e) => println!("{}", e.red()),
            }
        };

        let Some(due_date) = read_field(rl, "Due date", current.due_date.as_deref().unwrap_or(""))?
        else {
            return Ok(());
        };
        let Some(context) = read_field(rl, "Context", current.context.as_deref().unwrap_or(""))?
        else {
            return Ok(());
        };

        let action = edited_action(task, priority, &due_date, &context);
        app.dashboard_mut()?.actions.edit(index, action)?;
        println!("{}", "Action updated".green());
        Ok(())
    }

    fn reflect_on(app: &mut App, rl: &mut DefaultEditor, index: usize) -> Result<()> {
        let considerations = &app.dashboard_mut()?.considerations;
        let note = considerations
            .get(index)
            .map(|point| point.note.clone())
            .unwrap_or_default();
        let existing = considerations.reflection(index).unwrap_or("").to_string();

        println!("{} {}", "Reflect on:".bold(), note);
        let Some(text) = read_field(rl, "Reflection", &existing)? else {
            return Ok(());
        };

        let saved = app.dashboard_mut()?.considerations.reflect(index, text)?;
        if saved {
            println!("{}", "Reflection saved".green());
        } else {
            println!("{}", "Reflection cleared".yellow());
        }
        Ok(())
    }

    /// Display welcome banner at the start of the session
    fn print_welcome_banner() {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║              Interactif - Guidance Dashboard                 ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    /// Display where the user is and how far the current mission has come
    fn print_status_display(app: &App) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                   Interactif Session Status                  ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!(
            "View:               {} ({})",
            app.view().colored_tag(),
            app.view().description()
        );
        println!("Sessions:           {}", app.sessions().len());
        if !app.sessions().is_empty() {
            print!("{}", render_sessions(app.sessions()));
        }
        println!("Completed missions: {}", app.missions().len());
        if let Some(dashboard) = app.dashboard() {
            println!("Current session:    {}", dashboard.session.name);
            println!(
                "Actions:            {}/{} ({}%)",
                dashboard.actions.completed_count(),
                dashboard.actions.len(),
                dashboard.actions.completion_percent()
            );
            println!(
                "Reflections:        {}/{} ({}%)",
                dashboard.considerations.reflected_count(),
                dashboard.considerations.len(),
                dashboard.considerations.reflection_percent()
            );
        }
        if let Some(error) = app.last_error() {
            println!("Last error:         {}", error.red());
        }
        println!();
    }
}

// One-shot guidance request
pub mod ask {
    use super::*;

    /// Submit one prompt and print the resulting dashboard, or the raw
    /// structured response with `json`
    pub async fn run_ask(config: Config, prompt: String, json: bool) -> Result<()> {
        tracing::info!("Requesting guidance");

        let service = create_service(&config.service)?;
        let mut app = App::new(config.chat);
        let dashboard = app.submit_prompt(service.as_ref(), &prompt).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&dashboard.session.data)?);
        } else {
            println!("{}", render_dashboard(dashboard));
        }
        Ok(())
    }
}

// Assistant chat
pub mod assistant {
    //! Free-form assistant chat over the `/chat` endpoint.

    use super::*;
    use crate::assistant::Transcript;

    /// Start the assistant chat, sending `prompt` first when given
    pub async fn run_assistant(config: Config, prompt: Option<String>) -> Result<()> {
        tracing::info!("Starting assistant chat");

        let service = create_service(&config.service)?;
        let mut transcript = Transcript::new();
        let mut rl = DefaultEditor::new()?;

        println!("{}", "Assistant".bold());
        println!("{}\n", "Ask anything. Type 'exit' to quit.".dimmed());

        if let Some(text) = prompt {
            send(&mut transcript, service.as_ref(), &text).await;
        }

        let prompt = format!("[{}] >> ", "ASSISTANT".blue());
        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if matches!(parse_special_command(trimmed), Ok(SpecialCommand::Exit)) {
                        break;
                    }
                    rl.add_history_entry(trimmed)?;
                    send(&mut transcript, service.as_ref(), trimmed).await;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn send(transcript: &mut Transcript, service: &dyn GuidanceService, text: &str) {
        println!("{}", "Thinking...".dimmed());
        if let Some(reply) = transcript.send(service, text).await {
            println!("{}\n", render_transcript_message(reply));
        }
    }
}

// Company directory
pub mod directory {
    use super::*;

    /// Print one directory tab (employees by default)
    pub fn show_directory(tab: Option<String>) -> Result<()> {
        let tab = match tab.as_deref() {
            Some(name) => DirectoryTab::parse_str(name).map_err(anyhow::Error::msg)?,
            None => DirectoryTab::default(),
        };
        tracing::debug!("Showing directory tab {}", tab);
        println!("{}", render_directory(tab));
        Ok(())
    }
}
