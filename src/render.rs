//! Terminal rendering for every view
//!
//! Renderers return strings so the REPL decides where output goes and tests
//! can inspect it. Color is controlled globally through `colored::control`.

use crate::app::Dashboard;
use crate::assistant::{Role, TranscriptMessage};
use crate::directory::{self, DirectoryTab, COMPANY, EMPLOYEES};
use crate::guidance::{ActionPoint, Category, ConsiderPoint, Priority};
use crate::mission::MissionLedger;
use crate::session::SessionStore;
use colored::{ColoredString, Colorize};
use prettytable::{format, Table};
use std::fmt::Write;

/// Prompts offered on the chat screen
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "Staff meeting in 5. Help me generate a plan based off of company policy",
    "I need to prepare for a client presentation tomorrow",
    "How should I handle a difficult team conflict?",
    "What's the best approach for quarterly goal setting?",
];

/// Colored `[HIGH]` / `[MEDIUM]` / `[LOW]` badge
pub fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("[{} PRIORITY]", priority.as_str().to_uppercase());
    match priority {
        Priority::High => label.red().bold(),
        Priority::Medium => label.yellow().bold(),
        Priority::Low => label.green().bold(),
    }
}

fn category_badge(point: &ConsiderPoint) -> Option<ColoredString> {
    let raw = point.category.as_deref()?;
    let label = format!("[{}]", raw.to_lowercase());
    Some(match Category::from_lenient(raw) {
        Category::Risk => label.red(),
        Category::Opportunity => label.cyan(),
        Category::Process => label.purple(),
        Category::People => label.green(),
        Category::Communication => label.yellow(),
    })
}

/// Chat screen: title, example prompts and navigation hints
pub fn render_chat_home(mission_count: usize, max_prompt_chars: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "INTERACTIF".bold());
    let _ = writeln!(out, "{}", "Your internal guidance companion".dimmed());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "How can I help you today?".bold());
    let _ = writeln!(
        out,
        "Get instant guidance, action plans, and mindful considerations for your daily tasks."
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Try asking about:");
    for (i, example) in EXAMPLE_PROMPTS.iter().enumerate() {
        let _ = writeln!(out, "  {} \"{}\"", format!("{}.", i + 1).cyan(), example);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Type your situation (max {} characters), {} to use an example, {} for the company directory.",
        max_prompt_chars,
        "/example N".cyan(),
        "/directory".cyan()
    );
    if mission_count > 0 {
        let _ = writeln!(
            out,
            "You have {} completed mission(s). Type {} to review them.",
            mission_count,
            "/analysis".cyan()
        );
    }
    out
}

fn render_action(out: &mut String, index: usize, action: &ActionPoint, completed: bool) {
    let check = if completed { "[x]".green() } else { "[ ]".normal() };
    let task = if completed {
        action.task.strikethrough().dimmed()
    } else {
        action.task.bold()
    };
    let _ = writeln!(
        out,
        "  {} {:>2}. {} {}",
        check,
        index + 1,
        priority_badge(action.priority),
        task
    );
    if let Some(due) = &action.due_date {
        let _ = writeln!(out, "         Due: {}", due);
    }
    if let Some(context) = &action.context {
        let _ = writeln!(out, "         {}", context.dimmed());
    }
    let contact = directory::recommend_for_action(index);
    let _ = writeln!(
        out,
        "         Ask: {} ({}, {})",
        contact.name, contact.position, contact.email
    );
}

fn render_consideration(out: &mut String, index: usize, point: &ConsiderPoint, reflection: Option<&str>) {
    let badge = category_badge(point)
        .map(|b| format!("{} ", b))
        .unwrap_or_default();
    let _ = writeln!(out, "  {:>2}. {}{}", index + 1, badge, point.note);
    if let Some(related) = &point.related_to_action {
        let _ = writeln!(out, "      Related to: {}", related);
    }
    match reflection {
        Some(text) => {
            let _ = writeln!(out, "      {} {}", "Reflection:".green(), text);
        }
        None => {
            let _ = writeln!(out, "      {}", "Not reflected yet".dimmed());
        }
    }
}

/// Dashboard: progress, action cards (incomplete first) and considerations
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let actions = &dashboard.actions;
    let considerations = &dashboard.considerations;
    let mut out = String::new();

    let _ = writeln!(out, "{}", "YOUR ACTION PLAN".bold());
    let _ = writeln!(
        out,
        "{} - {}",
        dashboard.session.name,
        dashboard.session.timestamp.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Action Points: {}/{} completed ({}%)   Considerations: {}/{} reflected ({}%)",
        actions.completed_count(),
        actions.len(),
        actions.completion_percent(),
        considerations.reflected_count(),
        considerations.len(),
        considerations.reflection_percent()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Action Points".bold().underline());
    if actions.is_empty() {
        let _ = writeln!(out, "  No action points generated");
    }
    for index in actions.display_order() {
        if let Some(action) = actions.get(index) {
            render_action(&mut out, index, action, actions.is_completed(index));
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Mindful Considerations".bold().underline());
    if considerations.is_empty() {
        let _ = writeln!(out, "  No considerations generated");
    }
    for (index, point) in considerations.points().iter().enumerate() {
        render_consideration(&mut out, index, point, considerations.reflection(index));
    }
    out
}

/// Analysis: aggregate stats and the mission timeline
pub fn render_analysis(ledger: &MissionLedger) -> String {
    let summary = ledger.summary();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "MISSION ANALYSIS".bold());
    let _ = writeln!(out, "{}", "Your journey over time".dimmed());
    let _ = writeln!(out);

    let mut stats = Table::new();
    stats.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    stats.add_row(prettytable::row![
        "Total Missions".bold(),
        "Action Completion".bold(),
        "Total Reflections".bold()
    ]);
    stats.add_row(prettytable::row![
        summary.total_missions,
        format!("{}%", summary.completion_rate()),
        summary.total_reflections
    ]);
    let _ = write!(out, "{}", stats);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "MISSION TIMELINE".bold());
    if ledger.is_empty() {
        let _ = writeln!(
            out,
            "No completed missions yet. Finish your first mission to see it here!"
        );
        return out;
    }

    let mut timeline = Table::new();
    timeline.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    timeline.add_row(prettytable::row![
        "Mission".bold(),
        "Date".bold(),
        "Actions".bold(),
        "Reflections".bold()
    ]);
    for mission in ledger.missions() {
        timeline.add_row(prettytable::row![
            mission.name,
            mission.timestamp.format("%Y-%m-%d"),
            format!("{}/{} actions", mission.completed_actions, mission.total_actions),
            format!(
                "{}/{} reflections",
                mission.reflections, mission.total_considerations
            )
        ]);
    }
    let _ = write!(out, "{}", timeline);
    out
}

/// Sessions submitted so far, newest first
pub fn render_sessions(store: &SessionStore) -> String {
    let mut out = String::new();
    if store.is_empty() {
        let _ = writeln!(out, "No sessions yet.");
        return out;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(prettytable::row![
        "Session".bold(),
        "Time".bold(),
        "Actions".bold(),
        "Considerations".bold()
    ]);
    for session in store.iter() {
        table.add_row(prettytable::row![
            session.name,
            session.timestamp.format("%Y-%m-%d %H:%M"),
            session.data.action_points.len(),
            session.data.consider_points.len()
        ]);
    }
    let _ = write!(out, "{}", table);
    out
}

/// Directory: company facts plus the selected tab
pub fn render_directory(tab: DirectoryTab) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", COMPANY.name.bold());
    let _ = writeln!(out, "{}", COMPANY.tagline.dimmed());
    let _ = writeln!(
        out,
        "{} Employees | {} Departments | {} Active Projects | {} Years in Business",
        COMPANY.employees, COMPANY.departments, COMPANY.active_projects, COMPANY.years_in_business
    );
    let _ = writeln!(out);

    let tabs: Vec<String> = DirectoryTab::ALL
        .iter()
        .map(|t| {
            if *t == tab {
                format!("[{}]", t).bold().to_string()
            } else {
                t.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));
    let _ = writeln!(out);

    if let Some(note) = tab.coming_soon() {
        let _ = writeln!(out, "{} Coming Soon", tab);
        let _ = writeln!(out, "{}", note);
        return out;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(prettytable::row![
        "Name".bold(),
        "Position".bold(),
        "Department".bold(),
        "Email".bold(),
        "Experience".bold(),
        "Expertise".bold(),
        "Mentor".bold()
    ]);
    for employee in EMPLOYEES {
        let mentor = if employee.available_for_mentorship {
            "yes"
        } else {
            "-"
        };
        table.add_row(prettytable::row![
            employee.name,
            employee.position,
            employee.department,
            employee.email,
            employee.experience,
            employee.expertise.join(", "),
            mentor
        ]);
    }
    let _ = write!(out, "{}", table);
    out
}

/// One transcript line for the assistant chat
pub fn render_transcript_message(message: &TranscriptMessage) -> String {
    match message.role {
        Role::User => format!("{} {}", "you:".cyan().bold(), message.text),
        Role::Assistant if message.is_error => {
            format!("{} {}", "assistant:".blue().bold(), message.text.red())
        }
        Role::Assistant => format!("{} {}", "assistant:".blue().bold(), message.text),
    }
}
