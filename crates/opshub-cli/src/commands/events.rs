//! Significant events board commands.

use clap::{Args, Subcommand};
use dialoguer::{Input, Select};
use serde::Serialize;
use tabled::Tabled;

use opshub_core::error::AppError;
use opshub_core::types::FilterQuery;
use opshub_entity::event::{Event, EventStatus};
use opshub_entity::priority::Priority;
use opshub_state::EventBoard;

use crate::output::{self, OutputFormat};

use super::prompt_error;

const PRIORITIES: [Priority; 4] = [
    Priority::Critical,
    Priority::High,
    Priority::Medium,
    Priority::Low,
];

const STATUSES: [EventStatus; 2] = [EventStatus::Active, EventStatus::Resolved];

/// Events board arguments
#[derive(Debug, Args)]
pub struct EventArgs {
    #[command(subcommand)]
    pub command: EventCommands,
}

/// Events board subcommands
#[derive(Debug, Subcommand)]
pub enum EventCommands {
    /// List events on the board
    List {
        /// Case-insensitive search over title and assigned teams
        #[arg(long, default_value = "")]
        search: String,
        /// Filter by event type ("all" for no restriction)
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Show one event in full detail
    Show {
        /// Event identifier, e.g. EV-001
        id: String,
    },
    /// Create a new event interactively
    Create,
    /// Edit an existing event interactively
    Edit {
        /// Event identifier, e.g. EV-001
        id: String,
    },
    /// Close an event (sets its status to Resolved)
    Close {
        /// Event identifier, e.g. EV-001
        id: String,
    },
}

/// A display row for the events table
#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    event_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Teams")]
    teams: String,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            event_type: event.event_type.clone(),
            status: event.status.to_string(),
            priority: event.priority.to_string(),
            location: event.location.clone(),
            teams: event.assigned_teams.join(", "),
        }
    }
}

/// Execute an events subcommand
pub fn execute(args: &EventArgs, format: OutputFormat) -> Result<(), AppError> {
    let mut board = EventBoard::seeded();

    match &args.command {
        EventCommands::List { search, category } => {
            let query = FilterQuery::new(search.clone(), category.clone());
            let rows: Vec<EventRow> = board.filtered(&query).into_iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }
        EventCommands::Show { id } => {
            let event = board
                .get(id)
                .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;
            output::print_item(event, format);
        }
        EventCommands::Create => {
            board.open_new();
            fill_event_draft(&mut board)?;
            let event = board.create()?;
            output::print_success(&format!("Created event {}", event.id));
            output::print_item(&event, format);
        }
        EventCommands::Edit { id } => {
            board.open_edit(id)?;
            fill_event_draft(&mut board)?;
            let event = board.save_edit()?;
            output::print_success(&format!("Updated event {}", event.id));
            output::print_item(&event, format);
        }
        EventCommands::Close { id } => {
            if board.get(id).is_none() {
                return Err(AppError::not_found(format!("Event {id} not found")));
            }
            if !board.can_close(id) {
                output::print_warning(&format!("Event {id} is already resolved"));
                return Ok(());
            }
            board.close_event(id);
            output::print_success(&format!("Closed event {id}"));
        }
    }

    Ok(())
}

/// Prompt for every event field, replacing the draft one field at a time.
fn fill_event_draft(board: &mut EventBoard) -> Result<(), AppError> {
    let current = board
        .draft()
        .ok_or_else(|| AppError::conflict("No event form is open"))?
        .clone();

    let title: String = Input::new()
        .with_prompt("Title")
        .with_initial_text(current.title.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let event_type: String = Input::new()
        .with_prompt("Type")
        .with_initial_text(current.event_type.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let status_index = Select::new()
        .with_prompt("Status")
        .items(&STATUSES.map(|s| s.as_str()))
        .default(STATUSES.iter().position(|s| *s == current.status).unwrap_or(0))
        .interact()
        .map_err(prompt_error)?;

    let priority_index = Select::new()
        .with_prompt("Priority")
        .items(&PRIORITIES.map(|p| p.as_str()))
        .default(
            PRIORITIES
                .iter()
                .position(|p| *p == current.priority)
                .unwrap_or(2),
        )
        .interact()
        .map_err(prompt_error)?;

    let location: String = Input::new()
        .with_prompt("Location")
        .with_initial_text(current.location.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let start_date: String = Input::new()
        .with_prompt("Start date")
        .with_initial_text(current.start_date.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let description: String = Input::new()
        .with_prompt("Description")
        .with_initial_text(current.description.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let draft = board
        .draft_mut()
        .ok_or_else(|| AppError::conflict("No event form is open"))?;
    draft.set_title(title);
    draft.set_event_type(event_type);
    draft.set_status(STATUSES[status_index]);
    draft.set_priority(PRIORITIES[priority_index]);
    draft.set_location(location);
    draft.set_start_date(start_date);
    draft.set_description(description);

    // Teams are edited with explicit add actions; blank input finishes.
    loop {
        let team: String = Input::new()
            .with_prompt("Add team (blank to finish)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        if team.trim().is_empty() {
            break;
        }
        board
            .draft_mut()
            .ok_or_else(|| AppError::conflict("No event form is open"))?
            .add_team(&team);
    }

    Ok(())
}
