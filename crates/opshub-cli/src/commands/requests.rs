//! Resource request log commands (read-only).

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use opshub_core::error::AppError;
use opshub_entity::request::ResourceRequest;
use opshub_state::RequestLog;

use crate::output::{self, OutputFormat};

/// Resource request log arguments
#[derive(Debug, Args)]
pub struct RequestArgs {
    #[command(subcommand)]
    pub command: RequestCommands,
}

/// Resource request subcommands
#[derive(Debug, Subcommand)]
pub enum RequestCommands {
    /// List resource requests
    List,
    /// Show one request in full detail
    Show {
        /// Request identifier, e.g. RR-001
        id: String,
    },
}

/// A display row for the requests table
#[derive(Debug, Serialize, Tabled)]
struct RequestRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    request_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Requested by")]
    requested_by: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Items")]
    items: usize,
}

impl From<&ResourceRequest> for RequestRow {
    fn from(request: &ResourceRequest) -> Self {
        Self {
            id: request.id.to_string(),
            request_type: request.request_type.clone(),
            status: request.status.to_string(),
            priority: request.priority.to_string(),
            requested_by: request.requested_by.clone(),
            department: request.department.clone(),
            items: request.items.len(),
        }
    }
}

/// Execute a requests subcommand
pub fn execute(args: &RequestArgs, format: OutputFormat) -> Result<(), AppError> {
    let log = RequestLog::seeded();

    match &args.command {
        RequestCommands::List => {
            let rows: Vec<RequestRow> = log.requests().iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }
        RequestCommands::Show { id } => {
            let request = log
                .get(id)
                .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;
            output::print_item(request, format);
        }
    }

    Ok(())
}
