//! File library commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input, Select};
use serde::Serialize;
use tabled::Tabled;

use opshub_core::error::AppError;
use opshub_entity::file::{FileKind, StoredFile};
use opshub_state::FileLibrary;

use crate::notify::ConsoleNotifier;
use crate::output::{self, OutputFormat};

use super::prompt_error;

const KINDS: [FileKind; 4] = [
    FileKind::Document,
    FileKind::Pdf,
    FileKind::Image,
    FileKind::Spreadsheet,
];

/// File library arguments
#[derive(Debug, Args)]
pub struct FileArgs {
    #[command(subcommand)]
    pub command: FileCommands,
}

/// File library subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommands {
    /// List library files
    List {
        /// Case-insensitive search over name and tags
        #[arg(long, default_value = "")]
        search: String,
        /// Filter by category ("all" for no restriction)
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// List the category selector options
    Categories,
    /// Show one file in full detail
    Show {
        /// File identifier, e.g. DOC-001
        id: String,
    },
    /// Upload a new file interactively (metadata only; no bytes move)
    Upload,
    /// Edit a file's metadata interactively
    Edit {
        /// File identifier, e.g. DOC-001
        id: String,
    },
    /// Share a file with a destination address
    Share {
        /// File identifier, e.g. DOC-001
        id: String,
        /// Destination address; prompted for when omitted
        #[arg(long)]
        to: Option<String>,
    },
    /// Acknowledge a download of a file
    Download {
        /// File identifier, e.g. DOC-001
        id: String,
    },
    /// Delete a file from the library
    Delete {
        /// File identifier, e.g. DOC-001
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// A display row for the files table
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Uploaded")]
    upload_date: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&StoredFile> for FileRow {
    fn from(file: &StoredFile) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.name.clone(),
            kind: file.kind.to_string(),
            size: file.size.clone(),
            category: file.category.clone(),
            upload_date: file.upload_date.clone(),
            tags: file.tags.join(", "),
        }
    }
}

/// Execute a files subcommand
pub fn execute(args: &FileArgs, format: OutputFormat) -> Result<(), AppError> {
    let mut library = FileLibrary::seeded(Arc::new(ConsoleNotifier));

    match &args.command {
        FileCommands::List { search, category } => {
            library.set_search(search.clone());
            library.set_category(category.clone());
            let rows: Vec<FileRow> = library.visible().into_iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }
        FileCommands::Categories => {
            for category in library.categories() {
                println!("{category}");
            }
        }
        FileCommands::Show { id } => {
            let file = library
                .get(id)
                .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;
            output::print_item(file, format);
        }
        FileCommands::Upload => {
            library.open_upload();
            fill_file_draft(&mut library)?;
            let file = library.upload()?;
            output::print_success(&format!("Uploaded {} as {}", file.name, file.id));
            output::print_item(&file, format);
        }
        FileCommands::Edit { id } => {
            library.open_edit(id)?;
            fill_file_draft(&mut library)?;
            let file = library.save_edit()?;
            output::print_success(&format!("Updated file {}", file.id));
            output::print_item(&file, format);
        }
        FileCommands::Share { id, to } => {
            library.open_share(id)?;
            let destination = match to {
                Some(to) => to.clone(),
                None => Input::new()
                    .with_prompt("Share with")
                    .interact_text()
                    .map_err(prompt_error)?,
            };
            library.share(&destination)?;
        }
        FileCommands::Download { id } => {
            library.download(id)?;
        }
        FileCommands::Delete { id, yes } => {
            let name = library
                .get(id)
                .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?
                .name
                .clone();
            // Destructive and irreversible: require explicit confirmation.
            let confirmed = *yes
                || Confirm::new()
                    .with_prompt(format!("Delete {name}? This cannot be undone"))
                    .default(false)
                    .interact()
                    .map_err(prompt_error)?;
            if !confirmed {
                output::print_warning("Delete cancelled");
                return Ok(());
            }
            library.delete(id);
            output::print_success(&format!("Deleted {name}"));
        }
    }

    Ok(())
}

/// Prompt for every file metadata field, replacing the draft one field at
/// a time.
fn fill_file_draft(library: &mut FileLibrary) -> Result<(), AppError> {
    let current = library
        .draft()
        .ok_or_else(|| AppError::conflict("No file form is open"))?
        .clone();

    let name: String = Input::new()
        .with_prompt("File name")
        .with_initial_text(current.name.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let kind_index = Select::new()
        .with_prompt("Kind")
        .items(&KINDS.map(|k| k.as_str()))
        .default(KINDS.iter().position(|k| *k == current.kind).unwrap_or(0))
        .interact()
        .map_err(prompt_error)?;

    let size: String = Input::new()
        .with_prompt("Size (display only)")
        .with_initial_text(current.size.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let uploaded_by: String = Input::new()
        .with_prompt("Uploaded by")
        .with_initial_text(current.uploaded_by.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let category: String = Input::new()
        .with_prompt("Category")
        .with_initial_text(current.category.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let tags: String = Input::new()
        .with_prompt("Tags (comma-separated)")
        .with_initial_text(current.tags_input.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let draft = library
        .draft_mut()
        .ok_or_else(|| AppError::conflict("No file form is open"))?;
    draft.set_name(name);
    draft.set_kind(KINDS[kind_index]);
    draft.set_size(size);
    draft.set_uploaded_by(uploaded_by);
    draft.set_category(category);
    draft.set_tags_input(tags);

    Ok(())
}
