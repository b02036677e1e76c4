//! Terminal front-end for the roster record manager.
//!
//! Provides the `roster` binary with subcommands for listing, adding,
//! editing, and removing student records against a running roster server.
//!
//! `list`, `add`, and `rm` drive the same [`roster_client::state`] reducer
//! the UI uses, with effects executed against [`roster_client::ApiClient`];
//! `edit` exercises the API's partial-update contract directly.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};

use roster_client::{update, ApiClient, Effect, Event, FormState};
use roster_core::{Field, RecordId, StudentFields, StudentPatch};

/// Roster record manager.
#[derive(Parser)]
#[command(name = "roster", about = "Student record manager")]
struct Cli {
    /// Base URL of the roster server.
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List all student records.
    List,

    /// Add a new student record.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        grade: String,
        #[arg(long)]
        class: String,
        /// 10-digit contact number.
        #[arg(long)]
        contact: String,
        #[arg(long)]
        address: String,
    },

    /// Update fields of an existing record (omitted flags keep their value).
    Edit {
        /// Record id (24 hex chars).
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a record.
    Rm {
        /// Record id (24 hex chars).
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let api = ApiClient::new(cli.server.clone());

    let exit_code = match cli.command {
        Commands::List => run_list(&api).await,
        Commands::Add {
            name,
            grade,
            class,
            contact,
            address,
        } => {
            let fields = StudentFields {
                name,
                grade,
                class,
                contact,
                address,
            };
            run_add(&api, fields).await
        }
        Commands::Edit {
            id,
            name,
            grade,
            class,
            contact,
            address,
        } => {
            let patch = StudentPatch {
                name,
                grade,
                class,
                contact,
                address,
            };
            run_edit(&api, &id, patch).await
        }
        Commands::Rm { id, yes } => run_rm(&api, &id, yes).await,
    };
    process::exit(exit_code);
}

/// Executes effects from the reducer until none remain, prompting for delete
/// confirmation when asked.
async fn drive(api: &ApiClient, state: &mut FormState, mut effect: Option<Effect>, assume_yes: bool) {
    while let Some(current) = effect.take() {
        let event = match current {
            Effect::FetchRecords => match api.list().await {
                Ok(records) => Event::RecordsLoaded(records),
                Err(e) => Event::LoadFailed(e.to_string()),
            },
            Effect::CreateRecord(fields) => match api.create(&fields).await {
                Ok(created) => {
                    println!("added student {}", created.id);
                    Event::SaveCompleted
                }
                Err(e) => Event::SaveFailed(e.to_string()),
            },
            Effect::UpdateRecord(id, fields) => {
                match api.update(id, &StudentPatch::from_fields(&fields)).await {
                    Ok(()) => Event::SaveCompleted,
                    Err(e) => Event::SaveFailed(e.to_string()),
                }
            }
            Effect::ConfirmDelete(id) => {
                if assume_yes || confirm(&format!("delete student {}? [y/N] ", id)) {
                    Event::DeleteConfirmed(id)
                } else {
                    Event::DeleteDeclined
                }
            }
            Effect::DeleteRecord(id) => match api.delete(id).await {
                Ok(()) => {
                    println!("deleted student {}", id);
                    Event::DeleteCompleted
                }
                Err(e) => Event::DeleteFailed(e.to_string()),
            },
            // Meaningless in a terminal; nothing to do.
            Effect::ScrollToTop => continue,
        };
        effect = update(state, event);
    }
}

async fn run_list(api: &ApiClient) -> i32 {
    let mut state = FormState::default();
    let effect = update(&mut state, Event::Started);
    drive(api, &mut state, effect, false).await;

    if let Some(banner) = &state.banner {
        eprintln!("error: {}", banner);
        return 1;
    }
    if state.records.is_empty() {
        println!("no students found");
        return 0;
    }
    println!(
        "{:<24}  {:<20}  {:<6}  {:<6}  {:<10}  {}",
        "ID", "NAME", "GRADE", "CLASS", "CONTACT", "ADDRESS"
    );
    for s in &state.records {
        println!(
            "{:<24}  {:<20}  {:<6}  {:<6}  {:<10}  {}",
            s.id, s.fields.name, s.fields.grade, s.fields.class, s.fields.contact, s.fields.address
        );
    }
    0
}

async fn run_add(api: &ApiClient, fields: StudentFields) -> i32 {
    let mut state = FormState::default();
    for field in Field::ALL {
        update(
            &mut state,
            Event::FieldChanged {
                field,
                value: fields.get(field).to_string(),
            },
        );
    }

    let effect = update(&mut state, Event::SubmitRequested);
    if !state.errors.is_empty() {
        for (field, message) in state.errors.iter() {
            eprintln!("{}: {}", field, message);
        }
        return 1;
    }

    drive(api, &mut state, effect, false).await;
    if let Some(banner) = &state.banner {
        eprintln!("error: {}", banner);
        return 1;
    }
    0
}

async fn run_edit(api: &ApiClient, raw_id: &str, patch: StudentPatch) -> i32 {
    // Reject malformed ids locally, before any request.
    let id = match RecordId::parse(raw_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: {}", e);
            return 1;
        }
    };
    if patch.is_empty() {
        eprintln!("error: nothing to update (pass at least one field flag)");
        return 1;
    }

    match api.update(id, &patch).await {
        Ok(()) => {
            println!("updated student {}", id);
            0
        }
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}

async fn run_rm(api: &ApiClient, raw_id: &str, yes: bool) -> i32 {
    let id = match RecordId::parse(raw_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: {}", e);
            return 1;
        }
    };

    let mut state = FormState::default();
    let effect = update(&mut state, Event::DeleteRequested(id));
    drive(api, &mut state, effect, yes).await;

    if let Some(banner) = &state.banner {
        eprintln!("error: {}", banner);
        return 1;
    }
    0
}

/// Prompts on stdout and reads a y/N answer from stdin.
fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}
