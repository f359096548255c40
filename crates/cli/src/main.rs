use api_shared::dto::{CreateNoteReq, NoteRes, UpdateNoteReq};
use clap::{Parser, Subcommand};
use notes_core::{open_store, CoreConfig, Note, NotesService};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Notes service CLI")]
struct Cli {
    /// Data directory (defaults to NOTES_DATA_DIR, then "notes_data")
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes
    List,
    /// Show one note as JSON
    Get {
        /// Note id (24 hex characters)
        id: String,
    },
    /// Create a note
    Create {
        /// Owning user id
        user: String,
        /// Title, unique ignoring case
        title: String,
        /// Note body
        text: String,
        /// Display name of the owner (optional)
        #[arg(long)]
        username: Option<String>,
    },
    /// Overwrite every field of a note
    Update {
        /// Note id (24 hex characters)
        id: String,
        /// Owning user id
        user: String,
        /// Title, unique ignoring case
        title: String,
        /// Note body
        text: String,
        /// Mark the note as completed
        #[arg(long)]
        completed: bool,
        /// Display name of the owner; omitted clears it
        #[arg(long)]
        username: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note id (24 hex characters)
        id: String,
    },
}

fn summary(note: &Note) -> String {
    format!(
        "ID: {}, Title: {}, User: {}, Completed: {}, Created: {}",
        note.id, note.title, note.user, note.completed, note.created_at
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.or_else(|| std::env::var("NOTES_DATA_DIR").ok());
    // The CLI always works on the persistent store and lists empty collections quietly.
    let cfg = Arc::new(CoreConfig::from_env_values(
        data_dir,
        Some("file".into()),
        Some("false".into()),
    )?);
    let service = NotesService::new(cfg.clone(), open_store(&cfg)?);

    match cli.command {
        Some(Commands::List) => {
            let notes = service.list().await?;
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                for note in &notes {
                    println!("{}", summary(note));
                }
            }
        }
        Some(Commands::Get { id }) => {
            let note = service.get(&id).await?;
            println!("{}", serde_json::to_string_pretty(&NoteRes::from(note))?);
        }
        Some(Commands::Create {
            user,
            title,
            text,
            username,
        }) => {
            let note = service
                .create(CreateNoteReq {
                    userid: Some(user),
                    title: Some(title),
                    text: Some(text),
                    username,
                })
                .await?;
            println!("New note '{}' created with ID: {}", note.title, note.id);
        }
        Some(Commands::Update {
            id,
            user,
            title,
            text,
            completed,
            username,
        }) => {
            let note = service
                .update(
                    &id,
                    UpdateNoteReq {
                        user: Some(user),
                        title: Some(title),
                        text: Some(text),
                        completed: Some(completed),
                        username,
                    },
                )
                .await?;
            println!("Updated {}", summary(&note));
        }
        Some(Commands::Delete { id }) => {
            let note = service.delete(&id).await?;
            println!("Note {} with ID {} deleted", note.title, note.id);
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
