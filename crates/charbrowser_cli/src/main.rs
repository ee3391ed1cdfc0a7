//! Command-line front end for the character browser core.
//!
//! # Responsibility
//! - Map CLI arguments onto `BrowserConfig` and `ViewParams`.
//! - Render list/detail views as plain text.

use charbrowser_core::db::open_db;
use charbrowser_core::{
    AnnotationStore, BrowserConfig, BrowserSession, DetailView, JsonFileCharacterSource,
    KeyValueStore, LogNotifier, MemoryKeyValueStore, Notice, NoticeKind, Notifier, SortOrder,
    SpeciesFilter, SqliteKeyValueStore, TypeFilter, ViewParams,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "charbrowser", version, about = "Browse characters with local annotations")]
struct Cli {
    /// Saved GraphQL `characters` response (JSON); required except for `ping`.
    #[arg(long, env = "CHARBROWSER_CHARACTERS")]
    characters: Option<PathBuf>,

    /// SQLite file holding annotations.
    #[arg(long, env = "CHARBROWSER_DB", conflicts_with = "ephemeral")]
    db: Option<PathBuf>,

    /// Keep annotations in memory for this run only.
    #[arg(long)]
    ephemeral: bool,

    #[arg(long, env = "CHARBROWSER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for log files; logging is off when omitted.
    #[arg(long, env = "CHARBROWSER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List characters through the view filters.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long = "type", default_value = "all")]
        type_filter: TypeFilter,
        #[arg(long, default_value = "all")]
        species: SpeciesFilter,
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },
    /// Show one character with its annotation.
    Show { id: String },
    /// Toggle the favorite flag.
    Favorite { id: String },
    /// Soft-delete, or restore when already deleted.
    Delete { id: String },
    /// Replace the comment.
    Comment { id: String, text: String },
    /// Print core linkage and version, then exit.
    Ping,
}

impl Cli {
    fn config(&self) -> BrowserConfig {
        let defaults = BrowserConfig::default();
        BrowserConfig {
            db_path: if self.ephemeral {
                None
            } else {
                self.db.clone().or(defaults.db_path)
            },
            log_level: self.log_level.clone().unwrap_or(defaults.log_level),
            log_dir: self.log_dir.clone(),
        }
    }
}

/// Prints notices to stderr and forwards them to the log.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "removed",
        };
        eprintln!("[{tag}] {}", notice.message);
        LogNotifier.notify(notice);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Command::Ping = cli.command {
        println!("charbrowser_core ping={}", charbrowser_core::ping());
        println!("charbrowser_core version={}", charbrowser_core::core_version());
        return ExitCode::SUCCESS;
    }

    let config = cli.config();
    if let Err(err) = config.init_logging() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let result = match &config.db_path {
        Some(path) => match open_db(path) {
            Ok(conn) => run(SqliteKeyValueStore::new(&conn), &cli),
            Err(err) => Err(err.to_string()),
        },
        None => run(MemoryKeyValueStore::new(), &cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<S: KeyValueStore>(storage: S, cli: &Cli) -> Result<(), String> {
    let characters = cli
        .characters
        .as_ref()
        .ok_or("--characters (or CHARBROWSER_CHARACTERS) is required")?;
    let store = AnnotationStore::open(storage);
    let source = JsonFileCharacterSource::new(characters);
    let mut session = BrowserSession::new(store, source, ConsoleNotifier);
    if let Some(err) = session.refresh().error.clone() {
        return Err(err);
    }

    match &cli.command {
        Command::List {
            search,
            type_filter,
            species,
            order,
        } => {
            session.set_params(ViewParams {
                search_term: search.clone(),
                type_filter: *type_filter,
                species_filter: species.clone(),
                sort_order: *order,
            });
            print_list(&session);
        }
        Command::Show { id } => print_detail(&session, id),
        Command::Favorite { id } => {
            session.toggle_favorite(id).map_err(|err| err.to_string())?;
            print_detail(&session, id);
        }
        Command::Delete { id } => {
            session.toggle_deleted(id).map_err(|err| err.to_string())?;
        }
        Command::Comment { id, text } => {
            let mut draft = session.open_comment_draft(id);
            draft.edit(text.clone());
            session
                .submit_comment(&draft)
                .map_err(|err| err.to_string())?;
            print_detail(&session, id);
        }
        Command::Ping => {}
    }
    Ok(())
}

type CliSession<S> = BrowserSession<S, JsonFileCharacterSource, ConsoleNotifier>;

fn print_list<S: KeyValueStore>(session: &CliSession<S>) {
    let view = session.list_view();
    if view.sections.iter().all(|section| section.cards.is_empty()) {
        println!("(no characters)");
        return;
    }
    for section in view.sections {
        if let Some(title) = section.title {
            println!("== {title}");
        }
        for card in section.cards {
            let marker = if card.restore_mode {
                "x"
            } else if card.favorite {
                "*"
            } else {
                " "
            };
            println!(
                "{marker} {:>5}  {}  ({})",
                card.character.id, card.character.name, card.character.species
            );
        }
    }
}

fn print_detail<S: KeyValueStore>(session: &CliSession<S>, id: &str) {
    match session.detail(id) {
        DetailView::Found {
            character,
            annotation,
        } => {
            println!("{} ({})", character.name, character.species);
            println!("  status:   {}", character.status.as_deref().unwrap_or("-"));
            println!("  gender:   {}", character.gender.as_deref().unwrap_or("-"));
            println!("  origin:   {}", character.origin_name().unwrap_or("-"));
            println!("  favorite: {}", annotation.favorite);
            println!("  deleted:  {}", annotation.deleted);
            if !annotation.comment.is_empty() {
                println!("  comment:  {}", annotation.comment);
            }
        }
        DetailView::NotFound { id, back } => {
            println!("character `{id}` not found; back to {}", back.path());
        }
    }
}
