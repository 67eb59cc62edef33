//! Startup wiring and command handlers.
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into [`Cli`]
//! 2. **Context Setup**: config, data directory, store, then one bootstrapped manager
//! 3. **Dispatch**: each handler receives the manager by reference
//! 4. **Output Formatting**: via `render`

use super::logging::init_logging;
use super::render;
use super::setup::{Cli, Commands};
use anyhow::{anyhow, Context};
use clap::Parser;
use log::debug;
use todoapp::init::{initialize, open_store};
use todoapp::manager::TodoManager;
use todoapp::model::{Snapshot, TodoId};
use todoapp::store::fs::FileStore;

type Manager = TodoManager<FileStore>;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose)?;

    let manager = create_manager(&cli)?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&manager, text),
        Some(Commands::List { json }) => handle_list(&manager, json),
        Some(Commands::Done { reference }) => handle_done(&manager, &reference),
        Some(Commands::Edit { reference, text }) => handle_edit(&manager, &reference, text),
        Some(Commands::Delete { reference }) => handle_delete(&manager, &reference),
        None => handle_list(&manager, false),
    }
}

fn create_manager(cli: &Cli) -> anyhow::Result<Manager> {
    let (config, paths) =
        initialize(cli.data_dir.as_deref()).context("failed to load configuration")?;
    if let Some(file) = &paths.config_file {
        debug!("config file {}", file.display());
    }
    debug!("using data dir {}", paths.data_dir.display());

    let mut store = open_store(&config, paths.data_dir)?;
    store.set_error_observer(|failure| {
        eprintln!("{}", render::warning(&format!("Warning: {}", failure)));
    });
    Ok(TodoManager::bootstrap(store))
}

/// Maps a list number (1-based) or a full id to an id present in `snapshot`.
fn resolve_reference(snapshot: &Snapshot, reference: &str) -> Option<TodoId> {
    if let Ok(index) = reference.parse::<usize>() {
        if index >= 1 && index <= snapshot.len() {
            return Some(snapshot[index - 1].id.clone());
        }
    }
    snapshot.find(reference).map(|todo| todo.id.clone())
}

fn require_reference(manager: &Manager, reference: &str) -> anyhow::Result<TodoId> {
    resolve_reference(&manager.snapshot(), reference)
        .ok_or_else(|| anyhow!("no todo matches `{}`", reference))
}

fn handle_add(manager: &Manager, text: Vec<String>) -> anyhow::Result<()> {
    let text = text.join(" ");
    let id = manager.create(text.clone())?;
    println!("{} {}", render::success("Added:"), text);
    println!("{}", id);
    Ok(())
}

fn handle_list(manager: &Manager, json: bool) -> anyhow::Result<()> {
    let snapshot = manager.snapshot();
    if json {
        print!("{}", render::render_json(&snapshot)?);
    } else {
        print!("{}", render::render_list(&snapshot));
    }
    Ok(())
}

fn handle_done(manager: &Manager, reference: &str) -> anyhow::Result<()> {
    let id = require_reference(manager, reference)?;
    manager.toggle_complete(&id)?;
    if let Some(todo) = manager.get(id.as_str()) {
        let verb = if todo.is_completed {
            "Completed:"
        } else {
            "Reopened:"
        };
        println!("{} {}", render::success(verb), todo.text);
    }
    Ok(())
}

fn handle_edit(manager: &Manager, reference: &str, text: Vec<String>) -> anyhow::Result<()> {
    let id = require_reference(manager, reference)?;
    let text = text.join(" ");
    manager.update(&id, text.clone())?;
    println!("{} {}", render::success("Updated:"), text);
    Ok(())
}

fn handle_delete(manager: &Manager, reference: &str) -> anyhow::Result<()> {
    let id = require_reference(manager, reference)?;
    let text = manager.get(id.as_str()).map(|todo| todo.text);
    manager.delete(&id)?;
    if let Some(text) = text {
        println!("{} {}", render::success("Deleted:"), text);
    }
    Ok(())
}
