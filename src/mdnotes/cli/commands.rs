use super::print::{print_listing, print_messages, print_note, print_note_summaries};
use super::setup::{Cli, Commands, ListKind};
use clap::Parser;
use mdnotes::api::{ConfigAction, NotesApi};
use mdnotes::commands::create::unescape_newlines;
use mdnotes::config::NotesConfig;
use mdnotes::editor::{edit_text, get_editor, heading_seed};
use mdnotes::error::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: NotesApi,
    config: NotesConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = NotesConfig::default_dir()?;

    // Config does not need a notes directory
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        Some(Commands::List { kind, refresh }) => handle_list(&mut ctx, kind, refresh),
        Some(Commands::Read { note_path }) => handle_read(&ctx, &note_path),
        Some(Commands::Create {
            title,
            folder,
            content,
            editor,
        }) => handle_create(&mut ctx, title, folder, content, editor),
        Some(Commands::Notes { json, content }) => handle_notes(&mut ctx, json, content),
        Some(Commands::Update {
            note_path,
            content,
            editor,
        }) => handle_update(&ctx, &note_path, content, editor),
        Some(Commands::Delete { note_path }) => handle_delete(&mut ctx, &note_path),
        Some(Commands::Refresh) => handle_refresh(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&mut ctx, ListKind::All, false),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mdnotes=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mdnotes=warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let config = NotesConfig::load(config_dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        NotesConfig::default()
    });

    let root = cli
        .path
        .clone()
        .or_else(|| config.root.clone())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    tracing::debug!("Using notes directory {}", root.display());

    let api = NotesApi::open(&root, &config)?;
    Ok(AppContext { api, config })
}

fn handle_list(ctx: &mut AppContext, kind: ListKind, refresh: bool) -> Result<()> {
    let result = ctx.api.list(kind.into(), refresh)?;
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_read(ctx: &AppContext, note_path: &str) -> Result<()> {
    let result = ctx.api.read_note(note_path)?;
    if let (Some(path), Some(content)) = (&result.note_path, &result.content) {
        print_note(path, content);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    folder: Option<String>,
    content: Option<String>,
    use_editor: bool,
) -> Result<()> {
    let content = if use_editor {
        let editor = get_editor(ctx.config.editor.as_deref());
        Some(edit_text(
            &heading_seed(&title),
            ctx.api.store().note_ext(),
            &editor,
        )?)
    } else {
        content.map(|c| unescape_newlines(&c))
    };

    let result = ctx.api.create_note(&title, content, folder.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_notes(ctx: &mut AppContext, json: bool, include_content: bool) -> Result<()> {
    let result = ctx.api.notes_metadata(include_content)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.notes)?);
    } else {
        print_note_summaries(&result.notes);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &AppContext,
    note_path: &str,
    content: Option<String>,
    use_editor: bool,
) -> Result<()> {
    let content = if use_editor {
        let current = ctx.api.read_note(note_path)?;
        let Some(existing) = current.content else {
            print_messages(&current.messages);
            return Ok(());
        };
        let editor = get_editor(ctx.config.editor.as_deref());
        edit_text(&existing, ctx.api.store().note_ext(), &editor)?
    } else {
        unescape_newlines(&content.unwrap_or_default())
    };

    let result = ctx.api.update_note(note_path, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, note_path: &str) -> Result<()> {
    let result = ctx.api.delete_note(note_path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_refresh(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.refresh()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = NotesApi::config(config_dir, action)?;
    if let Some(config) = &result.config {
        for key in NotesConfig::KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
