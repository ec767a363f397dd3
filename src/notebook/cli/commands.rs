use super::args::{Cli, Commands};
use super::menu;
use super::print::{print_config, print_messages, print_notes, print_tags};
use super::prompt::Prompt;
use clap::Parser;
use directories::ProjectDirs;
use notebook::api::{CmdResult, ConfigAction, NoteUpdate, NotebookApi, NotebookPaths};
use notebook::config::NotebookConfig;
use notebook::error::Result;
use notebook::store::fs::FileStore;
use std::path::PathBuf;

const FILE_ENV: &str = "NOTEBOOK_FILE";
const CONFIG_DIR_ENV: &str = "NOTEBOOK_CONFIG_DIR";

pub(super) struct AppContext {
    pub api: NotebookApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            tags,
        }) => handle_add(&mut ctx, &title, &content, &tags),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { text }) => handle_search(&ctx, &text),
        Some(Commands::Tag { tag }) => handle_tag(&ctx, &tag),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::View { position }) => handle_view(&ctx, &position),
        Some(Commands::Edit {
            position,
            title,
            content,
            tags,
        }) => handle_edit(&mut ctx, &position, title, content, tags),
        Some(Commands::Delete { position, yes }) => handle_delete(&mut ctx, &position, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => menu::run(&mut ctx, &mut Prompt::stdin()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A second init (tests calling run twice) is harmless
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "notebook", "notebook");
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| proj_dirs.as_ref().map(|d| d.config_dir().to_path_buf()))
        .unwrap_or_else(|| cwd.clone());
    let data_dir = proj_dirs
        .as_ref()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or(cwd);

    let config = NotebookConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!(
            "ignoring unreadable config in {}: {}",
            config_dir.display(),
            e
        );
        NotebookConfig::default()
    });
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let explicit = cli
        .file
        .clone()
        .or_else(|| std::env::var_os(FILE_ENV).map(PathBuf::from));
    let notes_file = config.resolve_notes_file(explicit, &data_dir);
    log::debug!("using notes file {}", notes_file.display());

    let store = FileStore::new(&notes_file);
    let paths = NotebookPaths {
        config_dir,
        notes_file,
    };
    Ok(AppContext {
        api: NotebookApi::new(store, paths),
    })
}

fn print_listing(result: &CmdResult) {
    if !result.nothing_to_show() {
        print_notes(&result.listed_notes);
        println!();
    }
    print_messages(&result.messages);
}

fn handle_add(ctx: &mut AppContext, title: &str, content: &str, tags: &str) -> Result<()> {
    let result = ctx.api.add_note(title, content, tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_listing(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, text: &str) -> Result<()> {
    let result = ctx.api.search_notes(text)?;
    print_listing(&result);
    Ok(())
}

fn handle_tag(ctx: &AppContext, tag: &str) -> Result<()> {
    let result = ctx.api.filter_by_tag(tag)?;
    print_listing(&result);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tags()?;
    print_tags(&result.tags);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, raw_position: &str) -> Result<()> {
    let position = ctx.api.position(raw_position)?;
    let result = ctx.api.view_note(position)?;
    print_notes(&result.listed_notes);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    raw_position: &str,
    title: Option<String>,
    content: Option<String>,
    tags: Option<String>,
) -> Result<()> {
    let position = ctx.api.position(raw_position)?;
    let update = NoteUpdate::from_raw(
        title.as_deref().unwrap_or_default(),
        content.as_deref().unwrap_or_default(),
        tags.as_deref().unwrap_or_default(),
    );
    let result = ctx.api.edit_note(position, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, raw_position: &str, yes: bool) -> Result<()> {
    let position = ctx.api.position(raw_position)?;
    let mut prompt = Prompt::stdin();
    let result = ctx.api.delete_note(position, |dn| {
        yes || prompt.confirm(&format!(
            "Are you sure you want to delete '{}'? (y/n): ",
            dn.note.title
        ))
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
