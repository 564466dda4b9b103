use super::render::{
    print_messages, render_book_list, render_settings, render_stats, render_titles,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use shelf::api::{CmdResult, ConfigAction};
use shelf::error::Result;
use shelf::init::{initialize, ShelfContext};
use shelf::model::BookInput;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir.as_deref())?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            genre,
            rating,
        }) => handle_add(&mut ctx, BookInput::new(title, author, genre, rating)),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { query }) => handle_list(&ctx, Some(query.join(" "))),
        Some(Commands::Remove { title }) => handle_remove(&mut ctx, title.join(" ")),
        Some(Commands::Titles) => handle_titles(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Export { output, stdout }) => handle_export(&ctx, output, stdout),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn handle_add(ctx: &mut ShelfContext, input: BookInput) -> Result<()> {
    let result = ctx.api.add_book(input)?;
    print_messages(&result.messages);
    Ok(())
}

/// An empty or missing query shows the whole collection.
fn handle_list(ctx: &ShelfContext, search: Option<String>) -> Result<()> {
    let result = match search.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => ctx.api.search_books(query)?,
        _ => ctx.api.list_books()?,
    };
    print_books(&result);
    Ok(())
}

fn print_books(result: &CmdResult) {
    print!("{}", render_book_list(&result.listed_books));
    print_messages(&result.messages);
}

fn handle_remove(ctx: &mut ShelfContext, title: String) -> Result<()> {
    let result = ctx.api.remove_books(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_titles(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.titles()?;
    print!("{}", render_titles(&result.titles));
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        if stats.total > 0 {
            print!("{}", render_stats(stats, ctx.config.chart_width));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &ShelfContext, output: Option<PathBuf>, stdout: bool) -> Result<()> {
    let file_name = ctx.config.export_file.as_str();
    if stdout {
        let result = ctx.api.export(file_name, None)?;
        if let Some(export) = &result.export {
            println!("{}", export.content);
        }
        return Ok(());
    }

    let destination = output.unwrap_or_else(|| PathBuf::from(file_name));
    let result = ctx.api.export(file_name, Some(&destination))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &ShelfContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let result = match (key, value) {
        (None, _) => {
            let result = ctx.api.config(ConfigAction::List)?;
            print!("{}", render_settings(&result.settings));
            result
        }
        (Some(key), None) => {
            let result = ctx.api.config(ConfigAction::Get(key))?;
            for (_, value) in &result.settings {
                println!("{}", value);
            }
            result
        }
        (Some(key), Some(value)) => ctx.api.config(ConfigAction::Set { key, value })?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
