//! The numbered menu loop run when no subcommand is given.
//!
//! Operation errors are reported and the loop goes on. Only a failed final
//! save ends the program with an error.

use super::commands::AppContext;
use super::print::{print_error, print_header, print_messages, print_notes};
use super::prompt::Prompt;
use colored::Colorize;
use notebook::api::{FollowUp, NoteUpdate};
use notebook::error::Result;
use notebook::index::Position;
use std::io::BufRead;

enum Flow {
    Continue,
    Exit,
}

pub(super) fn run<R: BufRead>(ctx: &mut AppContext, prompt: &mut Prompt<R>) -> Result<()> {
    loop {
        print_header("Personal Notebook");
        println!("1. Add a new note");
        println!("2. List all notes");
        println!("3. Search notes");
        println!("4. Filter notes by tag");
        println!("5. Edit a note");
        println!("6. Delete a note");
        println!("7. Exit");

        let choice = match prompt.ask("Type your choice: ")? {
            Some(choice) => choice,
            None => break,
        };

        let outcome = match choice.as_str() {
            "1" => add(ctx, prompt),
            "2" => list(ctx),
            "3" => search(ctx, prompt),
            "4" => filter_by_tag(ctx, prompt),
            "5" => edit(ctx, prompt),
            "6" => delete(ctx, prompt),
            "7" => break,
            _ => {
                println!("{}", "Choose a valid number.".yellow());
                Ok(Flow::Continue)
            }
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => print_error(&e),
        }
    }

    ctx.api.save()?;
    println!("Thanks for using the notebook!");
    Ok(())
}

fn add<R: BufRead>(ctx: &mut AppContext, prompt: &mut Prompt<R>) -> Result<Flow> {
    print_header("Add a New Note");

    let title = loop {
        match prompt.ask("Title: ")? {
            Some(title) if !title.is_empty() => break title,
            Some(_) => println!("{}", "Please enter a valid title.".yellow()),
            None => return Ok(Flow::Exit),
        }
    };
    let content = prompt.ask_or_empty("Content: ")?;
    let tags = prompt.ask_or_empty("Tags (separated by commas, e.g. work,school,todo): ")?;

    let result = ctx.api.add_note(&title, &content, &tags)?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn list(ctx: &AppContext) -> Result<Flow> {
    print_header("All Notes");
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn search<R: BufRead>(ctx: &mut AppContext, prompt: &mut Prompt<R>) -> Result<Flow> {
    print_header("Find Notes");

    let text = prompt.ask_or_empty("Type a word to search for: ")?;
    let result = ctx.api.search_notes(&text)?;
    print_messages(&result.messages);
    if result.nothing_to_show() {
        return Ok(Flow::Continue);
    }
    print_notes(&result.listed_notes);

    let choice = prompt
        .ask_or_empty("\nWould you like to edit or delete a note? (edit, delete, Enter = cancel): ")?;
    let Some(action) = FollowUp::parse(&choice) else {
        return Ok(Flow::Continue);
    };

    let raw = prompt.ask_or_empty("Enter the note number: ")?;
    let position = ctx.api.search_follow_up(&raw)?;
    match action {
        FollowUp::Edit => edit_at(ctx, prompt, position),
        FollowUp::Delete => delete_at(ctx, prompt, position),
    }
}

fn filter_by_tag<R: BufRead>(ctx: &AppContext, prompt: &mut Prompt<R>) -> Result<Flow> {
    print_header("Search Tag");

    let tag = prompt.ask_or_empty("Type a tag to filter by: ")?;
    let result = ctx.api.filter_by_tag(&tag)?;
    print_messages(&result.messages);
    print_notes(&result.listed_notes);
    Ok(Flow::Continue)
}

fn edit<R: BufRead>(ctx: &mut AppContext, prompt: &mut Prompt<R>) -> Result<Flow> {
    print_header("Edit a Note");

    if ctx.api.notes().is_empty() {
        println!("{}", "No notes to edit.".dimmed());
        return Ok(Flow::Continue);
    }
    print_notes(&ctx.api.list_notes()?.listed_notes);

    let raw = prompt.ask_or_empty("Enter the note number to edit: ")?;
    let position = ctx.api.position(&raw)?;
    edit_at(ctx, prompt, position)
}

fn edit_at<R: BufRead>(
    ctx: &mut AppContext,
    prompt: &mut Prompt<R>,
    position: Position,
) -> Result<Flow> {
    let current = ctx.api.note(position)?;
    println!("\nEditing note [{}] - {}", position, current.note.title);

    let title = prompt.ask_or_empty(&format!(
        "New title (Enter to keep: '{}'): ",
        current.note.title
    ))?;
    let content = prompt.ask_or_empty("New content (Enter to keep current): ")?;
    let tags = prompt.ask_or_empty(&format!(
        "New tags (comma separated) (Enter to keep: {}): ",
        current.note.tags.join(", ")
    ))?;

    let result = ctx
        .api
        .edit_note(position, NoteUpdate::from_raw(&title, &content, &tags))?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}

fn delete<R: BufRead>(ctx: &mut AppContext, prompt: &mut Prompt<R>) -> Result<Flow> {
    print_header("Delete a Note");

    if ctx.api.notes().is_empty() {
        println!("{}", "No notes available.".dimmed());
        return Ok(Flow::Continue);
    }
    print_notes(&ctx.api.list_notes()?.listed_notes);

    let raw = prompt.ask_or_empty("Enter the note number to delete: ")?;
    let position = ctx.api.position(&raw)?;
    delete_at(ctx, prompt, position)
}

fn delete_at<R: BufRead>(
    ctx: &mut AppContext,
    prompt: &mut Prompt<R>,
    position: Position,
) -> Result<Flow> {
    let result = ctx.api.delete_note(position, |dn| {
        prompt.confirm(&format!(
            "Are you sure you want to delete '{}'? (y/n): ",
            dn.note.title
        ))
    })?;
    print_messages(&result.messages);
    Ok(Flow::Continue)
}
