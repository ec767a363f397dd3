use colored::Colorize;
use notebook::api::{CmdMessage, MessageLevel, TagCount};
use notebook::config::NotebookConfig;
use notebook::error::NotebookError;
use notebook::index::DisplayNote;

const HEADER_WIDTH: usize = 20;
const RULE_WIDTH: usize = 30;

pub(super) fn print_header(title: &str) {
    let bar = "=".repeat(HEADER_WIDTH);
    println!("\n{}", bar);
    println!("{}", format!("{:^width$}", title, width = HEADER_WIDTH).bold());
    println!("{}", bar);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_error(err: &NotebookError) {
    if err.is_validation() {
        println!("{}", err.to_string().yellow());
    } else {
        eprintln!("{} {}", "Error:".red().bold(), err);
    }
}

pub(super) fn print_note(dn: &DisplayNote) {
    let rule = "-".repeat(RULE_WIDTH);
    println!(
        "\n{} {}",
        format!("[{}]", dn.position).yellow(),
        dn.note.title.bold()
    );
    println!("{} {}", "Date:".dimmed(), dn.note.date);
    if !dn.note.tags.is_empty() {
        println!("{} {}", "Tags:".dimmed(), dn.note.tags.join(", ").cyan());
    }
    println!("{}", rule);
    println!("{}", dn.note.content);
    println!("{}", rule);
}

pub(super) fn print_notes(notes: &[DisplayNote]) {
    for dn in notes {
        print_note(dn);
    }
}

pub(super) fn print_tags(tags: &[TagCount]) {
    let width = tags.iter().map(|tc| tc.tag.chars().count()).max().unwrap_or(0);
    for tc in tags {
        println!(
            "  {}  {}",
            format!("{:<width$}", tc.tag, width = width).cyan(),
            tc.count.to_string().dimmed()
        );
    }
}

pub(super) fn print_config(config: &NotebookConfig) {
    for key in NotebookConfig::keys() {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
