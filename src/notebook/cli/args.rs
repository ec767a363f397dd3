use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notebook", version)]
#[command(about = "A personal notebook for short tagged notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        title: String,

        /// Body text
        #[arg(short, long, default_value = "")]
        content: String,

        /// Comma-separated tags (e.g. work,school,todo)
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Search titles and contents (case-insensitive)
    #[command(alias = "s")]
    Search { text: String },

    /// Show notes carrying a tag
    #[command(alias = "t")]
    Tag { tag: String },

    /// List tags in use with their note counts
    Tags,

    /// Show one note
    #[command(alias = "v")]
    View {
        /// Note number as shown by `list`
        position: String,
    },

    /// Edit a note; omitted fields are kept
    #[command(alias = "e")]
    Edit {
        /// Note number as shown by `list`
        position: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note number as shown by `list`
        position: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (notes-file, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
