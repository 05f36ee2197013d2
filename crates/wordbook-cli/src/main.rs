use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wordbook_core::Wordbook;

mod commands;
mod input;
mod menu;

#[derive(Parser)]
#[command(
    name = "wordbook",
    about = "Personal vocabulary dictionary with a meaning-matching quiz"
)]
struct Cli {
    /// Dictionary snapshot file
    #[arg(long, default_value = "dictionary.json")]
    file: PathBuf,

    /// With no subcommand, the interactive menu starts.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add a word (overwrites an existing meaning)
    Add { word: String, meaning: String },
    /// Look up a word
    Lookup { word: String },
    /// Change the meaning of an existing word
    Edit { word: String, meaning: String },
    /// Remove a word
    Remove { word: String },
    /// List all words
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut book = match Wordbook::open(&cli.file) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Cannot open {}: {e}", cli.file.display());
            process::exit(1);
        }
    };

    match cli.command {
        None => {
            if let Err(e) = menu::run(&mut book) {
                eprintln!("Input error: {e}");
                process::exit(1);
            }
        }
        Some(Command::Add { word, meaning }) => commands::add(&mut book, &word, &meaning),
        Some(Command::Lookup { word }) => commands::lookup(&book, &word),
        Some(Command::Edit { word, meaning }) => commands::edit(&mut book, &word, &meaning),
        Some(Command::Remove { word }) => commands::remove(&mut book, &word),
        Some(Command::List) => commands::list(&book),
    }
}
