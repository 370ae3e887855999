//! Fieldnotes CLI Library
//!
//! Command-line adapter over the core notes engine. Argument parsing
//! lives here, rendering in `commands`, all engine work in
//! `fieldnotes-core`.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fieldnotes_core::{Notebook, SiteConfig};

pub mod commands;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "fieldnotes")]
#[command(about = "Browse and publish a directory of markdown notes", long_about = None)]
pub struct Cli {
    /// Site root holding the notes directory
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Site configuration file (YAML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every note in the index, newest first
    List {
        /// Only notes carrying this exact tag (may be percent-encoded)
        #[arg(short, long)]
        tag: Option<String>,

        /// Emit the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search notes by title, description, or tag
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Page of results to show
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Emit the hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every tag with its note count
    Tags {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one note in full
    Show {
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Emit the document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the sitemap XML
    Sitemap {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute one parsed invocation. Empty results render as ordinary
/// output; only genuine failures bubble up as errors.
pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => SiteConfig::from_yaml(&std::fs::read_to_string(path)?)?,
        None => SiteConfig::default(),
    };
    let notebook = Notebook::open(&cli.root, config);

    match cli.command {
        Commands::List { tag, json } => {
            print!("{}", commands::list::render(&notebook, tag.as_deref(), json)?);
        }
        Commands::Search { query, page, json } => {
            print!("{}", commands::search::render(&notebook, &query, page, json)?);
        }
        Commands::Tags { json } => {
            print!("{}", commands::tags::render(&notebook, json)?);
        }
        Commands::Show { slug, json } => {
            print!("{}", commands::show::render(&notebook, &slug, json)?);
        }
        Commands::Sitemap { output } => {
            let xml = commands::sitemap::render(&notebook);
            match output {
                Some(path) => {
                    std::fs::write(&path, xml)?;
                    log::info!("[SITEMAP] wrote {:?}", path);
                }
                None => print!("{}", xml),
            }
        }
    }

    Ok(())
}
