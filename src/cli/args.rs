//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// smokenotes - Turn BBQ video transcripts into Markdown recipe cards
#[derive(Parser, Debug)]
#[command(name = "smokenotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a recipe from a YouTube video or a transcript file
    Extract {
        /// YouTube URL or video ID
        #[arg(required_unless_present = "transcript_file")]
        url: Option<String>,

        /// Read the transcript from a file instead of fetching it ("-" for stdin)
        #[arg(short = 'f', long)]
        transcript_file: Option<PathBuf>,

        /// Title to use for the recipe
        #[arg(short, long)]
        title: Option<String>,

        /// Print the extracted facts as JSON instead of Markdown
        #[arg(long)]
        json: bool,

        /// Do not save the recipe to history
        #[arg(long)]
        no_save: bool,
    },

    /// List saved recipes
    List {
        /// Maximum number of recipes to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Only show recipes whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a saved recipe
    View {
        /// Recipe ID or partial ID
        id: String,
    },

    /// Search the text of all saved recipes
    Search {
        /// Words or phrase to look for
        query: String,
    },

    /// Delete a saved recipe
    Delete {
        /// Recipe ID or partial ID
        id: String,
    },

    /// Export a saved recipe to a file
    Export {
        /// Recipe ID or partial ID
        id: String,

        /// Output format (txt, md, paprika)
        #[arg(short, long, default_value = "txt")]
        format: String,

        /// Output file or directory (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
