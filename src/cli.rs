use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "atlas-projects")]
#[command(about = "Browse and manage MongoDB Atlas projects and clusters", version)]
#[command(after_help = "EXAMPLES:
    atlas-projects                    Open the interactive browser
    atlas-projects projects           List projects
    atlas-projects clusters <ID>      List clusters of a project
    atlas-projects delete <ID>        Delete a project

Credentials are read from ATLAS_PUBLIC_KEY, ATLAS_PRIVATE_KEY and ATLAS_ORG_ID,
falling back to the config file written by 'atlas-projects init'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Show the full error chain on failure
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log file path (the terminal belongs to the UI)
    #[arg(long, global = true, default_value = "/tmp/atlas-projects.log")]
    pub log_file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive project browser (default)
    Ui,
    /// List projects
    #[command(after_help = "EXAMPLES:
    atlas-projects projects
    atlas-projects projects --json")]
    Projects,
    /// List clusters in a project
    #[command(after_help = "EXAMPLES:
    atlas-projects clusters 5e2211c17a3e5a48f5497de3")]
    Clusters {
        /// Project ID
        project_id: String,
    },
    /// Delete a project (irreversible)
    #[command(after_help = "EXAMPLES:
    atlas-projects delete 5e2211c17a3e5a48f5497de3
    atlas-projects delete 5e2211c17a3e5a48f5497de3 --yes")]
    Delete {
        /// Project ID
        project_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    atlas-projects completions bash > ~/.bash_completion.d/atlas-projects
    atlas-projects completions zsh > ~/.zfunc/_atlas-projects")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}
