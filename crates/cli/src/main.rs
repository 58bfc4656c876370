mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdt", version, about = "Browse and edit a hierarchical markdown note store")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and summarise the note tree
    Doctor,

    /// Print the note hierarchy
    Tree(TreeArgs),

    /// Create a note from the default template
    New(NewArgs),

    /// Print a note's content
    Show(ShowArgs),

    /// Replace a note's content from a file or stdin
    Write(WriteArgs),

    /// Delete a note and all of its child notes
    Delete(DeleteArgs),

    /// Rename a note, keeping it under the same parent
    Rename(RenameArgs),

    /// Store a binary attachment and print its address
    Attach(AttachArgs),
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Emit the tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if any folder could not be read
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name of the new note
    pub name: String,

    /// Path of the parent note (e.g. "projects/alpha")
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Note path (e.g. "projects/alpha")
    pub path: String,

    /// Render the note to HTML
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Print title, content and HTML as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Note path to write
    pub path: String,

    /// Read content from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Note path to delete
    pub path: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Current note path
    pub path: String,

    /// New base name (no slashes)
    pub new_name: String,
}

#[derive(Debug, Args)]
pub struct AttachArgs {
    /// File to store
    pub file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Tree(args) => cmd::tree::run(config, profile, args),
        Commands::New(args) => cmd::new::run(config, profile, args),
        Commands::Show(args) => cmd::show::run(config, profile, args),
        Commands::Write(args) => cmd::write::run(config, profile, args),
        Commands::Delete(args) => cmd::delete::run(config, profile, args),
        Commands::Rename(args) => cmd::rename::run(config, profile, args),
        Commands::Attach(args) => cmd::attach::run(config, profile, args),
    }
}
