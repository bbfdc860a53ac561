use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "savename")]
#[command(about = "Name and find save-game files across format generations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Overrides for the `[resolver]` config section.
#[derive(Args, Debug, Default)]
pub struct ResolverArgs {
    /// Save format: serialization or proxy-serialization
    #[arg(short, long)]
    pub format: Option<String>,

    /// Filesystem case rules: sensitive, insensitive or auto
    #[arg(short, long)]
    pub case: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the file name a save would be written under
    Add {
        /// Base file name
        name: String,

        /// Append the extension even if the name already ends with it
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// Report whether file names would be offered as loadable saves
    Check {
        /// File names to classify
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// List save files found under a directory
    Scan {
        /// Directory to scan (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Show size and modification time
        #[arg(short, long)]
        verbose: bool,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// List known save formats and their extensions
    Formats,
}
