mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "keepmd",
    version,
    about = "Convert Google Keep Takeout notes to markdown files"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Only log warnings and errors to the terminal
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Convert every note in a Takeout Keep folder to markdown
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// The path to the Takeout Keep folder
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Use folders instead of front-matter for tags
    #[arg(short = 't', long = "tag-folders")]
    pub tag_folders: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref())
        }
        Commands::Convert(args) => {
            cmd::convert::run(cli.config.as_deref(), cli.profile.as_deref(), cli.quiet, &args)
        }
    }
}
