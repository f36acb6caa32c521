use clap::Parser;
use std::path::PathBuf;

pub mod render;

/// docksh: a Docker-only command shell.
///
/// Translates Linux-style commands into Docker CLI invocations. With no
/// trailing command it starts an interactive line loop.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Print the translated Docker command without executing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Language for mapping descriptions and notes (e.g. "en", "ja").
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Directory containing mappings.toml, overriding the default search.
    #[arg(long, value_name = "DIR")]
    pub mappings: Option<PathBuf>,

    /// A single command to run instead of starting the interactive shell.
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}
