use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use splcli::{cli, config, error, server::SharedPkce, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Build a playlist from an exported song list
    Build(BuildOpts),

    /// Extract song names from a library XML export into a sheet
    Extract(ExtractOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildOpts {
    /// Song list to read: a csv sheet or a library .xml export
    pub input: PathBuf,

    /// Name of the playlist to create
    pub name: String,

    /// Description of the playlist
    #[clap(long, default_value = "")]
    pub description: String,

    /// Number of songs added to the playlist per request
    #[clap(long, default_value = "25", value_parser = utils::parse_chunk_size)]
    pub chunk_size: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractOptions {
    /// Library .xml export to read
    pub input: PathBuf,

    /// Sheet to write the sorted song names to
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: SharedPkce = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }

        Command::Build(opt) => {
            cli::build(opt.input, opt.name, opt.description, opt.chunk_size).await
        }

        Command::Extract(opt) => cli::extract(opt.input, opt.output).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
