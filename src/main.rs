use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spotbridge::{cli, config, error};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the bridge server
    Serve(ServeOptions),

    /// Print an authorization URL for the configured client
    AuthorizeUrl(AuthorizeUrlOptions),

    /// Exchange an authorization code for tokens
    Exchange(ExchangeOptions),

    /// Get a new access token from a refresh token
    Refresh(RefreshOptions),

    /// Search for a track and start playback
    Play(PlayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the login page in the default browser
    #[clap(long)]
    open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AuthorizeUrlOptions {
    /// Ask the user to approve the app again
    #[clap(long)]
    show_dialog: bool,

    /// Use this state instead of a random one
    #[clap(long)]
    state: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExchangeOptions {
    /// Authorization code from the callback
    #[clap(long)]
    code: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RefreshOptions {
    #[clap(long)]
    refresh_token: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    #[clap(long)]
    access_token: String,

    /// Search query, e.g. an artist and a title
    #[clap(required = true, num_args = 1..)]
    query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        command => run(command).await,
    }
}

async fn run(command: Command) {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match command {
        Command::Serve(opt) => cli::serve(&settings, opt.open).await,
        Command::AuthorizeUrl(opt) => cli::authorize_url(&settings, opt.show_dialog, opt.state),
        Command::Exchange(opt) => cli::exchange(&settings, &opt.code).await,
        Command::Refresh(opt) => cli::refresh(&settings, &opt.refresh_token).await,
        Command::Play(opt) => cli::play(&settings, &opt.access_token, &opt.query.join(" ")).await,
        Command::Completions(_) => {}
    }
}
