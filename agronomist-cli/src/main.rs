//! agronomist CLI - AIAgronomist agricultural reference pages
//!
//! Entry point for the `agronomist` command, which provides:
//! - The web UI server (`serve`, with the `server` feature)
//! - Terminal rendering of any page (`render`)
//! - Page listing (`pages`)
//! - Configuration management (`config`)
//! - Shell completions (`completions`)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use config::AgronomistConfig;

#[derive(Parser, Debug)]
#[command(
    name = "agronomist",
    author,
    version,
    about = "AIAgronomist - crop, weather, and pest reference pages",
    long_about = "Serve the AIAgronomist web UI, or render its pages (crop information, \
                  weather insights, pest management, about) straight to the terminal."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web UI server
    #[cfg(feature = "server")]
    Serve(commands::serve::ServeArgs),
    /// Render a page to stdout as markdown or JSON
    Render(commands::render::RenderArgs),
    /// List the navigable pages
    Pages(commands::pages::PagesArgs),
    /// Manage agronomist configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

impl Commands {
    /// Commands that fail on a malformed config file instead of ignoring it
    fn uses_config(&self) -> bool {
        match self {
            #[cfg(feature = "server")]
            Self::Serve(_) => true,
            Self::Config(args) => matches!(args.command, config::ConfigCommands::Show),
            Self::Render(_) | Self::Pages(_) | Self::Completions(_) => false,
        }
    }
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so .env values reach clap's `env` fallbacks
    config::load_dotenv();
    let cli = Cli::parse();

    // Only `serve` and `config show` need a valid file; the rest must work with a broken one
    let loaded = AgronomistConfig::load();
    let default_level = loaded
        .as_ref()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());

    if let Err(err) = tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
        default_level,
    }) {
        eprintln!("warning: failed to initialize logging: {err:#}");
    }

    if let Err(err) = &loaded {
        if !cli.command.uses_config() {
            tracing::warn!("Ignoring config file: {err:#}");
        }
    }

    let result = match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve(args) => match loaded {
            Ok(config) => commands::run_serve(args, &config).await,
            Err(err) => Err(err),
        },
        Commands::Render(args) => commands::run_render(args),
        Commands::Pages(args) => commands::run_pages(args),
        Commands::Config(args) => config::run_config(args),
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
