//! AgentDesk - dashboard layout and theme engine
//!
//! Command-line front end for inspecting and editing per-role dashboard
//! layouts and the active theme.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agentdesk::cli::{CliResult, ConfigArgs, ExitCode, LayoutArgs, ThemeArgs};
use agentdesk::constants::APP_BINARY_NAME;

/// AgentDesk - dashboard layout and theme engine
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Role whose layout to use (agent, supervisor or admin)
    #[arg(long, global = true, value_name = "ROLE")]
    role: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect and edit dashboard layouts
    Layout(LayoutArgs),
    /// Inspect and change the theme
    Theme(ThemeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Command::Layout(args) => args.execute(cli.role.as_deref()),
        Command::Theme(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
