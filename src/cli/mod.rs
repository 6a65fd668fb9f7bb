use clap::{Parser, Subcommand, ValueEnum};

mod init;
mod update;
mod versions;

#[derive(Parser)]
#[command(
    name = "uipro-mobile",
    version,
    about = "Install the UI/UX Mobile skill for Claude Code and OpenAI Codex"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for the version history.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON array of version entries
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the UI/UX Mobile skill in the current directory
    Init {
        /// AI assistant type (claude, codex, all)
        #[arg(long, short = 'a')]
        ai: Option<String>,
        /// Overwrite an existing installation
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// Update an existing installation to the bundled version
    Update {
        /// AI assistant type (claude, codex, all)
        #[arg(long, short = 'a')]
        ai: Option<String>,
    },
    /// List available versions
    Versions {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        Some(Commands::Init { ai, force }) => init::run(ai, force),
        Some(Commands::Update { ai }) => update::run(ai),
        Some(Commands::Versions { format }) => versions::run(format),
        None => {
            eprintln!("Usage: uipro-mobile <command> [args]");
            eprintln!("Run `uipro-mobile --help` for details.");
            std::process::exit(1);
        }
    }
}
