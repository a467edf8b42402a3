use chrono::{DateTime, Utc};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use patchfeed::cli::ProjectContext;
use patchfeed::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "patchfeed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate an RSS feed from HTML patch notes", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root (default: parent of the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Config file (default: <root>/patchfeed.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the feed (default when no command is given)
    Generate(GenerateArgs),

    /// Show the items the feed would contain, without writing it
    Preview {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Source HTML document, relative to the project root
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output feed file, relative to the project root
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let build_time = Utc::now();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli, build_time) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,patchfeed=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli, build_time: DateTime<Utc>) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Generate(GenerateArgs::default()));

    match command {
        Commands::Generate(args) => {
            let ctx = ProjectContext::load(cli.root.as_deref(), cli.config.as_deref())?;
            patchfeed::cli::generate::run(
                &ctx,
                args.input.as_deref(),
                args.output.as_deref(),
                build_time,
            )?;
        }

        Commands::Preview { json } => {
            let ctx = ProjectContext::load(cli.root.as_deref(), cli.config.as_deref())?;
            patchfeed::cli::preview::run(&ctx, json, build_time)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "patchfeed", &mut io::stdout());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_completions_skip_project_loading() {
        let cli = Cli::try_parse_from([
            "patchfeed",
            "--config",
            "/nonexistent/patchfeed.toml",
            "completions",
            "bash",
        ])
        .unwrap();
        let build_time = Utc.with_ymd_and_hms(2031, 7, 4, 9, 15, 0).unwrap();

        assert!(run(cli, build_time).is_ok());
    }

    #[test]
    fn test_generate_reports_bad_config() {
        let cli = Cli::try_parse_from([
            "patchfeed",
            "--config",
            "/nonexistent/patchfeed.toml",
            "generate",
        ])
        .unwrap();
        let build_time = Utc.with_ymd_and_hms(2031, 7, 4, 9, 15, 0).unwrap();

        assert!(run(cli, build_time).is_err());
    }
}
