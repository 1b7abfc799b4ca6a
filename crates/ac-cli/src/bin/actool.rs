use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ac_cli::commands::search_ops::SearchArgs;
use ac_cli::commands::{config_ops, repl_ops, search_ops};

#[derive(Parser)]
#[command(name = "actool", about = "Prefix autocomplete engine tool")]
struct Cli {
    /// Write JSONL traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print ranked completions for a prefix
    Search {
        /// Query prefix
        prefix: String,
        /// Maximum number of results (defaults to search.max_results)
        #[arg(short, long)]
        n: Option<usize>,
        /// Record a selection of WORD before searching (repeatable)
        #[arg(long = "select", value_name = "WORD")]
        select: Vec<String>,
        /// Configuration TOML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Vocabulary file (word and score per line)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive prompt reading queries and commands from stdin
    Repl {
        /// Configuration TOML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Vocabulary file (word and score per line)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// Do not prune in the background every cleanup.interval_secs
        #[arg(long)]
        no_background_cleanup: bool,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the default configuration TOML
    Export,
    /// Parse and validate a configuration file
    Validate {
        /// TOML file to check
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(dir) = &cli.log_dir {
        let traced = ac_cli::die!(
            autocomplete::init_tracing(dir),
            "error: cannot prepare {}: {}",
            dir.display()
        );
        if traced.is_none() {
            eprintln!("warning: built without the `trace` feature, --log-dir ignored");
        }
    }

    match cli.command {
        Command::Search {
            prefix,
            n,
            select,
            config,
            vocab,
            json,
        } => search_ops::search(SearchArgs {
            prefix: &prefix,
            limit: n,
            select: &select,
            config: config.as_deref(),
            vocab: vocab.as_deref(),
            json,
        }),
        Command::Repl {
            config,
            vocab,
            no_background_cleanup,
        } => repl_ops::repl(config.as_deref(), vocab.as_deref(), !no_background_cleanup),
        Command::Config { action } => match action {
            ConfigAction::Export => config_ops::config_export(),
            ConfigAction::Validate { file } => config_ops::config_validate(&file),
        },
    }
}
