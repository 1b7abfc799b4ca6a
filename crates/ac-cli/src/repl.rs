//! Line-oriented interactive loop.
//!
//! A plain line is a query. Lines starting with `:` are commands:
//! `:pick WORD`, `:add WORD SCORE`, `:cleanup`, `:help`, `:quit`.

use std::io::{self, BufRead, Write};

use autocomplete::{AutocompleteService, TrieAutocompleteService};

use crate::output::render_table;

const HELP: &str = "\
<prefix>          show completions
:pick WORD        record that WORD was chosen
:add WORD SCORE   add or re-score WORD
:cleanup          prune entries older than the configured age
:help             this text
:quit             exit
";

#[derive(Debug, PartialEq)]
pub enum ReplCommand {
    Empty,
    Query(String),
    Pick(String),
    Add { word: String, score: f64 },
    Cleanup,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command :{0} (try :help)")]
    Unknown(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid score {0:?}")]
    InvalidScore(String),
}

pub fn parse_command(line: &str) -> Result<ReplCommand, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(if line.is_empty() {
            ReplCommand::Empty
        } else {
            ReplCommand::Query(line.to_string())
        });
    };
    let (name, args) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(n, a)| (n, a.trim()));
    match name {
        "pick" | "p" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument("WORD"));
            }
            Ok(ReplCommand::Pick(args.to_string()))
        }
        "add" | "a" => {
            let Some((word, score)) = args.rsplit_once(char::is_whitespace) else {
                return Err(CommandError::MissingArgument("WORD SCORE"));
            };
            let score = score
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite())
                .ok_or_else(|| CommandError::InvalidScore(score.to_string()))?;
            Ok(ReplCommand::Add {
                word: word.trim().to_string(),
                score,
            })
        }
        "cleanup" | "c" => Ok(ReplCommand::Cleanup),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Drive the loop until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    service: &TrieAutocompleteService,
    input: R,
    mut out: W,
) -> io::Result<()> {
    let limit = service.config().search.max_results;
    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        let result = match cmd {
            ReplCommand::Empty => Ok(Ok(())),
            ReplCommand::Quit => break,
            ReplCommand::Help => Ok(write!(out, "{HELP}")),
            ReplCommand::Query(prefix) => service
                .search(&prefix, limit)
                .map(|found| write!(out, "{}", render_table(&found))),
            ReplCommand::Pick(word) => service
                .record_selection(&word)
                .map(|()| writeln!(out, "picked {word}")),
            ReplCommand::Add { word, score } => service
                .add_word(&word, score)
                .map(|()| writeln!(out, "added {word} ({score})")),
            ReplCommand::Cleanup => service
                .cleanup_default()
                .map(|removed| writeln!(out, "pruned {removed} nodes")),
        };
        match result {
            Ok(written) => written?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
        out.flush()?;
    }
    Ok(())
}
