//! Command line argument parsing for the spamest CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spamest - score messages against a token-frequency spam model
#[derive(Parser, Debug, Clone)]
#[command(name = "spamest")]
#[command(about = "Train a token-frequency spam estimator and score messages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamestArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamestArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a corpus and score messages
    Score(ScoreArgs),

    /// Train on a corpus and show what was learned
    Stats(StatsArgs),

    /// Train on a corpus and show the document counts of tokens
    Tokens(TokensArgs),
}

/// Options shared by every command that builds a model.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// JSON-lines training corpus, one sample per line
    #[arg(short, long, env = "SPAMEST_CORPUS")]
    pub corpus: PathBuf,

    /// JSON estimator configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Analyzer used to tokenize messages
    #[arg(short, long, default_value = "standard")]
    pub analyzer: AnalyzerKind,

    /// Token pattern for the regex analyzer
    #[arg(long, default_value = r"\w+")]
    pub pattern: String,
}

/// Arguments for scoring messages
#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// File with one message per line to score
    #[arg(long)]
    pub message_file: Option<PathBuf>,

    /// Messages to score
    pub messages: Vec<String>,
}

/// Arguments for model statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for token lookups
#[derive(Args, Debug, Clone)]
pub struct TokensArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Field the tokens belong to; the message body when omitted
    #[arg(long, default_value = "")]
    pub field: String,

    /// Tokens to look up, as the analyzer emits them
    #[arg(required = true)]
    pub tokens: Vec<String>,
}

/// Analyzers selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Unicode words, lowercased
    Standard,
    /// Whitespace split, no normalization
    Simple,
    /// Regex matches, lowercased
    Regex,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_command() {
        let args = SpamestArgs::try_parse_from([
            "spamest",
            "score",
            "--corpus",
            "/data/corpus.jsonl",
            "free money",
            "hello friend",
        ])
        .unwrap();

        if let Command::Score(score_args) = args.command {
            assert_eq!(score_args.model.corpus, PathBuf::from("/data/corpus.jsonl"));
            assert_eq!(score_args.model.analyzer, AnalyzerKind::Standard);
            assert_eq!(score_args.messages, vec!["free money", "hello friend"]);
            assert!(score_args.message_file.is_none());
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_regex_analyzer_options() {
        let args = SpamestArgs::try_parse_from([
            "spamest",
            "stats",
            "-c",
            "corpus.jsonl",
            "--analyzer",
            "regex",
            "--pattern",
            "[a-z]+",
        ])
        .unwrap();

        if let Command::Stats(stats_args) = args.command {
            assert_eq!(stats_args.model.analyzer, AnalyzerKind::Regex);
            assert_eq!(stats_args.model.pattern, "[a-z]+");
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_tokens_requires_token() {
        assert!(SpamestArgs::try_parse_from(["spamest", "tokens", "-c", "corpus.jsonl"]).is_err());
    }

    #[test]
    fn test_tokens_field() {
        let args = SpamestArgs::try_parse_from([
            "spamest", "tokens", "-c", "corpus.jsonl", "--field", "subject", "free",
        ])
        .unwrap();

        if let Command::Tokens(tokens_args) = args.command {
            assert_eq!(tokens_args.field, "subject");
            assert_eq!(tokens_args.tokens, vec!["free"]);
        } else {
            panic!("Expected Tokens command");
        }

        let args =
            SpamestArgs::try_parse_from(["spamest", "tokens", "-c", "corpus.jsonl", "free"]).unwrap();
        if let Command::Tokens(tokens_args) = args.command {
            assert_eq!(tokens_args.field, "");
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpamestArgs::try_parse_from(["spamest", "stats", "-c", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SpamestArgs::try_parse_from(["spamest", "-vv", "stats", "-c", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SpamestArgs::try_parse_from(["spamest", "--quiet", "stats", "-c", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SpamestArgs::try_parse_from(["spamest", "--format", "json", "stats", "-c", "x"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
