//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpamestArgs};
use crate::error::Result;
use crate::types::EstimatorStats;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print the result for a terminal reader.
    fn print_human(&self);
}

/// Score of a single message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageScore {
    pub message: String,
    pub score: f64,
}

/// Result structure for scoring.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResults {
    pub scores: Vec<MessageScore>,
    pub training_samples: usize,
    pub duration_ms: u64,
}

/// Document counts of a single token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenCounts {
    pub field: String,
    pub token: String,
    pub documents: u64,
    pub spam_documents: u64,
}

/// Result structure for token lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResults {
    pub tokens: Vec<TokenCounts>,
}

impl HumanOutput for ScoreResults {
    fn print_human(&self) {
        for entry in &self.scores {
            println!("{:>12.6}  {}", entry.score, entry.message);
        }
    }
}

impl HumanOutput for EstimatorStats {
    fn print_human(&self) {
        println!("Model Statistics:");
        println!("═════════════════");
        println!("Documents:            {}", self.documents);
        println!("Spam documents:       {}", self.spam_documents);
        println!("Vocabulary size:      {}", self.vocabulary_size);
        println!("Spam vocabulary size: {}", self.spam_vocabulary_size);
        println!("Prior:                {:.6}", self.prior);
    }
}

impl HumanOutput for TokenResults {
    fn print_human(&self) {
        for entry in &self.tokens {
            let field = if entry.field.is_empty() {
                "body"
            } else {
                entry.field.as_str()
            };
            println!(
                "[{field}] {}: {} documents, {} spam",
                entry.token, entry.documents, entry.spam_documents
            );
        }
    }
}

/// Output a command result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpamestArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpamestArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
