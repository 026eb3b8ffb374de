//! Command implementations for the spamest CLI.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::simple::SimpleAnalyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EstimatorConfig;
use crate::error::{Result, SpamestError};
use crate::estimator::Estimator;
use crate::types::TrainingSample;

/// Execute a CLI command.
pub fn execute_command(args: SpamestArgs) -> Result<()> {
    match &args.command {
        Command::Score(score_args) => score_messages(score_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Tokens(tokens_args) => show_tokens(tokens_args, &args),
    }
}

/// Train on the corpus and score every message given on the command line
/// or in the message file.
fn score_messages(args: &ScoreArgs, cli_args: &SpamestArgs) -> Result<()> {
    let mut messages = args.messages.clone();
    if let Some(path) = &args.message_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read messages from {}", path.display()))?;
        messages.extend(
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );
    }

    if messages.is_empty() {
        return Err(SpamestError::invalid_argument(
            "no messages to score; pass messages or --message-file",
        ));
    }

    let start_time = Instant::now();
    let (estimator, training_samples) = build_estimator(&args.model)?;
    let scores = estimator.estimate_all(messages.as_slice())?;
    let duration = start_time.elapsed();

    output_result(
        "Messages scored",
        &ScoreResults {
            scores: messages
                .into_iter()
                .zip(scores)
                .map(|(message, score)| MessageScore { message, score })
                .collect(),
            training_samples,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Train on the corpus and show model statistics.
fn show_stats(args: &StatsArgs, cli_args: &SpamestArgs) -> Result<()> {
    let (estimator, _) = build_estimator(&args.model)?;
    output_result("Model statistics", &estimator.stats(), cli_args)
}

/// Train on the corpus and show the counts of the requested tokens.
fn show_tokens(args: &TokensArgs, cli_args: &SpamestArgs) -> Result<()> {
    let (estimator, _) = build_estimator(&args.model)?;

    let tokens = args
        .tokens
        .iter()
        .map(|token| {
            let (documents, spam_documents) = estimator.token_counts(&args.field, token);
            TokenCounts {
                field: args.field.clone(),
                token: token.clone(),
                documents,
                spam_documents,
            }
        })
        .collect();

    output_result("Token counts", &TokenResults { tokens }, cli_args)
}

/// Build an estimator from the model options and train it on the corpus.
///
/// Returns the estimator and the number of samples it was trained on.
pub fn build_estimator(args: &ModelArgs) -> Result<(Estimator, usize)> {
    let config = match &args.config {
        Some(path) => {
            debug!("Loading estimator config from: {}", path.display());
            EstimatorConfig::from_json_file(path)?
        }
        None => EstimatorConfig::default(),
    };

    let analyzer = build_analyzer(args.analyzer, &args.pattern)?;
    let estimator = Estimator::with_config(config, analyzer)?;

    let samples = load_corpus(&args.corpus)?;
    let trained = estimator.train_samples(&samples)?;
    info!("Trained on {} samples from {}", trained, args.corpus.display());

    Ok((estimator, trained))
}

/// Create the analyzer selected on the command line.
pub fn build_analyzer(kind: AnalyzerKind, pattern: &str) -> Result<Arc<dyn Analyzer>> {
    let analyzer: Arc<dyn Analyzer> = match kind {
        AnalyzerKind::Standard => Arc::new(StandardAnalyzer::new()),
        AnalyzerKind::Simple => Arc::new(SimpleAnalyzer::new()),
        AnalyzerKind::Regex => Arc::new(
            PipelineAnalyzer::new(Arc::new(RegexTokenizer::with_pattern(pattern)?))
                .add_filter(Arc::new(LowercaseFilter::new()))
                .with_name("regex"),
        ),
    };
    Ok(analyzer)
}

/// Read a JSON-lines training corpus.
///
/// Blank lines are skipped. A malformed line fails the whole load with the
/// file name and line number attached.
pub fn load_corpus(path: &Path) -> Result<Vec<TrainingSample>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open corpus {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let sample: TrainingSample = serde_json::from_str(&line)
            .with_context(|| format!("{}: line {}", path.display(), line_num + 1))?;
        samples.push(sample);
    }

    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
