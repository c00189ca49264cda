//! Load the corpus, read one query from stdin, print the answer

pub mod format;

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use docqa_core::bail_usage;
use docqa_core::config::QaConfig;
use docqa_core::error::Result;
use docqa_core::pipeline::Pipeline;
use docqa_core::text::Stopwords;

use self::format::{output_human, output_json};

/// Execute a single question/answer round
pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let config = QaConfig::resolve(cli.config.as_deref())?;
    let stopwords = Stopwords::english_with(&config.extra_stopwords);

    let pipeline = Pipeline::load(&cli.corpus, &config, &stopwords)?;
    debug!(
        files = pipeline.file_count(),
        elapsed = ?start.elapsed(),
        "load_corpus"
    );

    let query = read_query(cli)?;
    let answer = pipeline.answer(&query)?;
    debug!(elapsed = ?start.elapsed(), "answer_query");

    match cli.format {
        OutputFormat::Human => output_human(&answer),
        OutputFormat::Json => output_json(&answer),
    }
}

/// Read one line of query text from stdin
fn read_query(cli: &Cli) -> Result<String> {
    let stdin = io::stdin();

    if stdin.is_terminal() && !cli.quiet {
        eprint!("Query: ");
        io::stderr().flush()?;
    }

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        bail_usage!("no query provided on standard input");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
