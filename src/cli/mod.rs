//! CLI argument parsing for docqa

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for answers and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One answer sentence per line
    #[default]
    Human,
    /// A single JSON object with query terms, files and answers
    Json,
}

/// docqa - answer a question from a directory of text files
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the corpus text files
    pub corpus: PathBuf,

    /// Configuration file (defaults to the global docqa config.toml)
    #[arg(long, env = "DOCQA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress the prompt and error messages
    #[arg(long, short)]
    pub quiet: bool,

    /// Log stage timings and selections
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "docqa_core=trace")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_corpus_and_flags() {
        let cli = Cli::try_parse_from(["docqa", "--format", "json", "-v", "corpus"]).unwrap();
        assert_eq!(cli.corpus, PathBuf::from("corpus"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_corpus_argument_required() {
        assert!(Cli::try_parse_from(["docqa"]).is_err());
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["docqa", "one", "two"]).is_err());
    }
}
