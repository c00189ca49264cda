//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Number of files carried into sentence extraction
pub const FILE_MATCHES: usize = 1;

/// Number of sentences returned as the answer
pub const SENTENCE_MATCHES: usize = 1;

/// Query answering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaConfig {
    /// How many top-ranked files feed sentence extraction
    #[serde(default = "default_file_matches")]
    pub file_matches: usize,

    /// How many top-ranked sentences are printed
    #[serde(default = "default_sentence_matches")]
    pub sentence_matches: usize,

    /// File extensions recognized as corpus text (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Apply Porter stemming to documents and queries
    #[serde(default)]
    pub stemming: bool,

    /// Additional stop words appended to the English list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_file_matches() -> usize {
    FILE_MATCHES
}

fn default_sentence_matches() -> usize {
    SENTENCE_MATCHES
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

impl Default for QaConfig {
    fn default() -> Self {
        QaConfig {
            file_matches: default_file_matches(),
            sentence_matches: default_sentence_matches(),
            extensions: default_extensions(),
            stemming: false,
            extra_stopwords: Vec::new(),
        }
    }
}
