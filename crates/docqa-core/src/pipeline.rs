//! End-to-end query answering
//!
//! Files are loaded and tokenized once, and their IDF table is computed
//! before any query is seen. Each query then runs the two ranking stages in
//! sequence: the top files are split into sentences, and those sentences
//! get their own IDF table.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::QaConfig;
use crate::corpus::{load_files, Corpus};
use crate::error::{DocqaError, Result};
use crate::ranking::{compute_idf, rank_files, rank_sentences, IdfTable, Query, Ranked};
use crate::text::{Stopwords, Tokenizer};
use crate::trace_time;

/// Result of answering one query
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Normalized query terms
    pub query: Vec<String>,
    /// Files selected for sentence extraction, best first
    pub files: Vec<Ranked>,
    /// Answer sentences, best first
    pub sentences: Vec<Ranked>,
}

/// A loaded corpus ready to answer queries
pub struct Pipeline<'a> {
    config: &'a QaConfig,
    tokenizer: Tokenizer<'a>,
    files: BTreeMap<String, String>,
    file_corpus: Corpus,
    file_idf: IdfTable,
}

impl<'a> Pipeline<'a> {
    /// Load every recognized file in `dir` and index it
    pub fn load(dir: &Path, config: &'a QaConfig, stopwords: &'a Stopwords) -> Result<Self> {
        let files = load_files(dir, config)?;
        if files.is_empty() {
            return Err(DocqaError::NoDocuments {
                path: dir.to_path_buf(),
            });
        }
        Self::from_files(files, config, stopwords)
    }

    /// Index already-loaded files (file name → content)
    pub fn from_files(
        files: BTreeMap<String, String>,
        config: &'a QaConfig,
        stopwords: &'a Stopwords,
    ) -> Result<Self> {
        let start = Instant::now();
        let tokenizer = if config.stemming {
            Tokenizer::with_stemming(stopwords)
        } else {
            Tokenizer::new(stopwords)
        };

        let file_corpus = Corpus::from_files(&files, &tokenizer);
        let file_idf = compute_idf(&file_corpus)?;

        debug!(
            files = file_corpus.len(),
            terms = file_idf.len(),
            elapsed = ?start.elapsed(),
            "index_files"
        );

        Ok(Pipeline {
            config,
            tokenizer,
            files,
            file_corpus,
            file_idf,
        })
    }

    /// Number of indexed files
    pub fn file_count(&self) -> usize {
        self.file_corpus.len()
    }

    /// Normalize query text with the same tokenizer used for documents
    pub fn parse_query(&self, text: &str) -> Query {
        self.tokenizer.tokenize(text).into_iter().collect()
    }

    /// Answer a natural-language query
    pub fn answer(&self, text: &str) -> Result<Answer> {
        let query = self.parse_query(text);
        if query.is_empty() {
            warn!("query has no searchable terms; ranking falls back to document order");
        }

        let start = Instant::now();
        let files = rank_files(
            &query,
            &self.file_corpus,
            &self.file_idf,
            self.config.file_matches,
        );
        trace_time!(start, "rank_files", selected = files.len());

        let selected: Vec<&str> = files.iter().map(|r| r.id.as_str()).collect();
        debug!(?selected, "top_files");

        let sentence_corpus = Corpus::from_sentences(&self.files, &selected, &self.tokenizer);
        let sentences = if sentence_corpus.is_empty() {
            warn!(?selected, "selected files contain no sentences with searchable terms");
            Vec::new()
        } else {
            let start = Instant::now();
            let sentence_idf = compute_idf(&sentence_corpus)?;
            let ranked = rank_sentences(
                &query,
                &sentence_corpus,
                &sentence_idf,
                self.config.sentence_matches,
            );
            trace_time!(start, "rank_sentences", candidates = sentence_corpus.len());
            ranked
        };

        debug!(answers = sentences.len(), "answer");

        Ok(Answer {
            query: query.into_iter().collect(),
            files,
            sentences,
        })
    }
}
