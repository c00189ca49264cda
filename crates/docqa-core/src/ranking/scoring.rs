//! Shared scoring loop for file and sentence ranking

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::trace;

use super::{IdfTable, Query};
use crate::corpus::{Corpus, Document};

/// Occurrences of query terms within one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatch<'q> {
    /// Query terms present in the document with their term frequency
    pub counts: BTreeMap<&'q str, usize>,
    /// Word count of the document's source text
    pub words: usize,
}

impl QueryMatch<'_> {
    /// Document words that are query terms, counting repeats
    pub fn occurrences(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Count how often each query term occurs in a document
pub fn match_query<'q>(query: &'q Query, document: &Document) -> QueryMatch<'q> {
    let mut counts = BTreeMap::new();
    for token in &document.tokens {
        if let Some(term) = query.get(token.as_str()) {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    QueryMatch {
        counts,
        words: document.words,
    }
}

/// Sort keys of one document, both compared descending
///
/// Strategies accumulate from `+0.0` so a document without matches ties
/// with one whose matches all carry zero IDF.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    pub primary: f64,
    pub secondary: f64,
}

/// A scored document awaiting ordering
#[derive(Debug, Clone)]
pub struct Candidate<'c> {
    pub id: &'c str,
    /// Insertion position within the corpus
    pub position: usize,
    pub score: Score,
}

/// A ranked document id with the score that placed it
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub id: String,
    pub score: Score,
}

/// Key computation and tie-breaking for one ranking stage
pub trait RankingStrategy {
    /// Compute the sort keys of a document from its query matches
    fn score(&self, matched: &QueryMatch<'_>, idf: &IdfTable) -> Score;

    /// Order two candidates whose keys are equal
    fn tie_break(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering;
}

/// Score every document and return the best `n`
///
/// Candidates are ordered by primary key, then secondary key (both
/// descending), then by the strategy's tie-break.
pub fn rank<S: RankingStrategy>(
    query: &Query,
    corpus: &Corpus,
    idf: &IdfTable,
    n: usize,
    strategy: &S,
) -> Vec<Ranked> {
    if n == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate<'_>> = corpus
        .iter()
        .enumerate()
        .map(|(position, doc)| {
            let matched = match_query(query, doc);
            let score = strategy.score(&matched, idf);
            trace!(
                id = doc.id.as_str(),
                primary = score.primary,
                secondary = score.secondary,
                "score_document"
            );
            Candidate {
                id: &doc.id,
                position,
                score,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .primary
            .total_cmp(&a.score.primary)
            .then_with(|| b.score.secondary.total_cmp(&a.score.secondary))
            .then_with(|| strategy.tie_break(a, b))
    });

    candidates
        .into_iter()
        .take(n)
        .map(|c| Ranked {
            id: c.id.to_string(),
            score: c.score,
        })
        .collect()
}
