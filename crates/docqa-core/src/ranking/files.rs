use std::cmp::Ordering;

use super::scoring::{rank, Candidate, QueryMatch, Ranked, RankingStrategy, Score};
use super::{IdfTable, Query};
use crate::corpus::Corpus;

/// Sum of `tf * idf` over the query terms present; ties by ascending id
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf;

impl RankingStrategy for TfIdf {
    fn score(&self, matched: &QueryMatch<'_>, idf: &IdfTable) -> Score {
        let primary = matched
            .counts
            .iter()
            .map(|(term, &tf)| tf as f64 * idf.get(term).unwrap_or(0.0))
            .fold(0.0, |acc, x| acc + x);
        Score {
            primary,
            secondary: 0.0,
        }
    }

    fn tie_break(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        a.id.cmp(b.id)
    }
}

/// Rank files by TF-IDF, keeping their scores
pub fn rank_files(query: &Query, corpus: &Corpus, idf: &IdfTable, n: usize) -> Vec<Ranked> {
    rank(query, corpus, idf, n, &TfIdf)
}

/// The ids of the `n` files most relevant to the query
pub fn top_files(query: &Query, corpus: &Corpus, idf: &IdfTable, n: usize) -> Vec<String> {
    rank_files(query, corpus, idf, n)
        .into_iter()
        .map(|r| r.id)
        .collect()
}
