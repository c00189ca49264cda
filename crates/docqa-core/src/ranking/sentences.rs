use std::cmp::Ordering;

use super::scoring::{rank, Candidate, QueryMatch, Ranked, RankingStrategy, Score};
use super::{IdfTable, Query};
use crate::corpus::Corpus;

/// Sum of IDF over the distinct query terms present, then query term density
///
/// Density is the share of the sentence's words that are query terms,
/// counting repeats; stop words count toward the sentence length.
/// Remaining ties keep the sentences' original order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdfDensity;

impl RankingStrategy for IdfDensity {
    fn score(&self, matched: &QueryMatch<'_>, idf: &IdfTable) -> Score {
        let primary = matched
            .counts
            .keys()
            .map(|term| idf.get(term).unwrap_or(0.0))
            .fold(0.0, |acc, x| acc + x);
        let secondary = if matched.words == 0 {
            0.0
        } else {
            matched.occurrences() as f64 / matched.words as f64
        };
        Score { primary, secondary }
    }

    fn tie_break(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        a.position.cmp(&b.position)
    }
}

/// Rank sentences by matching IDF and density, keeping their scores
pub fn rank_sentences(query: &Query, corpus: &Corpus, idf: &IdfTable, n: usize) -> Vec<Ranked> {
    rank(query, corpus, idf, n, &IdfDensity)
}

/// The `n` sentences that best answer the query
pub fn top_sentences(query: &Query, corpus: &Corpus, idf: &IdfTable, n: usize) -> Vec<String> {
    rank_sentences(query, corpus, idf, n)
        .into_iter()
        .map(|r| r.id)
        .collect()
}
