use std::collections::{HashMap, HashSet};

use crate::corpus::Corpus;
use crate::error::{DocqaError, Result};

/// Inverse document frequency per term, scoped to one corpus
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    values: HashMap<String, f64>,
}

impl IdfTable {
    /// IDF of a term, or `None` if no document of the corpus contains it
    pub fn get(&self, term: &str) -> Option<f64> {
        self.values.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn terms(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(term, idf)| (term.as_str(), *idf))
    }
}

/// Compute `ln(N / df)` for every term of the corpus
///
/// `df` counts the documents containing the term plus one, so it always
/// lies in `[2, N + 1]` and a term present in every document gets a
/// negative IDF.
pub fn compute_idf(corpus: &Corpus) -> Result<IdfTable> {
    if corpus.is_empty() {
        return Err(DocqaError::EmptyCorpus);
    }

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for doc in corpus {
        let unique: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(1) += 1;
        }
    }

    let n = corpus.len() as f64;
    let values = doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), (n / df as f64).ln()))
        .collect();

    Ok(IdfTable { values })
}
