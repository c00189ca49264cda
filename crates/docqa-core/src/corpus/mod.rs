//! Corpus types and loading
//!
//! A [`Corpus`] is an ordered set of documents keyed by a unique id. The
//! file corpus is keyed by file name; the sentence corpus is keyed by the
//! sentence text itself.

mod loader;

use std::collections::{BTreeMap, HashSet};

use crate::text::{split_passages, split_sentences, word_count, Tokenizer};

pub use loader::load_files;

/// A single document and its normalized tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub tokens: Vec<String>,
    /// Words of the source text, stop words included
    pub words: usize,
}

impl Document {
    /// Document from tokens that are already normalized
    ///
    /// With no source text at hand, every token counts as one word.
    pub fn new(id: impl Into<String>, tokens: Vec<String>) -> Self {
        let words = tokens.len();
        Document {
            id: id.into(),
            tokens,
            words,
        }
    }

    /// Tokenize `text`, recording its word count
    pub fn from_text(id: impl Into<String>, text: &str, tokenizer: &Tokenizer<'_>) -> Self {
        Document {
            id: id.into(),
            tokens: tokenizer.tokenize(text),
            words: word_count(text),
        }
    }
}

/// Documents in insertion order with unique ids
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    ids: HashSet<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, returning false if the id is already present
    ///
    /// The first document inserted under an id keeps its position.
    pub fn insert(&mut self, document: Document) -> bool {
        if !self.ids.insert(document.id.clone()) {
            return false;
        }
        self.documents.push(document);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Tokenize every loaded file into a file-level corpus
    pub fn from_files(files: &BTreeMap<String, String>, tokenizer: &Tokenizer<'_>) -> Self {
        let mut corpus = Corpus::new();
        for (name, content) in files {
            corpus.insert(Document::from_text(name.clone(), content, tokenizer));
        }
        corpus
    }

    /// Build the sentence-level corpus from the selected files
    ///
    /// Files are visited in the order given; sentences keep their order of
    /// appearance. Sentences without any token are skipped and repeated
    /// sentences are kept once.
    pub fn from_sentences<S: AsRef<str>>(
        files: &BTreeMap<String, String>,
        selected: &[S],
        tokenizer: &Tokenizer<'_>,
    ) -> Self {
        let mut corpus = Corpus::new();
        for name in selected {
            let Some(content) = files.get(name.as_ref()) else {
                continue;
            };
            for passage in split_passages(content) {
                for sentence in split_sentences(passage) {
                    let document = Document::from_text(sentence.as_str(), &sentence, tokenizer);
                    if !document.tokens.is_empty() {
                        corpus.insert(document);
                    }
                }
            }
        }
        corpus
    }
}

impl<'c> IntoIterator for &'c Corpus {
    type Item = &'c Document;
    type IntoIter = std::slice::Iter<'c, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        let mut corpus = Corpus::new();
        for document in iter {
            corpus.insert(document);
        }
        corpus
    }
}

impl<I, S> FromIterator<(I, Vec<S>)> for Corpus
where
    I: Into<String>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, Vec<S>)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(id, tokens)| Document::new(id, tokens.into_iter().map(Into::into).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Stopwords;

    fn files(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect()
    }

    #[test]
    fn test_insert_keeps_first_duplicate() {
        let mut corpus = Corpus::new();
        assert!(corpus.insert(Document::new("a", vec!["x".to_string()])));
        assert!(corpus.insert(Document::new("b", vec!["y".to_string()])));
        assert!(!corpus.insert(Document::new("a", vec!["z".to_string()])));

        assert_eq!(corpus.len(), 2);
        let docs: Vec<(&str, &str)> = corpus
            .iter()
            .map(|d| (d.id.as_str(), d.tokens[0].as_str()))
            .collect();
        assert_eq!(docs, vec![("a", "x"), ("b", "y")]);
    }

    #[test]
    fn test_from_files_tokenizes_each_file() {
        let stopwords = Stopwords::english();
        let tokenizer = Tokenizer::new(&stopwords);
        let corpus = Corpus::from_files(
            &files(&[("b.txt", "The dog ran."), ("a.txt", "A cat sat.")]),
            &tokenizer,
        );

        let docs: Vec<(&str, Vec<String>)> = corpus
            .iter()
            .map(|d| (d.id.as_str(), d.tokens.clone()))
            .collect();
        assert_eq!(
            docs,
            vec![
                ("a.txt", vec!["cat".to_string(), "sat".to_string()]),
                ("b.txt", vec!["dog".to_string(), "ran".to_string()]),
            ]
        );
    }

    #[test]
    fn test_from_sentences_skips_empty_and_duplicate_sentences() {
        let stopwords = Stopwords::english();
        let tokenizer = Tokenizer::new(&stopwords);
        let files = files(&[(
            "doc.txt",
            "The cat sat. It is what it is.\nThe cat sat. Dogs bark loudly.",
        )]);

        let corpus = Corpus::from_sentences(&files, &["doc.txt"], &tokenizer);
        let ids: Vec<&str> = corpus.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["The cat sat.", "Dogs bark loudly."]);
    }

    #[test]
    fn test_from_sentences_counts_words_of_each_sentence() {
        let stopwords = Stopwords::english();
        let tokenizer = Tokenizer::new(&stopwords);
        let files = files(&[("doc.txt", "AI is learning. The cat is on the mat.")]);

        let corpus = Corpus::from_sentences(&files, &["doc.txt"], &tokenizer);
        let counts: Vec<(usize, usize)> = corpus
            .iter()
            .map(|d| (d.tokens.len(), d.words))
            .collect();
        assert_eq!(counts, vec![(2, 3), (2, 6)]);
    }

    #[test]
    fn test_from_sentences_only_reads_selected_files() {
        let stopwords = Stopwords::english();
        let tokenizer = Tokenizer::new(&stopwords);
        let files = files(&[("a.txt", "Apples grow."), ("b.txt", "Bananas ripen.")]);

        let corpus = Corpus::from_sentences(&files, &["b.txt", "missing.txt"], &tokenizer);
        let ids: Vec<&str> = corpus.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["Bananas ripen."]);
    }
}
