//! Text processing: tokenization and sentence splitting

mod stopwords;

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

pub use stopwords::Stopwords;

/// Titles whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st", "vs"];

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Alphanumeric words of a text, in order, before any normalization
///
/// Words are split on Unicode word boundaries and cut at the first
/// apostrophe, so "Turing's" yields "Turing". Whatever is still not purely
/// alphanumeric (decimals, symbols) is dropped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
        .map(|w| w.split(is_apostrophe).next().unwrap_or(w))
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphanumeric))
}

/// Number of words in a text, stopwords included
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Word tokenizer over [`words`] with lowercasing and stop word removal
pub struct Tokenizer<'a> {
    stopwords: &'a Stopwords,
    stemmer: Option<Stemmer>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Tokenizer {
            stopwords,
            stemmer: None,
        }
    }

    /// Tokenizer that additionally applies Porter stemming to kept words
    pub fn with_stemming(stopwords: &'a Stopwords) -> Self {
        Tokenizer {
            stopwords,
            stemmer: Some(Stemmer::create(Algorithm::English)),
        }
    }

    /// Normalize text into an ordered token sequence
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        words(text)
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.contains(w))
            .map(|w| match &self.stemmer {
                Some(stemmer) => stemmer.stem(&w).into_owned(),
                None => w,
            })
            .collect()
    }
}

/// Split raw file content into passages (one per line)
pub fn split_passages(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Split a passage into trimmed, non-empty sentences
///
/// A boundary right after a title such as "Mr." or "Dr." is not a sentence
/// end; the fragment is joined with the one that follows.
pub fn split_sentences(passage: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut pending = String::new();
    for piece in passage.unicode_sentences() {
        pending.push_str(piece);
        if !ends_with_abbreviation(&pending) {
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
    }
    push_trimmed(&mut sentences, &pending);
    sentences
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    let Some(head) = fragment.trim_end().strip_suffix('.') else {
        return false;
    };
    let last = head.rsplit(char::is_whitespace).next().unwrap_or(head);
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let sentence = fragment.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let stopwords = Stopwords::english();
        let tokens = Tokenizer::new(&stopwords).tokenize("Hello world! This is a test.");
        assert_eq!(tokens, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_tokenize_drops_non_alphanumeric_tokens() {
        let stopwords = Stopwords::english();
        let tokens = Tokenizer::new(&stopwords).tokenize("Pi is 3.14, isn't it? Python 3 rocks");
        // "3.14" is not purely alphanumeric; "isn't" is cut to the stop word "isn"
        assert_eq!(tokens, vec!["pi", "python", "3", "rocks"]);
    }

    #[test]
    fn test_tokenize_keeps_possessive_nouns() {
        let stopwords = Stopwords::english();
        let tokenizer = Tokenizer::new(&stopwords);
        assert_eq!(tokenizer.tokenize("Turing's test"), vec!["turing", "test"]);
        assert_eq!(
            tokenizer.tokenize("Turing\u{2019}s test measures a machine's intelligence."),
            vec!["turing", "test", "measures", "machine", "intelligence"]
        );
    }

    #[test]
    fn test_word_count_includes_stop_words() {
        assert_eq!(word_count("AI is learning"), 3);
        assert_eq!(word_count("AI learning is a big field of AI."), 8);
        assert_eq!(word_count("Turing's test, 3.14!"), 2);
        assert_eq!(word_count("..."), 0);
    }

    #[test]
    fn test_tokenize_empty_after_stop_words() {
        let stopwords = Stopwords::english();
        let tokens = Tokenizer::new(&stopwords).tokenize("What is the... of it?");
        assert_eq!(tokens, Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_lowercases_before_stopword_check() {
        let stopwords = Stopwords::english();
        let tokens = Tokenizer::new(&stopwords).tokenize("THE Neural Network");
        assert_eq!(tokens, vec!["neural", "network"]);
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let stopwords = Stopwords::english();
        let tokenizer = Tokenizer::new(&stopwords);
        let text = "Machine learning learns from data; data drives learning.";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }

    #[test]
    fn test_tokenize_with_stemming() {
        let stopwords = Stopwords::english();
        let tokens = Tokenizer::with_stemming(&stopwords).tokenize("Graphs and networks");
        assert_eq!(tokens, vec!["graph", "network"]);
    }

    #[test]
    fn test_extra_stopwords_are_removed() {
        let stopwords = Stopwords::english_with(["neural"]);
        let tokens = Tokenizer::new(&stopwords).tokenize("neural network");
        assert_eq!(tokens, vec!["network"]);
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("The cat sat. The dog ran fast.");
        assert_eq!(sentences, vec!["The cat sat.", "The dog ran fast."]);
    }

    #[test]
    fn test_split_sentences_question_and_exclamation() {
        let sentences = split_sentences("Is it raining? Yes! Bring an umbrella");
        assert_eq!(
            sentences,
            vec!["Is it raining?", "Yes!", "Bring an umbrella"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_titles_attached() {
        let sentences = split_sentences("Mr. Smith invented the engine. Dr. Jones improved it.");
        assert_eq!(
            sentences,
            vec!["Mr. Smith invented the engine.", "Dr. Jones improved it."]
        );
    }

    #[test]
    fn test_split_sentences_trailing_title() {
        assert_eq!(split_sentences("Ask the Dr."), vec!["Ask the Dr."]);
    }

    #[test]
    fn test_split_sentences_blank_passage() {
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_split_passages_by_line() {
        let passages: Vec<&str> = split_passages("one\ntwo\n\nthree").collect();
        assert_eq!(passages, vec!["one", "two", "", "three"]);
    }
}
