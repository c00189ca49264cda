//! Answer output formats

use serde::Serialize;

use docqa_core::error::Result;
use docqa_core::pipeline::Answer;

#[derive(Debug, Serialize)]
struct FileEntry<'a> {
    id: &'a str,
    score: f64,
}

#[derive(Debug, Serialize)]
struct AnswerEntry<'a> {
    sentence: &'a str,
    score: f64,
    density: f64,
}

#[derive(Debug, Serialize)]
struct AnswerDocument<'a> {
    query: &'a [String],
    files: Vec<FileEntry<'a>>,
    answers: Vec<AnswerEntry<'a>>,
}

impl<'a> From<&'a Answer> for AnswerDocument<'a> {
    fn from(answer: &'a Answer) -> Self {
        AnswerDocument {
            query: &answer.query,
            files: answer
                .files
                .iter()
                .map(|r| FileEntry {
                    id: &r.id,
                    score: r.score.primary,
                })
                .collect(),
            answers: answer
                .sentences
                .iter()
                .map(|r| AnswerEntry {
                    sentence: &r.id,
                    score: r.score.primary,
                    density: r.score.secondary,
                })
                .collect(),
        }
    }
}

/// Print answer sentences, one per line
pub fn output_human(answer: &Answer) -> Result<()> {
    for sentence in &answer.sentences {
        println!("{}", sentence.id);
    }
    Ok(())
}

/// Print the answer as a single JSON object
pub fn output_json(answer: &Answer) -> Result<()> {
    let document = AnswerDocument::from(answer);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
