//! docqa Core Library
//!
//! TF-IDF retrieval engine behind the `docqa` CLI: file ranking, sentence
//! ranking, and the text processing that feeds them.

pub mod config;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod ranking;
pub mod text;
