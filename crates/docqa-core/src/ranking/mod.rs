//! IDF computation and two-stage ranking
//!
//! Files are ranked by TF-IDF; sentences by the summed IDF of the query
//! terms they contain, with query term density breaking ties. Both stages
//! share one scoring loop ([`scoring::rank`]) and differ only in their
//! [`RankingStrategy`].

mod files;
mod idf;
pub mod scoring;
mod sentences;

use std::collections::BTreeSet;

pub use files::{rank_files, top_files, TfIdf};
pub use idf::{compute_idf, IdfTable};
pub use scoring::{Ranked, RankingStrategy, Score};
pub use sentences::{rank_sentences, top_sentences, IdfDensity};

/// Normalized query terms, duplicates collapsed
pub type Query = BTreeSet<String>;
