//! Vector-space retrieval: inverted index, TF-IDF weighting, cosine ranking
//! and 11-point interpolated precision/recall evaluation.

pub mod corpus;
pub mod error;
pub mod eval;
pub mod index;
pub mod persist;
pub mod query;
pub mod rank;
pub mod tokenizer;
pub mod weighting;

/// 1-based document id, assigned by position in the document list.
pub type DocId = u32;

pub use error::{Result, VsmError};
pub use index::{IndexBuilder, InvertedIndex};
pub use query::QueryVector;
pub use rank::{ScoredDocument, DEFAULT_RELEVANCE_THRESHOLD};
pub use tokenizer::{PortugueseTokenizer, Tokenizer};
pub use weighting::{DocumentWeights, IdfTable, WeightVector};
