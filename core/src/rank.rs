use crate::query::QueryVector;
use crate::weighting::{DocumentWeights, WeightVector};
use crate::DocId;
use std::cmp::Ordering;

/// Minimum similarity for a document to be reported as an answer.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub doc_id: DocId,
    pub similarity: f64,
}

/// Cosine similarity between a document vector and the query.
///
/// The dot product runs over the document's terms that the query also has,
/// while each magnitude covers its whole vector. A zero magnitude on either
/// side gives exactly 0.
pub fn cosine_similarity(doc: &WeightVector, query: &QueryVector) -> f64 {
    let q = query.weights();
    let dot: f64 = doc
        .iter()
        .filter_map(|(term, w)| q.get(term).map(|qw| w * qw))
        .fold(0.0, |acc, x| acc + x);
    let doc_norm = doc.values().map(|w| w * w).sum::<f64>().sqrt();
    let denom = doc_norm * query.magnitude();
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}

/// Similarity of every document in the collection, in doc id order.
pub fn score_documents(weights: &DocumentWeights, query: &QueryVector) -> Vec<ScoredDocument> {
    weights
        .iter()
        .map(|(doc_id, vector)| ScoredDocument { doc_id, similarity: cosine_similarity(vector, query) })
        .collect()
}

/// Descending similarity; equal scores keep ascending doc id order.
pub fn compare(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.similarity.total_cmp(&a.similarity).then(a.doc_id.cmp(&b.doc_id))
}

pub fn rank(mut scores: Vec<ScoredDocument>) -> Vec<ScoredDocument> {
    scores.sort_by(compare);
    scores
}

/// Ranked documents whose similarity reaches `threshold`.
pub fn answers(scores: Vec<ScoredDocument>, threshold: f64) -> Vec<ScoredDocument> {
    let mut ranked = rank(scores);
    ranked.retain(|s| s.similarity >= threshold);
    tracing::info!(matches = ranked.len(), threshold, "ranking complete");
    ranked
}
