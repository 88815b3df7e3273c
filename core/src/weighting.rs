//! TF-IDF weights for the indexed collection.
//!
//! `idf(t) = log10(N / df(t))` and, per document,
//! `weight(t, d) = (1 + log10(rawfreq(t, d))) * idf(t)`.

use crate::error::{Result, VsmError};
use crate::index::InvertedIndex;
use crate::DocId;
use std::collections::HashMap;

/// term -> weight for a single document or query.
pub type WeightVector = HashMap<String, f64>;

/// Inverse document frequency of every indexed term. Terms never seen in the
/// collection have no entry.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    values: HashMap<String, f64>,
}

impl IdfTable {
    /// Compute IDF for every term of `index` against a collection of `num_docs`.
    pub fn compute(index: &InvertedIndex, num_docs: u32) -> Result<Self> {
        if num_docs == 0 {
            return Err(VsmError::EmptyCollection);
        }
        let n = num_docs as f64;
        let values = index
            .iter()
            .map(|(term, postings)| (term.to_string(), (n / postings.len() as f64).log10()))
            .collect();
        Ok(Self { values })
    }

    pub fn get(&self, term: &str) -> Option<f64> { self.values.get(term).copied() }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Log-dampened document term frequency; only defined for `raw >= 1`.
#[inline]
pub fn document_tf(raw: u32) -> f64 {
    debug_assert!(raw >= 1);
    1.0 + (raw as f64).log10()
}

/// One weight vector per document of the collection, addressed by doc id.
/// Documents without indexed terms hold an empty vector.
#[derive(Debug, Clone, Default)]
pub struct DocumentWeights {
    vectors: Vec<WeightVector>,
}

impl DocumentWeights {
    pub fn compute(index: &InvertedIndex, idf: &IdfTable) -> Self {
        let mut vectors = vec![WeightVector::new(); index.num_docs() as usize];
        for (term, postings) in index.iter() {
            // Every indexed term has an IDF entry when both come from the same index.
            let Some(idf_t) = idf.get(term) else { continue };
            for (&doc_id, &raw) in postings {
                vectors[doc_id as usize - 1].insert(term.to_string(), document_tf(raw) * idf_t);
            }
        }
        tracing::info!(num_docs = vectors.len(), "document weights computed");
        Self { vectors }
    }

    pub fn num_docs(&self) -> usize { self.vectors.len() }

    pub fn get(&self, doc_id: DocId) -> Option<&WeightVector> {
        (doc_id as usize).checked_sub(1).and_then(|i| self.vectors.get(i))
    }

    /// (doc id, vector) in ascending doc id order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &WeightVector)> {
        self.vectors.iter().enumerate().map(|(i, v)| (i as DocId + 1, v))
    }
}
