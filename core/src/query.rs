use crate::error::{Result, VsmError};
use crate::tokenizer::Tokenizer;
use crate::weighting::{IdfTable, WeightVector};
use std::collections::HashMap;

/// Weighted query: `tf(t, q) = count(t) / total_terms`, times `idf(t)`.
/// Terms absent from the IDF table carry no weight and are dropped.
#[derive(Debug, Clone)]
pub struct QueryVector {
    weights: WeightVector,
    total_terms: u32,
}

impl QueryVector {
    pub fn from_counts(counts: &HashMap<String, u32>, idf: &IdfTable) -> Result<Self> {
        let total_terms: u32 = counts.values().sum();
        if total_terms == 0 {
            return Err(VsmError::EmptyQuery);
        }
        let total = total_terms as f64;
        let mut weights = WeightVector::with_capacity(counts.len());
        for (term, &count) in counts {
            match idf.get(term) {
                Some(idf_t) => {
                    weights.insert(term.clone(), (count as f64 / total) * idf_t);
                }
                None => tracing::debug!(term = %term, "query term not in collection"),
            }
        }
        Ok(Self { weights, total_terms })
    }

    pub fn from_text<T: Tokenizer + ?Sized>(tokenizer: &T, text: &str, idf: &IdfTable) -> Result<Self> {
        Self::from_counts(&tokenizer.term_counts(text), idf)
    }

    pub fn weights(&self) -> &WeightVector { &self.weights }

    pub fn get(&self, term: &str) -> Option<f64> { self.weights.get(term).copied() }

    /// Term count after filtering, unseen terms included.
    pub fn total_terms(&self) -> u32 { self.total_terms }

    /// True when no query term occurs in the collection.
    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}
