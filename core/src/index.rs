use crate::tokenizer::Tokenizer;
use crate::DocId;
use std::collections::HashMap;

/// term -> (doc id -> raw occurrence count). Counts are always >= 1.
pub type Postings = HashMap<DocId, u32>;

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    num_docs: u32,
}

/// Accumulates documents in ingestion order; `finish` freezes the index.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: InvertedIndex,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Record one document's terms and return its id (1-based).
    pub fn add_document<I, S>(&mut self, terms: I) -> DocId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index.num_docs += 1;
        let doc_id = self.index.num_docs;
        for term in terms {
            *self
                .index
                .postings
                .entry(term.into())
                .or_default()
                .entry(doc_id)
                .or_insert(0) += 1;
        }
        doc_id
    }

    pub fn finish(self) -> InvertedIndex {
        tracing::info!(
            num_docs = self.index.num_docs,
            num_terms = self.index.postings.len(),
            "inverted index built"
        );
        self.index
    }
}

impl InvertedIndex {
    /// Tokenize every document with `tokenizer` and index it; ids follow slice order.
    pub fn build<T, S>(tokenizer: &T, documents: &[S]) -> Self
    where
        T: Tokenizer + ?Sized,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new();
        for doc in documents {
            builder.add_document(tokenizer.tokenize(doc.as_ref()));
        }
        builder.finish()
    }

    /// Number of documents ingested, including those that produced no terms.
    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn postings(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |p| p.len())
    }

    /// Unordered iteration over every term and its postings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.postings.iter().map(|(t, p)| (t.as_str(), p))
    }

    /// Terms in alphabetical order, for output.
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}
