use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use vsm_core::corpus::{read_query, Corpus};
use vsm_core::persist::{
    render_index, render_ranking, render_weights, write_artifacts, OutputPaths,
};
use vsm_core::rank::{answers, score_documents};
use vsm_core::{
    DocumentWeights, IdfTable, InvertedIndex, QueryVector, ScoredDocument, Tokenizer,
    DEFAULT_RELEVANCE_THRESHOLD,
};

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub output_dir: PathBuf,
    /// Minimum similarity reported in resposta.txt.
    pub threshold: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("."), threshold: DEFAULT_RELEVANCE_THRESHOLD }
    }
}

/// Everything a search run produces, before anything touches the disk.
#[derive(Debug)]
pub struct SearchOutcome {
    pub corpus: Corpus,
    pub index: InvertedIndex,
    pub weights: DocumentWeights,
    pub answers: Vec<ScoredDocument>,
}

/// Index the base, weight it, and rank every document against `query`.
pub fn search<T: Tokenizer + ?Sized>(tokenizer: &T, corpus: Corpus, query: &str, threshold: f64) -> Result<SearchOutcome> {
    let index = InvertedIndex::build(tokenizer, &corpus.texts);
    let idf = IdfTable::compute(&index, index.num_docs()).context("computing IDF")?;
    let weights = DocumentWeights::compute(&index, &idf);
    let query_vector = QueryVector::from_text(tokenizer, query, &idf)
        .with_context(|| format!("vectorizing query {query:?}"))?;
    if query_vector.is_empty() {
        tracing::info!(query, "no query term occurs in the collection");
    }
    let ranked = answers(score_documents(&weights, &query_vector), threshold);
    Ok(SearchOutcome { corpus, index, weights, answers: ranked })
}

/// Full run: load inputs, search, then write resposta.txt, indice.txt and pesos.txt.
pub fn run<T: Tokenizer + ?Sized>(tokenizer: &T, base: &Path, query_file: &Path, opts: &SearchOptions) -> Result<SearchOutcome> {
    let corpus = Corpus::load(base).with_context(|| format!("loading document base {}", base.display()))?;
    let query = read_query(query_file).with_context(|| format!("reading query {}", query_file.display()))?;
    let outcome = search(tokenizer, corpus, &query, opts.threshold)?;

    let paths = OutputPaths::new(&opts.output_dir);
    let artifacts = [
        (paths.ranking(), render_ranking(&outcome.answers, &outcome.corpus)),
        (paths.index(), render_index(&outcome.index)),
        (paths.weights(), render_weights(&outcome.weights, &outcome.corpus)),
    ];
    write_artifacts(&artifacts)
        .with_context(|| format!("writing artifacts to {}", opts.output_dir.display()))?;
    tracing::info!(output_dir = %opts.output_dir.display(), answers = outcome.answers.len(), "search complete");
    Ok(outcome)
}
