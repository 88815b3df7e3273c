//! Flat text artifacts of a run.
//!
//! Each artifact is rendered to a `String` first and then written through a
//! temporary sibling file that is renamed into place.

use crate::corpus::Corpus;
use crate::error::Result;
use crate::eval::InterpolatedCurve;
use crate::index::InvertedIndex;
use crate::rank::ScoredDocument;
use crate::weighting::DocumentWeights;
use std::fmt::Write as _;
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

pub struct OutputPaths {
    pub root: PathBuf,
}

impl OutputPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn index(&self) -> PathBuf { self.root.join("indice.txt") }
    pub fn weights(&self) -> PathBuf { self.root.join("pesos.txt") }
    pub fn ranking(&self) -> PathBuf { self.root.join("resposta.txt") }
    pub fn mean_precision(&self) -> PathBuf { self.root.join("media.txt") }
}

/// `term: {doc: count, ...}` per line, terms alphabetical, doc ids ascending.
pub fn render_index(index: &InvertedIndex) -> String {
    let mut out = String::new();
    for term in index.sorted_terms() {
        let Some(postings) = index.postings(term) else { continue };
        let mut docs: Vec<_> = postings.iter().collect();
        docs.sort_unstable_by_key(|(doc_id, _)| **doc_id);
        let body = docs
            .iter()
            .map(|(doc_id, count)| format!("{doc_id}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{term}: {{{body}}}");
    }
    out
}

/// `path: term,weight term,weight` per document in id order, terms sorted.
pub fn render_weights(weights: &DocumentWeights, corpus: &Corpus) -> String {
    let mut out = String::new();
    for (doc_id, vector) in weights.iter() {
        let label = corpus.label(doc_id).unwrap_or_default();
        let mut terms: Vec<_> = vector.iter().collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let body = terms
            .iter()
            .map(|(term, w)| format!("{term},{w:?}"))
            .collect::<Vec<_>>()
            .join(" ");
        if body.is_empty() {
            let _ = writeln!(out, "{label}:");
        } else {
            let _ = writeln!(out, "{label}: {body}");
        }
    }
    out
}

/// Answer count, then `path similarity` lines in the given (ranked) order.
pub fn render_ranking(answers: &[ScoredDocument], corpus: &Corpus) -> String {
    let mut out = format!("{}\n", answers.len());
    for s in answers {
        let label = corpus.label(s.doc_id).unwrap_or_default();
        let _ = writeln!(out, "{label} {:?}", s.similarity);
    }
    out
}

/// One line per recall level, two decimals.
pub fn render_mean_precision(curve: &InterpolatedCurve) -> String {
    curve.precision.iter().map(|p| format!("{p:.2}\n")).collect()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn remove_all(paths: &[PathBuf]) {
    for p in paths {
        let _ = fs::remove_file(p);
    }
}

/// Write every `(path, contents)` pair as a unit: all contents go to
/// temporary siblings first, and the renames start only once every
/// temporary file is complete. On failure the temporary files are removed.
pub fn write_artifacts(artifacts: &[(PathBuf, String)]) -> Result<()> {
    let mut staged: Vec<PathBuf> = Vec::with_capacity(artifacts.len());
    for (path, contents) in artifacts {
        let tmp = tmp_path(path);
        let written = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => create_dir_all(parent).and_then(|_| fs::write(&tmp, contents)),
            None => fs::write(&tmp, contents),
        };
        staged.push(tmp);
        if let Err(e) = written {
            remove_all(&staged);
            return Err(e.into());
        }
    }
    for (i, (path, contents)) in artifacts.iter().enumerate() {
        if let Err(e) = fs::rename(&staged[i], path) {
            remove_all(&staged[i..]);
            return Err(e.into());
        }
        tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    }
    Ok(())
}

/// Single-file form of [`write_artifacts`].
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    write_artifacts(&[(path.to_path_buf(), contents.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexBuilder;
    use crate::weighting::IdfTable;
    use tempfile::tempdir;

    fn corpus(paths: &[&str]) -> Corpus {
        Corpus {
            paths: paths.iter().map(|p| p.to_string()).collect(),
            texts: vec![String::new(); paths.len()],
        }
    }

    fn sample_index() -> InvertedIndex {
        let mut b = IndexBuilder::new();
        b.add_document(["sol", "mar", "sol"]);
        b.add_document(Vec::<String>::new());
        b.add_document(["mar"]);
        b.finish()
    }

    #[test]
    fn index_lines_are_sorted() {
        assert_eq!(render_index(&sample_index()), "mar: {1: 1, 3: 1}\nsol: {1: 2}\n");
    }

    #[test]
    fn weights_list_every_document() {
        let index = sample_index();
        let idf = IdfTable::compute(&index, index.num_docs()).unwrap();
        let weights = DocumentWeights::compute(&index, &idf);
        let text = render_weights(&weights, &corpus(&["a.txt", "b.txt", "c.txt"]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("a.txt: mar,"));
        assert!(lines[0].contains(" sol,"));
        assert_eq!(lines[1], "b.txt:");
    }

    #[test]
    fn ranking_starts_with_the_count() {
        let answers = [
            ScoredDocument { doc_id: 2, similarity: 0.5 },
            ScoredDocument { doc_id: 1, similarity: 0.25 },
        ];
        let text = render_ranking(&answers, &corpus(&["a.txt", "b.txt"]));
        assert_eq!(text, "2\nb.txt 0.5\na.txt 0.25\n");
    }

    #[test]
    fn mean_precision_has_eleven_rounded_lines() {
        let curve = InterpolatedCurve { precision: [2.0 / 3.0; 11] };
        let text = render_mean_precision(&curve);
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().all(|l| l == "0.67"));
    }

    #[test]
    fn artifacts_replace_existing_files() {
        let dir = tempdir().unwrap();
        let paths = OutputPaths::new(dir.path().join("out"));
        write_artifact(&paths.ranking(), "old").unwrap();
        write_artifact(&paths.ranking(), "0\n").unwrap();
        assert_eq!(fs::read_to_string(paths.ranking()).unwrap(), "0\n");
        assert!(!dir.path().join("out/resposta.txt.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temporary_files() {
        let dir = tempdir().unwrap();
        let paths = OutputPaths::new(dir.path());
        write_artifact(&paths.index(), "old index\n").unwrap();
        // A directory in place of the second artifact makes its rename fail.
        let blocked = dir.path().join("blocked");
        fs::create_dir_all(blocked.join("child")).unwrap();

        let result = write_artifacts(&[
            (paths.ranking(), "1\n".to_string()),
            (blocked.clone(), "x".to_string()),
        ]);
        assert!(result.is_err());
        assert!(!dir.path().join("blocked.tmp").exists());
        assert_eq!(fs::read_to_string(paths.index()).unwrap(), "old index\n");
    }

    #[test]
    fn failed_write_leaves_existing_artifacts_untouched() {
        let dir = tempdir().unwrap();
        let paths = OutputPaths::new(dir.path());
        write_artifact(&paths.index(), "old index\n").unwrap();
        let file_as_dir = dir.path().join("plain");
        fs::write(&file_as_dir, "").unwrap();

        let result = write_artifacts(&[
            (paths.index(), "new index\n".to_string()),
            (file_as_dir.join("pesos.txt"), "w".to_string()),
        ]);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(paths.index()).unwrap(), "old index\n");
        assert!(!dir.path().join("indice.txt.tmp").exists());
    }
}
