use crate::error::{Result, VsmError};
use crate::DocId;
use std::fs;
use std::path::{Path, PathBuf};

/// Fail with `MissingFile` naming `path` unless it exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(VsmError::MissingFile { path: path.to_path_buf() })
    }
}

/// Read a UTF-8 file as a string; invalid UTF-8 surfaces as an I/O error.
pub fn read_text(path: &Path) -> Result<String> {
    ensure_exists(path)?;
    Ok(fs::read_to_string(path)?)
}

/// Trimmed lines of a UTF-8 file.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_text(path)?.lines().map(|l| l.trim().to_string()).collect())
}

/// First line of a query file.
pub fn read_query(path: &Path) -> Result<String> {
    read_lines(path)?.into_iter().next().ok_or(VsmError::EmptyQuery)
}

/// Documents listed in a base file, in id order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Paths exactly as written in the base file; used to label output.
    pub paths: Vec<String>,
    pub texts: Vec<String>,
}

impl Corpus {
    /// Load every document named in `base`. Relative document paths resolve
    /// against the working directory; blank lines are skipped.
    pub fn load(base: &Path) -> Result<Self> {
        let paths: Vec<String> = read_lines(base)?.into_iter().filter(|l| !l.is_empty()).collect();
        if paths.is_empty() {
            return Err(VsmError::EmptyCollection);
        }
        let texts = paths
            .iter()
            .map(|p| read_text(&PathBuf::from(p)))
            .collect::<Result<Vec<_>>>()?;
        tracing::info!(base = %base.display(), num_docs = paths.len(), "corpus loaded");
        Ok(Self { paths, texts })
    }

    pub fn len(&self) -> usize { self.paths.len() }

    pub fn is_empty(&self) -> bool { self.paths.is_empty() }

    /// Output label of a 1-based document id.
    pub fn label(&self, doc_id: DocId) -> Option<&str> {
        (doc_id as usize).checked_sub(1).and_then(|i| self.paths.get(i)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_documents_in_list_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "o gato corre").unwrap();
        fs::write(&b, "o cão late").unwrap();
        let base = dir.path().join("base.txt");
        fs::write(&base, format!("{}\n\n{}\n", b.display(), a.display())).unwrap();

        let corpus = Corpus::load(&base).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.texts[0], "o cão late");
        assert_eq!(corpus.label(2), Some(a.to_str().unwrap()));
        assert_eq!(corpus.label(0), None);
    }

    #[test]
    fn missing_document_names_the_path() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base.txt");
        let ghost = dir.path().join("ghost.txt");
        fs::write(&base, format!("{}\n", ghost.display())).unwrap();
        match Corpus::load(&base) {
            Err(VsmError::MissingFile { path }) => assert_eq!(path, ghost),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_base_is_rejected() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base.txt");
        fs::write(&base, "\n\n").unwrap();
        assert!(matches!(Corpus::load(&base), Err(VsmError::EmptyCollection)));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("latin1.txt");
        fs::write(&doc, [0x63u8, 0xe3, 0x6f]).unwrap();
        assert!(matches!(read_text(&doc), Err(VsmError::Io(_))));
    }

    #[test]
    fn query_is_the_first_line() {
        let dir = tempdir().unwrap();
        let q = dir.path().join("consulta.txt");
        fs::write(&q, "  gato corre \noutra\n").unwrap();
        assert_eq!(read_query(&q).unwrap(), "gato corre");
        fs::write(&q, "").unwrap();
        assert!(matches!(read_query(&q), Err(VsmError::EmptyQuery)));
    }
}
