use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_]*").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","à","ao","aos","aquela","aquelas","aquele","aqueles","aquilo","as","às","até",
            "com","como","contra",
            "da","das","de","dela","delas","dele","deles","depois","do","dos",
            "e","é","ela","elas","ele","eles","em","entre","era","eram","essa","essas","esse","esses","esta","está","estão","estas","estava","este","estes","eu",
            "foi","foram",
            "há",
            "isso","isto",
            "já",
            "lhe","lhes",
            "mais","mas","me","mesmo","meu","meus","minha","minhas","muito","muitos",
            "na","não","nas","nem","no","nos","nós","nossa","nossas","nosso","nossos","num","numa",
            "o","os","ou",
            "para","pela","pelas","pelo","pelos","por","porque",
            "qual","quando","que","quem",
            "se","sem","ser","seu","seus","só","sua","suas",
            "também","te","tem","têm","teu","tu","tua",
            "um","uma","umas","uns",
            "você","vocês","vos",
        ];
        words.iter().copied().collect()
    };
}

/// Maps raw text to normalized single-word terms.
///
/// Implementations must apply the same filtering to documents and queries so
/// that their vectors are comparable.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Occurrence count of every distinct term in `text`.
    fn term_counts(&self, text: &str) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for term in self.tokenize(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}

/// Portuguese analyzer: NFKC normalization, lowercase, stopword removal and
/// Snowball stemming as a stand-in for lemmatization.
pub struct PortugueseTokenizer {
    stemmer: Stemmer,
}

impl PortugueseTokenizer {
    pub fn new() -> Self {
        Self { stemmer: Stemmer::create(Algorithm::Portuguese) }
    }
}

impl Default for PortugueseTokenizer {
    fn default() -> Self { Self::new() }
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

impl Tokenizer for PortugueseTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut tokens = Vec::new();
        for mat in RE.find_iter(&normalized) {
            let token = mat.as_str();
            if is_stopword(token) { continue; }
            tokens.push(self.stemmer.stem(token).into_owned());
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stopwords_and_punctuation() {
        let t = PortugueseTokenizer::new().tokenize("O gato, e o rato!");
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|w| w.chars().all(|c| c.is_alphabetic())));
    }

    #[test]
    fn inflections_share_a_term() {
        let tok = PortugueseTokenizer::new();
        assert_eq!(tok.tokenize("gato"), tok.tokenize("gatos"));
    }

    #[test]
    fn counts_repeated_terms() {
        let tok = PortugueseTokenizer::new();
        let counts = tok.term_counts("casa casa CASA jardim");
        let casa = &tok.tokenize("casa")[0];
        assert_eq!(counts[casa], 3);
        assert_eq!(counts.len(), 2);
    }
}
