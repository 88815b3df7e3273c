use criterion::{criterion_group, criterion_main, Criterion};
use vsm_core::rank::score_documents;
use vsm_core::{DocumentWeights, IdfTable, InvertedIndex, PortugueseTokenizer, QueryVector, Tokenizer};

const TEXT: &str = "O rato roeu a roupa do rei de Roma e a rainha com raiva resolveu remendar. \
    Três pratos de trigo para três tigres tristes. O sabiá não sabia que o sábio sabia assobiar.";

fn corpus() -> Vec<String> {
    (0..200).map(|i| format!("{TEXT} documento{i} parte{}", i % 7)).collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = PortugueseTokenizer::new();
    c.bench_function("tokenize_paragraph", |b| b.iter(|| tokenizer.tokenize(TEXT)));
}

fn bench_rank(c: &mut Criterion) {
    let tokenizer = PortugueseTokenizer::new();
    let docs = corpus();
    let index = InvertedIndex::build(&tokenizer, &docs);
    let idf = IdfTable::compute(&index, index.num_docs()).expect("non-empty corpus");
    let weights = DocumentWeights::compute(&index, &idf);
    let query = QueryVector::from_text(&tokenizer, "tigres tristes parte3", &idf).expect("query has terms");
    c.bench_function("score_200_documents", |b| b.iter(|| score_documents(&weights, &query)));
}

criterion_group!(benches, bench_tokenize, bench_rank);
criterion_main!(benches);
