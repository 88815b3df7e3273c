use anyhow::Result;
use clap::Parser;
use searcher::{run, SearchOptions};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::{PortugueseTokenizer, DEFAULT_RELEVANCE_THRESHOLD};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Rank a document base against a query with the vector-space model", long_about = None)]
struct Args {
    /// File listing one document path per line
    base: PathBuf,
    /// File whose first line is the query
    query: PathBuf,
    /// Directory that receives resposta.txt, indice.txt and pesos.txt
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Minimum similarity for a document to count as an answer
    #[arg(long, default_value_t = DEFAULT_RELEVANCE_THRESHOLD)]
    threshold: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Args::parse();
    let tokenizer = PortugueseTokenizer::new();
    let opts = SearchOptions { output_dir: args.output_dir, threshold: args.threshold };

    let outcome = run(&tokenizer, &args.base, &args.query, &opts)?;
    println!("{} matching documents", outcome.answers.len());
    for s in &outcome.answers {
        println!("{} {:.4}", outcome.corpus.label(s.doc_id).unwrap_or_default(), s.similarity);
    }
    Ok(())
}
