use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::corpus::Corpus;
use vsm_core::persist::{render_index, write_artifact, OutputPaths};
use vsm_core::{InvertedIndex, PortugueseTokenizer};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build the inverted index of a document base", long_about = None)]
struct Cli {
    /// File listing one document path per line
    base: PathBuf,
    /// Directory that receives indice.txt
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let corpus = Corpus::load(&cli.base)
        .with_context(|| format!("loading document base {}", cli.base.display()))?;
    let tokenizer = PortugueseTokenizer::new();
    let index = InvertedIndex::build(&tokenizer, &corpus.texts);

    let rendered = render_index(&index);
    print!("{rendered}");

    let paths = OutputPaths::new(&cli.output_dir);
    write_artifact(&paths.index(), &rendered)
        .with_context(|| format!("writing {}", paths.index().display()))?;
    tracing::info!(output = %paths.index().display(), "index build complete");
    Ok(())
}
