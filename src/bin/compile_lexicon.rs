use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lexicon_lookup::compiler::{run_compile, CompileOptions};
use lexicon_lookup::config::{Config, DEFAULT_CONFIG_FILE};
use lexicon_lookup::logging::init_tracing;

/// Builds the JSON lexicon from the noun, verb, adj and adv data files.
///
/// Runs with no arguments: the data directory comes from `WNSEARCHDIR` or
/// `config.toml`, the output path from `config.toml`.
#[derive(Parser, Debug)]
#[clap(name = "compile_lexicon", version)]
struct Cli {
    /// Configuration file.
    #[clap(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding data.noun, data.verb, data.adj and data.adv.
    /// Defaults to `WNSEARCHDIR`, then `data_dir` from the config file.
    #[clap(long)]
    data_dir: Option<PathBuf>,

    /// Where to write the compiled lexicon.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let options = CompileOptions {
        data_dir: cli.data_dir.unwrap_or_else(|| config.resolve_data_dir()),
        output_path: cli.output.unwrap_or_else(|| config.lexicon_path()),
    };

    let summary = run_compile(&options).context("compiling lexicon")?;
    println!(
        "Compiled {} words from {} records into {}",
        summary.distinct_words,
        summary.records_kept,
        options.output_path.display()
    );
    Ok(())
}
