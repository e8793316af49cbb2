//*** START FILE: src/compiler.rs ***//
use crate::error::CompileError;
use crate::lexicon_io::save_lexicon;
use crate::parsing::data_parser::{parse_data_line, SynsetRecord};
use crate::types::lexicon_data::{Lexicon, PartOfSpeech, SenseRecord};

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileSummary {
    pub lines_read: usize,
    pub records_kept: usize,
    pub lines_skipped: usize,
    pub senses_by_pos: BTreeMap<PartOfSpeech, usize>,
    pub skipped_categories: Vec<PartOfSpeech>,
    pub distinct_words: usize,
}

/// Accumulates the lexicon across all category files of one compile run.
#[derive(Debug, Default)]
pub struct BuildContext {
    lexicon: Lexicon,
    summary: CompileSummary,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sense per word of `record` under `pos`.
    pub fn add_record(&mut self, pos: PartOfSpeech, record: &SynsetRecord) {
        if let Some(own_type) = record.synset_type {
            if own_type != pos {
                debug!(
                    "Synset {} has type {} but was read from the {} file; grouping under {}",
                    record.offset, own_type, pos, pos
                );
            }
        }

        for word in &record.words {
            let synonyms: Vec<String> = record
                .words
                .iter()
                .filter(|other| other.to_lowercase() != word.to_lowercase())
                .cloned()
                .collect();

            self.lexicon.entry_mut(word).push_sense(
                pos,
                SenseRecord {
                    definition: record.gloss.clone(),
                    synonyms,
                },
            );
            *self.summary.senses_by_pos.entry(pos).or_insert(0) += 1;
        }
        self.summary.records_kept += 1;
    }

    /// Parses every line of a category's data text.
    pub fn ingest_str(&mut self, pos: PartOfSpeech, contents: &str) {
        for line in contents.lines() {
            self.summary.lines_read += 1;
            match parse_data_line(line) {
                Some(record) => self.add_record(pos, &record),
                None => self.summary.lines_skipped += 1,
            }
        }
    }

    /// Reads one category file. A missing file is logged and skipped.
    pub fn ingest_file(&mut self, pos: PartOfSpeech, path: &Path) -> Result<(), CompileError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Data file for {} not found at {}; skipping category", pos, path.display());
                self.summary.skipped_categories.push(pos);
                return Ok(());
            }
            Err(source) => {
                return Err(CompileError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            warn!("{} is not valid UTF-8; invalid bytes were replaced", path.display());
        }

        let before = self.summary.senses_by_pos.get(&pos).copied().unwrap_or(0);
        self.ingest_str(pos, &contents);
        let after = self.summary.senses_by_pos.get(&pos).copied().unwrap_or(0);
        info!("Read {}: {} senses", path.display(), after - before);
        Ok(())
    }

    pub fn finish(mut self) -> (Lexicon, CompileSummary) {
        self.summary.distinct_words = self.lexicon.len();
        (self.lexicon, self.summary)
    }
}

/// Compiles the four `data.<pos>` files under `data_dir`, in noun, verb, adj, adv order.
pub fn compile_from_dir(data_dir: &Path) -> Result<(Lexicon, CompileSummary), CompileError> {
    let mut ctx = BuildContext::new();
    for pos in PartOfSpeech::ALL {
        ctx.ingest_file(pos, &data_dir.join(pos.data_file_name()))?;
    }
    Ok(ctx.finish())
}

#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub data_dir: PathBuf,
    pub output_path: PathBuf,
}

/// Full rebuild: compile, check synonym integrity, overwrite the artifact.
pub fn run_compile(options: &CompileOptions) -> Result<CompileSummary, CompileError> {
    info!("Compiling lexicon from {}", options.data_dir.display());
    let (lexicon, summary) = compile_from_dir(&options.data_dir)?;

    let dangling = lexicon.dangling_synonyms();
    if !dangling.is_empty() {
        warn!("{} synonyms do not resolve to a lexicon entry", dangling.len());
        for d in dangling.iter().take(10) {
            debug!("  {} ({}): {}", d.term, d.pos, d.synonym);
        }
    }

    save_lexicon(&lexicon, &options.output_path)?;

    info!(
        "Wrote {} words ({} senses) to {}",
        summary.distinct_words,
        lexicon.sense_count(),
        options.output_path.display()
    );
    for (pos, count) in &summary.senses_by_pos {
        info!("  {}: {} senses", pos.label(), count);
    }
    if !summary.skipped_categories.is_empty() {
        warn!("Skipped categories: {:?}", summary.skipped_categories);
    }
    Ok(summary)
}

//*** END FILE: src/compiler.rs ***//
