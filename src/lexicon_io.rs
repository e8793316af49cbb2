//*** START FILE: src/lexicon_io.rs ***//
use crate::error::LexiconError;
use crate::types::lexicon_data::Lexicon;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind as IoErrorKind, Write};
use std::path::Path;

/// Writes the lexicon as one compact JSON object, replacing any previous file.
/// Parent directories are created as needed.
pub fn save_lexicon(lexicon: &Lexicon, file_path: &Path) -> Result<(), LexiconError> {
    let io_err = |source| LexiconError::Io {
        path: file_path.to_path_buf(),
        source,
    };

    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(file_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, lexicon).map_err(|source| LexiconError::Json {
        path: file_path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Loads a compiled lexicon.
pub fn load_lexicon(file_path: &Path) -> Result<Lexicon, LexiconError> {
    let file = File::open(file_path).map_err(|source| {
        if source.kind() == IoErrorKind::NotFound {
            LexiconError::NotFound(file_path.to_path_buf())
        } else {
            LexiconError::Io {
                path: file_path.to_path_buf(),
                source,
            }
        }
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| LexiconError::Json {
        path: file_path.to_path_buf(),
        source,
    })
}

//*** END FILE: src/lexicon_io.rs ***//
