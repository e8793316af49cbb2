//*** START FILE: src/parsing/data_parser.rs ***//
use crate::types::lexicon_data::PartOfSpeech;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const GLOSS_SEPARATOR: &str = " | ";

/// One synset line from a `data.<pos>` file, reduced to what the lexicon needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord {
    pub offset: String,
    pub synset_type: Option<PartOfSpeech>,
    /// Word literals in source casing, underscores already turned into spaces.
    pub words: Vec<String>,
    pub gloss: String,
}

// offset lex_filenum synset_type w_cnt <rest>
fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(\S+)\s+(\S+)\s+(\S+)(?:\s+(.*))?$").expect("static header regex")
    })
}

/// Parses one line of a data file.
///
/// Returns `None` for lines that contribute nothing: blank lines, indented
/// license-header lines, a word count of zero or one that is not valid hex,
/// and lines too short to hold the words they announce.
pub fn parse_data_line(line: &str) -> Option<SynsetRecord> {
    if line.trim().is_empty() || line.starts_with(char::is_whitespace) {
        return None;
    }

    let (head, gloss) = match line.find(GLOSS_SEPARATOR) {
        Some(idx) => (&line[..idx], line[idx + GLOSS_SEPARATOR.len()..].trim()),
        None => (line, ""),
    };

    let caps = header_re().captures(head.trim_end())?;
    let offset = caps.get(1).map_or("", |m| m.as_str());
    let synset_type_code = caps.get(3).map_or("", |m| m.as_str());
    let word_count_hex = caps.get(4).map_or("", |m| m.as_str());

    let word_count = match usize::from_str_radix(word_count_hex, 16) {
        Ok(0) | Err(_) => return None,
        Ok(n) => n,
    };

    let rest: Vec<&str> = caps
        .get(5)
        .map_or("", |m| m.as_str())
        .split_whitespace()
        .collect();
    let needed_tokens = match word_count.checked_mul(2) {
        Some(n) => n,
        None => {
            debug!("Skipping synset {}: word count {} is out of range", offset, word_count_hex);
            return None;
        }
    };
    if rest.len() < needed_tokens {
        debug!(
            "Skipping synset {}: announces {} words but has only {} tokens",
            offset,
            word_count,
            rest.len()
        );
        return None;
    }

    let words = rest
        .chunks(2)
        .take(word_count)
        .map(|pair| pair[0].replace('_', " "))
        .collect();

    Some(SynsetRecord {
        offset: offset.to_string(),
        synset_type: PartOfSpeech::from_synset_type(synset_type_code),
        words,
        gloss: gloss.to_string(),
    })
}

//*** END FILE: src/parsing/data_parser.rs ***//
