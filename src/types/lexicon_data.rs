//*** START FILE: src/types/lexicon_data.rs ***//
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Part-of-speech group. Doubles as the source-file category and the JSON key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl PartOfSpeech {
    /// Compile order of the four categories.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adj,
        PartOfSpeech::Adv,
    ];

    /// Maps a synset type code to its group. Satellite adjectives (`s`) fold into `Adj`.
    pub fn from_synset_type(code: &str) -> Option<Self> {
        match code {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adj),
            "r" => Some(PartOfSpeech::Adv),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adj => "adj",
            PartOfSpeech::Adv => "adv",
        }
    }

    /// File name of the category's data file, e.g. `data.noun`.
    pub fn data_file_name(self) -> String {
        format!("data.{}", self.tag())
    }

    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adj => "Adjective",
            PartOfSpeech::Adv => "Adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseRecord {
    pub definition: String,
    pub synonyms: Vec<String>,
}

/// All senses of one word, grouped by part of speech in encounter order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LexiconEntry {
    pub groups: BTreeMap<PartOfSpeech, Vec<SenseRecord>>,
}

impl LexiconEntry {
    pub fn senses(&self, pos: PartOfSpeech) -> &[SenseRecord] {
        self.groups.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_sense(&mut self, pos: PartOfSpeech, sense: SenseRecord) {
        self.groups.entry(pos).or_default().push(sense);
    }

    pub fn sense_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// A synonym that does not resolve to a key of the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingSynonym {
    pub term: String,
    pub pos: PartOfSpeech,
    pub synonym: String,
}

/// Lowercased word -> entry. Keys stay sorted so the serialized artifact is reproducible.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Lexicon {
    entries: BTreeMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an already-normalized term.
    pub fn get(&self, term: &str) -> Option<&LexiconEntry> {
        self.entries.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Entry for `word`, created empty if missing. The key is lowercased.
    pub fn entry_mut(&mut self, word: &str) -> &mut LexiconEntry {
        self.entries.entry(word.to_lowercase()).or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sense_count(&self) -> usize {
        self.entries.values().map(LexiconEntry::sense_count).sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LexiconEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every synonym whose lowercased form is not itself a key.
    pub fn dangling_synonyms(&self) -> Vec<DanglingSynonym> {
        let mut dangling = Vec::new();
        for (term, entry) in &self.entries {
            for (pos, senses) in &entry.groups {
                for sense in senses {
                    for synonym in &sense.synonyms {
                        if !self.entries.contains_key(&synonym.to_lowercase()) {
                            dangling.push(DanglingSynonym {
                                term: term.clone(),
                                pos: *pos,
                                synonym: synonym.clone(),
                            });
                        }
                    }
                }
            }
        }
        dangling
    }
}

//*** END FILE: src/types/lexicon_data.rs ***//
