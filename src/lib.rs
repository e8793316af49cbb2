//*** START FILE: src/lib.rs ***//

// Shared by the `compile_lexicon` and `lexicon_lookup` binaries.
pub mod config;
pub mod error;
pub mod logging;
pub mod types {
    pub mod lexicon_data;
}
pub mod parsing {
    pub mod data_parser;
}
pub mod compiler;
pub mod lexicon_io;
pub mod lookup {
    pub mod controller;
    pub mod history;
}

pub use config::Config;
pub use lookup::controller::{LookupController, QueryOutcome};
pub use types::lexicon_data::{Lexicon, LexiconEntry, PartOfSpeech, SenseRecord};

//*** END FILE: src/lib.rs ***//
