use crate::error::LookupError;
use crate::lexicon_io::load_lexicon;
use crate::lookup::history::{QueryHistory, Recall};
use crate::types::lexicon_data::{Lexicon, LexiconEntry};
use std::path::Path;
use tracing::{debug, error, info};

#[derive(Debug)]
pub enum LoadState {
    Ready(Lexicon),
    /// Terminal for the session; every query is refused.
    Failed(String),
}

/// Result of a search that made it past validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Found(String),
    NoMatch(String),
}

impl QueryOutcome {
    pub fn term(&self) -> &str {
        match self {
            QueryOutcome::Found(term) | QueryOutcome::NoMatch(term) => term,
        }
    }
}

/// Owns every piece of lookup state: the loaded lexicon, the query field,
/// the displayed result and the one history the UI reads from.
#[derive(Debug)]
pub struct LookupController {
    load_state: LoadState,
    pub query_input: String,
    result: Option<QueryOutcome>,
    validation_message: Option<String>,
    history: QueryHistory,
    focus_requested: bool,
}

impl LookupController {
    fn with_state(load_state: LoadState, history_capacity: usize) -> Self {
        Self {
            load_state,
            query_input: String::new(),
            result: None,
            validation_message: None,
            history: QueryHistory::with_capacity(history_capacity),
            focus_requested: true,
        }
    }

    pub fn from_lexicon(lexicon: Lexicon, history_capacity: usize) -> Self {
        Self::with_state(LoadState::Ready(lexicon), history_capacity)
    }

    pub fn failed(message: impl Into<String>, history_capacity: usize) -> Self {
        Self::with_state(LoadState::Failed(message.into()), history_capacity)
    }

    /// Reads the compiled artifact once. Any failure leaves the controller in
    /// the failed state for the rest of the session.
    pub fn load(path: &Path, history_capacity: usize) -> Self {
        match load_lexicon(path) {
            Ok(lexicon) => {
                info!("Loaded {} words from {}", lexicon.len(), path.display());
                Self::from_lexicon(lexicon, history_capacity)
            }
            Err(e) => {
                error!("Failed to load lexicon: {}", e);
                Self::failed(e.to_string(), history_capacity)
            }
        }
    }

    pub fn lexicon(&self) -> Option<&Lexicon> {
        match &self.load_state {
            LoadState::Ready(lexicon) => Some(lexicon),
            LoadState::Failed(_) => None,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            LoadState::Ready(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.lexicon().is_some()
    }

    /// Runs one search: trim, lowercase, look up, record.
    pub fn submit(&mut self, input: &str) -> Result<QueryOutcome, LookupError> {
        let term = input.trim().to_lowercase();
        if term.is_empty() {
            self.validation_message = Some(LookupError::EmptyQuery.to_string());
            return Err(LookupError::EmptyQuery);
        }

        let lexicon = match &self.load_state {
            LoadState::Ready(lexicon) => lexicon,
            LoadState::Failed(_) => return Err(LookupError::Unavailable),
        };

        let outcome = if lexicon.contains(&term) {
            QueryOutcome::Found(term.clone())
        } else {
            QueryOutcome::NoMatch(term.clone())
        };
        debug!("Query {:?}: {:?}", term, outcome);

        self.history.record(&term);
        self.validation_message = None;
        self.result = Some(outcome.clone());
        Ok(outcome)
    }

    /// Submits whatever is in the query field.
    pub fn submit_current(&mut self) -> Result<QueryOutcome, LookupError> {
        let input = self.query_input.clone();
        self.submit(&input)
    }

    /// Same pipeline as a typed query, then hands focus back to the field.
    pub fn activate_synonym(&mut self, synonym: &str) -> Result<QueryOutcome, LookupError> {
        self.query_input = synonym.to_string();
        self.focus_requested = true;
        self.submit(synonym)
    }

    pub fn recall_older(&mut self) {
        let step = self.history.recall_older();
        self.apply_recall(step);
    }

    pub fn recall_newer(&mut self) {
        let step = self.history.recall_newer();
        self.apply_recall(step);
    }

    fn apply_recall(&mut self, step: Recall) {
        match step {
            Recall::Entry(term) => self.query_input = term,
            Recall::Cleared => self.query_input.clear(),
            Recall::Unchanged => {}
        }
    }

    /// Escape: empty the field and the result. History is kept.
    pub fn clear(&mut self) {
        self.query_input.clear();
        self.result = None;
        self.validation_message = None;
        self.history.reset_cursor();
    }

    pub fn result(&self) -> Option<&QueryOutcome> {
        self.result.as_ref()
    }

    /// The entry behind the displayed result, if it was a match.
    pub fn current_entry(&self) -> Option<(&str, &LexiconEntry)> {
        match (&self.result, self.lexicon()) {
            (Some(QueryOutcome::Found(term)), Some(lexicon)) => {
                lexicon.get(term).map(|entry| (term.as_str(), entry))
            }
            _ => None,
        }
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    /// Returns and clears a pending focus request for the query field.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lexicon_data::{PartOfSpeech, SenseRecord};

    fn sample_controller() -> LookupController {
        let mut lexicon = Lexicon::new();
        for (word, synonym) in [("happy", "glad"), ("glad", "happy")] {
            lexicon.entry_mut(word).push_sense(
                PartOfSpeech::Adj,
                SenseRecord {
                    definition: "feeling joy".to_string(),
                    synonyms: vec![synonym.to_string()],
                },
            );
        }
        lexicon.entry_mut("canis familiaris").push_sense(
            PartOfSpeech::Noun,
            SenseRecord {
                definition: "a dog".to_string(),
                synonyms: vec![],
            },
        );
        LookupController::from_lexicon(lexicon, 100)
    }

    fn history(controller: &LookupController) -> Vec<String> {
        controller.history().iter().map(String::from).collect()
    }

    #[test]
    fn empty_query_is_rejected_without_touching_history() {
        let mut controller = sample_controller();
        controller.submit("happy").unwrap();

        assert_eq!(controller.submit(""), Err(LookupError::EmptyQuery));
        assert_eq!(controller.submit("   "), Err(LookupError::EmptyQuery));
        assert_eq!(history(&controller), vec!["happy"]);
        assert!(controller.validation_message().is_some());
        assert_eq!(controller.result(), Some(&QueryOutcome::Found("happy".into())));
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let mut controller = sample_controller();
        let outcome = controller.submit("  HaPPy ").unwrap();
        assert_eq!(outcome, QueryOutcome::Found("happy".into()));
        let (term, entry) = controller.current_entry().unwrap();
        assert_eq!(term, "happy");
        assert_eq!(entry.senses(PartOfSpeech::Adj)[0].synonyms, vec!["glad"]);
        assert_eq!(controller.validation_message(), None);
    }

    #[test]
    fn no_match_is_recorded_in_history() {
        let mut controller = sample_controller();
        let outcome = controller.submit("zzyzx").unwrap();
        assert_eq!(outcome, QueryOutcome::NoMatch("zzyzx".into()));
        assert_eq!(history(&controller), vec!["zzyzx"]);
        assert!(controller.current_entry().is_none());
    }

    #[test]
    fn repeated_and_alternating_queries() {
        let mut controller = sample_controller();
        controller.submit("happy").unwrap();
        controller.submit("happy").unwrap();
        assert_eq!(history(&controller), vec!["happy"]);

        controller.submit("glad").unwrap();
        controller.submit("happy").unwrap();
        assert_eq!(history(&controller), vec!["happy", "glad", "happy"]);
    }

    #[test]
    fn recall_repopulates_field_without_searching() {
        let mut controller = sample_controller();
        for term in ["a", "b", "c"] {
            controller.submit(term).unwrap();
        }
        controller.query_input.clear();

        controller.recall_older();
        assert_eq!(controller.query_input, "c");
        controller.recall_older();
        assert_eq!(controller.query_input, "b");
        controller.recall_newer();
        assert_eq!(controller.query_input, "c");
        controller.recall_newer();
        assert_eq!(controller.query_input, "");

        assert_eq!(history(&controller), vec!["a", "b", "c"]);
        assert_eq!(controller.result(), Some(&QueryOutcome::NoMatch("c".into())));
    }

    #[test]
    fn new_search_resets_recall_cursor() {
        let mut controller = sample_controller();
        controller.submit("happy").unwrap();
        controller.submit("glad").unwrap();
        controller.recall_older();
        controller.recall_older();
        controller.submit_current().unwrap();
        assert_eq!(controller.history().cursor(), None);
        controller.recall_older();
        assert_eq!(controller.query_input, "happy");
    }

    #[test]
    fn synonym_activation_runs_full_pipeline() {
        let mut controller = sample_controller();
        controller.submit("happy").unwrap();
        controller.take_focus_request();

        let outcome = controller.activate_synonym("glad").unwrap();
        assert_eq!(outcome, QueryOutcome::Found("glad".into()));
        assert_eq!(controller.query_input, "glad");
        assert_eq!(history(&controller), vec!["happy", "glad"]);
        assert!(controller.take_focus_request());
        assert!(!controller.take_focus_request());
    }

    #[test]
    fn synonym_with_source_casing_resolves() {
        let mut controller = sample_controller();
        let outcome = controller.activate_synonym("Canis familiaris").unwrap();
        assert_eq!(outcome, QueryOutcome::Found("canis familiaris".into()));
    }

    #[test]
    fn clear_keeps_history() {
        let mut controller = sample_controller();
        controller.query_input = "happy".into();
        controller.submit_current().unwrap();
        controller.clear();
        assert_eq!(controller.query_input, "");
        assert_eq!(controller.result(), None);
        assert_eq!(history(&controller), vec!["happy"]);
    }

    #[test]
    fn failed_load_disables_queries() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = LookupController::load(&dir.path().join("missing.json"), 100);
        assert!(!controller.is_ready());
        assert!(controller.load_error().is_some());
        assert_eq!(controller.submit("happy"), Err(LookupError::Unavailable));
        assert!(controller.history().is_empty());
    }

    #[test]
    fn empty_query_is_a_validation_error_even_when_load_failed() {
        let mut controller = LookupController::failed("broken artifact", 100);
        assert_eq!(controller.submit(""), Err(LookupError::EmptyQuery));
        assert_eq!(controller.submit("  "), Err(LookupError::EmptyQuery));
        assert!(controller.validation_message().is_some());
        assert!(controller.history().is_empty());
    }
}
