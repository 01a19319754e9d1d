//! Shared setup for the CLI commands.
//!
//! Every command works on a [`Session`] backed by the on-disk stores, and
//! the index-based ones additionally resolve user input like `1 3-5` into
//! history entries.
//!
//! # Public API
//! - [`SessionInit`]: builds a session from the config and data directories
//! - [`IndexCommandInit`]: parses indices against the session history
//! - [`IndexCommandContext`]: session plus the selected indices

use crate::core::{
    clock::SystemClock,
    config::AppConfig,
    error::{MetaphorError, Result},
    index_parser::IndexParser,
    remote::OpenAiClient,
    session::Session,
    state::Metaphor,
    storage::FileStorage,
};
use std::sync::Arc;

pub struct SessionInit;

impl SessionInit {
    /// Open the default stores and wire the OpenAI client into a new session.
    ///
    /// The client is built even without an API key; the first remote call
    /// reports the missing key, so cached results stay usable offline.
    pub fn initialize() -> Result<(AppConfig, Session)> {
        let config = AppConfig::load_or_default();
        let storage = FileStorage::open_default()?;

        let client = OpenAiClient::from_config(&config)?;
        let session = Session::new(
            Arc::new(storage),
            Arc::new(SystemClock),
            Box::new(client.clone()),
            Box::new(client),
        );

        Ok((config, session))
    }
}

/// A session plus the history entries picked on the command line.
pub struct IndexCommandContext {
    pub session: Session,
    pub indices: Vec<usize>,
}

pub struct IndexCommandInit;

impl IndexCommandInit {
    pub fn initialize(indices_args: Vec<String>) -> Result<IndexCommandContext> {
        if indices_args.is_empty() {
            return Err(MetaphorError::NoIndicesProvided);
        }

        let (_, session) = SessionInit::initialize()?;
        Self::with_session(session, &indices_args)
    }

    pub fn with_session(session: Session, indices_args: &[String]) -> Result<IndexCommandContext> {
        let history_len = session.history().len();
        if history_len == 0 {
            return Err(MetaphorError::NoHistory);
        }

        let indices = IndexParser::parse_args(indices_args, history_len)?;
        log::debug!(
            "Selected {} of {} history entries",
            indices.len(),
            history_len
        );

        Ok(IndexCommandContext { session, indices })
    }
}

impl IndexCommandContext {
    /// Owned copies, so the session can be mutated while iterating.
    pub fn selected_metaphors(&self) -> Vec<Metaphor> {
        IndexParser::select(self.session.history(), &self.indices)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::Clock;
    use crate::core::library::Library;
    use crate::core::remote::{MetaphorGenerator, PhraseAnalyzer};
    use crate::core::state::{IdiomAnalysis, Translation};
    use crate::core::storage::{MemoryStorage, Storage};
    use crate::core::tone::Tone;

    struct Offline;

    impl MetaphorGenerator for Offline {
        fn generate(&self, _input: &str, _tone: Tone) -> Result<Metaphor> {
            Err(MetaphorError::MissingApiKey)
        }
    }

    impl PhraseAnalyzer for Offline {
        fn analyze(&self, _phrase: &str) -> Result<IdiomAnalysis> {
            Err(MetaphorError::MissingApiKey)
        }

        fn translate(&self, _phrase: &str, _languages: &[String]) -> Result<Vec<Translation>> {
            Err(MetaphorError::MissingApiKey)
        }
    }

    fn session_with_history(count: usize) -> Session {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let library = Library::new(storage.clone());
        for i in 0..count {
            library.append_to_history(Metaphor::new(
                format!("metaphor {i}"),
                format!("input {i}"),
                Tone::Poetic,
                clock.now(),
            ));
        }
        Session::new(storage, clock, Box::new(Offline), Box::new(Offline))
    }

    #[test]
    fn test_with_session_selects_newest_first() {
        let context = IndexCommandInit::with_session(
            session_with_history(3),
            &["1".to_string(), "3".to_string()],
        )
        .unwrap();

        let texts: Vec<String> = context
            .selected_metaphors()
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["metaphor 2", "metaphor 0"]);
    }

    #[test]
    fn test_with_session_empty_history() {
        let result = IndexCommandInit::with_session(session_with_history(0), &["1".to_string()]);
        assert!(matches!(result, Err(MetaphorError::NoHistory)));
    }

    #[test]
    fn test_with_session_out_of_range() {
        let result = IndexCommandInit::with_session(session_with_history(2), &["4".to_string()]);
        match result {
            Err(e) => assert!(e.to_string().contains("out of range")),
            Ok(_) => panic!("Expected error, but got success"),
        }
    }

    #[test]
    fn test_initialize_requires_indices() {
        assert!(matches!(
            IndexCommandInit::initialize(vec![]),
            Err(MetaphorError::NoIndicesProvided)
        ));
    }
}
