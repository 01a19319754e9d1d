//! In-memory session state on top of the persisted stores.
//!
//! A [`Session`] owns what the user is currently looking at (input, tone,
//! current metaphor, the two lists, the open analysis, the last error) and
//! routes every change through the [`Library`] and the two caches:
//!
//! ```text
//! input ─► metaphor cache ─(miss)─► generator ─► cache write ─► history
//! phrase ─► analysis cache ─(miss)─► analyzer ─► cache write
//! ```
//!
//! After a favorite toggle the session rebuilds its copy of the current
//! metaphor from the lists the library returns; it never flips its own copy.

use crate::core::cache::{cache_key, ResultCache};
use crate::core::clock::Clock;
use crate::core::error::{MetaphorError, Result};
use crate::core::library::Library;
use crate::core::remote::{MetaphorGenerator, PhraseAnalyzer};
use crate::core::state::{IdiomAnalysis, Metaphor};
use crate::core::storage::Storage;
use crate::core::tone::Tone;
use std::sync::Arc;

pub const ANALYSIS_CACHE_KEY: &str = "metaphorever-idiom-cache";
pub const METAPHOR_CACHE_KEY: &str = "metaphorever-metaphor-cache";

pub struct Session {
    library: Library,
    metaphor_cache: ResultCache<String>,
    analysis_cache: ResultCache<IdiomAnalysis>,
    clock: Arc<dyn Clock>,
    generator: Box<dyn MetaphorGenerator>,
    analyzer: Box<dyn PhraseAnalyzer>,

    input: String,
    tone: Tone,
    current: Option<Metaphor>,
    favorites: Vec<Metaphor>,
    history: Vec<Metaphor>,
    analysis: Option<IdiomAnalysis>,
    error: Option<String>,
}

impl Session {
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        generator: Box<dyn MetaphorGenerator>,
        analyzer: Box<dyn PhraseAnalyzer>,
    ) -> Self {
        let library = Library::new(storage.clone());
        let favorites = library.favorites();
        let history = library.history();

        log::debug!(
            "Session loaded {} history entries and {} favorites",
            history.len(),
            favorites.len()
        );

        let metaphor_cache: ResultCache<String> =
            ResultCache::new(storage.clone(), clock.clone(), METAPHOR_CACHE_KEY);
        let analysis_cache: ResultCache<IdiomAnalysis> =
            ResultCache::new(storage, clock.clone(), ANALYSIS_CACHE_KEY);
        log::debug!(
            "Caches hold {} metaphors and {} analyses",
            metaphor_cache.len(),
            analysis_cache.len()
        );

        Self {
            library,
            metaphor_cache,
            analysis_cache,
            clock,
            generator,
            analyzer,
            input: String::new(),
            tone: Tone::default(),
            current: None,
            favorites,
            history,
            analysis: None,
            error: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn current(&self) -> Option<&Metaphor> {
        self.current.as_ref()
    }

    pub fn favorites(&self) -> &[Metaphor] {
        &self.favorites
    }

    pub fn history(&self) -> &[Metaphor] {
        &self.history
    }

    pub fn analysis(&self) -> Option<&IdiomAnalysis> {
        self.analysis.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generate a metaphor for the current input and tone.
    ///
    /// A cached text for the same (normalized) input and tone is reused, but
    /// always as a brand new metaphor with its own id.
    pub fn generate(&mut self) -> Result<&Metaphor> {
        if self.input.trim().is_empty() {
            return Err(self.fail(MetaphorError::EmptyInput));
        }
        self.error = None;

        let key = cache_key(&self.input, self.tone);
        let metaphor = match self.metaphor_cache.lookup(&key) {
            Some(text) => Metaphor::new(text, self.input.clone(), self.tone, self.clock.now()),
            None => match self.generator.generate(&self.input, self.tone) {
                Ok(metaphor) => {
                    self.metaphor_cache.store(&key, metaphor.text.clone());
                    metaphor
                }
                Err(e) => return Err(self.fail(e)),
            },
        };

        self.history = self.library.append_to_history(metaphor.clone());
        Ok(&*self.current.insert(metaphor))
    }

    /// Toggle the favorite flag and return the reconciled metaphor.
    pub fn toggle_favorite(&mut self, metaphor: &Metaphor) -> Metaphor {
        let result = self.library.toggle_favorite(metaphor);

        let updated = result
            .history
            .iter()
            .chain(result.favorites.iter())
            .find(|m| m.id == metaphor.id)
            .cloned()
            .unwrap_or_else(|| metaphor.toggled());

        if self.current.as_ref().is_some_and(|c| c.id == updated.id) {
            self.current = Some(updated.clone());
        }
        self.history = result.history;
        self.favorites = result.favorites;

        updated
    }

    pub fn analyze(&mut self, phrase: &str) -> Result<&IdiomAnalysis> {
        if phrase.trim().is_empty() {
            return Err(self.fail(MetaphorError::EmptyPhrase));
        }
        self.error = None;

        let analysis = match self.analysis_cache.lookup(phrase) {
            Some(cached) => cached,
            None => match self.analyzer.analyze(phrase) {
                Ok(analysis) => {
                    self.analysis_cache.store(phrase, analysis.clone());
                    analysis
                }
                Err(e) => return Err(self.fail(e)),
            },
        };

        Ok(&*self.analysis.insert(analysis))
    }

    /// Attach translations to the open analysis. Translations are not cached.
    pub fn request_translations(&mut self, languages: &[String]) -> Result<&IdiomAnalysis> {
        let phrase = match &self.analysis {
            Some(analysis) => analysis.phrase.clone(),
            None => return Err(MetaphorError::NoAnalysis),
        };

        let translations = match self.analyzer.translate(&phrase, languages) {
            Ok(translations) => translations,
            Err(e) => return Err(self.fail(e)),
        };

        match self.analysis.as_mut() {
            Some(analysis) => {
                analysis.translations = Some(translations);
                Ok(&*analysis)
            }
            None => Err(MetaphorError::NoAnalysis),
        }
    }

    pub fn close_analysis(&mut self) {
        self.analysis = None;
    }

    fn fail(&mut self, err: MetaphorError) -> MetaphorError {
        self.error = Some(err.to_string());
        err
    }
}
