//! metaphorever - metaphor generation and idiom analysis from the terminal.
//!
//! The interesting part of this crate is the client-side persistence layer:
//! a result cache bounded by age and size, and a history/favorites store
//! whose two lists stay consistent when a favorite is toggled. Both sit on a
//! small string key/value [`Storage`] port so they can run against files or
//! memory.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Storage, clock and result cache
//! - History and favorites
//! - Remote clients and the session orchestrator
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use core::{
    // Persistence
    cache_key,
    normalize_key,
    CacheEntry,
    Clock,
    FavoriteToggle,
    FileStorage,
    Library,
    ManualClock,
    MemoryStorage,
    ResultCache,
    Storage,
    SystemClock,

    // Domain types
    IdiomAnalysis,
    Metaphor,
    Tone,
    Translation,

    // Remote calls and orchestration
    AppConfig,
    DailyMetaphor,
    MetaphorGenerator,
    OpenAiClient,
    PhraseAnalyzer,
    Quote,
    QuoteSource,
    Session,

    // Error handling
    MetaphorError,
    Result,
};
