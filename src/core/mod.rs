//! Core functionality for metaphorever.
//!
//! This module provides the persistence layer (storage port, result cache,
//! history and favorites), the remote clients, the session orchestrator and
//! the UI helpers used by the commands.

pub mod cache;
pub mod clock;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod daily;
pub mod dirs;
pub mod error;
pub mod index_parser;
pub mod library;
pub mod output;
pub mod remote;
pub mod session;
pub mod state;
pub mod storage;
pub mod templates;
pub mod tone;

// === Error handling ===
pub use error::{MetaphorError, Result};

// === Persistence ===
// Storage port, bounded result cache and the two metaphor lists
pub use cache::{cache_key, normalize_key, CacheEntry, ResultCache, CACHE_CAPACITY, CACHE_TTL_DAYS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use library::{FavoriteToggle, Library, FAVORITES_KEY, HISTORY_KEY, MAX_HISTORY_ITEMS};
pub use storage::{FileStorage, MemoryStorage, Storage};

// === Domain types ===
pub use state::{CulturalVariation, IdiomAnalysis, Metaphor, Translation};
pub use tone::Tone;

// === Remote calls and orchestration ===
pub use config::AppConfig;
pub use daily::{DailyMetaphor, QuotableClient, Quote, QuoteSource};
pub use remote::{MetaphorGenerator, OpenAiClient, PhraseAnalyzer};
pub use session::Session;

// === Command plumbing ===
// Parser for handling user input like "1 3-5,8" -> [1, 3, 4, 5, 8]
pub use index_parser::IndexParser;
pub use command_init::{IndexCommandContext, IndexCommandInit, SessionInit};

// === UI templates and output ===
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};
pub use output::{print_error, print_error_with_structured_usage, print_info, print_success};
