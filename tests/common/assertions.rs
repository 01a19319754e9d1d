//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn missing_api_key() -> impl Predicate<str> {
    predicates::str::contains("API key not configured")
}

pub fn empty_history() -> impl Predicate<str> {
    predicates::str::contains("No metaphors in history yet")
}

/// Numbered list entry, e.g. `[2]`
pub fn has_entry_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}

/// Tone column, e.g. `(funny       )`
pub fn has_tone(tone: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({tone:<12})"))
}

pub fn has_favorite_marker() -> impl Predicate<str> {
    predicates::str::contains("★")
}
