//! Seeded stores for common scenarios
//!
//! Files are written in the same layout the binary persists, so a test can
//! start from any history, favorites or cache state.

#![allow(dead_code)]

use super::home::*;
use chrono::{Duration, Utc};
use metaphorever::core::{
    daily::DAILY_CACHE_KEY,
    library::{FAVORITES_KEY, HISTORY_KEY},
    session::{ANALYSIS_CACHE_KEY, METAPHOR_CACHE_KEY},
};
use serde_json::{json, Map, Value};

pub fn metaphor_json(id: &str, text: &str, input: &str, tone: &str, is_favorite: bool) -> Value {
    json!({
        "id": id,
        "text": text,
        "originalInput": input,
        "tone": tone,
        "timestamp": Utc::now().timestamp_millis(),
        "isFavorite": is_favorite,
    })
}

/// Scenario: three metaphors in history, none favorited
pub fn create_home_with_history() -> anyhow::Result<TestHome> {
    let home = setup_test_home()?;
    home.write_key(
        HISTORY_KEY,
        &json!([
            metaphor_json("id-1", "Time is a river", "time", "poetic", false),
            metaphor_json("id-2", "Mondays are speed bumps", "monday", "funny", false),
            metaphor_json("id-3", "Debt is a tide", "debt", "professional", false),
        ]),
    )?;
    Ok(home)
}

/// Scenario: history where the second entry is also a favorite
pub fn create_home_with_favorite() -> anyhow::Result<TestHome> {
    let home = setup_test_home()?;
    home.write_key(
        HISTORY_KEY,
        &json!([
            metaphor_json("id-1", "Time is a river", "time", "poetic", false),
            metaphor_json("id-2", "Mondays are speed bumps", "monday", "funny", true),
        ]),
    )?;
    home.write_key(
        FAVORITES_KEY,
        &json!([metaphor_json("id-2", "Mondays are speed bumps", "monday", "funny", true)]),
    )?;
    Ok(home)
}

/// Scenario: a cached analysis for "break the ice" written `age` ago
pub fn create_home_with_cached_analysis(age: Duration) -> anyhow::Result<TestHome> {
    let home = setup_test_home()?;
    home.write_key(
        ANALYSIS_CACHE_KEY,
        &json!({
            "break the ice": {
                "result": {
                    "phrase": "break the ice",
                    "isIdiom": true,
                    "meaning": "to start a conversation in an awkward situation",
                    "origin": "Ships clearing frozen routes for trade",
                    "alternatives": ["get the ball rolling", "warm up the room"]
                },
                "timestamp": (Utc::now() - age).timestamp_millis()
            }
        }),
    )?;
    Ok(home)
}

/// Scenario: a cached poetic metaphor for "time"
pub fn create_home_with_cached_metaphor() -> anyhow::Result<TestHome> {
    let home = setup_test_home()?;
    home.write_key(
        METAPHOR_CACHE_KEY,
        &json!({
            "poetic:time": {
                "result": "Time is a river that never looks back",
                "timestamp": Utc::now().timestamp_millis()
            }
        }),
    )?;
    Ok(home)
}

/// Scenario: no reachable quote service, optionally with today's quote cached
pub fn create_home_for_daily(cached: bool) -> anyhow::Result<TestHome> {
    let home = setup_test_home()?;
    home.write_config(&json!({ "quote_api_url": "http://127.0.0.1:9" }))?;
    if cached {
        let mut cache = Map::new();
        cache.insert(
            Utc::now().format("%Y-%m-%d").to_string(),
            json!({
                "result": { "text": "Life is a highway", "author": "Tom Cochrane" },
                "timestamp": Utc::now().timestamp_millis()
            }),
        );
        home.write_key(DAILY_CACHE_KEY, &Value::Object(cache))?;
    }
    Ok(home)
}
