//! Persisted data structures.
//!
//! This module defines the values that flow through the cache, the library
//! and the remote clients. Field names are serialized in camelCase and
//! timestamps as epoch milliseconds, so the persisted JSON stays compact and
//! readable when inspecting the data directory by hand.
//!
//! # Public API
//! - [`Metaphor`]: A generated metaphor with its provenance and favorite flag
//! - [`IdiomAnalysis`]: Result of analysing a phrase; every detail is optional
//! - [`Translation`]: One translated rendering of an analysed phrase
//! - [`CulturalVariation`]: An equivalent expression from another culture

use crate::core::tone::Tone;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metaphor {
    pub id: String,
    pub text: String,
    pub original_input: String,
    pub tone: Tone,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
}

impl Metaphor {
    /// Create a metaphor with a fresh id. New metaphors are never favorites.
    pub fn new(
        text: impl Into<String>,
        original_input: impl Into<String>,
        tone: Tone,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            original_input: original_input.into(),
            tone,
            created_at,
            is_favorite: false,
        }
    }

    /// Copy of this metaphor with the favorite flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language: String,
    pub translation: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalVariation {
    pub culture: String,
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_translation: Option<String>,
    #[serde(default)]
    pub context: String,
}

/// Analysis of a phrase. An absent field means "not computed", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdiomAnalysis {
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub is_idiom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_variations: Option<Vec<CulturalVariation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<Translation>>,
}

impl IdiomAnalysis {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            ..Default::default()
        }
    }
}
