//! Type-safe tone enumeration.
//!
//! A [`Tone`] is the variant under which a metaphor is generated. It selects
//! the prompt used by the generator and is part of the generation cache key,
//! so the same text asked for in two tones never shares a cached result.
//!
//! # Public API
//! - [`Tone`]: The four supported tones
//!
//! # Key Features
//! - **Serde**: Persisted as lowercase strings (`"poetic"`, `"funny"`, ...)
//! - **clap**: Usable directly as a `--tone` value
//! - **Prompts**: Each tone carries its generation instruction

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Lyrical comparisons drawn from nature or art
    #[default]
    Poetic,
    /// Unexpected, playful comparisons
    Funny,
    /// Business or technical comparisons
    Professional,
    /// Everyday objects and experiences
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Poetic, Tone::Funny, Tone::Professional, Tone::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Poetic => "poetic",
            Tone::Funny => "funny",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
        }
    }

    /// Instruction appended to the generator's system prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            Tone::Poetic => {
                "Create a beautiful, lyrical metaphor comparing this to something in nature or art"
            }
            Tone::Funny => "Create a hilarious, unexpected metaphor that makes people laugh",
            Tone::Professional => "Create a sophisticated business or technical metaphor",
            Tone::Casual => {
                "Create a relatable, everyday metaphor using common objects or experiences"
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
