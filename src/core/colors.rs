//! Unified color system for tones and favorites.
//!
//! Every place that shows a tone or a favorite marker goes through this
//! module, so the same tone always renders in the same color.
//!
//! # Public API
//! - [`get_tone_color_style`]: Get color function for a tone
//! - [`get_aligned_tone`]: Tone label padded to the widest tone name
//! - [`get_favorite_marker`]: `★` for favorites, `·` otherwise
//!
//! # Color Scheme
//! - **Poetic**: Magenta
//! - **Funny**: Yellow
//! - **Professional**: Blue
//! - **Casual**: Green
//! - **Favorite marker**: Yellow bold

use crate::core::tone::Tone;
use colored::*;

/// Width of the longest tone name ("professional")
pub const TONE_COLUMN_WIDTH: usize = 12;

/// Returns a closure that applies the tone's color to any text
pub fn get_tone_color_style(tone: Tone) -> Box<dyn Fn(&str) -> ColoredString> {
    match tone {
        Tone::Poetic => Box::new(|text: &str| text.magenta()),
        Tone::Funny => Box::new(|text: &str| text.yellow()),
        Tone::Professional => Box::new(|text: &str| text.blue()),
        Tone::Casual => Box::new(|text: &str| text.green()),
    }
}

/// Colored tone label, padded so metaphor text lines up in lists
pub fn get_aligned_tone(tone: Tone) -> String {
    let color_fn = get_tone_color_style(tone);
    let label = tone.as_str();
    let padding = TONE_COLUMN_WIDTH.saturating_sub(label.len());
    format!("{}{}", color_fn(label), " ".repeat(padding))
}

pub fn get_favorite_marker(is_favorite: bool) -> ColoredString {
    if is_favorite {
        "★".yellow().bold()
    } else {
        "·".bright_black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::strip_ansi_codes;

    #[test]
    fn test_aligned_tone_padding() {
        assert_eq!(strip_ansi_codes(&get_aligned_tone(Tone::Poetic)), "poetic      ");
        assert_eq!(
            strip_ansi_codes(&get_aligned_tone(Tone::Professional)),
            "professional"
        );
    }

    #[test]
    fn test_favorite_marker() {
        assert!(get_favorite_marker(true).to_string().contains('★'));
        assert!(get_favorite_marker(false).to_string().contains('·'));
    }

    #[test]
    fn test_tone_color_style_consistency() {
        for tone in Tone::ALL {
            let color_fn = get_tone_color_style(tone);
            assert_eq!(color_fn("test").to_string(), color_fn("test").to_string());
        }
    }
}
