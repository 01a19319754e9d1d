//! Template system for consistent output formatting.
//!
//! Commands describe what they print with a template string and a
//! [`TemplateContext`]; rendering substitutes the placeholders in a single
//! pass and then applies the color scheme for the template kind.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output sections
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Main rendering function with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes
//!
//! # Template Categories
//! - **Sections**: History, favorites, analysis and daily headers
//! - **Metaphor lines**: Numbered list entries with tone and favorite marker
//! - **Details**: Source input, analysis fields, translations

use crate::core::colors::{get_aligned_tone, get_favorite_marker, get_tone_color_style};
use crate::core::tone::Tone;
use colored::*;

/// Template definitions for all output formatting
pub struct Templates {
    pub empty_line: &'static str,

    // Section templates
    pub section_history: &'static str,
    pub section_favorites: &'static str,
    pub section_metaphor: &'static str,
    pub section_analysis: &'static str,
    pub section_translations: &'static str,
    pub section_daily: &'static str,

    // Metaphor templates
    pub metaphor_line: &'static str,
    pub metaphor_source: &'static str,
    pub metaphor_current: &'static str,

    // Analysis templates
    pub analysis_field: &'static str,
    pub analysis_item: &'static str,
    pub translation_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    empty_line: "",
    section_history: "➤ History:",
    section_favorites: "➤ Favorites:",
    section_metaphor: "➤ Metaphor:",
    section_analysis: "➤ Analysis:",
    section_translations: "➤ Translations:",
    section_daily: "➤ Metaphor of the day:",
    metaphor_line: "   ({tone}) [{n}] {marker} {text}",
    metaphor_source: "         from: {input}",
    metaphor_current: "   {marker} {text}",
    analysis_field: "   {label}: {value}",
    analysis_item: "     - {value}",
    translation_line: "   {label}: {value}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub tone: Option<Tone>,
    pub n: Option<usize>,
    pub is_favorite: Option<bool>,
    pub text: Option<&'a str>,
    pub input: Option<&'a str>,
    pub label: Option<&'a str>,
    pub value: Option<&'a str>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.text.map_or(0, |s| s.len())
        + context.input.map_or(0, |s| s.len())
        + context.label.map_or(0, |s| s.len())
        + context.value.map_or(0, |s| s.len())
        + 64;

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template, context, &mut result);
    apply_colors(&result, template, context)
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    use std::fmt::Write;

    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        match placeholder.as_str() {
            "tone" => {
                if let Some(tone) = context.tone {
                    output.push_str(tone.as_str());
                }
            }
            "n" => {
                if let Some(n) = context.n {
                    let _ = write!(output, "{n}");
                }
            }
            "marker" => {
                if let Some(is_favorite) = context.is_favorite {
                    output.push(if is_favorite { '★' } else { '·' });
                }
            }
            "text" => output.push_str(context.text.unwrap_or_default()),
            "input" => output.push_str(context.input.unwrap_or_default()),
            "label" => output.push_str(context.label.unwrap_or_default()),
            "value" => output.push_str(context.value.unwrap_or_default()),
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }
}

fn apply_colors(text: &str, template: &str, context: &TemplateContext) -> String {
    use std::fmt::Write;

    let mut result = String::with_capacity(text.len() + 64);

    match template {
        t if t.starts_with('➤') => {
            let title = t.trim_start_matches('➤').trim();
            let _ = write!(result, "{} {}", "➤".cyan(), title.cyan());
        }

        t if t.contains("({tone}) [{n}]") => {
            result.push_str("   ");
            if let Some(tone) = context.tone {
                let _ = write!(
                    result,
                    "{}{}{}",
                    "(".bright_black(),
                    get_aligned_tone(tone),
                    ")".bright_black()
                );
            }
            if let Some(n) = context.n {
                let _ = write!(
                    result,
                    " {}{}{}",
                    "[".bright_black(),
                    n.to_string().white(),
                    "]".bright_black()
                );
            }
            if let Some(is_favorite) = context.is_favorite {
                let _ = write!(result, " {}", get_favorite_marker(is_favorite));
            }
            let _ = write!(result, " {}", context.text.unwrap_or_default().white());
        }

        t if t.contains("{marker} {text}") => {
            result.push_str("   ");
            if let Some(is_favorite) = context.is_favorite {
                let _ = write!(result, "{} ", get_favorite_marker(is_favorite));
            }
            let text_value = context.text.unwrap_or_default();
            match context.tone {
                Some(tone) => {
                    let _ = write!(result, "{}", get_tone_color_style(tone)(text_value).bold());
                }
                None => {
                    let _ = write!(result, "{}", text_value.white().bold());
                }
            }
        }

        t if t.contains("from: {input}") => {
            let _ = write!(
                result,
                "         {} {}",
                "from:".bright_black(),
                context.input.unwrap_or_default().bright_black()
            );
        }

        t if t.contains("{label}: {value}") => {
            let _ = write!(
                result,
                "   {} {}",
                format!("{}:", context.label.unwrap_or_default()).blue(),
                context.value.unwrap_or_default().white()
            );
        }

        t if t.contains("- {value}") => {
            let _ = write!(
                result,
                "     {} {}",
                "-".bright_black(),
                context.value.unwrap_or_default().white()
            );
        }

        _ => result.push_str(text),
    }

    result
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
