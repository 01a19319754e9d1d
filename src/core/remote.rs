//! Remote generation and analysis clients.
//!
//! The session only depends on the [`MetaphorGenerator`] and
//! [`PhraseAnalyzer`] traits. [`OpenAiClient`] implements both against an
//! OpenAI-compatible chat completions endpoint using blocking `reqwest`.
//!
//! Remote failures are never retried here; they are mapped to
//! [`MetaphorError::Generation`], [`MetaphorError::Analysis`] or
//! [`MetaphorError::Translation`] and handed back to the caller.

use crate::core::config::AppConfig;
use crate::core::error::{MetaphorError, Result};
use crate::core::state::{IdiomAnalysis, Metaphor, Translation};
use crate::core::tone::Tone;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait MetaphorGenerator {
    fn generate(&self, input: &str, tone: Tone) -> Result<Metaphor>;
}

pub trait PhraseAnalyzer {
    fn analyze(&self, phrase: &str) -> Result<IdiomAnalysis>;
    fn translate(&self, phrase: &str, languages: &[String]) -> Result<Vec<Translation>>;
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranslationReply {
    Bare(Vec<Translation>),
    Wrapped {
        #[serde(default)]
        translations: Vec<Translation>,
    },
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    generation_model: String,
    analysis_model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            generation_model: config.generation_model.clone(),
            analysis_model: config.analysis_model.clone(),
            api_key: config.api_key(),
        })
    }

    fn complete(&self, request: &ChatRequest) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(MetaphorError::MissingApiKey)?;
        let url = format!("{}/chat/completions", self.base_url);

        log::debug!("POST {url} (model {})", request.model);

        let response: ChatResponse = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

/// Keep `MissingApiKey` as-is so the user sees how to fix it.
fn remote_failure(err: MetaphorError, wrap: fn(String) -> MetaphorError) -> MetaphorError {
    match err {
        MetaphorError::MissingApiKey => err,
        other => {
            log::error!("Remote call failed: {other}");
            wrap(other.to_string())
        }
    }
}

/// Strip whitespace and wrapping quotes from a generated metaphor.
pub fn clean_metaphor_text(content: &str) -> String {
    let trimmed = content.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Parse an analysis reply. The analysed phrase always wins over the reply's.
pub fn parse_analysis(phrase: &str, content: &str) -> Result<IdiomAnalysis> {
    let content = if content.trim().is_empty() {
        "{}"
    } else {
        content
    };
    let mut analysis: IdiomAnalysis =
        serde_json::from_str(content).map_err(|e| MetaphorError::analysis(e.to_string()))?;
    analysis.phrase = phrase.to_string();
    Ok(analysis)
}

/// Parse a translation reply, either `{"translations": [...]}` or a bare array.
/// An object without a `translations` list yields no translations.
pub fn parse_translations(content: &str) -> Result<Vec<Translation>> {
    let content = if content.trim().is_empty() {
        "[]"
    } else {
        content
    };
    let reply = serde_json::from_str::<TranslationReply>(content)
        .map_err(|e| MetaphorError::translation(e.to_string()))?;
    match reply {
        TranslationReply::Wrapped { translations } => Ok(translations),
        TranslationReply::Bare(translations) => Ok(translations),
    }
}

impl MetaphorGenerator for OpenAiClient {
    fn generate(&self, input: &str, tone: Tone) -> Result<Metaphor> {
        if input.trim().is_empty() {
            return Err(MetaphorError::EmptyInput);
        }

        let request = ChatRequest {
            model: &self.generation_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: format!(
                        "You are a creative metaphor generator. Create vivid, original metaphors. \
                         IMPORTANT: Output ONLY the metaphor itself, no explanations. {}. \
                         Format: \"[Subject] is [metaphor]\" or use other metaphorical structures.",
                        tone.prompt()
                    ),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Create a {tone} metaphor for: \"{input}\""),
                },
            ],
            temperature: Some(0.9),
            max_tokens: Some(100),
            response_format: None,
        };

        let content = self
            .complete(&request)
            .map_err(|e| remote_failure(e, |message| MetaphorError::Generation { message }))?;

        let text = clean_metaphor_text(&content);
        if text.is_empty() {
            return Err(MetaphorError::generation("the service returned no text"));
        }

        Ok(Metaphor::new(text, input, tone, Utc::now()))
    }
}

impl PhraseAnalyzer for OpenAiClient {
    fn analyze(&self, phrase: &str) -> Result<IdiomAnalysis> {
        if phrase.trim().is_empty() {
            return Err(MetaphorError::EmptyPhrase);
        }

        let request = ChatRequest {
            model: &self.analysis_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are an expert in idioms and figurative language. Analyze the \
                              given phrase and return a JSON object with these properties: \
                              phrase (the analyzed phrase), isIdiom (boolean), meaning \
                              (explanation of the idiom, if applicable), origin (brief history, \
                              if applicable), alternatives (array of modern alternatives or \
                              similar expressions)."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Analyze this phrase: \"{phrase}\""),
                },
            ],
            temperature: None,
            max_tokens: None,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let content = self
            .complete(&request)
            .map_err(|e| remote_failure(e, |message| MetaphorError::Analysis { message }))?;
        parse_analysis(phrase, &content)
    }

    fn translate(&self, phrase: &str, languages: &[String]) -> Result<Vec<Translation>> {
        if languages.is_empty() {
            return Ok(Vec::new());
        }

        let request = ChatRequest {
            model: &self.analysis_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a language expert. For the given phrase, provide \
                              translations and cultural context for the specified languages. \
                              Return a JSON object with a translations array whose items contain: \
                              language, translation, explanation (brief cultural context)."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Translate this phrase: \"{phrase}\" into: {}",
                        languages.join(", ")
                    ),
                },
            ],
            temperature: None,
            max_tokens: None,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let content = self
            .complete(&request)
            .map_err(|e| remote_failure(e, |message| MetaphorError::Translation { message }))?;
        parse_translations(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> OpenAiClient {
        let config = AppConfig {
            api_key: None,
            ..AppConfig::default()
        };
        let mut client = OpenAiClient::from_config(&config).unwrap();
        client.api_key = None;
        client
    }

    #[test]
    fn test_clean_metaphor_text() {
        assert_eq!(
            clean_metaphor_text("  \"Time is a river\"\n"),
            "Time is a river"
        );
        assert_eq!(clean_metaphor_text("Love is a garden"), "Love is a garden");
        assert_eq!(clean_metaphor_text("\""), "\"");
    }

    #[test]
    fn test_parse_analysis_overrides_phrase() -> Result<()> {
        let analysis = parse_analysis(
            "Break the ice",
            r#"{"phrase":"break ice","isIdiom":true,"meaning":"start a conversation","alternatives":["open up"]}"#,
        )?;
        assert_eq!(analysis.phrase, "Break the ice");
        assert!(analysis.is_idiom);
        assert_eq!(analysis.meaning.as_deref(), Some("start a conversation"));
        assert_eq!(analysis.alternatives, Some(vec!["open up".to_string()]));
        assert!(analysis.origin.is_none());
        Ok(())
    }

    #[test]
    fn test_parse_analysis_empty_reply() -> Result<()> {
        let analysis = parse_analysis("hello", "")?;
        assert_eq!(analysis, IdiomAnalysis::new("hello"));
        Ok(())
    }

    #[test]
    fn test_parse_analysis_garbage() {
        let result = parse_analysis("hello", "not json");
        assert!(matches!(result, Err(MetaphorError::Analysis { .. })));
    }

    #[test]
    fn test_parse_translations_wrapped_and_bare() -> Result<()> {
        let wrapped = parse_translations(
            r#"{"translations":[{"language":"Spanish","translation":"romper el hielo","explanation":"same idea"}]}"#,
        )?;
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].language, "Spanish");

        let bare = parse_translations(r#"[{"language":"French","translation":"briser la glace"}]"#)?;
        assert_eq!(bare[0].translation, "briser la glace");
        assert_eq!(bare[0].explanation, "");

        assert!(parse_translations("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_translations_object_without_list() -> Result<()> {
        assert!(parse_translations("{}")?.is_empty());
        assert!(parse_translations(r#"{"note":"no translations available"}"#)?.is_empty());
        assert!(matches!(
            parse_translations(r#"{"translations":"Spanish"}"#),
            Err(MetaphorError::Translation { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_generate_rejects_blank_input() {
        let client = offline_client();
        assert!(matches!(
            client.generate("   ", Tone::Poetic),
            Err(MetaphorError::EmptyInput)
        ));
    }

    #[test]
    fn test_generate_without_key_fails_before_any_request() {
        let client = offline_client();
        assert!(matches!(
            client.generate("time", Tone::Funny),
            Err(MetaphorError::MissingApiKey)
        ));
        assert!(matches!(
            client.analyze("break the ice"),
            Err(MetaphorError::MissingApiKey)
        ));
    }

    #[test]
    fn test_translate_without_languages_is_empty() -> Result<()> {
        let client = offline_client();
        assert!(client.translate("hello", &[])?.is_empty());
        Ok(())
    }
}
