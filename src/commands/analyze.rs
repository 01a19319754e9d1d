use crate::core::{
    command_init::SessionInit,
    error::Result,
    state::IdiomAnalysis,
    templates::{render_template, TemplateContext, TEMPLATES},
};

/// Analyze `phrase`; `translate` of `Some(vec![])` means the configured languages.
pub fn execute_analyze(phrase: Vec<String>, translate: Option<Vec<String>>) -> Result<()> {
    let (config, mut session) = SessionInit::initialize()?;

    let phrase = phrase.join(" ");

    let analysis = match translate {
        Some(languages) => {
            session.analyze(&phrase)?;
            let languages = if languages.is_empty() {
                config.default_languages
            } else {
                languages
            };
            session.request_translations(&languages)?
        }
        None => session.analyze(&phrase)?,
    };

    print_analysis(analysis);
    Ok(())
}

/// Split a `--translate` value such as `Spanish, French` into languages.
pub fn parse_languages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_field(label: &str, value: &str) {
    let context = TemplateContext {
        label: Some(label),
        value: Some(value),
        ..Default::default()
    };
    println!("{}", render_template(TEMPLATES.analysis_field, &context));
}

fn print_item(value: &str) {
    let context = TemplateContext {
        value: Some(value),
        ..Default::default()
    };
    println!("{}", render_template(TEMPLATES.analysis_item, &context));
}

fn print_analysis(analysis: &IdiomAnalysis) {
    let blank = TemplateContext::default();

    println!("{}", render_template(TEMPLATES.empty_line, &blank));
    println!("{}", render_template(TEMPLATES.section_analysis, &blank));

    print_field("Phrase", &analysis.phrase);
    print_field("Idiom", if analysis.is_idiom { "yes" } else { "no" });
    if let Some(meaning) = &analysis.meaning {
        print_field("Meaning", meaning);
    }
    if let Some(origin) = &analysis.origin {
        print_field("Origin", origin);
    }

    if let Some(alternatives) = analysis.alternatives.as_deref().filter(|a| !a.is_empty()) {
        print_field("Alternatives", "");
        for alternative in alternatives {
            print_item(alternative);
        }
    }

    if let Some(variations) = analysis
        .cultural_variations
        .as_deref()
        .filter(|v| !v.is_empty())
    {
        print_field("Cultural variations", "");
        for variation in variations {
            let line = match &variation.literal_translation {
                Some(literal) => format!(
                    "{}: {} ({}) {}",
                    variation.culture, variation.expression, literal, variation.context
                ),
                None => format!(
                    "{}: {} {}",
                    variation.culture, variation.expression, variation.context
                ),
            };
            print_item(line.trim_end());
        }
    }

    if let Some(translations) = &analysis.translations {
        println!("{}", render_template(TEMPLATES.empty_line, &blank));
        println!("{}", render_template(TEMPLATES.section_translations, &blank));
        for translation in translations {
            print_field(&translation.language, &translation.translation);
            if !translation.explanation.is_empty() {
                print_item(&translation.explanation);
            }
        }
    }

    println!("{}", render_template(TEMPLATES.empty_line, &blank));
}
