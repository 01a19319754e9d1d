use crate::core::{
    command_init::SessionInit,
    error::Result,
    templates::{render_template, TemplateContext, TEMPLATES},
    tone::Tone,
};

/// Generate a metaphor for `text`, falling back to the configured tone.
pub fn execute_generate(text: Vec<String>, tone: Option<Tone>) -> Result<()> {
    let (config, mut session) = SessionInit::initialize()?;

    session.set_input(text.join(" "));
    session.set_tone(tone.unwrap_or(config.default_tone));

    let metaphor = session.generate()?;

    println!(
        "{}",
        render_template(TEMPLATES.empty_line, &TemplateContext::default())
    );
    println!(
        "{}",
        render_template(TEMPLATES.section_metaphor, &TemplateContext::default())
    );

    let context = TemplateContext {
        tone: Some(metaphor.tone),
        is_favorite: Some(metaphor.is_favorite),
        text: Some(&metaphor.text),
        ..Default::default()
    };
    println!("{}", render_template(TEMPLATES.metaphor_current, &context));

    let source_context = TemplateContext {
        input: Some(&metaphor.original_input),
        ..Default::default()
    };
    println!(
        "{}",
        render_template(TEMPLATES.metaphor_source, &source_context)
    );
    println!(
        "{}",
        render_template(TEMPLATES.empty_line, &TemplateContext::default())
    );

    Ok(())
}
