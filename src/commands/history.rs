use crate::core::{
    command_init::SessionInit,
    error::Result,
    output::print_info,
    state::Metaphor,
    templates::{render_template, TemplateContext, TEMPLATES},
};

pub fn execute_history() -> Result<()> {
    let (_, session) = SessionInit::initialize()?;

    if session.history().is_empty() {
        print_info("No metaphors in history yet. Run 'metaphorever generate <text>' first.");
        return Ok(());
    }

    print_metaphor_list(TEMPLATES.section_history, session.history());
    Ok(())
}

/// Numbered list shared by `history` and `favorites`.
pub fn print_metaphor_list(section: &str, metaphors: &[Metaphor]) {
    println!(
        "{}",
        render_template(TEMPLATES.empty_line, &TemplateContext::default())
    );
    println!("{}", render_template(section, &TemplateContext::default()));

    for (i, metaphor) in metaphors.iter().enumerate() {
        let line_context = TemplateContext {
            tone: Some(metaphor.tone),
            n: Some(i + 1),
            is_favorite: Some(metaphor.is_favorite),
            text: Some(&metaphor.text),
            ..Default::default()
        };
        println!("{}", render_template(TEMPLATES.metaphor_line, &line_context));

        let source_context = TemplateContext {
            input: Some(&metaphor.original_input),
            ..Default::default()
        };
        println!(
            "{}",
            render_template(TEMPLATES.metaphor_source, &source_context)
        );
    }

    println!(
        "{}",
        render_template(TEMPLATES.empty_line, &TemplateContext::default())
    );
}
