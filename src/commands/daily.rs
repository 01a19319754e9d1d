use crate::core::{
    clock::SystemClock,
    config::AppConfig,
    daily::{DailyMetaphor, QuotableClient},
    error::Result,
    storage::FileStorage,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::sync::Arc;

pub fn execute_daily() -> Result<()> {
    let config = AppConfig::load_or_default();
    let daily = DailyMetaphor::new(
        Arc::new(FileStorage::open_default()?),
        Arc::new(SystemClock),
        Box::new(QuotableClient::from_config(&config)?),
    );

    let quote = daily.today()?;
    let date = daily.date().format("%Y-%m-%d").to_string();
    let blank = TemplateContext::default();

    println!("{}", render_template(TEMPLATES.empty_line, &blank));
    println!("{}", render_template(TEMPLATES.section_daily, &blank));

    let text_context = TemplateContext {
        text: Some(&quote.text),
        ..Default::default()
    };
    println!(
        "{}",
        render_template(TEMPLATES.metaphor_current, &text_context)
    );

    if !quote.author.is_empty() {
        let author_context = TemplateContext {
            label: Some("Author"),
            value: Some(&quote.author),
            ..Default::default()
        };
        println!(
            "{}",
            render_template(TEMPLATES.analysis_field, &author_context)
        );
    }

    let date_context = TemplateContext {
        label: Some("Date"),
        value: Some(&date),
        ..Default::default()
    };
    println!(
        "{}",
        render_template(TEMPLATES.analysis_field, &date_context)
    );
    println!("{}", render_template(TEMPLATES.empty_line, &blank));

    Ok(())
}
