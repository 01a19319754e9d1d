use crate::commands::history::print_metaphor_list;
use crate::core::{
    command_init::SessionInit,
    error::Result,
    output::{print_hint, print_info},
    templates::TEMPLATES,
};

pub fn execute_favorites() -> Result<()> {
    let (_, session) = SessionInit::initialize()?;

    if session.favorites().is_empty() {
        print_info("No favorites yet.");
        print_hint("Star a history entry with 'metaphorever favorite <indices>'.");
        return Ok(());
    }

    print_metaphor_list(TEMPLATES.section_favorites, session.favorites());
    Ok(())
}
