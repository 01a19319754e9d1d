use crate::core::{command_init::IndexCommandInit, error::Result, output::print_success};

/// Toggle the favorite flag of the history entries at `indices`.
pub fn execute_favorite(indices: Vec<String>) -> Result<()> {
    let mut context = IndexCommandInit::initialize(indices)?;

    for metaphor in context.selected_metaphors() {
        let updated = context.session.toggle_favorite(&metaphor);
        let verb = if updated.is_favorite {
            "Added to favorites:"
        } else {
            "Removed from favorites:"
        };
        print_success(&format!("{verb} {}", updated.text));
    }
    println!();

    log::debug!(
        "{} favorites after toggling",
        context.session.favorites().len()
    );
    Ok(())
}
