//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the message helpers every metaphorever command uses,
//! so errors, hints and headers look the same everywhere.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for usage, bright_black for hints
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Usage on demand**: Commands with positional arguments print their usage on misuse

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error followed by usage patterns and options
///
/// # Format
/// ```text
///
/// ✕ Error: <message>.
/// Usage:
///   <usage_pattern>
///
/// Options:
///   <flag>  <description>
///
/// ```
pub fn print_error_with_structured_usage(
    message: &str,
    usage_patterns: &[&str],
    options: &[(&str, &str)],
) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());

    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    if !options.is_empty() {
        println!("\n{}", "Options:".blue());
        for (flag, description) in options {
            println!("  {}  {}", flag.bright_black(), description.bright_black());
        }
    }

    println!();
}

/// Formats and prints a success message (green checkmark, white message)
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message surrounded by blank lines
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a muted hint line
pub fn print_hint(message: &str) {
    println!("{}", message.bright_black());
}
