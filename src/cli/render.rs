// src/cli/render.rs
//
// All user-facing presentation lives here. Color is applied at this
// boundary only; everything below it produces plain text.

use crate::models::ExecutionResult;
use colored::Colorize;

pub fn print_banner() {
    println!("{}", "docksh - Docker-only command shell".cyan().bold());
    println!("Type 'help' for commands, 'exit' to leave.");
}

pub fn prompt() -> String {
    format!("{} ", "docksh>".cyan().bold())
}

/// Prints one execution result: captured output to stdout, the error line
/// (if any) to stderr.
pub fn print_result(result: &ExecutionResult) {
    if !result.output.is_empty() {
        let trimmed = result.output.trim_end();
        if result.is_success() {
            println!("{trimmed}");
        } else {
            println!("{}", trimmed.yellow());
        }
    }
    if !result.error.is_empty() {
        eprintln!("{}", result.error.red());
    }
    log::debug!(
        "'{}' finished with code {} in {:?}",
        result.command,
        result.exit_code,
        result.duration
    );
}

pub fn print_error(message: &str) {
    eprintln!("{}: {message}", "Error".red().bold());
}

pub fn print_suggestions(suggestions: &[&str]) {
    if !suggestions.is_empty() {
        println!("{} {}", "Did you mean:".dimmed(), suggestions.join(", "));
    }
}
