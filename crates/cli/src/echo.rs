use owo_colors::OwoColorize;
use sift_core::{SearchResponse, SearchResult};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!("\n{} {} {}", "Sift".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Answers from the web, with sources\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a labelled detail line under a step
pub fn print_detail(label: &str, value: &str) {
    eprintln!("  {} {}", format!("{label}:").dimmed(), value.bright_white());
}

fn print_heading(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}", "─".repeat(60).dimmed());
}

fn print_source(index: usize, source: &SearchResult) {
    println!("{} {}", format!("[{}]", index).bright_blue(), source.title.bold());
    println!("    {}", source.url.underline());
    if !source.description.is_empty() {
        println!("    {}", source.description.dimmed());
    }
}

/// Render a full response to stdout: answer, numbered sources, then
/// related questions when there are any.
pub fn print_response(response: &SearchResponse) {
    print_heading("Answer");
    println!("{}", response.answer);

    print_heading("Sources");
    for (i, source) in response.sources.iter().enumerate() {
        print_source(i + 1, source);
    }

    if !response.related_questions.is_empty() {
        print_heading("Related");
        for question in &response.related_questions {
            println!("  {} {}", "→".bright_blue(), question);
        }
    }
    println!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
