use console::style;

use crate::config::Category;
use crate::sections::{ordered_sections, SectionMap};

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), message);
}

/// Prints the previous and next release versions.
pub fn display_version_change(previous: &str, next: &str) {
    eprintln!("\n{}", style("Proposed release:").bold());
    eprintln!("  From: {}", style(previous).red());
    eprintln!("  To:   {}", style(next).green());
}

/// Prints a per-category bullet count summary in configured order.
pub fn display_sections_summary(sections: &SectionMap, categories: &[Category]) {
    eprintln!("\n{}", style("Changelog sections:").bold());
    for (label, bullets) in ordered_sections(sections, categories) {
        let count = bullets.len();
        let line = format!(
            "  {:<16} {} change{}",
            label,
            count,
            if count == 1 { "" } else { "s" }
        );
        if count == 0 {
            eprintln!("{}", style(line).dim());
        } else {
            eprintln!("{}", line);
        }
    }
}
