//! Terminal rendering helpers.

use bijoy::{Language, Poem};
use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// Application banner.
pub fn banner() {
    println!();
    println!(
        "{}",
        "  BIJOY DIBOSH POETRY GENERATOR  🇧🇩".bold().green()
    );
    println!("{}", "  Victory Day poem & slogan generator".dimmed());
    println!();
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Pretty-print one generated poem.
pub fn print_poem(poem: &Poem, theme: &str, language: Language, index: usize, total: usize) {
    println!("{}", rule().dimmed());
    if total > 1 {
        println!("  {}", format!("Poem {index} of {total}").bold());
    }
    println!("  Theme:    {}", theme.cyan());
    println!("  Language: {}", language.as_str().cyan());
    println!("{}", rule().dimmed());
    println!();

    for line in poem.lines() {
        println!("    {line}");
    }

    println!();
}

/// Print the theme table with a few aliases each.
pub fn print_themes(entries: &[(String, Vec<String>)]) {
    println!("Available themes:");
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());
    for (theme, aliases) in entries {
        let shown: Vec<&str> = aliases.iter().take(3).map(String::as_str).collect();
        println!(
            "  {} {:<14} | aliases: {}",
            "•".green(),
            theme,
            shown.join(", ").dimmed()
        );
    }
    println!();
}
