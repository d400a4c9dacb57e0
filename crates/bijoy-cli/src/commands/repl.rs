//! `bijoy repl` — interactive generation loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use bijoy::{GeneratorRegistry, Language};

use super::display;

pub fn run(data_dir: &str, template_only: bool) -> Result<()> {
    let registry = GeneratorRegistry::new(Some(data_dir.into()), template_only);

    display::banner();
    println!("Interactive mode. Type 'help' for themes, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", "theme> ".bold());
        io::stdout().flush()?;

        let theme = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let theme = theme.trim().to_string();

        match theme.to_lowercase().as_str() {
            "" => {
                println!("Please enter a theme.\n");
                continue;
            }
            "quit" | "exit" | "q" => break,
            "help" => {
                let generator = registry.get_or_init(Language::English);
                for theme in generator.available_themes() {
                    println!("  {} {theme}", "•".green());
                }
                println!();
                continue;
            }
            _ => {}
        }

        print!("language (english/bengali) [english]> ");
        io::stdout().flush()?;
        let language = match lines.next() {
            Some(line) => line?
                .trim()
                .parse::<Language>()
                .unwrap_or(Language::English),
            None => break,
        };

        let generator = registry.get_or_init(language);
        let poems = generator.generate(&theme, 1);
        if let Some(poem) = poems.first() {
            println!();
            display::print_poem(poem, &theme, language, 1, 1);
        }
    }

    println!("\nGoodbye! জয় বাংলা! 🇧🇩\n");
    Ok(())
}
