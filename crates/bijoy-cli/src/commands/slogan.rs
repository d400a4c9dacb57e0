//! `bijoy slogan` — print a random Victory Day slogan.

use anyhow::Result;

use bijoy::{Language, PoetryGenerator};

pub fn run(language: &str, data_dir: &str) -> Result<()> {
    let language: Language = language.parse()?;

    // Slogans never need a model.
    let generator = PoetryGenerator::builder(language)
        .data_dir(data_dir)
        .template_only(true)
        .build();

    println!("{}", generator.random_slogan());
    Ok(())
}
