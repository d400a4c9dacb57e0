//! `bijoy generate` — one-shot poem generation.

use anyhow::{bail, Result};

use bijoy::{GenerationOverrides, Language, PoetryGenerator};

use super::display;

pub struct Args {
    pub theme: String,
    pub language: String,
    pub count: usize,
    pub data_dir: String,
    pub template_only: bool,
    pub temperature: Option<f32>,
    pub top_k: Option<usize>,
    pub top_p: Option<f32>,
    pub repetition_penalty: Option<f32>,
    pub max_tokens: Option<usize>,
    pub seed: Option<u64>,
}

pub fn run(args: Args) -> Result<()> {
    // Request validation happens here, not in the core.
    let theme = args.theme.trim();
    if theme.is_empty() {
        bail!("--theme must not be empty");
    }
    if !(1..=5).contains(&args.count) {
        bail!("--count must be between 1 and 5, got {}", args.count);
    }
    let language: Language = args.language.parse()?;

    let overrides = GenerationOverrides {
        temperature: args.temperature,
        top_k: args.top_k,
        top_p: args.top_p,
        repetition_penalty: args.repetition_penalty,
        max_new_tokens: args.max_tokens,
        seed: args.seed,
        ..Default::default()
    };

    let generator = PoetryGenerator::builder(language)
        .data_dir(&args.data_dir)
        .template_only(args.template_only)
        .generation_config(overrides)
        .build();

    display::banner();
    eprintln!("Generating {} poem(s) for theme: {theme}...", args.count);

    let poems = generator.generate(theme, args.count);
    let total = poems.len();
    for (index, poem) in poems.iter().enumerate() {
        display::print_poem(poem, theme, language, index + 1, total);
    }

    Ok(())
}
