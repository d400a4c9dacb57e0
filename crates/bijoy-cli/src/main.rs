mod commands;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use bijoy_cli::{memory_constrained_env, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let constrained = memory_constrained_env();

    match cli.command {
        Commands::Generate {
            theme,
            language,
            count,
            data_dir,
            template_only,
            temperature,
            top_k,
            top_p,
            repetition_penalty,
            max_tokens,
            seed,
        } => commands::generate::run(commands::generate::Args {
            theme,
            language,
            count,
            data_dir,
            template_only: template_only || constrained,
            temperature,
            top_k,
            top_p,
            repetition_penalty,
            max_tokens,
            seed,
        }),

        Commands::Slogan { language, data_dir } => commands::slogan::run(&language, &data_dir),

        Commands::Themes => commands::themes::run(),

        Commands::Repl {
            data_dir,
            template_only,
        } => commands::repl::run(&data_dir, template_only || constrained),
    }
}
