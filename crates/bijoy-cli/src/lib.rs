//! CLI argument definitions for the `bijoy` binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bijoy")]
#[command(about = "Victory Day poem and slogan generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Generate poems for a theme
    Generate {
        /// Theme for the poem (e.g., Freedom, Sacrifice, বিজয়)
        #[arg(short, long)]
        theme: String,

        /// Generation language
        #[arg(short, long, default_value = "english")]
        language: String,

        /// Number of poems to generate (1-5)
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Directory holding training_data.json and themes.json
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Skip model loading; use template-based generation only
        #[arg(long)]
        template_only: bool,

        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f32>,

        /// Top-K sampling limit
        #[arg(long)]
        top_k: Option<usize>,

        /// Top-P (nucleus) sampling threshold
        #[arg(long)]
        top_p: Option<f32>,

        /// Repetition penalty (1.0 = no penalty)
        #[arg(long)]
        repetition_penalty: Option<f32>,

        /// Maximum new tokens per poem
        #[arg(short = 'n', long)]
        max_tokens: Option<usize>,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a random Victory Day slogan
    Slogan {
        #[arg(short, long, default_value = "english")]
        language: String,

        #[arg(long, default_value = "data")]
        data_dir: String,
    },

    /// List available themes and their aliases
    Themes,

    /// Interactive mode: enter themes, get poems
    Repl {
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Skip model loading; use template-based generation only
        #[arg(long)]
        template_only: bool,
    },
}

/// Deployment flag forcing template-only operation, read once at startup.
pub fn memory_constrained_env() -> bool {
    std::env::var_os("BIJOY_TEMPLATE_ONLY").is_some()
        || std::env::var_os("SKIP_MODEL_LOADING").is_some()
}
