use clap::{Parser, Subcommand};
use metaphorever::commands::*;
use metaphorever::core::{
    error::{MetaphorError, Result},
    output::print_hint,
    print_error, print_error_with_structured_usage,
    tone::Tone,
};
use std::env;

#[derive(Parser)]
#[command(name = "metaphorever")]
#[command(about = "Generate metaphors and analyze idioms from the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a metaphor for a word or concept
    Generate {
        /// Tone of the metaphor (defaults to the configured tone)
        #[arg(short, long, value_enum)]
        tone: Option<Tone>,
        /// Text to turn into a metaphor
        text: Vec<String>,
    },
    /// Explain an idiom or phrase
    Analyze {
        /// Also translate the phrase, e.g. `--translate Spanish,French`
        /// (configured languages when no value is given)
        #[arg(long, value_name = "LANGUAGES")]
        translate: Option<Option<String>>,
        /// Phrase to analyze
        phrase: Vec<String>,
    },
    /// Show the most recent metaphors
    History,
    /// Show favorite metaphors
    Favorites,
    /// Show the metaphor of the day
    Daily,
    /// Toggle favorites by history index
    Favorite {
        /// History indices to toggle (e.g., "1 3-5,8")
        indices: Vec<String>,
    },
}

fn report(e: MetaphorError) -> ! {
    match e {
        MetaphorError::NoIndicesProvided => print_error_with_structured_usage(
            "No history indices provided",
            &["metaphorever favorite <indices>"],
            &[
                ("1", "Toggle the newest metaphor"),
                ("1 3-5,8", "Toggle entries 1, 3, 4, 5 and 8"),
            ],
        ),
        remote if remote.is_remote() => {
            print_error(&remote.to_string());
            print_hint("Run again with --debug to see the request log.");
            println!();
        }
        other => print_error(&other.to_string()),
    }
    std::process::exit(1);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let outcome = match cli.command {
        Commands::Generate { tone, text } => execute_generate(text, tone),
        Commands::Analyze { translate, phrase } => {
            let languages =
                translate.map(|value| value.map(|v| parse_languages(&v)).unwrap_or_default());
            execute_analyze(phrase, languages)
        }
        Commands::Daily => execute_daily(),
        Commands::History => execute_history(),
        Commands::Favorites => execute_favorites(),
        Commands::Favorite { indices } => execute_favorite(indices),
    };

    if let Err(e) = outcome {
        report(e);
    }

    Ok(())
}
