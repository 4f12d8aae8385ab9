use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use penprint::config::Config;
use penprint::features::traits::{SignatureExtractor, StyleExtractor};
use penprint::scoring::{compare, matcher};
use penprint::store::{files, record};

/// Penprint: guess who wrote a text.
///
/// Computes a stylometric signature (word length, vocabulary richness,
/// sentence length and complexity) and finds the closest known author.
#[derive(Parser)]
#[command(name = "penprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the author whose signature best matches a text
    Identify {
        /// Text of unknown authorship (prompted for if omitted)
        text: Option<PathBuf>,

        /// Directory of signature files (default: PENPRINT_SIGNATURE_DIR, else prompted)
        #[arg(long, short)]
        signatures: Option<PathBuf>,

        /// Also show the N closest candidates (default: PENPRINT_TOP)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Compute the signature of a text
    Signature {
        /// Text to analyze
        text: PathBuf,

        /// Label to store with the signature (default: the file name)
        #[arg(long)]
        label: Option<String>,

        /// Write the signature to this file in the record format
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the signature as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the weighted distance between two signature files
    Compare {
        first: PathBuf,
        second: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for results and --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("penprint=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Identify {
            text,
            signatures,
            top,
        } => {
            let text_path = match text {
                Some(path) => files::validate_path(path)?,
                None => prompt_for_path(
                    "enter the name of the file with unknown author: ",
                    "That file does not exist.",
                )?,
            };
            let signature_dir = match signatures.or_else(|| config.signature_dir.clone()) {
                Some(path) => files::validate_path(path)?,
                None => prompt_for_path(
                    "enter the path to the directory of signature files: ",
                    "That path to directory does not exist.",
                )?,
            };

            let text = files::read_text(&text_path)?;
            let query = StyleExtractor.extract(&label_for(&text_path), &text)?;

            let candidates = files::load_directory(&signature_dir)?;
            if candidates.is_empty() {
                warn!(dir = %signature_dir.display(), "No signature files found");
            }
            let best = matcher::best_match(&query, &candidates, &config.weights)
                .with_context(|| format!("nothing to compare in {}", signature_dir.display()))?;
            info!(label = %best.label.trim(), score = best.score, "Best match");

            penprint::output::terminal::display_best_match(&best);

            let top = top.unwrap_or(config.top);
            if top > 0 {
                let ranked = matcher::rank(&query, &candidates, &config.weights);
                penprint::output::terminal::display_ranking(&ranked, top);
            }
        }

        Commands::Signature {
            text,
            label,
            output,
            json,
        } => {
            let text_path = files::validate_path(text)?;
            let lines = files::read_text(&text_path)?;
            let label = label.unwrap_or_else(|| label_for(&text_path));
            record::validate_label(&label)?;
            let signature = StyleExtractor.extract(&label, &lines)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&signature)?);
            } else {
                signature.display();
            }

            if let Some(path) = output {
                files::write_signature(&path, &signature)?;
                if !json {
                    println!("{} {}", "Saved to".dimmed(), path.display());
                }
            }
        }

        Commands::Compare { first, second } => {
            let a = files::read_signature(&first)?;
            let b = files::read_signature(&second)?;
            let score = compare::distance(&a, &b, &config.weights);
            penprint::output::terminal::display_comparison(&a, &b, score);
        }
    }

    Ok(())
}

/// Default label for a text: its file name, or the whole path if it has none.
fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Ask for a path on stdin until the user names one that exists.
fn prompt_for_path(prompt: &str, not_found: &str) -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("no path given (end of input)");
        }

        match files::validate_path(line.trim()) {
            Ok(path) => return Ok(path),
            Err(e) => {
                warn!(error = %e, "Rejected path");
                println!("{not_found}");
            }
        }
    }
}
