mod config;
mod history;
mod render;
mod theme;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use history::History;
use render::Style;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use theme::Theme;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordsearch_core::{GridBuilder, Puzzle, WordList};

#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about = "Generate word search puzzles from word lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and its solution from a word list file, one per
    /// section when the file holds several lists
    Generate(GenerateArgs),
    /// Split a combined word list file into one file per section
    Split {
        input: PathBuf,
        /// Directory for the section files; defaults to the output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Show recently generated puzzles
    History {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Text file with one word per line, optionally starting with
    /// `Title:` and `Desc:` lines. Several `Title:` or `Puzzle N:` sections
    /// give one puzzle each.
    input: PathBuf,
    /// Output file; the solution is written next to it with a `_solved` suffix.
    /// With several sections each file gets a `-N` suffix.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Grid size
    #[arg(short, long)]
    size: Option<usize>,
    /// Maximum attempts to place a word
    #[arg(short, long)]
    attempts: Option<usize>,
    /// Seed for a reproducible puzzle; section N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Print both views to stdout instead of writing files
    #[arg(long)]
    print: bool,
    /// Highlight solution paths with colors when printing
    #[arg(long, requires = "print")]
    color: bool,
    /// Do not record this puzzle in the history file
    #[arg(long)]
    no_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate(&config, args),
        Command::Split { input, output_dir } => {
            let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            split(&input, &dir)
        }
        Command::History { limit } => show_history(limit),
    }
}

fn generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let sections = load_sections(&args.input)?;
    info!(sections = sections.len(), input = %args.input.display(), "loaded word lists");

    let generator = config.generator(args.size, args.attempts);
    let base = output_path(config, &args);
    let numbered = sections.len() > 1;

    for (index, list) in sections.iter().enumerate() {
        let builder = match args.seed {
            Some(seed) => GridBuilder::with_seed(generator, seed.wrapping_add(index as u64)),
            None => GridBuilder::new(generator),
        };
        let puzzle = builder
            .generate(&list.words)
            .with_context(|| {
                format!(
                    "Could not generate '{}' from '{}'",
                    list.display_title(),
                    args.input.display()
                )
            })?
            .with_title(list.display_title(), list.description.clone());

        if args.print {
            print_puzzle(&puzzle, args.color)?;
        } else {
            let output = if numbered {
                numbered_path(&base, index + 1)
            } else {
                base.clone()
            };
            write_puzzle(&puzzle, &output, args.format)?;
        }

        if !args.no_history {
            let path = History::save_path();
            let mut history = History::load(&path);
            history.record(&puzzle, &generator);
            history.save(&path);
        }

        if let Some(seed) = puzzle.seed() {
            eprintln!("Seed: {seed}");
        }
    }
    Ok(())
}

fn load_sections(input: &Path) -> Result<Vec<WordList>> {
    if !input.is_file() {
        bail!("Input file '{}' not found", input.display());
    }
    let sections = WordList::sections_from_path(input)?;
    if sections.is_empty() {
        bail!("No words found in '{}'", input.display());
    }
    Ok(sections)
}

/// Write each section of `input` to `<dir>/NN_<title>.txt`
fn split(input: &Path, dir: &Path) -> Result<()> {
    let sections = load_sections(input)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Could not create output directory '{}'", dir.display()))?;

    for (index, list) in sections.iter().enumerate() {
        let path = dir.join(section_file_name(index + 1, list.display_title()));
        fs::write(&path, list.to_text())
            .with_context(|| format!("Could not write '{}'", path.display()))?;
        info!(words = list.words.len(), path = %path.display(), "wrote word list");
        println!("Word list saved to {}", path.display());
    }
    Ok(())
}

/// `02_farm_animals.txt` for the second section titled "Farm Animals"
fn section_file_name(number: usize, title: &str) -> String {
    let slug: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{number:02}_{slug}.txt")
}

/// `puzzles/farm.txt` -> `puzzles/farm-2.txt`
fn numbered_path(output: &Path, number: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match output.extension() {
        Some(ext) => format!("{stem}-{number}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{number}"),
    };
    output.with_file_name(name)
}

/// Output path from `-o`, or `<output_dir>/<input stem>.<ext>`
fn output_path(config: &Config, args: &GenerateArgs) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }
    let stem = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "word_search".to_string());
    let ext = match args.format {
        Format::Text => "txt",
        Format::Json => "json",
    };
    config.output_dir.join(format!("{stem}.{ext}"))
}

/// `puzzles/farm.txt` -> `puzzles/farm_solved.txt`
fn solved_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match output.extension() {
        Some(ext) => format!("{stem}_solved.{}", ext.to_string_lossy()),
        None => format!("{stem}_solved"),
    };
    output.with_file_name(name)
}

fn write_puzzle(puzzle: &Puzzle, output: &Path, format: Format) -> Result<()> {
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create output directory '{}'", dir.display()))?;
    }

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(puzzle)?;
            fs::write(output, json)
                .with_context(|| format!("Could not write '{}'", output.display()))?;
            println!("Word search puzzle saved to {}", output.display());
        }
        Format::Text => {
            let mut file = create(output)?;
            render::render_unsolved(&mut file, puzzle)?;
            file.flush()?;
            println!("Word search puzzle saved to {}", output.display());

            let solved = solved_path(output);
            let mut file = create(&solved)?;
            render::render_solved(&mut file, puzzle, Style::Plain, &Theme::default())?;
            file.flush()?;
            println!("Solved version saved to {}", solved.display());
        }
    }
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Could not create '{}'", path.display()))?;
    Ok(BufWriter::new(file))
}

fn print_puzzle(puzzle: &Puzzle, color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let style = if color { Style::Color } else { Style::Plain };

    render::render_unsolved(&mut out, puzzle)?;
    writeln!(out)?;
    render::render_solved(&mut out, puzzle, style, &Theme::default())?;
    out.flush()?;
    Ok(())
}

fn show_history(limit: usize) -> Result<()> {
    let history = History::load(&History::save_path());
    if history.records.is_empty() {
        println!("No puzzles generated yet.");
        return Ok(());
    }

    for record in history.recent(limit) {
        let seed = record
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<4} {:<30} {:>2}x{:<2} {:>3}/{:<3} words  seed {}",
            record.id,
            record.title,
            record.grid_size,
            record.grid_size,
            record.placed,
            record.requested,
            seed
        );
    }
    Ok(())
}
