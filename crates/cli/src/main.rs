//! CLI tool for researching a topic and generating a PowerPoint deck.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_agents::Pipeline;
use deck_core::{Config, ErrorKind, OutlineAdapter, SlideHeaderParser, Stage};
use deck_pptx::{PptxWriter, DEFAULT_BASE_NAME};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Research a topic with AI agents and turn the result into a PowerPoint deck.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Presentation topic (prompted for when omitted)
    #[arg(short, long)]
    topic: Option<String>,

    /// Output filename without extension (prompted for when omitted)
    #[arg(short, long)]
    filename: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Render from previously generated text instead of running the agents
    #[arg(long, value_name = "PATH")]
    from_text: Option<PathBuf>,

    /// Print the raw generated text
    #[arg(long)]
    show_content: bool,

    /// Print the parsed outline as JSON
    #[arg(long)]
    dump_outline: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    run(&args).map_err(|e| match error_kind(&e) {
        ErrorKind::Configuration => e.context("Configuration error"),
        ErrorKind::Generation => e.context("Presentation generation failed"),
    })
}

fn run(args: &Args) -> Result<()> {
    let (raw_text, filename) = match &args.from_text {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = resolve_filename(args)?;
            (text, filename)
        }
        None => generate_text(args)?,
    };

    if args.show_content {
        println!("\n----- Generated content -----\n{}\n-----------------------------", raw_text);
    }

    println!("\nGenerating PowerPoint...");

    let path = render_or_fallback(&raw_text, args, &filename)?;
    let shown = std::fs::canonicalize(&path).unwrap_or(path);
    println!("\nPresentation successfully created!");
    println!("Location: {}", shown.display());
    Ok(())
}

/// Classify a failure by the first library error in its chain.
fn error_kind(err: &anyhow::Error) -> ErrorKind {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<deck_core::Error>())
        .map(deck_core::Error::kind)
        .unwrap_or(ErrorKind::Generation)
}

/// Render the deck; on failure keep the raw text next to where the deck would have gone.
fn render_or_fallback(raw_text: &str, args: &Args, filename: &str) -> Result<PathBuf> {
    let err = match render(raw_text, args, filename) {
        Ok(path) => return Ok(path),
        Err(e) => e,
    };

    let fallback = fallback_path(&args.output_dir, filename);
    match write_output(&fallback, raw_text) {
        Ok(()) => println!("Raw content saved to {}", fallback.display()),
        Err(write_err) => log::error!("Could not save raw content: {:#}", write_err),
    }
    Err(err.context("Error creating PowerPoint"))
}

/// Validate configuration, collect the topic and run the agent pipeline.
fn generate_text(args: &Args) -> Result<(String, String)> {
    let config = Config::from_env()
        .context("Please make sure PERPLEXITY_API_KEY is set in your environment or a .env file")?;
    log::debug!("Loaded {:?}", config);

    let topic = match &args.topic {
        Some(topic) => topic.trim().to_string(),
        None => prompt("Enter the topic for your presentation: ")?,
    };
    if topic.is_empty() {
        bail!("Topic cannot be empty!");
    }

    let filename = resolve_filename(args)?;

    println!("\nStarting research on: {}", topic);

    let pipeline = Pipeline::from_config(&config);
    let output = pipeline.kickoff_with_progress(&topic, |stage| {
        let message = match stage {
            Stage::Research => "Researching topic...",
            Stage::Organize => "Organizing research into an outline...",
            Stage::Generate => "Writing slide content...",
        };
        println!("[{}/{}] {}", stage_number(stage), Stage::ALL.len(), message);
    })?;

    println!("\nResearch and organization completed.");

    Ok((output.final_text().to_string(), filename))
}

/// Parse the generated text and write the deck.
fn render(raw_text: &str, args: &Args, filename: &str) -> Result<PathBuf> {
    let outline = SlideHeaderParser::new().parse(raw_text);

    if args.verbose {
        eprintln!("  Found {} slides", outline.len());
    }

    if args.dump_outline {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    }

    let path = PptxWriter::new()
        .save(&outline, &args.output_dir, filename)
        .with_context(|| format!("Failed to save presentation '{}'", filename))?;

    Ok(path)
}

fn resolve_filename(args: &Args) -> Result<String> {
    let filename = match &args.filename {
        Some(name) => name.trim().to_string(),
        None if args.from_text.is_some() => String::new(),
        None => prompt("Enter a filename for your presentation (without extension): ")?,
    };

    if filename.is_empty() {
        Ok(DEFAULT_BASE_NAME.to_string())
    } else {
        Ok(filename)
    }
}

fn stage_number(stage: Stage) -> usize {
    Stage::ALL
        .iter()
        .position(|s| *s == stage)
        .map(|i| i + 1)
        .unwrap_or_default()
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(line.trim().to_string())
}

/// Where raw text goes when the deck cannot be written.
fn fallback_path(output_dir: &Path, filename: &str) -> PathBuf {
    output_dir.join(format!("{}_content.txt", filename))
}

/// Write output to a file, creating its directory first.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
