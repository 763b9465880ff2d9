use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use saga_generator::{auto_compact, GatedGenerator, ProcessCompactor, ProcessGenerator};
use saga_store::{ChapterRange, FsProjectStore, ProjectStore};
use saga_summarizer::{Summarizer, SummaryOutcome};
use saga_tokens::{estimate_tokens, TokenBudget};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "saga")]
#[command(about = "Recursive chapter summarization for long-form writing projects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// External generator command (overrides the config file)
    #[arg(long, global = true)]
    generator: Option<String>,

    /// Generator call timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a chapter range, or the current summary window
    Summarize(SummarizeArgs),

    /// Token estimation and session budget utilities
    #[command(subcommand)]
    Tokens(TokensCommand),

    /// Chapter file utilities
    #[command(subcommand)]
    Chapters(ChaptersCommand),

    /// Project settings utilities
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Args)]
struct SummarizeArgs {
    /// Project directory
    project_dir: PathBuf,

    /// Start chapter; with no end chapter this is the current chapter and
    /// the containing summary window is targeted
    start: u32,

    /// End chapter (inclusive)
    end: Option<u32>,
}

#[derive(Subcommand)]
enum TokensCommand {
    /// Estimate the token cost of a text or a file
    Estimate(EstimateArgs),

    /// Show session token usage
    Usage(ProjectArgs),

    /// Compact the generator session when usage is past the threshold
    Compact(ProjectArgs),
}

#[derive(Args)]
struct EstimateArgs {
    /// Text to estimate
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project directory holding an optional saga.toml
    #[arg(default_value = ".")]
    project_dir: PathBuf,
}

#[derive(Subcommand)]
enum ChaptersCommand {
    /// List chapter files in a project
    List(ProjectArgs),
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the project's worldbuilding settings as JSON
    Show(ProjectArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let overrides = Overrides {
        generator: cli.generator,
        timeout_secs: cli.timeout_secs,
    };

    match cli.command {
        Commands::Summarize(args) => run_summarize(args, &overrides).await?,
        Commands::Tokens(TokensCommand::Estimate(args)) => run_estimate(&args)?,
        Commands::Tokens(TokensCommand::Usage(args)) => run_usage(&args, &overrides)?,
        Commands::Tokens(TokensCommand::Compact(args)) => run_compact(&args, &overrides).await?,
        Commands::Chapters(ChaptersCommand::List(args)) => run_list_chapters(&args)?,
        Commands::Settings(SettingsCommand::Show(args)) => run_show_settings(&args)?,
    }

    Ok(())
}

struct Overrides {
    generator: Option<String>,
    timeout_secs: Option<u64>,
}

fn load_config(project_dir: &Path, overrides: &Overrides) -> Result<AppConfig> {
    let mut config = config::load(project_dir)?;
    if let Some(command) = &overrides.generator {
        config.generator_command = command.clone();
    }
    if let Some(secs) = overrides.timeout_secs {
        config.generator_timeout = std::time::Duration::from_secs(secs);
    }
    Ok(config)
}

async fn run_summarize(args: SummarizeArgs, overrides: &Overrides) -> Result<()> {
    let config = load_config(&args.project_dir, overrides)?;
    let store = FsProjectStore::new(&args.project_dir);
    let budget = Arc::new(TokenBudget::new(config.budget.clone()));
    let generator = GatedGenerator::new(
        ProcessGenerator::new(&config.generator_command)
            .with_default_timeout(config.generator_timeout),
        Arc::clone(&budget),
    );
    let summarizer = Summarizer::new(config.summarizer.clone());

    match args.end {
        Some(end) => {
            let range = ChapterRange::new(args.start, end)
                .context("Invalid chapter range requested")?;
            let summary = summarizer
                .summarize_range(&store, &generator, range)
                .await
                .with_context(|| format!("Failed to summarize chapters {range}"))?;
            println!("Summary of chapters {range}:");
            println!();
            println!("{summary}");
        }
        None => {
            let outcome = summarizer
                .generate_summary(&store, &generator, args.start)
                .await
                .context("Failed to generate window summary")?;
            match outcome {
                SummaryOutcome::Created { range, path } => {
                    println!(
                        "Summary for chapters {range} written to {}",
                        path.display()
                    );
                }
                SummaryOutcome::AlreadyExists { range } => {
                    println!("Summary for chapters {range} already exists, skipped");
                }
            }
        }
    }

    let usage = budget.usage();
    log::info!(
        "Session tokens: {} used, {} available",
        usage.used,
        usage.available
    );
    Ok(())
}

fn run_estimate(args: &EstimateArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?,
        _ => anyhow::bail!("Provide either a text argument or --file"),
    };

    println!("{}", estimate_tokens(&text));
    Ok(())
}

fn run_usage(args: &ProjectArgs, overrides: &Overrides) -> Result<()> {
    let config = load_config(&args.project_dir, overrides)?;
    let budget = TokenBudget::new(config.budget);
    let usage = budget.usage();

    println!("Session token usage:");
    println!("  used:          {}", usage.used);
    println!("  available:     {}", usage.available);
    println!("  limit:         {}", usage.limit);
    println!("  safety margin: {}", usage.safety_margin);
    Ok(())
}

async fn run_compact(args: &ProjectArgs, overrides: &Overrides) -> Result<()> {
    let config = load_config(&args.project_dir, overrides)?;
    let budget = TokenBudget::new(config.budget);
    let compactor = ProcessCompactor::new(&config.generator_command);

    if auto_compact(&budget, &compactor).await? {
        println!("Session compaction done (or not needed)");
    } else {
        eprintln!("Session compaction failed");
        std::process::exit(1);
    }
    Ok(())
}

fn run_list_chapters(args: &ProjectArgs) -> Result<()> {
    let store = FsProjectStore::new(&args.project_dir);
    let files = store
        .list_chapter_files()
        .context("Cannot list chapter files")?;

    if files.is_empty() {
        println!("No chapter files found");
        return Ok(());
    }
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}

fn run_show_settings(args: &ProjectArgs) -> Result<()> {
    let store = FsProjectStore::new(&args.project_dir);
    let settings = store.load_settings().context("Cannot load settings")?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn summarize_accepts_optional_end_chapter() {
        let cli = Cli::parse_from(["saga", "summarize", "/tmp/project", "12"]);
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.start, 12);
                assert!(args.end.is_none());
            }
            _ => panic!("expected summarize"),
        }

        let cli = Cli::parse_from(["saga", "summarize", "/tmp/project", "1", "10"]);
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.start, 1);
                assert_eq!(args.end, Some(10));
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn estimate_rejects_text_and_file_together() {
        let result = Cli::try_parse_from([
            "saga", "tokens", "estimate", "some text", "--file", "a.md",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_generator_flag_parses() {
        let cli = Cli::parse_from([
            "saga",
            "--generator",
            "mock-ai",
            "--timeout-secs",
            "30",
            "tokens",
            "usage",
        ]);
        assert_eq!(cli.generator.as_deref(), Some("mock-ai"));
        assert_eq!(cli.timeout_secs, Some(30));
    }
}
