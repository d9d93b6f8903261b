// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use outline_rank::utils::logging::{format_error, format_field, format_success, format_warning};
use outline_rank::{
    CollectionPipeline, Config, OutlinePipeline, PipelineObserver, ProgressTracker,
    SHUTDOWN_GRACE, SchemaValidator,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "outline_rank")]
#[command(version)]
#[command(about = "Heading outlines and persona-driven section ranking for documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract heading outlines for every span dump in a directory
    Outline {
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Print the outline of a single document and save a copy
    Inspect {
        file: PathBuf,

        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
    },

    /// Rank the sections of one collection for its persona and task
    Rank { collection: PathBuf },

    /// Rank every collection directory under a root
    Collections {
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Print the JSON schema of an output record
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    Outline,
    Ranking,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Timed-out document loads keep their blocking threads, so the runtime
    // is shut down with a grace period instead of waiting for them.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(run(cli));
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    result
}

async fn run(cli: Cli) -> Result<()> {
    outline_rank::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Outline { input, output } => {
            let input = input.unwrap_or_else(|| config.paths.input_dir.clone());
            let output = output.unwrap_or_else(|| config.paths.output_dir.clone());
            cmd_outline(&config, input, output, cli.color)?;
        }
        Commands::Inspect { file, output } => {
            cmd_inspect(&config, file, output)?;
        }
        Commands::Rank { collection } => {
            cmd_rank(&config, collection, cli.color).await?;
        }
        Commands::Collections { root } => {
            let root = root.unwrap_or_else(|| config.paths.collections_root.clone());
            cmd_collections(&config, root).await?;
        }
        Commands::Schema { kind } => {
            cmd_schema(kind)?;
        }
    }

    Ok(())
}

fn cmd_outline(config: &Config, input: PathBuf, output: PathBuf, color: bool) -> Result<()> {
    info!(
        "Extracting outlines from {} into {}",
        input.display(),
        output.display()
    );

    let pipeline = OutlinePipeline::new(config);
    let total = pipeline
        .count_inputs(&input)
        .context("Failed to scan input directory")?;
    let tracker = Arc::new(ProgressTracker::with_color(total, color));
    let observer: Arc<dyn PipelineObserver> = tracker.clone();

    let stats = pipeline
        .with_observer(observer)
        .run(&input, &output)
        .context("Outline extraction failed")?;
    tracker.finish();

    println!(
        "{}",
        format_success(&format!(
            "{} documents outlined, {} headings found",
            stats.documents_processed, stats.headings_found
        ))
    );
    println!(
        "{}",
        format_field(
            "Throughput",
            &format!(
                "{:.1}% readable, {:.2} documents/s",
                stats.success_rate(),
                stats.documents_per_second()
            )
        )
    );
    if stats.documents_failed > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} documents could not be read",
                stats.documents_failed
            ))
        );
    }

    Ok(())
}

fn cmd_inspect(config: &Config, file: PathBuf, output: PathBuf) -> Result<()> {
    let (record, written) = OutlinePipeline::new(config)
        .inspect(&file, &output)
        .with_context(|| format!("Failed to outline {}", file.display()))?;

    println!("{}", format_field("Title", &record.title));
    println!(
        "{}",
        format_field("Headings", &record.outline.len().to_string())
    );
    if !record.outline.is_empty() {
        println!("{}", record.render_tree());
    }
    println!(
        "{}",
        format_success(&format!("Saved {}", written.display()))
    );

    Ok(())
}

async fn cmd_rank(config: &Config, collection: PathBuf, color: bool) -> Result<()> {
    let pipeline = CollectionPipeline::new(config);
    let input = pipeline
        .read_input(&collection)
        .with_context(|| format!("Invalid collection {}", collection.display()))?;

    let tracker = Arc::new(ProgressTracker::with_color(input.documents.len(), color));
    let observer: Arc<dyn PipelineObserver> = tracker.clone();
    let outcome = pipeline
        .with_observer(observer)
        .run(&collection)
        .await
        .with_context(|| format!("Ranking failed for {}", collection.display()))?;
    tracker.finish();

    for section in &outcome.record.extracted_sections {
        println!(
            "{:>2}. {} ({}, page {})",
            section.importance_rank, section.section_title, section.document, section.page_number
        );
    }
    println!(
        "{}",
        format_success(&format!("Saved {}", outcome.output_path.display()))
    );

    Ok(())
}

async fn cmd_collections(config: &Config, root: PathBuf) -> Result<()> {
    let summary = CollectionPipeline::new(config)
        .run_all(&root)
        .await
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    for path in &summary.completed {
        println!("{}", format_success(&path.display().to_string()));
    }
    for (path, reason) in &summary.failed {
        println!(
            "{}",
            format_error(&format!("{}: {}", path.display(), reason))
        );
    }

    if !summary.failed.is_empty() {
        anyhow::bail!("{} collections failed", summary.failed.len());
    }

    Ok(())
}

fn cmd_schema(kind: SchemaKind) -> Result<()> {
    let validator = match kind {
        SchemaKind::Outline => SchemaValidator::outline()?,
        SchemaKind::Ranking => SchemaValidator::ranking()?,
    };

    println!("{}", serde_json::to_string_pretty(validator.schema())?);
    Ok(())
}
