//! webgenie CLI - sortable BEELINE benchmark tables in the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod error;
mod output;
mod validation;

use output::Format;
use webgenie_core::{
    load_rows_from_file, mock_catalog, presets, BenchmarkCatalog, Column, Metric, Row,
    SortableTable, DEFAULT_DATASET,
};

/// webgenie: compare GRN inference benchmark results
#[derive(Parser, Debug)]
#[command(name = "webgenie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON array of rows as a sortable table
    Table(TableArgs),
    /// Show algorithm performance for a dataset
    Metrics(MetricsArgs),
    /// List benchmark datasets
    Datasets(DatasetsArgs),
    /// Show the top predicted edges of the showcased run
    Edges(EdgesArgs),
    /// Write the built-in mock catalog as JSON
    Mock(MockArgs),
}

/// Options shared by every table command
#[derive(Parser, Debug)]
struct ViewArgs {
    /// Activate a column header; repeat to toggle (asc, desc, asc, ...)
    #[arg(long = "click", value_name = "KEY")]
    clicks: Vec<String>,

    #[arg(short, long, value_enum, default_value = "markdown")]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TableArgs {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Column as `key` or `key:Label`, in display order (default: every key)
    #[arg(short, long = "column", value_name = "SPEC")]
    columns: Vec<String>,

    /// Keys whose headers do not sort
    #[arg(long = "no-sort", value_name = "KEY")]
    no_sort: Vec<String>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct MetricsArgs {
    #[arg(short, long, env = "WEBGENIE_DATASET", default_value = DEFAULT_DATASET)]
    dataset: String,

    /// Metric columns to show (default: auprc, auroc, f1, precision, recall)
    #[arg(short, long = "metric", value_name = "METRIC")]
    metrics: Vec<Metric>,

    /// Catalog JSON to read instead of the built-in mock data
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct DatasetsArgs {
    /// Case-insensitive match on name or organism
    #[arg(short, long, default_value = "")]
    search: String,

    #[arg(long)]
    organism: Option<String>,

    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct EdgesArgs {
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct MockArgs {
    #[arg(short, long, default_value = "webgenie-catalog.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Table(args) => table_command(args),
        Commands::Metrics(args) => metrics_command(args),
        Commands::Datasets(args) => datasets_command(args),
        Commands::Edges(args) => edges_command(args),
        Commands::Mock(args) => mock_command(args),
    }
}

fn table_command(args: TableArgs) -> Result<()> {
    let rows = load_rows_from_file(&args.input)
        .with_context(|| format!("Failed to read rows from {:?}", args.input))?;
    info!("Loaded {} rows from {:?}", rows.len(), args.input);

    let columns = if args.columns.is_empty() {
        validation::infer_columns(&rows, &args.no_sort)
    } else {
        validation::parse_columns(&args.columns, &args.no_sort)?
    };
    debug!("Columns: {:?}", columns);

    emit(columns, &rows, &args.view)
}

fn metrics_command(args: MetricsArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let dataset = catalog
        .dataset(&args.dataset)
        .with_context(|| format!("Dataset '{}' not found", args.dataset))?;

    let selected = if args.metrics.is_empty() {
        Metric::DEFAULT_SELECTION.to_vec()
    } else {
        args.metrics.clone()
    };

    let rows: Vec<Row> = catalog
        .performance_for(&dataset.id)
        .iter()
        .map(|m| m.to_row())
        .collect();
    info!(
        "{} algorithms benchmarked on {} ({})",
        rows.len(),
        dataset.name,
        dataset.organism
    );

    emit(presets::performance_columns(&selected), &rows, &args.view)
}

fn datasets_command(args: DatasetsArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let rows: Vec<Row> = catalog
        .filter_datasets(&args.search, args.organism.as_deref())
        .into_iter()
        .map(|d| d.to_row())
        .collect();
    debug!(
        "{} of {} datasets match the filter",
        rows.len(),
        catalog.datasets.len()
    );

    emit(presets::dataset_columns(), &rows, &args.view)
}

fn edges_command(args: EdgesArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let rows: Vec<Row> = catalog.top_edges.iter().map(|e| e.to_row()).collect();

    emit(presets::edge_columns(), &rows, &args.view)
}

fn mock_command(args: MockArgs) -> Result<()> {
    let catalog = mock_catalog();
    catalog
        .save_to_file(&args.out)
        .with_context(|| "Failed to save mock catalog")?;

    info!(
        "Wrote {} datasets and {} algorithms to {:?}",
        catalog.datasets.len(),
        catalog.algorithms.len(),
        args.out
    );
    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<BenchmarkCatalog> {
    match path {
        Some(path) => BenchmarkCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {:?}", path)),
        None => Ok(mock_catalog()),
    }
}

/// Apply header clicks, render and print or write the table
fn emit(columns: Vec<Column<String>>, rows: &[Row], args: &ViewArgs) -> Result<()> {
    let mut table = SortableTable::new(columns);

    for key in &args.clicks {
        if !table.click_header(key) {
            warn!("Column '{}' is not sortable, ignoring click", key);
        }
    }
    if let Some(key) = table.sort_state().active_key() {
        debug!("Sorted by {} ({:?})", key, table.sort_state().direction());
    }

    let text = output::render(&table.view(rows), args.format)?;

    match &args.output {
        Some(path) => {
            output::write_output(path, &text)?;
            info!("Saved table to {:?}", path);
        }
        None => println!("{}", text),
    }

    Ok(())
}
