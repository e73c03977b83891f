mod summary;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notegraph_core::graph::write_graph;
use notegraph_core::{
    collect_documents, Config, CorpusIndexer, ExportFormat, MarkdownParser, NoteGraph,
};

#[derive(Parser, Debug)]
#[command(name = "notegraph")]
#[command(about = "Build a relationship graph from markdown notes")]
#[command(version)]
struct Cli {
    /// Directories to parse
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// Write the graph used for retrieval to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format for --output (dot or json)
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Config file (defaults to ./notegraph.toml, then the user config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort on the first document that fails to parse
    #[arg(long)]
    fail_fast: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    run(cli, &mut std::io::stdout().lock())
}

/// Parse every directory into one graph. Only the summary goes to `out`;
/// status messages are logged to stderr.
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut config = Config::load_from(cli.config.as_deref())?;
    if cli.fail_fast {
        config.corpus.continue_on_error = false;
    }
    let format = match cli.format {
        Some(format) => format,
        None => config.export.format()?,
    };

    for dir in &cli.dirs {
        if !dir.is_dir() {
            return Err(eyre!("not a directory: {}", dir.display()));
        }
    }

    // Flatten every directory into one list so the progress bar has a total
    let paths = collect_documents(&cli.dirs, &config.corpus);
    info!(files = paths.len(), "collected documents");

    let parser = Arc::new(MarkdownParser::with_config(config.parser.clone()));
    let indexer = CorpusIndexer::new(parser, config.corpus.clone());

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("=> "),
    );
    pb.set_message("Parsing Markdown Files");

    let mut graph = NoteGraph::new();
    let result = indexer.index_all(&paths, &mut graph, |_| pb.inc(1));
    pb.finish_and_clear();
    let stats = result?;

    if cli.json {
        writeln!(out, "{}", summary::to_json(&stats, &graph)?)?;
    } else {
        summary::print(out, &stats, &graph)?;
    }

    if let Some(output) = cli.output {
        let output = output_path(output, format);
        info!("Saving graph to {}", output.display());
        write_graph(&graph, &output, format)?;
    }

    Ok(())
}

/// Give an extension-less output path the format's extension.
fn output_path(path: PathBuf, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(format.extension())
    }
}
