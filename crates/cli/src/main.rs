use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use policy_doc_chunker::DocumentChunker;
use policy_segment_store::{
    collection_schema, segments_from_chunks, JsonlSink, SegmentIngestor, SegmentSink,
};
use std::path::PathBuf;

mod upload;

#[derive(Parser)]
#[command(name = "policy-context")]
#[command(about = "Structural chunking for policy document retrieval", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a document and print the chunks as JSON
    Chunk(ChunkArgs),

    /// Chunk a document and ingest the segments into a JSONL sink
    Ingest(IngestArgs),

    /// Print the segment collection schema as JSON
    Schema,

    /// Chunk a document and print a summary line
    Stats(StatsArgs),
}

#[derive(Args)]
struct ChunkArgs {
    /// Document to chunk (.txt, .md, .markdown)
    file: PathBuf,

    /// Source page number recorded on every chunk
    #[arg(long, default_value_t = DocumentChunker::DEFAULT_SOURCE_PAGE)]
    page: u32,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct IngestArgs {
    /// Document to chunk and ingest
    file: PathBuf,

    /// JSONL file receiving the segments
    #[arg(long, short)]
    out: PathBuf,

    /// Source page number recorded on every chunk
    #[arg(long, default_value_t = DocumentChunker::DEFAULT_SOURCE_PAGE)]
    page: u32,

    /// Remove previously ingested segments first
    #[arg(long)]
    clear: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Document to chunk
    file: PathBuf,

    /// Source page number recorded on every chunk
    #[arg(long, default_value_t = DocumentChunker::DEFAULT_SOURCE_PAGE)]
    page: u32,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Chunk(args) => run_chunk(&args),
        Commands::Ingest(args) => run_ingest(&args).await,
        Commands::Schema => run_schema(),
        Commands::Stats(args) => run_stats(&args),
    }
}

fn run_chunk(args: &ChunkArgs) -> Result<()> {
    let text = upload::read_document(&args.file)?;
    let chunks = DocumentChunker::new().chunk_document_with_page(&text, args.page);

    if chunks.is_empty() {
        log::warn!("document produced no chunks");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&chunks)?
    } else {
        serde_json::to_string(&chunks)?
    };
    println!("{json}");
    Ok(())
}

async fn run_ingest(args: &IngestArgs) -> Result<()> {
    let text = upload::read_document(&args.file)?;
    let chunks = DocumentChunker::new().chunk_document_with_page(&text, args.page);

    if chunks.is_empty() {
        log::warn!("document produced no chunks; nothing to ingest");
    }

    let segments = segments_from_chunks(&chunks);
    let mut sink = JsonlSink::open(&args.out, args.clear).await?;
    let report = SegmentIngestor::default().ingest(&mut sink, &segments).await;

    let total = sink.count().await?;
    log::info!("sink now holds {total} segments");

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn run_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&collection_schema())?);
    Ok(())
}

fn run_stats(args: &StatsArgs) -> Result<()> {
    let text = upload::read_document(&args.file)?;
    let chunks = DocumentChunker::new().chunk_document_with_page(&text, args.page);
    println!("{}", DocumentChunker::get_stats(&chunks));
    Ok(())
}
