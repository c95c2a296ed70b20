use anyhow::Result;
use clap::{Parser, Subcommand};
use docsearch::{build_server, load_documents, print_documents, read_console, run_demo};
use docsearch_core::{DocumentId, DocumentStatus};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "TF-IDF search over short rated documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the canned queries over the sample collection
    Demo,
    /// Read stop words, documents and a query from stdin
    Console,
    /// Search documents loaded from JSON/JSONL files
    Search {
        /// Input path (file or directory)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        query: String,
        /// Space-separated stop words
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Only documents with this status
        #[arg(long, default_value_t = DocumentStatus::Actual, conflicts_with = "even_ids")]
        status: DocumentStatus,
        /// Only documents with even ids, any status
        #[arg(long, default_value_t = false)]
        even_ids: bool,
        /// Print results as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show which query words a document matches
    Match {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        query: String,
        #[arg(long)]
        id: DocumentId,
        #[arg(long, default_value = "")]
        stop_words: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => run_demo(&mut out),
        Commands::Console => {
            let input = read_console(io::stdin().lock())?;
            let query = input.query.clone();
            let server = input.into_server();
            tracing::info!(num_docs = server.document_count(), "index built");
            print_documents(&mut out, &server.find_top_documents(&query), false)
        }
        Commands::Search { input, query, stop_words, status, even_ids, json } => {
            let server = build_server(&stop_words, &load_documents(&input)?);
            let hits = if even_ids {
                server.find_top_documents_with(&query, |id, _, _| id % 2 == 0)
            } else {
                server.find_top_documents_by_status(&query, status)
            };
            print_documents(&mut out, &hits, json)
        }
        Commands::Match { input, query, id, stop_words } => {
            let server = build_server(&stop_words, &load_documents(&input)?);
            let (words, status) = server.match_document(&query, id)?;
            let words = words.join(", ");
            writeln!(
                out,
                "{{ document_id = {id}, status = {status}, words = [{words}] }}"
            )?;
            Ok(())
        }
    }
}
