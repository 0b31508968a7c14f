use book_finder::config::Config;
use book_finder::repl::{run_interactive, run_once};
use book_finder::routes::{build_router, AppState};
use book_finder::services::catalog::OpenLibraryClient;
use book_finder::view::render::CoverUrls;
use book_finder::view::state::{Catalog, SearchView};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "book-finder", version, about = "Search the Open Library catalog by title")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one search and print the results
    Search {
        /// Title to search for; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Read titles from stdin, one search per line (default)
    Interactive,
    /// Serve the search page over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("book_finder=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    let catalog: Catalog = Arc::new(OpenLibraryClient::new(config.catalog_url.clone()));
    let covers = CoverUrls::new(config.covers_url.clone());

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search { title } => {
            run_once(SearchView::new(catalog), &covers, &title, tokio::io::stdout()).await?;
        }
        Command::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            run_interactive(SearchView::new(catalog), covers, input, tokio::io::stdout()).await?;
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let app = build_router(AppState { catalog, covers });
            let addr = config.bind_addr();

            info!("Book finder starting on {} (catalog {})", addr, config.catalog_url);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
