//! kvpath CLI
//!
//! Command surface over the resolver: parses subcommands into typed
//! requests, opens one store per invocation and prints results as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use kvpath::{resolve, Config, KvPathError, Operation, Resolved, Store};

/// kvpath CLI
#[derive(Parser, Debug)]
#[command(name = "kvpath")]
#[command(about = "JSON objects in an embedded ordered key-value store")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get the value stored under a path, or list everything beneath it
    Get {
        /// The path to resolve
        path: String,

        /// Directory where the database is
        #[arg(short, long, default_value = "")]
        dir: PathBuf,
    },

    /// Insert or update the value stored under a path
    Set {
        /// The path to write under
        path: String,

        /// The value to store, as JSON text
        value: String,

        /// Directory where the database is
        #[arg(short, long, default_value = "")]
        dir: PathBuf,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kvpath=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Execute one subcommand
///
/// The store is opened inside this function so it is dropped, and the
/// engine lock released, on every return path before the process exits.
fn run(args: Args) -> kvpath::Result<()> {
    match args.command {
        Commands::Get { path, dir } => {
            if path.is_empty() {
                return Err(KvPathError::Argument("path".to_string()));
            }

            let config = Config::builder().data_dir(dir).build();
            let store = Store::open(&config)?;

            match resolve(&store, path.as_bytes(), Operation::Get)? {
                Resolved::Value(value) => {
                    println!("{}", serde_json::to_string(&value)?);
                }
                Resolved::Listing(values) if values.is_empty() => {
                    eprintln!("nothing found under '{path}'");
                    return Err(KvPathError::KeyNotFound);
                }
                Resolved::Listing(values) => {
                    println!("{}", serde_json::to_string(&values)?);
                }
            }
            Ok(())
        }

        Commands::Set { path, value, dir } => {
            if path.is_empty() {
                return Err(KvPathError::Argument("path".to_string()));
            }
            if value.is_empty() {
                return Err(KvPathError::Argument("value".to_string()));
            }

            // Validate the payload before touching storage
            let parsed = kvpath::codec::parse(&value)?;

            let config = Config::builder().data_dir(dir).build();
            let store = Store::open(&config)?;

            resolve(&store, path.as_bytes(), Operation::Set { value: parsed })?;
            tracing::info!(%path, "value stored");
            Ok(())
        }
    }
}
