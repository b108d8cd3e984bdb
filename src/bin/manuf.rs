mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_inspect, cmd_lookup, cmd_update};

#[derive(Parser)]
#[command(name = "manuf")]
#[command(
    about = "Resolve MAC addresses to manufacturer names",
    long_about = "manuf - Resolve MAC addresses to manufacturer names\n\n\
    Looks hardware addresses up in the Wireshark manufacturer registry, \n\
    downloading it into a local cache on first use. Prefix blocks are \n\
    matched at 24-, 28- and 36-bit granularity, most specific first.\n\n\
    Examples:\n\
      manuf lookup 8C:1F:64:DC:71:22\n\
      manuf lookup fc:d2:b6:20:11:22 --json\n\
      manuf update\n\
      manuf inspect --json"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a hardware address to its manufacturer
    Lookup {
        /// Hardware address in colon-separated hex form
        #[arg(value_name = "ADDRESS")]
        address: String,

        /// Registry file to use instead of the default cache
        #[arg(long, value_name = "FILE")]
        db: Option<PathBuf>,

        /// Upstream URL for the first-use download
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Never download; fail if the registry is not cached
        #[arg(long)]
        offline: bool,

        /// Re-download the registry before resolving
        #[arg(long)]
        refresh: bool,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,

        /// Quiet mode - no output, only exit code (0 = found, 1 = not found)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Download the latest registry into the local cache
    Update {
        /// Cache file to write instead of the default
        #[arg(long, value_name = "FILE")]
        db: Option<PathBuf>,

        /// Upstream URL to download from
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },

    /// Show statistics about the cached registry
    Inspect {
        /// Registry file to inspect instead of the default cache
        #[arg(long, value_name = "FILE")]
        db: Option<PathBuf>,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manuf=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            address,
            db,
            url,
            offline,
            refresh,
            json,
            quiet,
        } => cmd_lookup(address, db, url, offline, refresh, json, quiet),
        Commands::Update { db, url } => cmd_update(db, url),
        Commands::Inspect { db, json } => cmd_inspect(db, json),
    }
}
