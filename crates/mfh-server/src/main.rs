//! Micro-frontend host edge server
//!
//! Serves the host application's static shell and rewrites the remote entry
//! placeholder in HTML/JS responses with the URL currently published in the
//! configuration store, so remote redeploys reach the host without a host
//! redeploy.

// Force-link mfh-providers to ensure linkme registrations are included
extern crate mfh_providers;

use clap::Parser;
use mfh_server::run;

/// Command line interface for the host edge
#[derive(Parser, Debug)]
#[command(name = "mfh")]
#[command(about = "Micro-frontend host edge - serves the host shell and injects remote entry URLs")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.port).await
}
