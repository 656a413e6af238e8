//! Command implementations for the Madeira dashboard CLI.
//!
//! Provides subcommands for serving the dashboard over HTTP and for
//! validating a sales CSV without starting the server.

use clap::Subcommand;
use std::path::PathBuf;

pub mod check;
pub mod serve;

/// Default location of the sales dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "fixtures/acordo_nbr.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Path to the sales CSV (APRESENTACAO_NOME, MADEIRA_NOME, VOLUME, COD_MODELO)
        #[arg(short = 'f', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8050)]
        port: u16,
    },

    /// Load the sales CSV and report what it contains
    Check {
        /// Path to the sales CSV
        #[arg(short = 'f', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve { data, host, port } => serve::run_serve(&data, &host, port).await,
        Command::Check { data } => check::run_check(&data),
    }
}
