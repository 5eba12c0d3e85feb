use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ledger-core")]
#[command(about = "In-memory banking transaction record service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the resolved configuration
    Config,
}
