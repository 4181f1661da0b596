// src/cli/mod.rs — CLI definition (clap derive)

pub mod chat;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hodlbot", about = "Rule-based crypto Q&A chatbot", version)]
pub struct Cli {
    /// Config file path (defaults to ./hodlbot.toml when present)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port override
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Interactive chat session on stdin/stdout (the default)
    Chat,
}
