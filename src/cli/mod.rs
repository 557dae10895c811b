use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `emotebot` - HTTP command gateway for the emote bot.
#[derive(Parser, Debug)]
#[command(name = "emotebot")]
#[command(version)]
#[command(about = "Accepts bot commands over HTTP and acknowledges them.", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(long, global = true, env = "EMOTEBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP gateway (default)
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Run a single command locally and print the result
    Exec {
        /// Command text, e.g. `!e 123456789 909000001`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
