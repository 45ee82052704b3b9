//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// F.R.A.N.K.I.E. - routes requests to specialist agents and desktop macros.
#[derive(Parser, Debug)]
#[command(name = "frankie")]
#[command(version)]
#[command(about = "Multi-agent productivity orchestrator")]
pub(crate) struct Cli {
    /// Run this request once and exit. Without it, start the interactive prompt.
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Send requests straight to one specialist (e.g. browser, news, code)
    #[arg(short, long)]
    pub agent: Option<String>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Configuration file (default: ~/.frankie/config.toml)
    #[arg(short, long, env = "FRANKIE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The one-shot request, if any words were given.
    pub fn one_shot(&self) -> Option<String> {
        let query = self.query.join(" ");
        let query = query.trim();
        (!query.is_empty()).then(|| query.to_string())
    }
}
