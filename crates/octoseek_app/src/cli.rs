use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the octoseek binary.
#[derive(Debug, Parser)]
#[command(
    name = "octoseek",
    version,
    about = "Animated GitHub user search for the terminal"
)]
pub struct Args {
    /// Initial query; pre-fills the field and searches after the usual
    /// debounce window.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// GraphQL endpoint to search against.
    #[arg(
        long,
        value_name = "URL",
        default_value = "https://api.github.com/graphql"
    )]
    pub endpoint: String,

    /// API token; unauthenticated requests are heavily rate limited.
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Also list accounts that never set a display name.
    #[arg(long)]
    pub include_nameless: bool,

    /// Write logs to this file; without it logging stays off, since the
    /// terminal itself belongs to the UI.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
