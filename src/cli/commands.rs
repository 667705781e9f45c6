use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "AI news digest: summarized, ranked highlights from several feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources once and print the digest
    Run(RunArgs),

    /// Print the digest, then refresh on Enter until 'q'
    Watch(RunArgs),

    /// List the configured news sources
    Sources,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of top-scored entries to highlight
    #[arg(long, default_value_t = 3, env = "NEWSDESK_TOP_N", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub top_n: u8,

    /// Maximum number of entries taken from each source
    #[arg(long, default_value_t = 3, env = "NEWSDESK_PER_SOURCE", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub per_source: u8,

    /// Print the digest as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Skip the summarization model and use heuristic summaries only
    #[arg(long)]
    pub no_model: bool,
}
