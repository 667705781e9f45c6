use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsdesk::cli::{Cli, Commands, RunArgs};
use newsdesk::config::Config;
use newsdesk::errors::DeskResult;
use newsdesk::services::{now_string, render_json, render_text, AggregationService, SummaryService};
use newsdesk::sources::RssAtomSource;
use newsdesk::summarizer::ModelHandle;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for the digest
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,newsdesk=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run() -> DeskResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    match cli.command {
        Commands::Run(args) => cmd_run(&config, &args),
        Commands::Watch(args) => cmd_watch(&config, &args),
        Commands::Sources => cmd_sources(&config),
    }
}

fn build_service(config: &Config, args: &RunArgs) -> AggregationService<RssAtomSource> {
    let model = if args.no_model {
        ModelHandle::unavailable()
    } else {
        ModelHandle::from_config(&config.model)
    };

    AggregationService::new(RssAtomSource::new(), SummaryService::new(model))
}

fn render_pass(
    service: &AggregationService<RssAtomSource>,
    config: &Config,
    args: &RunArgs,
) -> DeskResult<()> {
    let digest = service.aggregate(
        &config.sources,
        usize::from(args.per_source),
        usize::from(args.top_n),
    );
    let now = now_string();

    if args.json {
        println!("{}", render_json(&digest, &now)?);
    } else {
        print!("{}", render_text(&digest, &now));
    }

    Ok(())
}

fn cmd_run(config: &Config, args: &RunArgs) -> DeskResult<()> {
    let service = build_service(config, args);
    render_pass(&service, config, args)
}

fn cmd_watch(config: &Config, args: &RunArgs) -> DeskResult<()> {
    // One service for the whole session so the model is acquired only once
    let service = build_service(config, args);

    loop {
        render_pass(&service, config, args)?;

        print!("Press Enter to refresh, or 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;

        if read == 0 || input.trim().eq_ignore_ascii_case("q") {
            println!();
            return Ok(());
        }

        println!();
    }
}

fn cmd_sources(config: &Config) -> DeskResult<()> {
    println!("Configured sources:\n");
    for (i, source) in config.sources.iter().enumerate() {
        println!("  {}. {}", i + 1, source.name);
        println!("     {}", source.url);
    }

    Ok(())
}
