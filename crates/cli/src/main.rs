use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use sift_core::fetch::DEFAULT_USER_AGENT;
use sift_core::{Config, Document, ExtractConfig, FetchConfig, Pipeline, extract_text_with_config};
use sift_core::{fetch_file, fetch_stdin, fetch_url};
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ask questions of the web and get cited answers
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author = "Sift Contributors")]
#[command(version)]
#[command(about = "Answers from the web, with sources", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the web and generate an answer with sources
    Ask(AskArgs),
    /// Extract readable text from a URL, local HTML file, or stdin
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
struct AskArgs {
    /// The question or search query
    #[arg(value_name = "QUERY")]
    query: String,

    /// Answer from search snippets without fetching pages
    #[arg(long)]
    no_enrich: bool,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum characters of text before truncation
    #[arg(long, default_value = "2000", value_name = "NUM")]
    max_chars: usize,

    /// Minimum characters for a content selector to be accepted
    #[arg(long, default_value = "200", value_name = "NUM")]
    min_chars: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sift_core=debug,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        echo::print_banner();
    }

    let result = match cli.command {
        Command::Ask(args) => run_ask(args, cli.verbose).await,
        Command::Extract(args) => run_extract(args, cli.verbose).await,
    };

    if let Err(err) = result {
        echo::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }

    Ok(())
}

async fn run_ask(args: AskArgs, verbose: bool) -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let mut pipeline = Pipeline::from_config(&config).context("Failed to build query pipeline")?;
    if args.no_enrich {
        pipeline = pipeline.without_enrichment();
    }

    if verbose {
        let search = pipeline.search_service().active_backend().map_or("none", |b| b.name());
        let answer = pipeline.answer_service().active_backend().map_or("none", |b| b.name());
        echo::print_info(&format!("Search backend: {search}, answer backend: {answer}"));
        if search == "demo" {
            echo::print_warning("No search API key configured, using demo results");
        }
        echo::print_step(1, 1, &format!("Asking {}", args.query.bright_white()));
    }

    let started = Instant::now();
    let response = pipeline.run(&args.query).await.context("Search failed")?;

    if verbose {
        let enriched = response.sources.iter().filter(|s| s.content.is_some()).count();
        echo::print_detail("Sources", &format!("{} ({} enriched)", response.sources.len(), enriched));
        echo::print_detail("Elapsed", &format!("{:.2}s", started.elapsed().as_secs_f64()));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        echo::print_response(&response);
    }

    Ok(())
}

fn is_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

async fn run_extract(args: ExtractArgs, verbose: bool) -> anyhow::Result<()> {
    let html = if args.input == "-" {
        if verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else if is_url(&args.input) {
        if verbose {
            echo::print_step(1, 3, &format!("Fetching from {}", args.input.bright_white().underline()));
        }
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };
        fetch_url(&args.input, &config).await.context("Failed to fetch URL")?
    } else {
        if verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
        if let Some(title) = Document::parse(&html).title() {
            echo::print_detail("Title", title.trim());
        }
        echo::print_step(2, 3, "Extracting main content");
    }

    let config = ExtractConfig { min_chars: args.min_chars, max_chars: args.max_chars, ..Default::default() };
    let text = extract_text_with_config(&html, &config);

    if text.is_empty() {
        echo::print_warning("No readable text found");
    }

    if verbose {
        echo::print_detail("Characters", &text.chars().count().to_string());
        echo::print_step(3, 3, "Writing output");
    }

    match args.output {
        Some(path) => {
            fs::write(&path, &text).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => println!("{text}"),
    }

    Ok(())
}
