//! flip-pager CLI: paginate a chapter and print the page records as JSON

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flip_pager::{chapter_html, Dimensions, PaginationConfig, Paginator, SourcePage};

#[derive(Parser)]
#[command(name = "flip-pager")]
#[command(version, about = "Paginate book chapter HTML for page-flip readers", long_about = None)]
#[command(after_help = "EXAMPLES:
    flip-pager chapter.html -W 600 -H 900          Paginate an HTML chapter
    flip-pager pages.json --source -W 600 -H 900   Paginate API source pages
    RUST_LOG=flip_pager=debug flip-pager ...       Log pagination decisions")]
struct Cli {
    /// Input file; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Page container width in pixels
    #[arg(short = 'W', long)]
    width: f32,

    /// Page container height in pixels
    #[arg(short = 'H', long)]
    height: f32,

    /// JSON file overriding the line model
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input is a JSON array of source pages rather than HTML
    #[arg(short, long)]
    source: bool,

    /// Print raw pages of block markup instead of page records
    #[arg(long)]
    raw: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            PaginationConfig::from_json(&json).map_err(|e| e.to_string())?
        }
        None => PaginationConfig::default(),
    };
    let paginator = Paginator::new(config).map_err(|e| e.to_string())?;

    let input = read_input(cli.input.as_ref())?;
    let html = if cli.source {
        let pages: Vec<SourcePage> = serde_json::from_str(&input).map_err(|e| e.to_string())?;
        chapter_html(&pages)
    } else {
        input
    };

    let dimensions = Dimensions::new(cli.width, cli.height);
    let json = if cli.raw {
        let pages = paginator
            .break_into_pages(&html, dimensions)
            .map_err(|e| e.to_string())?;
        to_json(&pages, cli.pretty)?
    } else {
        let records = paginator
            .paginate(&html, dimensions)
            .map_err(|e| e.to_string())?;
        to_json(&records, cli.pretty)?
    };

    println!("{json}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(buf)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| e.to_string())
}
