#![forbid(unsafe_code)]

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use consthash::clipboard;
use consthash::report::SelectionReport;

#[derive(Debug, Parser)]
#[command(name = "consthash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hash an editor selection into a static const u32 declaration")]
struct Cli {
    /// The selected text to hash.
    text: String,
    /// Print the result as JSON instead of the three plain lines.
    #[arg(short = 'j', long = "json")]
    json: bool,
    /// Skip copying the declaration to the clipboard.
    #[arg(long = "no-copy")]
    no_copy: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let report = SelectionReport::new(&cli.text);
    debug!("selection {:?} hashed to {}", cli.text, report.hash);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).unwrap_or_default();
        println!("{json}");
    } else {
        println!("{}", report.upper);
        println!("{}", report.hash);
        println!("{}", report.declaration);
    }

    if !cli.no_copy {
        if let Err(err) = clipboard::copy(&report.declaration) {
            eprintln!("Failed to copy to clipboard: {err}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
