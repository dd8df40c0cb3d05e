mod cmd;
mod output;
mod root;

use clap::Parser;
use depbot_core::{Interval, Mode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "depbot",
    about = "Scaffold a Dependabot config or a workflow that generates one",
    version
)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Delivery mode: local or action (prompted when omitted)
    #[arg(long, short = 'm')]
    mode: Option<Mode>,

    /// Update interval: daily, weekly or monthly (prompted when omitted)
    #[arg(long, short = 'i')]
    interval: Option<Interval>,

    /// Output the result as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = cmd::scaffold::run(&root, cli.mode, cli.interval, cli.json);

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
