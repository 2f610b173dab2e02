use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use pagerfc::{Document, PagerError, Settings, TraceDiagnostics};

#[derive(Parser)]
#[command(name = "pagerfc", about = "Paginate text RFCs and fill in TOC page numbers")]
struct Cli {
    /// Trace widow and orphan decisions
    #[arg(short, long)]
    debug: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the page-break jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Show the RFC date in the running header
    #[arg(long)]
    header_date: bool,

    /// File to paginate, or - for stdin
    file: PathBuf,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: &Path) -> Result<String, PagerError> {
    let wrap = |source: io::Error| PagerError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(wrap)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(wrap)
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), PagerError> {
    match path {
        Some(path) => std::fs::write(path, text).map_err(|source| PagerError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| PagerError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    let t0 = Instant::now();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.header_date {
        settings.header_date = true;
    }

    let text = read_input(&cli.file)?;
    let doc = Document::from_text(&text);
    info!(file = %cli.file.display(), lines = doc.len(), "document loaded");

    let rendered = pagerfc::run(&doc, &settings, &mut TraceDiagnostics);
    write_output(cli.output.as_deref(), &rendered.to_text())?;

    info!(
        lines = rendered.lines().len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}
