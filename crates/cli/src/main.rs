// ABOUTME: CLI that renders a feed as Amazon-flavoured RSS 2.0.
// ABOUTME: Reads an RSS/Atom/JSON feed or a JSON feed model from URL, file or stdin.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use amzn_feed::{parse_feed_bytes, Feed};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

/// How the input bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// An existing RSS, Atom or JSON Feed document.
    Feed,
    /// The generic feed model serialized as JSON.
    Model,
}

/// Convert a feed into Amazon RSS.
#[derive(Parser, Debug)]
#[command(name = "amzn-feed")]
#[command(about = "Render a feed as Amazon RSS 2.0", long_about = None)]
struct Args {
    /// Feed URL (http/https) or local file path. Use "-" to read from stdin.
    target: String,

    /// How to read the input.
    #[arg(long, value_enum, default_value_t = InputFormat::Feed)]
    input: InputFormat,

    /// Write the document to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Reject feeds whose title, link or description is empty.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let bytes = load_bytes(&args.target)?;
    let feed = decode(&bytes, args.input)
        .with_context(|| format!("failed to read {}", args.target))?;
    debug!(source = %args.target, items = feed.items.len(), "loaded feed");

    if args.strict {
        feed.validate()?;
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            feed.write_amazon_rss(&mut sink)?;
            sink.write_all(b"\n")?;
            sink.flush()?;
            info!(path = %path.display(), "wrote amazon rss");
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            feed.write_amazon_rss(&mut sink)?;
            sink.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn decode(bytes: &[u8], input: InputFormat) -> Result<Feed> {
    match input {
        InputFormat::Feed => Ok(parse_feed_bytes(bytes)?),
        InputFormat::Model => serde_json::from_slice(bytes).context("invalid feed model JSON"),
    }
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        let bytes = resp.bytes()?;
        return Ok(bytes.to_vec());
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
