// whisper-decode: decode newline-delimited Twitch PubSub whisper JSON
//
// Reads one JSON document per line from a file or stdin and prints each
// decoded value as normalized JSON on stdout. Decode failures are logged and
// skipped; only I/O failures end the run with an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use futures::{Stream, StreamExt};
use serde::Serialize;
use tokio::io::{AsyncBufRead, BufReader};
use twitch_whisper::{DecodeError, ParserOptions, WhisperParser, decode_frame_lines, decode_lines};

#[derive(Parser)]
#[command(name = "whisper-decode")]
#[command(about = "Decode Twitch PubSub whisper payloads to normalized JSON")]
struct Cli {
    /// Input file with one JSON document per line (default: stdin)
    input: Option<PathBuf>,

    /// Treat each line as a full PubSub server frame
    #[arg(long)]
    frames: bool,

    /// Pretty-print JSON output
    #[arg(long, short)]
    pretty: bool,

    /// Maximum accepted size of a single line in bytes
    #[arg(long)]
    max_payload_bytes: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut options = ParserOptions::builder();
    if let Some(bytes) = cli.max_payload_bytes {
        anyhow::ensure!(bytes > 0, "--max-payload-bytes must be greater than zero");
        options = options.max_payload_bytes(bytes);
    }
    let parser = WhisperParser::new(options.build());

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let (decoded, skipped) = if cli.frames {
        emit(decode_frame_lines(reader, parser), cli.pretty).await?
    } else {
        emit(decode_lines(reader, parser), cli.pretty).await?
    };

    log::info!("Decoded {decoded} record(s), skipped {skipped}");
    Ok(())
}

/// Print every decoded value, returning (decoded, skipped) counts
async fn emit<T, S>(stream: S, pretty: bool) -> Result<(usize, usize)>
where
    T: Serialize,
    S: Stream<Item = twitch_whisper::Result<T>>,
{
    let mut stream = Box::pin(stream);
    let mut record = 0usize;
    let mut decoded = 0usize;

    while let Some(item) = stream.next().await {
        record += 1;
        match item {
            Ok(value) => {
                let json = if pretty {
                    serde_json::to_string_pretty(&value)?
                } else {
                    serde_json::to_string(&value)?
                };
                println!("{json}");
                decoded += 1;
            }
            Err(DecodeError::Io(e)) => {
                return Err(e).context("Failed to read input");
            }
            Err(e) => {
                log::warn!("Record {record}: {e}");
            }
        }
    }

    Ok((decoded, record - decoded))
}
