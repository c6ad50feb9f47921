//! Decoding of newline-delimited whisper JSON
//!
//! Reads one JSON document per line from any async buffered reader and yields
//! a decode result per non-blank line, in input order. A line that fails to
//! decode, including one that is not valid UTF-8, yields an error and reading
//! continues; an I/O error ends the stream.

use futures::Stream;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::{DecodeError, Result};
use crate::message::{Frame, WhisperParser};
use crate::types::whisper::WhisperEvent;

/// Decode each line of `reader` as a whisper payload
///
/// # Example
///
/// ```no_run
/// use futures::StreamExt;
/// use tokio::io::BufReader;
/// use twitch_whisper::{WhisperParser, decode_lines};
///
/// # async fn example() {
/// let stdin = BufReader::new(tokio::io::stdin());
/// let mut events = Box::pin(decode_lines(stdin, WhisperParser::default()));
///
/// while let Some(event) = events.next().await {
///     match event {
///         Ok(event) => log::info!("{} event", event.kind()),
///         Err(e) => log::warn!("Skipping line: {e}"),
///     }
/// }
/// # }
/// ```
pub fn decode_lines<R>(reader: R, parser: WhisperParser) -> impl Stream<Item = Result<WhisperEvent>>
where
    R: AsyncBufRead + Unpin,
{
    decode_with(reader, move |line| parser.parse(line))
}

/// Decode each line of `reader` as a PubSub server frame
pub fn decode_frame_lines<R>(reader: R, parser: WhisperParser) -> impl Stream<Item = Result<Frame>>
where
    R: AsyncBufRead + Unpin,
{
    decode_with(reader, move |line| parser.parse_frame(line))
}

fn decode_with<R, T, F>(reader: R, decode: F) -> impl Stream<Item = Result<T>>
where
    R: AsyncBufRead + Unpin,
    F: Fn(&str) -> Result<T>,
{
    async_stream::stream! {
        let mut reader = reader;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break, // EOF
                Ok(_) => {
                    // Invalid UTF-8 is a bad record, not a failed read
                    let line = match std::str::from_utf8(&buf) {
                        Ok(line) => line.trim(),
                        Err(e) => {
                            yield Err(DecodeError::malformed(format!("invalid UTF-8: {e}")));
                            continue;
                        }
                    };
                    if line.is_empty() {
                        continue;
                    }
                    yield decode(line);
                }
                Err(e) => {
                    yield Err(DecodeError::Io(e));
                    break;
                }
            }
        }
    }
}
