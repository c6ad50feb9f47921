//! Unit tests for newline-delimited decoding
//!
//! Tests the line-stream decoders over in-memory and mocked readers

use std::io;

use futures::StreamExt;
use tokio::io::BufReader;
use twitch_whisper::{
    DecodeError, Frame, ParserOptions, WhisperKind, WhisperParser, decode_frame_lines,
    decode_lines,
};

const THREAD: &str = r#"{"type":"thread","data":"{}","data_object":{"id":"t1","last_read":"456","archived":"false","muted":"true","spam_info":{"likelihood":"low","last_marked_not_spam":"789"}}}"#;
const UNKNOWN: &str = r#"{"type":"future_event","data":"{}"}"#;

#[tokio::test]
async fn test_decode_lines_in_order() {
    let _ = env_logger::builder().is_test(true).try_init();

    let input = format!("{THREAD}\n\n{UNKNOWN}\n   \n{THREAD}");
    let stream = decode_lines(input.as_bytes(), WhisperParser::default());
    let kinds: Vec<_> = stream
        .map(|event| event.unwrap().kind())
        .collect()
        .await;

    assert_eq!(
        kinds,
        vec![WhisperKind::Thread, WhisperKind::Unknown, WhisperKind::Thread]
    );
}

#[tokio::test]
async fn test_bad_line_does_not_end_stream() {
    let input = format!("{THREAD}\nnot json\n{{\"data\":\"{{}}\"}}\n{UNKNOWN}\n");
    let results: Vec<_> = decode_lines(input.as_bytes(), WhisperParser::default())
        .collect()
        .await;

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(DecodeError::Malformed(_))));
    assert!(matches!(results[2], Err(DecodeError::MissingField("type"))));
    assert_eq!(results[3].as_ref().unwrap().kind(), WhisperKind::Unknown);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_stream() {
    let mut input = Vec::new();
    input.extend_from_slice(UNKNOWN.as_bytes());
    input.extend_from_slice(b"\n\xff\xfe bad\n");
    input.extend_from_slice(THREAD.as_bytes());
    input.push(b'\n');

    let results: Vec<_> = decode_lines(input.as_slice(), WhisperParser::default())
        .collect()
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().kind(), WhisperKind::Unknown);
    assert!(matches!(results[1], Err(DecodeError::Malformed(_))));
    assert_eq!(results[2].as_ref().unwrap().kind(), WhisperKind::Thread);
}

#[tokio::test]
async fn test_oversized_line() {
    let parser = WhisperParser::new(ParserOptions::builder().max_payload_bytes(64).build());
    let input = format!("{THREAD}\n{UNKNOWN}\n");
    let results: Vec<_> = decode_lines(input.as_bytes(), parser).collect().await;

    assert!(matches!(
        results[0],
        Err(DecodeError::PayloadTooLarge { limit: 64, .. })
    ));
    assert!(results[1].is_ok());
}

#[tokio::test]
async fn test_io_error_ends_stream() {
    let reader = tokio_test::io::Builder::new()
        .read(format!("{UNKNOWN}\n").as_bytes())
        .read_error(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        .build();

    let results: Vec<_> = decode_lines(BufReader::new(reader), WhisperParser::default())
        .collect()
        .await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(DecodeError::Io(_))));
}

#[tokio::test]
async fn test_decode_frame_lines() {
    let input = "{\"type\":\"PONG\"}\n{\"type\":\"RECONNECT\"}\n";
    let frames: Vec<_> = decode_frame_lines(input.as_bytes(), WhisperParser::default())
        .map(Result::unwrap)
        .collect()
        .await;

    assert_eq!(frames, vec![Frame::Pong, Frame::Reconnect]);
}
