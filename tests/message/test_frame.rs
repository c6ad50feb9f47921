//! Unit tests for PubSub frame parsing
//!
//! Tests unwrapping of server frames and routing of whispers topic messages

use serde_json::json;
use twitch_whisper::{DecodeError, Frame, TopicPayload, WhisperKind, parse_frame};

fn message_frame(topic: &str, message: &serde_json::Value) -> String {
    json!({
        "type": "MESSAGE",
        "data": {
            "topic": topic,
            "message": message.to_string()
        }
    })
    .to_string()
}

fn thread_payload() -> serde_json::Value {
    json!({
        "type": "thread",
        "data": "{}",
        "data_object": {
            "id": "12_34",
            "last_read": 1,
            "archived": false,
            "muted": false,
            "spam_info": {"likelihood": "low", "last_marked_not_spam": 0}
        }
    })
}

#[test]
fn test_whisper_message_frame() {
    let frame = parse_frame(&message_frame("whispers.44322889", &thread_payload())).unwrap();

    let Frame::Message(message) = frame else {
        panic!("expected a MESSAGE frame");
    };
    assert_eq!(message.topic, "whispers.44322889");
    assert_eq!(message.topic_name(), "whispers");
    assert_eq!(message.topic_argument(), Some("44322889"));

    let event = message.whisper().unwrap();
    assert_eq!(event.kind(), WhisperKind::Thread);

    let (a, b) = event.thread().unwrap().id.participants().unwrap();
    assert_eq!(a.as_str(), "12");
    assert_eq!(b.as_str(), "34");
}

#[test]
fn test_other_topic_kept_verbatim() {
    let payload = json!({"type": "reward-redeemed"});
    let frame = parse_frame(&message_frame("channel-points-channel-v1.1", &payload)).unwrap();

    let Frame::Message(message) = frame else {
        panic!("expected a MESSAGE frame");
    };
    assert!(message.whisper().is_none());
    assert_eq!(message.payload, TopicPayload::Other(payload.to_string()));
}

#[test]
fn test_whisper_decode_error_propagates() {
    let payload = json!({"type": "thread", "data": "{}"});
    let result = parse_frame(&message_frame("whispers.1", &payload));
    assert!(matches!(result, Err(DecodeError::MissingField("data_object"))));
}

#[test]
fn test_message_frame_requires_topic() {
    let text = json!({"type": "MESSAGE", "data": {"message": "{}"}}).to_string();
    assert!(matches!(
        parse_frame(&text),
        Err(DecodeError::MissingField("topic"))
    ));
}

#[test]
fn test_control_frames() {
    assert_eq!(parse_frame(r#"{"type":"PONG"}"#).unwrap(), Frame::Pong);
    assert_eq!(parse_frame(r#"{"type":"RECONNECT"}"#).unwrap(), Frame::Reconnect);

    let ok = parse_frame(r#"{"type":"RESPONSE","error":"","nonce":"n1"}"#).unwrap();
    assert_eq!(
        ok,
        Frame::Response {
            nonce: Some("n1".to_string()),
            error: None,
        }
    );

    let failed = parse_frame(r#"{"type":"RESPONSE","error":"ERR_BADAUTH","nonce":"n2"}"#).unwrap();
    assert_eq!(
        failed,
        Frame::Response {
            nonce: Some("n2".to_string()),
            error: Some("ERR_BADAUTH".to_string()),
        }
    );
}

#[test]
fn test_unknown_frame_type() {
    let frame = parse_frame(r#"{"type":"AUTH_REVOKED"}"#).unwrap();
    assert_eq!(
        frame,
        Frame::Unknown {
            frame_type: "AUTH_REVOKED".to_string(),
        }
    );
}
