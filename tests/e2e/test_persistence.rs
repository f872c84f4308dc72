use crate::e2e::helpers;

use helpers::{assert_persisted_shape, option_variants, ssml_options};
use pretty_assertions::assert_eq;
use serde_json::json;
use voice_options::{PersistedOptions, RequestOptions, VoiceError, VoiceId};

#[test]
fn it_should_round_trip_every_variant() {
    for options in option_variants() {
        let decoded = RequestOptions::decode(&options.encode()).unwrap();
        assert_eq!(decoded, options);
    }
}

#[test]
fn it_should_round_trip_every_voice() {
    for voice in VoiceId::ALL {
        let options = RequestOptions::new("hello").with_voice_id(voice);
        assert_eq!(RequestOptions::decode(&options.encode()).unwrap(), options);
    }
}

#[test]
fn it_should_round_trip_through_json() {
    let options = ssml_options();
    let json = options.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_persisted_shape(&value);
    assert_eq!(value["outputFormat"], "ogg_vorbis");

    assert_eq!(RequestOptions::from_json(&json).unwrap(), options);
}

#[test]
fn it_should_reject_unrecognized_tokens() {
    let cases = [
        (json!({ "text": "hi", "textType": "SSML", "voiceId": "joanna", "outputFormat": "mp3" }), "textType"),
        (json!({ "text": "hi", "textType": "text", "voiceId": "joanna", "outputFormat": "wav" }), "outputFormat"),
        (json!({ "text": "hi", "textType": "text", "voiceId": "Joanna", "outputFormat": "mp3" }), "voiceId"),
        (json!({ "text": "hi", "textType": "text", "voiceId": 7, "outputFormat": "mp3" }), "voiceId"),
    ];

    for (value, field) in cases {
        let persisted: PersistedOptions = serde_json::from_value(value).unwrap();
        let err = RequestOptions::decode(&persisted).unwrap_err();
        assert_eq!(err.failed_fields(), &[field]);
    }
}

#[test]
fn it_should_not_partially_decode() {
    let result = RequestOptions::from_json(r#"{"text":"hi","textType":"text"}"#);

    match result {
        Err(VoiceError::Decode { fields }) => assert_eq!(fields, vec!["outputFormat", "voiceId"]),
        other => panic!("Expected decode failure, got {:?}", other),
    }
}

#[test]
fn it_should_accept_empty_and_missing_text() {
    let empty = RequestOptions::from_json(
        r#"{"text":"","textType":"text","voiceId":"joanna","outputFormat":"mp3"}"#,
    )
    .unwrap();
    assert_eq!(empty.text, "");

    let missing =
        RequestOptions::from_json(r#"{"textType":"text","voiceId":"joanna","outputFormat":"mp3"}"#)
            .unwrap();
    assert_eq!(missing, empty);
}

#[test]
fn it_should_report_malformed_json() {
    let err = RequestOptions::from_json("{not json").unwrap_err();
    assert!(matches!(err, VoiceError::Serialization(_)));
}
