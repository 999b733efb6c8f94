// Unit tests for the pure pipeline stages: request validation and
// response normalization.
//
// No network, no provider — these exercise exactly the functions that
// run before and after the upstream call.

use extrakt::error::ExtractError;
use extrakt::normalize::{topics_from_completion_text, topics_from_tool_arguments};
use extrakt::request::parse_transcript;

// ============================================================
// parse_transcript — admission gate
// ============================================================

#[test]
fn validator_accepts_real_transcript() {
    let body = r#"{"transcript": "Schüler berichtet über Mobbing in der Schule."}"#.as_bytes();
    let transcript = parse_transcript(body).unwrap();
    assert_eq!(transcript, "Schüler berichtet über Mobbing in der Schule.");
}

#[test]
fn validator_rejects_empty_and_whitespace() {
    let bodies: [&[u8]; 3] = [
        br#"{"transcript": ""}"#,
        br#"{"transcript": " "}"#,
        br#"{"transcript": "\n\t  "}"#,
    ];
    for body in bodies {
        let err = parse_transcript(body).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput));
        assert_eq!(err.to_string(), "Kein Transkript zum Analysieren vorhanden");
    }
}

#[test]
fn validator_rejects_missing_or_mistyped_field() {
    let bodies: [&[u8]; 6] = [
        b"{}",
        br#"{"transcript": 7}"#,
        br#"{"transcript": {"text": "x"}}"#,
        b"[1,2,3]",
        b"garbage",
        b"",
    ];
    for body in bodies {
        assert!(
            matches!(parse_transcript(body), Err(ExtractError::InvalidInput)),
            "body {:?} should be invalid",
            String::from_utf8_lossy(body)
        );
    }
}

// ============================================================
// topics_from_tool_arguments — strict, schema-backed path
// ============================================================

#[test]
fn tool_arguments_happy_path_preserves_order() {
    let raw = r#"{"topics": ["C: drittes", "A: erstes", "B: zweites"]}"#;
    let topics = topics_from_tool_arguments(raw).unwrap();
    assert_eq!(topics, vec!["C: drittes", "A: erstes", "B: zweites"]);
}

#[test]
fn tool_arguments_without_topics_field_are_malformed() {
    let err = topics_from_tool_arguments(r#"{"themes": ["A: a"]}"#).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn tool_arguments_with_non_string_elements_are_malformed() {
    let err = topics_from_tool_arguments(r#"{"topics": ["A: a", 2]}"#).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn tool_arguments_with_empty_array_are_malformed() {
    let err = topics_from_tool_arguments(r#"{"topics": []}"#).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn tool_arguments_invalid_json_is_malformed() {
    let err = topics_from_tool_arguments("{not json").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

// ============================================================
// topics_from_completion_text — ordered shape fallback
// ============================================================

#[test]
fn completion_bare_array_is_used_as_is() {
    let raw = r#"["A: a", "B: b"]"#;
    assert_eq!(
        topics_from_completion_text(raw).unwrap(),
        vec!["A: a", "B: b"]
    );
}

#[test]
fn completion_tolerates_surrounding_whitespace() {
    let raw = "\n  [\"A: a\", \"B: b\"]  \n";
    assert_eq!(
        topics_from_completion_text(raw).unwrap(),
        vec!["A: a", "B: b"]
    );
}

#[test]
fn completion_topics_object_is_unwrapped() {
    let raw = r#"{"topics": ["A: a", "B: b", "C: c"]}"#;
    assert_eq!(
        topics_from_completion_text(raw).unwrap(),
        vec!["A: a", "B: b", "C: c"]
    );
}

#[test]
fn completion_numeric_key_object_yields_values_in_order() {
    let raw = r#"{"0": "A: a", "1": "B: b"}"#;
    assert_eq!(
        topics_from_completion_text(raw).unwrap(),
        vec!["A: a", "B: b"]
    );
}

#[test]
fn completion_topics_field_wins_over_string_values() {
    // Shape (b) is tried before shape (c): the extra string field must
    // not leak into the result.
    let raw = r#"{"topics": ["A: a"], "note": "nicht ein Thema"}"#;
    assert_eq!(topics_from_completion_text(raw).unwrap(), vec!["A: a"]);
}

#[test]
fn completion_object_without_matching_shape_is_malformed() {
    let err = topics_from_completion_text(r#"{"foo": 1}"#).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn completion_empty_array_is_malformed() {
    let err = topics_from_completion_text("[]").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn completion_mixed_type_array_is_malformed() {
    let err = topics_from_completion_text(r#"["A: a", 42]"#).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn completion_non_json_text_is_malformed() {
    let err = topics_from_completion_text("Hier sind die Themen: ...").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedResponse));
}

#[test]
fn completion_scalar_json_is_malformed() {
    for raw in [r#""nur ein String""#, "42", "true", "null"] {
        assert!(
            matches!(
                topics_from_completion_text(raw),
                Err(ExtractError::MalformedResponse)
            ),
            "raw {raw} should be malformed"
        );
    }
}
