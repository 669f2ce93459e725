use reverse_words::core::models::HttpContext;
use reverse_words::handler::{handle, reverse_words};

fn context(ip: &str, agent: &str) -> HttpContext {
    HttpContext {
        source_ip: ip.to_string(),
        user_agent: agent.to_string(),
    }
}

#[test]
fn test_ascii_reversal() {
    let response = handle(r#"{"words":"hello"}"#, &context("1.2.3.4", "curl/8")).unwrap();

    assert_eq!(response.original, "hello");
    assert_eq!(response.reversed.as_deref(), Some("olleh"));
}

#[test]
fn test_reversing_twice_is_identity_for_ascii() {
    let input = "the quick brown fox";
    let once = reverse_words(input).unwrap();
    let twice = reverse_words(&once).unwrap();

    assert_eq!(twice, input);
}

#[test]
fn test_empty_string() {
    let response = handle(r#"{"words":""}"#, &context("1.2.3.4", "curl/8")).unwrap();

    assert_eq!(response.original, "");
    assert_eq!(response.reversed.as_deref(), Some(""));
}

#[test]
fn test_metadata_is_echoed_unchanged() {
    // The meta fields must match the context inputs byte-for-byte no matter
    // what the words payload contains.
    for words in ["hello", "", "¡ホラ!", "{\\\"nested\\\":true}"] {
        let body = serde_json::to_string(&serde_json::json!({ "words": words })).unwrap();
        let response = handle(&body, &context("203.0.113.9", "Mozilla/5.0 (weird agent)")).unwrap();

        assert_eq!(response.meta.ip_addr, "203.0.113.9");
        assert_eq!(response.meta.user_agent, "Mozilla/5.0 (weird agent)");
    }
}

#[test]
fn test_hello_scenario_serializes_exactly() {
    let response = handle(r#"{"words":"hello"}"#, &context("1.2.3.4", "curl/8")).unwrap();
    let serialized = serde_json::to_string(&response).unwrap();

    assert_eq!(
        serialized,
        r#"{"original":"hello","reversed":"olleh","meta":{"ip_addr":"1.2.3.4","user_agent":"curl/8"}}"#
    );
}

#[test]
fn test_combining_mark_is_split_from_its_base() {
    // "é" as a base letter plus U+0301. Reversal operates on scalar values,
    // so the combining mark lands in front of the base letter instead of
    // staying attached. This asserts the unit-level behavior, not grapheme
    // correctness.
    let reversed = reverse_words("e\u{301}").unwrap();

    assert_eq!(reversed, "\u{301}e");
    assert_ne!(reversed, "e\u{301}");
}

#[test]
fn test_malformed_body_is_an_error() {
    let result = handle("not json at all", &context("1.2.3.4", "curl/8"));

    assert!(result.is_err());
}

#[test]
fn test_body_missing_words_field_is_an_error() {
    let result = handle(r#"{"other":"field"}"#, &context("1.2.3.4", "curl/8"));

    assert!(result.is_err());
}
