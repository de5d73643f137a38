//! Integration tests for query parsing and reconstruction.

use uriparam::uri::{resolve_raw_parameter_values, AMPERSAND};
use uriparam::{create_query_string, parse_parameters, parse_query, ParamValue, Parameters};

#[test]
fn raw_value_survives_round_trip() {
    for payload in ["plain", "a&b", "50%", "x=y&z", "++?w0rd"] {
        let raw = format!("RAW({payload})");
        let query = create_query_string([("k", Some(raw.as_str()))], AMPERSAND, true);
        let params = parse_query(&query).unwrap();
        assert_eq!(params.get_str("k"), Some(raw.as_str()), "payload {payload}");
        assert_eq!(params.len(), 1);
    }
}

#[test]
fn repeated_keys_collect_in_order() {
    let params = parse_query("a=1&a=2&a=3").unwrap();
    assert_eq!(
        params.get("a"),
        Some(&ParamValue::Multi(vec!["1".into(), "2".into(), "3".into()]))
    );
}

#[test]
fn raw_value_keeps_ampersand_and_resolves() {
    let mut params = parse_query("k=RAW(x&y)&m=n").unwrap();
    assert_eq!(params.get_str("k"), Some("RAW(x&y)"));
    assert_eq!(params.get_str("m"), Some("n"));

    resolve_raw_parameter_values(&mut params);
    assert_eq!(params.get_str("k"), Some("x&y"));
    assert_eq!(params.get_str("m"), Some("n"));
}

#[test]
fn placeholder_keys_are_dropped() {
    let params = parse_query("{{unknown}}=1&b=2").unwrap();
    assert_eq!(params.keys().collect::<Vec<_>>(), ["b"]);
    assert_eq!(params.get_str("b"), Some("2"));
}

#[test]
fn trailing_ampersand_is_rejected() {
    let err = parse_query("a=1&").unwrap_err();
    assert_eq!(err.input(), "a=1&");
    assert_eq!(parse_query("a=1").unwrap().get_str("a"), Some("1"));
}

#[test]
fn literal_percent_in_value_is_kept() {
    let params = parse_query("a=50%off").unwrap();
    assert_eq!(params.get_str("a"), Some("50%off"));
}

#[test]
fn empty_input_gives_empty_collection() {
    assert!(parse_query("").unwrap().is_empty());
    assert!(parse_parameters("seda:work").unwrap().is_empty());
    assert!(parse_parameters("seda:work?").unwrap().is_empty());
}

#[test]
fn alphanumeric_round_trip_is_stable() {
    let query = "alpha=1&beta=two&gamma=3c";
    let params = parse_query(query).unwrap();
    assert_eq!(params.to_query_string(AMPERSAND, true), query);
    assert_eq!(parse_query(&params.to_query_string(AMPERSAND, true)).unwrap(), params);
}

#[test]
fn whole_uri_decodes_escaped_query_once() {
    let params = parse_parameters("smtp://host?subject=Hello%20World&to=a%40b.com").unwrap();
    assert_eq!(params.get_str("subject"), Some("Hello World"));
    assert_eq!(params.get_str("to"), Some("a@b.com"));
}

#[test]
fn extract_properties_splits_by_prefix() {
    let mut params = parse_query("consumer.delay=5&consumer.size=2&timeout=30").unwrap();
    let consumer = params.extract_properties("consumer.");
    assert_eq!(consumer.get_str("delay"), Some("5"));
    assert_eq!(consumer.get_str("size"), Some("2"));
    assert_eq!(params.keys().collect::<Vec<_>>(), ["timeout"]);
}

#[test]
fn collected_parameters_serialize_with_flags() {
    let params: Parameters = [("a", "1"), ("b", "x y")].into_iter().collect();
    assert_eq!(params.to_query_string(AMPERSAND, true), "a=1&b=x+y");
    assert_eq!(
        create_query_string([("flag", None::<&str>), ("a", Some("1"))], AMPERSAND, true),
        "flag&a=1"
    );
}

#[test]
fn whole_uri_keeps_literal_percent_in_raw_and_plain_values() {
    let params = parse_parameters("ftp://h/in?password=RAW(50%off)&delay=5").unwrap();
    assert_eq!(params.get_str("password"), Some("RAW(50%off)"));
    assert_eq!(params.get_str("delay"), Some("5"));

    let params = parse_parameters("ftp://h/in?discount=50%off").unwrap();
    assert_eq!(params.get_str("discount"), Some("50%off"));
}

#[test]
fn empty_names_are_not_collected() {
    let params = parse_query("&a=1&&b=2").unwrap();
    assert_eq!(params.keys().collect::<Vec<_>>(), ["a", "b"]);
}
