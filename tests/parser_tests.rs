use esperf_collapse::parser::{load_shards, parse_document, read_document};
use esperf_collapse::utils::ParseError;
use serde_json::json;

const RESPONSE: &str = include_str!("fixtures/search_response.json");

#[test]
fn test_parse_raw_response() {
    let shards = parse_document(RESPONSE).unwrap();

    assert_eq!(shards.len(), 2);
    assert_eq!(shards[0].cluster, "(local)");
    assert_eq!(shards[0].searches[0].rewrite_time, 4000);
    assert_eq!(shards[0].aggregations.len(), 1);
    assert!(shards[1].aggregations.is_empty());
}

#[test]
fn test_profile_section_equals_raw_response() {
    let response: serde_json::Value = serde_json::from_str(RESPONSE).unwrap();
    let section = response["profile"].clone();

    assert_eq!(load_shards(section).unwrap(), load_shards(response).unwrap());
}

#[test]
fn test_read_document_from_reader() {
    let shards = read_document(RESPONSE.as_bytes()).unwrap();
    assert_eq!(shards[1].node_id, "n2");
}

#[test]
fn test_took_without_profile_is_not_unwrapped() {
    let doc = json!({ "took": 3, "shards": [] });
    assert!(load_shards(doc).unwrap().is_empty());
}

#[test]
fn test_missing_shards() {
    let err = parse_document(r#"{ "took": 3, "profile": {} }"#).unwrap_err();
    assert!(matches!(err, ParseError::MissingField(ref f) if f == "shards"));
}

#[test]
fn test_query_node_missing_time() {
    let doc = json!({
        "shards": [{
            "cluster": "c", "node_id": "n", "index": "i", "shard_id": 0,
            "searches": [{
                "rewrite_time": 1,
                "query": [{ "type": "TermQuery", "description": "x" }]
            }]
        }]
    });

    let err = load_shards(doc).unwrap_err();
    assert!(matches!(err, ParseError::MalformedInput(_)));
    assert!(err.to_string().contains("time_in_nanos"));
}

#[test]
fn test_shard_id_must_be_integer() {
    let doc = json!({
        "shards": [{
            "cluster": "c", "node_id": "n", "index": "i", "shard_id": "zero",
            "searches": []
        }]
    });

    assert!(matches!(load_shards(doc), Err(ParseError::MalformedInput(_))));
}

#[test]
fn test_not_json() {
    assert!(matches!(
        parse_document("flame on"),
        Err(ParseError::JsonError(_))
    ));
}
