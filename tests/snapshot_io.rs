//! Snapshot loading the way the CLI does it: a JSON file on disk

mod common;

use common::sourced;
use constellation::{parse_snapshot, ConstellationEngine, ConstellationError};
use std::io::Write;

#[test]
fn snapshot_file_round_trips_through_the_engine() {
    let records = vec![
        sourced("a1", "Trust", "P1"),
        sourced("b1", "Privacy", "P1"),
    ];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&records).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let loaded = parse_snapshot(&text).unwrap();
    assert_eq!(loaded, records);

    let graph = ConstellationEngine::new().build(&loaded);
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
}

#[test]
fn lenient_fields_fill_in_during_load() {
    let json = r#"[
        {"id": "a1", "term": "Trust", "orientation": "exploratory", "artifact_role": "probe"},
        {"id": "b1", "term": "Privacy", "orientation": "critical",
         "artifact_role": "probe", "weight": 0.7, "active": false, "source": "P1"}
    ]"#;
    let records = parse_snapshot(json).unwrap();
    assert_eq!(records[0].weight, 1.0);
    assert!(records[0].active);
    assert_eq!(records[1].source.as_deref(), Some("P1"));
}

#[test]
fn malformed_snapshot_surfaces_serialization_error() {
    let err = parse_snapshot("not json").unwrap_err();
    assert!(matches!(err, ConstellationError::Serialization(_)));
}

#[test]
fn graph_serializes_back_to_snapshot_consumers() {
    let records = vec![
        sourced("a1", "Trust", "P1"),
        sourced("b1", "Privacy", "P1"),
    ];
    let graph = ConstellationEngine::new().build(&records);

    let json = serde_json::to_value(&graph).unwrap();
    assert!(json["nodes"].is_array());
    assert!(json["edges"].is_array());
    assert_eq!(json["nodes"][0]["term"], "Trust");
    assert!(json["edges"][0]["weights"]["coOccurrence"].is_number());
}
