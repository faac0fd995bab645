//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Jade.
//! The Jade project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use jadex::{resolve_mut, JadeQuery, JadeStep};
use serde_json::json;

#[test]
fn preset_dimension_filter() {
    // the path shape the parallel-coordinates preset uses to address one
    // dimension's value list by label
    let doc = json!({"data": [{
        "dimensions": [
            {"label": "DistanceMiles", "values": []},
            {"label": "AvgTicketPrice", "values": []},
        ],
    }]});
    let query = JadeQuery::parse("data[0].dimensions[?(@.label==='AvgTicketPrice')].values").unwrap();
    let locations = query.select(&doc);
    assert_eq!(locations.len(), 1);
    assert_eq!(
        locations[0],
        vec![
            JadeStep::Key("data".into()),
            JadeStep::Index(0),
            JadeStep::Key("dimensions".into()),
            JadeStep::Index(1),
            JadeStep::Key("values".into()),
        ]
    );
}

#[test]
fn bracket_member_and_quotes() {
    let doc = json!({"odd key": {"x": 1}});
    let query = JadeQuery::parse("['odd key'].x").unwrap();
    assert_eq!(query.select(&doc).len(), 1);
    let query = JadeQuery::parse("[\"odd key\"].x").unwrap();
    assert_eq!(query.select(&doc).len(), 1);
}

#[test]
fn matches_come_back_in_traversal_order() {
    let doc = json!({"data": [
        {"kind": "scatter", "x": []},
        {"kind": "bar", "x": []},
        {"kind": "scatter", "x": []},
    ]});
    let query = JadeQuery::parse("data[?(@.kind==='scatter')].x").unwrap();
    let locations = query.select(&doc);
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0][1], JadeStep::Index(0));
    assert_eq!(locations[1][1], JadeStep::Index(2));
}

#[test]
fn mutation_goes_through_resolved_location() {
    let mut doc = json!({"y": [
        {"key": "s", "value": [2]},
        {"key": "d", "value": [3]},
    ]});
    let query = JadeQuery::parse("y[?(@.key==='d')]").unwrap();
    let location = query.select(&doc).into_iter().next().unwrap();
    let matched = resolve_mut(&mut doc, &location).unwrap();
    matched["value"].as_array_mut().unwrap().push(json!(33));
    assert_eq!(doc["y"][1]["value"], json!([3, 33]));
    assert_eq!(doc["y"][0]["value"], json!([2]));
}

#[test]
fn relational_predicates() {
    let doc = json!({"rows": [{"n": 1}, {"n": 5}, {"n": 9}]});
    assert_eq!(JadeQuery::parse("rows[?(@.n >= 5)]").unwrap().select(&doc).len(), 2);
    assert_eq!(JadeQuery::parse("rows[?(@.n < 5)]").unwrap().select(&doc).len(), 1);
    assert_eq!(JadeQuery::parse("rows[?(@.n != 5)]").unwrap().select(&doc).len(), 2);
}

#[test]
fn invalid_queries_are_rejected() {
    for source in ["", "data[?(@.x = 1)]", "data[0", "data..x", "data[-1]"] {
        assert!(JadeQuery::parse(source).is_err(), "source: {}", source);
    }
}
