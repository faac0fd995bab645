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

use jadex::{normalize_rows, parse_column_filter};
use serde_json::json;

#[test]
fn all_three_shapes_normalize_identically() {
    let row_major = json!([{"c": 1}, {"c": 2}, {"c": 3}]);
    let tagged_json = json!({"type": "json", "object": [{"c": 1}, {"c": 2}, {"c": 3}]});
    let datatable = json!({
        "type": "datatable",
        "columns": [{"name": "c"}],
        "rows": [{"c": 1}, {"c": 2}, {"c": 3}],
    });
    let columntable = json!({
        "type": "columntable",
        "columns": [{"name": "c", "values": [1, 2, 3]}],
    });

    let expected = normalize_rows(&row_major).unwrap();
    assert_eq!(normalize_rows(&tagged_json).unwrap(), expected);
    assert_eq!(normalize_rows(&datatable).unwrap(), expected);
    assert_eq!(normalize_rows(&columntable).unwrap(), expected);
}

#[test]
fn columntable_preserves_column_association() {
    let table = json!({
        "type": "columntable",
        "columns": [
            {"name": "lat", "values": [58.443, 58.451]},
            {"name": "lon", "values": [1.8875, 1.885]},
        ],
    });
    let rows = normalize_rows(&table).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["lat"], json!(58.443));
    assert_eq!(rows[0]["lon"], json!(1.8875));
    assert_eq!(rows[1]["lat"], json!(58.451));
}

#[test]
fn row_order_is_preserved() {
    let rows = normalize_rows(&json!([{"n": 3}, {"n": 1}, {"n": 2}])).unwrap();
    let values: Vec<i64> = rows.iter().map(|r| r["n"].as_i64().unwrap()).collect();
    assert_eq!(values, vec![3, 1, 2]);
}

#[test]
fn scalar_rows_rejected() {
    assert!(normalize_rows(&json!([1, 2, 3])).is_err());
}

#[test]
fn column_filter_textual_forms() {
    assert_eq!(parse_column_filter("dist"), vec!["dist"]);
    assert_eq!(parse_column_filter("dist,delay"), vec!["dist", "delay"]);
    assert_eq!(parse_column_filter("dist delay"), vec!["dist", "delay"]);
    assert_eq!(parse_column_filter("dist,  delay\n"), vec!["dist", "delay"]);
}
