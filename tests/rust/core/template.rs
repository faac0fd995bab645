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

use jadex::{render_template, JadeContext, JadeError};
use serde_json::{json, Map, Value};

fn row(entries: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.to_string(), value.clone());
    }
    map
}

#[test]
fn preset_value_template() {
    // the parcoords preset builds one dimension object per column
    let row = row(&[("DistanceMiles", json!(404.9))]);
    let value = json!(404.9);
    let ctx = JadeContext::new(&row, "DistanceMiles", &value);
    let out = render_template("{label: '{{column}}', values: []}", &ctx).unwrap();
    assert_eq!(out, "{label: 'DistanceMiles', values: []}");
}

#[test]
fn path_template_with_column_placeholder() {
    let row = row(&[("dist", json!(1))]);
    let value = json!(1);
    let ctx = JadeContext::new(&row, "dist", &value);
    let out = render_template("data[0].dimensions[?(@.label==='{{column}}')].values", &ctx).unwrap();
    assert_eq!(out, "data[0].dimensions[?(@.label==='dist')].values");
}

#[test]
fn row_lookup_reaches_sibling_cells() {
    let row = row(&[("a", json!("left")), ("b", json!("right"))]);
    let value = json!("left");
    let ctx = JadeContext::new(&row, "a", &value);
    assert_eq!(render_template("{{row.b}}", &ctx).unwrap(), "right");
}

#[test]
fn structured_values_splice_as_json() {
    let row = row(&[("v", json!({"nested": [1, 2]}))]);
    let value = json!({"nested": [1, 2]});
    let ctx = JadeContext::new(&row, "v", &value);
    assert_eq!(
        render_template("{{value}}", &ctx).unwrap(),
        "{\"nested\":[1,2]}"
    );
    assert_eq!(render_template("{{value.nested}}", &ctx).unwrap(), "[1,2]");
}

#[test]
fn missing_placeholder_is_a_template_error() {
    let row = row(&[("a", json!(1))]);
    let value = json!(1);
    let ctx = JadeContext::new(&row, "a", &value);
    let err = render_template("{{row.missing}}", &ctx).unwrap_err();
    assert!(matches!(err, JadeError::Template { .. }));
}
