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

use jadex::relaxed;
use jadex::JadeError;
use serde_json::json;

#[test]
fn chart_document_dialect() {
    let source = "{
        layout: {title: 'Parallel Coordinates Example'},
        data: [ {
          type: 'parcoords',
          // per-line colors are filled by enrichment
          line: { showscale: true, reversescale: true, colorscale: 'Jet', color: [] }
          dimensions: []
        } ]
      }";
    let doc = relaxed::parse(source).unwrap();
    assert_eq!(doc["layout"]["title"], json!("Parallel Coordinates Example"));
    assert_eq!(doc["data"][0]["type"], json!("parcoords"));
    assert_eq!(doc["data"][0]["dimensions"], json!([]));
    assert_eq!(doc["data"][0]["line"]["color"], json!([]));
}

#[test]
fn substituted_value_templates() {
    // the default value template wraps the cell as a string literal
    assert_eq!(relaxed::parse("\"15_9-F-1 A\"").unwrap(), json!("15_9-F-1 A"));
    // an unquoted override splices the raw cell
    assert_eq!(relaxed::parse("42.5").unwrap(), json!(42.5));
    // object-shaped value templates
    assert_eq!(
        relaxed::parse("{label: 'dist', values: []}").unwrap(),
        json!({"label": "dist", "values": []})
    );
}

#[test]
fn hash_comments_inside_arrays() {
    let source = "[
        {target: 'a'},
        # {target: 'b'},
        {target: 'c'}
      ]";
    let doc = relaxed::parse(source).unwrap();
    assert_eq!(doc, json!([{"target": "a"}, {"target": "c"}]));
}

#[test]
fn malformed_input_is_a_parse_error() {
    for source in ["{a: ", "{a: 1} trailing", "[1, 2", "'open"] {
        let err = relaxed::parse(source).unwrap_err();
        assert!(matches!(err, JadeError::Parse { .. }), "source: {}", source);
    }
}
