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

//! # Table Module
//!
//! This module normalizes the tabular inputs the enricher accepts into
//! row-major form. Upstream query execution hands over one of three shapes,
//! recognized by the `type` tag of the wire format:
//!
//! - `{type: "json", object: [...]}` — a plain array of row objects
//! - `{type: "datatable", rows: [...]}` — row-major with explicit rows
//! - `{type: "columntable", columns: [{name, values}, ...]}` — column-major,
//!   transposed by zipping each column's i-th value into row i
//!
//! An untagged JSON array is accepted as the first shape. The module also
//! parses the textual column filter (whitespace/comma separated names).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::{JadeError, Result};

/// One row: a mapping from column name to cell value.
pub type JadeRow = Map<String, Value>;

/// An ordered sequence of rows. Ordering is preserved; it decides which
/// array positions appended values land in.
pub type JadeDataset = Vec<JadeRow>;

/// Normalizes any accepted table shape into a row-major dataset.
#[allow(non_snake_case)]
pub fn normalize_rows(table: &Value) -> Result<JadeDataset> {
    match table {
        Value::Array(items) => rows_from_array(items),
        Value::Object(map) => {
            let tag = map.get("type").and_then(|v| v.as_str()).unwrap_or("");
            match tag {
                "json" => {
                    let object = map
                        .get("object")
                        .ok_or_else(|| JadeError::validation("json table missing 'object'"))?;
                    match object {
                        Value::Array(items) => rows_from_array(items),
                        _ => Err(JadeError::validation("json table 'object' must be an array")),
                    }
                }
                "datatable" => {
                    let rows = map
                        .get("rows")
                        .ok_or_else(|| JadeError::validation("datatable missing 'rows'"))?;
                    match rows {
                        Value::Array(items) => rows_from_array(items),
                        _ => Err(JadeError::validation("datatable 'rows' must be an array")),
                    }
                }
                "columntable" => {
                    let columns = map
                        .get("columns")
                        .and_then(|v| v.as_array())
                        .ok_or_else(|| {
                            JadeError::validation("columntable missing 'columns' array")
                        })?;
                    transpose_columns(columns)
                }
                other => Err(JadeError::validation(format!(
                    "unrecognized table shape '{}'",
                    other
                ))),
            }
        }
        _ => Err(JadeError::validation("table must be an array or tagged object")),
    }
}

fn rows_from_array(items: &[Value]) -> Result<JadeDataset> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map.clone()),
            other => Err(JadeError::validation(format!(
                "row must be an object, got {}",
                type_name(other)
            ))),
        })
        .collect()
}

/// Zips parallel column value sequences into per-row mappings.
///
/// The first column decides the row count, matching the upstream wire
/// behavior; shorter columns pad with null.
fn transpose_columns(columns: &[Value]) -> Result<JadeDataset> {
    let mut parsed = Vec::with_capacity(columns.len());
    for column in columns {
        let name = column
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JadeError::validation("column missing 'name'"))?;
        let values = column
            .get("values")
            .and_then(|v| v.as_array())
            .ok_or_else(|| JadeError::validation("column missing 'values' array"))?;
        parsed.push((name.to_string(), values));
    }
    let row_count = parsed.first().map(|(_, values)| values.len()).unwrap_or(0);
    let mut rows = Vec::with_capacity(row_count);
    for i in 0..row_count {
        let mut row = JadeRow::new();
        for (name, values) in &parsed {
            row.insert(name.clone(), values.get(i).cloned().unwrap_or(Value::Null));
        }
        rows.push(row);
    }
    Ok(rows)
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses the textual column filter into a name list.
///
/// Splits on any run of whitespace or commas; an empty or all-separator
/// string yields no names.
#[allow(non_snake_case)]
pub fn parse_column_filter(spec: &str) -> Vec<String> {
    static SPLITTER: OnceLock<Regex> = OnceLock::new();
    let splitter = SPLITTER.get_or_init(|| Regex::new(r"[\s,]+").expect("column splitter regex"));
    splitter
        .split(spec)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
