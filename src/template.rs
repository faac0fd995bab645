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

//! # Template Substitution Module
//!
//! This module implements the placeholder mini-language used by path and
//! value templates. Templates contain `{{identifier}}` or
//! `{{identifier.path}}` tokens that are resolved against the per-cell
//! context built while the enricher walks a dataset:
//!
//! - `{{column}}` — the current column name
//! - `{{value}}` — the current cell value
//! - `{{row}}` / `{{row.other}}` — the whole current row, or a sibling cell
//!
//! Substitution is plain string interpolation ahead of parsing: strings are
//! spliced raw, every other value as compact JSON. There is no expression
//! evaluation inside placeholders, and an unresolvable placeholder is an
//! error rather than a silent empty substitution.

use serde_json::{Map, Value};

use crate::errors::{JadeError, Result};

/// Per-cell binding environment for template resolution.
///
/// One context exists per (row, column) pair processed by the enricher; it
/// borrows the row so building it stays allocation-free.
#[derive(Clone, Debug)]
pub struct JadeContext<'a> {
    /// The current row.
    pub row: &'a Map<String, Value>,
    /// The current column name.
    pub column: &'a str,
    /// The current cell value.
    pub value: &'a Value,
}

impl<'a> JadeContext<'a> {
    /// Builds the context for one cell of a row.
    #[allow(non_snake_case)]
    pub fn new(row: &'a Map<String, Value>, column: &'a str, value: &'a Value) -> Self {
        Self { row, column, value }
    }

    /// Resolves a dotted placeholder path against the context.
    fn lookup(&self, path: &str) -> Result<Value> {
        let mut parts = path.split('.');
        let head = parts.next().unwrap_or_default();
        let mut current = match head {
            "row" => Value::Object(self.row.clone()),
            "column" => Value::String(self.column.to_string()),
            "value" => self.value.clone(),
            other => {
                return Err(JadeError::template(format!(
                    "unknown placeholder root '{}'",
                    other
                )));
            }
        };
        for part in parts {
            current = match current.get(part) {
                Some(child) => child.clone(),
                None => {
                    return Err(JadeError::template(format!(
                        "placeholder '{{{{{}}}}}' did not resolve",
                        path
                    )));
                }
            };
        }
        Ok(current)
    }
}

/// Substitutes every `{{...}}` placeholder in `template` using the context.
///
/// Returns the interpolated string, ready to be handed to the path-query or
/// relaxed-JSON parser.
#[allow(non_snake_case)]
pub fn render(template: &str, context: &JadeContext<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| JadeError::template("unclosed '{{' placeholder"))?;
        let name = after[..end].trim();
        if name.is_empty() {
            return Err(JadeError::template("empty placeholder"));
        }
        let value = context.lookup(name)?;
        out.push_str(&stringify(&value));
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Interpolation form of a JSON value: strings raw, everything else as
/// compact JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
