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

//! # Expression Value Module
//!
//! Values flowing between expression-pipeline steps are tagged: structured
//! payloads travel as `{type: "...", ...}` wrappers on the wire, scalars
//! travel bare. This module models both as one enum so function contracts
//! can be written against a single type.

use serde_json::{json, Value};

use crate::errors::{JadeError, Result};

/// A typed expression-pipeline value.
#[derive(Clone, Debug, PartialEq)]
pub enum JadeExprValue {
    /// A `{type: "json", object}` wrapper; carries the unwrapped object.
    Json(Value),
    /// A `{type: "datatable", columns, rows}` wrapper, kept whole.
    Datatable(Value),
    /// A `{type: "columntable", columns}` wrapper, kept whole.
    Columntable(Value),
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl JadeExprValue {
    /// The wire type tag of this value.
    pub fn type_tag(&self) -> &'static str {
        match self {
            JadeExprValue::Json(_) => "json",
            JadeExprValue::Datatable(_) => "datatable",
            JadeExprValue::Columntable(_) => "columntable",
            JadeExprValue::String(_) => "string",
            JadeExprValue::Number(_) => "number",
            JadeExprValue::Boolean(_) => "boolean",
            JadeExprValue::Null => "null",
        }
    }

    /// Classifies a wire value into its typed form.
    #[allow(non_snake_case)]
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(JadeExprValue::Null),
            Value::Bool(b) => Ok(JadeExprValue::Boolean(b)),
            Value::Number(n) => Ok(JadeExprValue::Number(n.as_f64().unwrap_or(0.0))),
            Value::String(s) => Ok(JadeExprValue::String(s)),
            Value::Object(map) => {
                let tag = map.get("type").and_then(|v| v.as_str()).unwrap_or("");
                match tag {
                    "json" => {
                        let object = map.get("object").cloned().unwrap_or(Value::Null);
                        Ok(JadeExprValue::Json(object))
                    }
                    "datatable" => Ok(JadeExprValue::Datatable(Value::Object(map))),
                    "columntable" => Ok(JadeExprValue::Columntable(Value::Object(map))),
                    other => Err(JadeError::validation(format!(
                        "unrecognized expression value tag '{}'",
                        other
                    ))),
                }
            }
            Value::Array(_) => Err(JadeError::validation(
                "bare arrays are not expression values; wrap as {type: \"json\"}",
            )),
        }
    }

    /// Converts back to the wire representation.
    #[allow(non_snake_case)]
    pub fn to_value(&self) -> Value {
        match self {
            JadeExprValue::Json(object) => json!({"type": "json", "object": object}),
            JadeExprValue::Datatable(table) => table.clone(),
            JadeExprValue::Columntable(table) => table.clone(),
            JadeExprValue::String(s) => Value::String(s.clone()),
            JadeExprValue::Number(n) => json!(n),
            JadeExprValue::Boolean(b) => Value::Bool(*b),
            JadeExprValue::Null => Value::Null,
        }
    }

    /// The wrapped object of a `json` value.
    pub fn as_json_object(&self) -> Option<&Value> {
        match self {
            JadeExprValue::Json(object) => Some(object),
            _ => None,
        }
    }
}
