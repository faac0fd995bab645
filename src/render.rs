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

//! # Renderer Module
//!
//! Chart drawing belongs to the host and its charting library; this module
//! carries only the declarative side of the renderer: the manifest entry the
//! host registers, and the one shape contract the renderer consumes — a
//! figure of `{data, layout}` extracted from a `json` expression value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{JadeError, Result};
use crate::expression::JadeExprValue;

/// Manifest entry for a renderer registration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JadeRendererSpec {
    pub name: String,
    pub display_name: String,
    pub help: String,
    /// Whether the host may hand the renderer a previously used DOM node.
    pub reuse_dom_node: bool,
}

/// The bundled plotly renderer manifest entry.
#[allow(non_snake_case)]
pub fn plotly_renderer() -> JadeRendererSpec {
    JadeRendererSpec {
        name: "plotly".to_string(),
        display_name: "Plotly".to_string(),
        help: "Render a plotly plot".to_string(),
        reuse_dom_node: true,
    }
}

/// The `{data, layout}` document shape the renderer consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JadeFigure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl JadeFigure {
    /// Extracts a figure from a `json` expression value.
    ///
    /// `data` must be present and an array; a missing `layout` defaults to
    /// an empty object.
    #[allow(non_snake_case)]
    pub fn from_expr(value: &JadeExprValue) -> Result<Self> {
        let object = value
            .as_json_object()
            .ok_or_else(|| JadeError::validation("renderer expects a json value"))?;
        let data = object
            .get("data")
            .and_then(|v| v.as_array())
            .ok_or_else(|| JadeError::validation("figure is missing a 'data' array"))?
            .clone();
        let layout = object
            .get("layout")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        Ok(Self { data, layout })
    }
}
