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

//! # Jade Core Library
//!
//! Jade is a JSON enrichment and expression-function toolkit for dashboard
//! visualizations. Its centerpiece is the enricher: a mutation pass that
//! splices per-row values from a tabular query result into matching
//! locations of a JSON chart document, addressed by path queries and filled
//! through placeholder templates. Around it the crate carries the
//! expression-function surface a dashboarding host registers (`json`,
//! `enrich`, `serverTime`), the plotly renderer manifest, and the bundled
//! preset elements.
//!
//! ## Module Overview
//!
//! - **errors**: JadeError and the crate-wide Result alias
//! - **relaxed**: forgiving JSON parser for document and value templates
//! - **path**: path-query sublanguage (members, indexes, wildcards, filters)
//! - **template**: `{{placeholder}}` substitution against the per-cell context
//! - **table**: table shapes and row-major normalization
//! - **enrich**: the JSON enrichment pass
//! - **expression**: tagged expression-pipeline values
//! - **function**: function specs, registry shim, and built-ins
//! - **render**: renderer manifest and figure extraction
//! - **element**: bundled visualization presets
//!
//! ## Quick Start
//!
//! ```rust
//! use jadex::{enrich, normalize_rows};
//! use serde_json::json;
//!
//! let mut doc = json!({"data": [{"dimensions": []}]});
//! let rows = normalize_rows(&json!([{"dist": 1.5}, {"dist": 2.0}])).unwrap();
//! enrich(
//!     &mut doc,
//!     "data[0].dimensions",
//!     Some("{label: '{{column}}', values: [{{value}}]}"),
//!     &rows,
//!     None,
//! )
//! .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, JadeError>`. The enricher is fail-fast
//! and non-transactional: mutations made before a failing cell persist.

#![allow(non_snake_case)]

pub mod errors;
pub mod relaxed;
pub mod path;
pub mod template;
pub mod table;
pub mod enrich;
pub mod expression;
pub mod function;
pub mod render;
pub mod element;

pub use errors::{JadeError, Result};
pub use path::{resolve_mut, JadeCompareOp, JadeLocation, JadePredicate, JadeQuery, JadeSegment, JadeStep};
pub use template::{render as render_template, JadeContext};
pub use table::{normalize_rows, parse_column_filter, JadeDataset, JadeRow};
pub use enrich::{enrich, JadeEnrichConfig, JadeEnricher, DEFAULT_VALUE_TEMPLATE};
pub use expression::JadeExprValue;
pub use function::{
    JadeArgSpec, JadeArgs, JadeEnrichFunction, JadeFunction, JadeFunctionRegistry,
    JadeFunctionSpec, JadeJsonFunction, JadeServerTimeFunction,
};
pub use render::{plotly_renderer, JadeFigure, JadeRendererSpec};
pub use element::{builtin_elements, JadeElement};
