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

//! # JSON Enricher Module
//!
//! This module implements the one non-trivial routine of the toolkit: a
//! JSON-mutation pass that splices per-row values into matching locations of
//! a document. For each (row, column) pair of a dataset it:
//!
//! 1. builds the per-cell context `{row, column, value}`,
//! 2. substitutes the context into the path template and compiles the result
//!    as a path query,
//! 3. selects matching containers in the document; zero matches skips the
//!    pair silently,
//! 4. substitutes the context into the value template, parses the result as
//!    relaxed-JSON, and appends it onto the FIRST matched container.
//!
//! The document is mutated in place. A matched container is never replaced,
//! only appended to; a match that is not an array is a type error, since it
//! signals a path/document shape mismatch the caller must see.
//!
//! The pass is fail-fast and non-transactional: rows processed before a
//! failing cell have already mutated the document, and no rollback is
//! attempted. Repeated invocations accumulate appends by design.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{JadeError, Result};
use crate::path::{resolve_mut, JadeQuery};
use crate::table::{parse_column_filter, type_name, JadeDataset};
use crate::template::{render, JadeContext};

/// Value template applied when the caller does not supply one: the cell
/// value wrapped as a JSON string literal.
pub const DEFAULT_VALUE_TEMPLATE: &str = "\"{{value}}\"";

/// Configuration for a JSON enrichment pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JadeEnrichConfig {
    /// Path template addressing the container(s) to append into.
    pub path: String,
    /// Value template producing the appended value.
    pub value: String,
    /// Optional textual column filter (whitespace/comma separated names).
    pub columns: Option<String>,
}

impl JadeEnrichConfig {
    /// Builds a configuration from the path template alone, with the
    /// default value template and no column filter.
    #[allow(non_snake_case)]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: DEFAULT_VALUE_TEMPLATE.to_string(),
            columns: None,
        }
    }

    /// Sets the value template.
    #[allow(non_snake_case)]
    pub fn value_template(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the textual column filter.
    #[allow(non_snake_case)]
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }
}

/// Enricher applying one configuration to documents.
#[derive(Debug)]
pub struct JadeEnricher {
    config: JadeEnrichConfig,
    filter: Option<Vec<String>>,
}

impl JadeEnricher {
    /// Creates an enricher, validating the templates are non-empty and
    /// pre-parsing the column filter.
    #[allow(non_snake_case)]
    pub fn new(config: JadeEnrichConfig) -> Result<Self> {
        if config.path.trim().is_empty() {
            return Err(JadeError::validation("path template must be non-empty"));
        }
        if config.value.trim().is_empty() {
            return Err(JadeError::validation("value template must be non-empty"));
        }
        let filter = config.columns.as_deref().map(parse_column_filter);
        Ok(Self { config, filter })
    }

    /// Runs the enrichment pass over every (row, column) pair of the
    /// dataset, mutating `document` in place.
    #[allow(non_snake_case)]
    pub fn apply(&self, document: &mut Value, rows: &JadeDataset) -> Result<()> {
        let mut appended = 0usize;
        let mut skipped = 0usize;
        for row in rows {
            for (column, value) in row {
                if let Some(filter) = &self.filter {
                    if !filter.iter().any(|name| name == column) {
                        continue;
                    }
                }
                let context = JadeContext::new(row, column, value);
                let path = render(&self.config.path, &context)?;
                let query = JadeQuery::parse(&path)?;
                let locations = query.select(document);
                let location = match locations.first() {
                    Some(location) => location,
                    None => {
                        skipped += 1;
                        continue;
                    }
                };
                let rendered = render(&self.config.value, &context)?;
                let parsed = crate::relaxed::parse(&rendered)?;
                let target = resolve_mut(document, location)
                    .ok_or_else(|| JadeError::internal("matched location vanished"))?;
                match target {
                    Value::Array(items) => items.push(parsed),
                    other => {
                        return Err(JadeError::type_error(
                            path,
                            format!("cannot push into {}", type_name(other)),
                        ));
                    }
                }
                appended += 1;
            }
        }
        debug!(
            "enrich pass over {} row(s): {} appended, {} skipped",
            rows.len(),
            appended,
            skipped
        );
        Ok(())
    }
}

/// One-shot form of the enrichment contract:
/// `enrich(document, pathTemplate, valueTemplate, rows, columnFilter?)`.
///
/// `value_template` falls back to [`DEFAULT_VALUE_TEMPLATE`] when absent.
/// The same document reference is returned mutated, for chaining.
#[allow(non_snake_case)]
pub fn enrich<'a>(
    document: &'a mut Value,
    path_template: &str,
    value_template: Option<&str>,
    rows: &JadeDataset,
    columns: Option<&str>,
) -> Result<&'a mut Value> {
    let mut config = JadeEnrichConfig::new(path_template);
    if let Some(value) = value_template {
        config = config.value_template(value);
    }
    if let Some(columns) = columns {
        config = config.columns(columns);
    }
    JadeEnricher::new(config)?.apply(document, rows)?;
    Ok(document)
}
