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

//! # Expression Function Module
//!
//! This module defines the expression-function contract and the declarative
//! registration surface the host interpreter consumes: each function carries
//! a spec (name, aliases, type tags, per-argument schemas with defaults) and
//! a plain input-to-output call. The host's process-wide registry is
//! external; [`JadeFunctionRegistry`] is the shim that holds the functions
//! and resolves invocations by name or alias.
//!
//! Built-ins:
//!
//! - `json` — parses a relaxed-JSON literal into a `json` wrapper
//! - `enrich` — runs the JSON enricher over the piped-in `json` context
//! - `serverTime` — the server-side registration; current Unix time in ms

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enrich::{enrich, DEFAULT_VALUE_TEMPLATE};
use crate::errors::{JadeError, Result};
use crate::expression::JadeExprValue;
use crate::relaxed;
use crate::table::normalize_rows;

/// Named arguments supplied to a function invocation. Table-valued
/// arguments hold their tagged wire form.
pub type JadeArgs = Map<String, Value>;

/// Schema of one declared argument.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JadeArgSpec {
    pub name: String,
    /// Accepted wire type tags.
    pub types: Vec<String>,
    pub aliases: Vec<String>,
    pub help: String,
    /// Textual default applied when the argument is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl JadeArgSpec {
    #[allow(non_snake_case)]
    pub fn new(name: &str, types: &[&str], help: &str) -> Self {
        Self {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            aliases: Vec::new(),
            help: help.to_string(),
            default: None,
        }
    }

    #[allow(non_snake_case)]
    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    #[allow(non_snake_case)]
    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// Declarative surface of one expression function.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JadeFunctionSpec {
    pub name: String,
    pub aliases: Vec<String>,
    /// Wire type tag of the produced value.
    pub return_type: String,
    /// Wire type tags accepted as piped-in context; empty accepts anything.
    pub context_types: Vec<String>,
    pub help: String,
    pub args: Vec<JadeArgSpec>,
}

/// Contract every expression function fulfills: a spec plus a pure
/// context-and-args to value call.
pub trait JadeFunction: std::fmt::Debug + Send + Sync {
    /// The registration surface of the function.
    fn spec(&self) -> &JadeFunctionSpec;

    /// Invokes the function on the piped-in context and named arguments.
    fn invoke(&self, context: &JadeExprValue, args: &JadeArgs) -> Result<JadeExprValue>;
}

/// Registry shim mapping names and aliases to functions.
#[derive(Debug, Default)]
pub struct JadeFunctionRegistry {
    functions: Vec<Arc<dyn JadeFunction>>,
    index: HashMap<String, usize>,
}

impl JadeFunctionRegistry {
    /// Creates an empty registry.
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the built-in functions.
    #[allow(non_snake_case)]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(Arc::new(JadeJsonFunction::new()))
            .expect("builtin json registration");
        registry
            .register(Arc::new(JadeEnrichFunction::new()))
            .expect("builtin enrich registration");
        registry
            .register(Arc::new(JadeServerTimeFunction::new()))
            .expect("builtin serverTime registration");
        registry
    }

    /// Registers a function under its name and every alias.
    #[allow(non_snake_case)]
    pub fn register(&mut self, function: Arc<dyn JadeFunction>) -> Result<()> {
        let spec = function.spec().clone();
        let slot = self.functions.len();
        let mut names = vec![spec.name.clone()];
        names.extend(spec.aliases.iter().cloned());
        for name in &names {
            if self.index.contains_key(name) {
                return Err(JadeError::registry(name, "already registered"));
            }
        }
        for name in names {
            self.index.insert(name, slot);
        }
        self.functions.push(function);
        debug!("registered expression function '{}'", spec.name);
        Ok(())
    }

    /// Looks a function up by name or alias.
    #[allow(non_snake_case)]
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn JadeFunction>> {
        self.index.get(name).map(|slot| &self.functions[*slot])
    }

    /// Invokes a registered function by name.
    #[allow(non_snake_case)]
    pub fn invoke(
        &self,
        name: &str,
        context: &JadeExprValue,
        args: &JadeArgs,
    ) -> Result<JadeExprValue> {
        let function = self
            .lookup(name)
            .ok_or_else(|| JadeError::registry(name, "not registered"))?;
        function.invoke(context, args)
    }

    /// The specs of every registered function, in registration order.
    #[allow(non_snake_case)]
    pub fn specs(&self) -> Vec<&JadeFunctionSpec> {
        self.functions.iter().map(|f| f.spec()).collect()
    }
}

/// Resolves an argument by name or any declared alias.
fn arg<'a>(args: &'a JadeArgs, spec: &JadeArgSpec) -> Option<&'a Value> {
    if let Some(value) = args.get(&spec.name) {
        return Some(value);
    }
    spec.aliases.iter().find_map(|alias| args.get(alias))
}

/// `json` — creates a JSON object from a relaxed-JSON literal string.
#[derive(Debug)]
pub struct JadeJsonFunction {
    spec: JadeFunctionSpec,
}

impl JadeJsonFunction {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self {
            spec: JadeFunctionSpec {
                name: "json".to_string(),
                aliases: Vec::new(),
                return_type: "json".to_string(),
                context_types: Vec::new(),
                help: "Creates a JSON object".to_string(),
                args: vec![JadeArgSpec::new(
                    "object",
                    &["string", "null"],
                    "JSON object as string",
                )
                .aliases(&["_"])],
            },
        }
    }
}

impl Default for JadeJsonFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl JadeFunction for JadeJsonFunction {
    fn spec(&self) -> &JadeFunctionSpec {
        &self.spec
    }

    fn invoke(&self, _context: &JadeExprValue, args: &JadeArgs) -> Result<JadeExprValue> {
        let source = arg(args, &self.spec.args[0])
            .and_then(|v| v.as_str())
            .ok_or_else(|| JadeError::missing_input("object"))?;
        Ok(JadeExprValue::Json(relaxed::parse(source)?))
    }
}

/// `enrich` — enriches the piped-in JSON object from a table.
#[derive(Debug)]
pub struct JadeEnrichFunction {
    spec: JadeFunctionSpec,
}

impl JadeEnrichFunction {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self {
            spec: JadeFunctionSpec {
                name: "enrich".to_string(),
                aliases: Vec::new(),
                return_type: "json".to_string(),
                context_types: vec!["json".to_string()],
                help: "Enriches the input JSON object".to_string(),
                args: vec![
                    JadeArgSpec::new("path", &["string"], "Path to enrich"),
                    JadeArgSpec::new(
                        "table",
                        &["json", "datatable", "columntable", "null"],
                        "Table to fill from",
                    ),
                    JadeArgSpec::new("value", &["string"], "Value to fill from")
                        .default_value(DEFAULT_VALUE_TEMPLATE),
                    JadeArgSpec::new("columns", &["string", "null"], "Column(s) to pluck from"),
                    // Declared for surface compatibility; the enricher
                    // always appends, so the flag has no effect.
                    JadeArgSpec::new(
                        "push",
                        &["boolean"],
                        "Pushes value into an array (creates new array if needed)",
                    )
                    .default_value("false"),
                ],
            },
        }
    }
}

impl Default for JadeEnrichFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl JadeFunction for JadeEnrichFunction {
    fn spec(&self) -> &JadeFunctionSpec {
        &self.spec
    }

    fn invoke(&self, context: &JadeExprValue, args: &JadeArgs) -> Result<JadeExprValue> {
        let mut object = context
            .as_json_object()
            .cloned()
            .ok_or_else(|| JadeError::validation("enrich requires a json context"))?;
        let path = arg(args, &self.spec.args[0])
            .and_then(|v| v.as_str())
            .ok_or_else(|| JadeError::missing_input("path"))?;
        let table = arg(args, &self.spec.args[1])
            .filter(|v| !v.is_null())
            .ok_or_else(|| JadeError::missing_input("table"))?;
        let rows = normalize_rows(table)?;
        let value = arg(args, &self.spec.args[2]).and_then(|v| v.as_str());
        let columns = arg(args, &self.spec.args[3]).and_then(|v| v.as_str());
        enrich(&mut object, path, value, &rows, columns)?;
        Ok(JadeExprValue::Json(object))
    }
}

/// `serverTime` — the server-side registration: current Unix time in
/// milliseconds.
#[derive(Debug)]
pub struct JadeServerTimeFunction {
    spec: JadeFunctionSpec,
}

impl JadeServerTimeFunction {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self {
            spec: JadeFunctionSpec {
                name: "serverTime".to_string(),
                aliases: Vec::new(),
                return_type: "number".to_string(),
                context_types: Vec::new(),
                help: "Get the server time in milliseconds".to_string(),
                args: Vec::new(),
            },
        }
    }
}

impl Default for JadeServerTimeFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl JadeFunction for JadeServerTimeFunction {
    fn spec(&self) -> &JadeFunctionSpec {
        &self.spec
    }

    fn invoke(&self, _context: &JadeExprValue, _args: &JadeArgs) -> Result<JadeExprValue> {
        Ok(JadeExprValue::Number(Utc::now().timestamp_millis() as f64))
    }
}
