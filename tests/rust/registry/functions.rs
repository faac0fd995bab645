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

use jadex::{JadeArgs, JadeError, JadeExprValue, JadeFunctionRegistry};
use serde_json::json;

#[test]
fn builtins_are_registered() {
    let registry = JadeFunctionRegistry::with_builtins();
    for name in ["json", "enrich", "serverTime"] {
        assert!(registry.lookup(name).is_some(), "missing builtin '{}'", name);
    }
    assert!(registry.lookup("essql").is_none());
}

#[test]
fn declared_surfaces_match_the_manifest() {
    let registry = JadeFunctionRegistry::with_builtins();

    let json_spec = registry.lookup("json").unwrap().spec();
    assert_eq!(json_spec.return_type, "json");
    assert_eq!(json_spec.args[0].aliases, vec!["_"]);

    let enrich_spec = registry.lookup("enrich").unwrap().spec();
    assert_eq!(enrich_spec.context_types, vec!["json"]);
    let arg_names: Vec<&str> = enrich_spec.args.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(arg_names, vec!["path", "table", "value", "columns", "push"]);
    assert_eq!(
        enrich_spec.args[2].default.as_deref(),
        Some("\"{{value}}\"")
    );

    let time_spec = registry.lookup("serverTime").unwrap().spec();
    assert_eq!(time_spec.return_type, "number");
    assert!(time_spec.args.is_empty());
}

#[test]
fn json_function_accepts_positional_alias() {
    let registry = JadeFunctionRegistry::with_builtins();
    let mut args = JadeArgs::new();
    args.insert(
        "_".to_string(),
        json!("{layout: {title: 'Example'}, data: []}"),
    );
    let out = registry.invoke("json", &JadeExprValue::Null, &args).unwrap();
    assert_eq!(out.type_tag(), "json");
    assert_eq!(
        out.as_json_object(),
        Some(&json!({"layout": {"title": "Example"}, "data": []}))
    );
}

#[test]
fn enrich_function_runs_the_full_pipeline_step() {
    let registry = JadeFunctionRegistry::with_builtins();

    // json step builds the base document
    let mut args = JadeArgs::new();
    args.insert(
        "object".to_string(),
        json!("{data: [{dimensions: []}]}"),
    );
    let doc = registry.invoke("json", &JadeExprValue::Null, &args).unwrap();

    // enrich step fills it from a datatable
    let mut args = JadeArgs::new();
    args.insert("path".to_string(), json!("data[0].dimensions"));
    args.insert(
        "table".to_string(),
        json!({
            "type": "datatable",
            "columns": [{"name": "dist"}],
            "rows": [{"dist": 404.9}],
        }),
    );
    args.insert(
        "value".to_string(),
        json!("{label: '{{column}}', values: []}"),
    );
    let out = registry.invoke("enrich", &doc, &args).unwrap();
    assert_eq!(
        out.as_json_object(),
        Some(&json!({"data": [{"dimensions": [{"label": "dist", "values": []}]}]}))
    );
}

#[test]
fn enrich_function_honors_the_columns_argument() {
    let registry = JadeFunctionRegistry::with_builtins();
    let context = JadeExprValue::Json(json!({"a": []}));
    let mut args = JadeArgs::new();
    args.insert("path".to_string(), json!("a"));
    args.insert("table".to_string(), json!([{"x": 1, "y": 2}]));
    args.insert("value".to_string(), json!("{{value}}"));
    args.insert("columns".to_string(), json!("y"));
    let out = registry.invoke("enrich", &context, &args).unwrap();
    assert_eq!(out.as_json_object(), Some(&json!({"a": [2]})));
}

#[test]
fn enrich_function_rejects_missing_inputs() {
    let registry = JadeFunctionRegistry::with_builtins();
    let context = JadeExprValue::Json(json!({"a": []}));

    let mut args = JadeArgs::new();
    args.insert("table".to_string(), json!([{"x": 1}]));
    let err = registry.invoke("enrich", &context, &args).unwrap_err();
    assert!(matches!(err, JadeError::MissingInput(_)));

    let mut args = JadeArgs::new();
    args.insert("path".to_string(), json!("a"));
    args.insert("table".to_string(), json!(null));
    let err = registry.invoke("enrich", &context, &args).unwrap_err();
    assert!(matches!(err, JadeError::MissingInput(_)));

    // a non-json context is not enrichable
    let mut args = JadeArgs::new();
    args.insert("path".to_string(), json!("a"));
    args.insert("table".to_string(), json!([{"x": 1}]));
    let err = registry
        .invoke("enrich", &JadeExprValue::Null, &args)
        .unwrap_err();
    assert!(matches!(err, JadeError::Validation { .. }));
}

#[test]
fn server_time_reports_milliseconds() {
    let registry = JadeFunctionRegistry::with_builtins();
    let args = JadeArgs::new();
    let out = registry.invoke("serverTime", &JadeExprValue::Null, &args).unwrap();
    match out {
        // any moment after 2020-01-01 in ms
        JadeExprValue::Number(ms) => assert!(ms > 1.577e12),
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn unknown_function_is_a_registry_error() {
    let registry = JadeFunctionRegistry::with_builtins();
    let err = registry
        .invoke("pointseries", &JadeExprValue::Null, &JadeArgs::new())
        .unwrap_err();
    assert!(matches!(err, JadeError::Registry { .. }));
}
