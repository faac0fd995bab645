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

use jadex::{builtin_elements, plotly_renderer, relaxed, JadeExprValue, JadeFigure};

/// Pulls the chart document out of a preset expression: the argument of the
/// leading `json` step. The documents use single-quoted strings only, so the
/// next double quote closes the argument.
fn embedded_document(expression: &str) -> &str {
    let start = expression.find("json \"").expect("json step") + "json \"".len();
    let rest = &expression[start..];
    let end = rest.find('"').expect("closing quote");
    &rest[..end]
}

#[test]
fn four_presets_with_manifest_data() {
    let elements = builtin_elements();
    assert_eq!(elements.len(), 4);
    for element in &elements {
        assert!(element.name.starts_with("plotly_"));
        assert!(!element.help.is_empty());
        assert!(element.width > 0 && element.height > 0);
        assert!(element.expression.ends_with("| render as=plotly"));
    }
}

#[test]
fn embedded_documents_are_renderable_figures() {
    for element in builtin_elements() {
        let document = embedded_document(&element.expression);
        let parsed = relaxed::parse(document)
            .unwrap_or_else(|e| panic!("{}: {}", element.name, e));
        let figure = JadeFigure::from_expr(&JadeExprValue::Json(parsed))
            .unwrap_or_else(|e| panic!("{}: {}", element.name, e));
        assert!(!figure.data.is_empty(), "{} has no traces", element.name);
    }
}

#[test]
fn every_enrich_step_names_a_path() {
    for element in builtin_elements() {
        let enrich_steps = element.expression.matches("| enrich").count();
        let paths = element.expression.matches("path=").count();
        assert!(enrich_steps >= 3, "{} has too few enrich steps", element.name);
        assert_eq!(enrich_steps, paths, "{}", element.name);
    }
}

#[test]
fn renderer_manifest_entry() {
    let renderer = plotly_renderer();
    assert_eq!(renderer.name, "plotly");
    assert_eq!(renderer.display_name, "Plotly");
    assert!(renderer.reuse_dom_node);
}
