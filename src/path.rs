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

//! # Path Query Module
//!
//! This module implements the path-query sublanguage used to address
//! containers inside a JSON document. The supported grammar is the subset of
//! JSONPath the bundled visualization presets exercise:
//!
//! - optional `$` root
//! - dot member access: `data`, `a.b.c`
//! - bracket member access: `['label']`, `["label"]`
//! - numeric index: `data[0]`
//! - wildcard: `[*]`, `.*`
//! - filter predicates: `[?(@.key==='x')]` with `===`, `==`, `!==`, `!=`,
//!   `<`, `<=`, `>`, `>=`
//!
//! A query is compiled once into a segment list and then evaluated against a
//! document. Evaluation is read-only and returns the concrete locations of
//! every match in document traversal order; a separate step resolves a
//! location into a mutable reference so callers can append into the original
//! tree rather than a copy.

use std::fmt;

use serde_json::Value;

use crate::errors::{JadeError, Result};

/// One concrete navigation step inside a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JadeStep {
    /// Object member access by key.
    Key(String),
    /// Array element access by position.
    Index(usize),
}

/// A concrete location of a match: the step list from the document root.
pub type JadeLocation = Vec<JadeStep>;

/// Comparison operators accepted inside filter predicates.
///
/// `===`/`==` and `!==`/`!=` are intentionally collapsed to the same
/// semantics; the document tree is already typed JSON, so there is no
/// coercion for the strict forms to suppress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JadeCompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// A filter predicate of the form `@.path <op> literal`.
#[derive(Clone, Debug, PartialEq)]
pub struct JadePredicate {
    /// Member path below the candidate element; empty compares the element
    /// itself (`@ > 5`).
    pub path: Vec<String>,
    pub op: JadeCompareOp,
    pub literal: Value,
}

/// One compiled query segment.
#[derive(Clone, Debug, PartialEq)]
pub enum JadeSegment {
    Member(String),
    Index(usize),
    Wildcard,
    Filter(JadePredicate),
}

/// A compiled path query.
#[derive(Clone, Debug)]
pub struct JadeQuery {
    text: String,
    segments: Vec<JadeSegment>,
}

impl fmt::Display for JadeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl JadeQuery {
    /// Compiles a query string into its segment list.
    #[allow(non_snake_case)]
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(JadeError::parse("path-query", "empty query"));
        }
        let segments = QueryParser::new(trimmed).parse_segments()?;
        Ok(Self {
            text: trimmed.to_string(),
            segments,
        })
    }

    /// Borrow of the compiled segments.
    pub fn segments(&self) -> &[JadeSegment] {
        &self.segments
    }

    /// Evaluates the query, returning every matched location in document
    /// traversal order. Zero matches is not an error.
    #[allow(non_snake_case)]
    pub fn select(&self, document: &Value) -> Vec<JadeLocation> {
        let mut frontier: Vec<(JadeLocation, &Value)> = vec![(Vec::new(), document)];
        for segment in &self.segments {
            let mut next = Vec::new();
            for (location, node) in frontier {
                match segment {
                    JadeSegment::Member(key) => {
                        if let Some(child) = node.get(key.as_str()) {
                            let mut loc = location.clone();
                            loc.push(JadeStep::Key(key.clone()));
                            next.push((loc, child));
                        }
                    }
                    JadeSegment::Index(idx) => {
                        if let Some(child) = node.get(*idx) {
                            let mut loc = location.clone();
                            loc.push(JadeStep::Index(*idx));
                            next.push((loc, child));
                        }
                    }
                    JadeSegment::Wildcard => match node {
                        Value::Array(items) => {
                            for (i, child) in items.iter().enumerate() {
                                let mut loc = location.clone();
                                loc.push(JadeStep::Index(i));
                                next.push((loc, child));
                            }
                        }
                        Value::Object(map) => {
                            for (key, child) in map {
                                let mut loc = location.clone();
                                loc.push(JadeStep::Key(key.clone()));
                                next.push((loc, child));
                            }
                        }
                        _ => {}
                    },
                    JadeSegment::Filter(predicate) => match node {
                        Value::Array(items) => {
                            for (i, child) in items.iter().enumerate() {
                                if predicate.matches(child) {
                                    let mut loc = location.clone();
                                    loc.push(JadeStep::Index(i));
                                    next.push((loc, child));
                                }
                            }
                        }
                        Value::Object(map) => {
                            for (key, child) in map {
                                if predicate.matches(child) {
                                    let mut loc = location.clone();
                                    loc.push(JadeStep::Key(key.clone()));
                                    next.push((loc, child));
                                }
                            }
                        }
                        _ => {}
                    },
                }
            }
            frontier = next;
        }
        frontier.into_iter().map(|(location, _)| location).collect()
    }
}

/// Navigates a location inside a document and returns the node mutably.
///
/// Returns `None` when the document no longer contains the location, which
/// can only happen if the tree changed between selection and resolution.
#[allow(non_snake_case)]
pub fn resolve_mut<'a>(document: &'a mut Value, location: &JadeLocation) -> Option<&'a mut Value> {
    let mut node = document;
    for step in location {
        node = match step {
            JadeStep::Key(key) => node.get_mut(key.as_str())?,
            JadeStep::Index(idx) => node.get_mut(*idx)?,
        };
    }
    Some(node)
}

impl JadePredicate {
    /// Evaluates the predicate against one candidate element.
    pub fn matches(&self, element: &Value) -> bool {
        let mut target = element;
        for key in &self.path {
            match target.get(key.as_str()) {
                Some(child) => target = child,
                None => return false,
            }
        }
        match self.op {
            JadeCompareOp::Eq => values_equal(target, &self.literal),
            JadeCompareOp::Ne => !values_equal(target, &self.literal),
            JadeCompareOp::Lt => compare_order(target, &self.literal, |o| o == std::cmp::Ordering::Less),
            JadeCompareOp::Le => compare_order(target, &self.literal, |o| o != std::cmp::Ordering::Greater),
            JadeCompareOp::Gt => compare_order(target, &self.literal, |o| o == std::cmp::Ordering::Greater),
            JadeCompareOp::Ge => compare_order(target, &self.literal, |o| o != std::cmp::Ordering::Less),
        }
    }
}

/// Equality with numeric widening so `1` matches `1.0`.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => left == right,
    }
}

fn compare_order(left: &Value, right: &Value, accept: impl Fn(std::cmp::Ordering) -> bool) -> bool {
    match (left, right) {
        (Value::String(l), Value::String(r)) => accept(l.cmp(r)),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(l), Some(r)) => l.partial_cmp(&r).map(&accept).unwrap_or(false),
            _ => false,
        },
    }
}

struct QueryParser {
    chars: Vec<char>,
    pos: usize,
}

impl QueryParser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn error(&self, message: &str) -> JadeError {
        JadeError::parse(
            "path-query",
            format!("{} at offset {}", message, self.pos),
        )
    }

    fn parse_segments(&mut self) -> Result<Vec<JadeSegment>> {
        let mut segments = Vec::new();
        if self.peek() == Some('$') {
            self.pos += 1;
        }
        loop {
            match self.peek() {
                None => break,
                Some('.') => {
                    self.pos += 1;
                    if self.peek() == Some('*') {
                        self.pos += 1;
                        segments.push(JadeSegment::Wildcard);
                    } else {
                        segments.push(JadeSegment::Member(self.parse_ident()?));
                    }
                }
                Some('[') => {
                    self.pos += 1;
                    segments.push(self.parse_bracket()?);
                }
                Some(_) if segments.is_empty() => {
                    segments.push(JadeSegment::Member(self.parse_ident()?));
                }
                Some(c) => {
                    return Err(self.error(&format!("unexpected character '{}'", c)));
                }
            }
        }
        if segments.is_empty() {
            return Err(self.error("query selects nothing"));
        }
        Ok(segments)
    }

    fn parse_ident(&mut self) -> Result<String> {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' || c == '-' {
                ident.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        if ident.is_empty() {
            return Err(self.error("expected member name"));
        }
        Ok(ident)
    }

    fn parse_bracket(&mut self) -> Result<JadeSegment> {
        self.skip_spaces();
        let segment = match self.peek() {
            None => return Err(self.error("unterminated bracket")),
            Some('*') => {
                self.pos += 1;
                JadeSegment::Wildcard
            }
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                JadeSegment::Member(self.parse_quoted(q)?)
            }
            Some('?') => {
                self.pos += 1;
                if self.peek() != Some('(') {
                    return Err(self.error("expected '(' after '?'"));
                }
                self.pos += 1;
                let predicate = self.parse_predicate()?;
                self.skip_spaces();
                if self.peek() != Some(')') {
                    return Err(self.error("expected ')' closing filter"));
                }
                self.pos += 1;
                JadeSegment::Filter(predicate)
            }
            Some(c) if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(d) = self.peek() {
                    if d.is_ascii_digit() {
                        digits.push(d);
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| self.error("index out of range"))?;
                JadeSegment::Index(index)
            }
            Some(c) => {
                return Err(self.error(&format!("unexpected character '{}' in bracket", c)));
            }
        };
        self.skip_spaces();
        if self.peek() != Some(']') {
            return Err(self.error("expected ']'"));
        }
        self.pos += 1;
        Ok(segment)
    }

    fn parse_predicate(&mut self) -> Result<JadePredicate> {
        self.skip_spaces();
        if self.peek() != Some('@') {
            return Err(self.error("filter operand must start with '@'"));
        }
        self.pos += 1;
        let mut path = Vec::new();
        while self.peek() == Some('.') {
            self.pos += 1;
            path.push(self.parse_ident()?);
        }
        self.skip_spaces();
        let op = self.parse_operator()?;
        self.skip_spaces();
        let literal = self.parse_literal()?;
        Ok(JadePredicate { path, op, literal })
    }

    fn parse_operator(&mut self) -> Result<JadeCompareOp> {
        let rest: String = self.chars[self.pos..].iter().take(3).collect();
        let (op, len) = if rest.starts_with("===") {
            (JadeCompareOp::Eq, 3)
        } else if rest.starts_with("!==") {
            (JadeCompareOp::Ne, 3)
        } else if rest.starts_with("==") {
            (JadeCompareOp::Eq, 2)
        } else if rest.starts_with("!=") {
            (JadeCompareOp::Ne, 2)
        } else if rest.starts_with("<=") {
            (JadeCompareOp::Le, 2)
        } else if rest.starts_with(">=") {
            (JadeCompareOp::Ge, 2)
        } else if rest.starts_with('<') {
            (JadeCompareOp::Lt, 1)
        } else if rest.starts_with('>') {
            (JadeCompareOp::Gt, 1)
        } else {
            return Err(self.error("expected comparison operator"));
        };
        self.pos += len;
        Ok(op)
    }

    fn parse_literal(&mut self) -> Result<Value> {
        match self.peek() {
            None => Err(self.error("expected literal")),
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                Ok(Value::String(self.parse_quoted(q)?))
            }
            Some(_) => {
                let mut token = String::new();
                while let Some(c) = self.peek() {
                    if c == ')' || c.is_whitespace() {
                        break;
                    }
                    token.push(c);
                    self.pos += 1;
                }
                match token.as_str() {
                    "true" => return Ok(Value::Bool(true)),
                    "false" => return Ok(Value::Bool(false)),
                    "null" => return Ok(Value::Null),
                    _ => {}
                }
                if let Ok(n) = token.parse::<i64>() {
                    return Ok(Value::Number(n.into()));
                }
                if let Ok(f) = token.parse::<f64>() {
                    if let Some(n) = serde_json::Number::from_f64(f) {
                        return Ok(Value::Number(n));
                    }
                }
                Err(self.error(&format!("invalid literal '{}'", token)))
            }
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.chars.get(self.pos).copied() {
                None => return Err(self.error("unterminated string literal")),
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some('\\') => {
                    self.pos += 1;
                    match self.chars.get(self.pos).copied() {
                        Some(c @ ('"' | '\'' | '\\')) => {
                            out.push(c);
                            self.pos += 1;
                        }
                        _ => return Err(self.error("invalid escape in string literal")),
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }
}
