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

//! # Relaxed-JSON Parser Module
//!
//! This module parses the forgiving JSON dialect used by document and value
//! templates. The grammar is a superset of JSON that tolerates the shortcuts
//! hand-written chart documents rely on:
//!
//! - `//`, `#` single-line comments and `/* */` block comments
//! - unquoted object keys
//! - single-quoted strings in addition to double-quoted
//! - trailing commas, and omitted commas between entries
//! - quoteless scalar strings (terminated by `,`, `}`, `]`, newline, or a
//!   comment)
//!
//! The parser is a small recursive-descent routine producing
//! `serde_json::Value`; exactly one top-level value is accepted and any
//! trailing non-whitespace input is a parse error.

use serde_json::{Map, Number, Value};

use crate::errors::{JadeError, Result};

/// Parses a relaxed-JSON source string into a JSON value.
///
/// # Example
///
/// ```text
/// parse("{layout: {title: 'Example'}, data: [], }")
///   -> {"layout": {"title": "Example"}, "data": []}
/// ```
#[allow(non_snake_case)]
pub fn parse(source: &str) -> Result<Value> {
    let mut parser = RelaxedParser::new(source);
    parser.skip_trivia();
    let value = parser.parse_value()?;
    parser.skip_trivia();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(value)
}

struct RelaxedParser {
    chars: Vec<char>,
    pos: usize,
}

impl RelaxedParser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn error(&self, message: &str) -> JadeError {
        let mut line = 1usize;
        let mut column = 1usize;
        for c in self.chars.iter().take(self.pos) {
            if *c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        JadeError::parse(
            "relaxed-json",
            format!("{} at line {}, column {}", message, line, column),
        )
    }

    /// Skips whitespace and all comment forms.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.pos += 1;
                }
                Some('#') => self.skip_line(),
                Some('/') => match self.chars.get(self.pos + 1) {
                    Some('/') => self.skip_line(),
                    Some('*') => {
                        self.pos += 2;
                        while self.pos < self.chars.len() {
                            if self.chars[self.pos] == '*'
                                && self.chars.get(self.pos + 1) == Some(&'/')
                            {
                                self.pos += 2;
                                break;
                            }
                            self.pos += 1;
                        }
                    }
                    _ => break,
                },
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_trivia();
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                Ok(Value::String(self.parse_quoted(q)?))
            }
            Some(_) => self.parse_scalar(),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.pos += 1; // consume '{'
        let mut map = Map::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return Err(self.error("unterminated object")),
                Some('}') => {
                    self.pos += 1;
                    return Ok(Value::Object(map));
                }
                Some(',') => {
                    self.pos += 1;
                }
                _ => {
                    let key = self.parse_key()?;
                    self.skip_trivia();
                    if self.peek() != Some(':') {
                        return Err(self.error("expected ':' after object key"));
                    }
                    self.pos += 1;
                    let value = self.parse_value()?;
                    map.insert(key, value);
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.pos += 1; // consume '['
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return Err(self.error("unterminated array")),
                Some(']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                Some(',') => {
                    self.pos += 1;
                }
                _ => {
                    items.push(self.parse_value()?);
                }
            }
        }
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                self.parse_quoted(q)
            }
            _ => {
                let mut key = String::new();
                while let Some(c) = self.peek() {
                    if c == ':' || c == ',' || c == '}' || c.is_whitespace() {
                        break;
                    }
                    key.push(c);
                    self.pos += 1;
                }
                if key.is_empty() {
                    return Err(self.error("expected object key"));
                }
                Ok(key)
            }
        }
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    None => return Err(self.error("unterminated escape sequence")),
                    Some('"') => out.push('"'),
                    Some('\'') => out.push('\''),
                    Some('\\') => out.push('\\'),
                    Some('/') => out.push('/'),
                    Some('b') => out.push('\u{0008}'),
                    Some('f') => out.push('\u{000C}'),
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('u') => {
                        let mut code = 0u32;
                        for _ in 0..4 {
                            let digit = self
                                .bump()
                                .and_then(|c| c.to_digit(16))
                                .ok_or_else(|| self.error("invalid unicode escape"))?;
                            code = code * 16 + digit;
                        }
                        let c = char::from_u32(code)
                            .ok_or_else(|| self.error("invalid unicode code point"))?;
                        out.push(c);
                    }
                    Some(other) => {
                        return Err(self.error(&format!("invalid escape '\\{}'", other)));
                    }
                },
                Some(c) => out.push(c),
            }
        }
    }

    /// Parses a bare scalar: number, boolean, null, or a quoteless string.
    ///
    /// Quoteless strings terminate at a structural character, newline, or
    /// comment start, then trailing spaces are trimmed. This keeps substituted
    /// cell values such as `15_9-F-1 A` parseable without quoting.
    fn parse_scalar(&mut self) -> Result<Value> {
        let mut raw = String::new();
        while let Some(c) = self.peek() {
            if c == ',' || c == '}' || c == ']' || c == '\n' {
                break;
            }
            if c == '#' {
                break;
            }
            if c == '/'
                && matches!(self.chars.get(self.pos + 1), Some('/') | Some('*'))
            {
                break;
            }
            raw.push(c);
            self.pos += 1;
        }
        let token = raw.trim();
        if token.is_empty() {
            return Err(self.error("expected a value"));
        }
        match token {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            "null" => return Ok(Value::Null),
            _ => {}
        }
        if let Ok(n) = token.parse::<i64>() {
            return Ok(Value::Number(n.into()));
        }
        if let Ok(f) = token.parse::<f64>() {
            if let Some(n) = Number::from_f64(f) {
                return Ok(Value::Number(n));
            }
        }
        Ok(Value::String(token.to_string()))
    }
}
