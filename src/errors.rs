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

//! # Jade Error Module
//!
//! This module defines the error types and utilities used throughout the Jade
//! toolkit for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Jade uses a structured error approach with the following principles:
//!
//! - **Explicit Error Types**: Each error variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors include relevant context (the grammar that failed,
//!   the offending path, the function name) to aid debugging
//! - **Fail-Fast**: The enrichment routine performs no local recovery; errors
//!   surface synchronously to the pipeline evaluator that invoked it
//! - **Serde Support**: Errors can be serialized/deserialized for logging and
//!   persistence
//!
//! ## Error Categories
//!
//! - **Parse**: A template substitution produced text that fails to parse under
//!   the expected grammar (path query or relaxed-JSON)
//! - **Type**: A resolved container does not support the append operation
//! - **MissingInput**: A required argument was not supplied
//! - **Template**: A placeholder could not be resolved against the context
//! - **Validation**: Input validation failures outside the grammars
//! - **Registry**: Function registration and lookup failures
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Jade.
///
/// This is a type alias for `std::result::Result<T, JadeError>` that provides
/// a more concise way to write function signatures that return Jade errors.
pub type Result<T> = std::result::Result<T, JadeError>;

/// Canonical error enumeration for Jade.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum JadeError {
    /// A string failed to parse under one of the sublanguage grammars.
    #[error("{grammar} parse error: {message}")]
    Parse { grammar: String, message: String },

    /// A resolved container cannot accept the attempted append.
    #[error("type error at '{path}': {message}")]
    Type { path: String, message: String },

    /// A required input was absent.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A template placeholder did not resolve against the context.
    #[error("template error: {message}")]
    Template { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failures while registering or resolving expression functions.
    #[error("registry error for '{function}': {message}")]
    Registry { function: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for JadeError {
    fn from(err: io::Error) -> Self {
        JadeError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JadeError {
    fn from(err: serde_json::Error) -> Self {
        JadeError::Serde(err.to_string())
    }
}

impl JadeError {
    /// Helper to construct parse errors tagged with the failing grammar.
    pub fn parse(grammar: impl Into<String>, message: impl Into<String>) -> Self {
        JadeError::Parse {
            grammar: grammar.into(),
            message: message.into(),
        }
    }

    /// Helper to construct type errors tagged with the offending path.
    pub fn type_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        JadeError::Type {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Helper to construct missing-input errors.
    pub fn missing_input<T: Into<String>>(name: T) -> Self {
        JadeError::MissingInput(name.into())
    }

    /// Helper to construct template errors.
    pub fn template<T: Into<String>>(message: T) -> Self {
        JadeError::Template {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        JadeError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct registry errors.
    pub fn registry(function: impl Into<String>, message: impl Into<String>) -> Self {
        JadeError::Registry {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        JadeError::Internal(message.into())
    }
}
