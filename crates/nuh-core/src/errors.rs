//! Structured error types shared across nuh crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NuhError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the nuh crates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NuhError {
    /// Hypergraph structural errors (unknown identifiers, malformed edges).
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Arguments outside the domain accepted by an operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl NuhError {
    /// Builds a [`NuhError::Graph`] from a code and message.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        NuhError::Graph(ErrorInfo::new(code, message))
    }

    /// Builds a [`NuhError::InvalidArgument`] from a code and message.
    pub fn invalid_argument(code: impl Into<String>, message: impl Into<String>) -> Self {
        NuhError::InvalidArgument(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NuhError::Graph(info) | NuhError::InvalidArgument(info) => info,
        }
    }

    /// Attaches a context entry to the payload, whatever the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            NuhError::Graph(info) => NuhError::Graph(info.with_context(key, value)),
            NuhError::InvalidArgument(info) => {
                NuhError::InvalidArgument(info.with_context(key, value))
            }
        }
    }

    /// Attaches a remediation hint to the payload.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            NuhError::Graph(info) => NuhError::Graph(info.with_hint(hint)),
            NuhError::InvalidArgument(info) => NuhError::InvalidArgument(info.with_hint(hint)),
        }
    }
}
