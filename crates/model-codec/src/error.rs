//! Error types for encoding and decoding.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Errors raised while encoding or decoding a modeled value.
///
/// Decode failures abort the whole top-level call; nested failures are kept
/// as a chain of [`CodecError::FieldTypeMismatch`] so the offending path can
/// be recovered with [`CodecError::field_path`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("field `{field}`: {source}")]
    FieldTypeMismatch {
        field: String,
        source: Box<CodecError>,
    },
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("cannot encode non-finite number {0}")]
    NonFiniteNumber(f64),
    #[error("{value} is not a member of enum `{domain}`")]
    NotInDomain { domain: String, value: Value },
    #[error("invalid duration `{0}`")]
    InvalidDuration(String),
    #[error("unknown variant {} for union `{union}`", display_tag(.tag))]
    UnknownVariant { union: String, tag: Option<String> },
    #[error("no variant of union `{union}` matched: {}", display_failures(.failures))]
    AllVariantsFailed {
        union: String,
        failures: Vec<CandidateFailure>,
    },
    #[error("value accessed on an unset field")]
    UnsetValueAccessed,
}

impl CodecError {
    /// Wraps `source` as a failure of the field named `field`.
    pub fn field(field: impl Into<String>, source: CodecError) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn unexpected(expected: &'static str, found: &Value) -> Self {
        Self::UnexpectedType {
            expected,
            found: value_kind(found),
        }
    }

    /// Dotted path of the innermost failing field, e.g. `seating[1].legs`.
    ///
    /// Returns `None` when the error is not a field failure.
    pub fn field_path(&self) -> Option<String> {
        let Self::FieldTypeMismatch { .. } = self else {
            return None;
        };
        let mut path = String::new();
        let mut current = self;
        while let Self::FieldTypeMismatch { field, source } = current {
            if !path.is_empty() && !field.starts_with('[') {
                path.push('.');
            }
            path.push_str(field);
            current = source;
        }
        Some(path)
    }

    /// The innermost error, skipping any field wrappers.
    pub fn root_cause(&self) -> &CodecError {
        let mut current = self;
        while let Self::FieldTypeMismatch { source, .. } = current {
            current = source;
        }
        current
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// One rejected candidate of an open union.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFailure {
    pub candidate: String,
    pub error: CodecError,
}

impl fmt::Display for CandidateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.candidate, self.error)
    }
}

/// Mistakes in union definitions, reported when a registry or trial decoder
/// is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("union `{0}` declares no variants")]
    EmptyUnion(String),
    #[error("union `{0}` has an empty discriminator key")]
    EmptyDiscriminatorKey(String),
    #[error("union `{union}` registers tag `{tag}` twice")]
    DuplicateTag { union: String, tag: String },
    #[error("union `{union}` declares candidate `{candidate}` twice")]
    DuplicateCandidate { union: String, candidate: String },
}

/// Name of the JSON kind of `value`, as used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn display_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("`{tag}`"),
        None => "(no tag)".to_string(),
    }
}

fn display_failures(failures: &[CandidateFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
