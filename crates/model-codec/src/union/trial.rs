//! Open unions: no tag on the wire, the first candidate that decodes wins.
//!
//! Candidate order is part of the schema. It resolves real ambiguity, e.g. a
//! bare string matches a string candidate but never an object candidate,
//! while `{}` matches any object candidate whose fields are all optional.

use std::fmt;

use serde_json::Value;

use super::descriptor::VariantDescriptor;
use super::value::{UnionValue, Variant};
use crate::error::{CandidateFailure, CodecError, SchemaError};

/// Ordered candidate list of one open union.
pub struct TrialUnionDecoder<U> {
    union: String,
    candidates: Vec<(String, VariantDescriptor<U>)>,
}

impl<U> fmt::Debug for TrialUnionDecoder<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrialUnionDecoder")
            .field("union", &self.union)
            .field("candidates", &self.candidates)
            .finish()
    }
}

impl<U: 'static> TrialUnionDecoder<U> {
    pub fn builder(union: impl Into<String>) -> TrialUnionDecoderBuilder<U> {
        TrialUnionDecoderBuilder {
            union: union.into(),
            candidates: Vec::new(),
        }
    }

    pub fn union_name(&self) -> &str {
        &self.union
    }

    /// Candidate names in trial order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|(name, _)| name.as_str())
    }

    pub fn decode(&self, raw: &Value) -> Result<UnionValue<U>, CodecError> {
        let mut failures = Vec::new();
        for (name, candidate) in &self.candidates {
            match candidate.decode(raw) {
                Ok(value) => return Ok(UnionValue::tagged(name.as_str(), value)),
                Err(error) => {
                    tracing::debug!(
                        union = %self.union,
                        candidate = %name,
                        error = %error,
                        "candidate rejected"
                    );
                    failures.push(CandidateFailure {
                        candidate: name.clone(),
                        error,
                    });
                }
            }
        }
        Err(CodecError::AllVariantsFailed {
            union: self.union.clone(),
            failures,
        })
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<UnionValue<U>, CodecError> {
        let raw: Value = serde_json::from_slice(bytes)?;
        self.decode(&raw)
    }

    /// Delegates to the candidate named by `value.tag()`.
    pub fn encode(&self, value: &U) -> Result<Value, CodecError>
    where
        U: Variant,
    {
        let tag = value.tag();
        self.candidates
            .iter()
            .find(|(name, _)| name == tag)
            .and_then(|(_, candidate)| candidate.encode(value))
            .ok_or_else(|| CodecError::UnknownVariant {
                union: self.union.clone(),
                tag: Some(tag.to_owned()),
            })?
    }
}

/// Collects the candidates of a [`TrialUnionDecoder`], in trial order.
pub struct TrialUnionDecoderBuilder<U> {
    union: String,
    candidates: Vec<(String, VariantDescriptor<U>)>,
}

impl<U: 'static> TrialUnionDecoderBuilder<U> {
    /// Appends a candidate. `name` must equal [`Variant::tag`] of the union
    /// case the descriptor wraps: decode tags its result with `name`, while
    /// encode looks the candidate up by `tag()`.
    pub fn candidate(mut self, name: impl Into<String>, variant: VariantDescriptor<U>) -> Self {
        self.candidates.push((name.into(), variant));
        self
    }

    pub fn build(self) -> Result<TrialUnionDecoder<U>, SchemaError> {
        if self.candidates.is_empty() {
            return Err(SchemaError::EmptyUnion(self.union));
        }
        for (i, (name, _)) in self.candidates.iter().enumerate() {
            if self.candidates[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(SchemaError::DuplicateCandidate {
                    union: self.union.clone(),
                    candidate: name.clone(),
                });
            }
        }
        Ok(TrialUnionDecoder {
            union: self.union,
            candidates: self.candidates,
        })
    }
}
