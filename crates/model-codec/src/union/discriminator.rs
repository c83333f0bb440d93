//! Closed unions: a tag member selects the concrete shape.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::descriptor::VariantDescriptor;
use super::value::{UnionValue, Variant};
use crate::error::{value_kind, CodecError, SchemaError};

/// Where the discriminator member is written in an encoded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPosition {
    #[default]
    First,
    Last,
}

/// Tag-keyed dispatch table of one discriminated union.
pub struct DiscriminatorRegistry<U> {
    union: String,
    key: String,
    position: TagPosition,
    variants: IndexMap<String, VariantDescriptor<U>>,
}

impl<U> fmt::Debug for DiscriminatorRegistry<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscriminatorRegistry")
            .field("union", &self.union)
            .field("key", &self.key)
            .field("position", &self.position)
            .field("variants", &self.variants)
            .finish()
    }
}

impl<U: 'static> DiscriminatorRegistry<U> {
    pub fn builder(union: impl Into<String>, key: impl Into<String>) -> DiscriminatorRegistryBuilder<U> {
        DiscriminatorRegistryBuilder {
            union: union.into(),
            key: key.into(),
            position: TagPosition::default(),
            variants: Vec::new(),
        }
    }

    pub fn union_name(&self) -> &str {
        &self.union
    }

    pub fn discriminator_key(&self) -> &str {
        &self.key
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn variant(&self, tag: &str) -> Option<&VariantDescriptor<U>> {
        self.variants.get(tag)
    }

    /// Reads only the discriminator member of `raw`.
    pub fn peek_tag<'a>(&self, raw: &'a Value) -> Result<&'a str, CodecError> {
        let Value::Object(map) = raw else {
            return Err(CodecError::MalformedInput(format!(
                "expected object for union `{}`, found {}",
                self.union,
                value_kind(raw)
            )));
        };
        match map.get(&self.key) {
            Some(Value::String(tag)) => Ok(tag.as_str()),
            Some(other) => Err(self.unknown(Some(other.to_string()))),
            None => Err(self.unknown(None)),
        }
    }

    /// Peeks the tag, then decodes the whole payload with the matching variant.
    pub fn decode(&self, raw: &Value) -> Result<UnionValue<U>, CodecError> {
        let tag = self.peek_tag(raw)?;
        let Some(variant) = self.variants.get(tag) else {
            return Err(self.unknown(Some(tag.to_owned())));
        };
        variant
            .decode(raw)
            .map(|value| UnionValue::tagged(tag, value))
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<UnionValue<U>, CodecError> {
        let raw: Value = serde_json::from_slice(bytes)?;
        self.decode(&raw)
    }

    /// Encodes the variant held by `value` and adds the discriminator member.
    pub fn encode(&self, value: &U) -> Result<Value, CodecError>
    where
        U: Variant,
    {
        let tag = value.tag();
        let encoded = self
            .variants
            .get(tag)
            .and_then(|variant| variant.encode(value))
            .ok_or_else(|| self.unknown(Some(tag.to_owned())))??;
        match encoded {
            Value::Object(fields) => Ok(Value::Object(self.with_tag(tag, fields))),
            other => Err(CodecError::unexpected("object", &other)),
        }
    }

    pub fn encode_to_vec(&self, value: &U) -> Result<Vec<u8>, CodecError>
    where
        U: Variant,
    {
        Ok(serde_json::to_vec(&self.encode(value)?)?)
    }

    fn with_tag(&self, tag: &str, fields: Map<String, Value>) -> Map<String, Value> {
        let tag = Value::String(tag.to_owned());
        let rest = fields.into_iter().filter(|(key, _)| *key != self.key);
        let mut out = Map::new();
        match self.position {
            TagPosition::First => {
                out.insert(self.key.clone(), tag);
                out.extend(rest);
            }
            TagPosition::Last => {
                out.extend(rest);
                out.insert(self.key.clone(), tag);
            }
        }
        out
    }

    fn unknown(&self, tag: Option<String>) -> CodecError {
        tracing::debug!(union = %self.union, tag = ?tag, "unknown discriminator");
        CodecError::UnknownVariant {
            union: self.union.clone(),
            tag,
        }
    }
}

/// Collects the variants of a [`DiscriminatorRegistry`].
pub struct DiscriminatorRegistryBuilder<U> {
    union: String,
    key: String,
    position: TagPosition,
    variants: Vec<(String, VariantDescriptor<U>)>,
}

impl<U: 'static> DiscriminatorRegistryBuilder<U> {
    pub fn position(mut self, position: TagPosition) -> Self {
        self.position = position;
        self
    }

    /// Registers the variant written with discriminator value `tag`, which
    /// must equal [`Variant::tag`] of the union case the descriptor wraps.
    pub fn register(mut self, tag: impl Into<String>, variant: VariantDescriptor<U>) -> Self {
        self.variants.push((tag.into(), variant));
        self
    }

    pub fn build(self) -> Result<DiscriminatorRegistry<U>, SchemaError> {
        if self.key.is_empty() {
            return Err(SchemaError::EmptyDiscriminatorKey(self.union));
        }
        if self.variants.is_empty() {
            return Err(SchemaError::EmptyUnion(self.union));
        }
        let mut variants = IndexMap::with_capacity(self.variants.len());
        for (tag, variant) in self.variants {
            if variants.contains_key(&tag) {
                return Err(SchemaError::DuplicateTag {
                    union: self.union,
                    tag,
                });
            }
            variants.insert(tag, variant);
        }
        Ok(DiscriminatorRegistry {
            union: self.union,
            key: self.key,
            position: self.position,
            variants,
        })
    }
}
