//! Struct codec: whole-object encode/decode driven by an ordered field list.
//!
//! An [`ObjectShape`] is built once per modeled type, usually in a
//! `static LazyLock`, and shared read-only afterwards:
//!
//! ```
//! use std::sync::LazyLock;
//! use json_model_codec::{JsonCodec, CodecError, ObjectShape, OptionalValue};
//! use serde_json::{json, Value};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Cat {
//!     name: String,
//!     nickname: OptionalValue<String>,
//! }
//!
//! static CAT: LazyLock<ObjectShape<Cat>> = LazyLock::new(|| {
//!     ObjectShape::builder("Cat")
//!         .field("name", |c: &Cat| &c.name, |c: &mut Cat| &mut c.name)
//!         .optional("nickname", |c: &Cat| &c.nickname, |c: &mut Cat| &mut c.nickname)
//!         .build()
//! });
//!
//! impl JsonCodec for Cat {
//!     fn encode_json(&self) -> Result<Value, CodecError> {
//!         CAT.encode(self)
//!     }
//!     fn decode_json(value: &Value) -> Result<Self, CodecError> {
//!         CAT.decode(value)
//!     }
//! }
//!
//! let cat = Cat::decode_json(&json!({"name": "Whiskers"})).unwrap();
//! assert!(!cat.nickname.is_present());
//! assert_eq!(cat.encode_json().unwrap(), json!({"name": "Whiskers"}));
//! ```

mod builder;
mod field;

pub use builder::ObjectShapeBuilder;
pub use field::{FieldDescriptor, Presence};

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{value_kind, CodecError};
use crate::presence::{FieldSlot, NullPolicy};

/// Ordered field list of one modeled type.
pub struct ObjectShape<T> {
    name: String,
    fields: Vec<FieldDescriptor<T>>,
    null_policy: NullPolicy,
}

impl<T> Clone for ObjectShape<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            fields: self.fields.clone(),
            null_policy: self.null_policy,
        }
    }
}

impl<T> fmt::Debug for ObjectShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectShape")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("null_policy", &self.null_policy)
            .finish()
    }
}

impl<T: 'static> ObjectShape<T> {
    pub fn builder(name: impl Into<String>) -> ObjectShapeBuilder<T> {
        ObjectShapeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }

    /// Encodes `value` as a JSON object, omitting absent fields.
    pub fn encode(&self, value: &T) -> Result<Value, CodecError> {
        self.encode_map(value).map(Value::Object)
    }

    pub fn encode_map(&self, value: &T) -> Result<Map<String, Value>, CodecError> {
        let mut out = Map::with_capacity(self.fields.len());
        for field in &self.fields {
            let slot = field
                .encode(value)
                .map_err(|e| CodecError::field(&field.name, e))?;
            match slot {
                FieldSlot::Absent => {}
                FieldSlot::Null => {
                    out.insert(field.name.clone(), Value::Null);
                }
                FieldSlot::Present(encoded) => {
                    out.insert(field.name.clone(), encoded);
                }
            }
        }
        Ok(out)
    }

    pub fn decode(&self, raw: &Value) -> Result<T, CodecError>
    where
        T: Default,
    {
        let mut out = T::default();
        self.decode_fields(&mut out, raw)?;
        Ok(out)
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: Default,
    {
        let raw: Value = serde_json::from_slice(bytes)?;
        self.decode(&raw)
    }

    /// Decodes declared fields of `raw` onto a copy of `target` and commits
    /// the copy only when every field decoded. Fields whose key is missing
    /// keep their current value; unknown keys are ignored.
    pub fn decode_into(&self, target: &mut T, raw: &Value) -> Result<(), CodecError>
    where
        T: Clone,
    {
        let mut scratch = target.clone();
        self.decode_fields(&mut scratch, raw)?;
        *target = scratch;
        Ok(())
    }

    fn decode_fields(&self, target: &mut T, raw: &Value) -> Result<(), CodecError> {
        let Value::Object(map) = raw else {
            return Err(CodecError::MalformedInput(format!(
                "expected object for `{}`, found {}",
                self.name,
                value_kind(raw)
            )));
        };

        for field in &self.fields {
            let Some(item) = map.get(&field.name) else {
                continue;
            };
            // Optional decoders turn null into absent; Reject stops it first.
            if item.is_null()
                && field.presence == Presence::Optional
                && self.null_policy == NullPolicy::Reject
            {
                return Err(CodecError::field(
                    &field.name,
                    CodecError::unexpected("non-null value", item),
                ));
            }
            field
                .decode_into(target, item)
                .map_err(|e| CodecError::field(&field.name, e))?;
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for key in map.keys() {
                if self.field(key).is_none() {
                    tracing::trace!(shape = %self.name, key = %key, "ignoring unknown key");
                }
            }
        }
        Ok(())
    }
}
