//! Type-erased field codecs.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::CodecError;
use crate::presence::FieldSlot;

pub(crate) type EncodeFn<T> = Arc<dyn Fn(&T) -> Result<FieldSlot<Value>, CodecError> + Send + Sync>;
pub(crate) type DecodeFn<T> = Arc<dyn Fn(&mut T, &Value) -> Result<(), CodecError> + Send + Sync>;

/// How a field's presence is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always emitted; a missing key leaves the default.
    Required,
    /// [`OptionalValue`](crate::OptionalValue): absent or present.
    Optional,
    /// [`NullableValue`](crate::NullableValue): absent, null or present.
    Nullable,
    /// A literal emitted on every encode and ignored on decode.
    Constant,
}

/// One declared field of an [`ObjectShape`](super::ObjectShape).
pub struct FieldDescriptor<T> {
    pub(crate) name: String,
    pub(crate) presence: Presence,
    pub(crate) encode: EncodeFn<T>,
    pub(crate) decode: DecodeFn<T>,
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            presence: self.presence,
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> FieldDescriptor<T> {
    /// Wire name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn encode(&self, value: &T) -> Result<FieldSlot<Value>, CodecError> {
        (self.encode)(value)
    }

    pub fn decode_into(&self, target: &mut T, raw: &Value) -> Result<(), CodecError> {
        (self.decode)(target, raw)
    }

    /// Re-targets this field at an embedding type `C` that holds a `T`.
    pub fn project<C: 'static>(
        &self,
        get: fn(&C) -> &T,
        get_mut: fn(&mut C) -> &mut T,
    ) -> FieldDescriptor<C> {
        let encode = Arc::clone(&self.encode);
        let decode = Arc::clone(&self.decode);
        FieldDescriptor {
            name: self.name.clone(),
            presence: self.presence,
            encode: Arc::new(move |outer: &C| encode(get(outer))),
            decode: Arc::new(move |outer: &mut C, raw: &Value| decode(get_mut(outer), raw)),
        }
    }
}
