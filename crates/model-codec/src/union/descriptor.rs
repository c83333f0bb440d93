use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::codec::JsonCodec;
use crate::error::CodecError;

type DecodeFn<U> = Arc<dyn Fn(&Value) -> Result<U, CodecError> + Send + Sync>;
type EncodeFn<U> = Arc<dyn Fn(&U) -> Option<Result<Value, CodecError>> + Send + Sync>;

/// Codec pair for one concrete member `V` of a union `U`.
pub struct VariantDescriptor<U> {
    type_name: &'static str,
    decode: DecodeFn<U>,
    encode: EncodeFn<U>,
}

impl<U> Clone for VariantDescriptor<U> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            decode: Arc::clone(&self.decode),
            encode: Arc::clone(&self.encode),
        }
    }
}

impl<U> fmt::Debug for VariantDescriptor<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDescriptor")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl<U: 'static> VariantDescriptor<U> {
    /// `wrap` lifts a decoded `V` into the union; `unwrap` returns the `V`
    /// held by a union value, or `None` for any other case.
    pub fn new<V: JsonCodec + 'static>(wrap: fn(V) -> U, unwrap: fn(&U) -> Option<&V>) -> Self {
        Self {
            type_name: type_name::<V>(),
            decode: Arc::new(move |raw: &Value| V::decode_json(raw).map(wrap)),
            encode: Arc::new(move |value: &U| unwrap(value).map(V::encode_json)),
        }
    }

    /// Rust type name of the concrete member.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn decode(&self, raw: &Value) -> Result<U, CodecError> {
        (self.decode)(raw)
    }

    /// `None` when `value` holds a different member.
    pub fn encode(&self, value: &U) -> Option<Result<Value, CodecError>> {
        (self.encode)(value)
    }
}
