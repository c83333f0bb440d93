use serde_json::Value;

use super::FieldSlot;
use crate::codec::JsonCodec;
use crate::error::CodecError;

/// Tri-state field: absent, explicitly null, or present with a value.
#[derive(Debug, Clone, PartialEq)]
pub struct NullableValue<T> {
    slot: FieldSlot<T>,
}

impl<T> Default for NullableValue<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> NullableValue<T> {
    /// A set field holding `value`.
    pub fn set(value: T) -> Self {
        Self {
            slot: FieldSlot::Present(value),
        }
    }

    /// A set field holding no value; encodes as `null`.
    pub fn null() -> Self {
        Self {
            slot: FieldSlot::Null,
        }
    }

    /// An absent field; its key is omitted when encoding.
    pub fn unset() -> Self {
        Self {
            slot: FieldSlot::Absent,
        }
    }

    /// True for both `Null` and `Present`.
    pub fn is_set(&self) -> bool {
        !self.slot.is_absent()
    }

    pub fn is_null(&self) -> bool {
        self.slot.is_null()
    }

    /// Reads the held value.
    ///
    /// `Ok(None)` means the field is explicitly null. Reading an absent field
    /// fails with [`CodecError::UnsetValueAccessed`].
    pub fn value(&self) -> Result<Option<&T>, CodecError> {
        match &self.slot {
            FieldSlot::Absent => Err(CodecError::UnsetValueAccessed),
            FieldSlot::Null => Ok(None),
            FieldSlot::Present(v) => Ok(Some(v)),
        }
    }

    pub fn set_value(&mut self, value: T) {
        self.slot = FieldSlot::Present(value);
    }

    pub fn set_null(&mut self) {
        self.slot = FieldSlot::Null;
    }

    /// Returns the field to the absent state.
    pub fn clear(&mut self) {
        self.slot = FieldSlot::Absent;
    }

    pub fn slot(&self) -> &FieldSlot<T> {
        &self.slot
    }

    pub fn into_slot(self) -> FieldSlot<T> {
        self.slot
    }
}

impl<T> From<FieldSlot<T>> for NullableValue<T> {
    fn from(slot: FieldSlot<T>) -> Self {
        Self { slot }
    }
}

impl<T: JsonCodec> NullableValue<T> {
    pub fn encode_slot(&self) -> Result<FieldSlot<Value>, CodecError> {
        self.slot.as_ref().map(T::encode_json).transpose()
    }

    /// Decodes a value found under the field's key. A missing key never
    /// reaches this point and stays [`NullableValue::unset`].
    pub fn decode_present(raw: &Value) -> Result<Self, CodecError> {
        if raw.is_null() {
            return Ok(Self::null());
        }
        T::decode_json(raw).map(Self::set)
    }
}
