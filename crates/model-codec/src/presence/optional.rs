use serde_json::Value;

use super::FieldSlot;
use crate::codec::JsonCodec;
use crate::error::CodecError;

/// Bi-state field: absent or present with a value. There is no null state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionalValue<T>(Option<T>);

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> OptionalValue<T> {
    pub fn present(value: T) -> Self {
        Self(Some(value))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: JsonCodec> OptionalValue<T> {
    pub fn encode_slot(&self) -> Result<FieldSlot<Value>, CodecError> {
        match &self.0 {
            Some(v) => v.encode_json().map(FieldSlot::Present),
            None => Ok(FieldSlot::Absent),
        }
    }

    /// Decodes a non-null value found under the field's key. The owning
    /// shape maps an explicit `null` to absent or rejects it, per its
    /// [`NullPolicy`](super::NullPolicy).
    pub fn decode_present(raw: &Value) -> Result<Self, CodecError> {
        T::decode_json(raw).map(Self::present)
    }
}
