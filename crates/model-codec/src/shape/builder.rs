use std::sync::Arc;

use serde_json::Value;

use super::field::{FieldDescriptor, Presence};
use super::ObjectShape;
use crate::codec::JsonCodec;
use crate::error::CodecError;
use crate::presence::{FieldSlot, NullPolicy, NullableValue, OptionalValue};

/// Collects the fields of an [`ObjectShape`].
///
/// Accessors are plain function pointers so the wire name of a field is
/// independent of the Rust field it reads. Declaring a wire name twice
/// replaces the earlier declaration in place, which is how a child shape
/// overrides a field inherited through [`ObjectShapeBuilder::extends`].
pub struct ObjectShapeBuilder<T> {
    name: String,
    fields: Vec<FieldDescriptor<T>>,
    null_policy: NullPolicy,
}

impl<T: 'static> ObjectShapeBuilder<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            null_policy: NullPolicy::default(),
        }
    }

    pub fn null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }

    /// A field that is always emitted.
    pub fn field<F: JsonCodec + 'static>(
        self,
        name: impl Into<String>,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        self.push(FieldDescriptor {
            name: name.into(),
            presence: Presence::Required,
            encode: Arc::new(move |v: &T| get(v).encode_json().map(FieldSlot::Present)),
            decode: Arc::new(move |v: &mut T, raw: &Value| -> Result<(), CodecError> {
                *get_mut(v) = F::decode_json(raw)?;
                Ok(())
            }),
        })
    }

    /// A field that is omitted while absent. An explicit `null` on the wire
    /// decodes as absent unless the shape uses [`NullPolicy::Reject`].
    pub fn optional<F: JsonCodec + 'static>(
        self,
        name: impl Into<String>,
        get: fn(&T) -> &OptionalValue<F>,
        get_mut: fn(&mut T) -> &mut OptionalValue<F>,
    ) -> Self {
        self.push(FieldDescriptor {
            name: name.into(),
            presence: Presence::Optional,
            encode: Arc::new(move |v: &T| get(v).encode_slot()),
            decode: Arc::new(move |v: &mut T, raw: &Value| -> Result<(), CodecError> {
                *get_mut(v) = if raw.is_null() {
                    OptionalValue::absent()
                } else {
                    OptionalValue::decode_present(raw)?
                };
                Ok(())
            }),
        })
    }

    pub fn nullable<F: JsonCodec + 'static>(
        self,
        name: impl Into<String>,
        get: fn(&T) -> &NullableValue<F>,
        get_mut: fn(&mut T) -> &mut NullableValue<F>,
    ) -> Self {
        self.push(FieldDescriptor {
            name: name.into(),
            presence: Presence::Nullable,
            encode: Arc::new(move |v: &T| get(v).encode_slot()),
            decode: Arc::new(move |v: &mut T, raw: &Value| -> Result<(), CodecError> {
                *get_mut(v) = NullableValue::decode_present(raw)?;
                Ok(())
            }),
        })
    }

    /// A literal property, such as the fixed tag of a discriminated model.
    pub fn constant(self, name: impl Into<String>, literal: impl Into<Value>) -> Self {
        let literal = literal.into();
        self.push(FieldDescriptor {
            name: name.into(),
            presence: Presence::Constant,
            encode: Arc::new(move |_: &T| -> Result<FieldSlot<Value>, CodecError> {
                Ok(FieldSlot::Present(literal.clone()))
            }),
            decode: Arc::new(|_: &mut T, _: &Value| -> Result<(), CodecError> { Ok(()) }),
        })
    }

    /// Inherits every field of `parent`, reached through the embedded `P`.
    /// Call before declaring the child's own fields.
    pub fn extends<P: 'static>(
        mut self,
        parent: &ObjectShape<P>,
        get: fn(&T) -> &P,
        get_mut: fn(&mut T) -> &mut P,
    ) -> Self {
        for field in parent.fields() {
            self = self.push(field.project(get, get_mut));
        }
        self
    }

    pub fn build(self) -> ObjectShape<T> {
        ObjectShape {
            name: self.name,
            fields: self.fields,
            null_policy: self.null_policy,
        }
    }

    fn push(mut self, field: FieldDescriptor<T>) -> Self {
        match self.fields.iter().position(|f| f.name == field.name) {
            Some(index) => self.fields[index] = field,
            None => self.fields.push(field),
        }
        self
    }
}
