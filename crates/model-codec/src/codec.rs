//! The value codec contract and its implementations for built-in types.
//!
//! Every modeled type exposes exactly one encode/decode pair over
//! [`serde_json::Value`]. Generated models implement [`JsonCodec`] by
//! delegating to their [`ObjectShape`](crate::ObjectShape), unions to their
//! registry or trial decoder, and scalar enums to
//! [`encode_enum`](crate::encode_enum)/[`decode_enum`](crate::decode_enum).

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::error::CodecError;

/// Conversion between a Rust value and its JSON wire form.
pub trait JsonCodec: Sized {
    fn encode_json(&self) -> Result<Value, CodecError>;
    fn decode_json(value: &Value) -> Result<Self, CodecError>;
}

/// Parses `bytes` once and decodes the result into `T`.
pub fn from_slice<T: JsonCodec>(bytes: &[u8]) -> Result<T, CodecError> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::decode_json(&value)
}

/// Parses `text` once and decodes the result into `T`.
pub fn from_str<T: JsonCodec>(text: &str) -> Result<T, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    T::decode_json(&value)
}

pub fn to_vec<T: JsonCodec>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&value.encode_json()?)?)
}

pub fn to_string<T: JsonCodec>(value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&value.encode_json()?)?)
}

impl JsonCodec for Value {
    fn encode_json(&self) -> Result<Value, CodecError> {
        Ok(self.clone())
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        Ok(value.clone())
    }
}

impl JsonCodec for String {
    fn encode_json(&self) -> Result<Value, CodecError> {
        Ok(Value::String(self.clone()))
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        value
            .as_str()
            .map(ToOwned::to_owned)
            .ok_or_else(|| CodecError::unexpected("string", value))
    }
}

impl JsonCodec for bool {
    fn encode_json(&self) -> Result<Value, CodecError> {
        Ok(Value::Bool(*self))
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::unexpected("boolean", value))
    }
}

macro_rules! signed_codec {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl JsonCodec for $ty {
            fn encode_json(&self) -> Result<Value, CodecError> {
                Ok(Value::from(*self))
            }

            fn decode_json(value: &Value) -> Result<Self, CodecError> {
                let n = value
                    .as_i64()
                    .ok_or_else(|| CodecError::unexpected($name, value))?;
                <$ty>::try_from(n).map_err(|_| CodecError::UnexpectedType {
                    expected: $name,
                    found: "out-of-range number",
                })
            }
        }
    )*};
}

macro_rules! unsigned_codec {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl JsonCodec for $ty {
            fn encode_json(&self) -> Result<Value, CodecError> {
                Ok(Value::from(*self))
            }

            fn decode_json(value: &Value) -> Result<Self, CodecError> {
                let n = value
                    .as_u64()
                    .ok_or_else(|| CodecError::unexpected($name, value))?;
                <$ty>::try_from(n).map_err(|_| CodecError::UnexpectedType {
                    expected: $name,
                    found: "out-of-range number",
                })
            }
        }
    )*};
}

signed_codec!(i8 => "int8", i16 => "int16", i32 => "int32", i64 => "int64");
unsigned_codec!(u8 => "uint8", u16 => "uint16", u32 => "uint32", u64 => "uint64");

impl JsonCodec for f64 {
    fn encode_json(&self) -> Result<Value, CodecError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(CodecError::NonFiniteNumber(*self))
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        value
            .as_f64()
            .ok_or_else(|| CodecError::unexpected("float64", value))
    }
}

impl JsonCodec for f32 {
    fn encode_json(&self) -> Result<Value, CodecError> {
        f64::from(*self).encode_json()
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        let n = value
            .as_f64()
            .ok_or_else(|| CodecError::unexpected("float32", value))?;
        let narrowed = n as f32;
        if !narrowed.is_finite() {
            return Err(CodecError::UnexpectedType {
                expected: "float32",
                found: "out-of-range number",
            });
        }
        Ok(narrowed)
    }
}

impl<T: JsonCodec> JsonCodec for Box<T> {
    fn encode_json(&self) -> Result<Value, CodecError> {
        (**self).encode_json()
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        T::decode_json(value).map(Box::new)
    }
}

impl<T: JsonCodec> JsonCodec for Vec<T> {
    fn encode_json(&self) -> Result<Value, CodecError> {
        let mut out = Vec::with_capacity(self.len());
        for (i, item) in self.iter().enumerate() {
            out.push(
                item.encode_json()
                    .map_err(|e| CodecError::field(format!("[{i}]"), e))?,
            );
        }
        Ok(Value::Array(out))
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        let Value::Array(items) = value else {
            return Err(CodecError::MalformedInput(format!(
                "expected array, found {}",
                crate::error::value_kind(value)
            )));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode_json(item).map_err(|e| CodecError::field(format!("[{i}]"), e)))
            .collect()
    }
}

/// `Record<T>`: a string-keyed map whose entry order is preserved.
impl<T: JsonCodec> JsonCodec for IndexMap<String, T> {
    fn encode_json(&self) -> Result<Value, CodecError> {
        let mut out = Map::with_capacity(self.len());
        for (key, item) in self {
            let encoded = item
                .encode_json()
                .map_err(|e| CodecError::field(key.clone(), e))?;
            out.insert(key.clone(), encoded);
        }
        Ok(Value::Object(out))
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        let Value::Object(map) = value else {
            return Err(CodecError::MalformedInput(format!(
                "expected object, found {}",
                crate::error::value_kind(value)
            )));
        };
        let mut out = IndexMap::with_capacity(map.len());
        for (key, item) in map {
            let decoded = T::decode_json(item).map_err(|e| CodecError::field(key.clone(), e))?;
            out.insert(key.clone(), decoded);
        }
        Ok(out)
    }
}
