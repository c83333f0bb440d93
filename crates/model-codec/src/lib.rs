//! Runtime JSON codecs for generated data models.
//!
//! Generated model types are plain Rust structs and enums; this crate supplies
//! everything they need to cross the JSON boundary:
//!
//! - [`NullableValue`] and [`OptionalValue`] - field containers that remember
//!   whether a key was absent, `null` or set
//! - [`ObjectShape`] - whole-object encode/decode driven by an ordered field
//!   list, with inheritance and literal fields
//! - [`ScalarEnumCodec`] - string and number enums, lenient or strict
//! - [`DiscriminatorRegistry`] - closed unions selected by a tag member
//! - [`TrialUnionDecoder`] - open unions decoded by ordered trial
//! - [`duration`] - Go-style duration strings (`"1m30s"`)
//!
//! Everything is expressed against the [`JsonCodec`] trait over
//! [`serde_json::Value`]; input is parsed once and each codec walks the parsed
//! tree. Shapes, registries and decoders are immutable after construction and
//! safe to share across threads.
//!
//! # Example
//!
//! ```
//! use json_model_codec::{from_str, to_string, CodecError};
//!
//! let sizes: Vec<u8> = from_str("[1, 2]").unwrap();
//! assert_eq!(to_string(&sizes).unwrap(), "[1,2]");
//!
//! let err = from_str::<Vec<u8>>("[1, -2]").unwrap_err();
//! assert_eq!(err.field_path().as_deref(), Some("[1]"));
//! assert!(matches!(err.root_cause(), CodecError::UnexpectedType { .. }));
//! ```

mod codec;
mod error;

pub mod duration;
pub mod enums;
pub mod presence;
pub mod shape;
pub mod union;

pub use codec::{from_slice, from_str, to_string, to_vec, JsonCodec};
pub use duration::{format_duration, parse_duration};
pub use enums::{
    decode_enum, encode_enum, DomainPolicy, EnumDomain, EnumScalar, ScalarEnum, ScalarEnumCodec,
    ScalarKind,
};
pub use error::{value_kind, CandidateFailure, CodecError, SchemaError};
pub use presence::{FieldSlot, NullPolicy, NullableValue, OptionalValue};
pub use shape::{FieldDescriptor, ObjectShape, ObjectShapeBuilder, Presence};
pub use union::{
    DiscriminatorRegistry, DiscriminatorRegistryBuilder, TagPosition, TrialUnionDecoder,
    TrialUnionDecoderBuilder, UnionValue, Variant, VariantDescriptor,
};
