//! Field presence containers.
//!
//! A field of a modeled type is either always present, optional
//! ([`OptionalValue`], absent or present) or nullable ([`NullableValue`],
//! absent, explicitly null or present). Both containers lower to a
//! [`FieldSlot`] when encoded; an `Absent` slot omits the key entirely.

mod nullable;
mod optional;
mod slot;

pub use nullable::NullableValue;
pub use optional::OptionalValue;
pub use slot::FieldSlot;

/// How an optional, non-nullable field treats an explicit `null` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// `null` decodes as if the key were missing.
    #[default]
    TreatAsAbsent,
    /// `null` is a type mismatch for the field.
    Reject,
}
