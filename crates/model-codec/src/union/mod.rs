//! Polymorphic union codecs.
//!
//! Two strategies share one vocabulary: a union is a Rust enum implementing
//! [`Variant`], each case is described by a [`VariantDescriptor`], and
//! decoding yields a [`UnionValue`].
//!
//! - [`DiscriminatorRegistry`]: closed unions whose wire objects carry a tag
//!   member (`{"type":"polar","size":"large"}`).
//! - [`TrialUnionDecoder`]: open unions without a tag, decoded by trying each
//!   candidate in declared order.

mod descriptor;
mod discriminator;
mod trial;
mod value;

pub use descriptor::VariantDescriptor;
pub use discriminator::{DiscriminatorRegistry, DiscriminatorRegistryBuilder, TagPosition};
pub use trial::{TrialUnionDecoder, TrialUnionDecoderBuilder};
pub use value::{UnionValue, Variant};
