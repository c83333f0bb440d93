//! Scalar-backed enumerations.
//!
//! A scalar enum is a string or number restricted to a declared set of
//! literals. Its wire form is always the bare scalar. Generated enum types are
//! newtypes over the scalar (so unknown members can still be carried) and
//! implement [`ScalarEnum`]; their [`JsonCodec`] impl is then a two-liner
//! over [`encode_enum`] and [`decode_enum`].

use serde_json::Value;

use crate::codec::JsonCodec;
use crate::error::CodecError;

/// Base kind of an enum's literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
}

/// Scalars an enum can be backed by.
pub trait EnumScalar: JsonCodec + PartialEq + Clone + std::fmt::Debug + Send + Sync + 'static {
    const KIND: ScalarKind;
}

impl EnumScalar for String {
    const KIND: ScalarKind = ScalarKind::String;
}

macro_rules! number_scalar {
    ($($ty:ty),*) => {$(
        impl EnumScalar for $ty {
            const KIND: ScalarKind = ScalarKind::Number;
        }
    )*};
}

number_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Whether decode checks membership of the declared literal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Any scalar of the base kind decodes.
    #[default]
    Lenient,
    /// Scalars outside the literal set fail with [`CodecError::NotInDomain`].
    Strict,
}

/// The ordered literal set of one enum.
#[derive(Debug, Clone)]
pub struct EnumDomain<S> {
    name: String,
    literals: Vec<S>,
    policy: DomainPolicy,
}

impl<S: EnumScalar> EnumDomain<S> {
    pub fn new(name: impl Into<String>, literals: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            literals: literals.into_iter().collect(),
            policy: DomainPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ScalarKind {
        S::KIND
    }

    pub fn literals(&self) -> &[S] {
        &self.literals
    }

    pub fn policy(&self) -> DomainPolicy {
        self.policy
    }

    pub fn contains(&self, scalar: &S) -> bool {
        self.literals.iter().any(|literal| literal == scalar)
    }
}

/// Encodes and decodes the scalars of one [`EnumDomain`].
#[derive(Debug, Clone)]
pub struct ScalarEnumCodec<S> {
    domain: EnumDomain<S>,
}

impl<S: EnumScalar> ScalarEnumCodec<S> {
    pub fn new(domain: EnumDomain<S>) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &EnumDomain<S> {
        &self.domain
    }

    /// Passes the scalar through unchanged.
    pub fn encode(&self, scalar: &S) -> Result<Value, CodecError> {
        scalar.encode_json()
    }

    pub fn decode(&self, raw: &Value) -> Result<S, CodecError> {
        let scalar = S::decode_json(raw)?;
        if self.domain.policy == DomainPolicy::Strict && !self.domain.contains(&scalar) {
            return Err(CodecError::NotInDomain {
                domain: self.domain.name.clone(),
                value: raw.clone(),
            });
        }
        Ok(scalar)
    }
}

/// Glue between a generated enum type and its codec.
pub trait ScalarEnum: Sized {
    type Scalar: EnumScalar;

    fn codec() -> &'static ScalarEnumCodec<Self::Scalar>;
    fn from_scalar(scalar: Self::Scalar) -> Self;
    fn as_scalar(&self) -> &Self::Scalar;

    /// True when the held scalar is one of the declared literals.
    fn is_known(&self) -> bool {
        Self::codec().domain().contains(self.as_scalar())
    }
}

pub fn encode_enum<E: ScalarEnum>(value: &E) -> Result<Value, CodecError> {
    E::codec().encode(value.as_scalar())
}

pub fn decode_enum<E: ScalarEnum>(raw: &Value) -> Result<E, CodecError> {
    E::codec().decode(raw).map(E::from_scalar)
}
