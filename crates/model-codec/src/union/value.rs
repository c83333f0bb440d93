/// A union type whose cases each carry a fixed tag.
///
/// Generated unions are Rust enums with one case per concrete shape; the
/// implementation is an exhaustive `match` returning the case's tag (the
/// discriminator value for closed unions, the candidate name for open ones).
pub trait Variant {
    fn tag(&self) -> &str;
}

/// A decoded union value paired with the tag that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionValue<U> {
    tag: String,
    value: U,
}

impl<U: Variant> UnionValue<U> {
    pub fn new(value: U) -> Self {
        Self {
            tag: value.tag().to_owned(),
            value,
        }
    }
}

impl<U> UnionValue<U> {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> &U {
        &self.value
    }

    pub fn into_inner(self) -> U {
        self.value
    }

    pub(crate) fn tagged(tag: impl Into<String>, value: U) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }
}
