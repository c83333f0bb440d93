/// Presence state of one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldSlot<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> FieldSlot<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_ref(&self) -> FieldSlot<&T> {
        match self {
            Self::Absent => FieldSlot::Absent,
            Self::Null => FieldSlot::Null,
            Self::Present(v) => FieldSlot::Present(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldSlot<U> {
        match self {
            Self::Absent => FieldSlot::Absent,
            Self::Null => FieldSlot::Null,
            Self::Present(v) => FieldSlot::Present(f(v)),
        }
    }

    /// Collapses `Absent` and `Null` into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T, E> FieldSlot<Result<T, E>> {
    pub fn transpose(self) -> Result<FieldSlot<T>, E> {
        Ok(match self {
            Self::Absent => FieldSlot::Absent,
            Self::Null => FieldSlot::Null,
            Self::Present(r) => FieldSlot::Present(r?),
        })
    }
}
