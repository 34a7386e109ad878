use super::TypeDescriptor;
use core::ops::Deref;
use serde::Serialize;

/// A reference to a child descriptor that can be either borrowed or owned.
///
/// Borrowed references allow whole descriptor trees to be built in `const` context; owned ones
/// are produced by the parser and by deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef<'a>(TypeRefInner<'a>);

impl<'a> TypeRef<'a> {
    /// Creates a new type reference that owns its descriptor.
    pub fn new(inner: TypeDescriptor<'a>) -> Self {
        Self(TypeRefInner::Owned(Box::new(inner)))
    }

    /// Creates a new type reference borrowing a descriptor.
    pub const fn borrowed(inner: &'a TypeDescriptor<'a>) -> Self {
        Self(TypeRefInner::Borrowed(inner))
    }

    /// The referenced descriptor.
    pub fn inner(&self) -> &TypeDescriptor<'a> {
        match &self.0 {
            TypeRefInner::Borrowed(inner) => inner,
            TypeRefInner::Owned(inner) => inner,
        }
    }
}

impl<'a> Deref for TypeRef<'a> {
    type Target = TypeDescriptor<'a>;

    fn deref(&self) -> &Self::Target {
        self.inner()
    }
}

impl<'a> From<TypeDescriptor<'a>> for TypeRef<'a> {
    fn from(inner: TypeDescriptor<'a>) -> Self {
        Self::new(inner)
    }
}

impl<'a> PartialEq<TypeDescriptor<'a>> for TypeRef<'a> {
    fn eq(&self, other: &TypeDescriptor<'a>) -> bool {
        self.inner() == other
    }
}

impl Serialize for TypeRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner().serialize(serializer)
    }
}

#[derive(Debug, Clone, Eq)]
enum TypeRefInner<'a> {
    Borrowed(&'a TypeDescriptor<'a>),
    Owned(Box<TypeDescriptor<'a>>),
}

// Equality is structural; a borrowed and an owned reference to equal trees are equal.
impl PartialEq for TypeRefInner<'_> {
    fn eq(&self, other: &Self) -> bool {
        let lhs: &TypeDescriptor<'_> = match self {
            TypeRefInner::Borrowed(inner) => inner,
            TypeRefInner::Owned(inner) => inner,
        };
        let rhs: &TypeDescriptor<'_> = match other {
            TypeRefInner::Borrowed(inner) => inner,
            TypeRefInner::Owned(inner) => inner,
        };

        lhs == rhs
    }
}
