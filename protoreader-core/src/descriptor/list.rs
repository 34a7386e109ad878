//! Ordered child lists of a descriptor: type arguments and wildcard bounds.

use serde::{ser::SerializeSeq, Serialize};

/// An ordered list that can be either a borrowed slice or an owned vector.
///
/// The borrowed form is what `const` descriptor trees use; parsing and deserialization produce
/// the owned form. Both compare equal when their items do.
#[derive(Debug, Clone, Eq)]
pub enum List<'a, T> {
    /// Borrowed slice, useful for const contexts.
    Borrowed(&'a [T]),
    /// Owned vector.
    Owned(Vec<T>),
}

impl<'a, T> List<'a, T> {
    /// The items as a slice, regardless of ownership.
    pub fn as_slice(&self) -> &[T] {
        match self {
            List::Borrowed(slice) => slice,
            List::Owned(vec) => vec.as_slice(),
        }
    }

    /// Returns an iterator over the items, in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The only item of the list, if it has exactly one.
    pub fn single(&self) -> Option<&T> {
        match self.as_slice() {
            [item] => Some(item),
            _ => None,
        }
    }
}

impl<T> Default for List<'_, T> {
    fn default() -> Self {
        List::Borrowed(&[])
    }
}

impl<T> From<Vec<T>> for List<'_, T> {
    fn from(vec: Vec<T>) -> Self {
        List::Owned(vec)
    }
}

impl<'a, T> From<&'a [T]> for List<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        List::Borrowed(slice)
    }
}

impl<'l, T> IntoIterator for &'l List<'_, T> {
    type Item = &'l T;
    type IntoIter = core::slice::Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for List<'_, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Serialize for List<'_, T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
