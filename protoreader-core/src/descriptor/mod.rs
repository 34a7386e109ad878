//! Structural type descriptors.
//!
//! A [`TypeDescriptor`] is the read-only description of a type that the generator hands to the
//! type-name writer. Trees can be built in `const` context from borrowed parts, parsed from a
//! Java-style type expression, or deserialized from JSON.

mod list;
pub use list::List;

mod type_ref;
pub use type_ref::TypeRef;

use serde::Serialize;

#[cfg(feature = "parse")]
use serde::Deserialize;

use crate::{output::TypeNameSink, Result};

/// Describes a type whose source-level name is to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor<'a> {
    /// A plain class, identified by its canonical (fully qualified) name.
    Simple(&'a str),
    /// A generic type applied to type arguments.
    Parameterized {
        /// The raw (unparameterized) type.
        raw: TypeRef<'a>,
        /// The type arguments, in declaration order.
        arguments: List<'a, TypeDescriptor<'a>>,
    },
    /// A bounded wildcard. Only a single upper bound can be rendered.
    Wildcard {
        /// The upper bounds of the wildcard.
        upper_bounds: List<'a, TypeDescriptor<'a>>,
    },
    /// A kind of type that isn't modeled, carrying its own textual form.
    Other(&'a str),
}

impl<'a> TypeDescriptor<'a> {
    /// A simple type with the given canonical name.
    pub const fn simple(name: &'a str) -> Self {
        TypeDescriptor::Simple(name)
    }

    /// A parameterized type from borrowed parts.
    pub const fn parameterized(
        raw: &'a TypeDescriptor<'a>,
        arguments: &'a [TypeDescriptor<'a>],
    ) -> Self {
        TypeDescriptor::Parameterized {
            raw: TypeRef::borrowed(raw),
            arguments: List::Borrowed(arguments),
        }
    }

    /// Same as `parameterized` but takes its parts by value.
    pub fn parameterized_owned(
        raw: TypeDescriptor<'a>,
        arguments: Vec<TypeDescriptor<'a>>,
    ) -> Self {
        TypeDescriptor::Parameterized {
            raw: TypeRef::new(raw),
            arguments: List::from(arguments),
        }
    }

    /// A wildcard with a borrowed list of upper bounds.
    pub const fn wildcard(upper_bounds: &'a [TypeDescriptor<'a>]) -> Self {
        TypeDescriptor::Wildcard {
            upper_bounds: List::Borrowed(upper_bounds),
        }
    }

    /// Same as `wildcard` but takes the bounds by value.
    pub fn wildcard_owned(upper_bounds: Vec<TypeDescriptor<'a>>) -> Self {
        TypeDescriptor::Wildcard {
            upper_bounds: List::from(upper_bounds),
        }
    }

    /// A wildcard with the single upper bound `bound` (`? extends bound`).
    pub fn extends(bound: TypeDescriptor<'a>) -> Self {
        Self::wildcard_owned(vec![bound])
    }

    /// The canonical name of this type, or of its raw type if it is parameterized.
    ///
    /// Wildcards and unmodeled kinds have no such name.
    pub fn raw_name(&self) -> Option<&'a str> {
        match self {
            TypeDescriptor::Simple(name) => Some(*name),
            TypeDescriptor::Parameterized { raw, .. } => raw.raw_name(),
            TypeDescriptor::Wildcard { .. } | TypeDescriptor::Other(_) => None,
        }
    }

    /// Writes the Java type name of this descriptor to `out`.
    pub fn write_java_name<W>(&self, out: &mut W) -> Result<()>
    where
        W: TypeNameSink + ?Sized,
    {
        crate::writer::write_type_name(self, out)
    }

    /// The Java type name of this descriptor.
    pub fn java_name(&self) -> Result<String> {
        let mut name = String::new();
        self.write_java_name(&mut name)?;

        Ok(name)
    }
}

impl<'a> PartialEq<TypeRef<'a>> for TypeDescriptor<'a> {
    fn eq(&self, other: &TypeRef<'a>) -> bool {
        self == other.inner()
    }
}

#[cfg(feature = "parse")]
impl<'a> TryFrom<&'a str> for TypeDescriptor<'a> {
    type Error = crate::Error;

    fn try_from(value: &'a str) -> Result<Self> {
        crate::parse::parse_type(value)
    }
}

#[cfg(feature = "parse")]
impl<'de, 'a> Deserialize<'de> for TypeDescriptor<'a>
where
    'de: 'a,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let descriptor = match Repr::deserialize(deserializer)? {
            Repr::Expression(expression) => {
                crate::parse::parse_type(expression).map_err(serde::de::Error::custom)?
            }
            Repr::Tagged(Tagged::Simple(name)) => TypeDescriptor::Simple(name),
            Repr::Tagged(Tagged::Parameterized { raw, arguments }) => {
                TypeDescriptor::parameterized_owned(raw, arguments)
            }
            Repr::Tagged(Tagged::Wildcard { upper_bounds }) => {
                TypeDescriptor::wildcard_owned(upper_bounds)
            }
            Repr::Tagged(Tagged::Other(repr)) => TypeDescriptor::Other(repr),
        };

        Ok(descriptor)
    }
}

/// Accepted JSON shapes: a type expression string or the kind-tagged object.
#[cfg(feature = "parse")]
#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<'a> {
    Expression(&'a str),
    Tagged(#[serde(borrow)] Tagged<'a>),
}

#[cfg(feature = "parse")]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Tagged<'a> {
    Simple(&'a str),
    Parameterized {
        #[serde(borrow)]
        raw: TypeDescriptor<'a>,
        #[serde(borrow)]
        arguments: Vec<TypeDescriptor<'a>>,
    },
    Wildcard {
        #[serde(borrow)]
        upper_bounds: Vec<TypeDescriptor<'a>>,
    },
    Other(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: TypeDescriptor<'static> = TypeDescriptor::simple("java.util.Map");
    const STRING: TypeDescriptor<'static> = TypeDescriptor::simple("String");
    const INTEGER: TypeDescriptor<'static> = TypeDescriptor::simple("Integer");

    #[test]
    fn borrowed_and_owned_trees_are_equal() {
        static RAW: TypeDescriptor<'static> = MAP;
        static ARGUMENTS: [TypeDescriptor<'static>; 2] = [STRING, INTEGER];
        static BORROWED: TypeDescriptor<'static> =
            TypeDescriptor::parameterized(&RAW, &ARGUMENTS);

        let owned = TypeDescriptor::parameterized_owned(MAP, vec![STRING, INTEGER]);
        assert_eq!(BORROWED, owned);
        assert_ne!(
            BORROWED,
            TypeDescriptor::parameterized_owned(MAP, vec![INTEGER, STRING])
        );
    }

    #[test]
    fn raw_names() {
        let map = TypeDescriptor::parameterized_owned(MAP, vec![STRING, INTEGER]);
        assert_eq!(map.raw_name(), Some("java.util.Map"));
        assert_eq!(STRING.raw_name(), Some("String"));
        assert_eq!(TypeDescriptor::extends(INTEGER).raw_name(), None);
        assert_eq!(TypeDescriptor::Other("T").raw_name(), None);
    }

    #[test]
    fn serialization() {
        let ty = TypeDescriptor::parameterized_owned(
            TypeDescriptor::simple("java.util.List"),
            vec![TypeDescriptor::extends(TypeDescriptor::simple("Number"))],
        );
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(
            json,
            r#"{"parameterized":{"raw":{"simple":"java.util.List"},"arguments":[{"wildcard":{"upper_bounds":[{"simple":"Number"}]}}]}}"#
        );

        #[cfg(feature = "parse")]
        {
            let back: TypeDescriptor<'_> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[cfg(feature = "parse")]
    #[test]
    fn deserialize_expression_strings() {
        let json = r#"[
            "java.util.Map<String, Integer>",
            {"parameterized": {"raw": "java.util.List", "arguments": ["? extends Number"]}},
            {"other": "T"}
        ]"#;
        let types: Vec<TypeDescriptor<'_>> = serde_json::from_str(json).unwrap();

        assert_eq!(
            types[0],
            TypeDescriptor::parameterized_owned(MAP, vec![STRING, INTEGER])
        );
        assert_eq!(
            types[1],
            TypeDescriptor::parameterized_owned(
                TypeDescriptor::simple("java.util.List"),
                vec![TypeDescriptor::extends(TypeDescriptor::simple("Number"))],
            )
        );
        assert_eq!(types[2], TypeDescriptor::Other("T"));

        let error = serde_json::from_str::<TypeDescriptor<'_>>(r#""Map<String""#).unwrap_err();
        assert!(error.to_string().contains("Type parse error"));
    }
}
