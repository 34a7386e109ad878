//! Java type-name rendering.

use crate::{descriptor::TypeDescriptor, output::TypeNameSink, Error, Result};

/// Canonical name of the standard ordered collection, written as its short alias.
const JAVA_UTIL_LIST: &str = "java.util.List";

/// Writes the Java type name of `ty` to `out`.
///
/// Parameterized types are written in standard generic syntax with their arguments separated by
/// the sink's comma, and wildcards as `? extends <bound>`. `java.util.List` is written as `List`;
/// every other simple name is written verbatim.
///
/// Output is written incrementally, so if a wildcard without exactly one upper bound is
/// encountered, [`Error::MalformedWildcard`] is returned and whatever preceded it stays in `out`.
pub fn write_type_name<W>(ty: &TypeDescriptor<'_>, out: &mut W) -> Result<()>
where
    W: TypeNameSink + ?Sized,
{
    match ty {
        TypeDescriptor::Simple(name) => {
            let name = if *name == JAVA_UTIL_LIST { "List" } else { *name };
            out.write_str(name)?;
        }
        TypeDescriptor::Parameterized { raw, arguments } => {
            write_type_name(raw, out)?;
            out.write_char('<')?;
            for (i, argument) in arguments.iter().enumerate() {
                if i != 0 {
                    out.comma()?;
                }
                write_type_name(argument, out)?;
            }
            out.write_char('>')?;
        }
        TypeDescriptor::Wildcard { upper_bounds } => {
            let Some(bound) = upper_bounds.single() else {
                warn!(
                    "Wildcard with {} upper bounds can't be written",
                    upper_bounds.len()
                );
                return Err(Error::MalformedWildcard {
                    upper_bounds: upper_bounds.len(),
                });
            };
            out.write_str("? extends ")?;
            write_type_name(bound, out)?;
        }
        TypeDescriptor::Other(repr) => {
            // Unmodeled kinds are written as-is rather than rejected.
            warn!("Writing unmodeled type `{}` verbatim", repr);
            out.write_str(repr)?;
        }
    }
    trace!("Wrote type name for {:?}", ty);

    Ok(())
}
