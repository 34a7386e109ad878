//! Rendering of Java type names for the protocol reader generator.

use protoreader_core::{naming::factory_type_name, TextOutput, TypeDescriptor};
use serde::Deserialize;

mod error;
pub use error::Error;

/// Deserialize the descriptors of a JSON document.
///
/// The document holds either a single descriptor or an array of them. Descriptors are either
/// kind-tagged objects or type expression strings.
pub fn load_descriptors(json: &str) -> Result<Vec<TypeDescriptor<'_>>, Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Descriptors<'a> {
        Many(#[serde(borrow)] Vec<TypeDescriptor<'a>>),
        One(#[serde(borrow)] TypeDescriptor<'a>),
    }

    let descriptors = match serde_json::from_str(json)? {
        Descriptors::Many(descriptors) => descriptors,
        Descriptors::One(descriptor) => vec![descriptor],
    };
    tracing::debug!("Loaded {} descriptors", descriptors.len());

    Ok(descriptors)
}

/// Render the type name of `ty` as a line of `out`.
///
/// With `with_factory`, the factory type name follows the type name, separated by a tab, for
/// descriptors that have one.
pub fn render_type(
    ty: &TypeDescriptor<'_>,
    out: &mut TextOutput,
    with_factory: bool,
) -> Result<(), Error> {
    ty.write_java_name(out)?;
    if with_factory {
        if let Some(factory) = factory_type_name(ty) {
            out.append_char('\t').append(&factory);
        }
    }
    out.new_line();

    Ok(())
}

/// Render the type names of `types`, one per line.
pub fn render_types(types: &[TypeDescriptor<'_>], with_factory: bool) -> Result<String, Error> {
    let mut out = TextOutput::new();
    for ty in types {
        render_type(ty, &mut out, with_factory)?;
    }

    Ok(out.into_string())
}
