//! Names shared with the generated reader code.

use heck::ToUpperCamelCase;

use crate::descriptor::TypeDescriptor;

/// Prefix of generated type factory class names.
pub const TYPE_FACTORY_NAME_PREFIX: char = 'F';

/// Name of the JSON reader parameter of generated read methods.
pub const READER_NAME: &str = "reader";

/// Name of the parameter holding the reader of pending input.
pub const PENDING_INPUT_READER_NAME: &str = "inputReader";

/// Class name of the JSON reader.
pub const JSON_READER_CLASS_NAME: &str = "JsonReaderEx";

/// Declaration of the JSON reader parameter.
pub const JSON_READER_PARAMETER_DEF: &str = "reader: JsonReaderEx";

/// The name of the factory class generated for `ty`.
///
/// This is [`TYPE_FACTORY_NAME_PREFIX`] followed by the last segment of the (raw) canonical name
/// in upper camel case, e.g. `FEventData` for `org.example.event_data`. Wildcards and unmodeled
/// kinds have no factory.
pub fn factory_type_name(ty: &TypeDescriptor<'_>) -> Option<String> {
    let name = ty.raw_name()?;
    let simple_name = name.rsplit('.').next().unwrap_or(name);
    let simple_name = simple_name.trim_end_matches("[]").to_upper_camel_case();
    if simple_name.is_empty() {
        return None;
    }

    let mut factory = String::with_capacity(simple_name.len() + 1);
    factory.push(TYPE_FACTORY_NAME_PREFIX);
    factory.push_str(&simple_name);

    Some(factory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_parameter_def() {
        assert_eq!(
            JSON_READER_PARAMETER_DEF,
            format!("{READER_NAME}: {JSON_READER_CLASS_NAME}")
        );
    }

    #[test]
    fn factory_names() {
        let name = |ty: TypeDescriptor<'static>| factory_type_name(&ty);

        assert_eq!(
            name(TypeDescriptor::simple("org.example.protocol.EventData")),
            Some("FEventData".to_string())
        );
        assert_eq!(
            name(TypeDescriptor::simple("org.example.event_data")),
            Some("FEventData".to_string())
        );
        assert_eq!(
            name(TypeDescriptor::parameterized_owned(
                TypeDescriptor::simple("java.util.Map"),
                vec![TypeDescriptor::simple("String")],
            )),
            Some("FMap".to_string())
        );
        assert_eq!(
            name(TypeDescriptor::extends(TypeDescriptor::simple("Number"))),
            None
        );
        assert_eq!(name(TypeDescriptor::Other("T")), None);
    }
}
