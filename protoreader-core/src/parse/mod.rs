//! Parsers for Java-style type expressions using winnow.
//!
//! Accepts the subset of Java type syntax that [`TypeDescriptor`] models: qualified names
//! (optionally with array brackets), generic applications and bounded wildcards. Uses byte-based
//! parsing since all the tokens are ASCII.

use winnow::{
    ascii::{multispace0, multispace1},
    combinator::{alt, opt, preceded, repeat, separated, terminated},
    error::InputError,
    token::{literal, take_while},
    ModalResult, Parser,
};

use crate::descriptor::TypeDescriptor;

/// The implicit upper bound of an unbounded wildcard.
const JAVA_LANG_OBJECT: &str = "java.lang.Object";

type Input<'a> = &'a [u8];

/// Parse optional whitespace.
fn ws<'a>(input: &mut Input<'a>) -> ModalResult<(), InputError<Input<'a>>> {
    multispace0::<_, InputError<Input<'a>>>
        .parse_next(input)
        .ok();
    Ok(())
}

/// Convert bytes to str with input lifetime.
fn bytes_to_str(bytes: &[u8]) -> &str {
    // Identifier bytes are all ASCII, so this can't fail.
    core::str::from_utf8(bytes).unwrap_or_default()
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Parse a Java identifier.
fn identifier<'a>(input: &mut Input<'a>) -> ModalResult<Input<'a>, InputError<Input<'a>>> {
    (
        take_while(1, is_identifier_start),
        take_while(0.., is_identifier_part),
    )
        .take()
        .parse_next(input)
}

/// Parse a canonical name: dotted identifiers, optionally followed by `[]` pairs.
fn canonical_name<'a>(input: &mut Input<'a>) -> ModalResult<&'a str, InputError<Input<'a>>> {
    (
        identifier,
        repeat(0.., (literal("."), identifier)).map(|()| ()),
        repeat(0.., literal("[]")).map(|()| ()),
    )
        .take()
        .map(bytes_to_str)
        .parse_next(input)
}

/// Parse a generic argument list: `<T, U>`.
fn type_arguments<'a>(
    input: &mut Input<'a>,
) -> ModalResult<Vec<TypeDescriptor<'a>>, InputError<Input<'a>>> {
    preceded(
        (ws, literal("<"), ws),
        terminated(
            separated(0.., java_type, (ws, literal(","), ws)),
            (ws, literal(">")),
        ),
    )
    .parse_next(input)
}

/// Parse a class type, parameterized or not.
fn class_type<'a>(input: &mut Input<'a>) -> ModalResult<TypeDescriptor<'a>, InputError<Input<'a>>> {
    let name = canonical_name(input)?;
    let descriptor = match opt(type_arguments).parse_next(input)? {
        Some(arguments) => {
            TypeDescriptor::parameterized_owned(TypeDescriptor::Simple(name), arguments)
        }
        None => TypeDescriptor::Simple(name),
    };

    Ok(descriptor)
}

/// Parse a wildcard: `?` or `? extends A & B`.
fn wildcard<'a>(input: &mut Input<'a>) -> ModalResult<TypeDescriptor<'a>, InputError<Input<'a>>> {
    literal("?").parse_next(input)?;
    let upper_bounds: Option<Vec<TypeDescriptor<'a>>> = opt(preceded(
        (ws, literal("extends"), multispace1),
        separated(1.., class_type, (ws, literal("&"), ws)),
    ))
    .parse_next(input)?;

    let upper_bounds =
        upper_bounds.unwrap_or_else(|| vec![TypeDescriptor::Simple(JAVA_LANG_OBJECT)]);
    Ok(TypeDescriptor::wildcard_owned(upper_bounds))
}

/// Parse any type.
fn java_type<'a>(input: &mut Input<'a>) -> ModalResult<TypeDescriptor<'a>, InputError<Input<'a>>> {
    alt((wildcard, class_type)).parse_next(input)
}

/// Parse a type expression from a string.
pub(crate) fn parse_type(input: &str) -> Result<TypeDescriptor<'_>, crate::Error> {
    let input_bytes = input.trim().as_bytes();
    if input_bytes.is_empty() {
        return Err(crate::Error::Parse("Input is empty".to_string()));
    }

    let mut input_mut = input_bytes;
    match java_type(&mut input_mut) {
        Ok(result) => {
            let _ = ws(&mut input_mut);
            if input_mut.is_empty() {
                debug!("Parsed type expression `{}`", input.trim());
                Ok(result)
            } else {
                Err(crate::Error::Parse(format!(
                    "Unexpected remaining input: {:?}",
                    core::str::from_utf8(input_mut).map_or("<invalid UTF-8>", |s| s)
                )))
            }
        }
        Err(err) => Err(crate::Error::Parse(format!("Parse error: {err:?}"))),
    }
}
