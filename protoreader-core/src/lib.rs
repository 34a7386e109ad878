#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
pub mod descriptor;
pub use descriptor::{List, TypeDescriptor, TypeRef};
pub mod naming;
pub mod output;
pub use output::{TextOutput, TypeNameSink};
pub mod writer;
pub use writer::write_type_name;
#[cfg(feature = "parse")]
mod parse;
