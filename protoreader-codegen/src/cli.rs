use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Render Java type names from protocol reader type descriptors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the type names of the given descriptors.
    Render(RenderArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Type expressions, e.g. `java.util.Map<String, ? extends Number>`.
    #[arg(value_name = "TYPES")]
    pub types: Vec<String>,

    /// JSON file(s) holding a descriptor or an array of descriptors.
    #[arg(short, long = "json", value_name = "FILE")]
    pub json: Vec<PathBuf>,

    /// Output file path (defaults to stdout if not specified).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the factory type name of each descriptor.
    #[arg(short, long)]
    pub factory: bool,
}
