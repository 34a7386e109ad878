use anyhow::{Context, Result};
use clap::Parser;
use protoreader_core::{TextOutput, TypeDescriptor};
use protoreader_codegen::{load_descriptors, render_type};
use std::{
    fs,
    io::{self, Write},
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Args, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Handle the case where no command is provided (use arguments directly).
    let render = match args.command {
        Some(Command::Render(render)) => render,
        None => args.render,
    };

    if render.types.is_empty() && render.json.is_empty() {
        eprintln!("Error: No type expressions or descriptor files specified");
        eprintln!("Usage: protoreader-codegen [TYPES]... [--json <FILE>]... [OPTIONS]");
        std::process::exit(1);
    }

    // Descriptors borrow from the file contents, so read all files up front.
    let mut file_contents = Vec::new();
    for file_path in &render.json {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        file_contents.push(content);
    }

    let mut descriptors: Vec<(String, TypeDescriptor<'_>)> = Vec::new();
    for expression in &render.types {
        let ty = TypeDescriptor::try_from(expression.as_str())
            .with_context(|| format!("Failed to parse type expression: {expression}"))?;

        descriptors.push((format!("`{expression}`"), ty));
    }
    for (file_path, content) in render.json.iter().zip(&file_contents) {
        let types = load_descriptors(content)
            .with_context(|| format!("Failed to load descriptors from: {}", file_path.display()))?;

        for (i, ty) in types.into_iter().enumerate() {
            descriptors.push((format!("{} (descriptor {i})", file_path.display()), ty));
        }
    }

    let mut output = TextOutput::new();
    for (source, ty) in &descriptors {
        render_type(ty, &mut output, render.factory)
            .with_context(|| format!("Failed to render type name of {source}"))?;
    }
    let output = output.into_string();

    if let Some(output_path) = render.output {
        fs::write(&output_path, output)
            .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

        println!(
            "{} type names written to {}",
            descriptors.len(),
            output_path.display()
        );
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
