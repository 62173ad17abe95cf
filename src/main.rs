// src/main.rs
use std::env;
use std::fs;
use std::process;
use vitae::{Document, RenderError, render_document};

/// A small CLI to render a JSON document to a PDF file.
fn main() -> Result<(), RenderError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Render a resume or cover letter document to PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/document.json> <template-id> <path/to/output.pdf>",
            args[0]
        );
        eprintln!();
        eprintln!("Resume templates: classic, contemporary, executive, minimal");
        eprintln!("Cover letter layouts: traditional, modern, creative, minimalist");
        process::exit(1);
    }

    let raw = fs::read_to_string(&args[1])?;
    let document: Document = serde_json::from_str(&raw)?;
    let bytes = render_document(&document, &args[2])?;
    fs::write(&args[3], &bytes)?;
    println!("Wrote {} ({} bytes)", args[3], bytes.len());
    Ok(())
}
