// src/lib.rs
//! Deterministic resume and cover letter PDF layout engine.
//!
//! The caller hands over a fully built [`Document`] and a template id; the
//! engine resolves the template to a [`StyleConfig`], flows each section
//! through the layout cursor into positioned draw commands, and assembles
//! the pages into PDF bytes through the lopdf writer boundary. Rendering is
//! synchronous and self-contained: no file, network, or font I/O.
//!
//! ```no_run
//! use vitae::{Document, Resume, render_document};
//!
//! let document = Document::Resume(Resume {
//!     name: "Jane Doe".into(),
//!     ..Resume::default()
//! });
//! let bytes = render_document(&document, "classic").unwrap();
//! ```

pub mod compose;
pub mod document;
pub mod error;
pub mod layout;
pub mod render;
pub mod style;
pub mod themes;

pub use compose::{layout_document, render_document};
pub use document::*;
pub use error::RenderError;
pub use style::*;
