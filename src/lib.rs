//! Object-to-HTML table renderer for archive inspection pages.
//!
//! Walks any [`serde::Serialize`] value field by field and renders it as a
//! bootstrap-styled HTML table, wrapped in a minimal page shell. Meant for
//! debug and inspection display of archiver output, not for structured data
//! exchange: values are emitted as-is, without escaping.
//!
//! # Behavior
//!
//! - One table per object, one `Field | Data` row per field, in declaration
//!   order
//! - Composite field values expand into nested tables, not their default
//!   string form
//! - Sequences render inline without enclosing brackets
//! - Nesting past the configured depth limit is an error, never a crash
//!
//! # Example
//!
//! ```
//! use htmlify::HtmlRenderer;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Assignment {
//!     title: String,
//!     points: u32,
//! }
//!
//! let renderer = HtmlRenderer::default();
//! let html = renderer
//!     .render_object(&Assignment {
//!         title: "Essay".to_string(),
//!         points: 100,
//!     })
//!     .unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod config;
pub mod error;
pub mod renderer;

mod table;

pub use config::{AssetLibrary, PageAssets, RenderConfig};
pub use error::{RenderError, Result};
pub use renderer::HtmlRenderer;
