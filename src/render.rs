//! HTML rendering: display views, forms, themes, live-update attributes
//!
//! This module provides access to `vitrine-render`: the recursive display
//! renderer, the form renderer, the theme/attribute providers, and the
//! [`render_html`](crate::render::render_html) entry point.
//!
//! ## Example
//!
//! ```rust
//! use vitrine::model::{FieldType, Record, Value};
//! use vitrine::render::{RenderConfig, render_html};
//!
//! let record = Record::new("Report")
//!     .field("title", FieldType::Str, "Quarterly")
//!     .field("final", FieldType::Bool, true);
//!
//! let html = render_html(&record, &RenderConfig::new().editable().with_theme("dark"));
//! assert!(html.contains("<form"));
//! ```

pub use vitrine_render::*;
