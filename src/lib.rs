//! # Vitrine
//!
//! Render typed records into HTML - a read-only display view or an
//! editable form - the way Django's forms and admin render model
//! instances, with optional theming and optional declarative live-update
//! attributes for a hypermedia (htmx-style) frontend.
//!
//! ## Core Principles
//!
//! - **Pure presentation**: rendering is a deterministic, synchronous
//!   transform with no I/O, no validation, and no mutation; identical
//!   inputs produce byte-identical output
//! - **Closed dispatch**: runtime values are a closed variant type the
//!   renderers match exhaustively, instead of probing concrete types
//! - **Escaping discipline**: every name, key and value is HTML-escaped
//!   before insertion - untrusted record content never becomes markup
//! - **Never fail the page**: errors on the editable path degrade to the
//!   display view with a diagnostic HTML comment; the entry point always
//!   returns a string
//!
//! ## Example
//!
//! ```rust
//! use vitrine::model::{Constraints, Field, FieldType, Record, Value};
//! use vitrine::render::{RenderConfig, render_html};
//!
//! let user = Record::new("User")
//!     .with_field(Field::new("name", FieldType::Str, "John Doe"))
//!     .with_field(
//!         Field::new("age", FieldType::Int, Value::Int(30))
//!             .with_constraints(Constraints::new().with_gt(0.0)),
//!     )
//!     .with_field(Field::new("is_active", FieldType::Bool, true));
//!
//! // Read-only view
//! let view = render_html(&user, &RenderConfig::new());
//! assert!(view.contains(r#"<h2 class="model-title">User</h2>"#));
//!
//! // Editable form; the exclusive lower bound surfaces as min="1"
//! let form = render_html(&user, &RenderConfig::new().editable());
//! assert!(form.contains(r#"min="1""#));
//! ```

// Module re-exports, one per workspace crate
pub mod model;
pub mod render;

// Flat re-exports of the types nearly every caller touches
pub use vitrine_model::{Constraints, Field, FieldType, Fields, Record, Value};
pub use vitrine_render::{LiveUpdateMode, RenderConfig, model_to_html, render_html};
