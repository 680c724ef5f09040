//! HTML rendering for typed records
//!
//! This crate turns a [`vitrine_model::Record`] into HTML:
//! - a read-only display view (nested tables, lists, mappings), or
//! - an editable form with per-field controls derived from declared
//!   types and constraint metadata
//!
//! plus optional theming and optional declarative live-update (`hx-*`)
//! attributes for a hypermedia runtime. Rendering is a pure, synchronous
//! transform: identical inputs produce byte-identical output, nothing is
//! mutated, and the top-level entry points always return a string - any
//! failure on the editable path degrades to the display view with a
//! diagnostic HTML comment.

pub mod config;
pub mod display;
pub mod entry;
pub mod escape;
pub mod form;
pub mod live;
pub mod theme;

pub use config::{LiveUpdateMode, RenderConfig};
pub use display::render_fields;
pub use entry::{model_to_html, render_html};
pub use escape::{escape_attr, escape_html};
pub use form::{FormError, FormResult, render_control, render_form};
pub use live::{input_attributes, root_attributes};
pub use theme::{Theme, css_for};
