//! Data model for HTML rendering of typed records
//!
//! This crate defines the renderable value model consumed by
//! `vitrine-render`:
//! - [`Value`] - a closed variant type covering every runtime shape the
//!   renderers dispatch on (scalars, dates, enumerations, lists, mappings,
//!   nested records)
//! - [`Record`] and [`Field`] - ordered, typed field declarations with a
//!   display title
//! - [`Constraints`] - declarative per-field bounds, length, pattern and
//!   required metadata, reflected as HTML attributes by the form renderer
//! - [`Fields`] - the adapter trait a data-model layer implements so the
//!   renderers never query a modeling framework directly
//!
//! Nothing in this crate is mutated by rendering; renderers take shared
//! references and produce strings.

pub mod constraints;
pub mod record;
pub mod value;

pub use constraints::Constraints;
pub use record::{Field, FieldType, Fields, Record};
pub use value::Value;
