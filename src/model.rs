//! Data model: records, fields, values, constraint metadata
//!
//! This module provides access to `vitrine-model`, the declaration layer
//! the renderers consume: the closed [`Value`](crate::model::Value)
//! variant type, ordered [`Record`](crate::model::Record) field
//! declarations, and per-field [`Constraints`](crate::model::Constraints).
//!
//! ## Example
//!
//! ```rust
//! use vitrine::model::{Constraints, Field, FieldType, Record, Value};
//!
//! let user = Record::new("User")
//!     .with_field(
//!         Field::new("name", FieldType::Str, "John Doe")
//!             .with_constraints(Constraints::new().with_max_length(100).required()),
//!     )
//!     .with_field(Field::new("age", FieldType::Int, Value::Int(30)));
//!
//! assert_eq!(user.type_name(), "User");
//! ```

pub use vitrine_model::*;
