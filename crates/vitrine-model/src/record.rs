//! Record and field declarations

use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::value::Value;

/// Declared type of a field, driving the form-control mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
	/// String field; text input
	Str,
	/// Integer field; number input, step 1
	Int,
	/// Float field; number input, step 0.01
	Float,
	/// Boolean field; checkbox
	Bool,
	/// Date-only field; date input
	Date,
	/// Date-and-time field; datetime-local input
	DateTime,
	/// Enumeration; select with one option per member.
	/// Choices are `(symbolic name, underlying value)` pairs; options use
	/// the underlying value.
	Enum { choices: Vec<(String, String)> },
	/// Fixed literal choice; select with one option per allowed literal
	Literal { choices: Vec<String> },
	/// Homogeneous list; textarea with newline-joined elements
	List(Box<FieldType>),
	/// Scalar-to-scalar mapping
	Map,
	/// Nested record of the named type
	Nested { type_name: String },
	/// Nullable wrapper; the form control follows the inner type
	Optional(Box<FieldType>),
	/// Anything else; fallback text input
	Other,
}

impl FieldType {
	/// Infer a declared type from a runtime value.
	///
	/// Used by the JSON adapter where no declaration exists; declared
	/// records should state their types explicitly.
	pub fn infer(value: &Value) -> Self {
		match value {
			Value::Str(_) => FieldType::Str,
			Value::Int(_) => FieldType::Int,
			Value::Float(_) => FieldType::Float,
			Value::Bool(_) => FieldType::Bool,
			Value::Null => FieldType::Other,
			Value::Date(_) => FieldType::Date,
			Value::DateTime(_) => FieldType::DateTime,
			Value::Enum { member, value } => FieldType::Enum {
				choices: vec![(member.clone(), value.clone())],
			},
			Value::List(items) => {
				let inner = items
					.first()
					.map(FieldType::infer)
					.unwrap_or(FieldType::Other);
				FieldType::List(Box::new(inner))
			}
			Value::Map(_) => FieldType::Map,
			Value::Record(record) => FieldType::Nested {
				type_name: record.type_name().to_string(),
			},
		}
	}
}

/// One declared field: name, type, current value, optional constraint
/// metadata and optional default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	pub field_type: FieldType,
	pub value: Value,
	pub constraints: Option<Constraints>,
	pub default: Option<Value>,
}

impl Field {
	/// Create a field with the given name, declared type and value
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::{Field, FieldType, Value};
	///
	/// let field = Field::new("age", FieldType::Int, Value::Int(30));
	/// assert_eq!(field.name, "age");
	/// assert_eq!(field.constraints, None);
	/// ```
	pub fn new(name: impl Into<String>, field_type: FieldType, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			field_type,
			value: value.into(),
			constraints: None,
			default: None,
		}
	}

	/// Attach constraint metadata
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::{Constraints, Field, FieldType, Value};
	///
	/// let field = Field::new("age", FieldType::Int, Value::Int(30))
	/// 	.with_constraints(Constraints::new().with_gt(0.0));
	/// assert!(field.constraints.is_some());
	/// ```
	pub fn with_constraints(mut self, constraints: Constraints) -> Self {
		self.constraints = Some(constraints);
		self
	}

	/// Attach a default value
	pub fn with_default(mut self, default: impl Into<Value>) -> Self {
		self.default = Some(default.into());
		self
	}
}

/// Adapter seam between a data-model layer and the renderers.
///
/// The renderers only ever ask a model for its display title and its
/// declared fields in declaration order; any modeling framework can sit
/// behind this trait. [`Record`] is the ready-made implementation.
pub trait Fields {
	/// Type name, used as the display title
	fn type_name(&self) -> &str;
	/// Declared fields in declaration order; must be stable across calls
	fn fields(&self) -> &[Field];
}

/// An ordered, named collection of typed fields - the unit being rendered.
///
/// Field iteration order is declaration (insertion) order and is stable
/// across renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
	type_name: String,
	fields: Vec<Field>,
}

impl Record {
	/// Create an empty record with the given type name
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::{Field, FieldType, Record, Value};
	///
	/// let record = Record::new("SimpleModel")
	/// 	.with_field(Field::new("name", FieldType::Str, "John Doe"))
	/// 	.with_field(Field::new("age", FieldType::Int, Value::Int(30)));
	///
	/// assert_eq!(record.fields().len(), 2);
	/// assert_eq!(record.fields()[0].name, "name");
	/// ```
	pub fn new(type_name: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			fields: vec![],
		}
	}

	/// Append a field, preserving declaration order
	pub fn with_field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	/// Append a field built from name, type and value
	pub fn field(
		self,
		name: impl Into<String>,
		field_type: FieldType,
		value: impl Into<Value>,
	) -> Self {
		self.with_field(Field::new(name, field_type, value))
	}

	/// The record's type name
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Declared fields in declaration order
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Build a record from a JSON object, inferring field types from the
	/// value shapes. Non-object JSON yields a record with no fields.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::Record;
	///
	/// let json = serde_json::json!({"name": "John", "age": 30});
	/// let record = Record::from_json("User", &json);
	/// assert_eq!(record.type_name(), "User");
	/// assert_eq!(record.fields().len(), 2);
	/// ```
	pub fn from_json(type_name: impl Into<String>, json: &serde_json::Value) -> Self {
		let mut record = Record::new(type_name);
		if let serde_json::Value::Object(entries) = json {
			for (name, raw) in entries {
				let value = Value::from(raw);
				let field_type = FieldType::infer(&value);
				record = record.with_field(Field::new(name.clone(), field_type, value));
			}
		}
		record
	}
}

impl Fields for Record {
	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn fields(&self) -> &[Field] {
		&self.fields
	}
}
