//! Runtime values the renderers dispatch on

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A renderable runtime value.
///
/// This is a closed tagged union: the renderers match exhaustively over it
/// instead of probing concrete types at runtime. The data-model adapter
/// constructs one `Value` per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// UTF-8 string
	Str(String),
	/// Signed integer
	Int(i64),
	/// Double-precision float
	Float(f64),
	/// Boolean
	Bool(bool),
	/// Absent value; displays as the literal text `None`
	Null,
	/// Calendar date without time of day
	Date(NaiveDate),
	/// Date and time without timezone
	DateTime(NaiveDateTime),
	/// Enumeration member: symbolic name plus the underlying associated
	/// value. Display always shows the underlying value, never the name.
	Enum { member: String, value: String },
	/// Ordered sequence of values
	List(Vec<Value>),
	/// Insertion-ordered mapping; rendered as a two-column table
	Map(Vec<(String, Value)>),
	/// Nested record
	Record(Record),
}

impl Value {
	/// Default textual representation, used by the display fallback rule
	/// and by the form renderer when joining list elements.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::Value;
	///
	/// assert_eq!(Value::Int(30).display_text(), "30");
	/// assert_eq!(Value::Null.display_text(), "None");
	/// assert_eq!(
	/// 	Value::Enum { member: "ADMIN".into(), value: "admin".into() }.display_text(),
	/// 	"admin"
	/// );
	/// ```
	pub fn display_text(&self) -> String {
		match self {
			Value::Str(s) => s.clone(),
			Value::Int(i) => i.to_string(),
			Value::Float(f) => f.to_string(),
			Value::Bool(b) => b.to_string(),
			Value::Null => "None".to_string(),
			Value::Date(d) => d.format("%Y-%m-%d").to_string(),
			Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
			Value::Enum { value, .. } => value.clone(),
			Value::List(items) => items
				.iter()
				.map(Value::display_text)
				.collect::<Vec<_>>()
				.join(", "),
			Value::Map(entries) => entries
				.iter()
				.map(|(k, v)| format!("{}: {}", k, v.display_text()))
				.collect::<Vec<_>>()
				.join(", "),
			Value::Record(record) => format!("[{}]", record.type_name()),
		}
	}

	/// Truthiness as the form renderer's checkbox rule sees it.
	///
	/// Empty strings, zero numbers, `Null`, and empty collections are
	/// falsy; everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Str(s) => !s.is_empty(),
			Value::Int(i) => *i != 0,
			Value::Float(f) => *f != 0.0,
			Value::Bool(b) => *b,
			Value::Null => false,
			Value::Date(_) | Value::DateTime(_) => true,
			Value::Enum { value, .. } => !value.is_empty(),
			Value::List(items) => !items.is_empty(),
			Value::Map(entries) => !entries.is_empty(),
			Value::Record(_) => true,
		}
	}

	/// Whether the value is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Str(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Str(s)
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Int(i)
	}
}

impl From<f64> for Value {
	fn from(f: f64) -> Self {
		Value::Float(f)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<NaiveDate> for Value {
	fn from(d: NaiveDate) -> Self {
		Value::Date(d)
	}
}

impl From<NaiveDateTime> for Value {
	fn from(dt: NaiveDateTime) -> Self {
		Value::DateTime(dt)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::List(items)
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Value::Record(record)
	}
}

impl From<&serde_json::Value> for Value {
	/// Adapt loosely-typed JSON data into the renderable variant type.
	///
	/// Objects become ordered [`Value::Map`] entries and arrays become
	/// [`Value::List`], so JSON-shaped data flows through the same
	/// dispatch as declared records.
	fn from(json: &serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(*b),
			serde_json::Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Value::Int(i)
				} else {
					Value::Float(n.as_f64().unwrap_or(0.0))
				}
			}
			serde_json::Value::String(s) => Value::Str(s.clone()),
			serde_json::Value::Array(items) => {
				Value::List(items.iter().map(Value::from).collect())
			}
			serde_json::Value::Object(entries) => Value::Map(
				entries
					.iter()
					.map(|(k, v)| (k.clone(), Value::from(v)))
					.collect(),
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Value::Str("hello".into()), "hello")]
	#[case(Value::Int(42), "42")]
	#[case(Value::Float(3.14), "3.14")]
	#[case(Value::Bool(true), "true")]
	#[case(Value::Null, "None")]
	#[case(Value::Enum { member: "ADMIN".into(), value: "admin".into() }, "admin")]
	fn test_display_text(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.display_text(), expected);
	}

	#[test]
	fn test_display_text_dates() {
		let d = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
		assert_eq!(Value::Date(d).display_text(), "2025-03-11");

		let dt = d.and_hms_opt(14, 30, 5).unwrap();
		assert_eq!(Value::DateTime(dt).display_text(), "2025-03-11 14:30:05");
	}

	#[rstest]
	#[case(Value::Bool(true), true)]
	#[case(Value::Bool(false), false)]
	#[case(Value::Int(0), false)]
	#[case(Value::Int(-1), true)]
	#[case(Value::Str(String::new()), false)]
	#[case(Value::Null, false)]
	#[case(Value::List(vec![]), false)]
	#[case(Value::List(vec![Value::Int(1)]), true)]
	fn test_is_truthy(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(value.is_truthy(), expected);
	}

	#[test]
	fn test_from_json_scalars() {
		assert_eq!(Value::from(&serde_json::json!(null)), Value::Null);
		assert_eq!(Value::from(&serde_json::json!(true)), Value::Bool(true));
		assert_eq!(Value::from(&serde_json::json!(7)), Value::Int(7));
		assert_eq!(Value::from(&serde_json::json!(2.5)), Value::Float(2.5));
		assert_eq!(
			Value::from(&serde_json::json!("text")),
			Value::Str("text".into())
		);
	}

	#[test]
	fn test_from_json_collections() {
		let json = serde_json::json!({"a": 1, "b": [true, null]});
		let value = Value::from(&json);

		let Value::Map(entries) = value else {
			panic!("expected a map");
		};
		assert_eq!(entries[0], ("a".to_string(), Value::Int(1)));
		assert_eq!(
			entries[1],
			(
				"b".to_string(),
				Value::List(vec![Value::Bool(true), Value::Null])
			)
		);
	}
}
