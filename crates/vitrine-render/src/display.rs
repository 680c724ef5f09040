//! Read-only record tree renderer
//!
//! Walks a record's declared fields in declaration order and produces a
//! `model-fields` table, recursing into nested records, lists and
//! mappings. The depth rule lives in exactly one place: every recursive
//! call checks `current_depth > max_depth` on entry and substitutes a
//! placeholder naming its own record type; callers recurse
//! unconditionally with `current_depth + 1`.

use vitrine_model::{Fields, Value};

use crate::escape::escape_html;

/// Render a record's fields as a display table.
///
/// Depth counting starts at 0 for the root record and increments by one
/// per nested-record boundary, including one level per element of a list
/// of records. With `max_depth` of 0 only the root's immediate fields
/// render; nested records become placeholders.
pub fn render_fields<M: Fields + ?Sized>(
	model: &M,
	current_depth: u32,
	max_depth: Option<u32>,
) -> String {
	if let Some(max) = max_depth
		&& current_depth > max
	{
		return format!(
			r#"<div class="model-summary">[Nested {}]</div>"#,
			escape_html(model.type_name())
		);
	}

	let mut html = String::from(r#"<table class="model-fields">"#);
	for field in model.fields() {
		html.push_str("<tr>");
		html.push_str(&format!(
			r#"<th class="field-name">{}</th>"#,
			escape_html(&field.name)
		));
		html.push_str(&value_cell(&field.value, current_depth, max_depth));
		html.push_str("</tr>");
	}
	html.push_str("</table>");
	html
}

/// Render one field value as its table cell.
///
/// Dispatch precedence: nested record, mapping, list, enumeration,
/// date/timestamp, null, then the textual fallback.
fn value_cell(value: &Value, current_depth: u32, max_depth: Option<u32>) -> String {
	match value {
		Value::Record(record) => format!(
			r#"<td class="field-value field-nested">{}</td>"#,
			render_fields(record, current_depth + 1, max_depth)
		),
		Value::Map(entries) => {
			let mut nested = String::from(r#"<table class="model-fields">"#);
			for (key, entry) in entries {
				nested.push_str(&format!(
					r#"<tr><th class="field-name">{}</th><td class="field-value">{}</td></tr>"#,
					escape_html(key),
					escape_html(&entry.display_text())
				));
			}
			nested.push_str("</table>");
			format!(r#"<td class="field-value field-nested">{nested}</td>"#)
		}
		Value::List(items) => list_cell(items, current_depth, max_depth),
		Value::Enum { value, .. } => {
			format!(r#"<td class="field-value">{}</td>"#, escape_html(value))
		}
		Value::Date(d) => format!(
			r#"<td class="field-value">{}</td>"#,
			escape_html(&d.format("%Y-%m-%d").to_string())
		),
		Value::DateTime(dt) => format!(
			r#"<td class="field-value">{}</td>"#,
			escape_html(&dt.format("%Y-%m-%d %H:%M:%S").to_string())
		),
		Value::Null => r#"<td class="field-value">None</td>"#.to_string(),
		other => format!(
			r#"<td class="field-value">{}</td>"#,
			escape_html(&other.display_text())
		),
	}
}

fn list_cell(items: &[Value], current_depth: u32, max_depth: Option<u32>) -> String {
	if matches!(items.first(), Some(Value::Record(_))) {
		// List of records: one level of nesting per element
		let rendered: Vec<String> = items
			.iter()
			.map(|item| match item {
				Value::Record(record) => {
					render_fields(record, current_depth + 1, max_depth)
				}
				other => escape_html(&other.display_text()),
			})
			.collect();
		let list_html = format!(
			r#"<div class="list-item">{}</div>"#,
			rendered.join(r#"</div><div class="list-item">"#)
		);
		format!(r#"<td class="field-value field-list">{list_html}</td>"#)
	} else {
		let mut list_html = String::from(r#"<div class="field-value field-list">"#);
		for item in items {
			list_html.push_str(&format!(
				r#"<div class="list-item">{}</div>"#,
				escape_html(&item.display_text())
			));
		}
		list_html.push_str("</div>");
		format!(r#"<td class="field-value field-list">{list_html}</td>"#)
	}
}
