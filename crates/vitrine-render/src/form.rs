//! Editable form renderer
//!
//! Maps each field's declared type, constraint metadata and current value
//! to an HTML form control. Constraint reflection is best-effort: a bad
//! bound drops the constraint attributes for that field, never the
//! control. A select control with no choices is a [`FormError`] - the
//! entry point recovers it by falling back to the display view.

use vitrine_model::{Constraints, Field, FieldType, Fields, Value};

use crate::config::RenderConfig;
use crate::escape::{escape_attr, escape_html};
use crate::live;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("select control for field '{field}' has no choices")]
	EmptyChoices { field: String },
	#[error("non-finite numeric bound on field '{field}'")]
	NonFiniteBound { field: String },
}

pub type FormResult<T> = Result<T, FormError>;

/// Render a record's form body: title, labelled controls, submit button.
///
/// The caller wraps the result in the `<form>` element and applies
/// root-level live-update attributes.
pub fn render_form<M: Fields + ?Sized>(model: &M, config: &RenderConfig) -> FormResult<String> {
	let input_attrs = live::input_attributes(config);

	let mut html = format!(
		r#"<h2 class="model-title">{}</h2>"#,
		escape_html(model.type_name())
	);
	html.push_str(r#"<div class="model-content">"#);
	html.push_str(r#"<fieldset class="model-fields">"#);

	for field in model.fields() {
		html.push_str(r#"<div class="form-field">"#);
		html.push_str(&format!(
			r#"<label for="{}">{}</label>"#,
			escape_attr(&field.name),
			escape_html(&field.name)
		));
		html.push_str(&render_control(field, input_attrs)?);
		html.push_str("</div>");
	}

	html.push_str("</fieldset>");
	html.push_str(
		r#"<div class="form-actions"><button type="submit" class="submit-button">Submit</button></div>"#,
	);
	html.push_str("</div>");
	Ok(html)
}

/// Render a single form control for a field.
///
/// `live_attrs` is the per-input live-update attribute pair (empty unless
/// inline mode is active).
pub fn render_control(field: &Field, live_attrs: &str) -> FormResult<String> {
	let attrs = field_attributes(field, live_attrs);
	control(&field.name, &field.field_type, &field.value, &attrs)
}

/// Assemble the attribute string: `id`/`name`, constraint attributes,
/// `required`, then live-update attributes.
fn field_attributes(field: &Field, live_attrs: &str) -> String {
	let name = escape_attr(&field.name);
	let mut attrs = format!(r#" id="{name}" name="{name}""#);

	if let Some(constraints) = &field.constraints {
		match constraint_attributes(&field.name, &field.field_type, constraints) {
			Ok(extra) => attrs.push_str(&extra),
			Err(err) => {
				// Best-effort: the control is still emitted with id/name only
				tracing::debug!(field = %field.name, "dropping constraint attributes: {err}");
			}
		}
		if constraints.required {
			attrs.push_str(" required");
		}
	}

	attrs.push_str(live_attrs);
	attrs
}

/// Map constraint metadata to HTML attributes.
///
/// Exclusive bounds are tightened by one step: 1 for integer fields,
/// 0.01 for everything else (matching the number input's step). The
/// `pattern` attribute is a regular expression and is inserted verbatim.
fn constraint_attributes(
	field_name: &str,
	field_type: &FieldType,
	c: &Constraints,
) -> FormResult<String> {
	let step = if is_integer_type(field_type) { 1.0 } else { 0.01 };

	for bound in [c.gt, c.ge, c.lt, c.le].into_iter().flatten() {
		if !bound.is_finite() {
			return Err(FormError::NonFiniteBound {
				field: field_name.to_string(),
			});
		}
	}

	let mut attrs = String::new();
	if let Some(gt) = c.gt {
		attrs.push_str(&format!(r#" min="{}""#, format_bound(gt + step)));
	} else if let Some(ge) = c.ge {
		attrs.push_str(&format!(r#" min="{}""#, format_bound(ge)));
	}
	if let Some(lt) = c.lt {
		attrs.push_str(&format!(r#" max="{}""#, format_bound(lt - step)));
	} else if let Some(le) = c.le {
		attrs.push_str(&format!(r#" max="{}""#, format_bound(le)));
	}
	if let Some(min_length) = c.min_length {
		attrs.push_str(&format!(r#" minlength="{min_length}""#));
	}
	if let Some(max_length) = c.max_length {
		attrs.push_str(&format!(r#" maxlength="{max_length}""#));
	}
	if let Some(pattern) = &c.pattern {
		attrs.push_str(&format!(r#" pattern="{pattern}""#));
	}
	Ok(attrs)
}

fn is_integer_type(field_type: &FieldType) -> bool {
	match field_type {
		FieldType::Int => true,
		FieldType::Optional(inner) => is_integer_type(inner),
		_ => false,
	}
}

/// Whole numbers print without a fractional part (`min="1"`, not
/// `min="1.0"`).
fn format_bound(bound: f64) -> String {
	if bound.fract() == 0.0 && bound.abs() < i64::MAX as f64 {
		(bound as i64).to_string()
	} else {
		bound.to_string()
	}
}

/// Build the control element for a declared type. First match wins;
/// optional wrappers recurse on the inner type with the same value.
fn control(name: &str, field_type: &FieldType, value: &Value, attrs: &str) -> FormResult<String> {
	match field_type {
		FieldType::Str => Ok(format!(
			r#"<input type="text"{attrs} value="{}" />"#,
			text_value(value)
		)),
		FieldType::Int => Ok(format!(
			r#"<input type="number" step="1"{attrs} value="{}" />"#,
			number_value(value)
		)),
		FieldType::Float => Ok(format!(
			r#"<input type="number" step="0.01"{attrs} value="{}" />"#,
			number_value(value)
		)),
		FieldType::Bool => {
			let checked = if value.is_truthy() { " checked" } else { "" };
			Ok(format!(r#"<input type="checkbox"{attrs}{checked} />"#))
		}
		FieldType::DateTime => {
			let formatted = match value {
				Value::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
				_ => String::new(),
			};
			Ok(format!(
				r#"<input type="datetime-local"{attrs} value="{formatted}" />"#
			))
		}
		FieldType::Date => {
			let formatted = match value {
				Value::Date(d) => d.format("%Y-%m-%d").to_string(),
				Value::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
				_ => String::new(),
			};
			Ok(format!(r#"<input type="date"{attrs} value="{formatted}" />"#))
		}
		FieldType::Enum { choices } => {
			if choices.is_empty() {
				return Err(FormError::EmptyChoices { field: name.to_string() });
			}
			let values: Vec<&str> = choices.iter().map(|(_, v)| v.as_str()).collect();
			Ok(select(&values, value, attrs))
		}
		FieldType::Literal { choices } => {
			if choices.is_empty() {
				return Err(FormError::EmptyChoices { field: name.to_string() });
			}
			let values: Vec<&str> = choices.iter().map(String::as_str).collect();
			Ok(select(&values, value, attrs))
		}
		FieldType::List(_) => {
			let joined = match value {
				Value::List(items) => items
					.iter()
					.map(Value::display_text)
					.collect::<Vec<_>>()
					.join("\n"),
				Value::Null => String::new(),
				other => other.display_text(),
			};
			Ok(format!(
				r#"<textarea{attrs}>{}</textarea>"#,
				escape_html(&joined)
			))
		}
		FieldType::Optional(inner) => control(name, inner, value, attrs),
		FieldType::Map | FieldType::Nested { .. } | FieldType::Other => Ok(format!(
			r#"<input type="text"{attrs} value="{}" />"#,
			text_value(value)
		)),
	}
}

/// Options use the underlying value for both the `value` attribute and
/// the label; the option equal to the current value is `selected`.
fn select(choices: &[&str], value: &Value, attrs: &str) -> String {
	let current = match value {
		Value::Enum { value, .. } => Some(value.as_str()),
		Value::Str(s) => Some(s.as_str()),
		_ => None,
	};

	let mut html = format!("<select{attrs}>");
	for choice in choices {
		let escaped = escape_attr(choice);
		html.push_str(&format!(r#"<option value="{escaped}""#));
		if current == Some(*choice) {
			html.push_str(" selected");
		}
		html.push('>');
		html.push_str(&escape_html(choice));
		html.push_str("</option>");
	}
	html.push_str("</select>");
	html
}

fn text_value(value: &Value) -> String {
	if value.is_truthy() {
		escape_attr(&value.display_text())
	} else {
		String::new()
	}
}

fn number_value(value: &Value) -> String {
	if value.is_null() {
		String::new()
	} else {
		escape_attr(&value.display_text())
	}
}
