//! Edge cases: empty collections, extreme values, null handling,
//! recovery paths and the JSON adapter.

use vitrine_model::{Field, FieldType, Record, Value};
use vitrine_render::{RenderConfig, render_html};

fn empty_collections_model() -> Record {
	Record::new("EmptyCollectionsModel")
		.field(
			"empty_list",
			FieldType::List(Box::new(FieldType::Str)),
			Value::List(vec![]),
		)
		.field("empty_dict", FieldType::Map, Value::Map(vec![]))
		.field(
			"none_value",
			FieldType::Optional(Box::new(FieldType::Str)),
			Value::Null,
		)
}

#[test]
fn test_empty_collections_display() {
	let html = render_html(&empty_collections_model(), &RenderConfig::new());

	assert!(html.contains(r#"<h2 class="model-title">EmptyCollectionsModel</h2>"#));

	// the empty list is rendered as an empty container, not omitted
	assert!(html.contains(r#"<th class="field-name">empty_list</th>"#));
	assert!(html.contains(
		r#"<td class="field-value field-list"><div class="field-value field-list"></div></td>"#
	));

	// the empty mapping is an empty nested table
	assert!(html.contains(r#"<th class="field-name">empty_dict</th>"#));
	assert!(html.contains(
		r#"<td class="field-value field-nested"><table class="model-fields"></table></td>"#
	));

	assert!(html.contains(r#"<th class="field-name">none_value</th>"#));
	assert!(html.contains(r#"<td class="field-value">None</td>"#));
}

#[test]
fn test_empty_collections_form() {
	let html = render_html(
		&empty_collections_model(),
		&RenderConfig::new().editable().without_css(),
	);

	assert!(html.contains(r#"id="empty_list""#));
	assert!(html.contains(r#"name="empty_list""#));
	assert!(html.contains("<textarea id=\"empty_list\" name=\"empty_list\"></textarea>"));

	// a null optional renders as an empty text input
	assert!(html.contains(r#"<input type="text" id="none_value" name="none_value" value="" />"#));
}

#[test]
fn test_extreme_values() {
	let record = Record::new("ExtremeCasesModel")
		.field("long_string", FieldType::Str, "a".repeat(1000))
		.field("large_number", FieldType::Int, Value::Int(10_000_000_000))
		.field("negative", FieldType::Int, Value::Int(i64::MIN));
	let html = render_html(&record, &RenderConfig::new().without_css());

	assert!(html.contains(&"a".repeat(1000)));
	assert!(html.contains(r#"<td class="field-value">10000000000</td>"#));
	assert!(html.contains(&i64::MIN.to_string()));

	let form = render_html(&record, &RenderConfig::new().editable().without_css());
	assert!(form.contains(r#"value="10000000000""#));
}

#[test]
fn test_unknown_shapes_fall_back_to_text() {
	// A field whose declared type matches no specific rule renders through
	// the textual fallback in both modes.
	let record = Record::new("OpaqueModel").with_field(Field::new(
		"blob",
		FieldType::Other,
		Value::Str("binary data".into()),
	));

	let display = render_html(&record, &RenderConfig::new().without_css());
	assert!(display.contains(r#"<td class="field-value">binary data</td>"#));

	let form = render_html(&record, &RenderConfig::new().editable().without_css());
	assert!(form.contains(r#"<input type="text" id="blob" name="blob" value="binary data" />"#));
}

#[test]
fn test_mixed_list_first_element_decides() {
	let inner = Record::new("Inner").field("n", FieldType::Int, Value::Int(1));
	let record = Record::new("Mixed").field(
		"items",
		FieldType::List(Box::new(FieldType::Other)),
		Value::List(vec![Value::Record(inner), Value::Str("loose".into())]),
	);
	let html = render_html(&record, &RenderConfig::new().without_css());

	assert!(html.contains(r#"<th class="field-name">n</th>"#));
	assert!(html.contains(r#"<div class="list-item">loose</div>"#));
}

#[test]
fn test_map_values_are_escaped() {
	let record = Record::new("Mapped").field(
		"attrs",
		FieldType::Map,
		Value::Map(vec![(
			"<key>".to_string(),
			Value::Str("<value>".into()),
		)]),
	);
	let html = render_html(&record, &RenderConfig::new().without_css());

	assert!(html.contains("&lt;key&gt;"));
	assert!(html.contains("&lt;value&gt;"));
	assert!(!html.contains("<key>"));
}

#[test]
fn test_form_failure_comment_and_fallback() {
	let broken = Record::new("BrokenModel")
		.field("ok_field", FieldType::Str, "still here")
		.field("choice", FieldType::Literal { choices: vec![] }, Value::Null);
	let html = render_html(&broken, &RenderConfig::new().editable().without_css());

	assert!(html.contains("<!-- Form generation failed:"));
	assert!(html.contains("choice"));
	// the display fallback still shows the record's fields
	assert!(html.contains(r#"<td class="field-value">still here</td>"#));
	assert!(!html.contains("<form"));
}

#[test]
fn test_record_from_json_renders() {
	let json = serde_json::json!({
		"name": "John Doe",
		"age": 30,
		"scores": [1, 2, 3],
		"meta": {"plan": "free"}
	});
	let record = Record::from_json("User", &json);
	let html = render_html(&record, &RenderConfig::new().without_css());

	assert!(html.contains(r#"<h2 class="model-title">User</h2>"#));
	assert!(html.contains(r#"<td class="field-value">John Doe</td>"#));
	assert!(html.contains(r#"<div class="list-item">1</div>"#));
	assert!(html.contains(r#"<th class="field-name">plan</th><td class="field-value">free</td>"#));
}

#[test]
fn test_deeply_nested_chain_respects_cap() {
	// ten records deep, capped at three
	let mut record = Record::new("Level9").field("n", FieldType::Int, Value::Int(9));
	for level in (0..9).rev() {
		record = Record::new(format!("Level{level}")).field(
			"child",
			FieldType::Nested { type_name: format!("Level{}", level + 1) },
			Value::Record(record),
		);
	}

	let html = render_html(&record, &RenderConfig::new().with_max_depth(3).without_css());
	assert!(html.contains("[Nested Level4]"));
	assert!(!html.contains("Level5"));
	assert!(!html.contains(r#"<th class="field-name">n</th>"#));
}
