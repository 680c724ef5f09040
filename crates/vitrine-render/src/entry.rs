//! Top-level rendering entry points
//!
//! The contract here is "always returns a string": a failure while
//! building the editable path is recovered by a diagnostic HTML comment
//! plus the display rendering of the same record, never an error to the
//! caller.

use vitrine_model::Fields;

use crate::config::RenderConfig;
use crate::display::render_fields;
use crate::escape::escape_html;
use crate::form::render_form;
use crate::{live, theme};

/// Render a record with the given configuration.
///
/// Prepends a `<style>` block (theme or custom CSS) unless CSS is
/// disabled, then dispatches to the form or display path and applies
/// root-level live-update attributes.
///
/// # Examples
///
/// ```
/// use vitrine_model::{FieldType, Record, Value};
/// use vitrine_render::{RenderConfig, render_html};
///
/// let record = Record::new("SimpleModel")
/// 	.field("name", FieldType::Str, "John Doe")
/// 	.field("age", FieldType::Int, Value::Int(30));
///
/// let html = render_html(&record, &RenderConfig::new().without_css());
/// assert!(html.contains(r#"<h2 class="model-title">SimpleModel</h2>"#));
/// assert!(!html.contains("<style>"));
/// ```
pub fn render_html<M: Fields + ?Sized>(model: &M, config: &RenderConfig) -> String {
	let mut html = String::new();

	if let Some(css) = theme::css_for(config) {
		html.push_str("<style>");
		html.push_str(css);
		html.push_str("</style>");
	}

	if config.editable {
		match render_form(model, config) {
			Ok(body) => {
				html.push_str(&format!(
					r#"<form class="model-form"{}>"#,
					live::root_attributes(config)
				));
				html.push_str(&body);
				html.push_str("</form>");
			}
			Err(err) => {
				tracing::warn!(
					model = model.type_name(),
					"form generation failed, falling back to display view: {err}"
				);
				html.push_str(&format!("<!-- Form generation failed: {err} -->"));
				// The fallback view never carries live-update attributes
				html.push_str(&display_view(model, config, ""));
			}
		}
	} else {
		html.push_str(&display_view(model, config, live::root_attributes(config)));
	}

	html
}

/// Render a record with the default configuration: read-only view,
/// default theme CSS included, no live updates, unbounded depth.
pub fn model_to_html<M: Fields + ?Sized>(model: &M) -> String {
	render_html(model, &RenderConfig::default())
}

fn display_view<M: Fields + ?Sized>(
	model: &M,
	config: &RenderConfig,
	root_attrs: &str,
) -> String {
	let mut html = format!(r#"<div class="model-view"{root_attrs}>"#);
	html.push_str(&format!(
		r#"<h2 class="model-title">{}</h2>"#,
		escape_html(model.type_name())
	));
	html.push_str(r#"<div class="model-content">"#);
	html.push_str(&render_fields(model, 0, config.max_depth));
	html.push_str("</div>");
	html.push_str("</div>");
	html
}
