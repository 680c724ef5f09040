//! Theme lookup and CSS blocks
//!
//! The CSS text is a static asset concatenated verbatim into the output;
//! the only logic here is the name lookup and the custom-css override.

use crate::config::RenderConfig;

/// A predefined CSS block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
	/// Compact default styling
	Default,
	/// Airy light styling
	Light,
	/// Dark styling
	Dark,
}

impl Theme {
	/// Look up a theme by name. Unknown or absent names fall back to
	/// [`Theme::Default`]; this is never an error.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::Theme;
	///
	/// assert_eq!(Theme::from_name(Some("dark")), Theme::Dark);
	/// assert_eq!(Theme::from_name(Some("no-such-theme")), Theme::Default);
	/// assert_eq!(Theme::from_name(None), Theme::Default);
	/// ```
	pub fn from_name(name: Option<&str>) -> Self {
		match name {
			Some("light") => Theme::Light,
			Some("dark") => Theme::Dark,
			_ => Theme::Default,
		}
	}

	/// The theme's CSS block.
	pub fn css(&self) -> &'static str {
		match self {
			Theme::Default => DEFAULT_CSS,
			Theme::Light => LIGHT_CSS,
			Theme::Dark => DARK_CSS,
		}
	}
}

/// Resolve the CSS block for a configuration.
///
/// `custom_css` replaces the theme block entirely; without it, the theme
/// block is used unless `include_css` is false.
pub fn css_for(config: &RenderConfig) -> Option<&str> {
	if let Some(custom) = config.custom_css.as_deref() {
		return Some(custom);
	}
	if config.include_css {
		Some(Theme::from_name(config.theme.as_deref()).css())
	} else {
		None
	}
}

const DEFAULT_CSS: &str = "
    .model-view, .model-form {
        font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif;
        border: 1px solid #ddd;
        border-radius: 4px;
        padding: 1rem;
        margin: 1rem 0;
        box-shadow: 0 1px 3px rgba(0,0,0,0.1);
    }
    .model-title {
        margin-top: 0;
        margin-bottom: 0.75rem;
        font-size: 1.25rem;
        color: #333;
    }
    .model-content {
        margin-left: 1rem;
    }
    .model-fields {
        border-collapse: collapse;
        width: 100%;
    }
    .model-fields th, .model-fields td {
        padding: 0.5rem;
        text-align: left;
        border-bottom: 1px solid #eee;
    }
    .field-name {
        font-weight: 600;
        color: #555;
        width: 30%;
    }
    .field-value {
        font-family: monospace;
    }
    .field-nested, .field-list {
        padding: 0;
    }
    .list-item {
        padding: 0.25rem 0;
        border-bottom: 1px solid #f0f0f0;
    }
    .list-item:last-child {
        border-bottom: none;
    }

    /* Form styles */
    .form-field {
        margin-bottom: 1rem;
    }
    .form-field label {
        display: block;
        font-weight: 600;
        margin-bottom: 0.25rem;
        color: #555;
    }
    .form-field input,
    .form-field select,
    .form-field textarea {
        width: 100%;
        padding: 0.5rem;
        border: 1px solid #ddd;
        border-radius: 4px;
        font-family: inherit;
        font-size: 1rem;
    }
    .form-field input[type=\"checkbox\"] {
        width: auto;
        margin-right: 0.5rem;
    }
    .form-actions {
        margin-top: 1.5rem;
        text-align: right;
    }
    .submit-button {
        background-color: #4a90e2;
        color: white;
        border: none;
        border-radius: 4px;
        padding: 0.5rem 1.5rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .submit-button:hover {
        background-color: #3b7fd1;
    }
";

const LIGHT_CSS: &str = "
    .model-view, .model-form {
        font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif;
        border: 1px solid #e0e0e0;
        border-radius: 8px;
        padding: 1.25rem;
        margin: 1.25rem 0;
        box-shadow: 0 2px 5px rgba(0,0,0,0.05);
        background-color: #ffffff;
    }
    .model-title {
        margin-top: 0;
        margin-bottom: 1rem;
        font-size: 1.5rem;
        color: #333;
        border-bottom: 1px solid #f0f0f0;
        padding-bottom: 0.5rem;
    }
    .model-content {
        margin-left: 0;
    }
    .model-fields {
        border-collapse: collapse;
        width: 100%;
    }
    .model-fields th, .model-fields td {
        padding: 0.75rem;
        text-align: left;
        border-bottom: 1px solid #f0f0f0;
    }
    .field-name {
        font-weight: 600;
        color: #444;
        width: 30%;
        background-color: #fafafa;
    }
    .field-value {
        font-family: Menlo, Monaco, \"Courier New\", monospace;
        color: #333;
    }
    .field-nested, .field-list {
        padding: 0;
    }
    .list-item {
        padding: 0.5rem 0;
        border-bottom: 1px solid #f5f5f5;
    }
    .list-item:last-child {
        border-bottom: none;
    }

    /* Form styles */
    .form-field {
        margin-bottom: 1.25rem;
    }
    .form-field label {
        display: block;
        font-weight: 600;
        margin-bottom: 0.5rem;
        color: #444;
    }
    .form-field input,
    .form-field select,
    .form-field textarea {
        width: 100%;
        padding: 0.75rem;
        border: 1px solid #e0e0e0;
        border-radius: 6px;
        font-family: inherit;
        font-size: 1rem;
        transition: border-color 0.2s;
    }
    .form-field input:focus,
    .form-field select:focus,
    .form-field textarea:focus {
        border-color: #4a90e2;
        outline: none;
        box-shadow: 0 0 0 3px rgba(74, 144, 226, 0.1);
    }
    .form-field input[type=\"checkbox\"] {
        width: auto;
        margin-right: 0.75rem;
    }
    .form-actions {
        margin-top: 2rem;
        text-align: right;
    }
    .submit-button {
        background-color: #4a90e2;
        color: white;
        border: none;
        border-radius: 6px;
        padding: 0.75rem 2rem;
        font-size: 1rem;
        cursor: pointer;
        transition: background-color 0.2s;
    }
    .submit-button:hover {
        background-color: #3b7fd1;
    }
";

const DARK_CSS: &str = "
    .model-view, .model-form {
        font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif;
        border: 1px solid #333;
        border-radius: 8px;
        padding: 1.25rem;
        margin: 1.25rem 0;
        box-shadow: 0 4px 6px rgba(0,0,0,0.2);
        background-color: #1e1e1e;
        color: #e0e0e0;
    }
    .model-title {
        margin-top: 0;
        margin-bottom: 1rem;
        font-size: 1.5rem;
        color: #e0e0e0;
        border-bottom: 1px solid #333;
        padding-bottom: 0.5rem;
    }
    .model-content {
        margin-left: 0;
    }
    .model-fields {
        border-collapse: collapse;
        width: 100%;
    }
    .model-fields th, .model-fields td {
        padding: 0.75rem;
        text-align: left;
        border-bottom: 1px solid #333;
    }
    .field-name {
        font-weight: 600;
        color: #a0a0a0;
        width: 30%;
        background-color: #252525;
    }
    .field-value {
        font-family: Menlo, Monaco, \"Courier New\", monospace;
        color: #e0e0e0;
    }
    .field-nested, .field-list {
        padding: 0;
    }
    .list-item {
        padding: 0.5rem 0;
        border-bottom: 1px solid #333;
    }
    .list-item:last-child {
        border-bottom: none;
    }

    /* Form styles */
    .form-field {
        margin-bottom: 1.25rem;
    }
    .form-field label {
        display: block;
        font-weight: 600;
        margin-bottom: 0.5rem;
        color: #a0a0a0;
    }
    .form-field input,
    .form-field select,
    .form-field textarea {
        width: 100%;
        padding: 0.75rem;
        border: 1px solid #444;
        border-radius: 6px;
        font-family: inherit;
        font-size: 1rem;
        background-color: #252525;
        color: #e0e0e0;
        transition: border-color 0.2s;
    }
    .form-field input:focus,
    .form-field select:focus,
    .form-field textarea:focus {
        border-color: #4a90e2;
        outline: none;
        box-shadow: 0 0 0 3px rgba(74, 144, 226, 0.2);
    }
    .form-field input[type=\"checkbox\"] {
        width: auto;
        margin-right: 0.75rem;
    }
    .form-actions {
        margin-top: 2rem;
        text-align: right;
    }
    .submit-button {
        background-color: #4a90e2;
        color: white;
        border: none;
        border-radius: 6px;
        padding: 0.75rem 2rem;
        font-size: 1rem;
        cursor: pointer;
        transition: background-color 0.2s;
    }
    .submit-button:hover {
        background-color: #3b7fd1;
    }
";
