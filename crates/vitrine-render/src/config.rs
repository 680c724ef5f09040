//! Render configuration

use serde::{Deserialize, Serialize};

/// Live-update mode for the hypermedia attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveUpdateMode {
	/// Root-level attributes: periodic refresh in display mode, a
	/// change-triggered submit on the form in edit mode
	#[default]
	Full,
	/// Per-input change-triggered attributes; nothing on the root
	Inline,
	/// No live-update attributes anywhere
	None,
}

/// Immutable render options.
///
/// Unknown keys in a serialized configuration are ignored on
/// deserialization; every field has a default.
///
/// # Examples
///
/// ```
/// use vitrine_render::RenderConfig;
///
/// let config = RenderConfig::new()
/// 	.editable()
/// 	.with_theme("dark")
/// 	.with_max_depth(2);
///
/// assert!(config.editable);
/// assert_eq!(config.theme.as_deref(), Some("dark"));
/// assert_eq!(config.max_depth, Some(2));
/// assert!(config.include_css);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
	/// Render an editable form instead of the read-only view
	pub editable: bool,
	/// Named theme for the CSS block; unknown or absent names fall back
	/// to the default block
	pub theme: Option<String>,
	/// Emit live-update attributes for a hypermedia runtime
	pub live_update: bool,
	/// Where the live-update attributes go
	pub live_update_mode: LiveUpdateMode,
	/// Recursion cap on nested records; `None` means unbounded
	pub max_depth: Option<u32>,
	/// Whether to prepend the theme CSS block
	pub include_css: bool,
	/// Custom CSS replacing the theme block entirely when present
	pub custom_css: Option<String>,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			editable: false,
			theme: None,
			live_update: false,
			live_update_mode: LiveUpdateMode::default(),
			max_depth: None,
			include_css: true,
			custom_css: None,
		}
	}
}

impl RenderConfig {
	/// Create a configuration with all defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Render as an editable form
	pub fn editable(mut self) -> Self {
		self.editable = true;
		self
	}

	/// Select a named theme
	pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
		self.theme = Some(theme.into());
		self
	}

	/// Enable live-update attributes
	pub fn with_live_update(mut self) -> Self {
		self.live_update = true;
		self
	}

	/// Set the live-update mode
	pub fn with_live_update_mode(mut self, mode: LiveUpdateMode) -> Self {
		self.live_update_mode = mode;
		self
	}

	/// Cap recursion into nested records
	pub fn with_max_depth(mut self, depth: u32) -> Self {
		self.max_depth = Some(depth);
		self
	}

	/// Skip the CSS block
	pub fn without_css(mut self) -> Self {
		self.include_css = false;
		self
	}

	/// Replace the theme block with custom CSS
	pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
		self.custom_css = Some(css.into());
		self
	}
}
