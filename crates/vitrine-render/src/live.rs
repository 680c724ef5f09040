//! Live-update attribute provider
//!
//! Emits declarative `hx-*` attribute pairs consumed by an external
//! hypermedia runtime. Nothing here is executed by this library; the
//! attributes are plain markup.

use crate::config::{LiveUpdateMode, RenderConfig};

/// Periodic refresh for the read-only view
const REFRESH_ATTRS: &str = r#" hx-get="/refresh" hx-trigger="every 10s""#;
/// Change-triggered submit for the whole form
const SUBMIT_ATTRS: &str = r#" hx-post="/submit" hx-trigger="change delay:500ms""#;
/// Change-triggered update for an individual control
const INLINE_ATTRS: &str = r#" hx-trigger="change" hx-post="/update-field""#;

/// Attributes for the root container (leading space included, empty when
/// none apply).
///
/// `full` mode puts a periodic-refresh pair on the display container or a
/// change-triggered submit pair on the form; `inline` and `none` add
/// nothing at the root.
pub fn root_attributes(config: &RenderConfig) -> &'static str {
	if !config.live_update {
		return "";
	}
	match (config.editable, config.live_update_mode) {
		(false, LiveUpdateMode::Full) => REFRESH_ATTRS,
		(true, LiveUpdateMode::Full) => SUBMIT_ATTRS,
		_ => "",
	}
}

/// Attributes for each form control (leading space included, empty when
/// none apply). Only `inline` mode decorates individual inputs.
pub fn input_attributes(config: &RenderConfig) -> &'static str {
	if config.live_update && config.live_update_mode == LiveUpdateMode::Inline {
		INLINE_ATTRS
	} else {
		""
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(false, LiveUpdateMode::Full, r#" hx-get="/refresh" hx-trigger="every 10s""#)]
	#[case(true, LiveUpdateMode::Full, r#" hx-post="/submit" hx-trigger="change delay:500ms""#)]
	#[case(false, LiveUpdateMode::Inline, "")]
	#[case(true, LiveUpdateMode::Inline, "")]
	#[case(false, LiveUpdateMode::None, "")]
	#[case(true, LiveUpdateMode::None, "")]
	fn test_root_attributes(
		#[case] editable: bool,
		#[case] mode: LiveUpdateMode,
		#[case] expected: &str,
	) {
		let mut config = RenderConfig::new().with_live_update().with_live_update_mode(mode);
		config.editable = editable;
		assert_eq!(root_attributes(&config), expected);
	}

	#[test]
	fn test_no_attributes_without_live_update() {
		let config = RenderConfig::new();
		assert_eq!(root_attributes(&config), "");
		assert_eq!(input_attributes(&config), "");
	}

	#[test]
	fn test_input_attributes_inline_only() {
		let inline = RenderConfig::new()
			.with_live_update()
			.with_live_update_mode(LiveUpdateMode::Inline);
		assert_eq!(
			input_attributes(&inline),
			r#" hx-trigger="change" hx-post="/update-field""#
		);

		let full = RenderConfig::new().with_live_update();
		assert_eq!(input_attributes(&full), "");
	}
}
