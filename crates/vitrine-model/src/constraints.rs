//! Declarative per-field constraint metadata
//!
//! Constraints are attached to a field declaration and read-only during
//! rendering. The form renderer reflects them as HTML attributes
//! (`min`/`max`/`minlength`/`maxlength`/`pattern`/`required`); no
//! validation happens here - that is the data-model layer's job, done
//! upstream of rendering.

use serde::{Deserialize, Serialize};

/// Bounds, length, pattern and required metadata for one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
	/// Exclusive lower bound
	pub gt: Option<f64>,
	/// Inclusive lower bound
	pub ge: Option<f64>,
	/// Exclusive upper bound
	pub lt: Option<f64>,
	/// Inclusive upper bound
	pub le: Option<f64>,
	/// Minimum string length
	pub min_length: Option<u64>,
	/// Maximum string length
	pub max_length: Option<u64>,
	/// Regular-expression pattern, emitted verbatim as the `pattern`
	/// attribute (a regex is not markup and must not be re-escaped)
	pub pattern: Option<String>,
	/// Whether the field must be supplied
	pub required: bool,
}

impl Constraints {
	/// Create an empty constraint set
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::Constraints;
	///
	/// let constraints = Constraints::new();
	/// assert!(!constraints.required);
	/// assert_eq!(constraints.gt, None);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an exclusive lower bound
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::Constraints;
	///
	/// let constraints = Constraints::new().with_gt(0.0);
	/// assert_eq!(constraints.gt, Some(0.0));
	/// ```
	pub fn with_gt(mut self, bound: f64) -> Self {
		self.gt = Some(bound);
		self
	}

	/// Set an inclusive lower bound
	pub fn with_ge(mut self, bound: f64) -> Self {
		self.ge = Some(bound);
		self
	}

	/// Set an exclusive upper bound
	pub fn with_lt(mut self, bound: f64) -> Self {
		self.lt = Some(bound);
		self
	}

	/// Set an inclusive upper bound
	pub fn with_le(mut self, bound: f64) -> Self {
		self.le = Some(bound);
		self
	}

	/// Set a minimum length
	pub fn with_min_length(mut self, length: u64) -> Self {
		self.min_length = Some(length);
		self
	}

	/// Set a maximum length
	pub fn with_max_length(mut self, length: u64) -> Self {
		self.max_length = Some(length);
		self
	}

	/// Set a regular-expression pattern
	pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	/// Mark the field as required
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_model::Constraints;
	///
	/// let constraints = Constraints::new().required();
	/// assert!(constraints.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Whether no constraint besides `required` is present.
	pub fn is_empty(&self) -> bool {
		self.gt.is_none()
			&& self.ge.is_none()
			&& self.lt.is_none()
			&& self.le.is_none()
			&& self.min_length.is_none()
			&& self.max_length.is_none()
			&& self.pattern.is_none()
	}
}
