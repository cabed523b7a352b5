use serde::{Deserialize, Serialize};

use crate::color::parse_hex;

/// Appearance of one cloth surface. Physics never reads this.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClothStyle {
	/// Hex fill color; falls back to the default on parse failure.
	pub fill: String,
	/// Stroke-only rendering instead of fill plus glow.
	#[serde(default)]
	pub outline_only: bool,
	/// Text drawn centered on the cloth by hosts with text facilities.
	#[serde(default)]
	pub label: Option<String>,
}

impl Default for ClothStyle {
	fn default() -> Self {
		Self {
			fill: "#b8a589".into(),
			outline_only: false,
			label: None,
		}
	}
}

impl ClothStyle {
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
		self.fill = fill.into();
		self
	}

	pub fn outlined(mut self) -> Self {
		self.outline_only = true;
		self
	}

	pub fn fill_rgb(&self) -> [u8; 3] {
		parse_hex(&self.fill)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::color::FALLBACK_FILL;

	#[test]
	fn test_default_fill_parses() {
		assert_eq!(ClothStyle::default().fill_rgb(), FALLBACK_FILL);
	}

	#[test]
	fn test_builder() {
		let s = ClothStyle::default()
			.with_fill("#112233")
			.with_label("Explore")
			.outlined();
		assert_eq!(s.fill_rgb(), [0x11, 0x22, 0x33]);
		assert!(s.outline_only);
		assert_eq!(s.label.as_deref(), Some("Explore"));
	}
}
