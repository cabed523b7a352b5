use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use material::style::ClothStyle;
use material::swatch::SwatchBook;
use verlet::cloth_model::{GridSpec, PinMode};
use verlet::profile::FeelProfile;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
	#[error("read scene: {0}")]
	Io(#[from] std::io::Error),
	#[error("parse scene: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Declarative description of every cloth on a page: named swatches plus a
/// list of placed instances.
#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
	#[serde(default)]
	pub swatches: HashMap<String, ClothStyle>,
	pub cloths: Vec<ClothDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClothDef {
	pub name: String,
	pub x: f32,
	pub y: f32,
	pub cols: usize,
	pub rows: usize,
	pub width: f32,
	pub height: f32,
	#[serde(default = "default_padding")]
	pub padding: f32,
	#[serde(default)]
	pub pin_top: bool,
	#[serde(default = "default_profile")]
	pub profile: String,
	#[serde(default)]
	pub swatch: Option<String>,
	#[serde(default)]
	pub style: Option<ClothStyle>,
	#[serde(default)]
	pub jitter_seed: u64,
}

fn default_padding() -> f32 {
	15.0
}

fn default_profile() -> String {
	"tight".into()
}

impl ClothDef {
	pub fn grid_spec(&self) -> GridSpec {
		let pin = if self.pin_top {
			PinMode::TopRow
		} else {
			PinMode::None
		};
		GridSpec::new(self.cols, self.rows, self.width, self.height)
			.with_padding(self.padding)
			.with_pin(pin)
			.with_jitter_seed(self.jitter_seed)
	}

	/// Unknown profile names fall back to the default feel.
	pub fn feel(&self) -> FeelProfile {
		FeelProfile::by_name(&self.profile).unwrap_or_else(|| {
			log::warn!("unknown profile {:?}, using tight", self.profile);
			FeelProfile::tight()
		})
	}

	/// Inline style wins over a swatch reference.
	pub fn resolve_style(&self, book: &SwatchBook) -> ClothStyle {
		if let Some(style) = &self.style {
			return style.clone();
		}
		match &self.swatch {
			Some(name) => book.get(name),
			None => ClothStyle::default(),
		}
	}
}

impl Scene {
	pub fn load(path: &Path) -> Result<Self, SceneError> {
		let text = std::fs::read_to_string(path)?;
		Ok(serde_json::from_str(&text)?)
	}

	pub fn swatch_book(&self) -> SwatchBook {
		let mut book = SwatchBook::default();
		for (name, style) in &self.swatches {
			book.add(name.clone(), style.clone());
		}
		book
	}

	/// Built-in landing-page arrangement: a hanging nav bar plus three
	/// buttons, used when no scene file is given.
	pub fn demo() -> Self {
		let nav = ClothDef {
			name: "nav".into(),
			x: 70.,
			y: 0.,
			cols: 28,
			rows: 6,
			width: 640.,
			height: 48.,
			padding: 15.,
			pin_top: true,
			profile: "loose".into(),
			swatch: None,
			style: Some(ClothStyle::default().outlined()),
			jitter_seed: 0,
		};
		let explore = ClothDef {
			name: "explore".into(),
			x: 120.,
			y: 200.,
			cols: 20,
			rows: 8,
			width: 180.,
			height: 55.,
			padding: 15.,
			pin_top: false,
			profile: "tight".into(),
			swatch: None,
			style: Some(ClothStyle::default().with_label("EXPLORE")),
			jitter_seed: 0,
		};
		let subscribe = ClothDef {
			name: "subscribe".into(),
			x: 360.,
			y: 200.,
			cols: 20,
			rows: 8,
			width: 180.,
			height: 55.,
			padding: 15.,
			pin_top: false,
			profile: "tight".into(),
			swatch: None,
			style: Some(
				ClothStyle::default()
					.with_fill("#8a9bb8")
					.with_label("SUBSCRIBE")
					.outlined(),
			),
			jitter_seed: 0,
		};
		let about = ClothDef {
			name: "about".into(),
			x: 240.,
			y: 330.,
			cols: 20,
			rows: 8,
			width: 180.,
			height: 55.,
			padding: 15.,
			pin_top: false,
			profile: "wool".into(),
			swatch: None,
			style: Some(
				ClothStyle::default()
					.with_fill("#a0795e")
					.with_label("ABOUT"),
			),
			jitter_seed: 7,
		};
		Self {
			swatches: HashMap::new(),
			cloths: vec![nav, explore, subscribe, about],
		}
	}
}
