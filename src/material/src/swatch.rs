use fnv::FnvHashMap;

use crate::style::ClothStyle;

/// Named style lookup, filled once at scene-build time.
#[derive(Default)]
pub struct SwatchBook {
	swatches: FnvHashMap<String, ClothStyle>,
}

impl SwatchBook {
	pub fn add(&mut self, name: impl Into<String>, style: ClothStyle) {
		self.swatches.insert(name.into(), style);
	}

	/// Unknown names resolve to the default style instead of failing the
	/// whole scene.
	pub fn get(&self, name: &str) -> ClothStyle {
		match self.swatches.get(name) {
			Some(s) => s.clone(),
			None => {
				log::warn!("swatch {:?} not found", name);
				ClothStyle::default()
			}
		}
	}

	pub fn len(&self) -> usize {
		self.swatches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.swatches.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_lookup_and_fallback() {
		let mut book = SwatchBook::default();
		book.add("gold", ClothStyle::default().with_fill("#c9a227"));
		assert_eq!(book.get("gold").fill_rgb(), [0xc9, 0xa2, 0x27]);
		assert_eq!(book.get("missing").fill, ClothStyle::default().fill);
		assert_eq!(book.len(), 1);
	}
}
