use image::{ImageBuffer, Rgba};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	#[error("cannot acquire a {0}x{1} drawing surface")]
	BadSurface(u32, u32),
	#[error("encode: {0}")]
	Encode(#[from] image::ImageError),
}

/// Owned RGBA drawing surface. One per cloth instance, released only after
/// the instance's frame loop has stopped.
pub struct Canvas {
	img: ImageBuffer<Rgba<u8>, Vec<u8>>,
	width: u32,
	height: u32,
}

impl Canvas {
	pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
		if width == 0 || height == 0 {
			return Err(RenderError::BadSurface(width, height));
		}
		Ok(Self {
			img: ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0])),
			width,
			height,
		})
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn clear(&mut self, color: [u8; 4]) {
		for p in self.img.pixels_mut() {
			*p = Rgba(color);
		}
	}

	/// Source-over blend; out-of-bounds writes are dropped.
	pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
		if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
			return;
		}
		let a = color[3] as u32;
		if a == 0 {
			return;
		}
		let p = self.img.get_pixel_mut(x as u32, y as u32);
		for c in 0..3 {
			p[c] = ((color[c] as u32 * a + p[c] as u32 * (255 - a)) / 255) as u8;
		}
		p[3] = p[3].max(color[3]);
	}

	pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
		self.img.get_pixel(x, y).0
	}

	/// Raw RGBA bytes for blitting into a host texture.
	pub fn data(&self) -> &[u8] {
		self.img.as_raw()
	}

	pub fn save_png(&self, path: &std::path::Path) -> Result<(), RenderError> {
		self.img.save(path)?;
		Ok(())
	}
}
