use material::color::with_alpha;
use material::gradient::Ramp;
use material::style::ClothStyle;
use protocol::pr_model::PrModel;

use crate::canvas::Canvas;
use crate::raster::{bounds, fill_polygon, stroke_polyline};

const WEFT_FILLED: [u8; 4] = [255, 255, 255, 38];
const WEFT_OUTLINED: [u8; 4] = [255, 255, 255, 26];
const OUTLINE_WASH: [u8; 4] = [255, 255, 255, 13];

/// Paint one posed cloth onto the canvas: boundary polygon (gradient fill
/// or stroke-only) plus the reduced weave overlay. Geometry only; no
/// physics is read here.
pub fn draw_model(canvas: &mut Canvas, model: &PrModel, style: &ClothStyle) {
	let ring = model.outline();
	if ring.len() < 3 {
		log::debug!("skipping draw of empty model");
		return;
	}

	if style.outline_only {
		fill_polygon(canvas, &ring, |_, _| OUTLINE_WASH);
		stroke_polyline(canvas, &ring, with_alpha(style.fill_rgb(), 255), true);
	} else {
		let ramp = Ramp::new(style.fill_rgb());
		let (min, max) = bounds(&ring);
		// gradient runs along the top-left to bottom-right diagonal
		let span = (max[0] - min[0]) + (max[1] - min[1]);
		fill_polygon(canvas, &ring, |x, y| {
			if span <= 0. {
				ramp.at(0.5)
			} else {
				ramp.at(((x - min[0]) + (y - min[1])) / span)
			}
		});
	}

	let weft = if style.outline_only {
		WEFT_OUTLINED
	} else {
		WEFT_FILLED
	};
	for line in model.weft_lines() {
		stroke_polyline(canvas, &line, weft, false);
	}
}
