use crate::canvas::Canvas;

/// Scanline even-odd fill of a closed ring. `shade` gets the pixel center
/// so fills can be position-dependent (gradients).
pub fn fill_polygon<F>(canvas: &mut Canvas, ring: &[[f32; 2]], shade: F)
where
	F: Fn(f32, f32) -> [u8; 4],
{
	if ring.len() < 3 {
		return;
	}
	let ymin = ring
		.iter()
		.map(|p| p[1])
		.fold(f32::INFINITY, f32::min)
		.floor()
		.max(0.) as i32;
	let ymax = ring
		.iter()
		.map(|p| p[1])
		.fold(f32::NEG_INFINITY, f32::max)
		.ceil()
		.min(canvas.height() as f32) as i32;

	let mut xs: Vec<f32> = Vec::with_capacity(8);
	for y in ymin..ymax {
		let yc = y as f32 + 0.5;
		xs.clear();
		for i in 0..ring.len() {
			let p = ring[i];
			let q = ring[(i + 1) % ring.len()];
			if (p[1] <= yc && yc < q[1]) || (q[1] <= yc && yc < p[1]) {
				xs.push(p[0] + (yc - p[1]) * (q[0] - p[0]) / (q[1] - p[1]));
			}
		}
		xs.sort_by(|a, b| a.total_cmp(b));
		for pair in xs.chunks_exact(2) {
			let start = pair[0].ceil() as i32;
			let end = pair[1].floor() as i32;
			for x in start..=end {
				let xc = x as f32 + 0.5;
				canvas.blend_pixel(x, y, shade(xc, yc));
			}
		}
	}
}

/// DDA stroke of an open or closed polyline, one pixel wide.
pub fn stroke_polyline(
	canvas: &mut Canvas,
	pts: &[[f32; 2]],
	color: [u8; 4],
	closed: bool,
) {
	if pts.len() < 2 {
		return;
	}
	let last = if closed { pts.len() } else { pts.len() - 1 };
	for i in 0..last {
		let p = pts[i];
		let q = pts[(i + 1) % pts.len()];
		stroke_segment(canvas, p, q, color);
	}
}

fn stroke_segment(canvas: &mut Canvas, p: [f32; 2], q: [f32; 2], color: [u8; 4]) {
	let dx = q[0] - p[0];
	let dy = q[1] - p[1];
	let steps = dx.abs().max(dy.abs()).ceil() as i32;
	if steps == 0 {
		canvas.blend_pixel(p[0].round() as i32, p[1].round() as i32, color);
		return;
	}
	for i in 0..=steps {
		let k = i as f32 / steps as f32;
		canvas.blend_pixel(
			(p[0] + dx * k).round() as i32,
			(p[1] + dy * k).round() as i32,
			color,
		);
	}
}

/// Bounding box of a ring, `(min, max)`.
pub fn bounds(ring: &[[f32; 2]]) -> ([f32; 2], [f32; 2]) {
	let mut min = [f32::INFINITY; 2];
	let mut max = [f32::NEG_INFINITY; 2];
	for p in ring {
		for c in 0..2 {
			min[c] = min[c].min(p[c]);
			max[c] = max[c].max(p[c]);
		}
	}
	(min, max)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_fill_square_inside_and_out() {
		let mut c = Canvas::new(20, 20).unwrap();
		let ring = [[5., 5.], [15., 5.], [15., 15.], [5., 15.]];
		fill_polygon(&mut c, &ring, |_, _| [255, 0, 0, 255]);
		assert_eq!(c.pixel(10, 10), [255, 0, 0, 255]);
		assert_eq!(c.pixel(2, 2), [0, 0, 0, 0]);
		assert_eq!(c.pixel(18, 10), [0, 0, 0, 0]);
	}

	#[test]
	fn test_degenerate_ring_is_ignored() {
		let mut c = Canvas::new(8, 8).unwrap();
		fill_polygon(&mut c, &[[1., 1.], [2., 2.]], |_, _| [255, 255, 255, 255]);
		assert_eq!(c.pixel(1, 1), [0, 0, 0, 0]);
	}

	#[test]
	fn test_stroke_marks_endpoints() {
		let mut c = Canvas::new(16, 16).unwrap();
		stroke_polyline(&mut c, &[[2., 2.], [12., 2.]], [0, 255, 0, 255], false);
		assert_eq!(c.pixel(2, 2), [0, 255, 0, 255]);
		assert_eq!(c.pixel(12, 2), [0, 255, 0, 255]);
		assert_eq!(c.pixel(7, 2), [0, 255, 0, 255]);
		assert_eq!(c.pixel(7, 5), [0, 0, 0, 0]);
	}

	#[test]
	fn test_bounds() {
		let (min, max) = bounds(&[[1., 7.], [4., 2.], [3., 9.]]);
		assert_eq!(min, [1., 2.]);
		assert_eq!(max, [4., 9.]);
	}
}
