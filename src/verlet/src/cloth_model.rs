use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constraint::{ConstraintKind, DistanceConstraint};
use crate::particle::Particle;
use crate::profile::FeelProfile;
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
	/// Free-floating cloth (buttons).
	None,
	/// Entire top row frozen (hanging nav bar).
	TopRow,
}

/// Grid dimensions and layout of one cloth instance.
#[derive(Clone, Debug)]
pub struct GridSpec {
	pub cols: usize,
	pub rows: usize,
	pub width: f32,
	pub height: f32,
	pub padding: f32,
	pub pin: PinMode,
	pub jitter_seed: u64,
}

impl GridSpec {
	pub fn new(cols: usize, rows: usize, width: f32, height: f32) -> Self {
		Self {
			cols,
			rows,
			width,
			height,
			padding: 15.0,
			pin: PinMode::None,
			jitter_seed: 0,
		}
	}

	pub fn with_padding(mut self, padding: f32) -> Self {
		self.padding = padding;
		self
	}

	pub fn with_pin(mut self, pin: PinMode) -> Self {
		self.pin = pin;
		self
	}

	pub fn with_jitter_seed(mut self, seed: u64) -> Self {
		self.jitter_seed = seed;
		self
	}

	pub fn spacing(&self) -> (f32, f32) {
		(
			self.width / (self.cols - 1) as f32,
			self.height / (self.rows - 1) as f32,
		)
	}

	/// Drawing-surface size including padding on all sides.
	pub fn surface(&self) -> (f32, f32) {
		(
			self.width + self.padding * 2.,
			self.height + self.padding * 2.,
		)
	}
}

/// Points plus constraints for one instance. Rebuilt wholesale on resize;
/// never shared between instances.
pub struct ClothModel {
	pub particles: Vec<Particle>,
	pub constraints: Vec<DistanceConstraint>,
	pub cols: usize,
	pub rows: usize,
}

impl ClothModel {
	pub fn new_grid(spec: &GridSpec, profile: &FeelProfile) -> Self {
		assert!(spec.cols >= 2 && spec.rows >= 2, "grid needs at least 2x2");
		let (sx, sy) = spec.spacing();
		let diag = (sx * sx + sy * sy).sqrt();
		let mut rng = if profile.jitter && spec.jitter_seed != 0 {
			Some(StdRng::seed_from_u64(spec.jitter_seed))
		} else {
			None
		};
		// uniform 95..105% of nominal rest length, caller-seeded
		let mut jit = move |rest: f32| match rng.as_mut() {
			Some(rng) => rest * rng.gen_range(0.95..=1.05),
			None => rest,
		};

		let mut particles = Vec::with_capacity(spec.cols * spec.rows);
		for y in 0..spec.rows {
			for x in 0..spec.cols {
				let pos = V2::new(
					spec.padding + x as f32 * sx,
					spec.padding + y as f32 * sy,
				);
				let anchor = anchor_for(x, y, spec, profile);
				let pinned = spec.pin == PinMode::TopRow && y == 0;
				particles.push(if pinned {
					Particle::pinned(pos, anchor)
				} else {
					Particle::new(pos, anchor)
				});
			}
		}

		// Fixed row-major sweep; the solver's determinism depends on this
		// order never changing.
		let mut constraints = Vec::new();
		for y in 0..spec.rows {
			for x in 0..spec.cols {
				let idx = y * spec.cols + x;
				if x < spec.cols - 1 {
					constraints.push(DistanceConstraint::new(idx, idx + 1, jit(sx)));
				}
				if y < spec.rows - 1 {
					constraints
						.push(DistanceConstraint::new(idx, idx + spec.cols, jit(sy)));
				}
				if x < spec.cols - 1 && y < spec.rows - 1 {
					constraints.push(
						DistanceConstraint::new(idx, idx + spec.cols + 1, jit(diag))
							.with_kind(ConstraintKind::Shear),
					);
					constraints.push(
						DistanceConstraint::new(idx + 1, idx + spec.cols, jit(diag))
							.with_kind(ConstraintKind::Shear),
					);
				}
				if profile.skip_links {
					if x < spec.cols - 2 {
						constraints.push(
							DistanceConstraint::new(idx, idx + 2, jit(sx * 2.))
								.with_kind(ConstraintKind::Skip),
						);
					}
					if y < spec.rows - 2 {
						constraints.push(
							DistanceConstraint::new(idx, idx + spec.cols * 2, jit(sy * 2.))
								.with_kind(ConstraintKind::Skip),
						);
					}
				}
			}
		}

		log::debug!(
			"grid {}x{}: {} points, {} constraints",
			spec.cols,
			spec.rows,
			particles.len(),
			constraints.len()
		);
		Self {
			particles,
			constraints,
			cols: spec.cols,
			rows: spec.rows,
		}
	}

	pub fn index(&self, col: usize, row: usize) -> usize {
		row * self.cols + col
	}
}

/// Anchor strength from grid location alone: corner > edge > interior.
fn anchor_for(x: usize, y: usize, spec: &GridSpec, profile: &FeelProfile) -> f32 {
	let edge_x = x == 0 || x == spec.cols - 1;
	let edge_y = y == 0 || y == spec.rows - 1;
	if edge_x && edge_y {
		profile.anchor_corner
	} else if edge_x || edge_y {
		profile.anchor_edge
	} else {
		profile.anchor_inner
	}
}
