use crate::pointer::PointerState;
use crate::profile::{FeelProfile, PressMode};
use crate::V2;

/// Per-frame force inputs, derived once from profile + pointer state so the
/// per-point update stays branch-light.
pub struct StepEnv {
	pub friction: f32,
	pub gravity: f32,
	pub wobble_amp: f32,
	pub wobble_phase: f32,
	pub wobble_spread: f32,
	pub pointer: PointerState,
	pub pointer_strength: f32,
	pub pull: bool,
	pub anchor_relief: f32,
}

impl StepEnv {
	/// `t` is accumulated frame time, never wall clock.
	pub fn new(profile: &FeelProfile, pointer: &PointerState, t: f32) -> Self {
		let gravity = if pointer.hovered {
			profile.gravity * profile.hover_gravity_scale
		} else {
			profile.gravity
		};
		let strength = if pointer.pressed {
			profile.press_strength
		} else {
			profile.hover_strength
		};
		Self {
			friction: profile.friction,
			gravity,
			wobble_amp: profile.wobble_amp,
			wobble_phase: t * profile.wobble_freq,
			wobble_spread: profile.wobble_spread,
			pointer: *pointer,
			pointer_strength: strength * profile.force_scale,
			pull: pointer.pressed && profile.press_mode == PressMode::Pull,
			anchor_relief: if pointer.hovered {
				profile.hover_anchor_relief
			} else {
				1.0
			},
		}
	}
}

/// One mass node of the cloth grid. Velocity is implicit in `pos - ppos`.
#[derive(Clone, Debug)]
pub struct Particle {
	pub pos: V2,
	pub ppos: V2,
	pub orig: V2,
	pub anchor: f32,
	pub pinned: bool,
}

impl Particle {
	pub fn new(pos: V2, anchor: f32) -> Self {
		Self {
			pos,
			ppos: pos,
			orig: pos,
			anchor,
			pinned: false,
		}
	}

	pub fn pinned(pos: V2, anchor: f32) -> Self {
		Self {
			pinned: true,
			..Self::new(pos, anchor)
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	/// Displacement from the rest position.
	pub fn offset(&self) -> V2 {
		self.pos - self.orig
	}

	pub fn reset(&mut self) {
		self.pos = self.orig;
		self.ppos = self.orig;
	}

	/// Advance one timestep. Order matters: velocity is taken before the
	/// previous position is overwritten, and the anchor return runs last so
	/// it damps everything applied above it.
	pub fn integrate(&mut self, env: &StepEnv) {
		if self.pinned {
			return;
		}

		let v = (self.pos - self.ppos) * env.friction;
		self.ppos = self.pos;
		self.pos += v;

		if env.wobble_amp != 0.0 {
			self.pos[1] += env.wobble_amp
				* (env.wobble_phase + self.orig[0] * env.wobble_spread).sin();
		}

		self.pos[1] += env.gravity;

		if env.pointer.hovered {
			let d = self.pos - env.pointer.pos;
			let dist = d.magnitude();
			if dist < env.pointer.radius {
				let force = (env.pointer.radius - dist) / env.pointer.radius;
				let dp = d * (force * env.pointer_strength);
				if env.pull {
					self.pos -= dp;
				} else {
					self.pos += dp;
				}
			}
		}

		self.pos += (self.orig - self.pos) * (self.anchor * env.anchor_relief);
	}
}
