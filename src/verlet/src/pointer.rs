use crate::V2;

/// Pointer snapshot read by the integrator at the start of each frame.
/// Written only by the host input path; last write wins.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
	pub pos: V2,
	pub hovered: bool,
	pub pressed: bool,
	pub radius: f32,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			pos: V2::new(0., 0.),
			hovered: false,
			pressed: false,
			radius: 40.0,
		}
	}
}

/// Raw input events in cloth-local coordinates. Touch events map 1:1
/// onto the mouse state.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
	Move(f32, f32),
	Enter,
	Leave,
	Down,
	Up,
	TouchStart(f32, f32),
	TouchMove(f32, f32),
	TouchEnd,
}

impl PointerState {
	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn apply(&mut self, ev: PointerEvent) {
		match ev {
			PointerEvent::Move(x, y) => self.pos = V2::new(x, y),
			PointerEvent::Enter => self.hovered = true,
			PointerEvent::Leave => {
				// leaving also cancels an in-progress press
				self.hovered = false;
				self.pressed = false;
			}
			PointerEvent::Down => self.pressed = true,
			PointerEvent::Up => self.pressed = false,
			PointerEvent::TouchStart(x, y) => {
				self.pos = V2::new(x, y);
				self.hovered = true;
				self.pressed = true;
			}
			PointerEvent::TouchMove(x, y) => self.pos = V2::new(x, y),
			PointerEvent::TouchEnd => {
				self.hovered = false;
				self.pressed = false;
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_leave_resets_press() {
		let mut ps = PointerState::default();
		ps.apply(PointerEvent::Enter);
		ps.apply(PointerEvent::Down);
		assert!(ps.hovered && ps.pressed);
		ps.apply(PointerEvent::Leave);
		assert!(!ps.hovered);
		assert!(!ps.pressed);
	}

	#[test]
	fn test_touch_maps_to_mouse_state() {
		let mut ps = PointerState::default();
		ps.apply(PointerEvent::TouchStart(3., 4.));
		assert!(ps.hovered && ps.pressed);
		assert_eq!(ps.pos, V2::new(3., 4.));
		ps.apply(PointerEvent::TouchMove(5., 6.));
		assert_eq!(ps.pos, V2::new(5., 6.));
		ps.apply(PointerEvent::TouchEnd);
		assert!(!ps.hovered && !ps.pressed);
	}
}
