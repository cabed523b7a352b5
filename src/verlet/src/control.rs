use crate::pointer::PointerEvent;

/// Messages from the host into a running cloth thread. Pointer events may
/// land at any point between frames; the integrator reads the latest state
/// at the start of the frame it runs in.
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
	Pointer(PointerEvent),
	/// Full mesh rebuild with a new bounding box.
	Resize(f32, f32),
	/// Stop the frame loop; the host joins the thread before releasing the
	/// drawing surface.
	Shutdown,
}
