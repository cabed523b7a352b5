use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use material::style::ClothStyle;
use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};
use protocol::view::Placement;
use verlet::cloth_model::GridSpec;
use verlet::control::ControlMessage;
use verlet::cworld::ClothWorld;
use verlet::pointer::PointerEvent;
use verlet::profile::FeelProfile;

/// One mounted cloth surface: owns the physics thread, both channel ends,
/// the latest geometry snapshot, and the click tracking. Dropping the
/// instance stops and joins the thread before any backing surface can go
/// away.
pub struct ClothInstance {
	pub placement: Placement,
	pub style: ClothStyle,
	spec: GridSpec,
	tx: Sender<ControlMessage>,
	rx: Receiver<UserEvent>,
	handle: Option<JoinHandle<()>>,
	last_model: Option<PrModel>,
	last_info: Option<UpdateInfo>,
	hovered: bool,
	press_armed: bool,
	on_click: Option<Box<dyn FnMut()>>,
}

impl ClothInstance {
	pub fn spawn(
		spec: GridSpec,
		profile: FeelProfile,
		style: ClothStyle,
		placement: Placement,
	) -> Self {
		let (ctl_tx, ctl_rx) = channel();
		let (upd_tx, upd_rx) = channel();
		let thread_spec = spec.clone();
		let handle = std::thread::spawn(move || {
			let mut world = ClothWorld::new(thread_spec, profile);
			world.run_thread(upd_tx, ctl_rx);
		});
		Self {
			placement,
			style,
			spec,
			tx: ctl_tx,
			rx: upd_rx,
			handle: Some(handle),
			last_model: None,
			last_info: None,
			hovered: false,
			press_armed: false,
			on_click: None,
		}
	}

	pub fn with_on_click(mut self, f: impl FnMut() + 'static) -> Self {
		self.on_click = Some(Box::new(f));
		self
	}

	pub fn spec(&self) -> &GridSpec {
		&self.spec
	}

	/// Drawing-surface size in local units.
	pub fn surface(&self) -> (f32, f32) {
		self.spec.surface()
	}

	/// Forward one pointer event (cloth-local coordinates) to the physics
	/// thread, tracking press-and-release for the click handler. The click
	/// fires on a completed press and release on the surface, independent
	/// of any physics state.
	pub fn pointer_event(&mut self, ev: PointerEvent) {
		match ev {
			PointerEvent::Enter => self.hovered = true,
			PointerEvent::Leave => {
				self.hovered = false;
				self.press_armed = false;
			}
			PointerEvent::Down => self.press_armed = self.hovered,
			PointerEvent::Up => {
				if self.press_armed && self.hovered {
					if let Some(f) = self.on_click.as_mut() {
						f();
					}
				}
				self.press_armed = false;
			}
			PointerEvent::TouchStart(..) => {
				self.hovered = true;
				self.press_armed = true;
			}
			PointerEvent::TouchEnd => {
				if self.press_armed {
					if let Some(f) = self.on_click.as_mut() {
						f();
					}
				}
				self.hovered = false;
				self.press_armed = false;
			}
			_ => {}
		}
		if self.tx.send(ControlMessage::Pointer(ev)).is_err() {
			log::warn!("cloth thread gone, dropping pointer event");
		}
	}

	pub fn resize(&mut self, width: f32, height: f32) {
		self.spec.width = width;
		self.spec.height = height;
		let (sw, sh) = self.spec.surface();
		self.placement.resize(sw, sh);
		let _ = self.tx.send(ControlMessage::Resize(width, height));
	}

	/// Drain pending updates, keeping the newest snapshot.
	pub fn poll(&mut self) {
		while let Ok(UserEvent::Update(model, info)) = self.rx.try_recv() {
			self.last_model = Some(model);
			self.last_info = Some(info);
		}
	}

	/// Block until the next update or timeout; true if one arrived.
	pub fn wait_update(&mut self, timeout: Duration) -> bool {
		match self.rx.recv_timeout(timeout) {
			Ok(UserEvent::Update(model, info)) => {
				self.last_model = Some(model);
				self.last_info = Some(info);
				self.poll();
				true
			}
			Err(_) => false,
		}
	}

	pub fn model(&self) -> Option<&PrModel> {
		self.last_model.as_ref()
	}

	pub fn info(&self) -> Option<&UpdateInfo> {
		self.last_info.as_ref()
	}

	/// Stop the frame loop and join the thread. Idempotent; also run on
	/// drop so the loop can never outlive the surfaces it draws to.
	pub fn shutdown(&mut self) {
		if let Some(handle) = self.handle.take() {
			let _ = self.tx.send(ControlMessage::Shutdown);
			if handle.join().is_err() {
				log::error!("cloth thread panicked");
			}
		}
	}
}

impl Drop for ClothInstance {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::cell::Cell;
	use std::rc::Rc;

	fn test_instance() -> ClothInstance {
		ClothInstance::spawn(
			GridSpec::new(6, 4, 50., 30.),
			FeelProfile::tight(),
			ClothStyle::default(),
			Placement::new(0., 0., 80., 60.),
		)
	}

	#[test]
	fn test_updates_arrive_and_shutdown_joins() {
		let mut inst = test_instance();
		assert!(inst.wait_update(Duration::from_secs(2)));
		let model = inst.model().expect("model after update");
		assert_eq!(model.cols, 6);
		assert_eq!(model.rows, 4);
		assert_eq!(model.points.len(), 24);
		inst.shutdown();
		// second call is a no-op
		inst.shutdown();
	}

	#[test]
	fn test_click_fires_on_press_and_release() {
		let clicks = Rc::new(Cell::new(0u32));
		let counter = clicks.clone();
		let mut inst = test_instance().with_on_click(move || {
			counter.set(counter.get() + 1);
		});
		inst.pointer_event(PointerEvent::Enter);
		inst.pointer_event(PointerEvent::Down);
		inst.pointer_event(PointerEvent::Up);
		assert_eq!(clicks.get(), 1);
	}

	#[test]
	fn test_leave_cancels_press() {
		let clicks = Rc::new(Cell::new(0u32));
		let counter = clicks.clone();
		let mut inst = test_instance().with_on_click(move || {
			counter.set(counter.get() + 1);
		});
		inst.pointer_event(PointerEvent::Enter);
		inst.pointer_event(PointerEvent::Down);
		inst.pointer_event(PointerEvent::Leave);
		inst.pointer_event(PointerEvent::Up);
		assert_eq!(clicks.get(), 0);
	}

	#[test]
	fn test_touch_tap_clicks() {
		let clicks = Rc::new(Cell::new(0u32));
		let counter = clicks.clone();
		let mut inst = test_instance().with_on_click(move || {
			counter.set(counter.get() + 1);
		});
		inst.pointer_event(PointerEvent::TouchStart(10., 10.));
		inst.pointer_event(PointerEvent::TouchEnd);
		assert_eq!(clicks.get(), 1);
	}
}
