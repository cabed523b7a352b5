use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use crate::cloth_model::{ClothModel, GridSpec};
use crate::control::ControlMessage;
use crate::particle::StepEnv;
use crate::pointer::{PointerEvent, PointerState};
use crate::profile::FeelProfile;
use crate::time_manager::{TimeManager, TimeModel};
use protocol::pr_model::{PrModel, PrPoint};
use protocol::user_event::{UpdateInfo, UserEvent};

/// One animated cloth instance: exclusively owns its mesh and pointer
/// state. Per frame: integrate every point, then run the profile's fixed
/// number of relaxation passes, then snapshot for rendering.
pub struct ClothWorld {
	spec: GridSpec,
	profile: FeelProfile,
	model: ClothModel,
	pointer: PointerState,
	frame_dt: f32,
	tick: u64,
}

impl ClothWorld {
	pub fn new(spec: GridSpec, profile: FeelProfile) -> Self {
		let model = ClothModel::new_grid(&spec, &profile);
		Self {
			spec,
			profile,
			model,
			pointer: PointerState::default(),
			frame_dt: 1. / 60.,
			tick: 0,
		}
	}

	pub fn with_frame_dt(mut self, dt: f32) -> Self {
		self.frame_dt = dt;
		self
	}

	pub fn with_pointer_radius(mut self, radius: f32) -> Self {
		self.pointer.radius = radius;
		self
	}

	pub fn spec(&self) -> &GridSpec {
		&self.spec
	}

	pub fn model(&self) -> &ClothModel {
		&self.model
	}

	pub fn model_mut(&mut self) -> &mut ClothModel {
		&mut self.model
	}

	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	pub fn set_pointer(&mut self, pointer: PointerState) {
		self.pointer = pointer;
	}

	pub fn apply_pointer(&mut self, ev: PointerEvent) {
		self.pointer.apply(ev);
	}

	/// Discard and rebuild the whole mesh for a new bounding box. Runs
	/// between frames only, so a frame never sees a half-built mesh.
	pub fn resize(&mut self, width: f32, height: f32) {
		self.spec.width = width;
		self.spec.height = height;
		self.rebuild();
	}

	pub fn rebuild(&mut self) {
		self.model = ClothModel::new_grid(&self.spec, &self.profile);
	}

	/// Advance exactly one frame: integrator first, then the fixed pass
	/// count over every constraint in build order.
	pub fn step(&mut self) {
		self.tick += 1;
		let t = self.tick as f32 * self.frame_dt;
		let env = StepEnv::new(&self.profile, &self.pointer, t);
		let m = &mut self.model;
		for p in m.particles.iter_mut() {
			p.integrate(&env);
		}
		for _ in 0..self.profile.solver_passes {
			for c in m.constraints.iter() {
				c.relax(&mut m.particles, self.profile.stiffness);
			}
		}
	}

	/// Geometry snapshot handed to renderers.
	pub fn pr_model(&self) -> PrModel {
		PrModel {
			cols: self.model.cols,
			rows: self.model.rows,
			points: self
				.model
				.particles
				.iter()
				.map(|p| PrPoint {
					pos: [p.pos[0], p.pos[1]],
				})
				.collect(),
		}
	}

	/// Frame-locked loop run on the instance's physics thread. Control
	/// messages are drained before each step (last pointer write wins);
	/// `Shutdown` or a hung-up update channel ends the loop.
	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControlMessage>,
	) {
		let mut tm = TimeManager::new(self.frame_dt, TimeModel::RtFrameLock);
		loop {
			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControlMessage::Pointer(ev) => self.pointer.apply(ev),
					ControlMessage::Resize(w, h) => self.resize(w, h),
					ControlMessage::Shutdown => return,
				}
			}
			let start = Instant::now();
			self.step();
			let info = UpdateInfo {
				load: start.elapsed().as_secs_f32() / self.frame_dt,
				particle_len: self.model.particles.len(),
				constraint_len: self.model.constraints.len(),
			};
			if tx.send(UserEvent::Update(self.pr_model(), info)).is_err() {
				log::debug!("update channel closed, stopping cloth thread");
				return;
			}
			tm.wait_frame();
		}
	}
}
