use std::time::{Duration, Instant};

pub enum TimeModel {
	/// Offline rendering: fixed dt, no sleeping.
	VideoRender,
	/// Real time: sleep out the remainder of each frame period.
	RtFrameLock,
}

pub struct TimeManager {
	pft: f32,
	model: TimeModel,
	last: Instant,
}

impl TimeManager {
	pub fn new(pft: f32, model: TimeModel) -> Self {
		Self {
			pft,
			model,
			last: Instant::now(),
		}
	}

	/// Block until the next frame boundary (no-op for VideoRender).
	pub fn wait_frame(&mut self) {
		match self.model {
			TimeModel::VideoRender => {}
			TimeModel::RtFrameLock => {
				let budget = Duration::from_secs_f32(self.pft);
				let elapsed = self.last.elapsed();
				if elapsed < budget {
					std::thread::sleep(budget - elapsed);
				}
				self.last = Instant::now();
			}
		}
	}
}
