use crate::pr_model::PrModel;

/// Events published by a cloth thread to its host.
#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, UpdateInfo),
}

#[derive(Clone, Copy, Debug)]
pub struct UpdateInfo {
	/// Frame compute time over the frame budget; > 1 means the instance is
	/// missing its refresh interval.
	pub load: f32,
	pub particle_len: usize,
	pub constraint_len: usize,
}
