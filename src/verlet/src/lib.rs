pub mod cloth_model;
pub mod constraint;
pub mod control;
pub mod cworld;
pub mod particle;
pub mod pointer;
pub mod profile;
pub mod time_manager;

pub type V2 = nalgebra::Vector2<f32>;
