use verlet::cloth_model::{ClothModel, GridSpec};
use verlet::cworld::ClothWorld;
use verlet::profile::FeelProfile;
use verlet::V2;

fn still_profile() -> FeelProfile {
	let mut p = FeelProfile::tight();
	p.gravity = 0.0;
	p
}

#[test]
fn rest_lengths_hold_at_steady_state() {
	// no gravity, no wobble, no pointer: the mesh must sit at rest
	// indefinitely with every constraint within 2% of its rest length
	let mut world =
		ClothWorld::new(GridSpec::new(20, 8, 180., 55.), still_profile());
	for _ in 0..400 {
		world.step();
	}
	let m = world.model();
	for c in &m.constraints {
		let len = c.length(&m.particles);
		assert!(
			(len - c.rest).abs() <= c.rest * 0.02,
			"constraint {}-{} drifted: {} vs {}",
			c.a,
			c.b,
			len,
			c.rest
		);
	}
}

#[test]
fn rest_lengths_recover_after_a_poke() {
	let mut world =
		ClothWorld::new(GridSpec::new(12, 6, 110., 40.), still_profile());
	// shove a handful of interior points
	for i in [15, 16, 27, 28] {
		world.model_mut().particles[i].pos += V2::new(8., -6.);
	}
	for _ in 0..400 {
		world.step();
	}
	let m = world.model();
	for c in &m.constraints {
		let len = c.length(&m.particles);
		assert!((len - c.rest).abs() <= c.rest * 0.02);
	}
}

#[test]
fn degenerate_pair_is_safe() {
	let mut world =
		ClothWorld::new(GridSpec::new(6, 4, 50., 30.), still_profile());
	// force two linked points onto the same coordinate
	let a = world.model().index(2, 1);
	let b = world.model().index(3, 1);
	let pos = world.model().particles[a].pos;
	world.model_mut().particles[b].pos = pos;
	world.model_mut().particles[b].ppos = pos;
	world.step();
	for p in &world.model().particles {
		assert!(p.pos[0].is_finite() && p.pos[1].is_finite());
	}
}

#[test]
fn relaxation_order_is_deterministic() {
	let spec = GridSpec::new(10, 5, 90., 40.);
	let profile = FeelProfile::tight();
	let model = ClothModel::new_grid(&spec, &profile);

	let run = |mut particles: Vec<verlet::particle::Particle>| {
		particles[17].pos += V2::new(5., 3.);
		for _ in 0..profile.solver_passes {
			for c in &model.constraints {
				c.relax(&mut particles, profile.stiffness);
			}
		}
		particles
	};

	let a = run(model.particles.clone());
	let b = run(model.particles.clone());
	for (pa, pb) in a.iter().zip(b.iter()) {
		assert_eq!(pa.pos[0].to_bits(), pb.pos[0].to_bits());
		assert_eq!(pa.pos[1].to_bits(), pb.pos[1].to_bits());
	}
}

#[test]
fn single_pass_undercorrects_multiple_passes_tighten() {
	// the fixed pass count exists because one pass under-corrects when
	// constraints share points
	let spec = GridSpec::new(10, 5, 90., 40.);
	let profile = FeelProfile::tight();
	let model = ClothModel::new_grid(&spec, &profile);

	let error_after = |passes: usize| {
		let mut particles = model.particles.clone();
		particles[22].pos += V2::new(6., 4.);
		for _ in 0..passes {
			for c in &model.constraints {
				c.relax(&mut particles, profile.stiffness);
			}
		}
		model
			.constraints
			.iter()
			.map(|c| (c.length(&particles) - c.rest).abs())
			.fold(0f32, f32::max)
	};

	assert!(error_after(3) < error_after(1));
}
