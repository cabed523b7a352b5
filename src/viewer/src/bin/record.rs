use std::path::PathBuf;

use material::style::ClothStyle;
use swrender::draw::draw_model;
use swrender::Canvas;
use verlet::cloth_model::GridSpec;
use verlet::cworld::ClothWorld;
use verlet::pointer::PointerEvent;
use verlet::profile::FeelProfile;
use verlet::time_manager::{TimeManager, TimeModel};

/// Offline recorder: run the stock button under a deterministic pointer
/// script and dump every frame as a PNG. Same output every run.
fn main() {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();

	let mut args = std::env::args().skip(1);
	let frames: u32 = args
		.next()
		.map(|s| s.parse().expect("frame count"))
		.unwrap_or(180);
	let out: PathBuf = args.next().map(Into::into).unwrap_or_else(|| "frames".into());
	std::fs::create_dir_all(&out).expect("create output dir");

	let spec = GridSpec::new(20, 8, 180., 55.);
	let (sw, sh) = spec.surface();
	let mut world = ClothWorld::new(spec, FeelProfile::tight());
	let style = ClothStyle::default().with_label("EXPLORE");
	let mut canvas = Canvas::new(sw as u32, sh as u32).expect("drawing surface");
	let mut tm = TimeManager::new(1. / 60., TimeModel::VideoRender);

	for frame in 0..frames {
		script(&mut world, frame);
		world.step();
		canvas.clear([10, 10, 10, 255]);
		draw_model(&mut canvas, &world.pr_model(), &style);
		let path = out.join(format!("frame_{:04}.png", frame));
		if let Err(e) = canvas.save_png(&path) {
			log::error!("{}: {}", path.display(), e);
			std::process::exit(1);
		}
		tm.wait_frame();
	}
	log::info!("wrote {} frames to {}", frames, out.display());
}

/// Sweep in, press mid-flight, release, leave.
fn script(world: &mut ClothWorld, frame: u32) {
	match frame {
		30 => world.apply_pointer(PointerEvent::Enter),
		120 => world.apply_pointer(PointerEvent::Down),
		150 => world.apply_pointer(PointerEvent::Up),
		170 => world.apply_pointer(PointerEvent::Leave),
		_ => {}
	}
	if (30..170).contains(&frame) {
		let t = (frame - 30) as f32 / 140.;
		world.apply_pointer(PointerEvent::Move(15. + t * 180., 42.));
	}
}
