use macroquad::prelude::*;

use protocol::V2;
use swrender::draw::draw_model;
use swrender::Canvas;
use verlet::pointer::PointerEvent;
use viewer::instance::ClothInstance;
use viewer::scene::Scene;

fn conf() -> Conf {
	Conf {
		window_title: "cloth demo".into(),
		window_width: 800,
		window_height: 480,
		..Default::default()
	}
}

#[macroquad::main(conf)]
async fn main() {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();

	let scene = match std::env::args().nth(1) {
		Some(path) => {
			Scene::load(std::path::Path::new(&path)).expect("load scene file")
		}
		None => Scene::demo(),
	};
	let book = scene.swatch_book();

	let mut instances: Vec<ClothInstance> = Vec::new();
	let mut canvases: Vec<Option<Canvas>> = Vec::new();
	for def in &scene.cloths {
		let spec = def.grid_spec();
		let (sw, sh) = spec.surface();
		let placement = protocol::view::Placement::new(def.x, def.y, sw, sh);
		let name = def.name.clone();
		let inst = ClothInstance::spawn(
			spec,
			def.feel(),
			def.resolve_style(&book),
			placement,
		)
		.with_on_click(move || log::info!("{} clicked", name));
		// a refused surface leaves the instance static instead of failing
		// the whole page
		canvases.push(match Canvas::new(sw as u32, sh as u32) {
			Ok(c) => Some(c),
			Err(e) => {
				log::error!("{}: {}", def.name, e);
				None
			}
		});
		instances.push(inst);
	}

	let mut inside_flags = vec![false; instances.len()];
	loop {
		let (mx, my) = mouse_position();
		let mpos = V2::new(mx, my);
		let pressed = is_mouse_button_pressed(MouseButton::Left);
		let released = is_mouse_button_released(MouseButton::Left);
		for (i, inst) in instances.iter_mut().enumerate() {
			let inside = inst.placement.contains(mpos);
			if inside != inside_flags[i] {
				inside_flags[i] = inside;
				inst.pointer_event(if inside {
					PointerEvent::Enter
				} else {
					PointerEvent::Leave
				});
			}
			if inside {
				let local = inst.placement.s2w(mpos);
				inst.pointer_event(PointerEvent::Move(local[0], local[1]));
				if pressed {
					inst.pointer_event(PointerEvent::Down);
				}
				if released {
					inst.pointer_event(PointerEvent::Up);
				}
			}
		}
		for touch in touches() {
			let tpos = V2::new(touch.position.x, touch.position.y);
			for inst in instances.iter_mut() {
				if !inst.placement.contains(tpos) {
					continue;
				}
				let local = inst.placement.s2w(tpos);
				let ev = match touch.phase {
					TouchPhase::Started => {
						PointerEvent::TouchStart(local[0], local[1])
					}
					TouchPhase::Moved | TouchPhase::Stationary => {
						PointerEvent::TouchMove(local[0], local[1])
					}
					TouchPhase::Ended | TouchPhase::Cancelled => {
						PointerEvent::TouchEnd
					}
				};
				inst.pointer_event(ev);
			}
		}

		clear_background(Color::from_rgba(10, 10, 10, 255));
		for (inst, canvas) in instances.iter_mut().zip(canvases.iter_mut()) {
			inst.poll();
			let canvas = match canvas.as_mut() {
				Some(c) => c,
				None => continue,
			};
			let model = match inst.model() {
				Some(m) => m,
				None => continue,
			};
			canvas.clear([0, 0, 0, 0]);
			draw_model(canvas, model, &inst.style);
			let tex = Texture2D::from_rgba8(
				canvas.width() as u16,
				canvas.height() as u16,
				canvas.data(),
			);
			let origin = inst.placement.origin();
			draw_texture(&tex, origin[0], origin[1], WHITE);
			if let Some(label) = &inst.style.label {
				let c = model.center();
				let center = inst.placement.w2s(V2::new(c[0], c[1]));
				let dims = measure_text(label, None, 16, 1.0);
				draw_text(
					label,
					center[0] - dims.width / 2.,
					center[1] + dims.height / 2.,
					16.,
					WHITE,
				);
			}
		}
		next_frame().await
	}
}
