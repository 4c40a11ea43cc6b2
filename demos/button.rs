#![allow(dead_code)]

mod common;

use common::sprite;
use mint::Vector2;
use sprite_controls::{Button, ButtonVisuals, Control, ControlEvent, TouchPhase};
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn at(x: f32) -> Vector2<f32> {
	[x, 0.0].into()
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let mut button = Button::create(
		ButtonVisuals::new(sprite("button normal", 64.0, 32.0))
			.selected(sprite("button selected", 64.0, 32.0))
			.disabled(sprite("button disabled", 64.0, 32.0)),
	);

	let activations = Rc::new(Cell::new(0u32));
	button.on_event(ControlEvent::TouchDown, |_| info!("button pressed"));
	let listener_activations = activations.clone();
	button.on_event(ControlEvent::TouchUpInside, move |_| {
		listener_activations.set(listener_activations.get() + 1);
		info!("button activated");
	});
	button.on_event(ControlEvent::TouchUpOutside, |_| {
		info!("button released outside")
	});

	// a clean tap, a drag that wanders off and back, an abandoned press
	let script = [
		TouchPhase::Down(at(0.0)),
		TouchPhase::Up(at(0.0)),
		TouchPhase::Down(at(0.0)),
		TouchPhase::DragExit(at(200.0)),
		TouchPhase::DragEnter(at(10.0)),
		TouchPhase::Up(at(10.0)),
		TouchPhase::Down(at(0.0)),
		TouchPhase::DragExit(at(200.0)),
		TouchPhase::Up(at(200.0)),
	];
	for phase in script {
		button.handle_touch(phase);
	}

	info!(activations = activations.get(), "script finished");
}
