#![allow(dead_code)]

mod common;

use color_eyre::eyre::Result;
use common::sprite;
use mint::Vector2;
use sprite_controls::{
	Button, ButtonVisuals, Control, ControlEvent, Gauge, GaugeVisuals, TouchPhase,
};
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn at(x: f32) -> Vector2<f32> {
	[x, 0.0].into()
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	// 200 wide frame with 24 wide content: the content travels [-88, 88]
	let mut gauge = Gauge::create(GaugeVisuals::new(
		sprite("gauge frame", 200.0, 24.0),
		sprite("gauge content", 24.0, 24.0),
	));

	// the on/off button switches the label between live updates and
	// commit-on-release
	let update_on_touch_up = Rc::new(Cell::new(false));
	let touch_down_level = Rc::new(Cell::new(0.0f32));

	for (event, name) in [
		(ControlEvent::TouchDown, "touch down"),
		(ControlEvent::TouchDragInside, "drag inside"),
		(ControlEvent::TouchDragOutside, "drag outside"),
		(ControlEvent::TouchDragEnter, "drag enter"),
		(ControlEvent::TouchDragExit, "drag exit"),
		(ControlEvent::TouchUpInside, "touch up inside"),
		(ControlEvent::TouchUpOutside, "touch up outside"),
		(ControlEvent::TouchCancel, "touch cancel"),
	] {
		gauge.on_event(event, move |gauge| {
			info!(level = gauge.level(), "gauge {name}")
		});
	}

	let policy = update_on_touch_up.clone();
	gauge.on_event(ControlEvent::ValueChanged, move |gauge| {
		if !policy.get() {
			info!("label: {:.2}", gauge.level());
		}
	});
	let policy = update_on_touch_up.clone();
	gauge.on_event(ControlEvent::TouchUpInside, move |gauge| {
		if policy.get() {
			info!("label: {:.2}", gauge.level());
		}
	});
	let down_level = touch_down_level.clone();
	gauge.on_event(ControlEvent::TouchDown, move |gauge| {
		down_level.set(gauge.level())
	});

	let mut on_off = Button::create(
		ButtonVisuals::new(sprite("on/off normal", 48.0, 24.0))
			.selected(sprite("on/off selected", 48.0, 24.0)),
	);
	let policy = update_on_touch_up.clone();
	on_off.on_event(ControlEvent::TouchUpInside, move |_| {
		policy.set(!policy.get());
		info!(update_on_touch_up = policy.get(), "label policy toggled");
	});

	// live label updates: tap the middle, scrub to the end
	gauge.handle_touch(TouchPhase::Down(at(0.0)));
	gauge.handle_touch(TouchPhase::DragInside(at(44.0)));
	gauge.handle_touch(TouchPhase::DragInside(at(88.0)));
	gauge.handle_touch(TouchPhase::Up(at(88.0)));

	// switch to commit-on-release and scrub again
	on_off.handle_touch(TouchPhase::Down(at(0.0)));
	on_off.handle_touch(TouchPhase::Up(at(0.0)));
	gauge.handle_touch(TouchPhase::Down(at(-88.0)));
	gauge.handle_touch(TouchPhase::DragInside(at(0.0)));
	gauge.handle_touch(TouchPhase::Up(at(0.0)));

	// a cancelled touch rolls the gauge back to where it started
	gauge.handle_touch(TouchPhase::Down(at(44.0)));
	gauge.handle_touch(TouchPhase::Cancel);
	gauge.set_level(touch_down_level.get());
	info!(level = gauge.level(), "restored after cancel");

	Ok(())
}
