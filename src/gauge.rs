use crate::{
	control::{Control, ControlEvent, EventListeners, InteriorTrack, TouchPhase},
	sprite::SpriteAspect,
};
use glam::vec2;
use lerp::Lerp;
use map_range::MapRange;
use mint::Vector2;
use tracing::{debug, trace};

/// Visual slots for a [`Gauge`]. An omitted disabled visual falls back to
/// the corresponding normal reference; slots are only swapped for display,
/// never mutated, so sharing one image between them is fine.
pub struct GaugeVisuals<S: SpriteAspect> {
	frame_normal: S,
	content_normal: S,
	frame_disabled: Option<S>,
	content_disabled: Option<S>,
}
impl<S: SpriteAspect> GaugeVisuals<S> {
	pub fn new(frame_normal: S, content_normal: S) -> Self {
		GaugeVisuals {
			frame_normal,
			content_normal,
			frame_disabled: None,
			content_disabled: None,
		}
	}
	pub fn frame_disabled(mut self, sprite: S) -> Self {
		self.frame_disabled = Some(sprite);
		self
	}
	pub fn content_disabled(mut self, sprite: S) -> Self {
		self.content_disabled = Some(sprite);
		self
	}
}

/// Horizontal gauge control. Tapping or dragging across it sets a level in
/// [0, 1]; the content visual travels between `min_x` and `max_x` in the
/// control's center-origin local space.
pub struct Gauge<S: SpriteAspect> {
	frame_normal: S,
	frame_disabled: S,
	content_normal: S,
	content_disabled: S,
	level: f32,
	// horizontal travel extent of the content visual, fixed at construction
	min_x: f32,
	max_x: f32,
	enabled: bool,
	interior: InteriorTrack,
	listeners: EventListeners<Self>,
}

impl<S: SpriteAspect> Gauge<S> {
	pub fn create(visuals: GaugeVisuals<S>) -> Self {
		let GaugeVisuals {
			frame_normal,
			content_normal,
			frame_disabled,
			content_disabled,
		} = visuals;
		let frame_disabled = frame_disabled.unwrap_or_else(|| frame_normal.clone());
		let content_disabled = content_disabled.unwrap_or_else(|| content_normal.clone());

		// The content's center travels across the slack between frame and
		// content width, centered on the control's origin.
		let travel = ((frame_normal.size().x - content_normal.size().x) * 0.5).max(0.0);
		let mut gauge = Gauge {
			frame_normal,
			frame_disabled,
			content_normal,
			content_disabled,
			level: 0.0,
			min_x: -travel,
			max_x: travel,
			enabled: true,
			interior: InteriorTrack::default(),
			listeners: EventListeners::default(),
		};
		gauge.sync_visuals();
		gauge.set_level(0.0);
		gauge
	}

	pub fn level(&self) -> f32 {
		self.level
	}

	/// Clamps to [0, 1] and repositions the content visual. Emits nothing;
	/// change notification belongs to the touch path.
	pub fn set_level(&mut self, level: f32) {
		self.level = level.clamp(0.0, 1.0);
		let x = self.min_x.lerp(self.max_x, self.level);
		self.content_normal.set_position(vec2(x, 0.0).into());
		self.content_disabled.set_position(vec2(x, 0.0).into());
	}

	/// Saturated [0, 1] level for a local-space touch position. Pure: the
	/// caller decides whether and when to apply the result. Degenerate
	/// geometry with no travel always maps to 0.
	pub fn level_for_touch(&self, position: impl Into<Vector2<f32>>) -> f32 {
		let position = position.into();
		if self.max_x <= self.min_x {
			return 0.0;
		}
		position
			.x
			.clamp(self.min_x, self.max_x)
			.map_range(self.min_x..self.max_x, 0.0..1.0)
	}

	/// Register a listener for one control event; the callback receives the
	/// originating gauge.
	pub fn on_event(&mut self, event: ControlEvent, listener: impl FnMut(&Self) + 'static) {
		self.listeners.add(event, listener);
	}

	fn apply_touch(&mut self, position: Vector2<f32>) {
		let level = self.level_for_touch(position);
		if level == self.level {
			return;
		}
		trace!(level, "gauge level from touch");
		self.set_level(level);
		self.emit(ControlEvent::ValueChanged);
	}

	fn emit(&mut self, event: ControlEvent) {
		let mut listeners = std::mem::take(&mut self.listeners);
		listeners.dispatch(event, self);
		self.listeners = listeners;
	}

	fn sync_visuals(&self) {
		// hide first so slots aliasing one sprite end up visible
		if self.enabled {
			self.frame_disabled.set_visible(false);
			self.content_disabled.set_visible(false);
			self.frame_normal.set_visible(true);
			self.content_normal.set_visible(true);
		} else {
			self.frame_normal.set_visible(false);
			self.content_normal.set_visible(false);
			self.frame_disabled.set_visible(true);
			self.content_disabled.set_visible(true);
		}
	}
}

impl<S: SpriteAspect> Control for Gauge<S> {
	fn enabled(&self) -> bool {
		self.enabled
	}
	fn set_enabled(&mut self, enabled: bool) {
		if self.enabled == enabled {
			return;
		}
		debug!(enabled, "gauge enabled change");
		self.enabled = enabled;
		self.sync_visuals();
	}

	fn handle_touch(&mut self, phase: TouchPhase) {
		if !self.enabled {
			return;
		}
		self.interior.update(&phase);
		match phase {
			TouchPhase::Down(position) => {
				self.apply_touch(position);
				self.emit(ControlEvent::TouchDown);
			}
			TouchPhase::DragInside(position)
			| TouchPhase::DragOutside(position)
			| TouchPhase::DragEnter(position)
			| TouchPhase::DragExit(position) => {
				self.apply_touch(position);
				if let Some(event) = phase.drag_event() {
					self.emit(event);
				}
			}
			TouchPhase::Up(_) => {
				let event = if self.interior.interior() {
					ControlEvent::TouchUpInside
				} else {
					ControlEvent::TouchUpOutside
				};
				self.emit(event);
			}
			TouchPhase::Cancel => self.emit(ControlEvent::TouchCancel),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sprite::test_sprite::{sprite, TestSprite};
	use std::cell::Cell;
	use std::rc::Rc;

	fn at(x: f32) -> Vector2<f32> {
		[x, 0.0].into()
	}

	// 200 wide frame, 40 wide content: travel is [-80, 80]
	fn test_gauge() -> Gauge<Rc<TestSprite>> {
		Gauge::create(GaugeVisuals::new(sprite(200.0, 20.0), sprite(40.0, 20.0)))
	}

	#[test]
	fn level_roundtrips_in_range() {
		let mut gauge = test_gauge();
		for level in [0.0, 0.25, 0.5, 0.75, 1.0] {
			gauge.set_level(level);
			assert_eq!(gauge.level(), level);
		}
	}

	#[test]
	fn level_clamps_out_of_range() {
		let mut gauge = test_gauge();
		gauge.set_level(-0.5);
		assert_eq!(gauge.level(), 0.0);
		gauge.set_level(1.5);
		assert_eq!(gauge.level(), 1.0);
	}

	#[test]
	fn level_positions_content() {
		let content = sprite(40.0, 20.0);
		let mut gauge = Gauge::create(GaugeVisuals::new(sprite(200.0, 20.0), content.clone()));
		assert_eq!(content.position.get().x, -80.0);
		gauge.set_level(0.5);
		assert_eq!(content.position.get().x, 0.0);
		gauge.set_level(1.0);
		assert_eq!(content.position.get().x, 80.0);
	}

	#[test]
	fn touch_level_is_monotonic_and_saturates() {
		let gauge = test_gauge();
		assert_eq!(gauge.level_for_touch(at(-200.0)), 0.0);
		assert_eq!(gauge.level_for_touch(at(-80.0)), 0.0);
		let mut previous = 0.0;
		for x in -100..=100 {
			let level = gauge.level_for_touch(at(x as f32));
			assert!(level >= previous);
			assert!((0.0..=1.0).contains(&level));
			previous = level;
		}
		assert_eq!(gauge.level_for_touch(at(80.0)), 1.0);
		assert_eq!(gauge.level_for_touch(at(200.0)), 1.0);
	}

	#[test]
	fn degenerate_travel_maps_to_zero() {
		// content as wide as the frame, nowhere to go
		let gauge = Gauge::create(GaugeVisuals::new(sprite(40.0, 20.0), sprite(40.0, 20.0)));
		for x in [-10.0, 0.0, 10.0, f32::MAX] {
			assert_eq!(gauge.level_for_touch(at(x)), 0.0);
		}
	}

	#[test]
	fn touch_path_applies_level_and_notifies_once_per_change() {
		let mut gauge = test_gauge();
		let changes = Rc::new(Cell::new(0u32));
		let listener_changes = changes.clone();
		gauge.on_event(ControlEvent::ValueChanged, move |_| {
			listener_changes.set(listener_changes.get() + 1)
		});

		gauge.handle_touch(TouchPhase::Down(at(0.0)));
		assert_eq!(gauge.level(), 0.5);
		assert_eq!(changes.get(), 1);

		// same position again, no new change
		gauge.handle_touch(TouchPhase::DragInside(at(0.0)));
		assert_eq!(changes.get(), 1);

		gauge.handle_touch(TouchPhase::DragInside(at(80.0)));
		assert_eq!(gauge.level(), 1.0);
		assert_eq!(changes.get(), 2);

		gauge.handle_touch(TouchPhase::Up(at(80.0)));
		assert_eq!(changes.get(), 2);
	}

	#[test]
	fn release_classified_by_interiority() {
		let mut gauge = test_gauge();
		let inside = Rc::new(Cell::new(0u32));
		let outside = Rc::new(Cell::new(0u32));
		let listener_inside = inside.clone();
		gauge.on_event(ControlEvent::TouchUpInside, move |_| {
			listener_inside.set(listener_inside.get() + 1)
		});
		let listener_outside = outside.clone();
		gauge.on_event(ControlEvent::TouchUpOutside, move |_| {
			listener_outside.set(listener_outside.get() + 1)
		});

		gauge.handle_touch(TouchPhase::Down(at(0.0)));
		gauge.handle_touch(TouchPhase::DragExit(at(300.0)));
		gauge.handle_touch(TouchPhase::Up(at(300.0)));
		assert_eq!((inside.get(), outside.get()), (0, 1));

		gauge.handle_touch(TouchPhase::Down(at(0.0)));
		gauge.handle_touch(TouchPhase::Up(at(0.0)));
		assert_eq!((inside.get(), outside.get()), (1, 1));
	}

	#[test]
	fn disabled_swaps_visuals_and_ignores_touches() {
		let frame_normal = sprite(200.0, 20.0);
		let content_normal = sprite(40.0, 20.0);
		let frame_disabled = sprite(200.0, 20.0);
		let content_disabled = sprite(40.0, 20.0);
		let mut gauge = Gauge::create(
			GaugeVisuals::new(frame_normal.clone(), content_normal.clone())
				.frame_disabled(frame_disabled.clone())
				.content_disabled(content_disabled.clone()),
		);
		assert!(frame_normal.visible.get());
		assert!(!frame_disabled.visible.get());

		gauge.set_enabled(false);
		assert!(!frame_normal.visible.get());
		assert!(!content_normal.visible.get());
		assert!(frame_disabled.visible.get());
		assert!(content_disabled.visible.get());

		gauge.handle_touch(TouchPhase::Down(at(80.0)));
		assert_eq!(gauge.level(), 0.0);

		gauge.set_enabled(true);
		assert!(frame_normal.visible.get());
		assert!(!frame_disabled.visible.get());
	}

	#[test]
	fn defaulted_disabled_visuals_stay_visible_when_disabled() {
		let frame = sprite(200.0, 20.0);
		let content = sprite(40.0, 20.0);
		let mut gauge = Gauge::create(GaugeVisuals::new(frame.clone(), content.clone()));
		gauge.set_enabled(false);
		// disabled slots alias the normal sprites, so they stay shown
		assert!(frame.visible.get());
		assert!(content.visible.get());
	}

	#[test]
	fn disabled_content_tracks_level() {
		let content_disabled = sprite(40.0, 20.0);
		let mut gauge = Gauge::create(
			GaugeVisuals::new(sprite(200.0, 20.0), sprite(40.0, 20.0))
				.content_disabled(content_disabled.clone()),
		);
		gauge.set_level(1.0);
		assert_eq!(content_disabled.position.get().x, 80.0);
	}
}
