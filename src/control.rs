use mint::Vector2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A touch-phase event delivered by the outer dispatcher.
///
/// Positions are already in the control's local coordinate space and the
/// drag variants arrive pre-classified against the hit region; hit testing
/// and coordinate transforms are the dispatcher's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchPhase {
	Down(Vector2<f32>),
	DragInside(Vector2<f32>),
	DragOutside(Vector2<f32>),
	DragEnter(Vector2<f32>),
	DragExit(Vector2<f32>),
	Up(Vector2<f32>),
	Cancel,
}
impl TouchPhase {
	pub fn position(&self) -> Option<Vector2<f32>> {
		match self {
			TouchPhase::Down(p)
			| TouchPhase::DragInside(p)
			| TouchPhase::DragOutside(p)
			| TouchPhase::DragEnter(p)
			| TouchPhase::DragExit(p)
			| TouchPhase::Up(p) => Some(*p),
			TouchPhase::Cancel => None,
		}
	}

	/// The notification a drag phase maps straight to. Down, up, and cancel
	/// need control-specific classification and are not mapped here.
	pub(crate) fn drag_event(&self) -> Option<ControlEvent> {
		match self {
			TouchPhase::DragInside(_) => Some(ControlEvent::TouchDragInside),
			TouchPhase::DragOutside(_) => Some(ControlEvent::TouchDragOutside),
			TouchPhase::DragEnter(_) => Some(ControlEvent::TouchDragEnter),
			TouchPhase::DragExit(_) => Some(ControlEvent::TouchDragExit),
			_ => None,
		}
	}
}

/// Outgoing notification from a control to its listeners. `TouchUpInside`
/// is the button's activation; `ValueChanged` fires once per applied gauge
/// level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlEvent {
	TouchDown,
	TouchDragInside,
	TouchDragOutside,
	TouchDragEnter,
	TouchDragExit,
	TouchUpInside,
	TouchUpOutside,
	TouchCancel,
	ValueChanged,
}

/// Target/selector style callback registry. Each callback takes the
/// originating control so one scene layer handler can serve several
/// controls. Everything runs synchronously on the dispatching thread.
pub struct EventListeners<C> {
	listeners: FxHashMap<ControlEvent, Vec<Box<dyn FnMut(&C)>>>,
}
impl<C> Default for EventListeners<C> {
	fn default() -> Self {
		EventListeners {
			listeners: FxHashMap::default(),
		}
	}
}
impl<C> EventListeners<C> {
	pub fn add(&mut self, event: ControlEvent, listener: impl FnMut(&C) + 'static) {
		self.listeners
			.entry(event)
			.or_default()
			.push(Box::new(listener));
	}
	pub fn dispatch(&mut self, event: ControlEvent, control: &C) {
		let Some(listeners) = self.listeners.get_mut(&event) else {
			return;
		};
		for listener in listeners {
			(listener)(control);
		}
	}
}

/// Whether an ongoing drag is currently within the control's hit region.
///
/// Kept separate from the visual press state on purpose: a drag that leaves
/// the region keeps a button visually pressed, but only an interior release
/// activates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteriorTrack(bool);
impl InteriorTrack {
	pub fn interior(&self) -> bool {
		self.0
	}

	/// Feed one touch phase through. Up and cancel are terminal and leave
	/// the flag wherever the last drag classified it.
	pub fn update(&mut self, phase: &TouchPhase) {
		match phase {
			TouchPhase::Down(_) | TouchPhase::DragInside(_) | TouchPhase::DragEnter(_) => {
				self.0 = true
			}
			TouchPhase::DragOutside(_) | TouchPhase::DragExit(_) => self.0 = false,
			TouchPhase::Up(_) | TouchPhase::Cancel => (),
		}
	}
}

/// Capability surface shared by every control, letting one dispatcher drive
/// any of them: the enabled flag plus the touch-phase entry point.
pub trait Control {
	fn enabled(&self) -> bool;
	fn set_enabled(&mut self, enabled: bool);
	fn handle_touch(&mut self, phase: TouchPhase);
}
