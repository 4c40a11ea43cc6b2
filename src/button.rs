use crate::{
	control::{Control, ControlEvent, EventListeners, InteriorTrack, TouchPhase},
	sprite::SpriteAspect,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visual slots for a [`Button`]. Omitted slots fall back in priority
/// order: selected ← normal, disabled ← normal, highlighted ← selected
/// (← normal). Fallbacks share the reference; slots are never mutated.
pub struct ButtonVisuals<S: SpriteAspect> {
	normal: S,
	selected: Option<S>,
	highlighted: Option<S>,
	disabled: Option<S>,
}
impl<S: SpriteAspect> ButtonVisuals<S> {
	pub fn new(normal: S) -> Self {
		ButtonVisuals {
			normal,
			selected: None,
			highlighted: None,
			disabled: None,
		}
	}
	pub fn selected(mut self, sprite: S) -> Self {
		self.selected = Some(sprite);
		self
	}
	pub fn highlighted(mut self, sprite: S) -> Self {
		self.highlighted = Some(sprite);
		self
	}
	pub fn disabled(mut self, sprite: S) -> Self {
		self.disabled = Some(sprite);
		self
	}
}

/// Which visual a button is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualState {
	Normal,
	Selected,
	Highlighted,
	Disabled,
}
impl VisualState {
	/// Disabled overrides everything. The `hover` build upgrades a selected
	/// press to the highlighted visual when one was explicitly provided;
	/// touch-only builds never show it.
	pub fn derive(enabled: bool, selected: bool, highlighted_available: bool) -> Self {
		if !enabled {
			return VisualState::Disabled;
		}
		if selected {
			if cfg!(feature = "hover") && highlighted_available {
				return VisualState::Highlighted;
			}
			return VisualState::Selected;
		}
		VisualState::Normal
	}
}

/// Momentary push button. The dispatcher's touch phases drive it through
/// [`Button::select`] and [`Button::unselect`]; a release while the drag is
/// interior emits `TouchUpInside`, the activation, exactly once per
/// completed press.
pub struct Button<S: SpriteAspect> {
	normal: S,
	selected: S,
	highlighted: S,
	disabled: S,
	// only an explicitly provided highlighted visual is ever shown
	has_highlighted: bool,
	is_selected: bool,
	enabled: bool,
	interior_drag: InteriorTrack,
	listeners: EventListeners<Self>,
}

impl<S: SpriteAspect> Button<S> {
	pub fn create(visuals: ButtonVisuals<S>) -> Self {
		let ButtonVisuals {
			normal,
			selected,
			highlighted,
			disabled,
		} = visuals;
		let has_highlighted = highlighted.is_some();
		let selected = selected.unwrap_or_else(|| normal.clone());
		let disabled = disabled.unwrap_or_else(|| normal.clone());
		let highlighted = highlighted.unwrap_or_else(|| selected.clone());

		let button = Button {
			normal,
			selected,
			highlighted,
			disabled,
			has_highlighted,
			is_selected: false,
			enabled: true,
			interior_drag: InteriorTrack::default(),
			listeners: EventListeners::default(),
		};
		button.sync_visuals();
		button
	}

	/// Puts the button in the selected state. No-op while disabled.
	pub fn select(&mut self) {
		if !self.enabled || self.is_selected {
			return;
		}
		debug!("button select");
		self.is_selected = true;
		self.sync_visuals();
	}

	/// Releases the button from the selected state. No-op while disabled.
	pub fn unselect(&mut self) {
		if !self.enabled || !self.is_selected {
			return;
		}
		debug!("button unselect");
		self.is_selected = false;
		self.sync_visuals();
	}

	pub fn visual_state(&self) -> VisualState {
		VisualState::derive(self.enabled, self.is_selected, self.has_highlighted)
	}

	/// Whether the ongoing drag is currently within the hit region, i.e.
	/// whether releasing now would activate.
	pub fn interior_drag(&self) -> bool {
		self.interior_drag.interior()
	}

	/// Register a listener for one control event; the callback receives the
	/// originating button.
	pub fn on_event(&mut self, event: ControlEvent, listener: impl FnMut(&Self) + 'static) {
		self.listeners.add(event, listener);
	}

	fn emit(&mut self, event: ControlEvent) {
		let mut listeners = std::mem::take(&mut self.listeners);
		listeners.dispatch(event, self);
		self.listeners = listeners;
	}

	fn sync_visuals(&self) {
		// hide first so slots aliasing one sprite end up visible
		self.normal.set_visible(false);
		self.selected.set_visible(false);
		self.highlighted.set_visible(false);
		self.disabled.set_visible(false);
		let shown = match self.visual_state() {
			VisualState::Normal => &self.normal,
			VisualState::Selected => &self.selected,
			VisualState::Highlighted => &self.highlighted,
			VisualState::Disabled => &self.disabled,
		};
		shown.set_visible(true);
	}
}

impl<S: SpriteAspect> Control for Button<S> {
	fn enabled(&self) -> bool {
		self.enabled
	}
	fn set_enabled(&mut self, enabled: bool) {
		if self.enabled == enabled {
			return;
		}
		debug!(enabled, "button enabled change");
		self.enabled = enabled;
		if !enabled {
			// a press does not survive the disable
			self.is_selected = false;
		}
		self.sync_visuals();
	}

	fn handle_touch(&mut self, phase: TouchPhase) {
		if !self.enabled {
			return;
		}
		self.interior_drag.update(&phase);
		match phase {
			TouchPhase::Down(_) => {
				self.select();
				self.emit(ControlEvent::TouchDown);
			}
			TouchPhase::DragInside(_)
			| TouchPhase::DragOutside(_)
			| TouchPhase::DragEnter(_)
			| TouchPhase::DragExit(_) => {
				// visually still pressed even outside the hit region
				if let Some(event) = phase.drag_event() {
					self.emit(event);
				}
			}
			TouchPhase::Up(_) => {
				self.unselect();
				let event = if self.interior_drag.interior() {
					ControlEvent::TouchUpInside
				} else {
					ControlEvent::TouchUpOutside
				};
				self.emit(event);
			}
			TouchPhase::Cancel => {
				self.unselect();
				self.emit(ControlEvent::TouchCancel);
			}
		}
	}
}
