use mint::Vector2;
use sprite_controls::SpriteAspect;
use std::cell::Cell;
use std::rc::Rc;
use tracing::trace;

/// Stand-in for a scene-graph sprite: an Rc-shared cell the demo reads back.
pub struct DemoSprite {
	pub name: &'static str,
	size: Vector2<f32>,
	pub position: Cell<Vector2<f32>>,
	pub visible: Cell<bool>,
}

/// Clone-able handle over an [`Rc<DemoSprite>`]. A local newtype is required so
/// the demo crate can implement the foreign [`SpriteAspect`] trait (the orphan
/// rule forbids `impl SpriteAspect for Rc<DemoSprite>` from outside the crate
/// that defines the trait).
#[derive(Clone)]
pub struct Sprite(pub Rc<DemoSprite>);

pub fn sprite(name: &'static str, width: f32, height: f32) -> Sprite {
	Sprite(Rc::new(DemoSprite {
		name,
		size: [width, height].into(),
		position: Cell::new([0.0, 0.0].into()),
		visible: Cell::new(true),
	}))
}

impl SpriteAspect for Sprite {
	fn size(&self) -> Vector2<f32> {
		self.0.size
	}
	fn set_position(&self, position: Vector2<f32>) {
		trace!(name = self.0.name, x = position.x, "sprite moved");
		self.0.position.set(position);
	}
	fn set_visible(&self, visible: bool) {
		trace!(name = self.0.name, visible, "sprite visibility");
		self.0.visible.set(visible);
	}
}
