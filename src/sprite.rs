use mint::Vector2;

/// One displayable child of a control's scene-graph node.
///
/// The scene graph keeps rendering ownership and does all coordinate
/// transforms; a control only reads the bounding size once at construction
/// and swaps position/visibility afterward. Implementations are
/// shared-by-reference handles, so every method takes `&self` and the handle
/// is `Clone`; one image may back several visual slots.
pub trait SpriteAspect: Clone {
	/// Bounding size in the control's local coordinate space.
	fn size(&self) -> Vector2<f32>;
	/// Move the sprite within the control.
	fn set_position(&self, position: Vector2<f32>);
	/// Show or hide the sprite.
	fn set_visible(&self, visible: bool);
}
