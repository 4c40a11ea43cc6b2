pub mod button;
pub mod control;
pub mod gauge;
pub mod sprite;

pub use button::*;
pub use control::*;
pub use gauge::*;
pub use sprite::*;
