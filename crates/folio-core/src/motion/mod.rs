pub mod button;
pub mod intent;
pub mod magnetic;
pub mod reveal;
pub mod spring;
pub mod stagger;
pub mod text;
pub mod tilt;
pub mod trigger;
pub mod tween;

pub use button::*;
pub use intent::*;
pub use magnetic::*;
pub use reveal::*;
pub use spring::*;
pub use stagger::*;
pub use text::*;
pub use tilt::*;
pub use trigger::*;
pub use tween::*;
