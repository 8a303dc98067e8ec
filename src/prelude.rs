pub use crate::display_object::{DisplayObject, DisplayObjectType};
pub use crate::errors::{Error, Result};
pub use crate::image::Image;
pub use crate::input::{KeyCode, PressedKeys};
pub use crate::settings::SpriteSettings;
pub use crate::sprite::Sprite;
pub use glam;
