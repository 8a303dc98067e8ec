pub mod display_object;
pub mod errors;
pub mod image;
pub mod input;
pub mod prelude;
pub mod settings;
pub mod sprite;
