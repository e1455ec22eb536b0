// Library exports for testing
pub mod constants;
pub mod font;
pub mod render;
