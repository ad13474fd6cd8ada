/// Straight-alpha RGBA8 images.
pub mod image;
