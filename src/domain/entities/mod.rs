//! Domain entity definitions.

mod image;

pub use self::image::{FileId, Image, ImageSource, LoadedImage};
