//! Use case implementations.

mod load_gallery_use_case;

pub use load_gallery_use_case::{DEFAULT_MAX_CONCURRENT_FETCHES, LoadGalleryUseCase};
