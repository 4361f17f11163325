//! Hand photos: decoding and storage.

/// Image decoding into premultiplied RGBA8.
pub mod decode;
/// Per-hand photo storage.
pub mod store;

pub use decode::{PreparedImage, decode_image};
pub use store::PhotoStore;
