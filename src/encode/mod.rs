//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are used by
//! [`crate::Session::render_timeline`].

/// Numbered PNG files on disk.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
