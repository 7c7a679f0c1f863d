#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, decoding failures,
/// and format-specific errors.
pub mod error;

/// High-level image reading functions.
///
/// Provides automatic format detection and decoding into the supported
/// pixel layouts. See [`functional::read_image_any`].
pub mod functional;

/// PNG image encoding.
///
/// Write 8-bit PNG images in the supported color types.
pub mod png;
