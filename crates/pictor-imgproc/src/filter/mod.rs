//! Filter operations
//!
//! This module provides parallel 3x3 convolution filters for raster images.

/// Filter kernels
pub mod kernels;

/// Convolution operations
mod convolution;
pub use convolution::*;
