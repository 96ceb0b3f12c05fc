//! Edge processing core: the pure crack scan over an RGBA buffer.
//!
//! This module holds the one algorithmic piece of the crate:
//!
//! - A cross-shaped grayscale gradient per interior pixel (above/below and
//!   left/right central differences).
//! - Thresholding that flags strong edges inside dark regions as crack
//!   pixels, accumulating the gradient norm as a length proxy.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Stay total: any well-formed buffer produces a result, never an error.
//! - Keep outputs simple and serializable for tooling.

pub mod scan;

/// Pure crack scan returning flagged points and the accumulated magnitude.
pub use scan::scan_cracks;
