//! Crack detector orchestrating the scan and aggregation stages.
//!
//! Overview
//! - Runs the pure cross-gradient scan over the supplied RGBA buffer.
//! - Buckets the flagged pixels into a coarse crack count and derives the
//!   severity, estimated physical length and a display confidence.
//!
//! The detector never resizes or decodes: callers apply the max-width
//! downscale rule before invoking it and render the flagged points
//! afterwards.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`CrackDetector`] implementation and report types.

pub mod params;
mod pipeline;

pub use params::CrackParams;
pub use pipeline::{AnalysisReport, CrackDetector, InputDescriptor, StageTiming};
