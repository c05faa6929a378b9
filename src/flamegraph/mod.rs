//! Flamegraph output for byte count maps.
//!
//! This module converts counting results into:
//! - Folded-stack lines ("a;b;c count") for third-party renderers
//! - Interactive SVG flamegraphs through inferno

pub mod folded;
pub mod svg;

// Re-export main types
pub use folded::to_flamegraph_lines;
pub use svg::{render_svg, FlamegraphConfig};
