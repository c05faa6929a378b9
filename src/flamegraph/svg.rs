//! SVG flamegraph rendering using the inferno library.
//!
//! The folded lines produced by [`to_flamegraph_lines`] are already in
//! the format inferno consumes, so rendering is a straight hand-off.

use crate::counter::ByteCountMap;
use crate::utils::error::FlamegraphError;
use log::info;

use super::folded::to_flamegraph_lines;

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,
    pub width: usize,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: "Avro Payload Byte Profile".to_string(),
            width: 1200,
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Renders `counts` as an interactive SVG flamegraph.
///
/// # Errors
/// * `FlamegraphError::EmptyProfile` - the map has no entries
/// * `FlamegraphError::RenderFailed` - inferno rejected the input
pub fn render_svg(
    counts: &ByteCountMap,
    config: &FlamegraphConfig,
) -> Result<String, FlamegraphError> {
    if counts.is_empty() {
        return Err(FlamegraphError::EmptyProfile);
    }

    info!("rendering flamegraph for {} paths", counts.len());

    let lines: Vec<String> = to_flamegraph_lines(counts).collect();

    let mut options = inferno::flamegraph::Options::default();
    options.title = config.title.clone();
    options.count_name = "bytes".to_string();
    options.image_width = Some(config.width);

    let mut svg = Vec::new();
    inferno::flamegraph::from_lines(&mut options, lines.iter().map(String::as_str), &mut svg)
        .map_err(|e| FlamegraphError::RenderFailed(e.to_string()))?;

    let svg = String::from_utf8(svg).map_err(|e| FlamegraphError::RenderFailed(e.to_string()))?;

    info!("flamegraph rendered ({} bytes of SVG)", svg.len());
    Ok(svg)
}
