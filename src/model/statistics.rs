//! Document-level statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural statistics derived from one document's element stream.
///
/// Created once per analysis run and never mutated afterwards. All averages
/// are rounded to two decimal places. Note that only four of the seven
/// element types have dedicated counts; subtitles and list items are
/// intentionally not tallied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// Number of title elements
    pub title_count: u32,

    /// Number of section elements
    pub section_count: u32,

    /// Number of table elements
    pub table_count: u32,

    /// Number of image elements
    pub image_count: u32,

    /// Mean content character count per page, over every page
    pub avg_text_density_per_page: f64,

    /// Mean count of title/subtitle/section elements per page, over pages
    /// that contain at least one such element
    pub avg_hierarchical_depth: f64,

    /// Mean word count of paragraph elements
    pub avg_paragraph_length: f64,

    /// Page number to section count; pages without sections are absent
    pub section_distribution: BTreeMap<u32, u32>,
}
