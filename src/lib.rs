//! # docstruct
//!
//! Semantic structure classification and statistics for rendered document
//! layouts.
//!
//! The crate consumes page-scoped layout primitives produced by a document
//! rendering engine — text blocks with font metadata, image regions, and
//! table regions — and turns them into a normalized stream of typed
//! elements plus document-level structural statistics. Binary parsing,
//! geometry extraction, storage, and the request/response layer all live
//! with the surrounding collaborators; this crate is the pure
//! classification-and-aggregation core between them.
//!
//! ## Quick Start
//!
//! ```
//! use docstruct::{analyze_pages, FontInfo, PageContent, Rect, TextBlock, TextRun};
//!
//! fn main() -> docstruct::Result<()> {
//!     let mut page = PageContent::new(1);
//!     page.text_blocks.push(TextBlock::with_runs(
//!         Rect::new(72.0, 72.0, 540.0, 100.0),
//!         vec![TextRun::new(
//!             "Annual Report",
//!             FontInfo::new("Helvetica-Bold", 18.0, 16),
//!         )],
//!     ));
//!
//!     let analysis = analyze_pages(&[page])?;
//!     assert_eq!(analysis.statistics.title_count, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Priority-rule classification**: list markers first, then font
//!   size/boldness rules, falling back to paragraph
//! - **Content normalization**: run merging, whitespace cleanup, synthetic
//!   image identifiers, table grid flattening
//! - **Structural statistics**: type counts, per-page text density,
//!   hierarchical depth, paragraph length, section distribution
//! - **Serializable model**: every output type round-trips through JSON
//!   for the persistence boundary

pub mod classify;
pub mod error;
pub mod extract;
pub mod json;
pub mod layout;
pub mod model;
pub mod stats;

// Re-export commonly used types
pub use classify::{classify, Classifier};
pub use error::{Error, Result};
pub use extract::{analyze_pages, DocumentAnalysis, PageExtractor};
pub use json::{from_json, to_json, JsonFormat};
pub use layout::{ImageRegion, PageContent, TableRegion, TextBlock, TextRun};
pub use model::{DocumentStatistics, Element, ElementType, FontInfo, Rect};
pub use stats::aggregate;

/// Extract the classified elements of a document without aggregating
/// statistics.
///
/// # Example
///
/// ```
/// use docstruct::{extract_elements, PageContent};
///
/// let elements = extract_elements(&[PageContent::new(1)]);
/// assert!(elements.is_empty());
/// ```
pub fn extract_elements(pages: &[PageContent]) -> Vec<Element> {
    let extractor = PageExtractor::new();
    pages
        .iter()
        .flat_map(|page| extractor.extract_page(page))
        .collect()
}
