//! Layout primitives supplied by the document renderer.
//!
//! The rendering engine hands the pipeline one [`PageContent`] per page:
//! text blocks composed of styled runs, image regions, and table regions,
//! each with a bounding rectangle. The order of the vectors is the
//! renderer's emission order and is preserved all the way through
//! extraction — it is not guaranteed to match vertical position.

use serde::{Deserialize, Serialize};

use crate::model::{FontInfo, Rect};

/// A run of text with uniform font attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Font attributes of the run
    pub font: FontInfo,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, font: FontInfo) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// A text block: ordered runs sharing one bounding rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Bounding rectangle of the block
    pub bounds: Rect,

    /// Runs in emission order
    pub runs: Vec<TextRun>,
}

impl TextBlock {
    /// Create an empty block.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            runs: Vec::new(),
        }
    }

    /// Create a block from its runs.
    pub fn with_runs(bounds: Rect, runs: Vec<TextRun>) -> Self {
        Self { bounds, runs }
    }

    /// Append a run to the block.
    pub fn push_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get the concatenated text of all runs, in emission order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Get the font attributes of the first run, which stand in for the
    /// whole block.
    pub fn font(&self) -> Option<&FontInfo> {
        self.runs.first().map(|r| &r.font)
    }

    /// Check if the block has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.text().trim().is_empty()
    }
}

/// An image region with its bounding rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRegion {
    /// Bounding rectangle of the image
    pub bounds: Rect,
}

impl ImageRegion {
    /// Create a new image region.
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

/// A table region: a bounding rectangle plus a 2D grid of cell strings.
///
/// Absent cells are `None` and normalize to the empty string during
/// extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRegion {
    /// Bounding rectangle of the table
    pub bounds: Rect,

    /// Row-major cell grid
    pub cells: Vec<Vec<Option<String>>>,
}

impl TableRegion {
    /// Create a new table region from its cell grid.
    pub fn new(bounds: Rect, cells: Vec<Vec<Option<String>>>) -> Self {
        Self { bounds, cells }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.cells.first().map(|r| r.len()).unwrap_or(0)
    }
}

/// Everything the renderer emitted for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text blocks in emission order
    pub text_blocks: Vec<TextBlock>,

    /// Images in emission order
    pub images: Vec<ImageRegion>,

    /// Tables in emission order
    pub tables: Vec<TableRegion>,
}

impl PageContent {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            text_blocks: Vec::new(),
            images: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Check if the page carries no primitives at all.
    pub fn is_empty(&self) -> bool {
        self.text_blocks.is_empty() && self.images.is_empty() && self.tables.is_empty()
    }
}
