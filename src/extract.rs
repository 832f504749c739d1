//! Extraction pipeline: layout primitives to classified elements.
//!
//! Converts the renderer's per-page output into the element stream and, at
//! the document level, bundles it with aggregated statistics. Element order
//! within a page is the renderer's emission order — text blocks, then
//! images, then tables — and is never re-sorted.

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::layout::{PageContent, TableRegion, TextBlock};
use crate::model::{DocumentStatistics, Element, ElementType};
use crate::stats;

/// Converts renderer page output into classified elements.
pub struct PageExtractor {
    classifier: Classifier,
}

impl PageExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }

    /// Extract the classified elements of one page, in emission order.
    pub fn extract_page(&self, page: &PageContent) -> Vec<Element> {
        let mut elements = Vec::new();

        for block in &page.text_blocks {
            if let Some(element) = self.extract_text_block(block, page.number) {
                elements.push(element);
            }
        }

        for (index, image) in page.images.iter().enumerate() {
            elements.push(Element::image(
                format!("Image_{}_{}", page.number, index),
                page.number,
                image.bounds,
            ));
        }

        for table in &page.tables {
            elements.push(Element::table(
                flatten_table(table),
                page.number,
                table.bounds,
            ));
        }

        log::debug!("page {}: {} elements", page.number, elements.len());
        elements
    }

    /// Classify and normalize one text block. Blocks whose trimmed text is
    /// empty produce nothing.
    fn extract_text_block(&self, block: &TextBlock, page_number: u32) -> Option<Element> {
        let raw = block.text();
        if raw.trim().is_empty() {
            return None;
        }

        // The first run's font attributes stand in for the whole block.
        let font = block.font()?.clone();
        let element_type = self.classifier.classify(&raw, &font);

        Some(Element::text(
            element_type,
            normalize_content(&raw),
            page_number,
            block.bounds,
            font,
        ))
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip outer whitespace and replace each newline, carriage return, and
/// tab with a single space.
fn normalize_content(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect()
}

/// Flatten a table's cell grid into text: cells tab-joined within a row,
/// rows newline-joined. Absent cells become empty strings.
fn flatten_table(table: &TableRegion) -> String {
    table
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The complete output of one analysis run: the ordered element stream and
/// the statistics derived from it.
///
/// Each run produces a fresh, independent analysis; re-processing the same
/// source never merges with prior results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// All elements, in page order then emission order
    pub elements: Vec<Element>,

    /// Document-level structural statistics
    pub statistics: DocumentStatistics,
}

impl DocumentAnalysis {
    /// Get the total number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over elements with the given type tag, in stream order.
    pub fn elements_of_type(
        &self,
        element_type: ElementType,
    ) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |e| e.element_type == element_type)
    }

    /// Iterate over elements on the given page, in stream order.
    pub fn elements_on_page(&self, page_number: u32) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |e| e.page_number == page_number)
    }
}

/// Analyze a whole document from its per-page layout primitives.
///
/// Pages must be supplied in order; the page count used for aggregation is
/// the slice length. An empty slice is rejected with
/// [`Error::InvalidInput`] since no density average is defined for zero
/// pages.
pub fn analyze_pages(pages: &[PageContent]) -> Result<DocumentAnalysis> {
    if pages.is_empty() {
        return Err(Error::InvalidInput("document has no pages".to_string()));
    }

    let extractor = PageExtractor::new();
    let mut elements = Vec::new();
    for page in pages {
        elements.extend(extractor.extract_page(page));
    }

    let statistics = stats::aggregate(pages.len() as u32, &elements)?;

    log::info!(
        "analysis complete: {} elements across {} pages",
        elements.len(),
        pages.len()
    );

    Ok(DocumentAnalysis {
        elements,
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ImageRegion, TextRun};
    use crate::model::{FontInfo, Rect};

    fn rect() -> Rect {
        Rect::new(72.0, 72.0, 540.0, 96.0)
    }

    fn block(text: &str, size: f32, flags: u32) -> TextBlock {
        TextBlock::with_runs(
            rect(),
            vec![TextRun::new(text, FontInfo::new("Helvetica", size, flags))],
        )
    }

    #[test]
    fn test_normalize_content() {
        assert_eq!(normalize_content("  Hello\n\tworld  "), "Hello  world");
        assert_eq!(normalize_content("line one\r\nline two"), "line one  line two");
        assert_eq!(normalize_content("plain"), "plain");
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let mut page = PageContent::new(1);
        page.text_blocks.push(block("   \n\t ", 12.0, 0));
        page.text_blocks.push(block("kept", 12.0, 0));

        let elements = PageExtractor::new().extract_page(&page);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].content, "kept");
    }

    #[test]
    fn test_block_classified_on_raw_text_stored_normalized() {
        // Leading whitespace before the bullet must not defeat list
        // detection, and the stored content must still be trimmed.
        let mut page = PageContent::new(1);
        page.text_blocks.push(block("  \n• bullet point", 18.0, 16));

        let elements = PageExtractor::new().extract_page(&page);
        assert_eq!(elements[0].element_type, ElementType::ListItem);
        assert_eq!(elements[0].content, "• bullet point");
    }

    #[test]
    fn test_multi_run_block_uses_first_font() {
        let mut page = PageContent::new(1);
        page.text_blocks.push(TextBlock::with_runs(
            rect(),
            vec![
                TextRun::new("Big ", FontInfo::new("Helvetica-Bold", 18.0, 16)),
                TextRun::new("headline", FontInfo::new("Helvetica", 9.0, 0)),
            ],
        ));

        let elements = PageExtractor::new().extract_page(&page);
        assert_eq!(elements[0].element_type, ElementType::Title);
        assert_eq!(elements[0].content, "Big headline");
        assert_eq!(elements[0].font_info.as_ref().unwrap().size, 18.0);
    }

    #[test]
    fn test_image_synthetic_identifiers() {
        let mut page = PageContent::new(3);
        page.images.push(ImageRegion::new(rect()));
        page.images.push(ImageRegion::new(rect()));

        let elements = PageExtractor::new().extract_page(&page);
        assert_eq!(elements[0].content, "Image_3_0");
        assert_eq!(elements[1].content, "Image_3_1");
        assert!(elements[0].font_info.is_none());
    }

    #[test]
    fn test_table_flattening() {
        let mut page = PageContent::new(1);
        page.tables.push(TableRegion::new(
            rect(),
            vec![
                vec![Some("Name".to_string()), Some("Age".to_string())],
                vec![Some("Alice".to_string()), None],
            ],
        ));

        let elements = PageExtractor::new().extract_page(&page);
        assert_eq!(elements[0].element_type, ElementType::Table);
        assert_eq!(elements[0].content, "Name\tAge\nAlice\t");
    }

    #[test]
    fn test_emission_order_preserved() {
        let mut page = PageContent::new(1);
        page.text_blocks.push(block("first block", 11.0, 0));
        page.text_blocks.push(block("second block", 11.0, 0));
        page.images.push(ImageRegion::new(rect()));
        page.tables
            .push(TableRegion::new(rect(), vec![vec![Some("x".to_string())]]));

        let elements = PageExtractor::new().extract_page(&page);
        let types: Vec<_> = elements.iter().map(|e| e.element_type).collect();
        assert_eq!(
            types,
            vec![
                ElementType::Section,
                ElementType::Section,
                ElementType::Image,
                ElementType::Table,
            ]
        );
        assert_eq!(elements[0].content, "first block");
        assert_eq!(elements[1].content, "second block");
    }

    #[test]
    fn test_analyze_pages_rejects_empty_document() {
        let result = analyze_pages(&[]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_analysis_query_helpers() {
        let mut page = PageContent::new(1);
        page.text_blocks.push(block("Heading", 16.0, 16));
        page.text_blocks.push(block(&vec!["word"; 25].join(" "), 11.0, 0));
        let mut page2 = PageContent::new(2);
        page2.images.push(ImageRegion::new(rect()));

        let analysis = analyze_pages(&[page, page2]).unwrap();
        assert_eq!(analysis.element_count(), 3);
        assert_eq!(analysis.elements_of_type(ElementType::Title).count(), 1);
        assert_eq!(analysis.elements_on_page(2).count(), 1);
        assert_eq!(analysis.elements_on_page(3).count(), 0);
    }
}
