//! Document-level statistics aggregation.
//!
//! A single pass over the element stream, grouping by page number and by
//! type. Pure and deterministic: the same inputs always produce the same
//! `DocumentStatistics`.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{DocumentStatistics, Element, ElementType};

/// Aggregate structural statistics over a document's element stream.
///
/// `page_count` must be at least 1. The element list may be empty, in which
/// case every count and average degrades to zero.
///
/// The two per-page averages use different denominators on purpose: text
/// density averages over every page (pages without elements contribute
/// zero), while hierarchical depth averages only over pages that carry at
/// least one title, subtitle, or section.
pub fn aggregate(page_count: u32, elements: &[Element]) -> Result<DocumentStatistics> {
    if page_count < 1 {
        return Err(Error::InvalidInput(
            "page count must be at least 1".to_string(),
        ));
    }

    let mut title_count = 0u32;
    let mut section_count = 0u32;
    let mut table_count = 0u32;
    let mut image_count = 0u32;

    let mut text_len_per_page: BTreeMap<u32, usize> = BTreeMap::new();
    let mut hierarchical_per_page: BTreeMap<u32, u32> = BTreeMap::new();
    let mut section_distribution: BTreeMap<u32, u32> = BTreeMap::new();
    let mut paragraph_words = 0usize;
    let mut paragraph_count = 0usize;

    for element in elements {
        match element.element_type {
            ElementType::Title => title_count += 1,
            ElementType::Section => section_count += 1,
            ElementType::Table => table_count += 1,
            ElementType::Image => image_count += 1,
            _ => {}
        }

        *text_len_per_page.entry(element.page_number).or_insert(0) += element.char_count();

        if element.element_type.is_hierarchical() {
            *hierarchical_per_page.entry(element.page_number).or_insert(0) += 1;
        }

        if element.element_type == ElementType::Section {
            *section_distribution.entry(element.page_number).or_insert(0) += 1;
        }

        if element.element_type == ElementType::Paragraph {
            paragraph_words += element.word_count();
            paragraph_count += 1;
        }
    }

    // Every page 1..=page_count participates in the density average.
    let total_text: usize = text_len_per_page
        .iter()
        .filter(|(page, _)| **page >= 1 && **page <= page_count)
        .map(|(_, len)| len)
        .sum();
    let avg_text_density_per_page = round2(total_text as f64 / f64::from(page_count));

    // Only pages with hierarchical elements participate in the depth
    // average; without any, depth is zero and no division happens.
    let avg_hierarchical_depth = if hierarchical_per_page.is_empty() {
        0.0
    } else {
        let total: u32 = hierarchical_per_page.values().sum();
        round2(f64::from(total) / hierarchical_per_page.len() as f64)
    };

    let avg_paragraph_length = if paragraph_count == 0 {
        0.0
    } else {
        round2(paragraph_words as f64 / paragraph_count as f64)
    };

    Ok(DocumentStatistics {
        title_count,
        section_count,
        table_count,
        image_count,
        avg_text_density_per_page,
        avg_hierarchical_depth,
        avg_paragraph_length,
        section_distribution,
    })
}

/// Round to two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
