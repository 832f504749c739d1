//! Semantic classification of text blocks.
//!
//! Classification is a rigid priority-ordered decision list. List-marker
//! patterns win over every font rule; after that, font size and boldness
//! pick title, subtitle, or section, and everything else is a paragraph.

use regex::Regex;

use crate::model::{ElementType, FontInfo};

/// Font size at or above which a bold block is a title.
const TITLE_MIN_SIZE: f32 = 16.0;

/// Font size at or above which a block can be a subtitle.
const SUBTITLE_MIN_SIZE: f32 = 14.0;

/// Font size at or above which a short block is a section heading.
const SECTION_MIN_SIZE: f32 = 10.0;

/// Maximum word count for the subtitle rule.
const SUBTITLE_MAX_WORDS: usize = 10;

/// Maximum word count for the section rule.
const SECTION_MAX_WORDS: usize = 20;

/// Classifies text blocks into semantic element types.
///
/// The list-marker patterns are compiled once per instance; pipelines that
/// classify many blocks should hold one `Classifier` and reuse it.
pub struct Classifier {
    list_patterns: Vec<Regex>,
}

impl Classifier {
    /// Create a classifier with the standard list-marker patterns.
    pub fn new() -> Self {
        let list_patterns = vec![
            // Bullet glyphs
            Regex::new(r"^[•·▪▫‣⁃]\s+").unwrap(),
            // Numbered lists: "1." or "1)"
            Regex::new(r"^\d+[.)]\s+").unwrap(),
            // Lettered lists: "a." or "A)"
            Regex::new(r"^[a-zA-Z][.)]\s+").unwrap(),
            // Dash/asterisk/plus markers
            Regex::new(r"^[-*+]\s+").unwrap(),
        ];

        Self { list_patterns }
    }

    /// Map one text block to its semantic element type.
    ///
    /// Total over all inputs: every (text, font) pair maps to exactly one
    /// type. The text is trimmed internally before pattern matching and
    /// word counting, so callers may pass the raw run concatenation.
    pub fn classify(&self, text: &str, font: &FontInfo) -> ElementType {
        let trimmed = text.trim();

        // List markers take precedence over any font rule.
        if self.is_list_item(trimmed) {
            return ElementType::ListItem;
        }

        let word_count = trimmed.split_whitespace().count();
        let bold = font.is_bold();

        if font.size >= TITLE_MIN_SIZE && bold {
            ElementType::Title
        } else if font.size >= SUBTITLE_MIN_SIZE && (bold || word_count <= SUBTITLE_MAX_WORDS) {
            ElementType::Subtitle
        } else if font.size >= SECTION_MIN_SIZE && word_count <= SECTION_MAX_WORDS {
            ElementType::Section
        } else {
            ElementType::Paragraph
        }
    }

    /// Check if the trimmed text starts with a recognized list marker.
    fn is_list_item(&self, trimmed: &str) -> bool {
        self.list_patterns.iter().any(|p| p.is_match(trimmed))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a single block with a freshly built classifier.
///
/// Convenience for one-off calls; see [`Classifier`] for repeated use.
pub fn classify(text: &str, font: &FontInfo) -> ElementType {
    Classifier::new().classify(text, font)
}
