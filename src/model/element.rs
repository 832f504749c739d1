//! Element-level types.

use serde::{Deserialize, Serialize};

/// Semantic type of a document element.
///
/// A closed enumeration: every element carries exactly one tag, assigned
/// once at extraction time and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// Document title
    Title,

    /// Subtitle below a title
    Subtitle,

    /// Section heading
    Section,

    /// Body paragraph
    Paragraph,

    /// An item of a bulleted, numbered, or lettered list
    ListItem,

    /// A table flattened to text
    Table,

    /// An image reference
    Image,
}

impl ElementType {
    /// Check whether this type counts toward the hierarchical depth metric.
    pub fn is_hierarchical(self) -> bool {
        matches!(
            self,
            ElementType::Title | ElementType::Subtitle | ElementType::Section
        )
    }
}

/// An axis-aligned rectangle in page coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,

    /// Top edge
    pub y0: f32,

    /// Right edge
    pub x1: f32,

    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle from its corner coordinates.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Get the height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Font attributes attached to a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Font name as reported by the renderer (e.g., "Helvetica-Bold")
    pub name: String,

    /// Font size in points
    pub size: f32,

    /// Renderer style bitfield
    pub flags: u32,
}

impl FontInfo {
    /// Create a new font record.
    pub fn new(name: impl Into<String>, size: f32, flags: u32) -> Self {
        Self {
            name: name.into(),
            size,
            flags,
        }
    }

    /// Check the bold bit (bit 4) of the style bitfield.
    pub fn is_bold(&self) -> bool {
        self.flags & 16 != 0
    }
}

/// A single classified element extracted from a document.
///
/// Elements are plain data, created once per extraction run and handed to
/// the persistence layer as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Semantic type tag
    pub element_type: ElementType,

    /// Normalized text content, or a synthetic identifier for images
    pub content: String,

    /// Source page number (1-indexed)
    pub page_number: u32,

    /// Bounding rectangle on the page, when the renderer supplied geometry
    pub position: Option<Rect>,

    /// Font attributes of the source block; absent for images and tables
    pub font_info: Option<FontInfo>,
}

impl Element {
    /// Create a text element.
    pub fn text(
        element_type: ElementType,
        content: impl Into<String>,
        page_number: u32,
        position: Rect,
        font_info: FontInfo,
    ) -> Self {
        Self {
            element_type,
            content: content.into(),
            page_number,
            position: Some(position),
            font_info: Some(font_info),
        }
    }

    /// Create an image element with a synthetic identifier as content.
    pub fn image(content: impl Into<String>, page_number: u32, position: Rect) -> Self {
        Self {
            element_type: ElementType::Image,
            content: content.into(),
            page_number,
            position: Some(position),
            font_info: None,
        }
    }

    /// Create a table element from flattened grid text.
    pub fn table(content: impl Into<String>, page_number: u32, position: Rect) -> Self {
        Self {
            element_type: ElementType::Table,
            content: content.into(),
            page_number,
            position: Some(position),
            font_info: None,
        }
    }

    /// Get the content length in characters.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Get the number of whitespace-delimited words in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hierarchical() {
        assert!(ElementType::Title.is_hierarchical());
        assert!(ElementType::Subtitle.is_hierarchical());
        assert!(ElementType::Section.is_hierarchical());
        assert!(!ElementType::Paragraph.is_hierarchical());
        assert!(!ElementType::ListItem.is_hierarchical());
        assert!(!ElementType::Table.is_hierarchical());
        assert!(!ElementType::Image.is_hierarchical());
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(72.0, 100.0, 540.0, 130.0);
        assert_eq!(rect.width(), 468.0);
        assert_eq!(rect.height(), 30.0);
    }

    #[test]
    fn test_font_bold_bit() {
        let bold = FontInfo::new("Helvetica-Bold", 12.0, 16);
        assert!(bold.is_bold());

        let regular = FontInfo::new("Helvetica", 12.0, 0);
        assert!(!regular.is_bold());

        // Other style bits do not imply bold
        let italic = FontInfo::new("Helvetica-Oblique", 12.0, 2);
        assert!(!italic.is_bold());

        let bold_italic = FontInfo::new("Helvetica-BoldOblique", 12.0, 18);
        assert!(bold_italic.is_bold());
    }

    #[test]
    fn test_element_constructors() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let font = FontInfo::new("Times-Roman", 11.0, 0);

        let text = Element::text(ElementType::Paragraph, "Body text", 1, rect, font);
        assert!(text.font_info.is_some());
        assert!(text.position.is_some());

        let image = Element::image("Image_1_0", 1, rect);
        assert_eq!(image.element_type, ElementType::Image);
        assert!(image.font_info.is_none());

        let table = Element::table("a\tb\nc\td", 1, rect);
        assert_eq!(table.element_type, ElementType::Table);
        assert!(table.font_info.is_none());
    }

    #[test]
    fn test_element_counts() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let font = FontInfo::new("Times-Roman", 11.0, 0);
        let element = Element::text(ElementType::Paragraph, "three short words", 1, rect, font);

        assert_eq!(element.word_count(), 3);
        assert_eq!(element.char_count(), 17);
    }

    #[test]
    fn test_element_type_serde_tag() {
        let json = serde_json::to_string(&ElementType::ListItem).unwrap();
        assert_eq!(json, "\"list_item\"");

        let parsed: ElementType = serde_json::from_str("\"section\"").unwrap();
        assert_eq!(parsed, ElementType::Section);
    }
}
