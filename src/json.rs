//! JSON boundary for analysis results.
//!
//! The persistence collaborator consumes plain structured data; this module
//! is the string form of that hand-off. `section_distribution` page-number
//! keys serialize as a string-keyed object and come back numeric, so a
//! round trip preserves them.

use crate::error::{Error, Result};
use crate::extract::DocumentAnalysis;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an analysis to JSON.
pub fn to_json(analysis: &DocumentAnalysis, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(analysis),
        JsonFormat::Compact => serde_json::to_string(analysis),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

/// Deserialize an analysis produced by [`to_json`].
pub fn from_json(data: &str) -> Result<DocumentAnalysis> {
    serde_json::from_str(data)
        .map_err(|e| Error::Serialize(format!("JSON deserialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PageContent, TextBlock, TextRun};
    use crate::model::{FontInfo, Rect};

    fn sample_analysis() -> DocumentAnalysis {
        let mut page = PageContent::new(1);
        page.text_blocks.push(TextBlock::with_runs(
            Rect::new(72.0, 72.0, 540.0, 96.0),
            vec![TextRun::new(
                "Overview",
                FontInfo::new("Helvetica", 11.0, 0),
            )],
        ));
        crate::extract::analyze_pages(&[page]).unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_analysis(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"section\""));
        assert!(json.contains("\"section_distribution\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_analysis(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_round_trip() {
        let analysis = sample_analysis();
        let json = to_json(&analysis, JsonFormat::Compact).unwrap();
        let restored = from_json(&json).unwrap();

        assert_eq!(restored.element_count(), analysis.element_count());
        assert_eq!(restored.statistics, analysis.statistics);
        assert_eq!(
            restored.elements[0].element_type,
            analysis.elements[0].element_type
        );
        assert_eq!(
            restored.statistics.section_distribution.get(&1),
            Some(&1)
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = from_json("not json at all");
        assert!(matches!(result, Err(Error::Serialize(_))));
    }
}
