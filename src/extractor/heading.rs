// file: src/extractor/heading.rs
// description: heading level classification from size ratio, boldness and text shape
// reference: relative font sizing and common outline numbering conventions

use crate::extractor::patterns::{NUMBERED_HEADING, STRICT_CAPS_HEADING, matches_heading_shape};
use crate::models::HeadingLevel;

const MIN_HEADING_CHARS: usize = 3;
const MAX_HEADING_CHARS: usize = 200;

const LARGE_RATIO: f64 = 1.4;
const BOLD_RATIO: f64 = 1.2;
const H1_RATIO: f64 = 1.6;
const H2_RATIO: f64 = 1.3;

pub struct HeadingClassifier;

impl HeadingClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Returns the heading level of a span, or `None` for body text.
    ///
    /// A span qualifies when it is much larger than the reference size, or
    /// moderately larger and bold, or shaped like a heading. Qualifying spans
    /// are then leveled by the first matching rung: H1, H2, otherwise H3.
    pub fn classify(
        &self,
        text: &str,
        size: f64,
        bold: bool,
        reference_size: f64,
    ) -> Option<HeadingLevel> {
        let text = text.trim();
        let length = text.chars().count();
        if !(MIN_HEADING_CHARS..=MAX_HEADING_CHARS).contains(&length) {
            return None;
        }

        let ratio = if reference_size > 0.0 {
            size / reference_size
        } else {
            1.0
        };

        let qualifies =
            ratio >= LARGE_RATIO || (ratio >= BOLD_RATIO && bold) || matches_heading_shape(text);
        if !qualifies {
            return None;
        }

        if ratio >= H1_RATIO || STRICT_CAPS_HEADING.is_match(text) {
            Some(HeadingLevel::H1)
        } else if ratio >= H2_RATIO || NUMBERED_HEADING.is_match(text) {
            Some(HeadingLevel::H2)
        } else {
            Some(HeadingLevel::H3)
        }
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}
