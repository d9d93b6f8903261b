// file: src/extractor/title.rs
// description: document title from metadata with a first-page text fallback
// reference: pdf metadata conventions

use crate::extractor::patterns::is_page_number_line;
use crate::models::SourceDocument;

pub const UNTITLED: &str = "Untitled Document";

const SCANNED_LINES: usize = 10;
const MIN_TITLE_CHARS: usize = 10;
const MAX_TITLE_CHARS: usize = 200;

pub struct TitleDetector;

impl TitleDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, document: &SourceDocument) -> String {
        self.from_metadata(document)
            .or_else(|| self.from_first_page(document))
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn from_metadata(&self, document: &SourceDocument) -> Option<String> {
        document
            .metadata
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
    }

    pub fn from_first_page(&self, document: &SourceDocument) -> Option<String> {
        let text = document.pages.first()?.plain_text();

        text.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(SCANNED_LINES)
            .find(|line| {
                let length = line.chars().count();
                length > MIN_TITLE_CHARS
                    && length < MAX_TITLE_CHARS
                    && !is_page_number_line(line)
            })
            .map(str::to_string)
    }
}

impl Default for TitleDetector {
    fn default() -> Self {
        Self::new()
    }
}
