// file: src/models/layout.rs
// description: page, line and span records supplied by the document provider
// reference: span dumps produced by pdf text extractors (text, size, flags)

use serde::{Deserialize, Serialize};

/// Style flag bit that extractors use to mark a bold span.
pub const BOLD_FLAG: u32 = 1 << 4;

/// Size above which a span counts as emphasized even without a bold flag.
pub const EMPHASIS_SIZE: f64 = 13.0;

/// Average reported for a line with no visible spans.
pub const FALLBACK_LINE_SIZE: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpanRecord")]
pub struct Span {
    pub text: String,
    pub font_size: f64,
    pub is_bold: bool,
}

/// Wire form of a span. Accepts either an explicit `is_bold` or the raw
/// extractor `flags` bitmask, and `size` as an alias of `font_size`.
#[derive(Debug, Deserialize)]
struct SpanRecord {
    text: String,
    #[serde(alias = "size")]
    font_size: f64,
    #[serde(default)]
    is_bold: bool,
    #[serde(default)]
    flags: Option<u32>,
}

impl From<SpanRecord> for Span {
    fn from(record: SpanRecord) -> Self {
        let flagged = record.flags.is_some_and(|flags| flags & BOLD_FLAG != 0);
        Self {
            text: record.text,
            font_size: record.font_size,
            is_bold: record.is_bold || flagged,
        }
    }
}

impl Span {
    pub fn new(text: impl Into<String>, font_size: f64, is_bold: bool) -> Self {
        Self {
            text: text.into(),
            font_size,
            is_bold,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn visible_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|span| span.is_visible())
    }

    /// Trimmed texts of the visible spans joined by single spaces.
    pub fn text(&self) -> String {
        self.visible_spans()
            .map(|span| span.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Span texts exactly as rendered, used for page plain text.
    pub fn raw_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    pub fn is_emphasized(&self) -> bool {
        self.visible_spans()
            .any(|span| span.font_size > EMPHASIS_SIZE || span.is_bold)
    }

    pub fn has_bold_span(&self) -> bool {
        self.visible_spans().any(|span| span.is_bold)
    }

    pub fn average_size(&self) -> f64 {
        let (total, count) = self
            .visible_spans()
            .fold((0.0, 0usize), |(total, count), span| {
                (total + span.font_size, count + 1)
            });

        if count == 0 {
            FALLBACK_LINE_SIZE
        } else {
            total / count as f64
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Plain text as reported by the extractor. Derived from the lines when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Page {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { text: None, lines }
    }

    pub fn plain_text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self.lines.iter().fold(String::new(), |mut acc, line| {
                acc.push_str(&line.raw_text());
                acc.push('\n');
                acc
            }),
        }
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    pub metadata: DocumentMetadata,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl SourceDocument {
    pub fn new(title: Option<String>, pages: Vec<Page>) -> Self {
        Self {
            metadata: DocumentMetadata { title },
            pages,
        }
    }

    /// Page texts joined by newlines.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(Page::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every line in reading order with its 1-based page number.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &Line)> {
        self.pages.iter().enumerate().flat_map(|(idx, page)| {
            let page_number = idx as u32 + 1;
            page.lines.iter().map(move |line| (page_number, line))
        })
    }

    /// Every span in reading order with its 1-based page number.
    pub fn spans(&self) -> impl Iterator<Item = (u32, &Span)> {
        self.lines()
            .flat_map(|(page, line)| line.spans.iter().map(move |span| (page, span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_flags_mark_bold() {
        let span: Span =
            serde_json::from_str(r#"{"text": "Intro", "size": 14.0, "flags": 20}"#).unwrap();
        assert!(span.is_bold);
        assert_eq!(span.font_size, 14.0);

        let plain: Span =
            serde_json::from_str(r#"{"text": "body", "font_size": 10.0, "flags": 4}"#).unwrap();
        assert!(!plain.is_bold);
    }

    #[test]
    fn test_line_text_skips_blank_spans() {
        let line = Line::new(vec![
            Span::new(" Hello ", 12.0, false),
            Span::new("   ", 12.0, true),
            Span::new("world", 10.0, false),
        ]);

        assert_eq!(line.text(), "Hello world");
        assert_eq!(line.raw_text(), " Hello    world");
        assert!(!line.has_bold_span());
        assert_eq!(line.average_size(), 11.0);
    }

    #[test]
    fn test_line_emphasis_from_size_or_bold() {
        assert!(Line::new(vec![Span::new("Big", 14.0, false)]).is_emphasized());
        assert!(Line::new(vec![Span::new("Bold", 10.0, true)]).is_emphasized());
        assert!(!Line::new(vec![Span::new("Plain", 13.0, false)]).is_emphasized());
        assert_eq!(Line::default().average_size(), FALLBACK_LINE_SIZE);
    }

    #[test]
    fn test_full_text_joins_pages() {
        let doc = SourceDocument::new(
            None,
            vec![
                Page::new(vec![Line::new(vec![Span::new("one", 12.0, false)])]),
                Page {
                    text: Some("two\n".to_string()),
                    lines: vec![],
                },
            ],
        );

        assert_eq!(doc.full_text(), "one\n\ntwo\n");
        let pages: Vec<u32> = doc.spans().map(|(page, _)| page).collect();
        assert_eq!(pages, vec![1]);
    }
}
