// file: src/parser/segmenter.rs
// description: single-pass section segmentation over a document's lines
// reference: heading-delimited section accumulation

use crate::extractor::TitleDetector;
use crate::models::{Line, Section, SegmentedDocument, SourceDocument, Subsection};

const MAX_SECTION_TITLE_CHARS: usize = 150;
const MIN_SUBSECTION_CHARS: usize = 10;
const MAX_SUBSECTION_CHARS: usize = 100;

/// What a single line does to the segmentation state.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    /// Close the open section, if any, and open a new one with this title.
    OpenSection { title: String },
    /// Append text to the open section, optionally marking a subsection.
    Append { text: String, subsection: Option<String> },
    /// Nothing is open and the line cannot open a section.
    Discard,
}

/// Segmentation state: the sections closed so far and at most one open section.
#[derive(Debug, Default)]
pub struct SegmenterState {
    closed: Vec<Section>,
    current: Option<Section>,
}

impl SegmenterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies a line against the state without changing it.
    pub fn classify(&self, line: &Line) -> LineEvent {
        let text = line.text();
        let length = text.chars().count();

        if line.is_emphasized() && length < MAX_SECTION_TITLE_CHARS {
            return LineEvent::OpenSection { title: text };
        }

        if self.current.is_none() {
            return LineEvent::Discard;
        }

        let subsection = (line.has_bold_span()
            && length > MIN_SUBSECTION_CHARS
            && length < MAX_SUBSECTION_CHARS)
            .then(|| text.clone());

        LineEvent::Append { text, subsection }
    }

    pub fn apply(mut self, event: LineEvent, page: u32) -> Self {
        match event {
            LineEvent::OpenSection { title } => {
                if let Some(section) = self.current.take() {
                    self.closed.push(section);
                }
                self.current = Some(Section::open(title, page));
            }
            LineEvent::Append { text, subsection } => {
                if let Some(section) = self.current.as_mut() {
                    section.content.push_str(&text);
                    if let Some(title) = subsection {
                        section.subsections.push(Subsection {
                            title,
                            page,
                            content: String::new(),
                        });
                    }
                }
            }
            LineEvent::Discard => {}
        }
        self
    }

    pub fn step(self, line: &Line, page: u32) -> Self {
        let event = self.classify(line);
        self.apply(event, page)
    }

    pub fn finish(mut self) -> Vec<Section> {
        if let Some(section) = self.current.take() {
            self.closed.push(section);
        }
        self.closed
    }
}

pub struct SectionSegmenter {
    titles: TitleDetector,
}

impl SectionSegmenter {
    pub fn new() -> Self {
        Self {
            titles: TitleDetector::new(),
        }
    }

    pub fn sections(&self, document: &SourceDocument) -> Vec<Section> {
        document
            .lines()
            .fold(SegmenterState::new(), |state, (page, line)| {
                state.step(line, page)
            })
            .finish()
    }

    pub fn segment(&self, document: &SourceDocument) -> SegmentedDocument {
        SegmentedDocument {
            title: self.titles.detect(document),
            sections: self.sections(document),
            full_text: document.full_text(),
        }
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Page, Span};
    use pretty_assertions::assert_eq;

    fn line(text: &str, size: f64, bold: bool) -> Line {
        Line::new(vec![Span::new(text, size, bold)])
    }

    #[test]
    fn test_bold_line_opens_section_with_content() {
        let doc = SourceDocument::new(
            None,
            vec![
                Page::new(vec![]),
                Page::new(vec![]),
                Page::new(vec![
                    line("Results", 12.0, true),
                    line("our findings show...", 11.0, false),
                ]),
            ],
        );

        let sections = SectionSegmenter::new().sections(&doc);
        assert_eq!(
            sections,
            vec![Section {
                title: "Results".to_string(),
                page: 3,
                content: "our findings show...".to_string(),
                subsections: vec![],
            }]
        );
    }

    #[test]
    fn test_text_before_first_section_is_dropped() {
        let doc = SourceDocument::new(
            None,
            vec![Page::new(vec![
                line("preamble text", 11.0, false),
                line("Methods", 14.0, false),
                line("first", 11.0, false),
                line("second", 11.0, false),
            ])],
        );

        let segmented = SectionSegmenter::new().segment(&doc);
        assert_eq!(segmented.sections.len(), 1);
        assert_eq!(segmented.sections[0].content, "firstsecond");
        assert!(segmented.full_text.contains("preamble text"));
    }

    #[test]
    fn test_long_bold_line_becomes_content() {
        let long = "A fairly long bold sentence that is over one hundred and fifty characters \
                    long so it cannot be a section title but still sits in the open section body";
        assert!(long.chars().count() >= 150);

        let doc = SourceDocument::new(
            None,
            vec![Page::new(vec![
                line("Intro", 11.0, true),
                line(long, 11.0, true),
            ])],
        );
        let sections = SectionSegmenter::new().sections(&doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, long);
        // too long to be a subsection marker
        assert!(sections[0].subsections.is_empty());
    }

    #[test]
    fn test_short_bold_line_opens_instead_of_marking() {
        let mixed = Line::new(vec![
            Span::new("Key point:", 11.0, true),
            Span::new("details follow here", 11.0, false),
        ]);
        let state = SegmenterState::new().step(&line("Overview", 16.0, false), 1);

        assert_eq!(
            state.classify(&mixed),
            LineEvent::OpenSection {
                title: "Key point: details follow here".to_string()
            }
        );
    }

    #[test]
    fn test_subsection_marker_has_no_content() {
        let state = SegmenterState::new()
            .step(&line("Overview", 16.0, false), 1)
            .apply(
                LineEvent::Append {
                    text: "Key point: details".to_string(),
                    subsection: Some("Key point: details".to_string()),
                },
                2,
            )
            .step(&line("more text", 10.0, false), 2);

        let sections = state.finish();
        assert_eq!(sections[0].content, "Key point: detailsmore text");
        assert_eq!(
            sections[0].subsections,
            vec![Subsection {
                title: "Key point: details".to_string(),
                page: 2,
                content: String::new(),
            }]
        );
    }

    #[test]
    fn test_long_mixed_line_is_not_a_subsection() {
        let text = "x".repeat(120) + " bold tail";
        let state = SegmenterState::new().step(&line("Start", 14.0, false), 1);
        let event = state.classify(&Line::new(vec![
            Span::new(text.clone(), 11.0, false),
            Span::new("y".repeat(40), 11.0, true),
        ]));

        assert_eq!(
            event,
            LineEvent::Append {
                text: format!("{} {}", text, "y".repeat(40)),
                subsection: None,
            }
        );
    }

    #[test]
    fn test_sections_close_in_order() {
        let doc = SourceDocument::new(
            None,
            vec![
                Page::new(vec![line("One", 14.0, false), line("a", 10.0, false)]),
                Page::new(vec![line("Two", 10.0, true), line("b", 10.0, false)]),
            ],
        );

        let sections = SectionSegmenter::new().sections(&doc);
        let summary: Vec<(&str, u32, &str)> = sections
            .iter()
            .map(|s| (s.title.as_str(), s.page, s.content.as_str()))
            .collect();
        assert_eq!(summary, vec![("One", 1, "a"), ("Two", 2, "b")]);
    }

    #[test]
    fn test_discard_without_open_section() {
        let state = SegmenterState::new();
        assert_eq!(state.classify(&line("loose", 10.0, false)), LineEvent::Discard);
        assert!(state.step(&line("loose", 10.0, false), 1).finish().is_empty());
    }
}
