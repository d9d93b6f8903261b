// file: src/extractor/outline.rs
// description: ordered, de-duplicated heading outline for one document
// reference: span walking in reading order

use crate::config::OutlineConfig;
use crate::extractor::font_stats::FontStatistics;
use crate::extractor::heading::HeadingClassifier;
use crate::extractor::title::TitleDetector;
use crate::models::{HeadingRecord, OutlineRecord, SourceDocument};
use std::collections::HashSet;

pub struct OutlineBuilder {
    classifier: HeadingClassifier,
    font_stats: FontStatistics,
    titles: TitleDetector,
}

impl OutlineBuilder {
    pub fn new(config: &OutlineConfig) -> Self {
        Self {
            classifier: HeadingClassifier::new(),
            font_stats: FontStatistics::new(config),
            titles: TitleDetector::new(),
        }
    }

    pub fn build(&self, document: &SourceDocument) -> OutlineRecord {
        let title = self.titles.detect(document);
        let reference_size = self.font_stats.reference_size(document);

        let mut seen = HashSet::new();
        let mut outline = Vec::new();

        for (page, span) in document.spans() {
            let Some(level) =
                self.classifier
                    .classify(&span.text, span.font_size, span.is_bold, reference_size)
            else {
                continue;
            };

            let heading = HeadingRecord {
                level,
                text: span.text.trim().to_string(),
                page,
            };

            if seen.insert(heading.clone()) {
                outline.push(heading);
            }
        }

        OutlineRecord { title, outline }
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new(&OutlineConfig::default())
    }
}
