// file: src/extractor/font_stats.rs
// description: document-wide reference font size sampled from leading pages
// reference: relative font sizing for heading detection

use crate::config::OutlineConfig;
use crate::models::SourceDocument;

pub struct FontStatistics {
    sample_pages: usize,
    default_size: f64,
}

impl FontStatistics {
    pub fn new(config: &OutlineConfig) -> Self {
        Self {
            sample_pages: config.sample_pages,
            default_size: config.default_font_size,
        }
    }

    /// Mean size of every positive-sized span on the sampled pages, or the
    /// default size when there is none.
    pub fn reference_size(&self, document: &SourceDocument) -> f64 {
        let (total, count) = document
            .pages
            .iter()
            .take(self.sample_pages)
            .flat_map(|page| page.spans())
            .filter(|span| span.font_size > 0.0)
            .fold((0.0, 0usize), |(total, count), span| {
                (total + span.font_size, count + 1)
            });

        if count == 0 {
            self.default_size
        } else {
            total / count as f64
        }
    }
}

impl Default for FontStatistics {
    fn default() -> Self {
        Self::new(&OutlineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Line, Page, Span};

    fn page(sizes: &[f64]) -> Page {
        Page::new(vec![Line::new(
            sizes.iter().map(|&s| Span::new("x", s, false)).collect(),
        )])
    }

    #[test]
    fn test_mean_of_positive_sizes() {
        let doc = SourceDocument::new(None, vec![page(&[10.0, 14.0, 0.0])]);
        assert_eq!(FontStatistics::default().reference_size(&doc), 12.0);
    }

    #[test]
    fn test_only_first_pages_sampled() {
        let mut pages: Vec<Page> = (0..5).map(|_| page(&[10.0])).collect();
        pages.push(page(&[100.0]));
        let doc = SourceDocument::new(None, pages);

        assert_eq!(FontStatistics::default().reference_size(&doc), 10.0);
    }

    #[test]
    fn test_default_when_no_spans() {
        let doc = SourceDocument::new(None, vec![page(&[]), page(&[0.0])]);
        assert_eq!(FontStatistics::default().reference_size(&doc), 12.0);

        let stats = FontStatistics::new(&OutlineConfig {
            sample_pages: 5,
            default_font_size: 9.5,
        });
        assert_eq!(stats.reference_size(&SourceDocument::default()), 9.5);
    }
}
