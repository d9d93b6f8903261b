// file: src/ranking/ranker.rs
// description: persona-conditioned ranking of segmented sections across a collection
// reference: tf-idf cosine scoring over a per-run corpus

use crate::config::RankingConfig;
use crate::models::{ExtractedSection, Ranking, RefinedSubsection, ScoredSection, SegmentedDocument};
use crate::scoring::{Corpus, TermIndex};
use std::collections::HashSet;

/// A segmented document paired with the name it is reported under.
#[derive(Debug, Clone)]
pub struct RankedDocument {
    pub name: String,
    pub document: SegmentedDocument,
}

impl RankedDocument {
    pub fn new(name: impl Into<String>, document: SegmentedDocument) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelevanceRanker {
    config: RankingConfig,
}

impl RelevanceRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn build_index(&self, documents: &[RankedDocument]) -> TermIndex {
        documents
            .iter()
            .map(|doc| doc.document.corpus_passage())
            .collect::<Corpus>()
            .into_index()
    }

    /// Scores every section of every document against `"<role> <task>"`,
    /// in document then section order. A name listed twice still adds two
    /// passages to the index, but its sections are scored once.
    pub fn score_sections(
        &self,
        role: &str,
        task: &str,
        documents: &[RankedDocument],
    ) -> Vec<ScoredSection> {
        let index = self.build_index(documents);
        let query = index.vectorize(&format!("{} {}", role, task));
        let mut seen = HashSet::new();

        documents
            .iter()
            .filter(|doc| seen.insert(doc.name.as_str()))
            .flat_map(|doc| {
                doc.document.sections.iter().map(|section| (&doc.name, section))
            })
            .map(|(name, section)| {
                let vector = index.vectorize(&section.scoring_text());
                ScoredSection {
                    document: name.clone(),
                    section_title: section.title.clone(),
                    page_number: section.page,
                    relevance_score: index.compare(&query, &vector),
                    content: section.content.clone(),
                }
            })
            .collect()
    }

    pub fn rank(&self, role: &str, task: &str, documents: &[RankedDocument]) -> Ranking {
        let scored = self.score_sections(role, task, documents);

        Ranking {
            subsection_analysis: self.refine(&scored),
            extracted_sections: self.top_sections(scored),
        }
    }

    /// Highest scores first. The sort is stable, so equal scores keep encounter order.
    pub fn top_sections(&self, mut scored: Vec<ScoredSection>) -> Vec<ExtractedSection> {
        scored.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        scored
            .into_iter()
            .take(self.config.top_sections)
            .enumerate()
            .map(|(idx, section)| ExtractedSection {
                document: section.document,
                section_title: section.section_title,
                importance_rank: idx + 1,
                page_number: section.page_number,
            })
            .collect()
    }

    /// Sections above the score threshold with non-blank content, in encounter
    /// order, each cut to a fixed number of characters.
    pub fn refine(&self, scored: &[ScoredSection]) -> Vec<RefinedSubsection> {
        scored
            .iter()
            .filter(|section| section.relevance_score > self.config.refined_min_score)
            .filter(|section| !section.content.trim().is_empty())
            .take(self.config.refined_limit)
            .map(|section| RefinedSubsection {
                document: section.document.clone(),
                refined_text: section
                    .content
                    .trim()
                    .chars()
                    .take(self.config.refined_max_chars)
                    .collect(),
                page_number: section.page_number,
            })
            .collect()
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}
