// file: src/models/section.rs
// description: sections and subsections produced by segmentation
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    pub title: String,
    pub page: u32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub page: u32,
    pub content: String,
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn open(title: impl Into<String>, page: u32) -> Self {
        Self {
            title: title.into(),
            page,
            content: String::new(),
            subsections: Vec::new(),
        }
    }

    /// Text scored against the query: title and content separated by a space.
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// A document after segmentation, frozen and ready for indexing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentedDocument {
    pub title: String,
    pub sections: Vec<Section>,
    pub full_text: String,
}

impl SegmentedDocument {
    /// Stand-in for a document that exists but could not be read.
    pub fn unreadable(name: &str) -> Self {
        Self {
            title: format!("Error: {}", name),
            sections: Vec::new(),
            full_text: String::new(),
        }
    }

    /// Corpus passage: full text followed by every section's scoring text.
    pub fn corpus_passage(&self) -> String {
        let sections = self
            .sections
            .iter()
            .map(Section::scoring_text)
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}{}", self.full_text, sections)
    }
}
