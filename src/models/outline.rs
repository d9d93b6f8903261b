// file: src/models/outline.rs
// description: heading levels and the outline record written per document
// reference: internal data structures

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.depth())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct HeadingRecord {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutlineRecord {
    pub title: String,
    pub outline: Vec<HeadingRecord>,
}

impl OutlineRecord {
    /// Record emitted for a document that could not be opened.
    pub fn unreadable(name: &str) -> Self {
        Self {
            title: format!("Error with {}", name),
            outline: Vec::new(),
        }
    }

    /// Indented, human-readable rendering used by the inspect command.
    pub fn render_tree(&self) -> String {
        self.outline
            .iter()
            .map(|heading| {
                format!(
                    "{}{}: \"{}\" (Page {})",
                    "  ".repeat(heading.level.depth() - 1),
                    heading.level,
                    heading.text,
                    heading.page
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
