// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod collection;
pub mod layout;
pub mod outline;
pub mod ranking;
pub mod section;

pub use collection::{CollectionInput, DocumentRef, JobToBeDone, Persona};
pub use layout::{DocumentMetadata, Line, Page, SourceDocument, Span};
pub use outline::{HeadingLevel, HeadingRecord, OutlineRecord};
pub use ranking::{
    ExtractedSection, Ranking, RankingMetadata, RankingRecord, RefinedSubsection, ScoredSection,
};
pub use section::{Section, SegmentedDocument, Subsection};
