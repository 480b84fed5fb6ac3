//! Ingestion domain - content records, mapping rules and run summaries

pub mod records;
mod source;
mod summary;
pub mod transform;

pub use records::{
    BlogPost, ContentExport, ExpeditionUpdate, FrontMatter, FrontMatterFile, PersonalStory,
    Quantity, TrainingEntry, TrainingLocation, TrainingMetrics,
};
pub use source::{ContentRepository, DocumentSource, SourceRecord};
pub use summary::{IngestedRecord, IngestionFailure, IngestionSummary, RecordKind, RecordOutcome};

#[cfg(test)]
pub use source::mock::MockDocumentSource;
