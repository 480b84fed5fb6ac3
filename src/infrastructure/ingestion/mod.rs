//! Document sources and the ingestion pipeline

mod front_matter;
mod pipeline;
mod repository;
mod repository_source;

pub use front_matter::{markdown_to_text, parse_front_matter_file, split_front_matter, FrontMatterDirectory};
pub use pipeline::IngestionPipeline;
pub use repository::{JsonContentRepository, StaticContentRepository};
pub use repository_source::ContentRepositorySource;
