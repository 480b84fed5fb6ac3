//! Mapping from raw content records to document drafts

use chrono::{DateTime, NaiveDate, Utc};

use super::records::{
    BlogPost, ExpeditionUpdate, FrontMatterFile, PersonalStory, Quantity, TrainingEntry,
};
use crate::domain::knowledge_base::vocabulary::{
    difficulty_from_content, difficulty_from_intensity, equipment_from_tags,
    mountain_type_from_location, mountain_type_from_tags, mountain_type_from_training,
};
use crate::domain::knowledge_base::{DifficultyLevel, DocumentDraft, DocumentMetadata, MountainType};
use crate::domain::DomainError;

pub const TRAINING_CATEGORY: &str = "Training Log";
pub const TRAINING_SOURCE: &str = "Training Entry";
pub const BLOG_POST_CATEGORY: &str = "Training Content";
pub const BLOG_POST_SOURCE: &str = "Blog Post";
pub const EXPEDITION_CATEGORY: &str = "Expedition Experience";
pub const EXPEDITION_SOURCE: &str = "Expedition Update";
pub const STORY_CATEGORY: &str = "Experience & Lessons";
pub const STORY_SOURCE: &str = "Personal Story";
pub const BLOG_FILE_CATEGORY: &str = "Blog";
pub const BLOG_FILE_SOURCE: &str = "Summit Chronicles Blog";

const NOT_AVAILABLE: &str = "N/A";

fn require_title(title: &str) -> Result<&str, DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::validation("Record has no title"));
    }
    Ok(title)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn or_not_available<T: ToString>(value: Option<&T>) -> String {
    value
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn training_entry_draft(entry: &TrainingEntry) -> Result<DocumentDraft, DomainError> {
    let title = require_title(&entry.title)?;

    let mut parts: Vec<String> = Vec::new();

    if let Some(description) = non_empty(entry.description.as_deref()) {
        parts.push(description.to_string());
    }

    if let Some(metrics) = &entry.metrics {
        parts.push(format!(
            "Metrics: Distance {}, Elevation {}, Duration {}min",
            or_not_available(metrics.distance.as_ref()),
            or_not_available(metrics.elevation_gain.as_ref()),
            or_not_available::<Quantity>(entry.duration.as_ref()),
        ));
    }

    if let Some(location) = &entry.location {
        parts.push(format!(
            "Location: {}, Weather: {}",
            or_not_available(location.name.as_ref()),
            or_not_available(location.weather.as_ref()),
        ));
    }

    let content = if parts.is_empty() {
        format!(
            "{} training session completed on {}",
            entry.training_type.as_deref().unwrap_or("Unspecified"),
            entry.date.as_deref().unwrap_or("an unknown date"),
        )
    } else {
        parts.join("\n\n")
    };

    let weather = entry
        .location
        .as_ref()
        .and_then(|location| non_empty(location.weather.as_deref()));

    let metadata = DocumentMetadata::new()
        .with_difficulty(difficulty_from_intensity(entry.intensity.as_deref()))
        .with_mountain_type(mountain_type_from_training(entry.training_type.as_deref()))
        .with_skills(entry.tags.iter().cloned())
        .with_tags(entry.tags.iter().cloned())
        .with_equipment(equipment_from_tags(&entry.tags))
        .with_conditions(weather);

    Ok(DocumentDraft::new(title, content, TRAINING_CATEGORY, TRAINING_SOURCE)?.with_metadata(metadata))
}

pub fn blog_post_draft(post: &BlogPost) -> Result<DocumentDraft, DomainError> {
    let title = require_title(&post.title)?;

    let content = non_empty(post.content.as_deref())
        .or_else(|| non_empty(post.excerpt.as_deref()))
        .unwrap_or_default();

    let metadata = DocumentMetadata::new()
        .with_difficulty(difficulty_from_content(post.content.as_deref().unwrap_or_default()))
        .with_mountain_type(mountain_type_from_tags(&post.tags))
        .with_skills(post.tags.iter().cloned())
        .with_tags(post.tags.iter().cloned());

    let mut draft =
        DocumentDraft::new(title, content, BLOG_POST_CATEGORY, BLOG_POST_SOURCE)?.with_metadata(metadata);
    if let Some(published) = post.published_at.as_deref().and_then(parse_date) {
        draft = draft.with_created_at(published);
    }

    Ok(draft)
}

pub fn expedition_update_draft(update: &ExpeditionUpdate) -> Result<DocumentDraft, DomainError> {
    let title = require_title(&update.title)?;
    let conditions = non_empty(update.conditions.as_deref());

    let mut parts: Vec<String> = Vec::new();
    if let Some(content) = non_empty(update.content.as_deref()) {
        parts.push(content.to_string());
    }
    if let Some(conditions) = conditions {
        parts.push(format!("Conditions: {}", conditions));
    }
    if let Some(lessons) = non_empty(update.lessons.as_deref()) {
        parts.push(format!("Lessons learned: {}", lessons));
    }

    let metadata = DocumentMetadata::new()
        .with_difficulty(DifficultyLevel::Advanced)
        .with_mountain_type(MountainType::Expedition)
        .with_skills(["expedition-planning", "high-altitude"])
        .with_conditions(conditions)
        .with_tags(["expedition", "field-report"]);

    Ok(DocumentDraft::new(title, parts.join("\n\n"), EXPEDITION_CATEGORY, EXPEDITION_SOURCE)?
        .with_metadata(metadata))
}

pub fn personal_story_draft(story: &PersonalStory) -> Result<DocumentDraft, DomainError> {
    let title = require_title(&story.title)?;

    let difficulty = match non_empty(story.difficulty.as_deref()) {
        Some(raw) => raw.parse::<DifficultyLevel>()?,
        None => DifficultyLevel::Intermediate,
    };

    let metadata = DocumentMetadata::new()
        .with_difficulty(difficulty)
        .with_mountain_type(mountain_type_from_location(story.mountain_location.as_deref()))
        .with_skills(story.tags.iter().cloned())
        .with_tags(story.tags.iter().cloned());

    let content = story.content.clone().unwrap_or_default();

    Ok(DocumentDraft::new(title, content, STORY_CATEGORY, STORY_SOURCE)?.with_metadata(metadata))
}

/// Map a Markdown file. Missing titles fall back to the file stem, missing
/// difficulty to beginner, and a parseable `date` becomes the creation time.
pub fn front_matter_draft(file: &FrontMatterFile) -> Result<DocumentDraft, DomainError> {
    let header = &file.front_matter;

    let title = non_empty(header.title.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| file.stem());
    let title = require_title(&title)?;

    let category = non_empty(header.category.as_deref()).unwrap_or(BLOG_FILE_CATEGORY);

    let difficulty = match non_empty(header.difficulty.as_deref()) {
        Some(raw) => raw.parse::<DifficultyLevel>()?,
        None => DifficultyLevel::Beginner,
    };

    let metadata = DocumentMetadata::new()
        .with_difficulty(difficulty)
        .with_tags(header.tags.iter().cloned());

    let mut draft = DocumentDraft::new(title, file.body.as_str(), category, BLOG_FILE_SOURCE)?
        .with_metadata(metadata);
    if let Some(date) = header.date.as_deref().and_then(parse_date) {
        draft = draft.with_created_at(date);
    }

    Ok(draft)
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingestion::records::{FrontMatter, TrainingLocation, TrainingMetrics};
    use std::path::PathBuf;

    fn training_entry() -> TrainingEntry {
        TrainingEntry {
            id: "t1".to_string(),
            title: "Hill repeats".to_string(),
            description: Some("Ten laps with a loaded pack.".to_string()),
            training_type: Some("hiking".to_string()),
            duration: Some(Quantity::Number(90.0)),
            intensity: Some("high".to_string()),
            metrics: Some(TrainingMetrics {
                distance: Some(Quantity::Number(8.2)),
                elevation_gain: None,
            }),
            location: Some(TrainingLocation {
                name: Some("Mount Si".to_string()),
                weather: Some("rain".to_string()),
            }),
            tags: vec!["pack-training".to_string(), "helmet".to_string()],
            date: Some("2024-06-01".to_string()),
        }
    }

    #[test]
    fn test_training_entry_content_and_metadata() {
        let draft = training_entry_draft(&training_entry()).unwrap();

        assert_eq!(
            draft.content(),
            "Ten laps with a loaded pack.\n\n\
             Metrics: Distance 8.2, Elevation N/A, Duration 90min\n\n\
             Location: Mount Si, Weather: rain"
        );
        assert_eq!(draft.category(), "Training Log");
        assert_eq!(draft.source(), "Training Entry");

        let metadata = draft.metadata();
        assert_eq!(metadata.difficulty_level, Some(DifficultyLevel::Advanced));
        assert_eq!(metadata.mountain_type, Some(MountainType::Endurance));
        assert!(metadata.conditions.contains("rain"));
        assert!(metadata.equipment.contains("helmet"));
        assert!(metadata.skills.contains("pack-training"));
    }

    #[test]
    fn test_training_entry_without_details_gets_summary_line() {
        let entry = TrainingEntry {
            id: "t2".to_string(),
            title: "Rest day".to_string(),
            training_type: Some("recovery".to_string()),
            date: Some("2024-06-02".to_string()),
            ..Default::default()
        };

        let draft = training_entry_draft(&entry).unwrap();

        assert_eq!(draft.content(), "recovery training session completed on 2024-06-02");
        assert_eq!(draft.metadata().difficulty_level, Some(DifficultyLevel::Intermediate));
        assert_eq!(draft.metadata().mountain_type, Some(MountainType::Mixed));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let entry = TrainingEntry {
            id: "t3".to_string(),
            title: "  ".to_string(),
            description: Some("body".to_string()),
            ..Default::default()
        };

        assert!(training_entry_draft(&entry).unwrap_err().is_validation());
    }

    #[test]
    fn test_blog_post_falls_back_to_excerpt() {
        let post = BlogPost {
            id: "b1".to_string(),
            title: "Crampon care".to_string(),
            content: None,
            excerpt: Some("Dry them after every trip.".to_string()),
            tags: vec!["ice".to_string()],
            published_at: Some("2024-01-15T10:00:00Z".to_string()),
        };

        let draft = blog_post_draft(&post).unwrap();

        assert_eq!(draft.content(), "Dry them after every trip.");
        assert_eq!(draft.category(), "Training Content");
        assert_eq!(draft.metadata().mountain_type, Some(MountainType::Technical));
        assert_eq!(draft.metadata().difficulty_level, Some(DifficultyLevel::Intermediate));
    }

    #[test]
    fn test_blog_post_without_any_body_is_rejected() {
        let post = BlogPost {
            id: "b2".to_string(),
            title: "Placeholder".to_string(),
            ..Default::default()
        };

        assert!(blog_post_draft(&post).unwrap_err().is_validation());
    }

    #[test]
    fn test_expedition_update_fixed_metadata() {
        let update = ExpeditionUpdate {
            id: "e1".to_string(),
            title: "Camp 2".to_string(),
            content: Some("Reached camp two.".to_string()),
            conditions: Some("High winds".to_string()),
            lessons: Some("Start earlier".to_string()),
            ..Default::default()
        };

        let draft = expedition_update_draft(&update).unwrap();

        assert_eq!(
            draft.content(),
            "Reached camp two.\n\nConditions: High winds\n\nLessons learned: Start earlier"
        );
        let metadata = draft.metadata();
        assert_eq!(metadata.difficulty_level, Some(DifficultyLevel::Advanced));
        assert_eq!(metadata.mountain_type, Some(MountainType::Expedition));
        assert!(metadata.tags.contains("field-report"));
        assert!(metadata.conditions.contains("High winds"));
    }

    #[test]
    fn test_personal_story_difficulty() {
        let mut story = PersonalStory {
            id: "p1".to_string(),
            title: "Turning back".to_string(),
            content: Some("We turned around at 8000m.".to_string()),
            mountain_location: Some("Everest South Col".to_string()),
            ..Default::default()
        };

        let draft = personal_story_draft(&story).unwrap();
        assert_eq!(draft.metadata().difficulty_level, Some(DifficultyLevel::Intermediate));
        assert_eq!(draft.metadata().mountain_type, Some(MountainType::Expedition));

        story.difficulty = Some("Expert".to_string());
        let draft = personal_story_draft(&story).unwrap();
        assert_eq!(draft.metadata().difficulty_level, Some(DifficultyLevel::Expert));

        story.difficulty = Some("insane".to_string());
        assert!(personal_story_draft(&story).unwrap_err().is_validation());
    }

    #[test]
    fn test_front_matter_defaults() {
        let file = FrontMatterFile {
            path: PathBuf::from("blog/first-ascent.md"),
            front_matter: FrontMatter {
                tags: vec!["alpine".to_string()],
                date: Some("2023-08-20".to_string()),
                ..Default::default()
            },
            body: "We topped out at dawn.".to_string(),
        };

        let draft = front_matter_draft(&file).unwrap();

        assert_eq!(draft.title(), "first-ascent");
        assert_eq!(draft.category(), "Blog");
        assert_eq!(draft.source(), "Summit Chronicles Blog");
        assert_eq!(draft.metadata().difficulty_level, Some(DifficultyLevel::Beginner));

        let document = draft.into_document(vec![1.0], Utc::now());
        assert_eq!(document.created_at, parse_date("2023-08-20").unwrap());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-03-01").is_some());
        assert!(parse_date("2024-03-01T12:30:00+02:00").is_some());
        assert!(parse_date("last tuesday").is_none());
    }
}
