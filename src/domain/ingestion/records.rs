//! Raw content records as exported by the content backend

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A measurement that may arrive as a number or as free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMetrics {
    pub distance: Option<Quantity>,
    pub elevation_gain: Option<Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingLocation {
    pub name: Option<String>,
    pub weather: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub training_type: Option<String>,
    /// Minutes
    pub duration: Option<Quantity>,
    pub intensity: Option<String>,
    pub metrics: Option<TrainingMetrics>,
    pub location: Option<TrainingLocation>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
    pub location: Option<String>,
    pub conditions: Option<String>,
    pub lessons: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalStory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
    pub mountain_location: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: Option<String>,
}

/// A full content export, one list per record type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentExport {
    pub training_entries: Vec<TrainingEntry>,
    pub blog_posts: Vec<BlogPost>,
    pub expedition_updates: Vec<ExpeditionUpdate>,
    pub personal_stories: Vec<PersonalStory>,
}

/// Header fields of a Markdown file with front matter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub date: Option<String>,
    pub difficulty: Option<String>,
}

/// A Markdown file split into front matter and plain-text body
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatterFile {
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl FrontMatterFile {
    /// File name without extension, used when the header has no title
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export() {
        let json = r#"{
            "trainingEntries": [{
                "_id": "t1",
                "title": "Stairs",
                "type": "cardio",
                "duration": 45,
                "intensity": "high",
                "metrics": {"distance": 5.5, "elevationGain": "600m"},
                "location": {"name": "Gym", "weather": "indoor"},
                "tags": ["stairs"]
            }],
            "personalStories": [{"_id": "p1", "title": "Retreat", "mountainLocation": "Denali"}]
        }"#;

        let export: ContentExport = serde_json::from_str(json).unwrap();

        assert_eq!(export.training_entries.len(), 1);
        assert!(export.blog_posts.is_empty());
        let entry = &export.training_entries[0];
        assert_eq!(entry.training_type.as_deref(), Some("cardio"));
        assert_eq!(entry.duration, Some(Quantity::Number(45.0)));
        let metrics = entry.metrics.as_ref().unwrap();
        assert_eq!(metrics.elevation_gain, Some(Quantity::Text("600m".to_string())));
        assert_eq!(export.personal_stories[0].mountain_location.as_deref(), Some("Denali"));
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(Quantity::Number(12.0).to_string(), "12");
        assert_eq!(Quantity::Number(5.5).to_string(), "5.5");
        assert_eq!(Quantity::Text("10km".to_string()).to_string(), "10km");
    }

    #[test]
    fn test_front_matter_stem() {
        let file = FrontMatterFile {
            path: PathBuf::from("content/blog/first-ascent.md"),
            front_matter: FrontMatter::default(),
            body: String::new(),
        };

        assert_eq!(file.stem(), "first-ascent");
    }
}
