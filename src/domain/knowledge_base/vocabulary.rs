//! Static domain vocabulary used by ingestion mapping and keyword ranking
//!
//! These tables are plain data so the rules that consume them (record
//! mapping, query keyword extraction) can change independently of the words.

use super::metadata::{DifficultyLevel, MountainType};

/// Query words that never count as keywords
pub const STOP_WORDS: &[&str] = &["what", "where", "when", "how", "that", "this", "with", "from"];

/// Keywords must be strictly longer than this many characters
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Training intensity labels and the difficulty they imply
pub const INTENSITY_DIFFICULTY: &[(&str, DifficultyLevel)] = &[
    ("low", DifficultyLevel::Beginner),
    ("moderate", DifficultyLevel::Intermediate),
    ("high", DifficultyLevel::Advanced),
    ("maximum", DifficultyLevel::Expert),
];

pub const DEFAULT_INTENSITY_DIFFICULTY: DifficultyLevel = DifficultyLevel::Intermediate;

/// Training session types and the mountain type they prepare for
pub const TRAINING_TYPE_MOUNTAIN: &[(&str, MountainType)] = &[
    ("climbing", MountainType::Technical),
    ("technical", MountainType::Technical),
    ("cardio", MountainType::Endurance),
    ("hiking", MountainType::Endurance),
    ("strength", MountainType::Mixed),
    ("recovery", MountainType::Mixed),
];

pub const DEFAULT_TRAINING_MOUNTAIN: MountainType = MountainType::Endurance;

/// Tag fragments marking expedition material (checked before technical)
pub const EXPEDITION_TAG_KEYWORDS: &[&str] = &["expedition", "high-altitude", "everest", "denali"];

/// Tag fragments marking technical material
pub const TECHNICAL_TAG_KEYWORDS: &[&str] = &["technical", "climbing", "ice", "rock", "mixed"];

pub const DEFAULT_TAG_MOUNTAIN: MountainType = MountainType::Endurance;

/// Location fragments marking expedition objectives
pub const EXPEDITION_LOCATION_KEYWORDS: &[&str] = &["everest", "denali", "8000"];

/// Location fragments marking technical objectives
pub const TECHNICAL_LOCATION_KEYWORDS: &[&str] = &["technical", "ice", "rock"];

pub const DEFAULT_LOCATION_MOUNTAIN: MountainType = MountainType::Mixed;

/// Equipment vocabulary matched against tags
pub const EQUIPMENT_KEYWORDS: &[&str] = &[
    "ice-axes",
    "crampons",
    "harness",
    "helmet",
    "rope",
    "carabiners",
    "ice-screws",
    "pitons",
    "nuts",
    "cams",
    "belay-device",
    "avalanche-beacon",
];

/// Content cues for difficulty, checked in this order
pub const DIFFICULTY_CONTENT_CUES: &[(&[&str], DifficultyLevel)] = &[
    (&["beginner", "basic", "introduction"], DifficultyLevel::Beginner),
    (&["expert", "professional", "extreme"], DifficultyLevel::Expert),
    (&["advanced", "technical", "complex"], DifficultyLevel::Advanced),
];

pub const DEFAULT_CONTENT_DIFFICULTY: DifficultyLevel = DifficultyLevel::Intermediate;

/// Map a training intensity label to a difficulty level
pub fn difficulty_from_intensity(intensity: Option<&str>) -> DifficultyLevel {
    let Some(intensity) = intensity else {
        return DEFAULT_INTENSITY_DIFFICULTY;
    };

    let key = intensity.trim().to_lowercase();
    INTENSITY_DIFFICULTY
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_INTENSITY_DIFFICULTY)
}

/// Map a training session type to a mountain type
pub fn mountain_type_from_training(training_type: Option<&str>) -> MountainType {
    let Some(training_type) = training_type else {
        return DEFAULT_TRAINING_MOUNTAIN;
    };

    let key = training_type.trim().to_lowercase();
    TRAINING_TYPE_MOUNTAIN
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, mountain)| *mountain)
        .unwrap_or(DEFAULT_TRAINING_MOUNTAIN)
}

/// Infer a mountain type from tags: expedition wins over technical
pub fn mountain_type_from_tags<S: AsRef<str>>(tags: &[S]) -> MountainType {
    if any_tag_contains(tags, EXPEDITION_TAG_KEYWORDS) {
        return MountainType::Expedition;
    }

    if any_tag_contains(tags, TECHNICAL_TAG_KEYWORDS) {
        return MountainType::Technical;
    }

    DEFAULT_TAG_MOUNTAIN
}

/// Infer a mountain type from a free-text location
pub fn mountain_type_from_location(location: Option<&str>) -> MountainType {
    let Some(location) = location.map(str::to_lowercase) else {
        return DEFAULT_LOCATION_MOUNTAIN;
    };

    if contains_any(&location, EXPEDITION_LOCATION_KEYWORDS) {
        return MountainType::Expedition;
    }

    if contains_any(&location, TECHNICAL_LOCATION_KEYWORDS) {
        return MountainType::Technical;
    }

    DEFAULT_LOCATION_MOUNTAIN
}

/// Guess a difficulty level from words in the body text
pub fn difficulty_from_content(content: &str) -> DifficultyLevel {
    let text = content.to_lowercase();

    DIFFICULTY_CONTENT_CUES
        .iter()
        .find(|(cues, _)| contains_any(&text, cues))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_CONTENT_DIFFICULTY)
}

/// Keep the tags that name a piece of equipment
pub fn equipment_from_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .map(AsRef::as_ref)
        .filter(|tag| contains_any(&tag.to_lowercase(), EQUIPMENT_KEYWORDS))
        .map(str::to_string)
        .collect()
}

/// Whether a lowercase query token is a stop word
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

fn any_tag_contains<S: AsRef<str>>(tags: &[S], keywords: &[&str]) -> bool {
    tags.iter()
        .any(|tag| contains_any(&tag.as_ref().to_lowercase(), keywords))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_mapping() {
        assert_eq!(difficulty_from_intensity(Some("low")), DifficultyLevel::Beginner);
        assert_eq!(difficulty_from_intensity(Some("Moderate")), DifficultyLevel::Intermediate);
        assert_eq!(difficulty_from_intensity(Some("HIGH")), DifficultyLevel::Advanced);
        assert_eq!(difficulty_from_intensity(Some("maximum")), DifficultyLevel::Expert);
        assert_eq!(difficulty_from_intensity(Some("brutal")), DifficultyLevel::Intermediate);
        assert_eq!(difficulty_from_intensity(None), DifficultyLevel::Intermediate);
    }

    #[test]
    fn test_training_type_mapping() {
        assert_eq!(mountain_type_from_training(Some("Climbing")), MountainType::Technical);
        assert_eq!(mountain_type_from_training(Some("hiking")), MountainType::Endurance);
        assert_eq!(mountain_type_from_training(Some("recovery")), MountainType::Mixed);
        assert_eq!(mountain_type_from_training(Some("yoga")), MountainType::Endurance);
        assert_eq!(mountain_type_from_training(None), MountainType::Endurance);
    }

    #[test]
    fn test_tag_mapping_prefers_expedition() {
        assert_eq!(
            mountain_type_from_tags(&["ice-climbing", "Everest-2025"]),
            MountainType::Expedition
        );
        assert_eq!(mountain_type_from_tags(&["rock-skills"]), MountainType::Technical);
        assert_eq!(mountain_type_from_tags(&["running"]), MountainType::Endurance);
        assert_eq!(mountain_type_from_tags::<&str>(&[]), MountainType::Endurance);
    }

    #[test]
    fn test_location_mapping() {
        assert_eq!(mountain_type_from_location(Some("Denali West Buttress")), MountainType::Expedition);
        assert_eq!(mountain_type_from_location(Some("Ouray Ice Park")), MountainType::Technical);
        assert_eq!(mountain_type_from_location(Some("Kilimanjaro")), MountainType::Mixed);
        assert_eq!(mountain_type_from_location(None), MountainType::Mixed);
    }

    #[test]
    fn test_content_difficulty_cues() {
        assert_eq!(difficulty_from_content("A basic introduction to knots"), DifficultyLevel::Beginner);
        assert_eq!(difficulty_from_content("Extreme alpine style"), DifficultyLevel::Expert);
        assert_eq!(difficulty_from_content("Complex rope systems"), DifficultyLevel::Advanced);
        assert_eq!(difficulty_from_content("Hydration tips"), DifficultyLevel::Intermediate);
    }

    #[test]
    fn test_equipment_extraction() {
        let tags = vec![
            "Crampons".to_string(),
            "summit-day".to_string(),
            "rope-work".to_string(),
            "avalanche-beacon".to_string(),
        ];

        assert_eq!(
            equipment_from_tags(&tags),
            vec!["Crampons", "rope-work", "avalanche-beacon"]
        );
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("what"));
        assert!(is_stop_word("from"));
        assert!(!is_stop_word("technique"));
    }
}
