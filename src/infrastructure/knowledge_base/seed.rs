//! Baseline coaching documents every store starts from

use async_trait::async_trait;

use crate::domain::ingestion::{DocumentSource, RecordKind, SourceRecord};
use crate::domain::knowledge_base::{
    slugify, DifficultyLevel, DocumentDraft, DocumentMetadata, MountainType,
};
use crate::domain::DomainError;

struct BaselineDocument {
    title: &'static str,
    content: &'static str,
    category: &'static str,
    source: &'static str,
    difficulty: DifficultyLevel,
    mountain_type: MountainType,
    skills: &'static [&'static str],
    equipment: &'static [&'static str],
    conditions: &'static [&'static str],
    tags: &'static [&'static str],
}

impl BaselineDocument {
    fn to_draft(&self) -> Result<DocumentDraft, DomainError> {
        let metadata = DocumentMetadata::new()
            .with_difficulty(self.difficulty)
            .with_mountain_type(self.mountain_type)
            .with_skills(self.skills.iter().copied())
            .with_equipment(self.equipment.iter().copied())
            .with_conditions(self.conditions.iter().copied())
            .with_tags(self.tags.iter().copied());

        Ok(DocumentDraft::new(self.title, self.content, self.category, self.source)?
            .with_metadata(metadata))
    }
}

const BASELINE: &[BaselineDocument] = &[
    BaselineDocument {
        title: "High-Altitude Acclimatization Protocol",
        content: "Proper acclimatization is crucial for high-altitude mountaineering success. \
Above 3000m, gain no more than 300-500m of sleeping elevation per day.

Key principles:
1. Climb high, sleep low: ascend during the day, descend to sleep lower
2. Take a rest day every 3-4 days of ascent
3. Drink 3-4 liters of water per day
4. Recognize the symptoms of AMS, HACE and HAPE
5. Discuss acclimatization medication such as Diamox with the expedition physician

Timelines for major peaks:
- Everest: 6-8 weeks in total, with 3 rotations to higher camps
- Denali: 2-3 weeks with multiple carries to higher camps
- Technical peaks: 1-2 weeks depending on approach and complexity",
        category: "Training",
        source: "Training Manual",
        difficulty: DifficultyLevel::Intermediate,
        mountain_type: MountainType::Expedition,
        skills: &["acclimatization", "altitude", "physiology"],
        equipment: &[],
        conditions: &["high-altitude", "expedition"],
        tags: &["acclimatization", "altitude-sickness", "expedition-planning"],
    },
    BaselineDocument {
        title: "Technical Ice Climbing Progression",
        content: "Ice climbing progression should move systematically from easy water ice to \
demanding mixed routes.

Grade progression:
- WI2-WI3: low-angle water ice, basic ice axe and crampon technique
- WI4: vertical ice, advanced placement technique, efficient movement
- WI5: sustained vertical ice, chandelier ice, complex route finding
- WI6+: overhanging ice, thin conditions, extreme difficulty

Essential techniques:
1. Swing from the shoulder, relaxed and controlled
2. Choose between front-pointing and flat-footing with the crampons
3. Seat ice tools with solid sticks in good ice
4. Keep the body close to the ice and load the skeleton
5. Read the route to find good ice and avoid hazards

Training progression:
- Start on top-rope at local crags
- Move on to easy multi-pitch routes
- Build endurance on long routes
- Practice self-rescue and anchor building",
        category: "Technical Skills",
        source: "Ice Climbing Guide",
        difficulty: DifficultyLevel::Intermediate,
        mountain_type: MountainType::Technical,
        skills: &["ice-climbing", "technical-skills", "equipment"],
        equipment: &["ice-axes", "crampons", "ice-screws"],
        conditions: &["ice", "winter", "alpine"],
        tags: &["ice-climbing", "technical-progression", "safety"],
    },
    BaselineDocument {
        title: "Expedition Fitness Training Protocol",
        content: "Expedition fitness combines cardiovascular endurance, strength and mental \
resilience over a six month preparation.

Training phases:
1. Base building (months 1-2): aerobic base, general strength
2. Strength phase (months 3-4): weighted carries, specific strength
3. Peak phase (months 5-6): sport-specific work, then taper

Cardiovascular training:
- 4-6 sessions per week
- Zone 2 for 70-80% of volume at conversational pace
- A weekly long day of 4-8 hours hiking with a pack
- Interval sessions for VO2 max and threshold

Strength training:
- 2-3 sessions per week
- Functional movements: squats, deadlifts, step-ups
- Weighted carries building to 20-30% of body weight
- Core stability and injury prevention",
        category: "Training",
        source: "Expedition Training Manual",
        difficulty: DifficultyLevel::Intermediate,
        mountain_type: MountainType::Expedition,
        skills: &["fitness", "endurance", "strength"],
        equipment: &[],
        conditions: &["expedition", "long-duration"],
        tags: &["fitness-training", "expedition-prep", "periodization"],
    },
    BaselineDocument {
        title: "Avalanche Risk Assessment and Mitigation",
        content: "Avalanche safety is critical for backcountry and alpine climbing. Read the \
snowpack and the terrain before committing.

Avalanche triangle:
1. Snowpack: recent snow, wind-loaded slopes, temperature changes
2. Weather: wind, temperature, precipitation
3. Terrain: slope angle (30-45° is the most dangerous), aspect, elevation

Red flags:
- Recent avalanche activity
- Shooting cracks or hollow sounds in the snow
- Rapid warming or rain
- More than 30cm of snowfall in 24 hours
- Strong winds loading slopes

Mitigation:
- Check the avalanche forecast daily
- Carry beacon, probe and shovel
- Cross exposed terrain one at a time
- Choose conservative routes and timing
- Practice rescue scenarios regularly
- Turn back early when conditions deteriorate",
        category: "Safety",
        source: "Avalanche Safety Manual",
        difficulty: DifficultyLevel::Advanced,
        mountain_type: MountainType::Mixed,
        skills: &["avalanche-safety", "risk-assessment", "rescue"],
        equipment: &["avalanche-beacon", "probe", "shovel"],
        conditions: &["snow", "winter", "avalanche-terrain"],
        tags: &["avalanche-safety", "risk-management", "backcountry"],
    },
    BaselineDocument {
        title: "High-Altitude Nutrition and Hydration",
        content: "Nutrition and hydration at altitude drive both performance and safety. \
Appetite drops while metabolic demand rises, so intake has to be planned.

Caloric needs:
- Sea level: 2000-3000 calories per day
- 3000-5000m: 3500-4500 calories per day
- Above 5000m: 4500-6000+ calories per day
- Extreme cold adds 300-500 calories per day

Macronutrients:
- Carbohydrates 60-65%, easily digestible
- Fats 20-25% for calorie density
- Protein 15-20% for muscle maintenance

Hydration:
- At least 3-4 liters per day at altitude
- More with activity and cold exposure
- Urine should stay pale yellow
- Replace electrolytes on long efforts

Practical strategies:
- Pre-hydrate before ascent days
- Eat small, frequent meals of familiar food
- Pack high-calorie, low-bulk food and something for morale",
        category: "Nutrition",
        source: "High-Altitude Medicine",
        difficulty: DifficultyLevel::Beginner,
        mountain_type: MountainType::Expedition,
        skills: &["nutrition", "hydration", "physiology"],
        equipment: &[],
        conditions: &["high-altitude", "expedition", "cold"],
        tags: &["nutrition", "hydration", "altitude-physiology"],
    },
];

/// Drafts for the baseline coaching documents
pub fn baseline_drafts() -> Result<Vec<DocumentDraft>, DomainError> {
    BASELINE.iter().map(BaselineDocument::to_draft).collect()
}

/// Source yielding the baseline documents
#[derive(Debug, Clone, Default)]
pub struct BaselineSource;

impl BaselineSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentSource for BaselineSource {
    fn name(&self) -> &str {
        "baseline"
    }

    async fn load(&self) -> Result<Vec<SourceRecord>, DomainError> {
        Ok(BASELINE
            .iter()
            .map(|document| {
                SourceRecord::new(RecordKind::Baseline, slugify(document.title), document.to_draft())
            })
            .collect())
    }
}
