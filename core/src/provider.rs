//! Word-data providers — etymology, future prediction, cultural idioms.
//!
//! RULES:
//!   - Each provider kind has its own validated document type; the
//!     loosely-typed upstream payloads become a tagged variant here.
//!   - Provider or credential failure degrades to the deterministic
//!     fallback document, never to an error. The reveal, playback and
//!     viewport components only ever see well-formed documents.

use crate::{
    error::{EvoError, EvoResult},
    types::Year,
    waypoint::Waypoint,
};
use serde::{Deserialize, Serialize};

/// One waypoint-shaped record of an etymology document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub language: String,
    pub meaning: String,
    #[serde(default)]
    pub year: Option<Year>,
    #[serde(default)]
    pub location: Option<RecordLocation>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Raw provider coordinates. Validated when converted to a waypoint,
/// not at deserialization time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecordLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Etymology of one word: proto-root, intermediate steps, present form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtymologyDoc {
    pub root: WordRecord,
    pub path: Vec<WordRecord>,
    pub current: WordRecord,
}

impl EtymologyDoc {
    /// Records in root → path → current order. That order is the
    /// tiebreak for equal years downstream.
    pub fn records(&self) -> impl Iterator<Item = &WordRecord> {
        std::iter::once(&self.root)
            .chain(self.path.iter())
            .chain(std::iter::once(&self.current))
    }

    /// Convert to map waypoints. Records without a location are skipped
    /// (they still exist for the sidebar); malformed coordinates are
    /// rejected, never coerced.
    pub fn waypoints(&self) -> EvoResult<Vec<Waypoint>> {
        let mut waypoints = Vec::new();
        for record in self.records() {
            let Some(location) = record.location else {
                continue;
            };
            let mut waypoint = Waypoint::new(location.lat, location.lng)?
                .with_label(record.language.clone())
                .with_word_form(record.word.clone());
            if let Some(year) = record.year {
                waypoint = waypoint.with_year(year);
            }
            if let Some(region) = &record.region {
                waypoint = waypoint.with_region_code(region.clone());
            }
            waypoints.push(waypoint);
        }
        Ok(waypoints)
    }

    /// Earliest year across all records, folded with `present_year`.
    pub fn min_year(&self, present_year: Year) -> Year {
        self.records()
            .filter_map(|r| r.year)
            .fold(present_year, Year::min)
    }
}

/// A single projected future form of a word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDoc {
    pub year: Year,
    pub word: String,
    pub phonetic: String,
    pub context: String,
    pub definition: String,
    pub example: String,
    pub post: String,
}

/// A cultural idiom related to a word, in a given language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdiomDoc {
    pub native_idiom: String,
    /// Absent for Latin-script languages.
    #[serde(default)]
    pub romanized: Option<String>,
    pub literal_meaning: String,
    pub meaning: String,
    pub origin_story: String,
}

/// Every document a provider can answer with, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderDoc {
    Etymology(EtymologyDoc),
    Prediction(PredictionDoc),
    Idiom(IdiomDoc),
}

/// The provider contract. Implementations must not surface transport
/// errors: a failed or unauthenticated call answers with the same shape
/// as live data (see [`FallbackProvider`]).
pub trait WordProvider {
    fn etymology(&self, word: &str) -> EvoResult<EtymologyDoc>;
    fn predict(&self, word: &str, year: Year, context: Option<&str>) -> EvoResult<PredictionDoc>;
    fn idiom(&self, word: &str, language: &str) -> EvoResult<IdiomDoc>;
}

/// Deterministic canned documents, served when no credentials are
/// configured or a live call fails. Same shape as live data — callers
/// cannot tell the difference.
#[derive(Debug, Clone)]
pub struct FallbackProvider {
    present_year: Year,
}

impl FallbackProvider {
    pub fn new(present_year: Year) -> Self {
        Self { present_year }
    }
}

fn require_word(word: &str) -> EvoResult<&str> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(EvoError::EmptyWord);
    }
    Ok(trimmed)
}

impl WordProvider for FallbackProvider {
    fn etymology(&self, word: &str) -> EvoResult<EtymologyDoc> {
        let word = require_word(word)?;
        log::debug!("serving fallback etymology for '{word}'");
        Ok(EtymologyDoc {
            // Pontic-Caspian steppe
            root: WordRecord {
                word: "dhghem".into(),
                language: "Proto-Indo-European".into(),
                meaning: "earth".into(),
                year: Some(-3000),
                location: Some(RecordLocation { lat: 48.0, lng: 35.0 }),
                region: Some("UA".into()),
            },
            path: vec![
                // Rome
                WordRecord {
                    word: "humanus".into(),
                    language: "Latin".into(),
                    meaning: "human".into(),
                    year: Some(100),
                    location: Some(RecordLocation { lat: 41.9, lng: 12.5 }),
                    region: Some("IT".into()),
                },
                // Paris
                WordRecord {
                    word: "humain".into(),
                    language: "Old French".into(),
                    meaning: "human".into(),
                    year: Some(1200),
                    location: Some(RecordLocation { lat: 48.8, lng: 2.3 }),
                    region: Some("FR".into()),
                },
            ],
            // London
            current: WordRecord {
                word: word.into(),
                language: "English".into(),
                meaning: "A member of the species Homo sapiens".into(),
                year: Some(self.present_year),
                location: Some(RecordLocation { lat: 51.5, lng: -0.1 }),
                region: Some("GB".into()),
            },
        })
    }

    fn predict(&self, word: &str, year: Year, context: Option<&str>) -> EvoResult<PredictionDoc> {
        let word = require_word(word)?;
        log::debug!("serving fallback prediction for '{word}' in {year}");
        Ok(PredictionDoc {
            year,
            word: format!("{word}-X"),
            phonetic: format!("/ˈ{word} eks/"),
            context: context.unwrap_or("Technological Integration").into(),
            definition: "A digitally enhanced version of the original concept.".into(),
            example: format!("The {word}-X is now standard in all sectors."),
            post: format!("@future_user: Can't believe we used to use raw {word}. #upgrade #{year}"),
        })
    }

    fn idiom(&self, word: &str, language: &str) -> EvoResult<IdiomDoc> {
        let word = require_word(word)?;
        if language.trim().is_empty() {
            return Err(EvoError::EmptyWord);
        }
        Ok(IdiomDoc {
            native_idiom: format!("Mock Idiom for {word}"),
            romanized: Some("Mokkus Idiomus".into()),
            literal_meaning: "Start of a mock journey".into(),
            meaning: "Every journey begins with a single step, even a mock one.".into(),
            origin_story: "Ancient developer proverb.".into(),
        })
    }
}
