//! Scenario catalog - the fixed set of assessment scenarios.
//!
//! The catalog ships embedded in the binary as YAML. It is parsed and
//! validated once on first access; any defect there is fatal.

mod scenario;

pub use scenario::{Choice, ChoiceLetter, Scenario};

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::ScoreVector;

/// Number of scenarios in a complete assessment.
pub const SCENARIO_COUNT: usize = 20;

/// Number of choices every scenario offers.
pub const CHOICES_PER_SCENARIO: usize = 4;

const EMBEDDED_CATALOG: &str = include_str!("../../../data/scenarios.yaml");

static CATALOG: Lazy<ScenarioCatalog> = Lazy::new(|| {
    ScenarioCatalog::from_yaml(EMBEDDED_CATALOG)
        .unwrap_or_else(|e| panic!("embedded scenario catalog is invalid: {}", e))
});

/// Returns the process-wide scenario catalog.
pub fn catalog() -> &'static ScenarioCatalog {
    &CATALOG
}

/// Defects found while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Expected {expected} scenarios, found {actual}")]
    WrongScenarioCount { expected: usize, actual: usize },

    #[error("Scenario '{scenario}' has {actual} choices, expected {expected}")]
    WrongChoiceCount {
        scenario: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate scenario id '{0}'")]
    DuplicateScenarioId(String),

    #[error("Scenario '{scenario}' repeats choice {letter}")]
    DuplicateChoiceLetter { scenario: String, letter: ChoiceLetter },

    #[error("Scenario '{scenario}' is numbered {actual}, expected {expected}")]
    NumberOutOfSequence {
        scenario: String,
        expected: usize,
        actual: u8,
    },

    #[error("Scenario '{scenario}' choice {letter} has invalid scores: {source}")]
    InvalidScores {
        scenario: String,
        letter: ChoiceLetter,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    scenarios: Vec<RawScenario>,
}

#[derive(Debug, Deserialize)]
struct RawScenario {
    id: String,
    number: u8,
    title: String,
    context: String,
    question: String,
    choices: Vec<RawChoice>,
}

#[derive(Debug, Deserialize)]
struct RawChoice {
    letter: ChoiceLetter,
    text: String,
    scores: Vec<u8>,
}

/// Ordered, validated collection of scenarios.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Parses and validates a YAML catalog document.
    ///
    /// Scenarios must be numbered 1..=20 in document order, each with exactly
    /// four distinct choices whose 13 scores lie in `0..=4`.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.scenarios.len() != SCENARIO_COUNT {
            return Err(CatalogError::WrongScenarioCount {
                expected: SCENARIO_COUNT,
                actual: raw.scenarios.len(),
            });
        }

        let mut seen_ids = HashSet::new();
        let mut scenarios = Vec::with_capacity(SCENARIO_COUNT);

        for (position, raw_scenario) in raw.scenarios.into_iter().enumerate() {
            if !seen_ids.insert(raw_scenario.id.clone()) {
                return Err(CatalogError::DuplicateScenarioId(raw_scenario.id));
            }
            if usize::from(raw_scenario.number) != position + 1 {
                return Err(CatalogError::NumberOutOfSequence {
                    scenario: raw_scenario.id,
                    expected: position + 1,
                    actual: raw_scenario.number,
                });
            }
            if raw_scenario.choices.len() != CHOICES_PER_SCENARIO {
                return Err(CatalogError::WrongChoiceCount {
                    scenario: raw_scenario.id,
                    expected: CHOICES_PER_SCENARIO,
                    actual: raw_scenario.choices.len(),
                });
            }

            let mut seen_letters = HashSet::new();
            let mut choices = Vec::with_capacity(CHOICES_PER_SCENARIO);
            for raw_choice in raw_scenario.choices {
                if !seen_letters.insert(raw_choice.letter) {
                    return Err(CatalogError::DuplicateChoiceLetter {
                        scenario: raw_scenario.id,
                        letter: raw_choice.letter,
                    });
                }
                let scores = ScoreVector::try_from(raw_choice.scores).map_err(|source| {
                    CatalogError::InvalidScores {
                        scenario: raw_scenario.id.clone(),
                        letter: raw_choice.letter,
                        source,
                    }
                })?;
                choices.push(Choice {
                    letter: raw_choice.letter,
                    text: raw_choice.text,
                    scores,
                });
            }

            scenarios.push(Scenario {
                id: raw_scenario.id,
                number: raw_scenario.number,
                title: raw_scenario.title,
                context: raw_scenario.context,
                question: raw_scenario.question,
                choices,
            });
        }

        Ok(Self { scenarios })
    }

    /// Looks up a scenario by id.
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Scenario at a 0-based position.
    pub fn at(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    /// Position of a scenario id in catalog order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}
