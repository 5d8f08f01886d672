//! Scenario and choice value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::ScoreVector;

/// Identifier of one of the four answers to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChoiceLetter {
    A,
    B,
    C,
    D,
}

impl ChoiceLetter {
    /// All letters in presentation order.
    pub const ALL: [ChoiceLetter; 4] =
        [ChoiceLetter::A, ChoiceLetter::B, ChoiceLetter::C, ChoiceLetter::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceLetter::A => "A",
            ChoiceLetter::B => "B",
            ChoiceLetter::C => "C",
            ChoiceLetter::D => "D",
        }
    }
}

impl fmt::Display for ChoiceLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChoiceLetter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(ChoiceLetter::A),
            "B" | "b" => Ok(ChoiceLetter::B),
            "C" | "c" => Ok(ChoiceLetter::C),
            "D" | "d" => Ok(ChoiceLetter::D),
            other => Err(ValidationError::invalid_format(
                "choice",
                format!("expected one of A, B, C, D, got '{}'", other),
            )),
        }
    }
}

/// One answer option and the scores it awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub letter: ChoiceLetter,
    pub text: String,
    pub scores: ScoreVector,
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub number: u8,
    pub title: String,
    pub context: String,
    pub question: String,
    pub choices: Vec<Choice>,
}

impl Scenario {
    /// Finds a choice by letter.
    pub fn choice(&self, letter: ChoiceLetter) -> Option<&Choice> {
        self.choices.iter().find(|c| c.letter == letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_parse_case_insensitively() {
        assert_eq!("A".parse::<ChoiceLetter>().unwrap(), ChoiceLetter::A);
        assert_eq!("d".parse::<ChoiceLetter>().unwrap(), ChoiceLetter::D);
        assert!("E".parse::<ChoiceLetter>().is_err());
        assert!("".parse::<ChoiceLetter>().is_err());
    }

    #[test]
    fn letter_displays_as_single_character() {
        assert_eq!(ChoiceLetter::C.to_string(), "C");
        assert_eq!(serde_json::to_string(&ChoiceLetter::B).unwrap(), "\"B\"");
    }

    #[test]
    fn choice_lookup_by_letter() {
        let scenario = Scenario {
            id: "scenario-x".to_string(),
            number: 1,
            title: "t".to_string(),
            context: "c".to_string(),
            question: "q".to_string(),
            choices: vec![Choice {
                letter: ChoiceLetter::B,
                text: "b".to_string(),
                scores: ScoreVector::zero(),
            }],
        };

        assert!(scenario.choice(ChoiceLetter::B).is_some());
        assert!(scenario.choice(ChoiceLetter::A).is_none());
    }
}
