//! Closed demographic enumerations produced by the detection pipeline
//!
//! Every demographic field of a detection record draws from one of these
//! fixed sets. Each enum exposes its complete member list via `ALL` so
//! aggregation can stay total over the set, the wire value via `as_str`,
//! and a display label for chart legends and filter dropdowns.
//!
//! The derived `Ord` follows declaration order, which makes `BTreeMap`s
//! keyed by these enums iterate in declaration order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Raised when a wire value does not belong to its declared set.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownEnumValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownEnumValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Detected gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The value as the backend sends it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Display label ("Male", "Female").
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(UnknownEnumValue::new("gender", other)),
        }
    }
}

/// Detected age bracket, ordered youngest to oldest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-18")]
    ZeroToEighteen,
    #[serde(rename = "19-30")]
    NineteenToThirty,
    #[serde(rename = "31-45")]
    ThirtyOneToFortyFive,
    #[serde(rename = "46-60")]
    FortySixToSixty,
    #[serde(rename = "60+")]
    SixtyPlus,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::ZeroToEighteen,
        AgeGroup::NineteenToThirty,
        AgeGroup::ThirtyOneToFortyFive,
        AgeGroup::FortySixToSixty,
        AgeGroup::SixtyPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::ZeroToEighteen => "0-18",
            AgeGroup::NineteenToThirty => "19-30",
            AgeGroup::ThirtyOneToFortyFive => "31-45",
            AgeGroup::FortySixToSixty => "46-60",
            AgeGroup::SixtyPlus => "60+",
        }
    }

    /// Display label; age brackets are shown as their wire value.
    pub fn label(&self) -> String {
        self.as_str().to_string()
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-18" => Ok(AgeGroup::ZeroToEighteen),
            "19-30" => Ok(AgeGroup::NineteenToThirty),
            "31-45" => Ok(AgeGroup::ThirtyOneToFortyFive),
            "46-60" => Ok(AgeGroup::FortySixToSixty),
            "60+" => Ok(AgeGroup::SixtyPlus),
            other => Err(UnknownEnumValue::new("age", other)),
        }
    }
}

/// Detected facial emotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }

    /// Display label ("Happy", "Neutral", ...).
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "angry" => Ok(Emotion::Angry),
            "fear" => Ok(Emotion::Fear),
            "surprise" => Ok(Emotion::Surprise),
            "neutral" => Ok(Emotion::Neutral),
            other => Err(UnknownEnumValue::new("emotion", other)),
        }
    }
}

/// Detected ethnic group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ethnicity {
    White,
    Black,
    Asian,
    Hispanic,
    MiddleEastern,
    Other,
}

impl Ethnicity {
    pub const ALL: [Ethnicity; 6] = [
        Ethnicity::White,
        Ethnicity::Black,
        Ethnicity::Asian,
        Ethnicity::Hispanic,
        Ethnicity::MiddleEastern,
        Ethnicity::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ethnicity::White => "white",
            Ethnicity::Black => "black",
            Ethnicity::Asian => "asian",
            Ethnicity::Hispanic => "hispanic",
            Ethnicity::MiddleEastern => "middle_eastern",
            Ethnicity::Other => "other",
        }
    }

    /// Display label; underscore-separated values become capitalized
    /// words ("Middle Eastern").
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ethnicity {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Ethnicity::White),
            "black" => Ok(Ethnicity::Black),
            "asian" => Ok(Ethnicity::Asian),
            "hispanic" => Ok(Ethnicity::Hispanic),
            "middle_eastern" => Ok(Ethnicity::MiddleEastern),
            "other" => Ok(Ethnicity::Other),
            other => Err(UnknownEnumValue::new("ethnicity", other)),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_wire_round_trip() {
        let json = serde_json::to_string(&Gender::Male).unwrap();
        assert_eq!(json, "\"male\"");

        let parsed: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, Gender::Female);
    }

    #[test]
    fn test_age_group_wire_values() {
        for age in AgeGroup::ALL {
            let json = serde_json::to_string(&age).unwrap();
            assert_eq!(json, format!("\"{}\"", age.as_str()));

            let parsed: AgeGroup = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, age);
        }
    }

    #[test]
    fn test_from_str_matches_as_str() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>().unwrap(), emotion);
        }
        for ethnicity in Ethnicity::ALL {
            assert_eq!(ethnicity.as_str().parse::<Ethnicity>().unwrap(), ethnicity);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "unknown".parse::<Gender>().unwrap_err();
        assert_eq!(format!("{}", err), "unknown gender value: 'unknown'");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Gender::Male.label(), "Male");
        assert_eq!(Emotion::Surprise.label(), "Surprise");
        assert_eq!(AgeGroup::SixtyPlus.label(), "60+");
        assert_eq!(Ethnicity::MiddleEastern.label(), "Middle Eastern");
        assert_eq!(Ethnicity::White.label(), "White");
    }

    #[test]
    fn test_ord_follows_declaration_order() {
        // BTreeMaps keyed by these enums rely on this.
        assert!(AgeGroup::ZeroToEighteen < AgeGroup::SixtyPlus);
        assert!(Gender::Male < Gender::Female);

        let mut sorted = AgeGroup::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, AgeGroup::ALL.to_vec());
    }
}
