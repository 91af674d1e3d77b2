use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Dimension;

/// Coarse verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::No => "no",
        })
    }
}

/// Percentages for the six WISCAR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability: f64,
    pub real_world: f64,
}

impl WiscarScores {
    /// The fixed dimension scores every assessment has reported so far.
    ///
    /// These do not depend on any answer. They remain the default until the
    /// derived mode has been calibrated.
    pub const BASELINE: WiscarScores = WiscarScores {
        will: 75.0,
        interest: 82.0,
        skill: 68.0,
        cognitive: 78.0,
        ability: 85.0,
        real_world: 72.0,
    };

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        let slot = match dimension {
            Dimension::Will => &mut self.will,
            Dimension::Interest => &mut self.interest,
            Dimension::Skill => &mut self.skill,
            Dimension::Cognitive => &mut self.cognitive,
            Dimension::Ability => &mut self.ability,
            Dimension::RealWorld => &mut self.real_world,
        };
        *slot = value;
    }

    /// Unweighted mean of all six dimensions.
    pub fn mean(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum::<f64>() / Dimension::ALL.len() as f64
    }

    /// Dimension/score pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

impl Default for WiscarScores {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// The score summary computed when the assessment reaches its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub psychometric_score: f64,
    pub technical_score: f64,
    pub wiscar_scores: WiscarScores,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    pub alternative_paths: Vec<String>,
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_mean() {
        let mean = WiscarScores::BASELINE.mean();
        assert!((mean - 460.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn set_and_get() {
        let mut scores = WiscarScores::default();
        scores.set(Dimension::RealWorld, 40.0);
        assert_eq!(scores.get(Dimension::RealWorld), 40.0);
        assert_eq!(scores.get(Dimension::Will), 75.0);
    }

    #[test]
    fn recommendation_serializes_lowercase() {
        let json = serde_json::to_string(&Recommendation::Maybe).unwrap();
        assert_eq!(json, "\"maybe\"");
    }
}
