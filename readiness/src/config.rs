//! Scoring configuration.

use readiness_types::WiscarScores;

/// How choice answers count in the numeric section averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoiceScoring {
    /// A choice answer adds zero to the sum but still counts toward the
    /// number of answers. This pulls mixed sections down.
    #[default]
    Zero,

    /// Choice answers are left out of both sum and count.
    Exclude,
}

/// Where the six WISCAR dimension scores come from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WiscarScoring {
    /// Report the given constant scores regardless of answers.
    Fixed(WiscarScores),

    /// Average each dimension's own answers. A dimension without scorable
    /// answers keeps its baseline value.
    Derived,

    /// Same as `Fixed(WiscarScores::BASELINE)`.
    #[default]
    Baseline,
}

/// Constants and policies used by [`crate::score`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Multiplier mapping a mean scale answer onto 0..=100.
    pub scale_factor: f64,

    /// Overall score at or above which the recommendation is `yes`.
    pub yes_threshold: f64,

    /// Overall score below which the recommendation is `no`.
    pub no_threshold: f64,

    /// Added to the overall score to get the confidence.
    pub confidence_bonus: f64,

    /// Upper bound of the confidence.
    pub confidence_cap: f64,

    pub choice_scoring: ChoiceScoring,

    pub wiscar: WiscarScoring,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            scale_factor: 20.0,
            yes_threshold: 75.0,
            no_threshold: 50.0,
            confidence_bonus: 10.0,
            confidence_cap: 95.0,
            choice_scoring: ChoiceScoring::default(),
            wiscar: WiscarScoring::default(),
        }
    }
}

impl ScoringConfig {
    /// Set the choice answer policy.
    pub fn with_choice_scoring(mut self, policy: ChoiceScoring) -> Self {
        self.choice_scoring = policy;
        self
    }

    /// Set the WISCAR source.
    pub fn with_wiscar(mut self, wiscar: WiscarScoring) -> Self {
        self.wiscar = wiscar;
        self
    }

    /// Set the recommendation thresholds.
    pub fn with_thresholds(mut self, yes: f64, no: f64) -> Self {
        self.yes_threshold = yes;
        self.no_threshold = no;
        self
    }
}
