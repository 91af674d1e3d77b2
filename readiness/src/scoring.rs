//! Turning responses into an [`AssessmentResult`].

use readiness_types::{
    AssessmentResult, Category, Dimension, Recommendation, ResponseValue, Responses, WiscarScores,
};
use tracing::{debug, info, warn};

use crate::bank::{ALTERNATIVE_PATHS, INSIGHTS, NEXT_STEPS};
use crate::config::{ChoiceScoring, ScoringConfig, WiscarScoring};

/// Compute the result for a set of responses.
///
/// Pure apart from logging: the same responses and config always give the
/// same result. Responses are grouped by question id prefix, so questions
/// outside the known prefixes are ignored.
pub fn score(responses: &Responses, config: &ScoringConfig) -> AssessmentResult {
    let psychometric_score = category_score(responses, Category::Psychometric, config);
    let technical_score = category_score(responses, Category::Technical, config);
    let wiscar_scores = wiscar_scores(responses, config);

    let overall_score = (psychometric_score + technical_score + wiscar_scores.mean()) / 3.0;
    let recommendation = recommend(overall_score, config);
    let confidence_score = confidence(overall_score, config);

    info!(
        psychometric = psychometric_score,
        technical = technical_score,
        overall = overall_score,
        %recommendation,
        "assessment scored"
    );

    AssessmentResult {
        psychometric_score,
        technical_score,
        wiscar_scores,
        overall_score,
        recommendation,
        insights: INSIGHTS.iter().map(ToString::to_string).collect(),
        next_steps: NEXT_STEPS.iter().map(ToString::to_string).collect(),
        alternative_paths: ALTERNATIVE_PATHS.iter().map(ToString::to_string).collect(),
        confidence_score,
    }
}

/// Mean answer of all responses whose id starts with `prefix`, scaled to a
/// percentage.
///
/// Returns `None` when no response counts toward the mean.
pub fn prefix_score(responses: &Responses, prefix: &str, config: &ScoringConfig) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for response in responses.with_prefix(prefix) {
        match (&response.value, config.choice_scoring) {
            (ResponseValue::Scale(v), _) => {
                sum += *v as f64;
                count += 1;
            }
            (ResponseValue::Choice(_), ChoiceScoring::Zero) => count += 1,
            (ResponseValue::Choice(_), ChoiceScoring::Exclude) => {}
        }
    }
    if count == 0 {
        return None;
    }
    Some(sum / count as f64 * config.scale_factor)
}

fn category_score(responses: &Responses, category: Category, config: &ScoringConfig) -> f64 {
    prefix_score(responses, category.id_prefix(), config).unwrap_or_else(|| {
        warn!(%category, "no scorable responses, scoring section as 0");
        0.0
    })
}

/// The six dimension scores according to `config.wiscar`.
pub fn wiscar_scores(responses: &Responses, config: &ScoringConfig) -> WiscarScores {
    match config.wiscar {
        WiscarScoring::Baseline => {
            debug!("WISCAR dimensions use the fixed baseline, answers are not scored");
            WiscarScores::BASELINE
        }
        WiscarScoring::Fixed(scores) => scores,
        WiscarScoring::Derived => {
            let mut scores = WiscarScores::BASELINE;
            for dimension in Dimension::ALL {
                match prefix_score(responses, dimension.id_prefix(), config) {
                    Some(value) => scores.set(dimension, value),
                    None => debug!(?dimension, "no scorable answers, keeping baseline"),
                }
            }
            scores
        }
    }
}

/// Map an overall score onto the three-way verdict.
pub fn recommend(overall: f64, config: &ScoringConfig) -> Recommendation {
    if overall >= config.yes_threshold {
        Recommendation::Yes
    } else if overall < config.no_threshold {
        Recommendation::No
    } else {
        Recommendation::Maybe
    }
}

/// Overall score plus the bonus, capped. There is no lower bound.
pub fn confidence(overall: f64, config: &ScoringConfig) -> f64 {
    (overall + config.confidence_bonus).min(config.confidence_cap)
}
