use serde::{Deserialize, Serialize};

use crate::{Category, QuestionId, ResponseValue, ValidationError};

/// A single question in the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, prefixed with the category prefix.
    id: QuestionId,

    /// The prompt text shown to the user.
    text: String,

    /// The kind of answer expected.
    kind: AnswerKind,

    /// The section this question belongs to.
    category: Category,

    /// Free-form grouping label within the category (e.g. "motivation", "will").
    subcategory: String,

    /// Relative weight. Not used by scoring yet.
    weight: f64,
}

impl Question {
    /// Create a new question with weight 1.0.
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        kind: AnswerKind,
        category: Category,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            category,
            subcategory: subcategory.into(),
            weight: 1.0,
        }
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Get the identifier.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the answer kind.
    pub fn kind(&self) -> &AnswerKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The scenario narrative, for scenario questions.
    pub fn scenario(&self) -> Option<&str> {
        match &self.kind {
            AnswerKind::Scenario { scenario, .. } => Some(scenario),
            _ => None,
        }
    }

    /// The labels a user picks from, in display order.
    ///
    /// For scale questions these are the scale labels, one per point.
    pub fn option_labels(&self) -> &[String] {
        match &self.kind {
            AnswerKind::Scale(scale) => &scale.labels,
            AnswerKind::SingleChoice { options } | AnswerKind::Scenario { options, .. } => options,
        }
    }

    /// The value recorded when the user picks the option at `index`.
    pub fn value_for_option(&self, index: usize) -> Option<ResponseValue> {
        match &self.kind {
            AnswerKind::Scale(scale) => {
                let value = scale.min.checked_add(i64::try_from(index).ok()?)?;
                (value <= scale.max).then_some(ResponseValue::Scale(value))
            }
            AnswerKind::SingleChoice { options } | AnswerKind::Scenario { options, .. } => options
                .get(index)
                .map(|label| ResponseValue::Choice(label.clone())),
        }
    }

    /// The option index a recorded value corresponds to, if any.
    pub fn option_index(&self, value: &ResponseValue) -> Option<usize> {
        match (&self.kind, value) {
            (AnswerKind::Scale(scale), ResponseValue::Scale(v)) if scale.contains(*v) => {
                usize::try_from(v.checked_sub(scale.min)?).ok()
            }
            (
                AnswerKind::SingleChoice { options } | AnswerKind::Scenario { options, .. },
                ResponseValue::Choice(label),
            ) => options.iter().position(|o| o == label),
            _ => None,
        }
    }

    /// Check that `value` is an acceptable answer to this question.
    pub fn validate(&self, value: &ResponseValue) -> Result<(), ValidationError> {
        match (&self.kind, value) {
            (AnswerKind::Scale(scale), ResponseValue::Scale(v)) => {
                if !scale.contains(*v) {
                    return Err(ValidationError::ScaleOutOfRange {
                        id: self.id.clone(),
                        min: scale.min,
                        max: scale.max,
                        value: *v,
                    });
                }
            }
            (
                AnswerKind::SingleChoice { options } | AnswerKind::Scenario { options, .. },
                ResponseValue::Choice(label),
            ) => {
                if !options.contains(label) {
                    return Err(ValidationError::UnknownChoice {
                        id: self.id.clone(),
                        value: label.clone(),
                    });
                }
            }
            (kind, value) => {
                return Err(ValidationError::InvalidAnswerType {
                    id: self.id.clone(),
                    expected: kind.expected_value(),
                    actual: value.type_name(),
                });
            }
        }
        Ok(())
    }
}

/// The kind of answer a question expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AnswerKind {
    /// Pick a point on an integer scale.
    Scale(ScaleDescriptor),

    /// Pick one of the listed options.
    SingleChoice { options: Vec<String> },

    /// Read a short scenario, then pick one of the listed options.
    Scenario {
        scenario: String,
        options: Vec<String>,
    },
}

impl AnswerKind {
    /// Build a single-choice kind from any list of labels.
    pub fn single_choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SingleChoice {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a scenario kind from a narrative and any list of labels.
    pub fn scenario<I, S>(scenario: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scenario {
            scenario: scenario.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether answers to this kind are numeric.
    pub fn is_scale(&self) -> bool {
        matches!(self, Self::Scale(_))
    }

    fn expected_value(&self) -> &'static str {
        match self {
            Self::Scale(_) => "scale",
            Self::SingleChoice { .. } | Self::Scenario { .. } => "choice",
        }
    }
}

/// An inclusive integer scale with one label per point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDescriptor {
    pub min: i64,
    pub max: i64,
    pub labels: Vec<String>,
}

impl ScaleDescriptor {
    /// Create a scale from explicit bounds and labels.
    pub fn new<I, S>(min: i64, max: i64, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            min,
            max,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// A five point 1..=5 scale.
    pub fn five_point<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(1, 5, labels)
    }

    /// The standard agreement scale.
    pub fn agreement() -> Self {
        Self::five_point([
            "Strongly Disagree",
            "Disagree",
            "Neutral",
            "Agree",
            "Strongly Agree",
        ])
    }

    /// Whether `value` lies within the scale.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of points on the scale.
    pub fn points(&self) -> usize {
        self.max
            .checked_sub(self.min)
            .and_then(|span| span.checked_add(1))
            .and_then(|points| usize::try_from(points).ok())
            .unwrap_or(0)
    }

    /// Whether there is exactly one label per point.
    pub fn labels_cover_range(&self) -> bool {
        self.labels.len() == self.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_question() -> Question {
        Question::new(
            "psych_01",
            "I enjoy helping others.",
            AnswerKind::Scale(ScaleDescriptor::agreement()),
            Category::Psychometric,
            "motivation",
        )
    }

    fn choice_question() -> Question {
        Question::new(
            "tech_01",
            "A primary stakeholder is someone who:",
            AnswerKind::single_choice(["Has authority", "Is directly affected"]),
            Category::Technical,
            "knowledge",
        )
    }

    #[test]
    fn scale_bounds() {
        let q = scale_question();
        assert!(q.validate(&ResponseValue::Scale(1)).is_ok());
        assert!(q.validate(&ResponseValue::Scale(5)).is_ok());

        let Err(ValidationError::ScaleOutOfRange { min, max, value, .. }) =
            q.validate(&ResponseValue::Scale(6))
        else {
            panic!("expected ScaleOutOfRange error");
        };
        assert_eq!((min, max, value), (1, 5, 6));
    }

    #[test]
    fn expected_type() {
        let Err(ValidationError::InvalidAnswerType {
            expected, actual, ..
        }) = scale_question().validate(&ResponseValue::from("Agree"))
        else {
            panic!("expected InvalidAnswerType error");
        };
        assert_eq!(expected, "scale");
        assert_eq!(actual, "choice");
    }

    #[test]
    fn unknown_choice() {
        let q = choice_question();
        assert!(q.validate(&"Is directly affected".into()).is_ok());
        assert!(matches!(
            q.validate(&"Pays the bills".into()),
            Err(ValidationError::UnknownChoice { .. })
        ));
    }

    #[test]
    fn options_map_to_values() {
        let q = scale_question();
        assert_eq!(q.option_labels().len(), 5);
        assert_eq!(q.value_for_option(0), Some(ResponseValue::Scale(1)));
        assert_eq!(q.value_for_option(4), Some(ResponseValue::Scale(5)));
        assert_eq!(q.value_for_option(5), None);
        assert_eq!(q.option_index(&ResponseValue::Scale(3)), Some(2));

        let q = choice_question();
        assert_eq!(
            q.value_for_option(1),
            Some(ResponseValue::Choice("Is directly affected".to_string()))
        );
        assert_eq!(q.option_index(&"Has authority".into()), Some(0));
        assert_eq!(q.option_index(&ResponseValue::Scale(1)), None);
    }

    #[test]
    fn agreement_scale_is_fully_labelled() {
        let scale = ScaleDescriptor::agreement();
        assert_eq!(scale.points(), 5);
        assert!(scale.labels_cover_range());
    }

    #[test]
    fn huge_indices_and_spans_do_not_overflow() {
        let q = scale_question();
        assert_eq!(q.value_for_option(i64::MAX as usize), None);
        assert_eq!(q.value_for_option(usize::MAX), None);

        let wide = ScaleDescriptor::new(i64::MIN, i64::MAX, ["low", "high"]);
        assert_eq!(wide.points(), 0);
        assert!(!wide.labels_cover_range());

        let q = Question::new(
            "psych_02",
            "Wide scale",
            AnswerKind::Scale(ScaleDescriptor::new(i64::MAX - 1, i64::MAX, ["a", "b"])),
            Category::Psychometric,
            "motivation",
        );
        assert_eq!(q.value_for_option(1), Some(ResponseValue::Scale(i64::MAX)));
        assert_eq!(q.value_for_option(2), None);
        assert_eq!(q.option_index(&ResponseValue::Scale(i64::MAX)), Some(1));
    }
}
