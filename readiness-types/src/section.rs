use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the user currently is in the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Intro,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl Section {
    /// The section that follows this one in the fixed order.
    ///
    /// `Results` is terminal and returns itself.
    pub fn next(self) -> Self {
        match self {
            Self::Intro => Self::Psychometric,
            Self::Psychometric => Self::Technical,
            Self::Technical => Self::Wiscar,
            Self::Wiscar | Self::Results => Self::Results,
        }
    }

    /// The question category shown in this section, if it has questions.
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Psychometric => Some(Category::Psychometric),
            Self::Technical => Some(Category::Technical),
            Self::Wiscar => Some(Category::Wiscar),
            Self::Intro | Self::Results => None,
        }
    }

    /// Whether this section presents questions.
    pub fn has_questions(self) -> bool {
        self.category().is_some()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Intro => "intro",
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

/// The category a question belongs to. Each category is one question section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    /// All categories in section order.
    pub const ALL: [Category; 3] = [Self::Psychometric, Self::Technical, Self::Wiscar];

    /// The identifier prefix shared by all questions of this category.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Psychometric => "psych_",
            Self::Technical => "tech_",
            Self::Wiscar => "wiscar_",
        }
    }

    /// The section presenting this category.
    pub fn section(self) -> Section {
        match self {
            Self::Psychometric => Section::Psychometric,
            Self::Technical => Section::Technical,
            Self::Wiscar => Section::Wiscar,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.section().fmt(f)
    }
}

/// One of the six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Self::Will,
        Self::Interest,
        Self::Skill,
        Self::Cognitive,
        Self::Ability,
        Self::RealWorld,
    ];

    /// The identifier prefix of questions measuring this dimension.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Will => "wiscar_will_",
            Self::Interest => "wiscar_interest_",
            Self::Skill => "wiscar_skill_",
            Self::Cognitive => "wiscar_cognitive_",
            Self::Ability => "wiscar_ability_",
            Self::RealWorld => "wiscar_real_",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Will => "Will (Motivation)",
            Self::Interest => "Interest (Passion)",
            Self::Skill => "Skill (Current Ability)",
            Self::Cognitive => "Cognitive (Thinking)",
            Self::Ability => "Ability (Learning)",
            Self::RealWorld => "Real-World Fit",
        }
    }
}
