use serde::{Deserialize, Serialize};

/// A single answer value.
///
/// Scale questions produce `Scale`, choice and scenario questions produce the
/// selected option label as `Choice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// A selected point on an integer scale.
    Scale(i64),

    /// The label of the selected option.
    Choice(String),
}

impl ResponseValue {
    /// Try to get this value as a scale selection.
    pub fn as_scale(&self) -> Option<i64> {
        match self {
            Self::Scale(v) => Some(*v),
            Self::Choice(_) => None,
        }
    }

    /// Try to get this value as a choice label.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(s) => Some(s),
            Self::Scale(_) => None,
        }
    }

    /// Whether this value is numeric and can be averaged.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Scale(_))
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scale(_) => "scale",
            Self::Choice(_) => "choice",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Choice(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Choice(s.to_string())
    }
}

impl From<i64> for ResponseValue {
    fn from(i: i64) -> Self {
        Self::Scale(i)
    }
}

impl From<i32> for ResponseValue {
    fn from(i: i32) -> Self {
        Self::Scale(i64::from(i))
    }
}

impl From<u8> for ResponseValue {
    fn from(i: u8) -> Self {
        Self::Scale(i64::from(i))
    }
}
