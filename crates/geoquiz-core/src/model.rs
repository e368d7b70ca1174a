//! Core data model types for geoquiz.
//!
//! These are the value types that flow through a quiz session: where the
//! device is, which country that is, what gets asked, and how it went.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numerator of the pass threshold (`correct / total >= 7 / 10`).
pub const PASS_THRESHOLD_NUM: usize = 7;
/// Denominator of the pass threshold.
pub const PASS_THRESHOLD_DEN: usize = 10;

/// A device position, captured once per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// The country a session is bound to.
///
/// Serialized as the plain country name, or `null` when unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Country {
    /// A country name as reported by the reverse geocoder.
    Named(String),
    /// The geocoder answered but did not name a country.
    Unresolved,
}

impl Country {
    pub fn named(name: impl Into<String>) -> Self {
        Country::Named(name.into())
    }

    /// The catalog key for this country, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Country::Named(name) => Some(name),
            Country::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Country::Named(_))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Country::Named(name) => write!(f, "{name}"),
            Country::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// A missing or empty name is unresolved.
impl From<Option<String>> for Country {
    fn from(name: Option<String>) -> Self {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => Country::Named(name),
            None => Country::Unresolved,
        }
    }
}

impl From<Country> for Option<String> {
    fn from(country: Country) -> Self {
        match country {
            Country::Named(name) => Some(name),
            Country::Unresolved => None,
        }
    }
}

/// A single catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The text shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,
    /// The expected free-text answer.
    #[serde(rename = "answer")]
    pub expected_answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }
}

/// Whether the user granted access to their location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
}

/// The part of a reverse-geocoding answer geoquiz cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// The outcome of scoring an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total_count: usize,
    /// Questions answered incorrectly, in catalog order.
    pub missed: Vec<Question>,
}

impl ScoreResult {
    /// Fraction of questions answered correctly; `0.0` for an empty set.
    pub fn ratio(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.correct_count as f64 / self.total_count as f64
    }

    /// Classify against the pass threshold. Compared in integer arithmetic
    /// so that exactly 70% is a pass.
    pub fn verdict(&self) -> Verdict {
        if self.total_count > 0
            && self.correct_count * PASS_THRESHOLD_DEN >= self.total_count * PASS_THRESHOLD_NUM
        {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict() == Verdict::Pass
    }
}

/// Pass/fail classification of a [`ScoreResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}
