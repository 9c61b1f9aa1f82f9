// ABOUTME: Domain types shared by the Freelink client packages
// ABOUTME: Users, seekers, search criteria and raw registration form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account type of an authenticated principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Freelancer offering services
    Provider,
    /// Client looking to hire
    Seeker,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Provider => "provider",
            UserType::Seeker => "seeker",
        }
    }

    pub fn all() -> [UserType; 2] {
        [UserType::Provider, UserType::Seeker]
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "provider" => Ok(UserType::Provider),
            "seeker" => Ok(UserType::Seeker),
            other => Err(format!("Unknown user type: {}", other)),
        }
    }
}

/// An authenticated principal as held by the session and persisted under the `user` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    /// Years of experience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<String>,
    /// Hourly base price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl User {
    /// A user with no seeker profile attributes
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, user_type: UserType) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            user_type,
            skill: None,
            experience: None,
            location: None,
            time_period: None,
            base_price: None,
            rating: None,
            reviews: None,
        }
    }

    pub fn is_provider(&self) -> bool {
        self.user_type == UserType::Provider
    }

    pub fn is_seeker(&self) -> bool {
        self.user_type == UserType::Seeker
    }
}

/// Identifier of a seeker; the backend returns numbers, demo data may use strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeekerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SeekerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeekerId::Number(n) => write!(f, "{}", n),
            SeekerId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SeekerId {
    fn from(id: i64) -> Self {
        SeekerId::Number(id)
    }
}

impl From<&str> for SeekerId {
    fn from(id: &str) -> Self {
        match id.trim().parse::<i64>() {
            Ok(n) => SeekerId::Number(n),
            Err(_) => SeekerId::Text(id.to_string()),
        }
    }
}

/// A seeker as returned by search and profile queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seeker {
    pub id: SeekerId,
    pub name: String,
    pub skill: String,
    pub experience: f64,
    pub location: String,
    pub time_period: String,
    pub base_price: f64,
    /// Aggregate rating on a 0-5 scale
    pub rating: f64,
    pub reviews: u32,
}

/// Search filters; empty fields mean "no filter"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub time_period: String,
    /// Minimum rating, kept in its textual form as entered
    #[serde(default, deserialize_with = "crate::normalize::deserialize_text")]
    pub rating: String,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_time_period(mut self, time_period: impl Into<String>) -> Self {
        self.time_period = time_period.into();
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.rating = rating.to_string();
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query parameters for the non-empty filters, using the backend's names
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("skill", &self.skill),
            ("location", &self.location),
            ("time_period", &self.time_period),
            ("rating", &self.rating),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (key, value.to_string()))
        })
        .collect()
    }
}

/// A numeric form value that may arrive as a number or as raw input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    /// The value as a number, if it holds one or its text parses as one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormNumber::Number(n) if n.is_finite() => Some(*n),
            FormNumber::Number(_) => None,
            FormNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, FormNumber::Number(_))
    }
}

impl From<f64> for FormNumber {
    fn from(n: f64) -> Self {
        FormNumber::Number(n)
    }
}

impl From<&str> for FormNumber {
    fn from(s: &str) -> Self {
        FormNumber::Text(s.to_string())
    }
}

/// Raw registration/login form input.
///
/// Carries both the form's field names and the API's field names so that either
/// producer can fill it; the API modules reconcile the two before sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthFormFields {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Form name for `phone_number`
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<FormNumber>,
    /// Form name for `years_of_experience`
    #[serde(default)]
    pub experience: Option<FormNumber>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    /// Form name for `time_period`
    #[serde(default, rename = "timePeriod")]
    pub time_period_form: Option<String>,
    #[serde(default)]
    pub base_price: Option<FormNumber>,
    /// Form name for `base_price`
    #[serde(default, rename = "basePrice")]
    pub base_price_form: Option<FormNumber>,
}

impl AuthFormFields {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }
}
