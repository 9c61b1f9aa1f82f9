// ABOUTME: Field-name reconciliation between form input, the client model and the REST API
// ABOUTME: Every lookup prefers the canonical name, falls back to the alternate, then a default

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{AuthFormFields, FormNumber, Seeker, SeekerId, User, UserType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Expected a JSON object for {0}")]
    NotAnObject(&'static str),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Provider registration body sent to `POST /provider/register`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderRegistration {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

/// Seeker registration body sent to `POST /seeker/register`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekerRegistration {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub skill: String,
    pub years_of_experience: i64,
    pub location: String,
    pub time_period: String,
    pub base_price: f64,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Prefer a value that is already numeric, then any parseable text, then zero
fn form_number(canonical: &Option<FormNumber>, alternate: &Option<FormNumber>) -> f64 {
    let numeric = |v: &Option<FormNumber>| v.as_ref().filter(|n| n.is_number()).and_then(FormNumber::as_f64);
    let parsed = |v: &Option<FormNumber>| v.as_ref().and_then(FormNumber::as_f64);

    numeric(canonical)
        .or_else(|| numeric(alternate))
        .or_else(|| parsed(canonical))
        .or_else(|| parsed(alternate))
        .unwrap_or(0.0)
}

impl From<&AuthFormFields> for ProviderRegistration {
    fn from(form: &AuthFormFields) -> Self {
        Self {
            name: form.name.clone().unwrap_or_default(),
            phone_number: non_empty(&form.phone_number)
                .or_else(|| non_empty(&form.phone))
                .unwrap_or_default()
                .to_string(),
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

impl From<&AuthFormFields> for SeekerRegistration {
    fn from(form: &AuthFormFields) -> Self {
        Self {
            name: form.name.clone().unwrap_or_default(),
            phone_number: non_empty(&form.phone_number)
                .or_else(|| non_empty(&form.phone))
                .unwrap_or_default()
                .to_string(),
            email: form.email.clone(),
            password: form.password.clone(),
            skill: form.skill.clone().unwrap_or_default(),
            years_of_experience: form_number(&form.years_of_experience, &form.experience).trunc()
                as i64,
            location: form.location.clone().unwrap_or_default(),
            time_period: non_empty(&form.time_period)
                .or_else(|| non_empty(&form.time_period_form))
                .unwrap_or_default()
                .to_string(),
            base_price: form_number(&form.base_price, &form.base_price_form),
        }
    }
}

/// Look up a field by canonical then alternate name; JSON `null` counts as absent
fn field<'a>(obj: &'a Map<String, Value>, canonical: &str, alternate: &str) -> Option<&'a Value> {
    obj.get(canonical)
        .filter(|v| !v.is_null())
        .or_else(|| obj.get(alternate).filter(|v| !v.is_null()))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Whole, non-negative numbers only; anything else counts as absent
fn as_count(value: &Value) -> Option<u32> {
    as_number(value)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

fn text(obj: &Map<String, Value>, canonical: &str, alternate: &str) -> Option<String> {
    field(obj, canonical, alternate).and_then(as_text)
}

fn number(obj: &Map<String, Value>, canonical: &str, alternate: &str) -> Option<f64> {
    field(obj, canonical, alternate).and_then(as_number)
}

fn count(obj: &Map<String, Value>, canonical: &str, alternate: &str) -> Option<u32> {
    field(obj, canonical, alternate).and_then(as_count)
}

fn seeker_id(value: &Value) -> Option<SeekerId> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .map(SeekerId::Number),
        Value::String(s) => Some(SeekerId::from(s.as_str())),
        _ => None,
    }
}

/// Shape a seeker-like JSON object, accepting camelCase or snake_case fields
pub fn seeker_from_value(value: &Value) -> NormalizeResult<Seeker> {
    let obj = value.as_object().ok_or(NormalizeError::NotAnObject("seeker"))?;

    let id = obj
        .get("id")
        .and_then(seeker_id)
        .ok_or(NormalizeError::MissingField("id"))?;

    Ok(Seeker {
        id,
        name: text(obj, "name", "name").unwrap_or_default(),
        skill: text(obj, "skill", "skill").unwrap_or_default(),
        experience: number(obj, "experience", "years_of_experience").unwrap_or(0.0),
        location: text(obj, "location", "location").unwrap_or_default(),
        time_period: text(obj, "timePeriod", "time_period").unwrap_or_default(),
        base_price: number(obj, "basePrice", "base_price").unwrap_or(0.0),
        rating: number(obj, "rating", "rating").unwrap_or(0.0),
        reviews: count(obj, "reviews", "reviews").unwrap_or(0),
    })
}

/// Shape a user object from a login response.
///
/// The user type is taken from the payload when it names a known type and
/// otherwise from `role`. Seekers get their profile attributes defaulted.
pub fn user_from_value(value: &Value, role: UserType) -> NormalizeResult<User> {
    let obj = value.as_object().ok_or(NormalizeError::NotAnObject("user"))?;

    let id = obj
        .get("id")
        .and_then(|v| as_number(v).map(|n| n.trunc() as i64))
        .ok_or(NormalizeError::MissingField("id"))?;

    let user_type = text(obj, "userType", "user_type")
        .and_then(|t| t.parse::<UserType>().ok())
        .unwrap_or(role);

    let mut user = User {
        id,
        name: text(obj, "name", "name").unwrap_or_default(),
        email: text(obj, "email", "email").unwrap_or_default(),
        user_type,
        skill: text(obj, "skill", "skill"),
        experience: number(obj, "experience", "years_of_experience"),
        location: text(obj, "location", "location"),
        time_period: text(obj, "timePeriod", "time_period"),
        base_price: number(obj, "basePrice", "base_price"),
        rating: number(obj, "rating", "rating"),
        reviews: count(obj, "reviews", "reviews"),
    };

    if role == UserType::Seeker {
        user.skill.get_or_insert_with(String::new);
        user.experience.get_or_insert(0.0);
        user.location.get_or_insert_with(String::new);
        user.time_period.get_or_insert_with(String::new);
        user.base_price.get_or_insert(0.0);
        user.rating.get_or_insert(0.0);
        user.reviews.get_or_insert(0);
    }

    Ok(user)
}

/// Deserialize a string, number or null into its textual form
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_text(&value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::camel_case(json!({
        "id": 1, "name": "Jane", "skill": "Design", "experience": 5,
        "location": "Remote", "timePeriod": "Full-time", "basePrice": 45.5,
        "rating": 4.8, "reviews": 24
    }))]
    #[case::snake_case(json!({
        "id": 1, "name": "Jane", "skill": "Design", "years_of_experience": 5,
        "location": "Remote", "time_period": "Full-time", "base_price": 45.5,
        "rating": 4.8, "reviews": 24
    }))]
    #[case::numeric_strings(json!({
        "id": "1", "name": "Jane", "skill": "Design", "years_of_experience": "5",
        "location": "Remote", "time_period": "Full-time", "base_price": "45.50",
        "rating": "4.8", "reviews": "24"
    }))]
    fn test_seeker_shapes_normalize_identically(#[case] input: Value) {
        let seeker = seeker_from_value(&input).unwrap();

        assert_eq!(
            seeker,
            Seeker {
                id: SeekerId::Number(1),
                name: "Jane".to_string(),
                skill: "Design".to_string(),
                experience: 5.0,
                location: "Remote".to_string(),
                time_period: "Full-time".to_string(),
                base_price: 45.5,
                rating: 4.8,
                reviews: 24,
            }
        );
    }

    #[rstest]
    #[case::fractional(json!({"id": 1, "years_of_experience": 2.5}), 2.5)]
    #[case::fractional_string(json!({"id": 1, "years_of_experience": "1.5"}), 1.5)]
    #[case::camel_case(json!({"id": 1, "experience": 0.5}), 0.5)]
    fn test_experience_keeps_its_numeric_value(#[case] input: Value, #[case] expected: f64) {
        let seeker = seeker_from_value(&input).unwrap();
        assert_eq!(seeker.experience, expected);
    }

    #[rstest]
    #[case::fractional(json!(2.5))]
    #[case::negative(json!(-3))]
    #[case::not_a_number(json!("many"))]
    fn test_review_count_rejects_non_counts(#[case] reviews: Value) {
        let seeker = seeker_from_value(&json!({"id": 1, "reviews": reviews})).unwrap();
        assert_eq!(seeker.reviews, 0);
    }

    #[test]
    fn test_canonical_field_wins_over_alternate() {
        let seeker = seeker_from_value(&json!({
            "id": 2, "basePrice": 60, "base_price": 10,
            "timePeriod": "Contract", "time_period": "Part-time"
        }))
        .unwrap();

        assert_eq!(seeker.base_price, 60.0);
        assert_eq!(seeker.time_period, "Contract");
    }

    #[test]
    fn test_null_canonical_falls_back_to_alternate() {
        let seeker = seeker_from_value(&json!({"id": 3, "basePrice": null, "base_price": 30})).unwrap();
        assert_eq!(seeker.base_price, 30.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let seeker = seeker_from_value(&json!({"id": 4})).unwrap();

        assert_eq!(seeker.name, "");
        assert_eq!(seeker.experience, 0.0);
        assert_eq!(seeker.base_price, 0.0);
        assert_eq!(seeker.rating, 0.0);
        assert_eq!(seeker.reviews, 0);
    }

    #[test]
    fn test_seeker_requires_object_and_id() {
        assert_eq!(
            seeker_from_value(&json!([1, 2])),
            Err(NormalizeError::NotAnObject("seeker"))
        );
        assert_eq!(
            seeker_from_value(&json!({"name": "x"})),
            Err(NormalizeError::MissingField("id"))
        );
    }

    #[test]
    fn test_user_from_seeker_login_payload() {
        let user = user_from_value(
            &json!({
                "id": 5, "name": "Sam", "email": "sam@example.com",
                "years_of_experience": 2, "time_period": "Part-time",
                "base_price": "35.00", "userType": "seeker"
            }),
            UserType::Seeker,
        )
        .unwrap();

        assert_eq!(user.user_type, UserType::Seeker);
        assert_eq!(user.experience, Some(2.0));
        assert_eq!(user.time_period.as_deref(), Some("Part-time"));
        assert_eq!(user.base_price, Some(35.0));
        assert_eq!(user.skill.as_deref(), Some(""));
        assert_eq!(user.reviews, Some(0));
    }

    #[test]
    fn test_provider_user_keeps_profile_absent() {
        let user = user_from_value(
            &json!({"id": 9, "name": "Pat", "email": "pat@example.com"}),
            UserType::Provider,
        )
        .unwrap();

        assert_eq!(user, User::new(9, "Pat", "pat@example.com", UserType::Provider));
    }

    #[test]
    fn test_user_type_from_payload_is_preserved_here() {
        let user = user_from_value(
            &json!({"id": 9, "name": "Pat", "email": "p@x", "userType": "seeker"}),
            UserType::Provider,
        )
        .unwrap();

        assert_eq!(user.user_type, UserType::Seeker);
    }

    #[test]
    fn test_seeker_registration_prefers_api_names() {
        let form = AuthFormFields {
            name: Some("Lee".to_string()),
            phone_number: Some("555-0100".to_string()),
            phone: Some("555-9999".to_string()),
            years_of_experience: Some(FormNumber::Number(7.0)),
            experience: Some(FormNumber::from("3")),
            time_period: Some(String::new()),
            time_period_form: Some("Contract".to_string()),
            base_price_form: Some(FormNumber::from("42.5")),
            ..AuthFormFields::new("lee@example.com", "secret")
        };

        let body = SeekerRegistration::from(&form);

        assert_eq!(body.phone_number, "555-0100");
        assert_eq!(body.years_of_experience, 7);
        assert_eq!(body.time_period, "Contract");
        assert_eq!(body.base_price, 42.5);
        assert_eq!(body.skill, "");
    }

    #[test]
    fn test_seeker_registration_parses_form_strings() {
        let form = AuthFormFields {
            phone: Some("555-0101".to_string()),
            experience: Some(FormNumber::from("4.9")),
            base_price_form: Some(FormNumber::from("not a number")),
            ..AuthFormFields::new("a@b.c", "pw")
        };

        let body = SeekerRegistration::from(&form);

        assert_eq!(body.phone_number, "555-0101");
        assert_eq!(body.years_of_experience, 4);
        assert_eq!(body.base_price, 0.0);
    }

    #[test]
    fn test_provider_registration_from_form() {
        let form = AuthFormFields {
            name: Some("Kim".to_string()),
            phone: Some("555-0102".to_string()),
            ..AuthFormFields::new("kim@example.com", "pw")
        };

        assert_eq!(
            ProviderRegistration::from(&form),
            ProviderRegistration {
                name: "Kim".to_string(),
                phone_number: "555-0102".to_string(),
                email: "kim@example.com".to_string(),
                password: "pw".to_string(),
            }
        );
    }
}
