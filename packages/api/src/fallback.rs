//! Deterministic demo data served when the backend is unavailable.
//!
//! Search records echo the requested skill, location and time period so a
//! filtered search still looks filtered.

use freelink_core::{SearchCriteria, Seeker, SeekerId, User, UserType};

use crate::models::LoginResponse;

pub const MOCK_PROVIDER_ID: i64 = 888;
pub const MOCK_PROVIDER_TOKEN: &str = "mock-provider-token-for-testing";
pub const MOCK_SEEKER_ID: i64 = 999;
pub const MOCK_SEEKER_TOKEN: &str = "mock-token-for-testing";

fn echo(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Display name derived from the local part of an email address
pub fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

pub fn mock_provider_login(email: &str) -> LoginResponse {
    LoginResponse {
        token: MOCK_PROVIDER_TOKEN.to_string(),
        user: User::new(MOCK_PROVIDER_ID, name_from_email(email), email, UserType::Provider),
    }
}

pub fn mock_seeker_login(email: &str) -> LoginResponse {
    let mut user = User::new(MOCK_SEEKER_ID, name_from_email(email), email, UserType::Seeker);
    user.skill = Some("Web Development".to_string());
    user.experience = Some(3.0);
    user.location = Some("Remote".to_string());
    user.time_period = Some("Full-time".to_string());
    user.base_price = Some(50.0);
    user.rating = Some(4.5);
    user.reviews = Some(10);

    LoginResponse {
        token: MOCK_SEEKER_TOKEN.to_string(),
        user,
    }
}

pub fn mock_login(role: UserType, email: &str) -> LoginResponse {
    match role {
        UserType::Provider => mock_provider_login(email),
        UserType::Seeker => mock_seeker_login(email),
    }
}

struct Template {
    id: i64,
    name: &'static str,
    skill: &'static str,
    experience: f64,
    location: &'static str,
    time_period: &'static str,
    base_price: f64,
    rating: f64,
    reviews: u32,
}

const DEMO_SEEKERS: [Template; 3] = [
    Template {
        id: 1,
        name: "Jane Smith",
        skill: "Web Development",
        experience: 5.0,
        location: "Remote",
        time_period: "Full-time",
        base_price: 45.0,
        rating: 4.8,
        reviews: 24,
    },
    Template {
        id: 2,
        name: "John Davis",
        skill: "UI/UX Design",
        experience: 3.0,
        location: "New York",
        time_period: "Part-time",
        base_price: 60.0,
        rating: 4.5,
        reviews: 12,
    },
    Template {
        id: 3,
        name: "Maria Rodriguez",
        skill: "Mobile Development",
        experience: 4.0,
        location: "San Francisco",
        time_period: "Contract",
        base_price: 55.0,
        rating: 4.7,
        reviews: 18,
    },
];

const BACKUP_SEEKERS: [Template; 2] = [
    Template {
        id: 1,
        name: "Fallback User 1",
        skill: "Web Development",
        experience: 4.0,
        location: "Remote",
        time_period: "Full-time",
        base_price: 50.0,
        rating: 4.5,
        reviews: 15,
    },
    Template {
        id: 2,
        name: "Fallback User 2",
        skill: "UI/UX Design",
        experience: 3.0,
        location: "Remote",
        time_period: "Contract",
        base_price: 65.0,
        rating: 4.8,
        reviews: 12,
    },
];

fn build(templates: &[Template], criteria: &SearchCriteria) -> Vec<Seeker> {
    templates
        .iter()
        .map(|t| Seeker {
            id: SeekerId::Number(t.id),
            name: t.name.to_string(),
            skill: echo(&criteria.skill, t.skill),
            experience: t.experience,
            location: echo(&criteria.location, t.location),
            time_period: echo(&criteria.time_period, t.time_period),
            base_price: t.base_price,
            rating: t.rating,
            reviews: t.reviews,
        })
        .collect()
}

/// Primary demo dataset used when the data source is `Fallback`
pub fn demo_seekers(criteria: &SearchCriteria) -> Vec<Seeker> {
    build(&DEMO_SEEKERS, criteria)
}

/// Secondary dataset returned when a live search cannot reach the backend
pub fn backup_seekers(criteria: &SearchCriteria) -> Vec<Seeker> {
    build(&BACKUP_SEEKERS, criteria)
}

/// Demo profile for a seeker id
pub fn demo_profile(id: &SeekerId) -> Seeker {
    Seeker {
        id: id.clone(),
        name: "Sarah Johnson".to_string(),
        skill: "Web Development".to_string(),
        experience: 5.0,
        location: "Remote".to_string(),
        time_period: "Full-time".to_string(),
        base_price: 45.0,
        rating: 4.8,
        reviews: 24,
    }
}
