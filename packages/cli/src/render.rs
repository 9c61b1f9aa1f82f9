// ABOUTME: Terminal rendering of search results, profiles and session status
// ABOUTME: Pure functions returning tables and labelled rows so output can be tested

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use freelink_auth::SessionSnapshot;
use freelink_config::ClientConfig;
use freelink_core::{Seeker, User};

pub fn format_rate(base_price: f64) -> String {
    format!("${:.2}/hr", base_price)
}

pub fn format_rating(rating: f64, reviews: u32) -> String {
    let noun = if reviews == 1 { "review" } else { "reviews" };
    format!("{:.1} ({} {})", rating, reviews, noun)
}

pub fn format_experience(years: f64) -> String {
    if years == 1.0 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    }
}

pub fn seeker_table(seekers: &[Seeker]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        "ID",
        "Name",
        "Skill",
        "Experience",
        "Location",
        "Availability",
        "Rate",
        "Rating",
    ]);

    for seeker in seekers {
        table.add_row(vec![
            seeker.id.to_string(),
            seeker.name.clone(),
            seeker.skill.clone(),
            format_experience(seeker.experience),
            seeker.location.clone(),
            seeker.time_period.clone(),
            format_rate(seeker.base_price),
            format_rating(seeker.rating, seeker.reviews),
        ]);
    }

    table
}

/// Labelled rows for a seeker profile
pub fn seeker_rows(seeker: &Seeker) -> Vec<(&'static str, String)> {
    vec![
        ("Name", seeker.name.clone()),
        ("Skill", seeker.skill.clone()),
        ("Experience", format_experience(seeker.experience)),
        ("Location", seeker.location.clone()),
        ("Availability", seeker.time_period.clone()),
        ("Rate", format_rate(seeker.base_price)),
        ("Rating", format_rating(seeker.rating, seeker.reviews)),
    ]
}

/// Labelled rows for the logged-in user; seeker attributes only when present
pub fn user_rows(user: &User) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Account", user.user_type.to_string()),
    ];

    if let Some(skill) = &user.skill {
        rows.push(("Skill", skill.clone()));
    }
    if let Some(years) = user.experience {
        rows.push(("Experience", format_experience(years)));
    }
    if let Some(location) = &user.location {
        rows.push(("Location", location.clone()));
    }
    if let Some(time_period) = &user.time_period {
        rows.push(("Availability", time_period.clone()));
    }
    if let Some(price) = user.base_price {
        rows.push(("Rate", format_rate(price)));
    }
    if let Some(rating) = user.rating {
        rows.push(("Rating", format_rating(rating, user.reviews.unwrap_or(0))));
    }

    rows
}

pub fn status_rows(snapshot: &SessionSnapshot, config: &ClientConfig) -> Vec<(&'static str, String)> {
    let session = match &snapshot.user {
        Some(user) => format!("Logged in as {} <{}> ({})", user.name, user.email, user.user_type),
        None => "Not logged in".to_string(),
    };

    vec![
        ("Session", session),
        ("API", config.api_base_url.clone()),
        ("Data source", config.data_source.to_string()),
        ("Session file", config.session_dir.join(freelink_core::SESSION_FILE).display().to_string()),
    ]
}

/// Align labelled rows into `Label: value` lines
pub fn rows_to_lines(rows: &[(&str, String)]) -> Vec<String> {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", format!("{}:", label), value, width = width + 1))
        .collect()
}
