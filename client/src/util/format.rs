//! Display formatting for ratings and names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::state::session::Role;

/// Highest rating a store can receive.
pub const MAX_STARS: u8 = 5;

/// Average rating with two decimals, or "No rating".
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(value) if value.is_finite() => format!("{value:.2}"),
        _ => "No rating".to_owned(),
    }
}

/// Rating cell of the admin user table. Only owners have one.
pub fn owner_rating_cell(role: &str, avg: Option<f64>) -> String {
    if Role::parse(role) != Some(Role::Owner) {
        return "-".to_owned();
    }
    avg.filter(|v| v.is_finite()).map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

/// Number of filled stars for an average, rounded to nearest and clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_count(avg: Option<f64>) -> u8 {
    match avg {
        Some(value) if value.is_finite() => value.round().clamp(0.0, f64::from(MAX_STARS)) as u8,
        _ => 0,
    }
}

/// `filled` solid stars followed by hollow ones up to `MAX_STARS`.
pub fn star_string(filled: u8) -> String {
    let filled = filled.min(MAX_STARS);
    let mut out = String::with_capacity(usize::from(MAX_STARS) * 3);
    for i in 0..MAX_STARS {
        out.push(if i < filled { '★' } else { '☆' });
    }
    out
}

/// Accessible label for a rating button.
pub fn rate_label(value: u8) -> String {
    if value == 1 { "Rate 1 star".to_owned() } else { format!("Rate {value} stars") }
}

/// `n/5` score shown next to a rater.
pub fn score_fraction(value: u8) -> String {
    format!("{}/{MAX_STARS}", value.min(MAX_STARS))
}

/// Uppercase first letter of a name, for avatar badges.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Role column text; unknown roles are shown as sent.
pub fn role_label(raw: &str) -> String {
    Role::parse(raw).map_or_else(|| raw.to_owned(), |role| role.label().to_owned())
}
