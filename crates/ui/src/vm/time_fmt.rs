use chrono::{DateTime, Utc};

/// Relative "time ago" label for post and story timestamps.
#[must_use]
pub fn format_post_date(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(created_at);
    if delta.num_seconds() < 60 {
        return "now".to_string();
    }
    if delta.num_minutes() < 60 {
        return format!("{} min", delta.num_minutes());
    }
    if delta.num_hours() < 24 {
        return format!("{} h", delta.num_hours());
    }
    if delta.num_days() < 7 {
        return format!("{} d", delta.num_days());
    }
    if delta.num_days() < 365 {
        return created_at.format("%b %-d").to_string();
    }
    created_at.format("%b %-d, %Y").to_string()
}

/// Abbreviated count for likes and comments: `842`, `1.2K`, `3.4M`.
#[must_use]
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        return format!("{}M", trim_decimal(count as f64 / 1_000_000.0));
    }
    if count >= 1_000 {
        return format!("{}K", trim_decimal(count as f64 / 1_000.0));
    }
    count.to_string()
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.1}");
    s.strip_suffix(".0").map_or(s.clone(), str::to_string)
}
