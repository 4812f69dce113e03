//! Deterministic identifier construction for runs and signals.

use chrono::{SecondsFormat, Utc};

/// Lower-case, collapse runs of non-alphanumerics to single hyphens,
/// trim edge hyphens, cap at 60 characters.
pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug.truncate(60);
    slug
}

/// Timestamp-derived run id, filesystem-safe.
pub fn build_run_id() -> String {
    let stamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("repurpose-{stamp}")
}

/// Signal id: a pure function of (compound, condition, index).
pub fn build_signal_id(compound: &str, condition: &str, index: usize) -> String {
    let compound_slug = slugify(compound);
    let condition_slug = slugify(condition);
    let base = if compound_slug.is_empty() && condition_slug.is_empty() {
        format!("signal-{index}")
    } else {
        format!("{compound_slug}-{condition_slug}")
    };
    format!("repurpose-{base}-{:02}", index + 1)
}
