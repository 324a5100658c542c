//! Fate annotation: overrides marker text and colors from live fate state
//!
//! Runs after classification, because the match key is the marker's
//! current primary text; the marker table itself never carries the fate
//! name in a structured field.

use overmap_shared::presentation::URGENT_RADIUS_COLOR;
use overmap_shared::{FateSnapshot, MarkerPresentation, TextSource};

/// Fates this close to expiry get the urgency color, in seconds.
const URGENCY_THRESHOLD_SECS: i64 = 300;

/// Match `candidate_name` against the active fates and rewrite the
/// presentation on a hit. Returns whether a fate matched.
///
/// Linear scan; the active set is bounded by concurrent fates in one
/// zone, typically single digits.
pub fn try_annotate(
    presentation: &mut MarkerPresentation,
    candidate_name: &str,
    fates: &[FateSnapshot],
) -> bool {
    if candidate_name.is_empty() {
        return false;
    }

    for fate in fates {
        if !fate.name.eq_ignore_ascii_case(candidate_name) {
            continue;
        }

        presentation.primary_text =
            TextSource::Literal(format!("Lv. {} {}", fate.level, fate.name));

        let remaining = fate.time_remaining.num_seconds();
        if remaining >= 0 {
            presentation.secondary_text = TextSource::Literal(format!(
                "Time remaining {:02}:{:02}\nProgress {}%",
                remaining / 60,
                remaining % 60,
                fate.progress
            ));

            if remaining <= URGENCY_THRESHOLD_SECS {
                presentation.radius_color = URGENT_RADIUS_COLOR;
                presentation.radius_outline_color = URGENT_RADIUS_COLOR;
            }
        } else {
            // No countdown semantics: progress only, colors untouched.
            presentation.secondary_text =
                TextSource::Literal(format!("Progress {}%", fate.progress));
        }

        return true;
    }

    false
}
