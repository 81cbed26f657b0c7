use chrono::{DateTime, Local};

/// Produces a timestamp-derived label tagging one solver run, e.g.
/// `30Aug2026_153012`.
///
/// The label is opaque: it carries no meaning beyond
/// uniqueness-by-timestamp, and two runs starting within the same second
/// collide. That is acceptable for its diagnostic use; anything needing a
/// correctness-bearing key must bring its own identifier.
pub fn new_run_id() -> String {
    format_run_id(&Local::now())
}

/// Single-digit days are unpadded (`5Aug2026_...`), matching the historical
/// ctime-derived token.
fn format_run_id(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%-d%b%Y_%H%M%S").to_string()
}
