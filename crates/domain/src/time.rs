//! Time and timestamp helpers.

use chrono::{DateTime, Local, Utc};

/// UTC timestamp used for refresh starts and local log entries.
pub type Timestamp = DateTime<Utc>;

/// Label shown in place of a clock reading before anything happened.
pub const NO_CLOCK: &str = "--:--";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as a local `HH:MM` wall-clock label.
#[must_use]
pub fn clock_label(ts: Timestamp) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}
