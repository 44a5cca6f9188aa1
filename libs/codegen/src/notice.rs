//! Authorship banner for generated files

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Banner naming the generator and the current local time
pub fn author_notice() -> String {
    author_notice_at(Local::now())
}

/// Banner for a fixed generation time
pub fn author_notice_at(generated_at: DateTime<Local>) -> String {
    format!(
        "Generated by autogen on {}",
        generated_at.format(TIMESTAMP_FORMAT)
    )
}
