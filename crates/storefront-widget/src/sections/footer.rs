//! Footer section.

use chrono::{Datelike, Local};

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Render the footer year element.
pub fn render_footer_year(year: i32) -> String {
    format!(r#"<span id="year">{year}</span>"#)
}
