//! Current-date display (`YYYY.MM.DD`).

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Format a calendar date with zero-padded month and day.
pub fn format_display_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}.{month:02}.{day:02}")
}

/// Today's date in the browser's local time zone, or `None` outside the browser.
pub fn today() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        // `get_month` is zero-based.
        Some(format_display_date(
            i32::try_from(now.get_full_year()).unwrap_or_default(),
            now.get_month() + 1,
            now.get_date(),
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
