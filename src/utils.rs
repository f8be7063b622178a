/// Timestamp helper for the startup banner
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const BANNER_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// Render an instant for the startup log line. Falls back to the default
/// string representation if formatting fails.
pub fn format_startup_time(dt: &OffsetDateTime) -> String {
    dt.format(BANNER_FORMAT).unwrap_or_else(|_| dt.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_instant() {
        let dt = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(format_startup_time(&dt), "2023-11-14 22:13:20 UTC");
    }
}
