use jiff::{Timestamp, tz};

/// "15 Jan 2025", in the browser's time zone.
pub fn format_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%-d %b %Y")
        .to_string()
}

/// "15 Jan 2025, 09:30", in the browser's time zone.
pub fn format_datetime(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%-d %b %Y, %H:%M")
        .to_string()
}
