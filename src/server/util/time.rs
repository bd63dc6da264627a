use chrono::{DateTime, Utc};
use serenity::all::Timestamp;

/// Formats a time as a Discord relative timestamp, e.g. `<t:1700000000:R>`.
pub fn relative(time: DateTime<Utc>) -> String {
    format!("<t:{}:R>", time.timestamp())
}

/// Converts a Discord timestamp to chrono, truncated to whole seconds.
pub fn from_discord_timestamp(timestamp: Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn converts_discord_timestamp() {
        let time = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let timestamp = Timestamp::from_unix_timestamp(time.timestamp()).unwrap();

        assert_eq!(from_discord_timestamp(timestamp), time);
    }

    #[test]
    fn formats_relative_timestamp() {
        let time = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();

        assert_eq!(relative(time), "<t:1700000000:R>");
    }
}
