use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Formats a UTC instant as a local `DD/MM/YYYY` date string.
pub fn local_date_string(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%d/%m/%Y").to_string()
}

/// Formats a UTC instant as a local 24h `HH:MM:SS` time string.
pub fn local_time_string(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_in_timezone_returns_datetime_in_tz() {
        let tz = chrono_tz::UTC;
        let result = now_in_timezone(&tz);
        assert_eq!(result.timezone(), tz);
    }

    #[test]
    fn local_strings_respect_timezone_offset() {
        // 2024-03-01 03:30:00 UTC is 2024-02-29 22:30:00 in Lima (UTC-5).
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 3, 30, 0).unwrap();
        let lima = chrono_tz::America::Lima;
        assert_eq!(local_date_string(instant, &lima), "29/02/2024");
        assert_eq!(local_time_string(instant, &lima), "22:30:00");
    }

    #[test]
    fn local_time_string_is_24_hour() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 13, 5, 9).unwrap();
        assert_eq!(local_time_string(instant, &chrono_tz::UTC), "13:05:09");
    }
}
