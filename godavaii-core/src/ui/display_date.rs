//! "Data as of" date shown under the launch metrics.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};

/// India Standard Time, in minutes east of UTC.
pub const IST_OFFSET_MINUTES: i32 = 330;

const EN_IN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct",
    "Nov", "Dec",
];

/// Source of "now" for page views.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock projected onto a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Returns `None` when the offset is outside +-24h.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?)
            .map(|offset| Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_offset_minutes(IST_OFFSET_MINUTES)
            .unwrap_or(Self { offset: Utc.fix() })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// A date rendered once and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDate {
    text: String,
    year: i32,
}

impl DisplayDate {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copyright year for the footer.
    pub fn year(&self) -> i32 {
        self.year
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayDateFormatter;

impl DisplayDateFormatter {
    /// Read the clock once and freeze the result.
    pub fn capture(clock: &dyn Clock) -> DisplayDate {
        let today = clock.now().date_naive();
        DisplayDate {
            text: Self::format_en_in(today),
            year: today.year(),
        }
    }

    /// `05 Jun 2024`
    pub fn format_en_in(date: NaiveDate) -> String {
        let month = EN_IN_MONTHS[date.month0() as usize];
        format!("{:02} {} {}", date.day(), month, date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(IST_OFFSET_MINUTES * 60).unwrap()
    }

    #[test]
    fn formats_two_digit_day_and_short_month() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(DisplayDateFormatter::format_en_in(date), "05 Jun 2024");
        let date = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        assert_eq!(DisplayDateFormatter::format_en_in(date), "05 Sept 2024");
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(DisplayDateFormatter::format_en_in(date), "31 Dec 2025");
    }

    #[test]
    fn capture_uses_local_date_of_the_clock() {
        // 20:00 UTC on the 4th is already the 5th in IST.
        let instant = Utc
            .with_ymd_and_hms(2024, 6, 4, 20, 0, 0)
            .unwrap()
            .with_timezone(&ist());
        let date = DisplayDateFormatter::capture(&FixedClock(instant));
        assert_eq!(date.text(), "05 Jun 2024");
        assert_eq!(date.year(), 2024);
    }

    #[test]
    fn system_clock_defaults_to_ist() {
        assert_eq!(SystemClock::default().offset(), ist());
        assert!(SystemClock::with_offset_minutes(24 * 60 + 1).is_none());
    }
}
