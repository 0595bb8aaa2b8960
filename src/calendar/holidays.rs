//! Rule-driven public holiday calendars.
//!
//! A [`HolidayCalendar`] combines a weekend rule with public holidays that
//! are either fixed to a month and day or defined relative to Western Easter
//! Sunday. The Czech Republic calendar is built in; other locales can be
//! loaded from configuration.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::oracle::{WeekendCalendar, WorkingDayOracle};

/// First year of the Gregorian Easter computation.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Last year accepted by [`HolidayCalendar::checked_holidays_in_year`].
pub const LAST_SUPPORTED_YEAR: i32 = 9999;

/// Largest distance from Easter Sunday, in days, an Easter rule may use.
pub const MAX_EASTER_OFFSET_DAYS: i64 = 365;

/// A holiday that falls on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHoliday {
    /// The holiday name.
    pub name: String,
    /// Month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// First year the holiday is observed.
    #[serde(default)]
    pub since: Option<i32>,
    /// Last year the holiday is observed.
    #[serde(default)]
    pub until: Option<i32>,
}

/// A holiday defined as an offset in days from Easter Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterHoliday {
    /// The holiday name.
    pub name: String,
    /// Days after Easter Sunday (negative for days before).
    pub offset_days: i64,
    /// First year the holiday is observed.
    #[serde(default)]
    pub since: Option<i32>,
    /// Last year the holiday is observed.
    #[serde(default)]
    pub until: Option<i32>,
}

/// A public holiday occurrence on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

fn observed_in(since: Option<i32>, until: Option<i32>, year: i32) -> bool {
    since.is_none_or(|s| year >= s) && until.is_none_or(|u| year <= u)
}

impl FixedHoliday {
    fn new(name: &str, month: u32, day: u32) -> Self {
        Self {
            name: name.to_string(),
            month,
            day,
            since: None,
            until: None,
        }
    }

    fn date_in(&self, year: i32) -> Option<NaiveDate> {
        if !observed_in(self.since, self.until, year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl EasterHoliday {
    fn new(name: &str, offset_days: i64, since: Option<i32>) -> Self {
        Self {
            name: name.to_string(),
            offset_days,
            since,
            until: None,
        }
    }

    fn date_in(&self, year: i32) -> Option<NaiveDate> {
        if !observed_in(self.since, self.until, year) {
            return None;
        }
        easter_sunday(year)?.checked_add_signed(chrono::Duration::try_days(self.offset_days)?)
    }
}

/// Computes Western Easter Sunday for `year`.
///
/// Uses the anonymous Gregorian algorithm. Returns `None` for years before
/// the Gregorian reform.
///
/// # Example
///
/// ```
/// use vacation_ledger::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Weekends plus rule-based public holidays.
///
/// # Example
///
/// ```
/// use vacation_ledger::calendar::{HolidayCalendar, WorkingDayOracle};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::czech();
/// let christmas_eve = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
///
/// assert!(!calendar.is_working_day(christmas_eve));
/// assert_eq!(calendar.holiday_name(christmas_eve), Some("Christmas Eve"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    weekend: WeekendCalendar,
    fixed: Vec<FixedHoliday>,
    easter: Vec<EasterHoliday>,
}

impl HolidayCalendar {
    /// Builds a calendar, rejecting fixed holidays that can never occur and
    /// Easter rules more than [`MAX_EASTER_OFFSET_DAYS`] from Easter Sunday.
    pub fn new(
        name: impl Into<String>,
        weekend: Vec<Weekday>,
        fixed: Vec<FixedHoliday>,
        easter: Vec<EasterHoliday>,
    ) -> EngineResult<Self> {
        for holiday in &fixed {
            // 2000 is a leap year, so 29 February passes.
            if NaiveDate::from_ymd_opt(2000, holiday.month, holiday.day).is_none() {
                return Err(EngineError::InvalidHolidayRule {
                    name: holiday.name.clone(),
                    message: format!("no such date: month {} day {}", holiday.month, holiday.day),
                });
            }
        }
        for holiday in &easter {
            if holiday.offset_days.abs() > MAX_EASTER_OFFSET_DAYS {
                return Err(EngineError::InvalidHolidayRule {
                    name: holiday.name.clone(),
                    message: format!(
                        "offset of {} days exceeds {} days from Easter Sunday",
                        holiday.offset_days, MAX_EASTER_OFFSET_DAYS
                    ),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            weekend: WeekendCalendar::new(weekend),
            fixed,
            easter,
        })
    }

    /// The Czech Republic public holiday calendar.
    pub fn czech() -> Self {
        Self {
            name: "Czech Republic".to_string(),
            weekend: WeekendCalendar::default(),
            fixed: vec![
                FixedHoliday::new("New Year's Day", 1, 1),
                FixedHoliday::new("Labour Day", 5, 1),
                FixedHoliday::new("Liberation Day", 5, 8),
                FixedHoliday::new("Saints Cyril and Methodius Day", 7, 5),
                FixedHoliday::new("Jan Hus Day", 7, 6),
                FixedHoliday::new("Czech Statehood Day", 9, 28),
                FixedHoliday::new("Independence Day", 10, 28),
                FixedHoliday::new("Freedom and Democracy Day", 11, 17),
                FixedHoliday::new("Christmas Eve", 12, 24),
                FixedHoliday::new("Christmas Day", 12, 25),
                FixedHoliday::new("St. Stephen's Day", 12, 26),
            ],
            easter: vec![
                EasterHoliday::new("Good Friday", -2, Some(2016)),
                EasterHoliday::new("Easter Monday", 1, None),
            ],
        }
    }

    /// The calendar's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The weekend rule.
    pub fn weekend(&self) -> &WeekendCalendar {
        &self.weekend
    }

    /// Returns the name of the public holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        let year = date.year();
        self.fixed
            .iter()
            .find(|h| h.date_in(year) == Some(date))
            .map(|h| h.name.as_str())
            .or_else(|| {
                self.easter
                    .iter()
                    .find(|h| h.date_in(year) == Some(date))
                    .map(|h| h.name.as_str())
            })
    }

    /// Returns true when `date` is a public holiday, regardless of weekday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// All public holidays observed in `year`, sorted by date.
    pub fn holidays_in_year(&self, year: i32) -> Vec<PublicHoliday> {
        let fixed = self
            .fixed
            .iter()
            .filter_map(|h| h.date_in(year).map(|date| (date, &h.name)));
        let easter = self
            .easter
            .iter()
            .filter_map(|h| h.date_in(year).map(|date| (date, &h.name)));

        let mut holidays: Vec<PublicHoliday> = fixed
            .chain(easter)
            .map(|(date, name)| PublicHoliday {
                date,
                name: name.clone(),
            })
            .collect();
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        holidays
    }

    /// Like [`holidays_in_year`](Self::holidays_in_year), but rejects years
    /// outside `1583..=9999` with [`EngineError::InvalidYear`].
    pub fn checked_holidays_in_year(&self, year: i32) -> EngineResult<Vec<PublicHoliday>> {
        if !(FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
            return Err(EngineError::InvalidYear { year });
        }
        Ok(self.holidays_in_year(year))
    }
}

impl WorkingDayOracle for HolidayCalendar {
    fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.weekend.is_weekend(date) && !self.is_public_holiday(date)
    }
}
