// src/data.rs
//
// Domain records for one scrape run. Everything is built once from operator
// input or parsed markup, then read-only; nothing survives the process.

use std::fmt;

use chrono::NaiveTime;

use crate::error::ScrapeError;

/// Credentials collected from the operator. Consumed once to drive the
/// division/login resolution; never persisted, never logged.
pub struct LoginInfo {
    /// Division the user belongs to on the login screen.
    pub division_name: String,
    /// User name as it appears in the login dropdown.
    pub name: String,
    pub password: String,
}

/// Target year and month, validated at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    pub fn new(year: i32, month: i32) -> Result<Self, ScrapeError> {
        if !(1900..=2100).contains(&year) {
            return Err(ScrapeError::Validation(
                "年は1900以上2100以下を指定してください。".into(),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(ScrapeError::Validation(
                "月は1以上12以下を指定してください。".into(),
            ));
        }
        Ok(Self {
            year: year as u16,
            month: month as u8,
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Japanese display form, e.g. `2023年05月`.
    pub fn text_jp(&self) -> String {
        format!("{:04}年{:02}月", self.year, self.month)
    }

    /// The portal's date token for the first day of the month,
    /// e.g. `da.2023.05.01`.
    pub fn first_day_token(&self) -> String {
        format!("da.{:04}.{:02}.01", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

/// Division (organization) code from the org page's option values. Opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionCode(pub String);

impl DivisionCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User id from the login page's option values. Opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One scheduled event, as it appeared in the month grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub day: u8,
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub title: Option<String>,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title.as_deref().unwrap_or("");
        // An end without a begin is not displayable as a range; treat it
        // as absent.
        match (self.begin, self.end) {
            (None, _) => write!(f, "{}日 {}", self.day, title),
            (Some(begin), None) => {
                write!(f, "{}日 {} {}", self.day, begin.format("%H:%M"), title)
            }
            (Some(begin), Some(end)) => write!(
                f,
                "{}日 {}-{} {}",
                self.day,
                begin.format("%H:%M"),
                end.format("%H:%M"),
                title
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn year_month_accepts_full_range() {
        for (y, m) in [(1900, 1), (2100, 12), (2023, 5)] {
            let ym = YearMonth::new(y, m).unwrap();
            assert_eq!(ym.year() as i32, y);
            assert_eq!(ym.month() as i32, m);
        }
    }

    #[test]
    fn year_month_rejects_out_of_range() {
        assert!(matches!(
            YearMonth::new(1899, 5),
            Err(ScrapeError::Validation(_))
        ));
        assert!(matches!(
            YearMonth::new(2101, 5),
            Err(ScrapeError::Validation(_))
        ));
        assert!(matches!(
            YearMonth::new(2023, 0),
            Err(ScrapeError::Validation(_))
        ));
        assert!(matches!(
            YearMonth::new(2023, 13),
            Err(ScrapeError::Validation(_))
        ));
    }

    #[test]
    fn year_month_renderings() {
        let ym = YearMonth::new(2023, 5).unwrap();
        assert_eq!(ym.to_string(), "2023/05");
        assert_eq!(ym.text_jp(), "2023年05月");
        assert_eq!(ym.first_day_token(), "da.2023.05.01");
    }

    #[test]
    fn schedule_without_times() {
        let s = Schedule {
            day: 5,
            begin: None,
            end: None,
            title: Some("会議".into()),
        };
        assert_eq!(s.to_string(), "5日 会議");
    }

    #[test]
    fn schedule_with_full_range() {
        let s = Schedule {
            day: 5,
            begin: Some(hm(9, 0)),
            end: Some(hm(10, 30)),
            title: Some("会議".into()),
        };
        assert_eq!(s.to_string(), "5日 09:00-10:30 会議");
    }

    #[test]
    fn schedule_with_begin_only() {
        let s = Schedule {
            day: 5,
            begin: Some(hm(9, 0)),
            end: None,
            title: Some("会議".into()),
        };
        assert_eq!(s.to_string(), "5日 09:00 会議");
    }

    #[test]
    fn schedule_end_without_begin_hides_both() {
        let s = Schedule {
            day: 5,
            begin: None,
            end: Some(hm(10, 30)),
            title: Some("会議".into()),
        };
        assert_eq!(s.to_string(), "5日 会議");
    }
}
