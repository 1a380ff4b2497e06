//! Calendar week ("Kalenderwoche") for the calendar screen.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One ISO week, Monday through Sunday
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWeek {
    pub iso_year: i32,
    pub week: u32,
    pub days: [NaiveDate; 7],
}

impl CalendarWeek {
    /// The week `date` falls in
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            iso_year: iso.year(),
            week: iso.week(),
            days: std::array::from_fn(|n| monday + Duration::days(n as i64)),
        }
    }

    /// The week `weeks` weeks away (negative goes back)
    pub fn offset(&self, weeks: i64) -> Self {
        Self::containing(self.monday() + Duration::weeks(weeks))
    }

    pub fn monday(&self) -> NaiveDate {
        self.days[0]
    }

    /// Monday to Friday, the days the Mensa serves
    pub fn workdays(&self) -> &[NaiveDate] {
        &self.days[..5]
    }

    pub fn label(&self) -> String {
        format!("KW {} {}", self.week, self.iso_year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    /// Display form with `today` highlighted when it falls in this week
    pub fn view(&self, today: NaiveDate) -> WeekView {
        WeekView {
            label: self.label(),
            days: self
                .days
                .iter()
                .map(|&date| DayView {
                    date: date.format("%d.%m.%Y").to_string(),
                    weekday: weekday_name(date.weekday()).to_string(),
                    today: date == today,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    pub label: String,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayView {
    pub date: String,
    pub weekday: String,
    pub today: bool,
}

/// German weekday name as shown on the plan screens
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_on_monday() {
        let week = CalendarWeek::containing(date(2026, 10, 16));
        assert_eq!(week.week, 42);
        assert_eq!(week.monday(), date(2026, 10, 12));
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.workdays().last(), Some(&date(2026, 10, 16)));
        assert_eq!(week.label(), "KW 42 2026");

        let json = serde_json::to_value(&week).unwrap();
        assert_eq!(json["days"].as_array().map(|d| d.len()), Some(7));
        assert_eq!(json["days"][6], "2026-10-18");
    }

    #[test]
    fn iso_year_differs_at_year_boundary() {
        // 2027-01-01 is a Friday in week 53 of 2026
        let week = CalendarWeek::containing(date(2027, 1, 1));
        assert_eq!((week.iso_year, week.week), (2026, 53));

        let next = week.offset(1);
        assert_eq!((next.iso_year, next.week), (2027, 1));
        assert_eq!(next.offset(-1), week);
    }

    #[test]
    fn view_marks_today() {
        let today = date(2026, 10, 14);
        let view = CalendarWeek::containing(today).view(today);
        assert_eq!(view.days[0].date, "12.10.2026");
        assert_eq!(view.days[2].weekday, "Mittwoch");
        assert!(view.days[2].today);
        assert_eq!(view.days.iter().filter(|d| d.today).count(), 1);
    }

    #[test]
    fn weekday_names_are_german() {
        assert_eq!(weekday_name(Weekday::Mon), "Montag");
        assert_eq!(weekday_name(Weekday::Fri), "Freitag");
    }
}
