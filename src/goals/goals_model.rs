use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// Completion status of a goal. Both transitions are user-triggered and
/// reversible; neither state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Incomplete,
    Complete,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Incomplete => "incomplete",
            GoalStatus::Complete => "complete",
        }
    }

    pub fn toggled(&self) -> GoalStatus {
        match self {
            GoalStatus::Incomplete => GoalStatus::Complete,
            GoalStatus::Complete => GoalStatus::Incomplete,
        }
    }
}

/// Which slice of an owner's goals to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalScope {
    ThisWeek,
    All,
}

/// Week-start convention for "this week" bucketing. Constructor
/// configuration on the goal service, never a hidden default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

/// Inclusive [start, end] bounds of the week containing `now`.
/// The end bound is the last representable microsecond of the week's
/// final day, so `created_at BETWEEN start AND end` captures the whole
/// week on both ends.
pub fn week_bounds(week_start: WeekStart, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let days_into_week = match week_start {
        WeekStart::Sunday => now.weekday().num_days_from_sunday(),
        WeekStart::Monday => now.weekday().num_days_from_monday(),
    };

    let start = (now.date() - Duration::days(days_into_week as i64)).and_time(NaiveTime::MIN);
    let end = start + Duration::days(7) - Duration::microseconds(1);

    (start, end)
}

#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub owner_id: String,
    pub text: String,
    pub status: String,
    pub assigned_points: i32,
    pub created_at: NaiveDateTime,
}

impl Goal {
    pub fn is_complete(&self) -> bool {
        self.status == GoalStatus::Complete.as_str()
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub owner_id: String,
    pub text: String,
    pub status: String,
    pub assigned_points: i32,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(GoalStatus::Incomplete.toggled(), GoalStatus::Complete);
        assert_eq!(GoalStatus::Complete.toggled(), GoalStatus::Incomplete);
        assert_eq!(GoalStatus::Complete.toggled().toggled(), GoalStatus::Complete);
    }

    #[test]
    fn week_bounds_sunday_start() {
        // 2024-03-13 is a Wednesday
        let (start, end) = week_bounds(WeekStart::Sunday, dt(2024, 3, 13, 15, 30, 0));
        assert_eq!(start, dt(2024, 3, 10, 0, 0, 0));
        assert_eq!(
            end,
            dt(2024, 3, 16, 23, 59, 59) + Duration::microseconds(999_999)
        );
    }

    #[test]
    fn week_bounds_monday_start() {
        let (start, end) = week_bounds(WeekStart::Monday, dt(2024, 3, 13, 15, 30, 0));
        assert_eq!(start, dt(2024, 3, 11, 0, 0, 0));
        assert_eq!(
            end,
            dt(2024, 3, 17, 23, 59, 59) + Duration::microseconds(999_999)
        );
    }

    #[test]
    fn week_bounds_on_week_start_day() {
        // A Sunday belongs to the week it begins
        let (start, _) = week_bounds(WeekStart::Sunday, dt(2024, 3, 10, 0, 0, 0));
        assert_eq!(start, dt(2024, 3, 10, 0, 0, 0));
    }

    #[test]
    fn week_bounds_cross_month() {
        // 2024-04-02 is a Tuesday; a Sunday-start week begins in March
        let (start, end) = week_bounds(WeekStart::Sunday, dt(2024, 4, 2, 9, 0, 0));
        assert_eq!(start, dt(2024, 3, 31, 0, 0, 0));
        assert_eq!(
            end,
            dt(2024, 4, 6, 23, 59, 59) + Duration::microseconds(999_999)
        );
    }
}
