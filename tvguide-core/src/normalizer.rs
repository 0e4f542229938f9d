//! Timeline normalization.
//!
//! Listings carry bare `HH:MM` times. This pass anchors them to the
//! owning day's date in a fixed offset. The last program of a day is
//! assumed to run past midnight: its end lands on the next listed day's
//! date, or on the following calendar day when no later day exists.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::constants::LOCAL_TIME_FORMAT;
use crate::error::{TvGuideError, TvGuideResult};
use crate::schedule::Day;

pub struct Normalizer {
    offset: FixedOffset,
}

impl Normalizer {
    pub fn new(offset: FixedOffset) -> Self {
        Normalizer { offset }
    }

    /// Fill `absolute_start`/`absolute_end` on every program, in place.
    ///
    /// Fails on the first stored time that is not `HH:MM`; nothing
    /// downstream should see a half-normalized schedule.
    pub fn normalize(&self, days: &mut [Day]) -> TvGuideResult<()> {
        let next_dates: Vec<Option<NaiveDate>> = days
            .iter()
            .skip(1)
            .map(|d| Some(d.date))
            .chain(std::iter::once(None))
            .collect();

        for (day, next_date) in days.iter_mut().zip(next_dates) {
            let rollover = rollover_date(day.date, next_date)?;
            let last = day.entries.len().saturating_sub(1);

            for (j, program) in day.entries.iter_mut().enumerate() {
                let start = parse_local(&program.local_start)?;
                let end = parse_local(&program.local_end)?;

                let end_date = if j == last { rollover } else { day.date };

                program.absolute_start = Some(self.at(day.date, start)?);
                program.absolute_end = Some(self.at(end_date, end)?);
            }
        }

        Ok(())
    }

    fn at(&self, date: NaiveDate, time: NaiveTime) -> TvGuideResult<DateTime<FixedOffset>> {
        let local = date.and_time(time);
        self.offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| TvGuideError::TimeReparse(local.to_string()))
    }
}

/// Date the last program of a day ends on.
fn rollover_date(date: NaiveDate, next_day: Option<NaiveDate>) -> TvGuideResult<NaiveDate> {
    match next_day {
        Some(next) => Ok(next),
        None => date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| TvGuideError::DateOutOfRange(date.to_string())),
    }
}

fn parse_local(value: &str) -> TvGuideResult<NaiveTime> {
    NaiveTime::parse_from_str(value, LOCAL_TIME_FORMAT)
        .map_err(|_| TvGuideError::TimeReparse(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::schedule::Program;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    fn day(y: i32, m: u32, d: u32, times: &[(&str, &str)]) -> Day {
        let config = ScheduleConfig::default();
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let mut day = Day::new(date, date);
        day.entries = times
            .iter()
            .enumerate()
            .map(|(i, (start, end))| Program::new(format!("Show {i}"), *start, *end, &config))
            .collect();
        day
    }

    fn rfc3339(dt: Option<DateTime<FixedOffset>>) -> String {
        dt.expect("timestamp should be set")
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
    }

    #[test]
    fn test_end_to_end_gap_between_days() {
        let mut days = vec![
            day(
                2024,
                1,
                15,
                &[("09:00", "09:30"), ("09:30", "10:00"), ("23:30", "00:15")],
            ),
            day(2024, 1, 17, &[("00:00", "01:00")]),
        ];

        Normalizer::new(ist()).normalize(&mut days).unwrap();

        let d1 = &days[0].entries;
        assert_eq!(rfc3339(d1[0].absolute_start), "2024-01-15T09:00:00+05:30");
        assert_eq!(rfc3339(d1[0].absolute_end), "2024-01-15T09:30:00+05:30");
        assert_eq!(rfc3339(d1[1].absolute_end), "2024-01-15T10:00:00+05:30");
        assert_eq!(rfc3339(d1[2].absolute_start), "2024-01-15T23:30:00+05:30");
        // Borrows the next listed day's date, not 2024-01-16
        assert_eq!(rfc3339(d1[2].absolute_end), "2024-01-17T00:15:00+05:30");

        let d2 = &days[1].entries;
        assert_eq!(rfc3339(d2[0].absolute_start), "2024-01-17T00:00:00+05:30");
        assert_eq!(rfc3339(d2[0].absolute_end), "2024-01-18T01:00:00+05:30");
    }

    #[test]
    fn test_non_last_programs_stay_on_their_day() {
        let mut days = vec![
            day(2024, 3, 1, &[("10:00", "11:00"), ("11:30", "12:30"), ("22:00", "23:00")]),
            day(2024, 3, 2, &[("06:00", "07:00")]),
        ];

        Normalizer::new(ist()).normalize(&mut days).unwrap();

        for program in &days[0].entries[..2] {
            let start = program.absolute_start.unwrap();
            let end = program.absolute_end.unwrap();
            assert_eq!(start.date_naive(), end.date_naive());
        }
    }

    #[test]
    fn test_last_day_rolls_over_month_end() {
        let mut days = vec![day(2024, 2, 29, &[("23:00", "00:30")])];

        Normalizer::new(ist()).normalize(&mut days).unwrap();

        assert_eq!(
            rfc3339(days[0].entries[0].absolute_end),
            "2024-03-01T00:30:00+05:30"
        );
    }

    #[test]
    fn test_days_out_of_calendar_order_use_next_listed_day() {
        let mut days = vec![
            day(2024, 1, 20, &[("22:00", "01:00")]),
            day(2024, 1, 18, &[("22:00", "01:00")]),
        ];

        Normalizer::new(ist()).normalize(&mut days).unwrap();

        assert_eq!(
            rfc3339(days[0].entries[0].absolute_end),
            "2024-01-18T01:00:00+05:30"
        );
        assert_eq!(
            rfc3339(days[1].entries[0].absolute_end),
            "2024-01-19T01:00:00+05:30"
        );
    }

    #[test]
    fn test_empty_next_day_still_anchors_rollover() {
        let mut days = vec![
            day(2024, 1, 15, &[("09:00", "10:00")]),
            day(2024, 1, 16, &[]),
        ];

        Normalizer::new(ist()).normalize(&mut days).unwrap();

        assert_eq!(
            rfc3339(days[0].entries[0].absolute_end),
            "2024-01-16T10:00:00+05:30"
        );
    }

    #[test]
    fn test_other_offsets() {
        let utc_minus_3 = FixedOffset::west_opt(3 * 3600).unwrap();
        let mut days = vec![day(2024, 1, 15, &[("09:00", "10:00")])];

        Normalizer::new(utc_minus_3).normalize(&mut days).unwrap();

        assert_eq!(
            rfc3339(days[0].entries[0].absolute_start),
            "2024-01-15T09:00:00-03:00"
        );
    }

    #[test]
    fn test_last_day_without_successor_date_aborts() {
        let mut last = day(2024, 1, 15, &[("23:00", "00:30")]);
        last.date = NaiveDate::MAX;

        let err = Normalizer::new(ist()).normalize(&mut [last]).unwrap_err();

        assert!(matches!(err, TvGuideError::DateOutOfRange(_)));
    }

    #[test]
    fn test_malformed_stored_time_aborts() {
        let mut days = vec![day(2024, 1, 15, &[("09:00", "10:00"), ("", "11:00")])];

        let err = Normalizer::new(ist()).normalize(&mut days).unwrap_err();

        assert!(matches!(err, TvGuideError::TimeReparse(v) if v.is_empty()));
    }
}
