//! The 48-hour lead-time rule.
//!
//! A day can be reserved as long as its last instant is not before
//! `now + 48h`. The rule is recomputed on every call; nothing about it is
//! stored.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Minimum notice, in hours, between now and the end of a reserved day.
pub const LEAD_TIME_HOURS: i64 = 48;

pub fn lead_time() -> TimeDelta { TimeDelta::hours(LEAD_TIME_HOURS) }

/// The last millisecond of `date` (`23:59:59.999`).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
  date
    .and_time(NaiveTime::MIN)
    .checked_add_signed(TimeDelta::days(1) - TimeDelta::milliseconds(1))
    .unwrap_or(NaiveDateTime::MAX)
}

/// Whether `date` may be reserved at `now`.
///
/// The comparison is inclusive: a day whose end falls exactly on
/// `now + 48h` is still eligible.
pub fn is_eligible(date: NaiveDate, now: NaiveDateTime) -> bool {
  match now.checked_add_signed(lead_time()) {
    Some(deadline) => end_of_day(date) >= deadline,
    None => false,
  }
}

/// The earliest day that passes [`is_eligible`] at `now`.
///
/// Usually the day `now + 48h` falls on. When the deadline lands after that
/// day's `.999` millisecond the following day is the first one.
pub fn first_eligible_date(now: NaiveDateTime) -> Option<NaiveDate> {
  let candidate = now.checked_add_signed(lead_time())?.date();
  if is_eligible(candidate, now) {
    Some(candidate)
  } else {
    candidate.succ_opt()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
  }

  #[test]
  fn end_of_day_is_last_millisecond() {
    let eod = end_of_day(date(2024, 1, 3));
    assert_eq!(eod, date(2024, 1, 3).and_hms_milli_opt(23, 59, 59, 999).unwrap());
  }

  #[test]
  fn day_within_47h59m_is_ineligible() {
    let now = at(2024, 1, 1, 0, 0);
    let near = (now + TimeDelta::hours(47) + TimeDelta::minutes(59)).date();
    assert_eq!(near, date(2024, 1, 2));
    assert!(!is_eligible(near, now));
  }

  #[test]
  fn day_at_48h_is_eligible() {
    let now = at(2024, 1, 1, 0, 0);
    let far = (now + TimeDelta::hours(48)).date();
    assert!(is_eligible(far, now));
  }

  #[test]
  fn boundary_is_inclusive() {
    // now + 48h lands exactly on the end of 2024-01-03.
    let now = date(2024, 1, 1).and_hms_milli_opt(23, 59, 59, 999).unwrap();
    assert_eq!(now + lead_time(), end_of_day(date(2024, 1, 3)));
    assert!(is_eligible(date(2024, 1, 3), now));

    // One millisecond later it is not.
    let later = now + TimeDelta::milliseconds(1);
    assert!(!is_eligible(date(2024, 1, 3), later));
    assert!(is_eligible(date(2024, 1, 4), later));
  }

  #[test]
  fn past_and_today_are_ineligible() {
    let now = at(2024, 3, 10, 9, 30);
    assert!(!is_eligible(date(2024, 3, 9), now));
    assert!(!is_eligible(date(2024, 3, 10), now));
    assert!(!is_eligible(date(2024, 3, 11), now));
    assert!(is_eligible(date(2024, 3, 12), now));
  }

  #[test]
  fn first_eligible_date_matches_predicate() {
    for (h, min) in [(0, 0), (9, 30), (23, 59)] {
      let now = at(2024, 2, 28, h, min);
      let first = first_eligible_date(now).unwrap();
      assert!(is_eligible(first, now));
      assert!(!is_eligible(first.pred_opt().unwrap(), now));
    }
  }

  #[test]
  fn first_eligible_date_skips_day_ending_before_sub_millisecond_deadline() {
    // now + 48h = 2024-01-03T23:59:59.9995, past the end of the 3rd.
    let now = date(2024, 1, 1)
      .and_hms_micro_opt(23, 59, 59, 999_500)
      .unwrap();
    let first = first_eligible_date(now).unwrap();
    assert_eq!(first, date(2024, 1, 4));
    assert!(is_eligible(first, now));
    assert!(!is_eligible(date(2024, 1, 3), now));
  }
}
