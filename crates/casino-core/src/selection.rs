//! The staged set of dates for a reservation request that has not been
//! submitted yet.

use chrono::{NaiveDate, NaiveDateTime};

use crate::eligibility;

/// Distinct calendar days, always sorted ascending.
///
/// Operations return a new selection instead of mutating in place, so each
/// intermediate state can be kept and compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DateSelection {
  dates: Vec<NaiveDate>,
}

impl DateSelection {
  pub fn new() -> Self { Self::default() }

  /// Remove `date` if it is staged, otherwise stage it.
  ///
  /// Eligibility is not checked here; the calendar is expected to disable
  /// ineligible days, and [`ReservationLedger::create`] checks again.
  ///
  /// [`ReservationLedger::create`]: crate::ReservationLedger::create
  pub fn toggle(&self, date: NaiveDate) -> Self {
    let mut dates = self.dates.clone();
    match dates.binary_search(&date) {
      Ok(index) => {
        dates.remove(index);
      }
      Err(index) => dates.insert(index, date),
    }
    Self { dates }
  }

  pub fn clear(&self) -> Self { Self::default() }

  /// See [`eligibility::is_eligible`].
  pub fn is_eligible(date: NaiveDate, now: NaiveDateTime) -> bool {
    eligibility::is_eligible(date, now)
  }

  pub fn dates(&self) -> &[NaiveDate] { &self.dates }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.dates.binary_search(&date).is_ok()
  }

  pub fn len(&self) -> usize { self.dates.len() }

  pub fn is_empty(&self) -> bool { self.dates.is_empty() }
}

impl FromIterator<NaiveDate> for DateSelection {
  fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
    let mut dates: Vec<_> = iter.into_iter().collect();
    dates.sort_unstable();
    dates.dedup();
    Self { dates }
  }
}

impl<'a> IntoIterator for &'a DateSelection {
  type Item = &'a NaiveDate;
  type IntoIter = std::slice::Iter<'a, NaiveDate>;

  fn into_iter(self) -> Self::IntoIter { self.dates.iter() }
}
