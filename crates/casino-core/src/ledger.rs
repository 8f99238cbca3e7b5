//! [`ReservationLedger`] — every reservation made during the session.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
  Result,
  eligibility::is_eligible,
  error::RequestProblem,
  reservation::{MealType, Reservation, ReservationId},
};

// ─── Ledger ──────────────────────────────────────────────────────────────────

/// The reservation records of one session, in insertion order.
///
/// Records are never removed; cancellation flips the status and leaves the
/// record in place. Like [`DateSelection`](crate::DateSelection), every
/// change produces a new ledger value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationLedger {
  records: Vec<Reservation>,
}

impl ReservationLedger {
  pub fn new() -> Self { Self::default() }

  // ── Writes ──────────────────────────────────────────────────────────────

  /// Book one `Confirmed` reservation per date, in the order given.
  ///
  /// Fails with [`Error::InvalidRequest`](crate::Error::InvalidRequest) if
  /// `dates` is empty, repeats a day, or holds a day that is not eligible at
  /// `now`. Either every date is booked or none is.
  pub fn create(
    &self,
    dates: &[NaiveDate],
    meal_type: MealType,
    now: NaiveDateTime,
  ) -> Result<(Self, Vec<Reservation>)> {
    check_request(dates, now)?;

    let batch: Vec<Reservation> = dates
      .iter()
      .map(|&date| Reservation::confirmed(date, meal_type))
      .collect();

    let mut records = Vec::with_capacity(self.records.len() + batch.len());
    records.extend_from_slice(&self.records);
    records.extend_from_slice(&batch);

    tracing::debug!(count = batch.len(), %meal_type, "reservations created");
    Ok((Self { records }, batch))
  }

  /// Cancel the reservation with `id`.
  ///
  /// Unknown and already-cancelled ids are ignored; a stale cancel from the
  /// UI is not an error.
  pub fn cancel(&self, id: ReservationId) -> Self {
    let mut next = self.clone();
    match next.records.iter_mut().find(|r| r.id == id) {
      Some(rsvp) => {
        if rsvp.cancel() {
          tracing::debug!(%id, "reservation cancelled");
        } else {
          tracing::trace!(%id, "reservation already cancelled");
        }
      }
      None => tracing::trace!(%id, "cancel for unknown reservation ignored"),
    }
    next
  }

  // ── Reads ───────────────────────────────────────────────────────────────

  /// All records that are not cancelled, in insertion order.
  pub fn active(&self) -> impl Iterator<Item = &Reservation> + '_ {
    self.records.iter().filter(|r| r.is_active())
  }

  /// Active records whose day starts strictly after `now`.
  pub fn upcoming(
    &self,
    now: NaiveDateTime,
  ) -> impl Iterator<Item = &Reservation> + '_ {
    self
      .active()
      .filter(move |r| r.date.and_time(NaiveTime::MIN) > now)
  }

  pub fn upcoming_count(&self, now: NaiveDateTime) -> usize {
    self.upcoming(now).count()
  }

  pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
    self.records.iter().find(|r| r.id == id)
  }

  /// Every record, cancelled ones included.
  pub fn iter(&self) -> std::slice::Iter<'_, Reservation> { self.records.iter() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

fn check_request(dates: &[NaiveDate], now: NaiveDateTime) -> Result<()> {
  if dates.is_empty() {
    return Err(RequestProblem::EmptySelection.into());
  }
  let mut seen = HashSet::with_capacity(dates.len());
  for &date in dates {
    if !is_eligible(date, now) {
      return Err(RequestProblem::Ineligible(date).into());
    }
    if !seen.insert(date) {
      return Err(RequestProblem::DuplicateDate(date).into());
    }
  }
  Ok(())
}

impl<'a> IntoIterator for &'a ReservationLedger {
  type Item = &'a Reservation;
  type IntoIter = std::slice::Iter<'a, Reservation>;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Error, ReservationStatus};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn now() -> NaiveDateTime { date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap() }

  #[test]
  fn create_confirms_every_date_in_input_order() {
    let dates = [date(2024, 1, 8), date(2024, 1, 3), date(2024, 1, 5)];
    let (ledger, batch) = ReservationLedger::new()
      .create(&dates, MealType::Hypocaloric, now())
      .unwrap();

    assert_eq!(ledger.len(), 3);
    let got: Vec<_> = batch.iter().map(|r| r.date).collect();
    assert_eq!(got, dates);
    assert!(batch.iter().all(|r| r.status == ReservationStatus::Confirmed));
    assert!(batch.iter().all(|r| r.meal_type == MealType::Hypocaloric));

    let ids: HashSet<_> = batch.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 3);
  }

  #[test]
  fn create_appends_after_existing_records() {
    let (first, a) = ReservationLedger::new()
      .create(&[date(2024, 1, 10)], MealType::Normal, now())
      .unwrap();
    let (second, b) = first
      .create(&[date(2024, 1, 4), date(2024, 1, 12)], MealType::Vegetarian, now())
      .unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 3);
    let order: Vec<_> = second.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![a[0].id, b[0].id, b[1].id]);
  }

  #[test]
  fn create_rejects_empty_request() {
    let ledger = ReservationLedger::new();
    let err = ledger.create(&[], MealType::Normal, now()).unwrap_err();
    assert_eq!(err, Error::InvalidRequest(RequestProblem::EmptySelection));
    assert!(ledger.is_empty());
  }

  #[test]
  fn create_is_all_or_nothing() {
    let (ledger, _) = ReservationLedger::new()
      .create(&[date(2024, 1, 6)], MealType::Normal, now())
      .unwrap();

    let dates = [date(2024, 1, 3), date(2024, 1, 2), date(2024, 1, 5)];
    let err = ledger.create(&dates, MealType::Normal, now()).unwrap_err();
    assert_eq!(
      err,
      Error::InvalidRequest(RequestProblem::Ineligible(date(2024, 1, 2)))
    );
    assert_eq!(ledger.len(), 1);
  }

  #[test]
  fn create_rejects_repeated_day() {
    let dates = [date(2024, 1, 3), date(2024, 1, 4), date(2024, 1, 3)];
    let err = ReservationLedger::new()
      .create(&dates, MealType::Normal, now())
      .unwrap_err();
    assert_eq!(
      err,
      Error::InvalidRequest(RequestProblem::DuplicateDate(date(2024, 1, 3)))
    );
  }

  #[test]
  fn cancel_twice_equals_cancel_once() {
    let (ledger, batch) = ReservationLedger::new()
      .create(&[date(2024, 1, 3), date(2024, 1, 4)], MealType::Normal, now())
      .unwrap();
    let once = ledger.cancel(batch[0].id);
    let twice = once.cancel(batch[0].id);
    assert_eq!(once, twice);
    assert_eq!(
      once.get(batch[0].id).map(|r| r.status),
      Some(ReservationStatus::Cancelled)
    );
    // The earlier ledger value still has it confirmed.
    assert_eq!(
      ledger.get(batch[0].id).map(|r| r.status),
      Some(ReservationStatus::Confirmed)
    );
  }

  #[test]
  fn cancel_unknown_id_is_a_no_op() {
    let (ledger, _) = ReservationLedger::new()
      .create(&[date(2024, 1, 3)], MealType::Normal, now())
      .unwrap();
    let (_, stranger) = ReservationLedger::new()
      .create(&[date(2024, 1, 3)], MealType::Normal, now())
      .unwrap();
    assert_eq!(ledger.cancel(stranger[0].id), ledger);
  }

  #[test]
  fn cancelled_records_stay_in_ledger() {
    let (ledger, batch) = ReservationLedger::new()
      .create(&[date(2024, 1, 3)], MealType::Normal, now())
      .unwrap();
    let ledger = ledger.cancel(batch[0].id);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.active().count(), 0);
  }

  #[test]
  fn upcoming_requires_day_strictly_after_now() {
    let (ledger, _) = ReservationLedger::new()
      .create(&[date(2024, 1, 3), date(2024, 1, 4)], MealType::Normal, now())
      .unwrap();

    // At midnight of the 3rd that day no longer counts as upcoming.
    let later = date(2024, 1, 3).and_hms_opt(0, 0, 0).unwrap();
    let upcoming: Vec<_> = ledger.upcoming(later).map(|r| r.date).collect();
    assert_eq!(upcoming, vec![date(2024, 1, 4)]);
    assert_eq!(ledger.active().count(), 2);

    let one_second_before = later - chrono::TimeDelta::seconds(1);
    assert_eq!(ledger.upcoming_count(one_second_before), 2);
  }
}
