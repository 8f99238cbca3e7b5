//! The operations a presentation layer calls, as free functions.
//!
//! These are thin wrappers over [`DateSelection`] and [`ReservationLedger`];
//! they exist so a front end can drive the whole engine from one module.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
  DateSelection, MealType, Reservation, ReservationId, ReservationLedger, Result,
  eligibility,
};

pub fn is_eligible(date: NaiveDate, now: NaiveDateTime) -> bool {
  eligibility::is_eligible(date, now)
}

pub fn toggle_date_selection(set: &DateSelection, date: NaiveDate) -> DateSelection {
  set.toggle(date)
}

pub fn clear_selection(set: &DateSelection) -> DateSelection { set.clear() }

/// Book every staged date. See [`ReservationLedger::create`].
pub fn create_reservations(
  ledger: &ReservationLedger,
  dates: &DateSelection,
  meal_type: MealType,
  now: NaiveDateTime,
) -> Result<(ReservationLedger, Vec<Reservation>)> {
  ledger.create(dates.dates(), meal_type, now)
}

pub fn cancel_reservation(
  ledger: &ReservationLedger,
  id: ReservationId,
) -> ReservationLedger {
  ledger.cancel(id)
}

/// Non-cancelled reservations. Being active does not depend on the clock, so
/// `now` only keeps the signature in line with [`list_upcoming`].
pub fn list_active(
  ledger: &ReservationLedger,
  _now: NaiveDateTime,
) -> impl Iterator<Item = &Reservation> + '_ {
  ledger.active()
}

pub fn list_upcoming(
  ledger: &ReservationLedger,
  now: NaiveDateTime,
) -> impl Iterator<Item = &Reservation> + '_ {
  ledger.upcoming(now)
}
