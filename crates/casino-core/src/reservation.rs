//! Reservation records and the enumerations they carry.
//!
//! A reservation's identity, date, and meal type are fixed when the ledger
//! creates it. Only the status moves, and only towards
//! [`ReservationStatus::Cancelled`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};
use uuid::Uuid;

// ─── Meal type ───────────────────────────────────────────────────────────────

/// The lunch variant a diner asks for.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
  #[default]
  Normal,
  Hypocaloric,
  Vegetarian,
}

impl MealType {
  /// Human-readable name shown next to a reservation.
  pub fn label(self) -> &'static str {
    match self {
      Self::Normal => "Normal lunch",
      Self::Hypocaloric => "Hypocaloric lunch",
      Self::Vegetarian => "Vegetarian lunch",
    }
  }

  /// The following variant in declaration order, wrapping around.
  pub fn next(self) -> Self {
    Self::iter()
      .cycle()
      .skip_while(|m| *m != self)
      .nth(1)
      .unwrap_or(self)
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle status of a reservation.
///
/// Creation always yields `Confirmed`. `Pending` is reserved for an approval
/// step that does not exist yet; nothing produces it.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
  Confirmed,
  Pending,
  Cancelled,
}

impl ReservationStatus {
  pub fn is_active(self) -> bool { !matches!(self, Self::Cancelled) }
}

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque reservation identifier.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
  pub(crate) fn generate() -> Self { Self(Uuid::new_v4()) }
}

impl fmt::Display for ReservationId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

// ─── Reservation ─────────────────────────────────────────────────────────────

/// One lunch booked for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
  pub id:        ReservationId,
  /// The day of the lunch; the time of day is irrelevant.
  pub date:      NaiveDate,
  pub meal_type: MealType,
  pub status:    ReservationStatus,
}

impl Reservation {
  pub(crate) fn confirmed(date: NaiveDate, meal_type: MealType) -> Self {
    Self {
      id: ReservationId::generate(),
      date,
      meal_type,
      status: ReservationStatus::Confirmed,
    }
  }

  pub fn is_active(&self) -> bool { self.status.is_active() }

  /// Move to `Cancelled`. Returns `false` if it already was.
  pub(crate) fn cancel(&mut self) -> bool {
    if !self.is_active() {
      return false;
    }
    self.status = ReservationStatus::Cancelled;
    true
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  #[test]
  fn meal_type_cycles_in_declaration_order() {
    assert_eq!(MealType::Normal.next(), MealType::Hypocaloric);
    assert_eq!(MealType::Hypocaloric.next(), MealType::Vegetarian);
    assert_eq!(MealType::Vegetarian.next(), MealType::Normal);
  }

  #[test]
  fn meal_type_parses_lowercase_names() {
    assert_eq!(MealType::from_str("vegetarian").unwrap(), MealType::Vegetarian);
    assert_eq!(MealType::Hypocaloric.to_string(), "hypocaloric");
    assert!(MealType::from_str("vegan").is_err());
  }

  #[test]
  fn only_cancelled_is_inactive() {
    assert!(ReservationStatus::Confirmed.is_active());
    assert!(ReservationStatus::Pending.is_active());
    assert!(!ReservationStatus::Cancelled.is_active());
  }

  #[test]
  fn cancel_is_one_way() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let mut rsvp = Reservation::confirmed(date, MealType::Normal);
    assert!(rsvp.cancel());
    assert!(!rsvp.cancel());
    assert_eq!(rsvp.status, ReservationStatus::Cancelled);
  }

  #[test]
  fn pending_can_be_cancelled() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let mut rsvp = Reservation {
      status: ReservationStatus::Pending,
      ..Reservation::confirmed(date, MealType::Vegetarian)
    };
    assert!(rsvp.cancel());
    assert_eq!(rsvp.status, ReservationStatus::Cancelled);
  }

  #[test]
  fn id_displays_as_hyphenated_uuid() {
    let id = ReservationId::generate();
    let shown = id.to_string();
    assert_eq!(Uuid::parse_str(&shown).map(ReservationId), Ok(id));
    assert_eq!(shown.len(), 36);
  }
}
