//! Core types and rules for the Casino lunch reservation system.
//!
//! Everything here is a pure computation over in-memory values. The wall
//! clock is never read inside this crate: every time-sensitive function takes
//! `now` as an argument, and the presentation layer decides where it comes
//! from.

pub mod eligibility;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod menu;
pub mod reservation;
pub mod selection;

pub use error::{Error, RequestProblem, Result};
pub use ledger::ReservationLedger;
pub use reservation::{MealType, Reservation, ReservationId, ReservationStatus};
pub use selection::DateSelection;
