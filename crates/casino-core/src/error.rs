//! Error types for `casino-core`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// The request can never succeed as submitted. Raised by reservation
  /// creation only; every other operation is total.
  #[error("invalid reservation request: {0}")]
  InvalidRequest(RequestProblem),
}

/// Which rule a rejected reservation request broke.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RequestProblem {
  #[error("no dates were selected")]
  EmptySelection,

  #[error("{0} is inside the 48-hour lead time")]
  Ineligible(NaiveDate),

  #[error("{0} was selected more than once")]
  DuplicateDate(NaiveDate),
}

impl From<RequestProblem> for Error {
  fn from(problem: RequestProblem) -> Self { Self::InvalidRequest(problem) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
