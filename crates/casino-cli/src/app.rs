//! Application state machine and event dispatcher.
//!
//! All reservation rules live in `casino-core`; this module only tracks
//! which screen is shown and where the cursors are. Every handler takes
//! the clock reading for the current frame as `now`.

use casino_core::{
  DateSelection, MealType, Reservation, ReservationLedger, eligibility,
  engine, menu::WeeklyMenu,
};
use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ─── Screens ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  /// Calendar, meal picker, and submit button.
  NewReservation,
  /// Upcoming reservations with a cancel action.
  MyReservations,
}

/// A modal drawn on top of the current tab; it receives all keys while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
  /// The weekly menu, showing week `week`.
  Menu { week: usize, scroll: u16 },
  /// Shown after a successful submit.
  Success { count: usize },
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub tab: Tab,

  pub overlay: Option<Overlay>,

  /// Dates staged for the next submit.
  pub selection: DateSelection,

  /// Meal type applied to the next submit.
  pub meal_type: MealType,

  pub ledger: ReservationLedger,

  /// Day under the calendar cursor.
  pub cursor_date: NaiveDate,

  /// Cursor position within the upcoming reservations list.
  pub list_cursor: usize,

  pub menu: WeeklyMenu,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  /// Start on the new-reservation tab with the cursor on the first day that
  /// can be booked.
  pub fn new(menu: WeeklyMenu, meal_type: MealType, now: NaiveDateTime) -> Self {
    Self {
      tab: Tab::NewReservation,
      overlay: None,
      selection: DateSelection::new(),
      meal_type,
      ledger: ReservationLedger::new(),
      cursor_date: eligibility::first_eligible_date(now).unwrap_or(now.date()),
      list_cursor: 0,
      menu,
      status_msg: String::new(),
    }
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  pub fn upcoming(&self, now: NaiveDateTime) -> Vec<&Reservation> {
    engine::list_upcoming(&self.ledger, now).collect()
  }

  pub fn cursor_reservation(&self, now: NaiveDateTime) -> Option<&Reservation> {
    self.upcoming(now).get(self.list_cursor).copied()
  }

  // ── Actions ───────────────────────────────────────────────────────────────

  /// Stage or unstage the day under the calendar cursor.
  pub fn toggle_cursor(&mut self, now: NaiveDateTime) {
    let date = self.cursor_date;
    if !self.selection.contains(date) && !engine::is_eligible(date, now) {
      self.status_msg = format!(
        "{} cannot be booked: reservations need {} hours notice",
        date.format("%a %d/%m"),
        eligibility::LEAD_TIME_HOURS
      );
      return;
    }
    self.selection = engine::toggle_date_selection(&self.selection, date);
    self.status_msg.clear();
  }

  pub fn clear_selection(&mut self) {
    self.selection = engine::clear_selection(&self.selection);
    self.status_msg.clear();
  }

  /// Book the staged dates. On success the selection is cleared and the
  /// success dialog opens; on failure the selection is kept and the reason
  /// goes to the status bar.
  pub fn submit(&mut self, now: NaiveDateTime) {
    match engine::create_reservations(&self.ledger, &self.selection, self.meal_type, now)
    {
      Ok((ledger, batch)) => {
        tracing::info!(count = batch.len(), meal_type = %self.meal_type, "reservations submitted");
        self.ledger = ledger;
        self.selection = self.selection.clear();
        self.overlay = Some(Overlay::Success { count: batch.len() });
        self.status_msg.clear();
      }
      Err(e) => {
        tracing::warn!(error = %e, "reservation request rejected");
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  /// Cancel the reservation under the list cursor.
  pub fn cancel_at_cursor(&mut self, now: NaiveDateTime) {
    let Some(rsvp) = self.cursor_reservation(now) else {
      return;
    };
    let (id, date) = (rsvp.id, rsvp.date);
    self.ledger = engine::cancel_reservation(&self.ledger, id);
    tracing::info!(%id, %date, "reservation cancelled");
    self.status_msg = format!("Cancelled the reservation for {}", date.format("%A %d %B"));

    let len = self.upcoming(now).len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  fn move_cursor_days(&mut self, days: i64) {
    if let Some(d) = self.cursor_date.checked_add_signed(TimeDelta::days(days)) {
      self.cursor_date = d;
    }
  }

  fn move_cursor_months(&mut self, forward: bool) {
    let moved = if forward {
      self.cursor_date.checked_add_months(Months::new(1))
    } else {
      self.cursor_date.checked_sub_months(Months::new(1))
    };
    if let Some(d) = moved {
      self.cursor_date = d;
    }
  }

  fn switch_tab(&mut self) {
    self.tab = match self.tab {
      Tab::NewReservation => Tab::MyReservations,
      Tab::MyReservations => Tab::NewReservation,
    };
    self.list_cursor = 0;
    self.status_msg.clear();
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent, now: NaiveDateTime) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.overlay {
      Some(Overlay::Success { .. }) => {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
          self.overlay = None;
        }
        return true;
      }
      Some(Overlay::Menu { week, scroll }) => {
        self.handle_menu_key(key, week, scroll);
        return true;
      }
      None => {}
    }

    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Tab | KeyCode::BackTab => {
        self.switch_tab();
        return true;
      }
      KeyCode::Char('v') => {
        self.overlay = Some(Overlay::Menu { week: 0, scroll: 0 });
        return true;
      }
      _ => {}
    }

    match self.tab {
      Tab::NewReservation => self.handle_calendar_key(key, now),
      Tab::MyReservations => self.handle_list_key(key, now),
    }
    true
  }

  fn handle_calendar_key(&mut self, key: KeyEvent, now: NaiveDateTime) {
    match key.code {
      KeyCode::Left | KeyCode::Char('h') => self.move_cursor_days(-1),
      KeyCode::Right | KeyCode::Char('l') => self.move_cursor_days(1),
      KeyCode::Up | KeyCode::Char('k') => self.move_cursor_days(-7),
      KeyCode::Down | KeyCode::Char('j') => self.move_cursor_days(7),
      KeyCode::PageUp | KeyCode::Char('[') => self.move_cursor_months(false),
      KeyCode::PageDown | KeyCode::Char(']') => self.move_cursor_months(true),
      KeyCode::Char(' ') => self.toggle_cursor(now),
      KeyCode::Char('m') => self.meal_type = self.meal_type.next(),
      KeyCode::Char('c') => self.clear_selection(),
      KeyCode::Enter => self.submit(now),
      _ => {}
    }
  }

  fn handle_list_key(&mut self, key: KeyEvent, now: NaiveDateTime) {
    // Rows drop out of the list as the clock passes their day.
    let len = self.upcoming(now).len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }
      KeyCode::Char('x') | KeyCode::Delete => self.cancel_at_cursor(now),
      KeyCode::Char('n') => {
        self.tab = Tab::NewReservation;
        self.status_msg.clear();
      }
      _ => {}
    }
  }

  fn handle_menu_key(&mut self, key: KeyEvent, week: usize, scroll: u16) {
    let weeks = self.menu.weeks.len();
    self.overlay = match key.code {
      KeyCode::Esc | KeyCode::Char('v') | KeyCode::Char('q') => None,
      KeyCode::Right | KeyCode::Char('l') if week + 1 < weeks => {
        Some(Overlay::Menu { week: week + 1, scroll: 0 })
      }
      KeyCode::Left | KeyCode::Char('h') if week > 0 => {
        Some(Overlay::Menu { week: week - 1, scroll: 0 })
      }
      KeyCode::Down | KeyCode::Char('j') => {
        Some(Overlay::Menu { week, scroll: scroll.saturating_add(1) })
      }
      KeyCode::Up | KeyCode::Char('k') => {
        Some(Overlay::Menu { week, scroll: scroll.saturating_sub(1) })
      }
      _ => Some(Overlay::Menu { week, scroll }),
    };
  }
}
