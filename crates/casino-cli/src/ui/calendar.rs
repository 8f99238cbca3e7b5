//! New-reservation tab — month calendar on the left, request details on the
//! right.

use casino_core::{MealType, eligibility};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::app::App;

const WEEKDAYS: &str = " Mo  Tu  We  Th  Fr  Sa  Su";

/// Weeks (Monday first) of the month containing `day`; cells outside the
/// month are `None`.
pub fn month_grid(day: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
  let Some(first) = day.with_day(1) else {
    return Vec::new();
  };
  let mut weeks = Vec::new();
  let mut week = [None; 7];
  for date in first.iter_days().take_while(|d| d.month() == first.month()) {
    let col = date.weekday().num_days_from_monday() as usize;
    week[col] = Some(date);
    if col == 6 {
      weeks.push(week);
      week = [None; 7];
    }
  }
  if week.iter().any(Option::is_some) {
    weeks.push(week);
  }
  weeks
}

pub fn meal_color(meal_type: MealType) -> Color {
  match meal_type {
    MealType::Normal => Color::Blue,
    MealType::Hypocaloric => Color::Green,
    MealType::Vegetarian => Color::Rgb(255, 140, 0),
  }
}

/// Render the tab into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App, now: NaiveDateTime) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(area);

  draw_calendar(f, cols[0], app, now);
  draw_details(f, cols[1], app);
}

// ─── Calendar ─────────────────────────────────────────────────────────────────

fn draw_calendar(f: &mut Frame, area: Rect, app: &App, now: NaiveDateTime) {
  let block = Block::default()
    .title(" Pick dates ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    Line::from(Span::styled(
      app.cursor_date.format("%B %Y").to_string(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(WEEKDAYS, Style::default().fg(Color::Gray))),
  ];

  for week in month_grid(app.cursor_date) {
    let spans: Vec<Span> = week
      .iter()
      .map(|cell| match cell {
        None => Span::raw("    "),
        Some(date) => day_span(app, *date, now),
      })
      .collect();
    lines.push(Line::from(spans));
  }

  lines.push(Line::raw(""));
  let first = eligibility::first_eligible_date(now)
    .map(|d| d.format("%A %d %B").to_string())
    .unwrap_or_else(|| "—".into());
  lines.push(Line::from(Span::styled(
    format!("First available date: {first}"),
    Style::default().fg(Color::Gray),
  )));
  lines.push(Line::from(Span::styled(
    format!(
      "Reservations must be made at least {} hours in advance",
      eligibility::LEAD_TIME_HOURS
    ),
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn day_span(app: &App, date: NaiveDate, now: NaiveDateTime) -> Span<'static> {
  let mut style = if app.selection.contains(date) {
    Style::default()
      .fg(Color::Black)
      .bg(Color::Green)
      .add_modifier(Modifier::BOLD)
  } else if eligibility::is_eligible(date, now) {
    Style::default().fg(Color::White)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  if date == app.cursor_date {
    style = style.add_modifier(Modifier::REVERSED);
  }
  Span::styled(format!(" {:>2} ", date.day()), style)
}

// ─── Details ──────────────────────────────────────────────────────────────────

fn draw_details(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Reservation details ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![Line::from(Span::styled(
    "Meal type  [m] change",
    Style::default().add_modifier(Modifier::BOLD),
  ))];

  for meal_type in MealType::iter() {
    let marker = if meal_type == app.meal_type { "(•)" } else { "( )" };
    let label_style = if meal_type == app.meal_type {
      Style::default().add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    lines.push(Line::from(vec![
      Span::raw(format!("  {marker} ")),
      Span::styled("● ", Style::default().fg(meal_color(meal_type))),
      Span::styled(meal_type.label(), label_style),
    ]));
  }

  lines.push(Line::raw(""));

  if app.selection.is_empty() {
    lines.push(Line::from(Span::styled(
      "No dates selected. You can pick several days, not only consecutive ones.",
      Style::default().fg(Color::DarkGray),
    )));
  } else {
    lines.push(Line::from(Span::styled(
      "Selected dates  [c] clear",
      Style::default().add_modifier(Modifier::BOLD),
    )));
    let chips: Vec<Span> = app
      .selection
      .dates()
      .iter()
      .map(|d| {
        Span::styled(
          format!(" {} ", d.format("%a %d/%m")),
          Style::default().fg(Color::Black).bg(Color::Gray),
        )
      })
      .flat_map(|chip| [chip, Span::raw(" ")])
      .collect();
    lines.push(Line::from(chips));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled(
      "Summary",
      Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("  Dates selected: {}", app.selection.len())));
    lines.push(Line::from(vec![
      Span::raw("  Meal type:      "),
      Span::styled("● ", Style::default().fg(meal_color(app.meal_type))),
      Span::raw(app.meal_type.label()),
    ]));
  }

  lines.push(Line::raw(""));
  let plural = if app.selection.len() > 1 { "s" } else { "" };
  let button_style = if app.selection.is_empty() {
    Style::default().fg(Color::DarkGray)
  } else {
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD)
  };
  lines.push(Line::from(Span::styled(
    format!(" [Enter] Confirm reservation{plural} "),
    button_style,
  )));

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn grid_starts_on_monday_column() {
    // 2024-01-01 is a Monday, 2024-02-01 a Thursday.
    let jan = month_grid(date(2024, 1, 17));
    assert_eq!(jan[0][0], Some(date(2024, 1, 1)));
    let feb = month_grid(date(2024, 2, 29));
    assert_eq!(feb[0][..3], [None, None, None]);
    assert_eq!(feb[0][3], Some(date(2024, 2, 1)));
  }

  #[test]
  fn grid_covers_every_day_once() {
    let grid = month_grid(date(2024, 2, 10));
    let days: Vec<_> = grid.iter().flatten().flatten().copied().collect();
    assert_eq!(days.len(), 29);
    assert_eq!(days.first(), Some(&date(2024, 2, 1)));
    assert_eq!(days.last(), Some(&date(2024, 2, 29)));
  }

  #[test]
  fn short_last_week_is_kept() {
    // March 2024 ends on a Sunday; April 2024 ends on a Tuesday.
    let march = month_grid(date(2024, 3, 1));
    assert_eq!(march.last().unwrap()[6], Some(date(2024, 3, 31)));
    let april = month_grid(date(2024, 4, 1));
    assert_eq!(april.last().unwrap()[1], Some(date(2024, 4, 30)));
    assert_eq!(april.last().unwrap()[2], None);
  }
}
