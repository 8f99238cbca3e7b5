//! TUI rendering — orchestrates all panes.

pub mod calendar;
pub mod menu;
pub mod reservations;

use chrono::NaiveDateTime;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Tabs},
};

use crate::app::{App, Overlay, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame. `now` is the clock reading shared
/// by every pane in this frame.
pub fn draw(f: &mut Frame, app: &App, now: NaiveDateTime) {
  let area = f.area();

  let [top, body, footer] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Min(0),
    Constraint::Length(1),
  ])
  .areas(area);

  draw_top_bar(f, top, app, now);
  match app.tab {
    Tab::NewReservation => calendar::draw(f, body, app, now),
    Tab::MyReservations => reservations::draw(f, body, app, now),
  }
  draw_footer(f, footer, app);

  match app.overlay {
    Some(Overlay::Menu { week, scroll }) => menu::draw(f, area, &app.menu, week, scroll),
    Some(Overlay::Success { count }) => draw_success(f, area, count),
    None => {}
  }
}

// ─── Top bar ──────────────────────────────────────────────────────────────────

/// Tabs on the left, the frame's clock reading on the right.
fn draw_top_bar(f: &mut Frame, area: Rect, app: &App, now: NaiveDateTime) {
  let clock = now.format(" %a %d %b  %H:%M ").to_string();
  let [tabs_area, clock_area] = Layout::horizontal([
    Constraint::Min(0),
    Constraint::Length(clock.chars().count() as u16),
  ])
  .areas(area);

  let titles = vec![
    " Casino ".to_string(),
    " New reservation ".to_string(),
    format!(" My reservations ({}) ", app.ledger.upcoming_count(now)),
  ];
  let selected = match app.tab {
    Tab::NewReservation => 1,
    Tab::MyReservations => 2,
  };
  let tabs = Tabs::new(titles)
    .select(selected)
    .style(Style::default().bg(Color::DarkGray).fg(Color::Gray))
    .highlight_style(
      Style::default()
        .bg(Color::Cyan)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD),
    )
    .padding("", "")
    .divider(" ");
  f.render_widget(tabs, tabs_area);

  f.render_widget(
    Paragraph::new(clock)
      .alignment(Alignment::Right)
      .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
    clock_area,
  );
}

// ─── Footer ───────────────────────────────────────────────────────────────────

/// Key bindings for whatever currently has focus, as `(key, action)` pairs.
pub fn key_hints(app: &App) -> &'static [(&'static str, &'static str)] {
  match (app.overlay, app.tab) {
    (Some(Overlay::Menu { .. }), _) => &[("←→", "week"), ("↑↓", "scroll"), ("Esc", "close")],
    (Some(Overlay::Success { .. }), _) => &[("Enter", "accept")],
    (None, Tab::NewReservation) => &[
      ("←→↑↓", "move"),
      ("[ ]", "month"),
      ("Space", "pick"),
      ("m", "meal"),
      ("c", "clear"),
      ("Enter", "confirm"),
      ("Tab", "switch"),
      ("v", "menu"),
      ("q", "quit"),
    ],
    (None, Tab::MyReservations) => &[
      ("↑↓", "move"),
      ("x", "cancel"),
      ("n", "new"),
      ("Tab", "switch"),
      ("v", "menu"),
      ("q", "quit"),
    ],
  }
}

/// The status message when there is one, key hints otherwise.
fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
  let line = if app.status_msg.is_empty() {
    let spans: Vec<Span> = key_hints(app)
      .iter()
      .flat_map(|(key, action)| {
        [
          Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
          Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
        ]
      })
      .collect();
    Line::from(spans)
  } else {
    let color = if app.status_msg.starts_with("Error:") { Color::Red } else { Color::Yellow };
    Line::from(Span::styled(format!(" {}", app.status_msg), Style::default().fg(color)))
  };
  f.render_widget(Paragraph::new(line), area);
}

// ─── Success dialog ───────────────────────────────────────────────────────────

fn draw_success(f: &mut Frame, area: Rect, count: usize) {
  let dialog = centered(area, 48, 7);
  f.render_widget(Clear, dialog);

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Green));
  let inner = block.inner(dialog);
  f.render_widget(block, dialog);

  let noun = if count == 1 { "reservation has" } else { "reservations have" };
  let lines = vec![
    Line::from(Span::styled(
      "✔",
      Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )),
    Line::from(format!("Your {count} {noun} been made.")),
    Line::raw(""),
    Line::from(Span::styled("[Enter] Accept", Style::default().fg(Color::Gray))),
  ];
  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// A `width` × `height` rectangle centred in `area`, clipped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
    .flex(Flex::Center)
    .areas(area);
  let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
    .flex(Flex::Center)
    .areas(row);
  cell
}

#[cfg(test)]
mod tests {
  use casino_core::{MealType, menu::WeeklyMenu};
  use chrono::NaiveDate;

  use super::*;

  fn app() -> App {
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
      .unwrap()
      .and_hms_opt(0, 0, 0)
      .unwrap();
    App::new(WeeklyMenu::default(), MealType::Normal, now)
  }

  fn has_key(app: &App, key: &str) -> bool {
    key_hints(app).iter().any(|(k, _)| *k == key)
  }

  #[test]
  fn hints_follow_focus() {
    let mut app = app();
    assert!(has_key(&app, "Space"));
    assert!(!has_key(&app, "x"));

    app.tab = Tab::MyReservations;
    assert!(has_key(&app, "x"));
    assert!(!has_key(&app, "Space"));

    app.overlay = Some(Overlay::Success { count: 1 });
    assert_eq!(key_hints(&app), &[("Enter", "accept")]);
  }
}
