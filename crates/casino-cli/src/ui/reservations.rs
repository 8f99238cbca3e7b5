//! My-reservations tab — upcoming reservations with a cancel action.

use casino_core::ReservationStatus;
use chrono::NaiveDateTime;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{app::App, ui::calendar::meal_color};

/// Render the upcoming list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App, now: NaiveDateTime) {
  let upcoming = app.upcoming(now);

  let block = Block::default()
    .title(format!(" My reservations ({}) ", upcoming.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if upcoming.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new(vec![
        Line::from(Span::styled(
          "You have no upcoming reservations.",
          Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
          "[n] Create a new reservation",
          Style::default().fg(Color::Cyan),
        )),
      ]),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = upcoming
    .iter()
    .enumerate()
    .map(|(i, rsvp)| {
      let is_cursor = i == app.list_cursor;
      let base = if is_cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      let (badge, badge_style) = match rsvp.status {
        ReservationStatus::Confirmed => (
          " Confirmed ",
          Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        _ => (" Pending ", Style::default().fg(Color::Black).bg(Color::Gray)),
      };

      ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", rsvp.date.format("%d %b")), base),
        Span::styled(format!("{:<28}", rsvp.date.format("%A %d %B").to_string()), base),
        Span::styled("● ", base.fg(meal_color(rsvp.meal_type))),
        Span::styled(format!("{:<20}", rsvp.meal_type.label()), base),
        Span::styled(badge, badge_style),
      ]))
    })
    .collect();

  let mut state = ListState::default().with_selected(Some(app.list_cursor));
  f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
