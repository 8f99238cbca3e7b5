//! Weekly menu overlay.

use casino_core::menu::WeeklyMenu;
use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::ui::centered;

pub fn draw(f: &mut Frame, area: Rect, menu: &WeeklyMenu, week: usize, scroll: u16) {
  let dialog = centered(area, 80, area.height.saturating_sub(4));
  f.render_widget(Clear, dialog);

  let block = Block::default()
    .title(" Weekly menu ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(dialog);
  f.render_widget(block, dialog);

  let Some(current) = menu.week(week) else {
    f.render_widget(
      Paragraph::new(Span::styled(
        "No menu has been published. Start with --menu <FILE> to load one.",
        Style::default().fg(Color::DarkGray),
      )),
      inner,
    );
    return;
  };

  let [tabs_area, body_area] =
    Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

  let tabs = Tabs::new(menu.weeks.iter().map(|w| w.week.clone()))
    .select(week)
    .highlight_style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );
  f.render_widget(tabs, tabs_area);

  let mut lines = Vec::new();
  for day in &current.days {
    lines.push(Line::from(Span::styled(
      day.day.clone(),
      Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for (course, dish) in day.courses() {
      lines.push(Line::from(vec![
        Span::styled(format!("  {:<14}", course.to_string()), Style::default().fg(Color::Gray)),
        Span::raw(dish.to_string()),
      ]));
    }
    lines.push(Line::raw(""));
  }

  f.render_widget(
    Paragraph::new(lines)
      .wrap(Wrap { trim: false })
      .scroll((scroll, 0)),
    body_area,
  );
}
