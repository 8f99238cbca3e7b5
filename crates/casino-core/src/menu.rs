//! The weekly cafeteria menu.
//!
//! A read-only reference shown alongside the reservation screens. It has no
//! link to the ledger: reserving a day does not pick a dish.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::reservation::MealType;

// ─── Courses ─────────────────────────────────────────────────────────────────

/// One line of a day's menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, EnumIter)]
pub enum Course {
  #[strum(to_string = "Soup / cream")]
  Soup,
  #[strum(to_string = "Starter")]
  Entree,
  #[strum(to_string = "Main plate 1")]
  Main1,
  #[strum(to_string = "Main plate 2")]
  Main2,
  #[strum(to_string = "Vegetarian")]
  Vegetarian,
  #[strum(to_string = "Hypocaloric")]
  Hypocaloric,
  #[strum(to_string = "Dessert")]
  Dessert,
}

// ─── Menu data ───────────────────────────────────────────────────────────────

/// What the kitchen serves on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
  /// Weekday label as printed on the menu, e.g. "Monday".
  pub day:         String,
  pub soup:        String,
  pub entree:      String,
  pub main1:       String,
  pub main2:       String,
  pub vegetarian:  String,
  pub hypocaloric: String,
  pub dessert:     String,
}

impl DayMenu {
  pub fn course(&self, course: Course) -> &str {
    match course {
      Course::Soup => &self.soup,
      Course::Entree => &self.entree,
      Course::Main1 => &self.main1,
      Course::Main2 => &self.main2,
      Course::Vegetarian => &self.vegetarian,
      Course::Hypocaloric => &self.hypocaloric,
      Course::Dessert => &self.dessert,
    }
  }

  /// Every course with its dish, in display order.
  pub fn courses(&self) -> impl Iterator<Item = (Course, &str)> + '_ {
    Course::iter().map(|c| (c, self.course(c)))
  }

  /// The main plate(s) a diner with `meal_type` gets.
  pub fn main_for(&self, meal_type: MealType) -> Vec<&str> {
    match meal_type {
      MealType::Normal => vec![self.main1.as_str(), self.main2.as_str()],
      MealType::Hypocaloric => vec![self.hypocaloric.as_str()],
      MealType::Vegetarian => vec![self.vegetarian.as_str()],
    }
  }
}

/// One week of the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuWeek {
  /// Tab label, e.g. "Week 1".
  pub week: String,
  #[serde(default, alias = "menu")]
  pub days: Vec<DayMenu>,
}

/// The whole published menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMenu {
  #[serde(default)]
  pub weeks: Vec<MenuWeek>,
}

impl WeeklyMenu {
  pub fn week(&self, index: usize) -> Option<&MenuWeek> { self.weeks.get(index) }

  /// Look up a day by its label, ignoring case.
  pub fn day(&self, week_index: usize, day: &str) -> Option<&DayMenu> {
    self
      .week(week_index)?
      .days
      .iter()
      .find(|d| d.day.eq_ignore_ascii_case(day))
  }

  pub fn is_empty(&self) -> bool { self.weeks.iter().all(|w| w.days.is_empty()) }
}
