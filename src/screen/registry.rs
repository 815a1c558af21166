//! Screen catalog
//!
//! Built once at startup and shared by reference. Read-only afterwards.

use std::collections::HashMap;

use super::{ActionType, Choice, EntityType, Screen, ScreenType};
use crate::error::{Result, SubwayError};

/// Maps every registered screen type to its screen
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: HashMap<ScreenType, Screen>,
}

impl ScreenRegistry {
    /// Registry holding exactly the given screens. A later screen with the
    /// same type replaces an earlier one.
    pub fn from_screens(screens: impl IntoIterator<Item = Screen>) -> Self {
        Self {
            screens: screens.into_iter().map(|s| (s.screen_type(), s)).collect(),
        }
    }

    /// The full menu tree of the application
    pub fn standard() -> Result<Self> {
        use ActionType::*;
        use EntityType as E;

        let main = Screen::new(
            ScreenType::Main,
            "Main",
            vec![
                Choice::new("1", "Station management", E::Station, Manage),
                Choice::new("2", "Line management", E::Line, Manage),
                Choice::new("3", "Route management", E::Route, Manage),
                Choice::new("4", "Print subway map", E::Map, View),
                Choice::new("Q", "Quit", E::None, Exit),
            ],
        )?;

        let station = Screen::new(
            ScreenType::StationManagement,
            "Station management",
            vec![
                Choice::new("1", "Register station", E::Station, Create),
                Choice::new("2", "Delete station", E::Station, Delete),
                Choice::new("3", "List stations", E::Station, View),
                Choice::new("B", "Back", E::None, MoveBack),
            ],
        )?;

        let line = Screen::new(
            ScreenType::LineManagement,
            "Line management",
            vec![
                Choice::new("1", "Register line", E::Line, Create),
                Choice::new("2", "Delete line", E::Line, Delete),
                Choice::new("3", "List lines", E::Line, View),
                Choice::new("B", "Back", E::None, MoveBack),
            ],
        )?;

        let route = Screen::new(
            ScreenType::RouteManagement,
            "Route management",
            vec![
                Choice::new("1", "Register section", E::Route, Create),
                Choice::new("2", "Delete section", E::Route, Delete),
                Choice::new("B", "Back", E::None, MoveBack),
            ],
        )?;

        Ok(Self::from_screens([main, station, line, route]))
    }

    /// Look up a screen. Missing types are programming defects.
    pub fn get(&self, screen_type: ScreenType) -> Result<&Screen> {
        self.screens
            .get(&screen_type)
            .ok_or(SubwayError::ScreenNotRegistered(screen_type))
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registers_every_screen() {
        let registry = ScreenRegistry::standard().unwrap();
        for screen_type in [
            ScreenType::Main,
            ScreenType::StationManagement,
            ScreenType::LineManagement,
            ScreenType::RouteManagement,
        ] {
            let screen = registry.get(screen_type).unwrap();
            assert_eq!(screen.screen_type(), screen_type);
            assert!(!screen.choices().is_empty());
        }
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn every_sub_screen_can_move_back() {
        let registry = ScreenRegistry::standard().unwrap();
        for screen_type in [
            ScreenType::StationManagement,
            ScreenType::LineManagement,
            ScreenType::RouteManagement,
        ] {
            let screen = registry.get(screen_type).unwrap();
            assert!(screen
                .choices()
                .iter()
                .any(|c| c.action_type_equals(ActionType::MoveBack)));
        }
    }

    #[test]
    fn main_exits_with_q() {
        let registry = ScreenRegistry::standard().unwrap();
        let main = registry.get(ScreenType::Main).unwrap();
        let quit = main.choice_for_command("Q").unwrap();
        assert!(quit.action_type_equals(ActionType::Exit));
    }

    #[test]
    fn unregistered_screen_is_fatal_lookup_error() {
        let registry = ScreenRegistry::from_screens([]);
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get(ScreenType::Main),
            Err(SubwayError::ScreenNotRegistered(ScreenType::Main))
        ));
    }
}
