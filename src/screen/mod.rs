//! Screens and Choices
//!
//! A screen is data: a tag, a title and an ordered set of choices.
//! Navigation behavior lives in the controller, never here.

mod registry;

pub use registry::ScreenRegistry;

use std::fmt;

use crate::error::{Result, SubwayError, ValidationError};

// ─────────────────────────────────────────────────────────────────────────────
// Tags
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies a menu context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenType {
    Main,
    StationManagement,
    LineManagement,
    RouteManagement,
}

impl ScreenType {
    /// Management screen entered by a MANAGE choice on `entity`
    pub fn for_entity(entity: EntityType) -> Option<Self> {
        match entity {
            EntityType::Station => Some(Self::StationManagement),
            EntityType::Line => Some(Self::LineManagement),
            EntityType::Route => Some(Self::RouteManagement),
            EntityType::Map | EntityType::None => None,
        }
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "MAIN"),
            Self::StationManagement => write!(f, "STATION_MANAGEMENT"),
            Self::LineManagement => write!(f, "LINE_MANAGEMENT"),
            Self::RouteManagement => write!(f, "ROUTE_MANAGEMENT"),
        }
    }
}

/// Kind of domain object a choice targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Station,
    Line,
    Route,
    Map,
    None,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Station => write!(f, "Station"),
            Self::Line => write!(f, "Line"),
            Self::Route => write!(f, "Route"),
            Self::Map => write!(f, "Map"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Kind of operation a choice requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Enter the entity's management screen
    Manage,
    Create,
    Delete,
    View,
    MoveBack,
    Exit,
}

// ─────────────────────────────────────────────────────────────────────────────
// Choice
// ─────────────────────────────────────────────────────────────────────────────

/// One selectable menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    command: String,
    label: String,
    entity_type: EntityType,
    action_type: ActionType,
}

impl Choice {
    pub fn new(
        command: impl Into<String>,
        label: impl Into<String>,
        entity_type: EntityType,
        action_type: ActionType,
    ) -> Self {
        Self {
            command: command.into(),
            label: label.into(),
            entity_type,
            action_type,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn action_type_equals(&self, action_type: ActionType) -> bool {
        self.action_type == action_type
    }

    pub fn entity_type_equals(&self, entity_type: EntityType) -> bool {
        self.entity_type == entity_type
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Screen
// ─────────────────────────────────────────────────────────────────────────────

/// A menu context with its legal choices
#[derive(Debug, Clone)]
pub struct Screen {
    screen_type: ScreenType,
    title: String,
    choices: Vec<Choice>,
}

impl Screen {
    /// Build a screen, rejecting repeated command keys
    pub fn new(screen_type: ScreenType, title: impl Into<String>, choices: Vec<Choice>) -> Result<Self> {
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].iter().any(|c| c.command == choice.command) {
                return Err(SubwayError::DuplicateCommand {
                    screen: screen_type,
                    command: choice.command.clone(),
                });
            }
        }

        Ok(Self {
            screen_type,
            title: title.into(),
            choices,
        })
    }

    pub fn screen_type(&self) -> ScreenType {
        self.screen_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Command keys in menu order
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(Choice::command)
    }

    pub fn has_command(&self, command: &str) -> bool {
        self.choices.iter().any(|c| c.command == command)
    }

    /// Exact-match lookup of the choice bound to `command`
    pub fn choice_for_command(&self, command: &str) -> std::result::Result<&Choice, ValidationError> {
        self.choices
            .iter()
            .find(|c| c.command == command)
            .ok_or_else(|| ValidationError::InvalidCommand {
                command: command.to_string(),
            })
    }
}
