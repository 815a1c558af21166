//! Error types with fix suggestions
//!
//! Two layers:
//! - [`ValidationError`]: rejected user input. Reported on screen, never fatal.
//! - [`SubwayError`]: everything the run loop cannot recover from, plus a
//!   transparent wrapper so validation failures travel through `?`.

use thiserror::Error;

use crate::screen::{EntityType, ScreenType};

pub type Result<T> = std::result::Result<T, SubwayError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Rejected user input. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input must not be blank")]
    BlankInput,

    #[error("'{command}' is not a valid command for this screen")]
    InvalidCommand { command: String },

    #[error("Name '{name}' must be between {min} and {max} characters long")]
    NameLength { name: String, min: usize, max: usize },

    #[error("{entity} '{name}' is already registered")]
    DuplicateName { entity: EntityType, name: String },

    #[error("{entity} '{name}' does not exist")]
    UnknownName { entity: EntityType, name: String },

    #[error("Station '{name}' is registered on line '{line}' and cannot be deleted")]
    StationInUse { name: String, line: String },

    #[error("End stations must be distinct ('{name}' was already chosen)")]
    SameEndStations { name: String },

    #[error("Station '{station}' is already on the route of line '{line}'")]
    StationAlreadyInRoute { station: String, line: String },

    #[error("Station '{station}' is not on the route of line '{line}'")]
    StationNotInRoute { station: String, line: String },

    #[error("Position '{input}' is not a number")]
    PositionNotNumber { input: String },

    #[error("Position {position} is out of range (expected 0 to {max})")]
    PositionOutOfRange { position: i64, max: usize },

    #[error("Line '{line}' must keep at least {min} stations on its route")]
    RouteTooShort { line: String, min: usize },
}

impl FixSuggestion for ValidationError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            ValidationError::BlankInput => Some("Type a value and press Enter"),
            ValidationError::InvalidCommand { .. } => {
                Some("Pick one of the commands listed in the menu")
            }
            ValidationError::NameLength { .. } => None,
            ValidationError::DuplicateName { .. } => Some("Choose a name that is not in use"),
            ValidationError::UnknownName { .. } => {
                Some("List the registered entries first to check the exact name")
            }
            ValidationError::StationInUse { .. } => {
                Some("Remove the station from every line route before deleting it")
            }
            ValidationError::SameEndStations { .. } => {
                Some("The downward end station must differ from the upward one")
            }
            ValidationError::StationAlreadyInRoute { .. } => {
                Some("A station may appear only once on a line")
            }
            ValidationError::StationNotInRoute { .. } => None,
            ValidationError::PositionNotNumber { .. } => Some("Enter a whole number such as 0"),
            ValidationError::PositionOutOfRange { .. } => {
                Some("0 inserts at the front, the route length appends at the end")
            }
            ValidationError::RouteTooShort { .. } => {
                Some("Delete the whole line instead of its last section")
            }
        }
    }
}

/// Errors that end the run.
///
/// `Validation` is the exception: the controller catches it once per command
/// and re-prompts.
#[derive(Error, Debug)]
pub enum SubwayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Screen {0} is not registered")]
    ScreenNotRegistered(ScreenType),

    #[error("Screen {screen} declares command '{command}' more than once")]
    DuplicateCommand { screen: ScreenType, command: String },

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl SubwayError {
    /// True when the error is user-recoverable input rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, SubwayError::Validation(_))
    }
}
