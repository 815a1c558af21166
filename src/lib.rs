//! Subway - interactive console for a small transit network
//!
//! Screens form a navigable stack; single-key commands either drill into a
//! sub-menu, go back, or are dispatched to the manager for stations, lines,
//! routes or the map.

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod limits;
pub mod manager;
pub mod screen;
pub mod validator;
pub mod view;

pub use config::AppConfig;
pub use controller::{Controller, ScreenStack, Transition};
pub use domain::{Line, Station, SubwayMap};
pub use error::{FixSuggestion, Result, SubwayError, ValidationError};
pub use limits::SubwayLimits;
pub use screen::{ActionType, Choice, EntityType, Screen, ScreenRegistry, ScreenType};
pub use view::{ConsoleView, MockView, View};
