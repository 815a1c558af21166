//! View - terminal input/output collaborator
//!
//! The controller treats every `ask_*` as one blocking read returning raw,
//! untrusted text. Validation happens on the caller's side.

mod console;
mod mock;

pub use console::ConsoleView;
pub use mock::MockView;

use std::io;

use crate::domain::Line;
use crate::error::ValidationError;
use crate::screen::{ActionType, EntityType, Screen};

pub trait View {
    /// Render `screen`'s menu and read the selected command
    fn ask_user_command(&mut self, screen: &Screen) -> io::Result<String>;

    fn ask_name(&mut self, entity: EntityType, action: ActionType) -> io::Result<String>;

    fn ask_upward_end_station_name(&mut self) -> io::Result<String>;

    fn ask_downward_end_station_name(&mut self) -> io::Result<String>;

    fn ask_station_name_to_register_to_route(&mut self) -> io::Result<String>;

    fn ask_station_order_in_route(&mut self) -> io::Result<String>;

    fn ask_station_name_to_delete_from_route(&mut self) -> io::Result<String>;

    fn print_error_message(&mut self, error: &ValidationError) -> io::Result<()>;

    /// Confirmation after a successful mutation
    fn print_info(&mut self, message: &str) -> io::Result<()>;

    fn print_entities(&mut self, title: &str, names: &[String]) -> io::Result<()>;

    fn print_map(&mut self, lines: &[Line]) -> io::Result<()>;
}

/// Prompt text for a name request
pub(crate) fn name_prompt(entity: EntityType, action: ActionType) -> String {
    let noun = entity.to_string().to_lowercase();
    match action {
        ActionType::Create => format!("Enter the name of the {} to register.", noun),
        ActionType::Delete => format!("Enter the name of the {} to delete.", noun),
        _ => format!("Enter the {} name.", noun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_entity_and_action() {
        assert_eq!(
            name_prompt(EntityType::Station, ActionType::Create),
            "Enter the name of the station to register."
        );
        assert_eq!(
            name_prompt(EntityType::Line, ActionType::View),
            "Enter the line name."
        );
    }
}
