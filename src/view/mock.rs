//! Mock view for testing
//!
//! Answers every question from a queue of scripted lines and records
//! what the application showed. Running out of input reads as end of input.

use std::collections::VecDeque;
use std::io;

use super::View;
use crate::domain::Line;
use crate::error::ValidationError;
use crate::screen::{ActionType, EntityType, Screen, ScreenType};

/// Scripted view
#[derive(Debug, Default)]
pub struct MockView {
    /// Queue of answers (FIFO)
    inputs: VecDeque<String>,
    /// Screens whose menu was shown, in order
    screens: Vec<ScreenType>,
    /// Name requests made, in order
    name_requests: Vec<(EntityType, ActionType)>,
    errors: Vec<ValidationError>,
    infos: Vec<String>,
    listings: Vec<(String, Vec<String>)>,
    maps: Vec<Vec<Line>>,
}

impl MockView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a queue of answers
    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add an answer to the queue
    pub fn queue_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn screens(&self) -> &[ScreenType] {
        &self.screens
    }

    pub fn name_requests(&self) -> &[(EntityType, ActionType)] {
        &self.name_requests
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    pub fn listings(&self) -> &[(String, Vec<String>)] {
        &self.listings
    }

    pub fn maps(&self) -> &[Vec<Line>] {
        &self.maps
    }

    fn next_input(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }
}

impl View for MockView {
    fn ask_user_command(&mut self, screen: &Screen) -> io::Result<String> {
        self.screens.push(screen.screen_type());
        self.next_input()
    }

    fn ask_name(&mut self, entity: EntityType, action: ActionType) -> io::Result<String> {
        self.name_requests.push((entity, action));
        self.next_input()
    }

    fn ask_upward_end_station_name(&mut self) -> io::Result<String> {
        self.next_input()
    }

    fn ask_downward_end_station_name(&mut self) -> io::Result<String> {
        self.next_input()
    }

    fn ask_station_name_to_register_to_route(&mut self) -> io::Result<String> {
        self.next_input()
    }

    fn ask_station_order_in_route(&mut self) -> io::Result<String> {
        self.next_input()
    }

    fn ask_station_name_to_delete_from_route(&mut self) -> io::Result<String> {
        self.next_input()
    }

    fn print_error_message(&mut self, error: &ValidationError) -> io::Result<()> {
        self.errors.push(error.clone());
        Ok(())
    }

    fn print_info(&mut self, message: &str) -> io::Result<()> {
        self.infos.push(message.to_string());
        Ok(())
    }

    fn print_entities(&mut self, title: &str, names: &[String]) -> io::Result<()> {
        self.listings.push((title.to_string(), names.to_vec()));
        Ok(())
    }

    fn print_map(&mut self, lines: &[Line]) -> io::Result<()> {
        self.maps.push(lines.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order_then_eof() {
        let mut view = MockView::with_inputs(["a", "b"]);
        assert_eq!(view.ask_upward_end_station_name().unwrap(), "a");
        assert_eq!(view.ask_station_order_in_route().unwrap(), "b");
        assert_eq!(
            view.ask_station_order_in_route().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn records_name_requests() {
        let mut view = MockView::new();
        view.queue_input("Gangnam");
        view.ask_name(EntityType::Station, ActionType::Create).unwrap();
        assert_eq!(
            view.name_requests(),
            &[(EntityType::Station, ActionType::Create)]
        );
        assert_eq!(view.remaining_inputs(), 0);
    }
}
