//! Request/response helpers used by managers
//!
//! Each helper performs one read through the view, runs the matching
//! validator check and returns the value only when it passes. Rejections
//! come back as `SubwayError::Validation` for the run loop to report.

use tracing::debug;

use crate::domain::{Line, SubwayMap};
use crate::error::{Result, ValidationError};
use crate::limits::SubwayLimits;
use crate::screen::{ActionType, EntityType, Screen};
use crate::validator;
use crate::view::View;

pub struct Prompter<'a, V> {
    view: V,
    limits: &'a SubwayLimits,
}

impl<'a, V: View> Prompter<'a, V> {
    pub fn new(view: V, limits: &'a SubwayLimits) -> Self {
        Self { view, limits }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn limits(&self) -> &SubwayLimits {
        self.limits
    }

    /// Raw command for `screen`. Validated by the controller.
    pub fn ask_user_command(&mut self, screen: &Screen) -> Result<String> {
        Ok(self.view.ask_user_command(screen)?)
    }

    pub fn ask_name(&mut self, entity: EntityType, action: ActionType, map: &SubwayMap) -> Result<String> {
        let name = self.view.ask_name(entity, action)?;
        validator::validate_name(&name, entity, action, map, self.limits)?;
        Ok(name)
    }

    /// Upward then downward end station of a new line
    pub fn ask_end_station_names(&mut self, map: &SubwayMap) -> Result<(String, String)> {
        let mut chosen = Vec::with_capacity(2);

        let upward = self.view.ask_upward_end_station_name()?;
        validator::validate_end_station_name(&upward, &chosen, map, self.limits)?;
        chosen.push(upward);

        let downward = self.view.ask_downward_end_station_name()?;
        validator::validate_end_station_name(&downward, &chosen, map, self.limits)?;

        let upward = chosen.remove(0);
        debug!(%upward, %downward, "End stations accepted");
        Ok((upward, downward))
    }

    pub fn ask_station_name_to_register_to_route(&mut self, line_name: &str, map: &SubwayMap) -> Result<String> {
        let line = find_line(map, line_name)?;
        let name = self.view.ask_station_name_to_register_to_route()?;
        validator::validate_station_to_register(&name, line, map, self.limits)?;
        Ok(name)
    }

    pub fn ask_station_order_in_route(&mut self, line_name: &str, map: &SubwayMap) -> Result<usize> {
        let line = find_line(map, line_name)?;
        let input = self.view.ask_station_order_in_route()?;
        Ok(validator::validate_route_position(&input, line)?)
    }

    pub fn ask_station_name_to_delete_from_route(&mut self, line_name: &str, map: &SubwayMap) -> Result<String> {
        let line = find_line(map, line_name)?;
        let name = self.view.ask_station_name_to_delete_from_route()?;
        validator::validate_station_to_delete_from_route(&name, line, self.limits)?;
        Ok(name)
    }
}

fn find_line<'m>(map: &'m SubwayMap, name: &str) -> std::result::Result<&'m Line, ValidationError> {
    map.line(name).ok_or_else(|| ValidationError::UnknownName {
        entity: EntityType::Line,
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::error::SubwayError;
    use crate::view::MockView;

    fn map() -> SubwayMap {
        let mut map = SubwayMap::new();
        for name in ["Gyodae", "Gangnam", "Yeoksam"] {
            map.add_station(Station::new(name));
        }
        map.add_line(Line::new("Line 2", "Gyodae", "Yeoksam"));
        map
    }

    #[test]
    fn name_returned_only_when_valid() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["Sinsa", "Gangnam"]), &limits);
        let map = map();

        let name = prompter.ask_name(EntityType::Station, ActionType::Create, &map).unwrap();
        assert_eq!(name, "Sinsa");

        let err = prompter
            .ask_name(EntityType::Station, ActionType::Create, &map)
            .unwrap_err();
        assert!(matches!(
            err,
            SubwayError::Validation(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn end_station_pair_rejects_repeat() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["Gangnam", "Gangnam"]), &limits);
        let err = prompter.ask_end_station_names(&map()).unwrap_err();
        assert!(matches!(
            err,
            SubwayError::Validation(ValidationError::SameEndStations { .. })
        ));
    }

    #[test]
    fn end_station_pair_in_order() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["Yeoksam", "Gangnam"]), &limits);
        let pair = prompter.ask_end_station_names(&map()).unwrap();
        assert_eq!(pair, ("Yeoksam".to_string(), "Gangnam".to_string()));
    }

    #[test]
    fn order_in_route_parses_index() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["2", "5"]), &limits);
        let map = map();
        assert_eq!(prompter.ask_station_order_in_route("Line 2", &map).unwrap(), 2);
        assert!(prompter.ask_station_order_in_route("Line 2", &map).unwrap_err().is_validation());
    }

    #[test]
    fn unknown_line_rejected_before_reading() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["Gangnam"]), &limits);
        let err = prompter
            .ask_station_name_to_register_to_route("Line 9", &map())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(prompter.view().remaining_inputs(), 1);
    }

    #[test]
    fn exhausted_input_is_io_error() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::new(), &limits);
        let err = prompter
            .ask_station_name_to_delete_from_route("Line 2", &map())
            .unwrap_err();
        assert!(matches!(err, SubwayError::Io(_)));
    }
}
