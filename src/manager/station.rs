//! Station registration, deletion and listing

use tracing::info;

use crate::controller::Prompter;
use crate::domain::{Station, SubwayMap};
use crate::error::Result;
use crate::screen::{ActionType, EntityType};
use crate::view::View;

pub(super) fn manage<V: View>(action: ActionType, map: &mut SubwayMap, prompter: &mut Prompter<'_, V>) -> Result<()> {
    match action {
        ActionType::Create => {
            let name = prompter.ask_name(EntityType::Station, action, map)?;
            map.add_station(Station::new(name.clone()));
            info!(station = %name, "Station registered");
            prompter.view_mut().print_info("Station registered.")?;
        }
        ActionType::Delete => {
            let name = prompter.ask_name(EntityType::Station, action, map)?;
            map.remove_station(&name);
            info!(station = %name, "Station deleted");
            prompter.view_mut().print_info("Station deleted.")?;
        }
        ActionType::View => {
            prompter
                .view_mut()
                .print_entities("Stations", &map.station_names())?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;
    use crate::limits::SubwayLimits;
    use crate::view::MockView;

    #[test]
    fn register_then_list() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["Sinsa"]), &limits);
        let mut map = SubwayMap::new();

        manage(ActionType::Create, &mut map, &mut prompter).unwrap();
        manage(ActionType::View, &mut map, &mut prompter).unwrap();

        let view = prompter.view();
        assert_eq!(view.infos(), &["Station registered.".to_string()]);
        assert_eq!(view.listings()[0].1, vec!["Sinsa".to_string()]);
    }

    #[test]
    fn delete_refuses_station_on_line() {
        let limits = SubwayLimits::default();
        let mut prompter = Prompter::new(MockView::with_inputs(["Gyodae"]), &limits);
        let mut map = SubwayMap::new();
        map.add_station(Station::new("Gyodae"));
        map.add_station(Station::new("Gangnam"));
        map.add_line(Line::new("Line 2", "Gyodae", "Gangnam"));

        assert!(manage(ActionType::Delete, &mut map, &mut prompter)
            .unwrap_err()
            .is_validation());
        assert!(map.has_station("Gyodae"));
    }
}
