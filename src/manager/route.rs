//! Route sections: insert a station into a line or remove one

use tracing::info;

use crate::controller::Prompter;
use crate::domain::SubwayMap;
use crate::error::Result;
use crate::screen::{ActionType, EntityType};
use crate::view::View;

pub(super) fn manage<V: View>(action: ActionType, map: &mut SubwayMap, prompter: &mut Prompter<'_, V>) -> Result<()> {
    match action {
        ActionType::Create => {
            let line = prompter.ask_name(EntityType::Line, ActionType::View, map)?;
            let station = prompter.ask_station_name_to_register_to_route(&line, map)?;
            let position = prompter.ask_station_order_in_route(&line, map)?;
            if let Some(target) = map.line_mut(&line) {
                target.insert_station(position, station.clone());
            }
            info!(%line, %station, position, "Section registered");
            prompter.view_mut().print_info("Section registered.")?;
        }
        ActionType::Delete => {
            let line = prompter.ask_name(EntityType::Line, ActionType::View, map)?;
            let station = prompter.ask_station_name_to_delete_from_route(&line, map)?;
            if let Some(target) = map.line_mut(&line) {
                target.remove_station(&station);
            }
            info!(%line, %station, "Section deleted");
            prompter.view_mut().print_info("Section deleted.")?;
        }
        _ => {}
    }
    Ok(())
}
