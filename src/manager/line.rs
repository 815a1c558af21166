//! Line registration, deletion and listing

use tracing::info;

use crate::controller::Prompter;
use crate::domain::{Line, SubwayMap};
use crate::error::Result;
use crate::screen::{ActionType, EntityType};
use crate::view::View;

pub(super) fn manage<V: View>(action: ActionType, map: &mut SubwayMap, prompter: &mut Prompter<'_, V>) -> Result<()> {
    match action {
        ActionType::Create => {
            let name = prompter.ask_name(EntityType::Line, action, map)?;
            let (upward, downward) = prompter.ask_end_station_names(map)?;
            info!(line = %name, %upward, %downward, "Line registered");
            map.add_line(Line::new(name, upward, downward));
            prompter.view_mut().print_info("Line registered.")?;
        }
        ActionType::Delete => {
            let name = prompter.ask_name(EntityType::Line, action, map)?;
            map.remove_line(&name);
            info!(line = %name, "Line deleted");
            prompter.view_mut().print_info("Line deleted.")?;
        }
        ActionType::View => {
            prompter.view_mut().print_entities("Lines", &map.line_names())?;
        }
        _ => {}
    }
    Ok(())
}
