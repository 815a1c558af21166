//! Entity Dispatcher
//!
//! Routes a choice to the manager for its entity kind. Each manager then
//! branches on the action. Kinds without a manager are no-ops.

mod line;
mod map;
mod route;
mod station;

use tracing::debug;

use crate::controller::Prompter;
use crate::domain::SubwayMap;
use crate::error::Result;
use crate::screen::{Choice, EntityType};
use crate::view::View;

/// Owns the network and applies delegated choices to it
#[derive(Debug, Default)]
pub struct Manager {
    map: SubwayMap,
}

impl Manager {
    pub fn new(map: SubwayMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &SubwayMap {
        &self.map
    }

    pub fn manage_entity<V: View>(&mut self, choice: &Choice, prompter: &mut Prompter<'_, V>) -> Result<()> {
        let action = choice.action_type();
        debug!(entity = %choice.entity_type(), ?action, "Dispatching choice");

        match choice.entity_type() {
            EntityType::Station => station::manage(action, &mut self.map, prompter),
            EntityType::Line => line::manage(action, &mut self.map, prompter),
            EntityType::Route => route::manage(action, &mut self.map, prompter),
            EntityType::Map => map::manage(action, &self.map, prompter),
            EntityType::None => Ok(()),
        }
    }
}
