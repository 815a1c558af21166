//! Input Validator
//!
//! Pure checks run on raw user input before it reaches the controller's
//! transitions or a manager. Each returns `Ok` when the input is acceptable
//! and a [`ValidationError`] naming the violated rule otherwise.
//!
//! Name checks are selected by the (entity, action) pair:
//! - every action: non-blank, length within [`SubwayLimits::name_len`]
//! - `Create`: no same-kind entity already uses the name
//! - `Delete` / `View`: a same-kind entity uses the name
//! - `Delete` on a station: no line route passes through it

use crate::domain::{Line, SubwayMap};
use crate::error::ValidationError;
use crate::limits::SubwayLimits;
use crate::screen::{ActionType, EntityType, Screen};

pub type ValidationResult<T = ()> = std::result::Result<T, ValidationError>;

/// Command must be non-blank and one of the screen's keys
pub fn validate_command(command: &str, screen: &Screen) -> ValidationResult {
    if command.trim().is_empty() {
        return Err(ValidationError::BlankInput);
    }
    if !screen.has_command(command) {
        return Err(ValidationError::InvalidCommand {
            command: command.to_string(),
        });
    }
    Ok(())
}

/// Entity name for the given action
pub fn validate_name(
    name: &str,
    entity: EntityType,
    action: ActionType,
    map: &SubwayMap,
    limits: &SubwayLimits,
) -> ValidationResult {
    validate_name_shape(name, limits)?;

    match action {
        ActionType::Create => {
            if map.contains(entity, name) {
                return Err(ValidationError::DuplicateName {
                    entity,
                    name: name.to_string(),
                });
            }
        }
        ActionType::Delete | ActionType::View => {
            if !map.contains(entity, name) {
                return Err(ValidationError::UnknownName {
                    entity,
                    name: name.to_string(),
                });
            }
        }
        ActionType::Manage | ActionType::MoveBack | ActionType::Exit => {}
    }

    if entity == EntityType::Station && action == ActionType::Delete {
        if let Some(line) = map.line_through(name) {
            return Err(ValidationError::StationInUse {
                name: name.to_string(),
                line: line.name.clone(),
            });
        }
    }

    Ok(())
}

/// One end station of a new line. `chosen` holds the ends collected so far.
pub fn validate_end_station_name(
    name: &str,
    chosen: &[String],
    map: &SubwayMap,
    limits: &SubwayLimits,
) -> ValidationResult {
    validate_name(name, EntityType::Station, ActionType::View, map, limits)?;

    if chosen.iter().any(|c| c == name) {
        return Err(ValidationError::SameEndStations {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Station to insert into `line`: registered, and not already a stop
pub fn validate_station_to_register(
    name: &str,
    line: &Line,
    map: &SubwayMap,
    limits: &SubwayLimits,
) -> ValidationResult {
    validate_name(name, EntityType::Station, ActionType::View, map, limits)?;

    if line.contains(name) {
        return Err(ValidationError::StationAlreadyInRoute {
            station: name.to_string(),
            line: line.name.clone(),
        });
    }
    Ok(())
}

/// Insertion index in `[0, route length]`
pub fn validate_route_position(input: &str, line: &Line) -> ValidationResult<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankInput);
    }

    let position: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::PositionNotNumber {
            input: input.to_string(),
        })?;

    let max = line.route.len();
    match usize::try_from(position) {
        Ok(index) if index <= max => Ok(index),
        _ => Err(ValidationError::PositionOutOfRange { position, max }),
    }
}

/// Station to remove from `line`: on the route, and the route stays viable
pub fn validate_station_to_delete_from_route(
    name: &str,
    line: &Line,
    limits: &SubwayLimits,
) -> ValidationResult {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankInput);
    }
    if !line.contains(name) {
        return Err(ValidationError::StationNotInRoute {
            station: name.to_string(),
            line: line.name.clone(),
        });
    }
    if line.route.len() <= limits.min_route_len {
        return Err(ValidationError::RouteTooShort {
            line: line.name.clone(),
            min: limits.min_route_len,
        });
    }
    Ok(())
}

fn validate_name_shape(name: &str, limits: &SubwayLimits) -> ValidationResult {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankInput);
    }
    let len = name.chars().count();
    if !limits.name_len().contains(&len) {
        return Err(ValidationError::NameLength {
            name: name.to_string(),
            min: limits.min_name_len,
            max: limits.max_name_len,
        });
    }
    Ok(())
}
