//! Domain bootstrap
//!
//! Seeds the network from YAML compiled into the binary.

use serde::Deserialize;
use tracing::debug;

use super::subway_map::{Line, Station, SubwayMap};
use crate::error::{Result, SubwayError};

const SEED_YAML: &str = include_str!("seed.yaml");

#[derive(Debug, Deserialize)]
struct SeedData {
    #[serde(default)]
    stations: Vec<Station>,
    #[serde(default)]
    lines: Vec<Line>,
}

impl SubwayMap {
    /// Network pre-populated with the built-in stations and lines
    pub fn seeded() -> Result<Self> {
        Self::from_seed_yaml(SEED_YAML)
    }

    /// Parse seed YAML, checking that every route references known stations
    pub fn from_seed_yaml(yaml: &str) -> Result<Self> {
        let seed: SeedData =
            serde_yaml::from_str(yaml).map_err(|e| SubwayError::Seed(e.to_string()))?;

        let mut map = SubwayMap::new();
        for station in seed.stations {
            if map.has_station(&station.name) {
                return Err(SubwayError::Seed(format!(
                    "station '{}' listed twice",
                    station.name
                )));
            }
            map.add_station(station);
        }

        for line in seed.lines {
            if map.has_line(&line.name) {
                return Err(SubwayError::Seed(format!("line '{}' listed twice", line.name)));
            }
            if let Some(unknown) = line.route.iter().find(|s| !map.has_station(s)) {
                return Err(SubwayError::Seed(format!(
                    "line '{}' references unknown station '{}'",
                    line.name, unknown
                )));
            }
            map.add_line(line);
        }

        debug!(
            stations = map.stations().len(),
            lines = map.lines().len(),
            "Seeded subway map"
        );
        Ok(map)
    }
}
