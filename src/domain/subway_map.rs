//! Stations, lines and the network that owns them

use serde::Deserialize;

use crate::screen::EntityType;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Station {
    pub name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named line and its ordered route of station names
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Line {
    pub name: String,
    pub route: Vec<String>,
}

impl Line {
    /// New line running between two end stations
    pub fn new(name: impl Into<String>, upward: impl Into<String>, downward: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: vec![upward.into(), downward.into()],
        }
    }

    pub fn contains(&self, station: &str) -> bool {
        self.route.iter().any(|s| s == station)
    }

    /// Insert `station` so it ends up at `position`. Caller validates the index.
    pub fn insert_station(&mut self, position: usize, station: impl Into<String>) {
        self.route.insert(position, station.into());
    }

    /// Returns false when the station was not on the route
    pub fn remove_station(&mut self, station: &str) -> bool {
        match self.route.iter().position(|s| s == station) {
            Some(index) => {
                self.route.remove(index);
                true
            }
            None => false,
        }
    }
}

/// The whole network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubwayMap {
    stations: Vec<Station>,
    lines: Vec<Line>,
}

impl SubwayMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn station_names(&self) -> Vec<String> {
        self.stations.iter().map(|s| s.name.clone()).collect()
    }

    pub fn line_names(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.name.clone()).collect()
    }

    pub fn has_station(&self, name: &str) -> bool {
        self.stations.iter().any(|s| s.name == name)
    }

    pub fn has_line(&self, name: &str) -> bool {
        self.lines.iter().any(|l| l.name == name)
    }

    /// Whether an entity of the given kind is registered under `name`.
    /// Kinds without named instances never match.
    pub fn contains(&self, entity: EntityType, name: &str) -> bool {
        match entity {
            EntityType::Station => self.has_station(name),
            EntityType::Line => self.has_line(name),
            EntityType::Route | EntityType::Map | EntityType::None => false,
        }
    }

    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.name == name)
    }

    pub fn line_mut(&mut self, name: &str) -> Option<&mut Line> {
        self.lines.iter_mut().find(|l| l.name == name)
    }

    /// First line whose route passes through `station`
    pub fn line_through(&self, station: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.contains(station))
    }

    pub fn add_station(&mut self, station: Station) {
        self.stations.push(station);
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn remove_station(&mut self, name: &str) -> bool {
        let before = self.stations.len();
        self.stations.retain(|s| s.name != name);
        self.stations.len() != before
    }

    pub fn remove_line(&mut self, name: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.name != name);
        self.lines.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubwayMap {
        let mut map = SubwayMap::new();
        for name in ["Gyodae", "Gangnam", "Yeoksam"] {
            map.add_station(Station::new(name));
        }
        map.add_line(Line::new("Line 2", "Gyodae", "Yeoksam"));
        map
    }

    #[test]
    fn contains_by_entity_kind() {
        let map = sample();
        assert!(map.contains(EntityType::Station, "Gangnam"));
        assert!(!map.contains(EntityType::Line, "Gangnam"));
        assert!(map.contains(EntityType::Line, "Line 2"));
        assert!(!map.contains(EntityType::Route, "Line 2"));
    }

    #[test]
    fn route_insert_and_remove() {
        let mut map = sample();
        let line = map.line_mut("Line 2").unwrap();
        line.insert_station(1, "Gangnam");
        assert_eq!(line.route, vec!["Gyodae", "Gangnam", "Yeoksam"]);

        assert!(line.remove_station("Gyodae"));
        assert!(!line.remove_station("Gyodae"));
        assert_eq!(line.route, vec!["Gangnam", "Yeoksam"]);
    }

    #[test]
    fn line_through_finds_registered_station() {
        let map = sample();
        assert_eq!(map.line_through("Yeoksam").map(|l| l.name.as_str()), Some("Line 2"));
        assert!(map.line_through("Gangnam").is_none());
    }

    #[test]
    fn remove_reports_presence() {
        let mut map = sample();
        assert!(map.remove_line("Line 2"));
        assert!(!map.remove_line("Line 2"));
        assert!(map.remove_station("Gangnam"));
        assert!(!map.has_station("Gangnam"));
    }
}
