//! Domain model: stations, lines and their routes

mod seed;
mod subway_map;

pub use subway_map::{Line, Station, SubwayMap};
