//! The station graph consumed by the route planner.
//!
//! A [`TransitNetwork`] owns a city's stations and its network-wide
//! constants. How the data gets here (file format, download, editor) is the
//! embedding host's concern; the planner only reads it through lookups.
//!
//! A physical stop served by several lines appears once per line, with the
//! same name and distinct ids; edges between those variants model line
//! transfers.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Point, StationId};

/// One station of the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    /// Human-readable stop name; shared across line variants of one stop.
    pub name: String,
    pub line: LineId,
    pub position: Point,
    /// Directly reachable neighbours with raw travel time in minutes.
    /// Directed: a link here does not imply the reverse link.
    pub connections: BTreeMap<StationId, f64>,
}

impl Station {
    /// A station with no outgoing connections; links are added by the
    /// [`NetworkBuilder`].
    pub fn new(id: StationId, name: impl Into<String>, line: LineId, position: Point) -> Self {
        Station {
            id,
            name: name.into(),
            line,
            position,
            connections: BTreeMap::new(),
        }
    }
}

/// Network-wide constants supplied by the data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityInfo {
    /// Fastest average line velocity across the network.
    pub max_velocity: f64,
    /// Fixed time penalty assumed for changing lines.
    pub min_transfer_time: f64,
    /// Average velocity per line, indexed by line id.
    line_velocities: Vec<f64>,
}

impl CityInfo {
    pub fn new(max_velocity: f64, min_transfer_time: f64, line_velocities: Vec<f64>) -> Self {
        CityInfo {
            max_velocity,
            min_transfer_time,
            line_velocities,
        }
    }

    /// Average velocity of a line, or `None` if the line has no entry.
    pub fn line_velocity(&self, line: LineId) -> Option<f64> {
        self.line_velocities.get(line.get() as usize - 1).copied()
    }

    /// Number of lines with a velocity entry.
    pub fn line_count(&self) -> usize {
        self.line_velocities.len()
    }
}

/// Error raised while assembling a network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Two stations were added with the same id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// A link endpoint does not name a known station
    #[error("link references unknown station {0}")]
    UnknownStation(StationId),

    /// A station's line has no velocity entry
    #[error("station {station} is on line {line}, which has no velocity entry")]
    UnknownLine { station: StationId, line: LineId },

    /// A link's travel time is negative or not finite
    #[error("link {from} -> {to} has invalid travel time {minutes}")]
    InvalidTravelTime {
        from: StationId,
        to: StationId,
        minutes: f64,
    },

    /// A station's coordinates are not finite numbers
    #[error("station {0} has non-finite coordinates")]
    NonFinitePosition(StationId),
}

/// A city's station graph plus its constants.
///
/// Construct via [`NetworkBuilder`], which validates the graph contract:
/// links point at known stations, every line has a velocity entry, and all
/// numbers are finite.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    stations: Vec<Station>,
    by_id: HashMap<StationId, usize>,
    city: CityInfo,
}

impl TransitNetwork {
    /// All stations, in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn city(&self) -> &CityInfo {
        &self.city
    }

    /// Look a station up by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|&index| &self.stations[index])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for assembling a validated [`TransitNetwork`].
///
/// # Examples
///
/// ```
/// use metro_router::domain::{LineId, Point, StationId};
/// use metro_router::network::{CityInfo, NetworkBuilder};
///
/// let id = |n| StationId::new(n).unwrap();
/// let network = NetworkBuilder::new(CityInfo::new(10.0, 2.0, vec![10.0]))
///     .station(id(1), "Fontana", LineId::new(1).unwrap(), Point::new(0.0, 0.0))
///     .station(id(2), "Lesseps", LineId::new(1).unwrap(), Point::new(0.0, 3.0))
///     .link_both(id(1), id(2), 2.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 2);
/// assert!(network.station(id(1)).unwrap().connections.contains_key(&id(2)));
/// ```
#[derive(Debug)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    links: Vec<(StationId, StationId, f64)>,
    city: CityInfo,
}

impl NetworkBuilder {
    pub fn new(city: CityInfo) -> Self {
        NetworkBuilder {
            stations: Vec::new(),
            links: Vec::new(),
            city,
        }
    }

    /// Add a station.
    pub fn station(
        mut self,
        id: StationId,
        name: impl Into<String>,
        line: LineId,
        position: Point,
    ) -> Self {
        self.stations.push(Station::new(id, name, line, position));
        self
    }

    /// Add a directed link with a raw travel time in minutes.
    pub fn link(mut self, from: StationId, to: StationId, minutes: f64) -> Self {
        self.links.push((from, to, minutes));
        self
    }

    /// Add a link in both directions with the same travel time.
    pub fn link_both(self, a: StationId, b: StationId, minutes: f64) -> Self {
        self.link(a, b, minutes).link(b, a, minutes)
    }

    /// Validate and assemble the network.
    pub fn build(self) -> Result<TransitNetwork, NetworkError> {
        let mut by_id = HashMap::with_capacity(self.stations.len());
        for (index, station) in self.stations.iter().enumerate() {
            if by_id.insert(station.id, index).is_some() {
                return Err(NetworkError::DuplicateStation(station.id));
            }
            if !station.position.is_finite() {
                return Err(NetworkError::NonFinitePosition(station.id));
            }
            if self.city.line_velocity(station.line).is_none() {
                return Err(NetworkError::UnknownLine {
                    station: station.id,
                    line: station.line,
                });
            }
        }

        let mut stations = self.stations;
        for (from, to, minutes) in self.links {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(NetworkError::InvalidTravelTime { from, to, minutes });
            }
            if !by_id.contains_key(&to) {
                return Err(NetworkError::UnknownStation(to));
            }
            let Some(&from_index) = by_id.get(&from) else {
                return Err(NetworkError::UnknownStation(from));
            };
            stations[from_index].connections.insert(to, minutes);
        }

        Ok(TransitNetwork {
            stations,
            by_id,
            city: self.city,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> StationId {
        StationId::new(n).unwrap()
    }

    fn line(n: u32) -> LineId {
        LineId::new(n).unwrap()
    }

    fn builder() -> NetworkBuilder {
        NetworkBuilder::new(CityInfo::new(10.0, 2.0, vec![5.0, 10.0]))
    }

    #[test]
    fn build_and_lookup() {
        let network = builder()
            .station(id(1), "Catalunya", line(1), Point::new(0.0, 0.0))
            .station(id(2), "Urquinaona", line(1), Point::new(2.0, 0.0))
            .link_both(id(1), id(2), 2.0)
            .build()
            .unwrap();

        assert_eq!(network.len(), 2);
        assert!(!network.is_empty());

        let catalunya = network.station(id(1)).unwrap();
        assert_eq!(catalunya.name, "Catalunya");
        assert_eq!(catalunya.connections.get(&id(2)), Some(&2.0));

        let urquinaona = network.station(id(2)).unwrap();
        assert_eq!(urquinaona.connections.get(&id(1)), Some(&2.0));

        assert!(network.station(id(9)).is_none());
    }

    #[test]
    fn directed_link_is_one_way() {
        let network = builder()
            .station(id(1), "A", line(1), Point::new(0.0, 0.0))
            .station(id(2), "B", line(1), Point::new(1.0, 0.0))
            .link(id(1), id(2), 1.0)
            .build()
            .unwrap();

        assert!(network.station(id(1)).unwrap().connections.contains_key(&id(2)));
        assert!(network.station(id(2)).unwrap().connections.is_empty());
    }

    #[test]
    fn duplicate_station_rejected() {
        let result = builder()
            .station(id(1), "A", line(1), Point::new(0.0, 0.0))
            .station(id(1), "B", line(2), Point::new(1.0, 0.0))
            .build();

        assert_eq!(result.unwrap_err(), NetworkError::DuplicateStation(id(1)));
    }

    #[test]
    fn dangling_link_rejected() {
        let result = builder()
            .station(id(1), "A", line(1), Point::new(0.0, 0.0))
            .link(id(1), id(7), 1.0)
            .build();

        assert_eq!(result.unwrap_err(), NetworkError::UnknownStation(id(7)));
    }

    #[test]
    fn line_without_velocity_rejected() {
        let result = builder()
            .station(id(1), "A", line(3), Point::new(0.0, 0.0))
            .build();

        assert_eq!(
            result.unwrap_err(),
            NetworkError::UnknownLine {
                station: id(1),
                line: line(3)
            }
        );
    }

    #[test]
    fn negative_travel_time_rejected() {
        let result = builder()
            .station(id(1), "A", line(1), Point::new(0.0, 0.0))
            .station(id(2), "B", line(1), Point::new(1.0, 0.0))
            .link(id(1), id(2), -1.0)
            .build();

        assert!(matches!(
            result.unwrap_err(),
            NetworkError::InvalidTravelTime { .. }
        ));
    }

    #[test]
    fn non_finite_position_rejected() {
        let result = builder()
            .station(id(1), "A", line(1), Point::new(f64::NAN, 0.0))
            .build();

        assert_eq!(result.unwrap_err(), NetworkError::NonFinitePosition(id(1)));
    }

    #[test]
    fn city_velocity_lookup() {
        let city = CityInfo::new(10.0, 2.0, vec![5.0, 10.0]);
        assert_eq!(city.line_velocity(line(1)), Some(5.0));
        assert_eq!(city.line_velocity(line(2)), Some(10.0));
        assert_eq!(city.line_velocity(line(3)), None);
        assert_eq!(city.line_count(), 2);
    }

    #[test]
    fn empty_network_builds() {
        let network = builder().build().unwrap();
        assert!(network.is_empty());
        assert_eq!(network.stations().len(), 0);
    }
}
