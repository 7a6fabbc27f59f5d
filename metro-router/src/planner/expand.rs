//! Node expansion: turning one path state into its graph successors.

use std::rc::Rc;

use crate::domain::Preference;
use crate::network::{CityInfo, Station, TransitNetwork};

use super::cost::CostTable;
use super::node::PathNode;
use super::search::SearchError;

/// Expand `parent` into one child per raw-adjacency neighbour, in
/// ascending neighbour-id order.
///
/// Children carry fully computed cost, heuristic, evaluation, and travel
/// metrics. No pruning happens here; cycle and redundancy filtering are
/// separate steps so that expansion stays a plain generator of successors.
///
/// Elapsed time is always accumulated from the `time_costs` table, whatever
/// the active preference. Walking distance grows by travel time times the
/// parent line's velocity while staying on a line; a line change adds no
/// distance but counts one transfer. The stop count grows only when the
/// physical stop name changes.
pub fn expand(
    parent: &Rc<PathNode>,
    network: &TransitNetwork,
    preference: Preference,
    destination: &Station,
    costs: &CostTable,
    time_costs: &CostTable,
) -> Result<Vec<Rc<PathNode>>, SearchError> {
    let station = network
        .station(parent.station)
        .ok_or(SearchError::UnknownStation(parent.station))?;
    let city = network.city();

    let mut children = Vec::with_capacity(station.connections.len());
    for &neighbour_id in station.connections.keys() {
        let neighbour = network
            .station(neighbour_id)
            .ok_or(SearchError::UnknownStation(neighbour_id))?;

        let edge = costs
            .get(parent.station, neighbour_id)
            .ok_or(SearchError::MissingCost {
                from: parent.station,
                to: neighbour_id,
            })?;
        let g = parent.g + edge;
        let h = heuristic(preference, neighbour, destination, city);

        let minutes = time_costs
            .get(parent.station, neighbour_id)
            .ok_or(SearchError::MissingCost {
                from: parent.station,
                to: neighbour_id,
            })?;

        let (walk, transfers) = if neighbour.line == station.line {
            let velocity = city
                .line_velocity(station.line)
                .ok_or(SearchError::UnknownLine(station.line))?;
            (parent.walk + minutes * velocity, parent.transfers)
        } else {
            (parent.walk, parent.transfers + 1)
        };

        let stops = if neighbour.name == station.name {
            parent.stops
        } else {
            parent.stops + 1
        };

        let mut ancestors = Vec::with_capacity(parent.ancestors.len() + 1);
        ancestors.push(parent.station);
        ancestors.extend_from_slice(&parent.ancestors);

        children.push(Rc::new(PathNode {
            station: neighbour_id,
            g,
            h,
            f: g + h,
            ancestors,
            parent: Some(Rc::clone(parent)),
            time: parent.time + minutes,
            walk,
            transfers,
            stops,
        }));
    }

    Ok(children)
}

/// Heuristic estimate from `station` to `destination` under a preference.
///
/// For `Time` the estimate is straight-line distance at the network's
/// maximum velocity, plus the fixed transfer penalty whenever the lines
/// differ; that penalty can overestimate the true remaining cost in some
/// topologies, so optimality is not guaranteed under that preference.
fn heuristic(
    preference: Preference,
    station: &Station,
    destination: &Station,
    city: &CityInfo,
) -> f64 {
    match preference {
        Preference::Adjacency => 0.0,
        Preference::Time => {
            let mut estimate =
                station.position.euclidean(destination.position) / city.max_velocity;
            if station.line != destination.line {
                estimate += city.min_transfer_time;
            }
            estimate
        }
        Preference::Distance => station.position.euclidean(destination.position),
        Preference::Transfers => {
            if station.line != destination.line {
                1.0
            } else {
                0.0
            }
        }
        Preference::Stops => {
            if station.name == destination.name {
                0.0
            } else {
                1.0
            }
        }
    }
}
