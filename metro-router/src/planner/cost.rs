//! Edge cost derivation (the cost model).
//!
//! The search minimizes a different scalar per preference; the cost table
//! fixes that scalar for every directed adjacency present in the graph.
//! Tables are derived once per query and then only read.

use std::collections::HashMap;

use crate::domain::{Preference, StationId};
use crate::network::TransitNetwork;

/// Per-edge costs under one preference.
///
/// Maps each station to its adjacent stations and the cost of travelling
/// that edge. Every edge of the raw adjacency has an entry; a lookup miss
/// during search therefore indicates a corrupt input graph.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    costs: HashMap<StationId, HashMap<StationId, f64>>,
}

impl CostTable {
    /// Derive the cost table for a preference.
    ///
    /// - `Adjacency` and `Time` take the raw travel time unchanged.
    /// - `Distance` is travel time times the origin line's average velocity,
    ///   except that a transfer between same-named stations covers no
    ///   distance.
    /// - `Transfers` costs 1 when the edge changes line, else 0.
    /// - `Stops` costs 1 when the edge changes physical stop name, else 0.
    ///
    /// An empty network yields an empty table.
    pub fn build(preference: Preference, network: &TransitNetwork) -> Self {
        let mut costs: HashMap<StationId, HashMap<StationId, f64>> =
            HashMap::with_capacity(network.len());

        for origin in network.stations() {
            let row = costs.entry(origin.id).or_default();
            for (&dest_id, &minutes) in &origin.connections {
                let Some(dest) = network.station(dest_id) else {
                    // Unreachable through NetworkBuilder; left absent so the
                    // expansion step surfaces it as a missing cost entry.
                    continue;
                };

                let cost = match preference {
                    Preference::Adjacency | Preference::Time => minutes,
                    Preference::Distance => {
                        if origin.name == dest.name {
                            0.0
                        } else {
                            match network.city().line_velocity(origin.line) {
                                Some(velocity) => velocity * minutes,
                                None => continue,
                            }
                        }
                    }
                    Preference::Transfers => {
                        if origin.line != dest.line {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    Preference::Stops => {
                        if origin.name != dest.name {
                            1.0
                        } else {
                            0.0
                        }
                    }
                };
                row.insert(dest_id, cost);
            }
        }

        CostTable { costs }
    }

    /// Cost of the directed edge `from -> to`, if present.
    pub fn get(&self, from: StationId, to: StationId) -> Option<f64> {
        self.costs.get(&from).and_then(|row| row.get(&to)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.values().all(|row| row.is_empty())
    }
}
