//! Best-first route search over the station graph.

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{LineId, Point, Preference, StationId};
use crate::network::TransitNetwork;

use super::config::RouterConfig;
use super::cost::CostTable;
use super::expand::expand;
use super::frontier::{remove_cycles, remove_redundant_paths, sorted_insertion};
use super::locate::nearest_stations;
use super::node::PathNode;

/// Error from route search.
///
/// `MissingCost`, `UnknownStation`, and `UnknownLine` are graph contract
/// violations: every edge of the raw adjacency must have a cost entry and
/// every referenced station and line must exist. They indicate a corrupt
/// input graph, not a condition the caller can retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Frontier exhausted without reaching the destination stop
    #[error("no route found to the destination")]
    NoRouteFound,

    /// Invalid route request
    #[error("invalid route request: {0}")]
    InvalidRequest(String),

    /// An edge present in the raw adjacency has no cost table entry
    #[error("no cost entry for edge {from} -> {to}")]
    MissingCost { from: StationId, to: StationId },

    /// A station id reachable through the adjacency is not in the network
    #[error("station {0} is not part of the network")]
    UnknownStation(StationId),

    /// A station's line has no velocity entry
    #[error("line {0} has no velocity entry")]
    UnknownLine(LineId),

    /// The configured expansion budget ran out before the destination
    #[error("expansion budget exhausted after {expanded} rounds")]
    BudgetExhausted { expanded: usize },
}

/// A route query: two raw coordinates and a preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Point,
    pub destination: Point,
    pub preference: Preference,
}

impl RouteRequest {
    pub fn new(origin: Point, destination: Point, preference: Preference) -> Self {
        Self {
            origin,
            destination,
            preference,
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.origin.is_finite() {
            return Err(SearchError::InvalidRequest(
                "origin coordinates must be finite".to_string(),
            ));
        }
        if !self.destination.is_finite() {
            return Err(SearchError::InvalidRequest(
                "destination coordinates must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// A computed route with its travel metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Total travel time in minutes.
    pub total_time: f64,
    /// Total distance physically travelled.
    pub total_distance: f64,
    /// Line changes along the route.
    pub transfers: u32,
    /// Distinct stops passed through, origin excluded.
    pub stops: u32,
    /// Expansion rounds the search performed.
    pub expanded_nodes: usize,
    /// Number of stations on the route (length of `path`).
    pub path_length: usize,
    /// Best frontier node after each expansion round, for replay/tracing.
    pub visited: Vec<StationId>,
    /// Station ids from origin to destination.
    pub path: Vec<StationId>,
    /// Manhattan distance from the origin coordinate to its station.
    pub origin_offset: f64,
    /// Manhattan distance from the destination coordinate to its station.
    pub destination_offset: f64,
}

/// Best-first route search over a transit network.
///
/// One `route` call owns its whole search state: frontier, best-cost
/// record, and node chain. Nothing is shared across calls.
///
/// # Examples
///
/// ```
/// use metro_router::domain::{LineId, Point, Preference, StationId};
/// use metro_router::network::{CityInfo, NetworkBuilder};
/// use metro_router::planner::{RouteRequest, Router, RouterConfig};
///
/// let id = |n| StationId::new(n).unwrap();
/// let network = NetworkBuilder::new(CityInfo::new(8.0, 2.0, vec![8.0]))
///     .station(id(1), "Fontana", LineId::new(1).unwrap(), Point::new(0.0, 0.0))
///     .station(id(2), "Lesseps", LineId::new(1).unwrap(), Point::new(0.0, 4.0))
///     .link_both(id(1), id(2), 2.0)
///     .build()
///     .unwrap();
///
/// let config = RouterConfig::default();
/// let router = Router::new(&network, &config);
/// let request = RouteRequest::new(Point::new(0.0, 0.0), Point::new(0.0, 4.0), Preference::Time);
///
/// let route = router.route(&request).unwrap();
/// assert_eq!(route.path, vec![id(1), id(2)]);
/// assert_eq!(route.total_time, 2.0);
/// ```
pub struct Router<'a> {
    network: &'a TransitNetwork,
    config: &'a RouterConfig,
}

impl<'a> Router<'a> {
    pub fn new(network: &'a TransitNetwork, config: &'a RouterConfig) -> Self {
        Self { network, config }
    }

    /// Search for the best route between the request's coordinates.
    ///
    /// Coordinates are resolved to their nearest stations first; a query
    /// whose endpoints resolve to the same stop succeeds immediately with a
    /// single-station route. The search then expands the cheapest frontier
    /// node until one reaches a station named like the destination stop, the
    /// frontier empties (`NoRouteFound`), or the expansion budget runs out.
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResult, SearchError> {
        request.validate()?;

        let stations = self.network.stations();
        let origin_candidates = nearest_stations(request.origin, stations);
        let destination_candidates = nearest_stations(request.destination, stations);
        let (Some(&origin_index), Some(&destination_index)) =
            (origin_candidates.first(), destination_candidates.first())
        else {
            // Empty network: nothing to route over.
            return Err(SearchError::NoRouteFound);
        };

        let origin = &stations[origin_index];
        let destination = &stations[destination_index];
        let origin_offset = request.origin.manhattan(origin.position);
        let destination_offset = request.destination.manhattan(destination.position);

        debug!(
            origin = %origin.id,
            destination = %destination.id,
            preference = %request.preference,
            "route search started"
        );

        if origin.name == destination.name {
            // Both coordinates resolve to the same physical stop.
            return Ok(RouteResult {
                total_time: 0.0,
                total_distance: 0.0,
                transfers: 0,
                stops: 0,
                expanded_nodes: 0,
                path_length: 1,
                visited: Vec::new(),
                path: vec![origin.id],
                origin_offset,
                destination_offset,
            });
        }

        let costs = CostTable::build(request.preference, self.network);
        let time_costs = CostTable::build(Preference::Time, self.network);

        let mut frontier: Vec<Rc<PathNode>> = vec![Rc::new(PathNode::origin(origin.id))];
        let mut best_costs: HashMap<StationId, f64> = HashMap::new();
        let mut visited: Vec<StationId> = Vec::new();
        let mut expanded = 0usize;

        let goal = loop {
            let Some(best) = frontier.first() else {
                debug!(expanded, "frontier exhausted");
                return Err(SearchError::NoRouteFound);
            };
            let head = self
                .network
                .station(best.station)
                .ok_or(SearchError::UnknownStation(best.station))?;
            if head.name == destination.name {
                break Rc::clone(best);
            }

            if let Some(budget) = self.config.max_expansions {
                if expanded >= budget {
                    return Err(SearchError::BudgetExhausted { expanded });
                }
            }

            let parent = frontier.remove(0);
            let rest = std::mem::take(&mut frontier);

            let children = expand(
                &parent,
                self.network,
                request.preference,
                destination,
                &costs,
                &time_costs,
            )?;
            expanded += 1;

            let children = remove_cycles(children);
            let (children, rest) = if self.config.prune_redundant {
                remove_redundant_paths(children, rest, &mut best_costs)
            } else {
                (children, rest)
            };

            frontier = sorted_insertion(rest, children);
            if let Some(best) = frontier.first() {
                visited.push(best.station);
                trace!(
                    round = expanded,
                    frontier = frontier.len(),
                    best = %best.station,
                    "expansion round"
                );
            }
        };

        // Ancestors run parent-first back to the origin; the route runs the
        // other way and ends at the resolved destination id.
        let mut path: Vec<StationId> = goal.ancestors.iter().rev().copied().collect();
        path.push(destination.id);

        debug!(expanded, path_length = path.len(), "route search complete");

        Ok(RouteResult {
            total_time: goal.time,
            total_distance: goal.walk,
            transfers: goal.transfers,
            stops: goal.stops,
            expanded_nodes: expanded,
            path_length: path.len(),
            visited,
            path,
            origin_offset,
            destination_offset,
        })
    }
}
