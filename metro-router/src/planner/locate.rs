//! Coordinate resolution to nearest stations.

use crate::domain::Point;
use crate::network::Station;

/// Indices into `stations` of the station(s) nearest to `point` by
/// Manhattan distance.
///
/// All stations tied at the minimal distance are returned, in station-list
/// order; callers wanting a single concrete endpoint take the first entry
/// and keep the rest for disambiguation.
pub fn nearest_stations(point: Point, stations: &[Station]) -> Vec<usize> {
    let mut by_distance: Vec<(f64, usize)> = stations
        .iter()
        .enumerate()
        .map(|(index, station)| (point.manhattan(station.position), index))
        .collect();
    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut nearest = Vec::new();
    let mut closest = f64::INFINITY;
    for (distance, index) in by_distance {
        if distance <= closest {
            closest = distance;
            nearest.push(index);
        }
    }
    nearest
}
