//! Frontier maintenance: ordering and pruning.
//!
//! The frontier is a plain vector of path nodes kept ascending by
//! evaluation value. Two pruning passes keep it sound: cycle removal, which
//! is the sole guard against looping forever on zero-cost cycles, and
//! redundant-path removal, which keeps the frontier from growing one entry
//! per distinct route to a station.

use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::StationId;

use super::node::PathNode;

/// Drop children that revisit a station already on their own path.
///
/// Must run on every expansion before frontier insertion; nothing else
/// prevents infinite loops on graphs with cycles.
pub(super) fn remove_cycles(children: Vec<Rc<PathNode>>) -> Vec<Rc<PathNode>> {
    children
        .into_iter()
        .filter(|child| !child.has_visited(child.station))
        .collect()
}

/// Pairwise elimination of dominated routes to the same station.
///
/// Examines each (frontier node, child) pair once, frontier-major and in
/// list order, skipping pairs where either side was eliminated earlier in
/// the pass. At every examined pair the shared record in `best_costs` takes
/// the child's cost; when both sides head the same station, the frontier
/// node survives only if its cost is strictly below that record (the record
/// then takes the frontier node's cost and the child is eliminated),
/// otherwise the frontier node is eliminated.
///
/// The pair order decides which of two equally-cheap routes survives; it is
/// kept as-is rather than collapsed into a single authoritative minimum per
/// station.
pub(super) fn remove_redundant_paths(
    children: Vec<Rc<PathNode>>,
    frontier: Vec<Rc<PathNode>>,
    best_costs: &mut HashMap<StationId, f64>,
) -> (Vec<Rc<PathNode>>, Vec<Rc<PathNode>>) {
    let mut child_dead = vec![false; children.len()];
    let mut node_dead = vec![false; frontier.len()];

    for (node_index, node) in frontier.iter().enumerate() {
        for (child_index, child) in children.iter().enumerate() {
            if child_dead[child_index] {
                continue;
            }
            best_costs.insert(child.station, child.g);

            if child.station != node.station {
                continue;
            }
            let recorded = best_costs[&child.station];
            if node.g < recorded {
                best_costs.insert(child.station, node.g);
                child_dead[child_index] = true;
            } else {
                node_dead[node_index] = true;
                break;
            }
        }
    }

    let children = keep_alive(children, &child_dead);
    let frontier = keep_alive(frontier, &node_dead);
    (children, frontier)
}

fn keep_alive(nodes: Vec<Rc<PathNode>>, dead: &[bool]) -> Vec<Rc<PathNode>> {
    nodes
        .into_iter()
        .zip(dead)
        .filter(|&(_, &is_dead)| !is_dead)
        .map(|(node, _)| node)
        .collect()
}

/// Merge children into the frontier, keeping ascending evaluation order.
///
/// The sort is stable, so equal evaluations expand in insertion order:
/// surviving frontier entries first, then children in generation order.
pub(super) fn sorted_insertion(
    mut frontier: Vec<Rc<PathNode>>,
    children: Vec<Rc<PathNode>>,
) -> Vec<Rc<PathNode>> {
    frontier.extend(children);
    frontier.sort_by(|a, b| a.f.total_cmp(&b.f));
    frontier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> StationId {
        StationId::new(n).unwrap()
    }

    fn node(station: u32, g: f64, ancestors: &[u32]) -> Rc<PathNode> {
        Rc::new(PathNode {
            station: id(station),
            g,
            h: 0.0,
            f: g,
            ancestors: ancestors.iter().map(|&n| id(n)).collect(),
            ..PathNode::origin(id(station))
        })
    }

    fn stations(nodes: &[Rc<PathNode>]) -> Vec<u32> {
        nodes.iter().map(|n| n.station.get()).collect()
    }

    #[test]
    fn cycle_removal_drops_revisits() {
        let children = vec![
            node(3, 1.0, &[2, 1]),
            node(1, 1.0, &[2, 1]), // loops back to the origin
            node(4, 1.0, &[2, 1]),
        ];

        let survivors = remove_cycles(children);
        assert_eq!(stations(&survivors), vec![3, 4]);
    }

    #[test]
    fn cycle_removal_keeps_acyclic_children() {
        let children = vec![node(5, 2.0, &[3, 2, 1]), node(6, 2.0, &[3, 2, 1])];
        let survivors = remove_cycles(children);
        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn redundant_child_removed_when_frontier_is_cheaper() {
        let children = vec![node(7, 5.0, &[2, 1])];
        let frontier = vec![node(7, 3.0, &[4, 1])];
        let mut best_costs = HashMap::new();

        let (children, frontier) =
            remove_redundant_paths(children, frontier, &mut best_costs);

        assert!(children.is_empty());
        assert_eq!(stations(&frontier), vec![7]);
        assert_eq!(best_costs[&id(7)], 3.0);
    }

    #[test]
    fn frontier_node_removed_when_child_is_cheaper() {
        let children = vec![node(7, 2.0, &[2, 1])];
        let frontier = vec![node(7, 6.0, &[4, 1])];
        let mut best_costs = HashMap::new();

        let (children, frontier) =
            remove_redundant_paths(children, frontier, &mut best_costs);

        assert_eq!(stations(&children), vec![7]);
        assert!(frontier.is_empty());
        assert_eq!(best_costs[&id(7)], 2.0);
    }

    #[test]
    fn equal_costs_favour_the_child() {
        // Not strictly cheaper: the frontier node loses the pairing.
        let children = vec![node(7, 4.0, &[2, 1])];
        let frontier = vec![node(7, 4.0, &[4, 1])];
        let mut best_costs = HashMap::new();

        let (children, frontier) =
            remove_redundant_paths(children, frontier, &mut best_costs);

        assert_eq!(stations(&children), vec![7]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn unrelated_stations_pass_through() {
        let children = vec![node(8, 1.0, &[1])];
        let frontier = vec![node(9, 1.0, &[1])];
        let mut best_costs = HashMap::new();

        let (children, frontier) =
            remove_redundant_paths(children, frontier, &mut best_costs);

        assert_eq!(stations(&children), vec![8]);
        assert_eq!(stations(&frontier), vec![9]);
        // Every examined pair records the child's cost.
        assert_eq!(best_costs[&id(8)], 1.0);
    }

    #[test]
    fn eliminated_frontier_node_skips_its_remaining_pairs() {
        // The first child eliminates the frontier node; the second child at
        // the same station must then survive untouched.
        let children = vec![node(7, 1.0, &[2, 1]), node(7, 9.0, &[3, 1])];
        let frontier = vec![node(7, 5.0, &[4, 1])];
        let mut best_costs = HashMap::new();

        let (children, frontier) =
            remove_redundant_paths(children, frontier, &mut best_costs);

        assert_eq!(children.len(), 2);
        assert!(frontier.is_empty());
    }

    #[test]
    fn one_frontier_node_can_eliminate_several_children() {
        let children = vec![node(7, 5.0, &[2, 1]), node(7, 6.0, &[3, 1])];
        let frontier = vec![node(7, 1.0, &[4, 1])];
        let mut best_costs = HashMap::new();

        let (children, frontier) =
            remove_redundant_paths(children, frontier, &mut best_costs);

        assert!(children.is_empty());
        assert_eq!(frontier.len(), 1);
        assert_eq!(best_costs[&id(7)], 1.0);
    }

    #[test]
    fn sorted_insertion_orders_by_evaluation() {
        let frontier = vec![node(1, 3.0, &[]), node(2, 5.0, &[])];
        let children = vec![node(3, 4.0, &[]), node(4, 1.0, &[])];

        let merged = sorted_insertion(frontier, children);
        assert_eq!(stations(&merged), vec![4, 1, 3, 2]);
    }

    #[test]
    fn sorted_insertion_breaks_ties_by_insertion_order() {
        let frontier = vec![node(1, 2.0, &[])];
        let children = vec![node(2, 2.0, &[]), node(3, 2.0, &[])];

        let merged = sorted_insertion(frontier, children);
        // Existing frontier entries precede children at equal evaluation.
        assert_eq!(stations(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn sorted_insertion_into_empty_frontier() {
        let merged = sorted_insertion(Vec::new(), vec![node(2, 1.0, &[]), node(1, 0.5, &[])]);
        assert_eq!(stations(&merged), vec![1, 2]);
    }
}
