//! City metro route planner.
//!
//! Answers: "starting from these coordinates, what is the best route to
//! those coordinates on the metro network?" under a selectable cost
//! preference (raw adjacency, minimum time, distance, transfers, or stops).
//!
//! The station graph is supplied by the embedding host through the
//! [`network`] data contract; this crate owns only the search itself.

pub mod domain;
pub mod network;
pub mod planner;
