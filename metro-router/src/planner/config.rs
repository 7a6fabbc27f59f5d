//! Router configuration.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether dominated routes to an already-reachable station are pruned
    /// from the frontier. With pruning off the frontier keeps one entry per
    /// discovered path, and the search is not guaranteed to terminate on
    /// graphs with many routes between the same stations.
    pub prune_redundant: bool,

    /// Maximum number of expansion rounds, or `None` for no bound.
    /// An exhausted budget surfaces as
    /// [`SearchError::BudgetExhausted`](super::SearchError::BudgetExhausted)
    /// rather than a truncated route.
    pub max_expansions: Option<usize>,
}

impl RouterConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(prune_redundant: bool, max_expansions: Option<usize>) -> Self {
        Self {
            prune_redundant,
            max_expansions,
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prune_redundant: true,
            max_expansions: None,
        }
    }
}
