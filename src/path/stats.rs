/// Diagnostic counters of a finished search.
///
/// These are for reporting only. No search reads them to make decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded (the closed set)
    pub expanded: usize,
    /// Nodes that were ever created: frontier + closed set at termination
    pub discovered: usize,
    /// Nodes still waiting in the frontier at termination
    pub frontier: usize,
}

impl std::ops::Add for SearchStats {
    type Output = SearchStats;
    fn add(self, other: SearchStats) -> SearchStats {
        SearchStats {
            expanded: self.expanded + other.expanded,
            discovered: self.discovered + other.discovered,
            frontier: self.frontier + other.frontier,
        }
    }
}
