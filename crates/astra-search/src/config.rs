/// Policy deciding whether a state may be improved after it was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revisit {
    /// Any strictly cheaper route re-opens a state; outdated frontier entries
    /// are recognised on pop by their cost and dropped.
    #[default]
    Relax,
    /// Once a state has been expanded it is final: later routes to it are
    /// ignored and its leftover frontier entries are dropped.
    Closed,
}

/// Tunables for an A* search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub revisit: Revisit,
    /// Stop with [`SearchStatus::LimitReached`](crate::SearchStatus) once this
    /// many states have been expanded without popping the goal.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_revisit(mut self, revisit: Revisit) -> Self {
        self.revisit = revisit;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub(crate) fn limit_hit(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_relax_without_limit() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.revisit, Revisit::Relax);
        assert_eq!(cfg.max_expansions, None);
        assert!(!cfg.limit_hit(usize::MAX));
    }

    #[test]
    fn builders() {
        let cfg = SearchConfig::default()
            .with_revisit(Revisit::Closed)
            .with_max_expansions(10);
        assert_eq!(cfg.revisit, Revisit::Closed);
        assert!(!cfg.limit_hit(9));
        assert!(cfg.limit_hit(10));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default()
            .with_revisit(Revisit::Closed)
            .with_max_expansions(500);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
