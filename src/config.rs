use std::str::FromStr;

use crate::error::UnknownAlgorithm;

/// Which ordering component to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Algorithm {
    /// Depth-first traversal with back-edge cycle detection.
    #[default]
    DepthFirst,
    /// Repeated removal of vertices with no incoming edges.
    Kahn,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthFirst => write!(f, "depth_first"),
            Self::Kahn => write!(f, "kahn"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depth-first" => Ok(Self::DepthFirst),
            "kahn" => Ok(Self::Kahn),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// What to do with a vertex that only ever shows up as the target
/// of an edge and never as a key of the adjacency mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum UndeclaredPolicy {
    /// Add it to the graph as a node with no neighbors.
    #[default]
    Promote,
    /// Fail with [`crate::error::GraphInteractionError::UndeclaredNode`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SortConfig {
    pub algorithm: Algorithm,
    pub undeclared: UndeclaredPolicy,
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_undeclared(mut self, undeclared: UndeclaredPolicy) -> Self {
        self.undeclared = undeclared;
        self
    }

    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("dfs".parse::<Algorithm>(), Ok(Algorithm::DepthFirst));
        assert_eq!(" Depth_First ".parse::<Algorithm>(), Ok(Algorithm::DepthFirst));
        assert_eq!("KAHN".parse::<Algorithm>(), Ok(Algorithm::Kahn));
        assert_eq!(
            "bfs".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bfs".to_string()))
        );
    }

    #[test]
    fn display_parses_back() {
        for algorithm in [Algorithm::DepthFirst, Algorithm::Kahn] {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn builder_style_config() {
        let config = SortConfig::new()
            .with_algorithm(Algorithm::Kahn)
            .with_undeclared(UndeclaredPolicy::Reject);
        assert_eq!(config.algorithm, Algorithm::Kahn);
        assert_eq!(config.undeclared, UndeclaredPolicy::Reject);
    }

    #[cfg(feature = "json")]
    #[test]
    fn config_from_json() {
        let config = SortConfig::from_json(r#"{ "algorithm": "kahn" }"#).unwrap();
        assert_eq!(config, SortConfig::new().with_algorithm(Algorithm::Kahn));

        let config = SortConfig::from_json("{}").unwrap();
        assert_eq!(config, SortConfig::default());

        assert!(SortConfig::from_json(r#"{ "algorithm": "bfs" }"#).is_err());
    }
}
