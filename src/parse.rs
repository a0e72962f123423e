//! Textual edge lists, as accepted by the command line tool.
use std::str::FromStr;

use thiserror::Error;

/// Separator between the two endpoints of an edge.
pub const EDGE_SEPARATOR: char = '-';

/// An undirected edge between two named vertices, written `u-v`.
///
/// Vertex names are opaque strings; surrounding whitespace is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    /// Returns the endpoints as a pair.
    pub fn into_pair(self) -> (String, String) {
        (self.source, self.target)
    }
}

impl FromStr for Edge {
    type Err = ParseEdgeError;

    /// Parses an edge of the form `u-v`.
    ///
    /// The text is split at the first separator, so `a-b-c` is the edge between `a` and `b-c`.
    ///
    /// ```
    /// # use eulergraph::parse::{Edge, ParseEdgeError};
    /// let edge: Edge = "paris - lyon".parse().unwrap();
    /// assert_eq!(edge.into_pair(), ("paris".to_string(), "lyon".to_string()));
    /// assert!(matches!("paris".parse::<Edge>(), Err(ParseEdgeError::MissingSeparator(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, target) = s
            .split_once(EDGE_SEPARATOR)
            .ok_or_else(|| ParseEdgeError::MissingSeparator(s.to_string()))?;
        let (source, target) = (source.trim(), target.trim());

        if source.is_empty() || target.is_empty() {
            return Err(ParseEdgeError::EmptyVertex(s.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}

/// Parses a sequence of edges, stopping at the first malformed one.
pub fn parse_edges<I, S>(edges: I) -> Result<Vec<(String, String)>, ParseEdgeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    edges
        .into_iter()
        .map(|edge| edge.as_ref().parse::<Edge>().map(Edge::into_pair))
        .collect()
}

/// Error returned when parsing an [`Edge`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEdgeError {
    #[error("edge `{0}` is missing the `-` separator")]
    MissingSeparator(String),
    #[error("edge `{0}` has an empty endpoint")]
    EmptyVertex(String),
}
