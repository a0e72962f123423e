//! Classification of undirected graphs by the existence of Euler trails.
use std::fmt;
use std::hash::Hash;

use crate::adjacency::AdjacencyMap;
use crate::connectivity::is_connected;
use crate::vertices::vertices_of;

/// The outcome of classifying a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Connected, and every vertex has even degree.
    Eulerian,
    /// Connected, and exactly two vertices have odd degree.
    SemiEulerian,
    /// Connected, but the number of odd-degree vertices is neither zero nor two.
    NotEulerian,
    /// The graph has more than one connected component.
    NotEulerianDisconnected,
}

impl Classification {
    /// All possible outcomes.
    pub const ALL: [Classification; 4] = [
        Self::Eulerian,
        Self::SemiEulerian,
        Self::NotEulerian,
        Self::NotEulerianDisconnected,
    ];

    /// Whether the graph admits a closed walk using every edge exactly once.
    #[inline]
    pub fn has_euler_circuit(self) -> bool {
        self == Self::Eulerian
    }

    /// Whether the graph admits a walk using every edge exactly once.
    #[inline]
    pub fn has_euler_trail(self) -> bool {
        matches!(self, Self::Eulerian | Self::SemiEulerian)
    }

    /// Whether the classified graph was connected.
    #[inline]
    pub fn is_connected(self) -> bool {
        self != Self::NotEulerianDisconnected
    }

    /// The human readable description of the outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eulerian => "Eulerian graph",
            Self::SemiEulerian => "Semi-Eulerian graph",
            Self::NotEulerian => "Not Eulerian or Semi-Eulerian graph",
            Self::NotEulerianDisconnected => "Not Eulerian or Semi-Eulerian graph (disconnected)",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the undirected graph given by a list of edges.
///
/// Self-loops add two to the degree of their vertex and repeated edges are counted every time
/// they occur. The empty graph is Eulerian.
///
/// # Example
///
/// ```
/// # use eulergraph::{classify, Classification};
/// assert_eq!(classify([(1, 2), (2, 3), (3, 1)]), Classification::Eulerian);
/// assert_eq!(classify([(1, 2), (2, 3)]), Classification::SemiEulerian);
/// assert_eq!(
///     classify([(1, 2), (3, 4)]).to_string(),
///     "Not Eulerian or Semi-Eulerian graph (disconnected)",
/// );
/// ```
pub fn classify<V, I>(edges: I) -> Classification
where
    V: Hash + Eq + Clone,
    I: IntoIterator<Item = (V, V)>,
{
    classify_adjacency(&AdjacencyMap::from_edges(edges))
}

/// Classifies a graph given by its adjacency map.
///
/// Connectivity is checked first; odd degrees are only counted for connected graphs.
pub fn classify_adjacency<V: Hash + Eq>(adj: &AdjacencyMap<V>) -> Classification {
    tracing::debug!(
        vertices = adj.vertex_count(),
        entries = adj.entry_count(),
        "classifying graph"
    );

    if !is_connected(adj) {
        tracing::debug!("graph is disconnected");
        return Classification::NotEulerianDisconnected;
    }

    let odd = vertices_of(adj)
        .iter()
        .filter(|vertex| adj.degree(vertex) % 2 != 0)
        .count();
    tracing::debug!(odd, "counted odd-degree vertices");

    match odd {
        0 => Classification::Eulerian,
        2 => Classification::SemiEulerian,
        _ => Classification::NotEulerian,
    }
}

/// Returns the vertices of odd degree.
///
/// For a semi-Eulerian graph these are the two endpoints of every Euler trail. The order of the
/// returned vertices is unspecified.
///
/// # Example
///
/// ```
/// # use eulergraph::{odd_degree_vertices, AdjacencyMap};
/// let adj = AdjacencyMap::from_edges([("a", "b"), ("b", "c")]);
/// let mut odd = odd_degree_vertices(&adj);
/// odd.sort();
/// assert_eq!(odd, [&"a", &"c"]);
/// ```
pub fn odd_degree_vertices<V: Hash + Eq>(adj: &AdjacencyMap<V>) -> Vec<&V> {
    vertices_of(adj)
        .iter()
        .filter(|vertex| adj.degree(vertex) % 2 != 0)
        .collect()
}
