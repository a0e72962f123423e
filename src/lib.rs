//! Classification of undirected graphs into Eulerian, semi-Eulerian and neither.
//!
//! A graph is given as a list of edges between vertices of any type that can be hashed and
//! compared for equality. It is Eulerian when it is connected and every vertex has even degree,
//! and semi-Eulerian when it is connected and exactly two vertices have odd degree.
//!
//! ```
//! use eulergraph::{classify, Classification};
//!
//! let house = [(1, 2), (2, 3), (3, 4), (4, 1), (3, 5), (5, 4)];
//! assert_eq!(classify(house), Classification::SemiEulerian);
//! assert_eq!(classify(house).to_string(), "Semi-Eulerian graph");
//! ```
//!
//! The building blocks are available on their own: [`build_adjacency`] creates the adjacency
//! lists, [`vertices_of`] derives the vertex set and [`is_connected`] checks connectivity with an
//! iterative depth-first search.

pub mod adjacency;
pub mod classify;
pub mod connectivity;
pub mod parse;
pub mod vertices;

#[cfg(feature = "pyo3")]
mod python;

pub use adjacency::{build_adjacency, AdjacencyMap};
pub use classify::{classify, classify_adjacency, odd_degree_vertices, Classification};
pub use connectivity::{is_connected, is_connected_from, reachable_from, UnknownVertex};
pub use vertices::{vertices_of, VertexSet};
