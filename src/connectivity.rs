//! Connectivity of undirected graphs by iterative depth-first search.
use std::hash::Hash;

use bitvec::vec::BitVec;
use thiserror::Error;

use crate::adjacency::AdjacencyMap;
use crate::vertices::{vertices_of, VertexSet};

/// Returns whether every vertex of the graph is reachable from every other vertex.
///
/// A graph without vertices is considered connected.
///
/// The traversal starts at an arbitrary vertex of the [vertex set](crate::vertices_of); the
/// result does not depend on that choice. See [`is_connected_from`] to pick the start vertex.
///
/// # Example
///
/// ```
/// # use eulergraph::{is_connected, AdjacencyMap};
/// assert!(is_connected(&AdjacencyMap::from_edges([(1, 2), (2, 3)])));
/// assert!(!is_connected(&AdjacencyMap::from_edges([(1, 2), (3, 4)])));
/// assert!(is_connected(&AdjacencyMap::<u8>::new()));
/// ```
pub fn is_connected<V: Hash + Eq>(adj: &AdjacencyMap<V>) -> bool {
    let vertices = vertices_of(adj);
    match vertices.first() {
        Some(root) => reach(adj, &vertices, root) == vertices.len(),
        None => true,
    }
}

/// Returns whether every vertex of the graph is reachable from `root`.
///
/// # Errors
///
/// When `root` is not in the vertex set of the graph.
pub fn is_connected_from<V: Hash + Eq>(
    adj: &AdjacencyMap<V>,
    root: &V,
) -> Result<bool, UnknownVertex> {
    let vertices = vertices_of(adj);
    let reached = reachable_with(adj, &vertices, root)?;
    Ok(reached == vertices.len())
}

/// Returns the number of vertices reachable from `root`, including `root` itself.
///
/// # Errors
///
/// When `root` is not in the vertex set of the graph.
///
/// # Example
///
/// ```
/// # use eulergraph::{reachable_from, AdjacencyMap};
/// let adj = AdjacencyMap::from_edges([(1, 2), (2, 3), (4, 5)]);
/// assert_eq!(reachable_from(&adj, &1).unwrap(), 3);
/// assert_eq!(reachable_from(&adj, &5).unwrap(), 2);
/// assert!(reachable_from(&adj, &6).is_err());
/// ```
pub fn reachable_from<V: Hash + Eq>(
    adj: &AdjacencyMap<V>,
    root: &V,
) -> Result<usize, UnknownVertex> {
    reachable_with(adj, &vertices_of(adj), root)
}

fn reachable_with<'a, V: Hash + Eq>(
    adj: &'a AdjacencyMap<V>,
    vertices: &VertexSet<'a, V>,
    root: &V,
) -> Result<usize, UnknownVertex> {
    let position = vertices.position(root).ok_or(UnknownVertex)?;
    // Re-borrow the root from the vertex set so it lives as long as the map.
    let root = vertices.get(position).ok_or(UnknownVertex)?;
    Ok(reach(adj, vertices, root))
}

/// Counts the vertices reachable from `root`.
///
/// Vertices are pushed onto the stack every time they are discovered from a vertex that has not
/// yet been visited; duplicates are discarded when they are popped.
fn reach<'a, V: Hash + Eq>(
    adj: &'a AdjacencyMap<V>,
    vertices: &VertexSet<'a, V>,
    root: &'a V,
) -> usize {
    let mut visited: BitVec = BitVec::repeat(false, vertices.len());
    let mut stack = vec![root];
    let mut reached = 0;

    while let Some(vertex) = stack.pop() {
        // Every vertex pushed comes from the map, so it has a position.
        let Some(position) = vertices.position(vertex) else {
            continue;
        };
        if visited[position] {
            continue;
        }

        visited.set(position, true);
        reached += 1;

        for neighbour in adj.neighbours(vertex) {
            if let Some(p) = vertices.position(neighbour) {
                if !visited[p] {
                    stack.push(neighbour);
                }
            }
        }
    }

    tracing::trace!(reached, total = vertices.len(), "depth-first traversal finished");
    reached
}

/// Error returned by [`is_connected_from`] and [`reachable_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("start vertex is not part of the graph")]
pub struct UnknownVertex;

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::adjacency::build_adjacency;

    #[test]
    fn empty_graph_is_connected() {
        assert!(is_connected(&AdjacencyMap::<u32>::new()));
    }

    #[test]
    fn single_loop_is_connected() {
        assert!(is_connected(&build_adjacency([(0, 0)])));
    }

    #[test]
    fn two_components_are_disconnected() {
        let adj = build_adjacency([(1, 2), (2, 3), (3, 1), (4, 5)]);
        assert!(!is_connected(&adj));
        assert_eq!(reachable_from(&adj, &1), Ok(3));
        assert_eq!(reachable_from(&adj, &4), Ok(2));
    }

    #[test]
    fn isolated_vertex_disconnects() {
        let mut adj = build_adjacency([(1, 2)]);
        adj.add_vertex(3);
        assert!(!is_connected(&adj));

        let mut lone = AdjacencyMap::new();
        lone.add_vertex("a");
        assert!(is_connected(&lone));
    }

    #[test]
    fn neighbour_only_vertices_are_reachable() {
        // 'c' is reached from 'a' but has no list of its own.
        let adj: AdjacencyMap<char> = [('a', vec!['b', 'c']), ('b', vec!['a'])]
            .into_iter()
            .collect();
        assert!(is_connected(&adj));
        assert_eq!(is_connected_from(&adj, &'a'), Ok(true));
        // Nothing leads away from 'c'.
        assert_eq!(is_connected_from(&adj, &'c'), Ok(false));
    }

    #[test]
    fn unknown_root_is_an_error() {
        let adj = build_adjacency([(1, 2)]);
        assert_eq!(is_connected_from(&adj, &3), Err(UnknownVertex));
    }

    #[test]
    fn long_path_does_not_overflow_the_stack() {
        let n = 200_000u32;
        let adj = build_adjacency((0..n).map(|i| (i, i + 1)));
        assert!(is_connected(&adj));
        assert_eq!(reachable_from(&adj, &n), Ok(n as usize + 1));
    }

    fn edge_lists(max_vertex: u8, max_len: usize) -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((0..max_vertex, 0..max_vertex), 0..max_len)
    }

    proptest! {
        #[test]
        fn root_choice_does_not_matter(edges in edge_lists(12, 24)) {
            let adj = build_adjacency(edges);
            let expected = is_connected(&adj);
            for vertex in vertices_of(&adj).iter() {
                prop_assert_eq!(is_connected_from(&adj, vertex), Ok(expected));
            }
        }

        #[test]
        fn joining_two_graphs_with_a_bridge_connects_them(
            left in edge_lists(8, 16),
            right in edge_lists(8, 16),
        ) {
            let left: Vec<(u16, u16)> = std::iter::once((0, 1))
                .chain(left.into_iter().map(|(u, v)| (u as u16, v as u16)))
                .collect();
            let right: Vec<(u16, u16)> = std::iter::once((100, 101))
                .chain(right.into_iter().map(|(u, v)| (u as u16 + 100, v as u16 + 100)))
                .collect();

            let left_adj = build_adjacency(left.iter().copied());
            let right_adj = build_adjacency(right.iter().copied());
            let mut joined = build_adjacency(left.iter().chain(&right).copied());
            prop_assert!(!is_connected(&joined));

            if is_connected(&left_adj) && is_connected(&right_adj) {
                joined.add_edge(0, 100);
                prop_assert!(is_connected(&joined));
            }
        }
    }
}
