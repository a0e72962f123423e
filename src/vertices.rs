//! The vertex set of an adjacency map.
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::{Copied, FusedIterator};
use std::slice;

use crate::adjacency::AdjacencyMap;

/// Set of all vertices referenced by an [`AdjacencyMap`].
///
/// Each distinct vertex is assigned a dense position in `0..len()`, in the order it was first
/// encountered. The set borrows the vertices from the map it was derived from.
#[derive(Debug, Clone)]
pub struct VertexSet<'a, V> {
    order: Vec<&'a V>,
    positions: HashMap<&'a V, usize>,
}

impl<'a, V: Hash + Eq> VertexSet<'a, V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, vertex: &'a V) {
        if !self.positions.contains_key(vertex) {
            self.positions.insert(vertex, self.order.len());
            self.order.push(vertex);
        }
    }

    /// Returns the dense position of a vertex, if it is in the set.
    #[inline]
    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    /// Whether the set contains a vertex.
    #[inline]
    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }
}

impl<'a, V> VertexSet<'a, V> {
    /// Returns the number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns an arbitrary vertex of the set, or `None` if the set is empty.
    #[inline]
    pub fn first(&self) -> Option<&'a V> {
        self.order.first().copied()
    }

    /// Returns the vertex at a dense position.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&'a V> {
        self.order.get(position).copied()
    }

    /// Iterates over the vertices in position order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, 'a, V> {
        Iter(self.order.iter().copied())
    }
}

/// Derives the set of all vertices mentioned by an adjacency map.
///
/// This is the union of the keys of the map and every vertex appearing in a neighbour sequence,
/// so maps collected from lists whose neighbours are not keys are covered as well.
///
/// # Example
///
/// ```
/// # use eulergraph::{vertices_of, AdjacencyMap};
/// let adj: AdjacencyMap<char> = [('a', vec!['b', 'c']), ('d', vec![])].into_iter().collect();
/// let vertices = vertices_of(&adj);
/// assert_eq!(vertices.len(), 4);
/// assert!(vertices.contains(&'c'));
/// assert!(!vertices.contains(&'e'));
/// ```
pub fn vertices_of<V: Hash + Eq>(adj: &AdjacencyMap<V>) -> VertexSet<'_, V> {
    let mut vertices = VertexSet::with_capacity(adj.vertex_count());
    for (vertex, neighbours) in adj {
        vertices.insert(vertex);
        for neighbour in neighbours {
            vertices.insert(neighbour);
        }
    }
    vertices
}

impl<'s, 'a, V> IntoIterator for &'s VertexSet<'a, V> {
    type Item = &'a V;
    type IntoIter = Iter<'s, 'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator created by [`VertexSet::iter`].
#[derive(Clone)]
pub struct Iter<'s, 'a, V>(Copied<slice::Iter<'s, &'a V>>);

impl<'s, 'a, V> Iterator for Iter<'s, 'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'s, 'a, V> ExactSizeIterator for Iter<'s, 'a, V> {}
impl<'s, 'a, V> FusedIterator for Iter<'s, 'a, V> {}
