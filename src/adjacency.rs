//! Adjacency lists of an undirected graph keyed by vertex.
use std::collections::hash_map::{self, HashMap};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::iter::FusedIterator;

/// Mapping from a vertex to the ordered sequence of its neighbours.
///
/// Every undirected edge `(u, v)` is recorded twice: `v` is appended to the neighbours of `u` and
/// `u` to the neighbours of `v`. A self-loop therefore contributes two entries to the same vertex.
/// Duplicate edges are kept, so the length of a neighbour sequence is the degree of the vertex.
///
/// Vertices that never appear in an edge are not part of the map unless they are registered
/// explicitly with [`AdjacencyMap::add_vertex`]. Maps collected from `(V, Vec<V>)` pairs may
/// refer to neighbours which are not keys themselves.
#[derive(Clone)]
pub struct AdjacencyMap<V> {
    lists: HashMap<V, Vec<V>>,
}

impl<V: Hash + Eq> PartialEq for AdjacencyMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists
    }
}

impl<V: Hash + Eq> Eq for AdjacencyMap<V> {}

impl<V: Debug> Debug for AdjacencyMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.lists.iter()).finish()
    }
}

impl<V> Default for AdjacencyMap<V> {
    fn default() -> Self {
        Self {
            lists: HashMap::new(),
        }
    }
}

impl<V> AdjacencyMap<V> {
    /// Creates a new empty adjacency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices with an entry in the map.
    ///
    /// This does not count vertices that only appear as a neighbour. Use
    /// [`vertices_of`](crate::vertices_of) for the full vertex set.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Whether the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the number of recorded neighbour entries over all vertices.
    ///
    /// For maps built from edges this is twice the number of edges.
    pub fn entry_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Iterates over the vertices with an entry in the map together with their neighbours.
    ///
    /// The iteration order is unspecified.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter(self.lists.iter())
    }
}

impl<V: Hash + Eq> AdjacencyMap<V> {
    /// Builds the adjacency map of an undirected graph from a list of edges.
    ///
    /// # Example
    ///
    /// ```
    /// # use eulergraph::AdjacencyMap;
    /// let adj = AdjacencyMap::from_edges([(1, 2), (2, 3), (3, 3)]);
    /// assert_eq!(adj.neighbours(&2), [1, 3]);
    /// assert_eq!(adj.neighbours(&3), [2, 3, 3]);
    /// assert_eq!(adj.degree(&4), 0);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
        V: Clone,
    {
        let mut adj = Self::new();
        for (u, v) in edges {
            adj.add_edge(u, v);
        }
        adj
    }

    /// Records an undirected edge between `u` and `v`.
    ///
    /// Entries for both endpoints are created on first use.
    pub fn add_edge(&mut self, u: V, v: V)
    where
        V: Clone,
    {
        self.lists.entry(u.clone()).or_default().push(v.clone());
        self.lists.entry(v).or_default().push(u);
    }

    /// Registers a vertex without adding any edges.
    ///
    /// Does nothing when the vertex already has an entry.
    ///
    /// # Example
    ///
    /// ```
    /// # use eulergraph::AdjacencyMap;
    /// let mut adj = AdjacencyMap::from_edges([("a", "b")]);
    /// adj.add_vertex("c");
    /// adj.add_vertex("a");
    /// assert_eq!(adj.vertex_count(), 3);
    /// assert_eq!(adj.neighbours(&"a"), ["b"]);
    /// assert_eq!(adj.neighbours(&"c"), [] as [&str; 0]);
    /// ```
    pub fn add_vertex(&mut self, vertex: V) {
        self.lists.entry(vertex).or_default();
    }

    /// Returns the neighbours of a vertex in insertion order.
    ///
    /// When the vertex has no entry, this method returns an empty slice.
    #[inline]
    pub fn neighbours(&self, vertex: &V) -> &[V] {
        self.lists.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the degree of a vertex, which is zero for vertices without an entry.
    #[inline]
    pub fn degree(&self, vertex: &V) -> usize {
        self.neighbours(vertex).len()
    }

    /// Whether the vertex has an entry in the map.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.lists.contains_key(vertex)
    }
}

/// Builds the adjacency map of an undirected graph from a list of edges.
///
/// Shorthand for [`AdjacencyMap::from_edges`].
pub fn build_adjacency<V, I>(edges: I) -> AdjacencyMap<V>
where
    V: Hash + Eq + Clone,
    I: IntoIterator<Item = (V, V)>,
{
    AdjacencyMap::from_edges(edges)
}

impl<V: Hash + Eq + Clone> FromIterator<(V, V)> for AdjacencyMap<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

impl<V: Hash + Eq + Clone> Extend<(V, V)> for AdjacencyMap<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

/// Collects neighbour lists as they are, without mirroring them.
///
/// Later entries for the same vertex replace earlier ones.
impl<V: Hash + Eq> FromIterator<(V, Vec<V>)> for AdjacencyMap<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(lists: I) -> Self {
        Self {
            lists: lists.into_iter().collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a AdjacencyMap<V> {
    type Item = (&'a V, &'a [V]);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator created by [`AdjacencyMap::iter`].
#[derive(Clone)]
pub struct Iter<'a, V>(hash_map::Iter<'a, V, Vec<V>>);

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a V, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, neighbours) = self.0.next()?;
        Some((vertex, neighbours.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}
impl<'a, V> FusedIterator for Iter<'a, V> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_edges_give_empty_map() {
        let adj = build_adjacency(Vec::<(u8, u8)>::new());
        assert!(adj.is_empty());
        assert_eq!(adj.vertex_count(), 0);
        assert_eq!(adj.entry_count(), 0);
        assert_eq!(adj.iter().count(), 0);
    }

    #[test]
    fn records_both_directions_in_input_order() {
        let adj = build_adjacency([(1, 2), (1, 3), (2, 3), (3, 1)]);

        assert_eq!(adj.neighbours(&1), [2, 3, 3]);
        assert_eq!(adj.neighbours(&2), [1, 3]);
        assert_eq!(adj.neighbours(&3), [1, 2, 1]);
        assert_eq!(adj.entry_count(), 8);
    }

    #[test]
    fn self_loop_counts_twice() {
        let adj = build_adjacency([(7, 7)]);
        assert_eq!(adj.neighbours(&7), [7, 7]);
        assert_eq!(adj.degree(&7), 2);
        assert_eq!(adj.vertex_count(), 1);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let adj = build_adjacency([("a", "b"), ("a", "b"), ("b", "a")]);
        assert_eq!(adj.degree(&"a"), 3);
        assert_eq!(adj.degree(&"b"), 3);
    }

    #[test]
    fn unmentioned_vertices_are_absent() {
        let adj = build_adjacency([(1, 2)]);
        assert!(!adj.contains_vertex(&3));
        assert_eq!(adj.neighbours(&3), [] as [i32; 0]);
        assert_eq!(adj.degree(&3), 0);
    }

    #[test]
    fn collect_and_extend_agree_with_builder() {
        let mut adj: AdjacencyMap<u32> = [(1, 2)].into_iter().collect();
        adj.extend([(2, 3)]);
        assert_eq!(adj, build_adjacency([(1, 2), (2, 3)]));
    }

    #[test]
    fn collect_lists_keeps_dangling_neighbours() {
        let adj: AdjacencyMap<char> = [('a', vec!['b', 'c'])].into_iter().collect();
        assert_eq!(adj.vertex_count(), 1);
        assert!(!adj.contains_vertex(&'b'));
        assert_eq!(adj.degree(&'a'), 2);
    }
}
