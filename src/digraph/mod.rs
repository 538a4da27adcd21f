// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Action digraphs and their strongly connected components.
//!
//! Nodes are orbit points, and the edge `from -label-> to` records that
//! generator `label` maps point `from` to point `to`. Every node has one
//! (possibly missing) out-edge per label.

mod forest;
mod scc;

pub use forest::Forest;

/// A digraph with a fixed out-degree and labelled edges.
#[derive(Debug, Clone, Default)]
pub struct ActionDigraph {
    nodes: usize,
    out_degree: usize,
    edges: Vec<Option<usize>>,
    scc_ids: Vec<usize>,
    sccs: Vec<Vec<usize>>,
}

impl ActionDigraph {
    pub fn new(out_degree: usize) -> Self {
        Self {
            out_degree,
            ..Self::default()
        }
    }

    pub fn add_nodes(&mut self, n: usize) {
        self.nodes += n;
        self.edges.resize(self.nodes * self.out_degree, None);
        self.invalidate();
    }

    pub fn set_edge(&mut self, from: usize, label: usize, to: usize) {
        debug_assert!(label < self.out_degree);
        debug_assert!(to < self.nodes);
        self.edges[from * self.out_degree + label] = Some(to);
        self.invalidate();
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes
    }

    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    pub fn neighbor(&self, from: usize, label: usize) -> Option<usize> {
        self.edges[from * self.out_degree + label]
    }

    /// Has `compute_sccs` run since the last change?
    pub fn has_sccs(&self) -> bool {
        self.scc_ids.len() == self.nodes
    }

    /// Id of the SCC containing `node`.
    ///
    /// # Panics
    ///
    /// Panics if SCCs have not been computed.
    pub fn scc_id(&self, node: usize) -> usize {
        self.scc_ids[node]
    }

    /// Members of SCC `id`, in increasing order.
    pub fn scc(&self, id: usize) -> &[usize] {
        &self.sccs[id]
    }

    /// The member of SCC `id` with the least index.
    pub fn scc_root(&self, id: usize) -> usize {
        self.sccs[id][0]
    }

    pub fn number_of_sccs(&self) -> usize {
        self.sccs.len()
    }

    pub fn sccs(&self) -> impl Iterator<Item = &[usize]> {
        self.sccs.iter().map(Vec::as_slice)
    }

    fn invalidate(&mut self) {
        self.scc_ids.clear();
        self.sccs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 <-> 1 -> 2 <-> 3, 4 -> 4, with two labels.
    pub(super) fn sample() -> ActionDigraph {
        let mut d = ActionDigraph::new(2);
        d.add_nodes(5);
        d.set_edge(0, 0, 1);
        d.set_edge(1, 0, 0);
        d.set_edge(1, 1, 2);
        d.set_edge(2, 1, 3);
        d.set_edge(3, 0, 2);
        d.set_edge(4, 0, 4);
        d
    }

    #[test]
    fn test_edges() {
        let d = sample();
        assert_eq!(d.number_of_nodes(), 5);
        assert_eq!(d.out_degree(), 2);
        assert_eq!(d.neighbor(1, 1), Some(2));
        assert_eq!(d.neighbor(0, 1), None);
        assert!(!d.has_sccs());
    }

    #[test]
    fn test_sccs() {
        let mut d = sample();
        d.compute_sccs();
        assert!(d.has_sccs());
        assert_eq!(d.number_of_sccs(), 3);
        assert_eq!(d.scc_id(0), d.scc_id(1));
        assert_eq!(d.scc_id(2), d.scc_id(3));
        assert_ne!(d.scc_id(1), d.scc_id(2));
        assert_eq!(d.scc(d.scc_id(3)), &[2, 3]);
        assert_eq!(d.scc_root(d.scc_id(3)), 2);
        assert_eq!(d.scc(d.scc_id(4)), &[4]);
        let total: usize = d.sccs().map(<[usize]>::len).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_adding_nodes_invalidates_sccs() {
        let mut d = sample();
        d.compute_sccs();
        d.add_nodes(1);
        assert!(!d.has_sccs());
        d.compute_sccs();
        assert_eq!(d.number_of_sccs(), 4);
    }
}
