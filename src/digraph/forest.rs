// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spanning forests of the strongly connected components.

use super::ActionDigraph;
use std::collections::VecDeque;

/// One spanning tree per SCC, rooted at the SCC root.
///
/// `parent[v]` is `Some((u, label))` for the tree edge used to reach `v`,
/// and `None` at roots. `order` lists every node after its parent.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    pub parent: Vec<Option<(usize, usize)>>,
    pub order: Vec<usize>,
}

impl Forest {
    pub fn is_root(&self, node: usize) -> bool {
        self.parent[node].is_none()
    }
}

impl ActionDigraph {
    /// Trees of edges leading away from each SCC root.
    ///
    /// For a non-root `v`, `parent[v] = (u, label)` with `u -label-> v`.
    pub fn spanning_forest(&mut self) -> Forest {
        self.compute_sccs();
        let mut forest = Forest {
            parent: vec![None; self.nodes],
            order: Vec::with_capacity(self.nodes),
        };
        let mut seen = vec![false; self.nodes];
        let mut queue = VecDeque::new();
        for scc in &self.sccs {
            let root = scc[0];
            let id = self.scc_ids[root];
            seen[root] = true;
            queue.push_back(root);
            while let Some(u) = queue.pop_front() {
                forest.order.push(u);
                for label in 0..self.out_degree {
                    let Some(v) = self.neighbor(u, label) else {
                        continue;
                    };
                    if !seen[v] && self.scc_ids[v] == id {
                        seen[v] = true;
                        forest.parent[v] = Some((u, label));
                        queue.push_back(v);
                    }
                }
            }
        }
        forest
    }

    /// Trees of edges leading towards each SCC root.
    ///
    /// For a non-root `u`, `parent[u] = (v, label)` with `u -label-> v`.
    pub fn reverse_spanning_forest(&mut self) -> Forest {
        self.compute_sccs();
        let mut reverse: Vec<Vec<(usize, usize)>> = vec![Vec::new(); self.nodes];
        for u in 0..self.nodes {
            for label in 0..self.out_degree {
                if let Some(v) = self.neighbor(u, label) {
                    if self.scc_ids[u] == self.scc_ids[v] {
                        reverse[v].push((u, label));
                    }
                }
            }
        }
        let mut forest = Forest {
            parent: vec![None; self.nodes],
            order: Vec::with_capacity(self.nodes),
        };
        let mut seen = vec![false; self.nodes];
        let mut queue = VecDeque::new();
        for scc in &self.sccs {
            let root = scc[0];
            seen[root] = true;
            queue.push_back(root);
            while let Some(v) = queue.pop_front() {
                forest.order.push(v);
                for &(u, label) in &reverse[v] {
                    if !seen[u] {
                        seen[u] = true;
                        forest.parent[u] = Some((v, label));
                        queue.push_back(u);
                    }
                }
            }
        }
        forest
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample;

    #[test]
    fn test_spanning_forest() {
        let mut d = sample();
        let forest = d.spanning_forest();
        assert_eq!(forest.order.len(), 5);
        assert!(forest.is_root(0));
        assert!(forest.is_root(2));
        assert!(forest.is_root(4));
        assert_eq!(forest.parent[1], Some((0, 0)));
        assert_eq!(forest.parent[3], Some((2, 1)));
        for &v in &forest.order {
            if let Some((u, label)) = forest.parent[v] {
                assert_eq!(d.neighbor(u, label), Some(v));
            }
        }
    }

    #[test]
    fn test_reverse_spanning_forest() {
        let mut d = sample();
        let forest = d.reverse_spanning_forest();
        assert_eq!(forest.parent[1], Some((0, 0)));
        assert_eq!(forest.parent[3], Some((2, 0)));
        assert!(forest.is_root(4));
        for &u in &forest.order {
            if let Some((v, label)) = forest.parent[u] {
                assert_eq!(d.neighbor(u, label), Some(v));
                let position = |node| forest.order.iter().position(|&w| w == node);
                assert!(position(v) < position(u));
            }
        }
    }
}
