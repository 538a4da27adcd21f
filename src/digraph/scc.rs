// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gabow's path-based SCC algorithm, with an explicit stack.

use super::ActionDigraph;

const UNVISITED: usize = usize::MAX;

impl ActionDigraph {
    /// Compute the strongly connected components.
    ///
    /// Each component is stored sorted, so its root is the member with the
    /// least index. Does nothing if the components are already known.
    pub fn compute_sccs(&mut self) {
        if self.has_sccs() {
            return;
        }
        let n = self.nodes;
        let mut preorder = vec![UNVISITED; n];
        let mut ids = vec![UNVISITED; n];
        let mut sccs: Vec<Vec<usize>> = Vec::new();
        let mut pending: Vec<usize> = Vec::new();
        let mut boundaries: Vec<usize> = Vec::new();
        // (node, next label to explore)
        let mut frames: Vec<(usize, usize)> = Vec::new();
        let mut counter = 0;

        for start in 0..n {
            if preorder[start] != UNVISITED {
                continue;
            }
            preorder[start] = counter;
            counter += 1;
            pending.push(start);
            boundaries.push(preorder[start]);
            frames.push((start, 0));

            while let Some(frame) = frames.last_mut() {
                let v = frame.0;
                if frame.1 < self.out_degree {
                    let label = frame.1;
                    frame.1 += 1;
                    let Some(w) = self.neighbor(v, label) else {
                        continue;
                    };
                    if preorder[w] == UNVISITED {
                        preorder[w] = counter;
                        counter += 1;
                        pending.push(w);
                        boundaries.push(preorder[w]);
                        frames.push((w, 0));
                    } else if ids[w] == UNVISITED {
                        while boundaries.last().is_some_and(|&b| b > preorder[w]) {
                            boundaries.pop();
                        }
                    }
                } else {
                    frames.pop();
                    if boundaries.last() == Some(&preorder[v]) {
                        boundaries.pop();
                        let id = sccs.len();
                        let mut scc = Vec::new();
                        while let Some(w) = pending.pop() {
                            ids[w] = id;
                            scc.push(w);
                            if w == v {
                                break;
                            }
                        }
                        scc.sort_unstable();
                        sccs.push(scc);
                    }
                }
            }
        }
        debug_assert!(ids.iter().all(|&id| id != UNVISITED));
        self.scc_ids = ids;
        self.sccs = sccs;
    }
}
