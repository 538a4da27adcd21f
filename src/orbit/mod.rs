// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbits of points under a set of generators.
//!
//! An [`Orbit`] is enumerated breadth first from its seeds. Each new point
//! remembers the point and generator it was first reached from, so that
//! [`Orbit::mapper`] can rebuild an element taking the seed to it. After
//! enumeration the action digraph is split into strongly connected
//! components, and for every point the orbit caches elements mapping it to
//! the root of its component and back.

mod action;

pub use action::{Action, Side};

use crate::digraph::{ActionDigraph, Forest};
use crate::element::Element;
use crate::errors::{KoniecznyError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;
use tracing::debug;

pub struct Orbit<E, P, A> {
    degree: usize,
    action: A,
    gens: Vec<E>,
    points: Vec<P>,
    positions: HashMap<P, usize>,
    /// (parent point, generator) for points reached from a seed.
    parents: Vec<Option<(usize, usize)>>,
    digraph: ActionDigraph,
    processed: usize,
    done: bool,
    to_root: Vec<E>,
    from_root: Vec<E>,
    tmp: P,
}

impl<E, P, A> Orbit<E, P, A>
where
    E: Element,
    P: Clone + Eq + Hash + Default,
    A: Action<E, P>,
{
    /// An empty orbit for elements of the given degree.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            action: A::default(),
            gens: Vec::new(),
            points: Vec::new(),
            positions: HashMap::new(),
            parents: Vec::new(),
            digraph: ActionDigraph::new(0),
            processed: 0,
            done: false,
            to_root: Vec::new(),
            from_root: Vec::new(),
            tmp: P::default(),
        }
    }

    /// Add a seed point, returning its index, or `None` if already present.
    pub fn add_seed(&mut self, point: P) -> Option<usize> {
        if self.positions.contains_key(&point) {
            return None;
        }
        let index = self.points.len();
        self.positions.insert(point.clone(), index);
        self.points.push(point);
        self.parents.push(None);
        self.digraph.add_nodes(1);
        self.done = false;
        Some(index)
    }

    /// Add a generator. Every point is rescanned by the next `enumerate`.
    pub fn add_generator(&mut self, x: E) {
        debug_assert_eq!(x.degree(), self.degree);
        self.gens.push(x);
        self.digraph = ActionDigraph::new(self.gens.len());
        self.digraph.add_nodes(self.points.len());
        self.processed = 0;
        self.done = false;
    }

    /// Close the orbit under the generators.
    ///
    /// Points are processed in insertion order, including points found
    /// during this call. Calling it again without new seeds or generators
    /// does nothing.
    pub fn enumerate(&mut self) {
        if self.done {
            return;
        }
        let mut i = self.processed;
        while i < self.points.len() {
            for g in 0..self.gens.len() {
                self.action
                    .act(&mut self.tmp, &self.points[i], &self.gens[g]);
                let j = match self.positions.get(&self.tmp) {
                    Some(&j) => j,
                    None => {
                        let j = self.points.len();
                        self.positions.insert(self.tmp.clone(), j);
                        self.points.push(self.tmp.clone());
                        self.parents.push(Some((i, g)));
                        self.digraph.add_nodes(1);
                        j
                    }
                };
                self.digraph.set_edge(i, g, j);
            }
            i += 1;
        }
        self.processed = i;
        self.compute_multipliers();
        self.done = true;
        debug!(
            points = self.points.len(),
            sccs = self.digraph.number_of_sccs(),
            "orbit enumerated"
        );
    }

    fn compute_multipliers(&mut self) {
        let n = self.points.len();
        let id = E::identity(self.degree);

        let forward: Forest = self.digraph.spanning_forest();
        let mut from_root = vec![id.clone(); n];
        for &v in &forward.order {
            if let Some((u, g)) = forward.parent[v] {
                let m = match <A as Action<E, P>>::SIDE {
                    Side::Right => E::product(&from_root[u], &self.gens[g]),
                    Side::Left => E::product(&self.gens[g], &from_root[u]),
                };
                from_root[v] = m;
            }
        }

        let reverse: Forest = self.digraph.reverse_spanning_forest();
        let mut to_root = vec![id; n];
        for &u in &reverse.order {
            if let Some((v, g)) = reverse.parent[u] {
                let m = match <A as Action<E, P>>::SIDE {
                    Side::Right => E::product(&self.gens[g], &to_root[v]),
                    Side::Left => E::product(&to_root[v], &self.gens[g]),
                };
                to_root[u] = m;
            }
        }

        self.from_root = from_root;
        self.to_root = to_root;
    }

    pub fn position(&self, point: &P) -> Option<usize> {
        self.positions.get(point).copied()
    }

    pub fn at(&self, index: usize) -> Result<&P> {
        self.points
            .get(index)
            .ok_or(KoniecznyError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }

    pub fn generators(&self) -> &[E] {
        &self.gens
    }

    /// Product of the generators labelling the path from a seed to `index`.
    ///
    /// Acting on that seed with the result gives `self[index]`.
    pub fn mapper(&self, index: usize) -> E {
        let mut out = E::identity(self.degree);
        let mut j = index;
        while let Some((parent, g)) = self.parents[j] {
            out = match <A as Action<E, P>>::SIDE {
                Side::Right => E::product(&self.gens[g], &out),
                Side::Left => E::product(&out, &self.gens[g]),
            };
            j = parent;
        }
        out
    }

    /// The action digraph. SCCs are available once enumerated.
    pub fn digraph(&self) -> &ActionDigraph {
        &self.digraph
    }

    /// An element mapping point `index` to the root of its SCC.
    ///
    /// # Panics
    ///
    /// Panics if the orbit has not been enumerated.
    pub fn multiplier_to_scc_root(&self, index: usize) -> &E {
        debug_assert!(self.done);
        &self.to_root[index]
    }

    /// An element mapping the root of the SCC of `index` to point `index`.
    pub fn multiplier_from_scc_root(&self, index: usize) -> &E {
        debug_assert!(self.done);
        &self.from_root[index]
    }

    pub fn scc_id(&self, index: usize) -> usize {
        self.digraph.scc_id(index)
    }

    pub fn scc(&self, id: usize) -> &[usize] {
        self.digraph.scc(id)
    }

    pub fn number_of_sccs(&self) -> usize {
        self.digraph.number_of_sccs()
    }
}

impl<E, P, A> Index<usize> for Orbit<E, P, A> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.points[index]
    }
}
