// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group-index memo tables (Tier 2: DYNAMIC).
//!
//! A Rho value and a Lambda value are partners when the H-class they
//! describe is a group. These tables remember, for a value on one side and
//! an SCC on the other, the first partner found in that SCC (or that there
//! is none). They fill in as D-classes are built.

use crate::adapters::KoniecznyAdapter;
use crate::context::OrbitMemo;
use crate::statistics::{Counters, Statistics};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct GroupIndices {
    /// (Rho position, Lambda SCC id) -> Lambda position
    lambda_partners: HashMap<(usize, usize), Option<usize>>,
    /// (Rho SCC id, Lambda position) -> Rho position
    rho_partners: HashMap<(usize, usize), Option<usize>>,
}

impl GroupIndices {
    pub fn new() -> Self {
        Self::default()
    }

    /// A position in Lambda SCC `lambda_scc` whose value partners the Rho value at `rho_pos`.
    pub fn lambda_partner<E: KoniecznyAdapter>(
        &mut self,
        memo: &OrbitMemo<E>,
        statistics: &mut Statistics,
        rho_pos: usize,
        lambda_scc: usize,
    ) -> Option<usize> {
        let key = (rho_pos, lambda_scc);
        if let Some(&found) = self.lambda_partners.get(&key) {
            statistics.increment(Counters::GroupIndexHits);
            return found;
        }
        statistics.increment(Counters::GroupIndexMisses);
        let rho = &memo.rho_orb[rho_pos];
        let found = memo
            .lambda_orb
            .scc(lambda_scc)
            .iter()
            .copied()
            .find(|&k| E::is_group_index(rho, &memo.lambda_orb[k]));
        self.lambda_partners.insert(key, found);
        found
    }

    /// A position in Rho SCC `rho_scc` whose value partners the Lambda value at `lambda_pos`.
    pub fn rho_partner<E: KoniecznyAdapter>(
        &mut self,
        memo: &OrbitMemo<E>,
        statistics: &mut Statistics,
        rho_scc: usize,
        lambda_pos: usize,
    ) -> Option<usize> {
        let key = (rho_scc, lambda_pos);
        if let Some(&found) = self.rho_partners.get(&key) {
            statistics.increment(Counters::GroupIndexHits);
            return found;
        }
        statistics.increment(Counters::GroupIndexMisses);
        let lambda = &memo.lambda_orb[lambda_pos];
        let found = memo
            .rho_orb
            .scc(rho_scc)
            .iter()
            .copied()
            .find(|&j| E::is_group_index(&memo.rho_orb[j], lambda));
        self.rho_partners.insert(key, found);
        found
    }

    /// Number of memoised lookups on each side.
    pub fn cached_lookups(&self) -> (usize, usize) {
        (self.lambda_partners.len(), self.rho_partners.len())
    }
}
