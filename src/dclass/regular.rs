// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Regular D-classes.
//!
//! The representative is an idempotent `e`. The L-classes of the class are
//! indexed by the Lambda values in the SCC of `Lambda(e)`, the R-classes by
//! the Rho values in the SCC of `Rho(e)`, and the coset multipliers come
//! straight from the orbit SCC multipliers. The H-class of `e` is a group,
//! generated by Schreier generators built from the left reps.

use crate::adapters::KoniecznyAdapter;
use crate::context::KoniecznyContext;
use crate::dclass::DClassData;
use crate::element::{group_inverse, idempotent_power};
use crate::errors::{KoniecznyError, Result};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct RegularDClass<E: KoniecznyAdapter> {
    pub(crate) data: DClassData<E>,
    /// Orbit positions of the values of the representative.
    lval_pos: usize,
    rval_pos: usize,
    /// Lambda orbit positions of the L-classes.
    left_indices: Vec<usize>,
    /// Rho orbit positions of the R-classes.
    right_indices: Vec<usize>,
    /// For each left index, a Rho position in the class it forms a group with.
    left_partners: Vec<usize>,
    /// For each right index, a Lambda position in the class it forms a group with.
    right_partners: Vec<usize>,
    lambda_positions: HashMap<E::Lambda, usize>,
    rho_positions: HashMap<E::Rho, usize>,
    left_idem_reps: Vec<E>,
    right_idem_reps: Vec<E>,
    h_gens: Vec<E>,
    number_of_idempotents: usize,
}

impl<E: KoniecznyAdapter> RegularDClass<E> {
    pub fn new(idem: E) -> Result<Self> {
        if !idem.is_idempotent() {
            return Err(KoniecznyError::NotIdempotent);
        }
        Ok(Self {
            data: DClassData::new(idem),
            lval_pos: 0,
            rval_pos: 0,
            left_indices: Vec::new(),
            right_indices: Vec::new(),
            left_partners: Vec::new(),
            right_partners: Vec::new(),
            lambda_positions: HashMap::new(),
            rho_positions: HashMap::new(),
            left_idem_reps: Vec::new(),
            right_idem_reps: Vec::new(),
            h_gens: Vec::new(),
            number_of_idempotents: 0,
        })
    }

    /// Compute every table. The orbits in `ctx` must be enumerated and the
    /// representative must lie in the semigroup they were built from.
    pub fn init(&mut self, ctx: &mut KoniecznyContext<E>) -> Result<()> {
        if self.data.computed {
            return Ok(());
        }
        self.compute_indices(ctx)?;
        self.compute_mults(ctx);
        self.compute_idem_reps(ctx);
        self.compute_h_gens(ctx);
        self.compute_h_class();
        self.data.computed = true;
        Ok(())
    }

    fn compute_indices(&mut self, ctx: &mut KoniecznyContext<E>) -> Result<()> {
        let KoniecznyContext {
            memo,
            groups,
            statistics,
        } = ctx;
        let memo = &*memo;
        let lval_pos = memo.lambda_position(&self.data.rep)?;
        let rval_pos = memo.rho_position(&self.data.rep)?;
        let lval_scc = memo.lambda_orb.scc_id(lval_pos);
        let rval_scc = memo.rho_orb.scc_id(rval_pos);

        for &k in memo.lambda_orb.scc(lval_scc) {
            if let Some(j) = groups.rho_partner(memo, statistics, rval_scc, k) {
                self.lambda_positions
                    .insert(memo.lambda_orb[k].clone(), self.left_indices.len());
                self.left_indices.push(k);
                self.left_partners.push(j);
            }
        }
        for &j in memo.rho_orb.scc(rval_scc) {
            if let Some(k) = groups.lambda_partner(memo, statistics, j, lval_scc) {
                self.rho_positions
                    .insert(memo.rho_orb[j].clone(), self.right_indices.len());
                self.right_indices.push(j);
                self.right_partners.push(k);
            }
        }

        debug_assert!(self.left_indices.contains(&lval_pos));
        debug_assert!(self.right_indices.contains(&rval_pos));
        self.lval_pos = lval_pos;
        self.rval_pos = rval_pos;
        Ok(())
    }

    fn compute_mults(&mut self, ctx: &KoniecznyContext<E>) {
        let lambda_orb = &ctx.memo.lambda_orb;
        let rho_orb = &ctx.memo.rho_orb;
        let rep = &self.data.rep;
        let (lval_pos, rval_pos) = (self.lval_pos, self.rval_pos);

        for &k in &self.left_indices {
            let b = E::product(
                lambda_orb.multiplier_to_scc_root(lval_pos),
                lambda_orb.multiplier_from_scc_root(k),
            );
            let c = E::product(
                lambda_orb.multiplier_to_scc_root(k),
                lambda_orb.multiplier_from_scc_root(lval_pos),
            );
            self.data.left_reps.push(E::product(rep, &b));
            self.data.left_mults.push(b);
            self.data.left_mults_inv.push(c);
        }
        for &j in &self.right_indices {
            let c = E::product(
                rho_orb.multiplier_from_scc_root(j),
                rho_orb.multiplier_to_scc_root(rval_pos),
            );
            let d = E::product(
                rho_orb.multiplier_from_scc_root(rval_pos),
                rho_orb.multiplier_to_scc_root(j),
            );
            self.data.right_reps.push(E::product(&c, rep));
            self.data.right_mults.push(c);
            self.data.right_mults_inv.push(d);
        }
    }

    /// One idempotent per L-class and per R-class, and the idempotent count.
    fn compute_idem_reps(&mut self, ctx: &KoniecznyContext<E>) {
        let lambda_orb = &ctx.memo.lambda_orb;
        let rho_orb = &ctx.memo.rho_orb;
        let data = &self.data;

        for (i, &partner) in self.left_partners.iter().enumerate() {
            let j = self.rho_positions[&rho_orb[partner]];
            let x = E::product(
                &E::product(&data.right_mults[j], &data.rep),
                &data.left_mults[i],
            );
            self.left_idem_reps.push(idempotent_power(&x));
        }
        for (j, &partner) in self.right_partners.iter().enumerate() {
            let i = self.lambda_positions[&lambda_orb[partner]];
            let x = E::product(
                &E::product(&data.right_mults[j], &data.rep),
                &data.left_mults[i],
            );
            self.right_idem_reps.push(idempotent_power(&x));
        }

        self.number_of_idempotents = self
            .left_indices
            .iter()
            .map(|&k| {
                self.right_indices
                    .iter()
                    .filter(|&&j| E::is_group_index(&rho_orb[j], &lambda_orb[k]))
                    .count()
            })
            .sum();
    }

    /// Schreier generators of the group H-class of the representative.
    fn compute_h_gens(&mut self, ctx: &KoniecznyContext<E>) {
        let rho_orb = &ctx.memo.rho_orb;
        let data = &self.data;

        // p * right_invs[i] == rep for the left rep p with index i.
        let right_invs: Vec<E> = self
            .left_partners
            .iter()
            .zip(&data.left_reps)
            .map(|(&partner, p)| {
                let q = &data.right_reps[self.rho_positions[&rho_orb[partner]]];
                let y = group_inverse(&data.rep, &E::product(p, q));
                E::product(q, &y)
            })
            .collect();

        let mut h_gens = Vec::new();
        for p in &data.left_reps {
            for g in &ctx.memo.gens {
                let x = E::product(p, g);
                if let Some(&j) = self.lambda_positions.get(&E::lambda(&x)) {
                    h_gens.push(E::product(&x, &right_invs[j]));
                }
            }
        }
        h_gens.sort_unstable();
        h_gens.dedup();
        self.h_gens = h_gens;
    }

    /// Close the Schreier generators under multiplication.
    fn compute_h_class(&mut self) {
        let mut h_class = self.h_gens.clone();
        let mut seen: HashSet<E> = h_class.iter().cloned().collect();
        let mut i = 0;
        while i < h_class.len() {
            for g in &self.h_gens {
                let y = E::product(&h_class[i], g);
                if seen.insert(y.clone()) {
                    h_class.push(y);
                }
            }
            i += 1;
        }
        debug_assert!(seen.contains(&self.data.rep));
        self.data.set_h_class(h_class);
    }

    /// Positions of `x` in the left and right rep lists, by its Lambda and Rho values.
    pub fn index_positions(&self, x: &E) -> Option<(usize, usize)> {
        let i = *self.lambda_positions.get(&E::lambda(x))?;
        let j = *self.rho_positions.get(&E::rho(x))?;
        Some((i, j))
    }

    /// Membership for an element of the semigroup.
    pub fn contains(&self, x: &E) -> bool {
        self.index_positions(x).is_some()
    }

    /// Membership for an arbitrary element.
    pub fn contains_element(&self, x: &E) -> bool {
        self.index_positions(x)
            .is_some_and(|(i, j)| self.data.h_class_contains(x, i, j))
    }

    pub fn rep(&self) -> &E {
        &self.data.rep
    }

    pub fn left_indices(&self) -> &[usize] {
        &self.left_indices
    }

    pub fn right_indices(&self) -> &[usize] {
        &self.right_indices
    }

    pub fn left_idem_reps(&self) -> &[E] {
        &self.left_idem_reps
    }

    pub fn right_idem_reps(&self) -> &[E] {
        &self.right_idem_reps
    }

    pub fn h_gens(&self) -> &[E] {
        &self.h_gens
    }

    pub fn number_of_idempotents(&self) -> usize {
        self.number_of_idempotents
    }
}
