// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-regular D-classes.
//!
//! A non-regular class has no idempotents, so its tables are built from two
//! idempotents found in regular classes above it: `e` with `rep * e == rep`
//! and `f` with `f * rep == rep`. The H-class of `rep` is
//! `rep * H_e ∩ H_f * rep`, and the coset representatives are found by
//! moving `rep` around with elements of `H_e` and `H_f` and the coset reps
//! of the classes of `e` and `f`, keeping one for each distinct H-class
//! reached.

use crate::adapters::KoniecznyAdapter;
use crate::dclass::{DClass, DClassData, RegularDClass};
use crate::element::group_inverse;
use crate::errors::{KoniecznyError, Result};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct NonRegularDClass<E: KoniecznyAdapter> {
    pub(crate) data: DClassData<E>,
    /// Lambda value -> indices of left reps with that value.
    lambda_positions: HashMap<E::Lambda, Vec<usize>>,
    /// Rho value -> indices of right reps with that value.
    rho_positions: HashMap<E::Rho, Vec<usize>>,
    /// `(e, index of the class of e)`
    left_idem_above: Option<(E, usize)>,
    /// `(f, index of the class of f)`
    right_idem_above: Option<(E, usize)>,
}

/// Elements of the H-class of an idempotent, together with the coset
/// multipliers that moved them there from the representative's H-class.
struct Transported<'a, E: KoniecznyAdapter> {
    class: &'a RegularDClass<E>,
    idem: E,
    /// Left multiplier of the class taking `Lambda(rep)` to `Lambda(idem)`.
    left_mult: E,
    /// Right multiplier of the class taking `Rho(rep)` to `Rho(idem)`.
    right_mult: E,
    h_class: Vec<E>,
}

impl<'a, E: KoniecznyAdapter> Transported<'a, E> {
    fn new(class: &'a RegularDClass<E>, idem: E) -> Result<Self> {
        let (i, j) = class
            .index_positions(&idem)
            .ok_or(KoniecznyError::NoIdempotentAbove)?;
        let left_mult = class.data.left_mults[i].clone();
        let right_mult = class.data.right_mults[j].clone();
        let h_class = class
            .data
            .h_class
            .iter()
            .map(|h| E::product(&E::product(&right_mult, h), &left_mult))
            .collect();
        Ok(Self {
            class,
            idem,
            left_mult,
            right_mult,
            h_class,
        })
    }
}

fn sorted<E: Ord>(mut v: Vec<E>) -> Vec<E> {
    v.sort_unstable();
    v.dedup();
    v
}

impl<E: KoniecznyAdapter> NonRegularDClass<E> {
    pub fn new(rep: E) -> Result<Self> {
        if rep.is_idempotent() {
            return Err(KoniecznyError::UnexpectedIdempotent);
        }
        Ok(Self {
            data: DClassData::new(rep),
            lambda_positions: HashMap::new(),
            rho_positions: HashMap::new(),
            left_idem_above: None,
            right_idem_above: None,
        })
    }

    /// Compute every table from the regular classes found so far.
    ///
    /// `regular` lists the indices into `classes` of the regular classes, in
    /// discovery order; the most recent ones are searched first.
    pub fn init(&mut self, classes: &[DClass<E>], regular: &[usize]) -> Result<()> {
        if self.data.computed {
            return Ok(());
        }
        self.find_idems_above(classes, regular)?;
        let (Some((e, l)), Some((f, r))) = (&self.left_idem_above, &self.right_idem_above)
        else {
            return Err(KoniecznyError::NoIdempotentAbove);
        };
        let (Some(dl), Some(dr)) = (classes[*l].as_regular(), classes[*r].as_regular()) else {
            return Err(KoniecznyError::NoIdempotentAbove);
        };
        let left = Transported::new(dl, e.clone())?;
        let right = Transported::new(dr, f.clone())?;
        self.compute_h_class(&left, &right);
        self.compute_left_reps(&left);
        self.compute_right_reps(&right);
        self.data.computed = true;
        Ok(())
    }

    fn find_idems_above(&mut self, classes: &[DClass<E>], regular: &[usize]) -> Result<()> {
        let rep = &self.data.rep;
        for &idx in regular.iter().rev() {
            if self.left_idem_above.is_some() && self.right_idem_above.is_some() {
                break;
            }
            let Some(d) = classes[idx].as_regular() else {
                continue;
            };
            if self.left_idem_above.is_none() {
                self.left_idem_above = d
                    .left_idem_reps()
                    .iter()
                    .find(|e| E::product(rep, e) == *rep)
                    .map(|e| (e.clone(), idx));
            }
            if self.right_idem_above.is_none() {
                self.right_idem_above = d
                    .right_idem_reps()
                    .iter()
                    .find(|f| E::product(f, rep) == *rep)
                    .map(|f| (f.clone(), idx));
            }
        }
        if self.left_idem_above.is_none() || self.right_idem_above.is_none() {
            return Err(KoniecznyError::NoIdempotentAbove);
        }
        Ok(())
    }

    fn compute_h_class(&mut self, left: &Transported<'_, E>, right: &Transported<'_, E>) {
        let rep = &self.data.rep;
        let x_he = sorted(left.h_class.iter().map(|s| E::product(rep, s)).collect());
        let hf_x = sorted(right.h_class.iter().map(|t| E::product(t, rep)).collect());
        let h_class: Vec<E> = x_he
            .into_iter()
            .filter(|y| hf_x.binary_search(y).is_ok())
            .collect();
        self.data.set_h_class(h_class);
    }

    fn compute_left_reps(&mut self, left: &Transported<'_, E>) {
        let dl = left.class;
        let e = &left.idem;
        // Coset reps of the class of e, moved into the R-class of e.
        let left_reps_of_e: Vec<E> = dl
            .data
            .left_mults
            .iter()
            .map(|b| E::product(&E::product(&left.right_mult, &dl.data.rep), b))
            .collect();

        let mut seen: HashSet<Vec<E>> = HashSet::new();
        for h in &left.h_class {
            for (i, w) in left_reps_of_e.iter().enumerate() {
                let hw = E::product(h, w);
                let h_hw = sorted(
                    self.data
                        .h_class
                        .iter()
                        .map(|s| E::product(s, &hw))
                        .collect(),
                );
                if !seen.insert(h_hw) {
                    continue;
                }
                let back = E::product(&dl.data.left_mults_inv[i], &left.left_mult);
                let inv = E::product(
                    &group_inverse(e, &E::product(w, &back)),
                    &group_inverse(e, h),
                );
                let a = E::product(&self.data.rep, &hw);
                self.lambda_positions
                    .entry(E::lambda(&a))
                    .or_default()
                    .push(self.data.left_reps.len());
                self.data.left_reps.push(a);
                self.data.left_mults.push(hw);
                self.data.left_mults_inv.push(E::product(&back, &inv));
            }
        }
    }

    fn compute_right_reps(&mut self, right: &Transported<'_, E>) {
        let dr = right.class;
        let f = &right.idem;
        // Coset reps of the class of f, moved into the L-class of f.
        let right_reps_of_f: Vec<E> = dr
            .data
            .right_mults
            .iter()
            .map(|c| E::product(&E::product(c, &dr.data.rep), &right.left_mult))
            .collect();

        let mut seen: HashSet<Vec<E>> = HashSet::new();
        for h in &right.h_class {
            for (i, z) in right_reps_of_f.iter().enumerate() {
                let zh = E::product(z, h);
                let zh_h = sorted(
                    self.data
                        .h_class
                        .iter()
                        .map(|s| E::product(&zh, s))
                        .collect(),
                );
                if !seen.insert(zh_h) {
                    continue;
                }
                let back = E::product(&right.right_mult, &dr.data.right_mults_inv[i]);
                let inv = E::product(
                    &group_inverse(f, h),
                    &group_inverse(f, &E::product(&back, z)),
                );
                let b = E::product(&zh, &self.data.rep);
                self.rho_positions
                    .entry(E::rho(&b))
                    .or_default()
                    .push(self.data.right_reps.len());
                self.data.right_reps.push(b);
                self.data.right_mults.push(zh);
                self.data.right_mults_inv.push(E::product(&inv, &back));
            }
        }
    }

    /// Membership for an arbitrary element: some pair of coset
    /// multipliers must move `x` into the H-class of the representative.
    pub fn contains(&self, x: &E) -> bool {
        let (Some(is), Some(js)) = (
            self.lambda_positions.get(&E::lambda(x)),
            self.rho_positions.get(&E::rho(x)),
        ) else {
            return false;
        };
        is.iter()
            .any(|&i| js.iter().any(|&j| self.data.h_class_contains(x, i, j)))
    }

    pub fn rep(&self) -> &E {
        &self.data.rep
    }

    /// The idempotent `e` with `rep * e == rep`.
    pub fn left_idem_above(&self) -> Option<&E> {
        self.left_idem_above.as_ref().map(|(e, _)| e)
    }

    /// The idempotent `f` with `f * rep == rep`.
    pub fn right_idem_above(&self) -> Option<&E> {
        self.right_idem_above.as_ref().map(|(f, _)| f)
    }
}
